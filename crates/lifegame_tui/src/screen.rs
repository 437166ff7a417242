//! The render loop: draw a frame, advance the world, wait out the frame budget.

use crate::lensfilter::{LensFilter, Observe};
use crate::signal::Interrupt;
use crate::term::Terminal;
use crossterm::style::Stylize;
use lifegame_core::config::{validate_fps_max, ScreenConfig, StyleConfig};
use lifegame_core::timer::{Timer, NANOS_PER_SEC};
use lifegame_core::{BioSquare, LifeError, Result};
use std::io::Write;

const EXIT_MESSAGE: &str = "GAME OVER";

/// Lifecycle of a [`Screen`]. Only an idle screen can play, and a stopped one
/// stays stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenState {
    Idle,
    Running,
    Stopping,
    Stopped,
}

pub struct Screen<W: Write> {
    biosquare: BioSquare,
    lens: Box<dyn LensFilter>,
    terminal: Terminal<W>,
    timer: Timer,
    iterno: u64,
    iterno_max: Option<u64>,
    fps_max: f64,
    show_stats: bool,
    style: StyleConfig,
    state: ScreenState,
    frames: u64,
}

impl<W: Write> Screen<W> {
    pub fn new(
        biosquare: BioSquare,
        lens: Box<dyn LensFilter>,
        output: W,
        fps_max: f64,
    ) -> Result<Self> {
        validate_fps_max(fps_max)?;
        Ok(Self {
            biosquare,
            lens,
            terminal: Terminal::new(output),
            timer: Timer::new(),
            iterno: 0,
            iterno_max: None,
            fps_max,
            show_stats: true,
            style: StyleConfig::default(),
            state: ScreenState::Idle,
            frames: 0,
        })
    }

    pub fn from_config(
        biosquare: BioSquare,
        lens: Box<dyn LensFilter>,
        output: W,
        config: &ScreenConfig,
    ) -> Result<Self> {
        Ok(Self::new(biosquare, lens, output, config.fps_max)?
            .with_iteration_max(config.iteration_max)
            .with_stats(config.show_stats)
            .with_style(config.style))
    }

    /// Stop once the iteration counter exceeds `max`. `None` runs until
    /// interrupted.
    pub fn with_iteration_max(mut self, max: Option<u64>) -> Self {
        self.iterno_max = max;
        self
    }

    pub fn with_stats(mut self, show: bool) -> Self {
        self.show_stats = show;
        self
    }

    pub fn with_style(mut self, style: StyleConfig) -> Self {
        self.style = style;
        self
    }

    pub fn iteration(&self) -> u64 {
        self.iterno
    }

    pub fn frames_rendered(&self) -> u64 {
        self.frames
    }

    pub fn state(&self) -> ScreenState {
        self.state
    }

    pub fn biosquare(&self) -> &BioSquare {
        &self.biosquare
    }

    pub fn output(&self) -> &W {
        self.terminal.output()
    }

    /// Runs the loop until `interrupt` fires or the iteration cap is passed,
    /// then draws a final frame with the exit banner.
    ///
    /// Any write failure ends the session with an error; the cursor is shown
    /// again either way.
    pub fn play(&mut self, interrupt: &Interrupt) -> Result<()> {
        if self.state != ScreenState::Idle {
            return Err(LifeError::InvalidState("a screen can only play once"));
        }
        self.state = ScreenState::Running;
        tracing::info!(
            shape = ?self.biosquare.shape(),
            fps_max = self.fps_max,
            iteration_max = ?self.iterno_max,
            "Starting render loop"
        );

        let result = self.run(interrupt);
        self.state = ScreenState::Stopping;
        let result = result
            .and_then(|()| self.display(true))
            .and_then(|()| self.terminal.exit().map_err(LifeError::from));
        self.state = ScreenState::Stopped;

        let runtime = self.timer.check_fmt(false);
        tracing::info!(
            iterations = self.iterno,
            frames = self.frames,
            %runtime,
            "Render loop stopped"
        );
        result
    }

    fn run(&mut self, interrupt: &Interrupt) -> Result<()> {
        let frame_duration_min = NANOS_PER_SEC as f64 / self.fps_max;

        self.terminal.init()?;
        self.timer.reset();

        while !interrupt.is_triggered() {
            if let Some(iterno_max) = self.iterno_max {
                if self.iterno > iterno_max {
                    break;
                }
            }

            let start = self.timer.check(false);
            self.display(false)?;
            self.biosquare.advance();
            self.iterno += 1;

            while ((self.timer.check(false) - start) as f64) < frame_duration_min {
                if interrupt.is_triggered() {
                    break;
                }
                std::hint::spin_loop();
            }
            let frame_ns = self.timer.check(false) - start;
            tracing::debug!(iteration = self.iterno, frame_ns, "Frame");
        }

        if interrupt.is_triggered() {
            tracing::info!(iteration = self.iterno, "Stopping on interrupt");
        }
        Ok(())
    }

    fn display(&mut self, is_last_frame: bool) -> Result<()> {
        let frame = self.render(is_last_frame);
        self.terminal.draw(frame)?;
        self.frames += 1;
        Ok(())
    }

    /// Every line of the next frame, margins included.
    pub fn render(&mut self, is_last_frame: bool) -> Vec<String> {
        let mut rows: Vec<String> = self.biosquare.observe(self.lens.as_ref()).collect();

        if self.show_stats {
            rows.extend(self.separator());
            rows.extend(self.stats());
        }
        if is_last_frame {
            rows.extend(self.separator());
            rows.push(EXIT_MESSAGE.bold().green().to_string());
        }

        let margin = " ".repeat(self.style.x_offset);
        std::iter::repeat(String::new())
            .take(self.style.y_offset)
            .chain(rows.into_iter().map(|row| format!("{margin}{row}")))
            .collect()
    }

    fn separator(&self) -> impl Iterator<Item = String> {
        std::iter::repeat(String::new()).take(self.style.section_sep)
    }

    /// Frames per second implied by the time since the previous frame.
    pub fn fps(&mut self) -> f64 {
        let delta = self.timer.check_delta(false);
        if delta == 0 {
            f64::INFINITY
        } else {
            NANOS_PER_SEC as f64 / delta as f64
        }
    }

    fn stats(&mut self) -> Vec<String> {
        let density = self.biosquare.population_density();
        let population = self.biosquare.population();
        let fps = self.fps();
        let runtime = self.timer.check_fmt(true);

        [
            ("Iteration", self.iterno.to_string()),
            ("Population", population.to_string()),
            ("Population Density", format!("{:.2} %", density * 100.0)),
            ("FPS", format!("{fps:.2}")),
            ("Runtime", runtime),
        ]
        .into_iter()
        .map(|(label, value)| self.measurement_fmt(label, &value))
        .collect()
    }

    /// Labels and values should stay ASCII-width or the columns drift.
    fn measurement_fmt(&self, label: &str, value: &str) -> String {
        let label_width = self.style.label_width;
        let value_width = self.style.value_width;
        let label = format!("{label:<label_width$}");
        format!("{}{value:>value_width$}", label.bold())
    }
}
