pub mod shutdown;

pub use shutdown::ShutdownManager;

use anyhow::{Context, Result};
use lifegame_core::config::AppConfig;
use lifegame_core::{BioSquare, DicingGod};
use lifegame_tui::{lensfilter, Screen};
use std::io::{self, BufWriter, Write};

/// Builds a ready-to-play screen from a validated configuration. Nothing is
/// written to `output` until the screen plays.
pub fn build_screen<W: Write>(config: &AppConfig, output: W) -> Result<Screen<W>> {
    config.validate()?;

    let world = &config.world;
    let god = DicingGod::new(world.seed, world.density)?;
    let seed = god.seed();
    let biosquare = BioSquare::new(world.rows, world.cols, Box::new(god))
        .context("creating the world")?;
    let lens = lensfilter::build(&config.lens).context("building the lens filter")?;
    let screen = Screen::from_config(biosquare, lens, output, &config.screen)?;

    tracing::info!(
        rows = world.rows,
        cols = world.cols,
        seed,
        filter = ?config.lens.filter,
        "Session ready"
    );
    Ok(screen)
}

/// Plays one session on stdout until Ctrl+C or the iteration cap.
pub async fn run(config: AppConfig) -> Result<()> {
    let mut screen = build_screen(&config, BufWriter::new(io::stdout()))?;

    let mut shutdown = ShutdownManager::new();
    shutdown.install();
    let interrupt = shutdown.interrupt();

    let result = tokio::task::spawn_blocking(move || screen.play(&interrupt))
        .await
        .context("render loop panicked")?;

    shutdown.uninstall();
    result.context("rendering the world")
}

#[cfg(test)]
mod tests {
    use super::*;
    use lifegame_core::config::FilterKind;
    use lifegame_core::LifeError;
    use lifegame_tui::{Interrupt, ScreenState};

    #[test]
    fn test_build_screen_from_defaults() {
        let mut config = AppConfig::default();
        config.world.seed = Some(1);
        let screen = build_screen(&config, Vec::new()).unwrap();
        assert_eq!(screen.state(), ScreenState::Idle);
        assert!(screen.output().is_empty());
    }

    #[test]
    fn test_build_screen_rejects_negative_dimension() {
        let mut config = AppConfig::default();
        config.world.cols = -2;
        let err = build_screen(&config, Vec::new()).err().unwrap();
        assert!(matches!(
            err.downcast_ref::<LifeError>(),
            Some(LifeError::InvalidDimension { cols: -2, .. })
        ));
    }

    #[test]
    fn test_build_screen_rejects_unknown_color() {
        let mut config = AppConfig::default();
        config.lens.filter = FilterKind::Dye;
        config.lens.color_dead = "chartreuse".to_string();
        let err = build_screen(&config, Vec::new()).err().unwrap();
        assert!(err.chain().any(|cause| matches!(
            cause.downcast_ref::<LifeError>(),
            Some(LifeError::InvalidColorName(_))
        )));
    }

    #[test]
    fn test_built_screen_plays() {
        let mut config = AppConfig::default();
        config.world.seed = Some(5);
        config.screen.iteration_max = Some(2);
        config.screen.fps_max = 1000.0;
        let mut screen = build_screen(&config, Vec::new()).unwrap();
        screen.play(&Interrupt::new()).unwrap();
        assert_eq!(screen.iteration(), 3);
        assert_eq!(screen.frames_rendered(), 4);
    }
}
