//! Terminal presentation for lifegame: lenses, terminal control and the
//! frame-paced render loop.

pub mod lensfilter;
pub mod palette;
pub mod screen;
pub mod signal;
pub mod term;

pub use lensfilter::{LensFilter, Observe, Rows};
pub use palette::Color;
pub use screen::{Screen, ScreenState};
pub use signal::Interrupt;
pub use term::Terminal;
