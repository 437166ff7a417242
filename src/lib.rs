//! The `lifegame` binary's library half: argument handling, session setup and
//! error reporting. The simulation lives in `lifegame_core`, the terminal side
//! in `lifegame_tui`.

pub mod app;
pub mod cli;
pub mod report;

pub use app::{build_screen, run};
pub use cli::Args;
