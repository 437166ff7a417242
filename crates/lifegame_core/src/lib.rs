//! # Lifegame Core
//!
//! Simulation engine for Conway's Game of Life on a torus.
//!
//! This crate contains everything that does not touch the terminal:
//! - World initialization from a seeded ChaCha stream
//! - The double-buffered B3/S23 generation update
//! - A stopwatch with bounded checkpoint history for frame pacing
//! - Configuration, error types and logging setup
//!
//! ## Example
//!
//! ```
//! use lifegame_core::biosquare::BioSquare;
//! use lifegame_core::genesis::DicingGod;
//!
//! let god = DicingGod::new(Some(42), 0.35).unwrap();
//! let mut world = BioSquare::new(24, 48, Box::new(god)).unwrap();
//! world.advance();
//! assert_eq!(world.generation(), 1);
//! assert!((0.0..=1.0).contains(&world.population_density()));
//! ```

/// Toroidal world and its generation update
pub mod biosquare;
/// Session configuration loaded from TOML
pub mod config;
/// Error types shared by the workspace
pub mod error;
/// Seeded world creation
pub mod genesis;
/// Tracing subscriber setup
pub mod logging;
/// Stopwatch with bounded checkpoint history
pub mod timer;

pub use biosquare::BioSquare;
pub use error::{LifeError, Result};
pub use genesis::{DicingGod, ResetPolicy, WorldCreator};
pub use lifegame_data::{Generation, Shape};
pub use logging::init_logging;
pub use timer::Timer;
