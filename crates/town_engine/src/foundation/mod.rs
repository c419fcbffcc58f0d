//! Foundation module - shared building blocks
//!
//! - `math`: nalgebra aliases and GL-convention matrix builders
//! - `time`: wall-clock frame timing
//! - `logging`: `env_logger` setup and re-exported `log` macros

pub mod logging;
pub mod math;
pub mod time;
