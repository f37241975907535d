#![forbid(unsafe_code)]

pub mod config;
pub mod model;
pub mod navigation;
pub mod scoring;
pub mod time;

pub use config::{CategoryFilter, ConfigError, GameMode, SessionConfig};
pub use navigation::{Direction, Navigation};
pub use scoring::SubmissionOutcome;
pub use time::Clock;
