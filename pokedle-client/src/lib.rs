pub mod api;
pub mod config;
pub mod error;
pub mod session;
pub mod terminal;

pub use api::{GuessApi, HttpGuessApi};
pub use config::Config;
pub use error::{ApiError, ConfigError};
pub use session::{GameSession, SubmitOutcome};
