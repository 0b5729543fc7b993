pub mod config;
pub mod error;
pub mod types;

pub use config::AdvisoryConfig;
pub use error::{CaddieError, Result};
pub use types::{Grade, HoleNumber, Player};
