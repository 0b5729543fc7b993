//! Caddie command pipeline
//!
//! Input line -> parser::parse -> Command -> CommandExecutor -> Outcome

pub mod executor;
pub mod parser;

pub use executor::{CommandExecutor, Outcome};
pub use parser::{parse, Command};
