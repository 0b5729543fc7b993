use thiserror::Error;

#[derive(Error, Debug)]
pub enum CaddieError {
    #[error("Grade out of range (expected 1-5): {0}")]
    InvalidGrade(u8),

    #[error("Unknown grade letter (expected A, B, C, D or F): {0:?}")]
    UnknownGradeLetter(char),

    #[error("Hole out of range (expected 1-18): {0}")]
    InvalidHole(u8),

    #[error("Handicap out of range (expected 0-54): {0}")]
    InvalidHandicap(u8),

    #[error("Unknown player: {0}")]
    UnknownPlayer(String),

    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    #[error("Invalid course: {}", .0.join("; "))]
    InvalidCourse(Vec<String>),

    #[error("Invalid advisor config: {0}")]
    InvalidConfig(String),

    #[error("Config parse error: {0}")]
    ConfigParse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CaddieError>;
