//! Core type definitions used throughout the codebase

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::error::{CaddieError, Result};

/// Number of holes on a course
pub const HOLES_PER_ROUND: usize = 18;

/// Highest handicap index the allocator supports
pub const MAX_HANDICAP: u8 = 54;

/// One of the two partners in the better-ball team
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Player {
    A,
    B,
}

impl Player {
    pub const ALL: [Player; 2] = [Player::A, Player::B];

    /// The partner of this player
    pub fn other(self) -> Player {
        match self {
            Player::A => Player::B,
            Player::B => Player::A,
        }
    }

    /// Index into per-player arrays (A = 0, B = 1)
    pub fn index(self) -> usize {
        match self {
            Player::A => 0,
            Player::B => 1,
        }
    }
}

/// A shot quality grade, 1 (penalty) through 5 (perfect)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Grade(u8);

impl Grade {
    pub const PERFECT: Grade = Grade(5);
    pub const GOOD: Grade = Grade(4);
    pub const PLAYABLE: Grade = Grade(3);
    pub const TROUBLE: Grade = Grade(2);
    pub const PENALTY: Grade = Grade(1);

    pub fn new(value: u8) -> Result<Self> {
        match value {
            1..=5 => Ok(Self(value)),
            _ => Err(CaddieError::InvalidGrade(value)),
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Parse a letter grade (case-insensitive)
    pub fn from_letter(letter: char) -> Result<Self> {
        match letter.to_ascii_uppercase() {
            'A' => Ok(Grade::PERFECT),
            'B' => Ok(Grade::GOOD),
            'C' => Ok(Grade::PLAYABLE),
            'D' => Ok(Grade::TROUBLE),
            'F' => Ok(Grade::PENALTY),
            _ => Err(CaddieError::UnknownGradeLetter(letter)),
        }
    }

    pub fn letter(self) -> char {
        match self.0 {
            5 => 'A',
            4 => 'B',
            3 => 'C',
            2 => 'D',
            _ => 'F',
        }
    }

    pub fn help(self) -> &'static str {
        match self.0 {
            5 => "Best / Perfect",
            4 => "Good / Green light",
            3 => "Playable / Average",
            2 => "Trouble / Recovery likely",
            _ => "Penalty / Unplayable",
        }
    }

    /// Parse a run of letter grades such as "BDC"; whitespace is ignored
    pub fn parse_letters(letters: &str) -> Result<Vec<Grade>> {
        letters
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(Grade::from_letter)
            .collect()
    }
}

impl TryFrom<u8> for Grade {
    type Error = CaddieError;

    fn try_from(value: u8) -> Result<Self> {
        Grade::new(value)
    }
}

impl From<Grade> for u8 {
    fn from(grade: Grade) -> u8 {
        grade.0
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Hole number on the card, 1 through 18
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct HoleNumber(u8);

impl HoleNumber {
    pub const FIRST: HoleNumber = HoleNumber(1);
    pub const LAST: HoleNumber = HoleNumber(HOLES_PER_ROUND as u8);

    pub fn new(number: u8) -> Result<Self> {
        if (1..=HOLES_PER_ROUND as u8).contains(&number) {
            Ok(Self(number))
        } else {
            Err(CaddieError::InvalidHole(number))
        }
    }

    pub fn number(self) -> u8 {
        self.0
    }

    /// Zero-based index into 18-entry course arrays
    pub fn index(self) -> usize {
        (self.0 - 1) as usize
    }

    /// Next hole, staying on 18
    pub fn next(self) -> Self {
        Self((self.0 + 1).min(HOLES_PER_ROUND as u8))
    }

    /// Previous hole, staying on 1
    pub fn prev(self) -> Self {
        Self((self.0 - 1).max(1))
    }

    pub fn all() -> impl Iterator<Item = HoleNumber> {
        (1..=HOLES_PER_ROUND as u8).map(HoleNumber)
    }
}

impl TryFrom<u8> for HoleNumber {
    type Error = CaddieError;

    fn try_from(number: u8) -> Result<Self> {
        HoleNumber::new(number)
    }
}

impl From<HoleNumber> for u8 {
    fn from(hole: HoleNumber) -> u8 {
        hole.0
    }
}

impl fmt::Display for HoleNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validate a handicap index against the supported range
pub fn check_handicap(handicap: u8) -> Result<u8> {
    if handicap <= MAX_HANDICAP {
        Ok(handicap)
    } else {
        Err(CaddieError::InvalidHandicap(handicap))
    }
}
