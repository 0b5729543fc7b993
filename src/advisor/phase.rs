//! Hole phases keyed on how many shots each player has logged
//!
//! - PreTee: nobody has hit
//! - OneShot: exactly one tee shot is in
//! - BothTeed: each player has exactly one shot
//! - Approach: everything else (three or more shots, or uneven counts)

use serde::{Deserialize, Serialize};

use crate::core::types::{Grade, Player};

/// Which branch of the decision procedure applies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PhaseKind {
    PreTee,
    OneShot,
    BothTeed,
    Approach,
}

/// Phase plus the shots the branch needs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    PreTee,
    OneShot { player: Player, grade: Grade },
    BothTeed { a: Grade, b: Grade },
    Approach { a_last: Option<Grade>, b_last: Option<Grade> },
}

impl Phase {
    /// Classify the hole from both logs. Every pair of lengths maps to exactly one phase.
    pub fn classify(a: &[Grade], b: &[Grade]) -> Phase {
        match (a, b) {
            ([], []) => Phase::PreTee,
            ([grade], []) => Phase::OneShot {
                player: Player::A,
                grade: *grade,
            },
            ([], [grade]) => Phase::OneShot {
                player: Player::B,
                grade: *grade,
            },
            ([a], [b]) => Phase::BothTeed { a: *a, b: *b },
            _ => Phase::Approach {
                a_last: a.last().copied(),
                b_last: b.last().copied(),
            },
        }
    }

    pub fn kind(&self) -> PhaseKind {
        match self {
            Phase::PreTee => PhaseKind::PreTee,
            Phase::OneShot { .. } => PhaseKind::OneShot,
            Phase::BothTeed { .. } => PhaseKind::BothTeed,
            Phase::Approach { .. } => PhaseKind::Approach,
        }
    }
}
