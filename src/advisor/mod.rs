//! Better-ball advisory engine
//!
//! Architecture: pure functions over a read-only hole snapshot
//! - HoleContext gathers logs, strokes and strength for one hole
//! - Phase picks the branch from how many shots each player has logged
//! - advise() walks the branch and returns a Recommendation with its rule trail

pub mod context;
pub mod engine;
pub mod expected_value;
pub mod explain;
pub mod phase;
pub mod selection;
pub mod streak;

pub use context::HoleContext;
pub use engine::{advise, Recommendation, Tactic};
pub use expected_value::{expected_net_advantage, expected_net_advantage_for, Edge, EvFactors};
pub use explain::{letters, net_targets, Explanation};
pub use phase::{Phase, PhaseKind};
pub use selection::choose_attacker;
pub use streak::bad_streak;
