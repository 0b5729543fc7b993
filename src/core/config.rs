//! Advisor configuration with documented constants
//!
//! Every threshold and weight the advisory engine uses lives here, so a
//! team can retune the heuristics from `data/caddie.toml` without touching
//! the decision procedure.

use serde::{Deserialize, Serialize};

use crate::core::types::Grade;

/// Tunable constants for the advisory engine
///
/// Defaults reproduce the hand-tuned values the caddie has always shipped
/// with. Changing them shifts how eagerly the engine recommends attacking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvisoryConfig {
    // === GRADE CLASSIFICATION ===
    /// Grades at or above this are a "safe ball" (B or better)
    pub safe_threshold: u8,

    /// Grades at or below this are "trouble" (D or worse)
    ///
    /// Must stay below `safe_threshold`; the grades in between are neutral.
    pub bad_threshold: u8,

    /// Trailing trouble shots that forbid a player from attacking
    pub bad_streak_threshold: usize,

    // === ATTACKER SELECTION ===
    /// Multiplier on the per-hole strength weight when ranking attackers
    pub attacker_strength_weight: f64,

    /// Score deducted per trailing trouble shot when ranking attackers
    pub attacker_streak_penalty: f64,

    // === EXPECTED NET ADVANTAGE ===
    /// Multiplier on the attacker's per-hole strength weight
    pub ev_strength_weight: f64,

    /// Bonus on designated day-2 holes
    pub day2_bonus: f64,

    /// Bonus when the partner already has a safe ball
    pub safe_ball_bonus: f64,

    /// Added when the attacker receives a stroke here, subtracted otherwise
    pub stroke_nudge: f64,

    /// Risk added per trailing trouble shot
    pub streak_risk: f64,

    /// Trailing trouble shots beyond this add no further risk
    pub streak_risk_cap: usize,

    /// Risk added when there is no safe ball to fall back on
    pub no_safe_ball_risk: f64,

    /// EV within +/- this value is "no clear edge" and never justifies attacking
    pub deadband: f64,
}

impl Default for AdvisoryConfig {
    fn default() -> Self {
        Self {
            safe_threshold: 4,
            bad_threshold: 2,
            bad_streak_threshold: 3,

            attacker_strength_weight: 0.6,
            attacker_streak_penalty: 0.4,

            ev_strength_weight: 0.35,
            day2_bonus: 0.25,
            safe_ball_bonus: 0.20,
            stroke_nudge: 0.05,
            streak_risk: 0.15,
            streak_risk_cap: 3,
            no_safe_ball_risk: 0.20,
            deadband: 0.05,
        }
    }
}

impl AdvisoryConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_safe(&self, grade: Grade) -> bool {
        grade.value() >= self.safe_threshold
    }

    pub fn is_trouble(&self, grade: Grade) -> bool {
        grade.value() <= self.bad_threshold
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<(), String> {
        if !(1..=5).contains(&self.bad_threshold) || !(1..=5).contains(&self.safe_threshold) {
            return Err(format!(
                "grade thresholds must be within 1-5 (bad_threshold {}, safe_threshold {})",
                self.bad_threshold, self.safe_threshold
            ));
        }

        if self.bad_threshold >= self.safe_threshold {
            return Err(format!(
                "bad_threshold ({}) should be < safe_threshold ({})",
                self.bad_threshold, self.safe_threshold
            ));
        }

        if self.bad_streak_threshold == 0 || self.streak_risk_cap == 0 {
            return Err("bad_streak_threshold and streak_risk_cap must be at least 1".into());
        }

        let weights = [
            ("attacker_strength_weight", self.attacker_strength_weight),
            ("attacker_streak_penalty", self.attacker_streak_penalty),
            ("ev_strength_weight", self.ev_strength_weight),
            ("day2_bonus", self.day2_bonus),
            ("safe_ball_bonus", self.safe_ball_bonus),
            ("stroke_nudge", self.stroke_nudge),
            ("streak_risk", self.streak_risk),
            ("no_safe_ball_risk", self.no_safe_ball_risk),
            ("deadband", self.deadband),
        ];
        for (name, value) in weights {
            if !value.is_finite() || value < 0.0 {
                return Err(format!("{} must be a non-negative number, got {}", name, value));
            }
        }

        Ok(())
    }
}
