//! Expected net advantage of attacking over anchoring
//!
//! A small additive heuristic: comfort on the hole, day-2 push, partner
//! safety and strokes on the plus side; bad streak and a missing safety
//! net on the minus side. Positive values favour attacking.

use serde::{Deserialize, Serialize};

use crate::advisor::context::HoleContext;
use crate::core::config::AdvisoryConfig;
use crate::core::types::Player;

/// Inputs to the EV heuristic for one candidate attacker
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvFactors {
    pub strength: f64,
    pub day2_bias: bool,
    pub has_safe_ball: bool,
    pub has_stroke: bool,
    pub bad_streak: usize,
}

impl EvFactors {
    pub fn for_attacker(ctx: &HoleContext<'_>, attacker: Player, has_safe_ball: bool, config: &AdvisoryConfig) -> Self {
        Self {
            strength: ctx.strength(attacker),
            day2_bias: ctx.day2_bias,
            has_safe_ball,
            has_stroke: ctx.strokes(attacker) > 0,
            bad_streak: ctx.bad_streak(attacker, config),
        }
    }
}

/// Attack-minus-anchor value, rounded to two decimals
pub fn expected_net_advantage(factors: &EvFactors, config: &AdvisoryConfig) -> f64 {
    let mut base = factors.strength * config.ev_strength_weight;
    if factors.day2_bias {
        base += config.day2_bonus;
    }
    if factors.has_safe_ball {
        base += config.safe_ball_bonus;
    }
    if factors.has_stroke {
        base += config.stroke_nudge;
    } else {
        base -= config.stroke_nudge;
    }

    let mut risk = config.streak_risk * factors.bad_streak.min(config.streak_risk_cap) as f64;
    if !factors.has_safe_ball {
        risk += config.no_safe_ball_risk;
    }

    round2(base - risk)
}

/// EV for `attacker` on the context's hole
pub fn expected_net_advantage_for(
    ctx: &HoleContext<'_>,
    attacker: Player,
    has_safe_ball: bool,
    config: &AdvisoryConfig,
) -> f64 {
    let factors = EvFactors::for_attacker(ctx, attacker, has_safe_ball, config);
    let ev = expected_net_advantage(&factors, config);
    tracing::debug!(?factors, ev, "EV for {}", ctx.name(attacker));
    ev
}

/// Round to two decimal places on the exact decimal value of `value`.
///
/// Binary floats such as 0.425 sit just below the half-way point, so scaling
/// by 100 and rounding would push them up; formatting does not.
pub fn round2(value: f64) -> f64 {
    let rounded = format!("{:.2}", value).parse::<f64>().unwrap_or(value);
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// How an EV reads once the deadband is applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Edge {
    /// Clearly positive: attacking is worth it
    Attack,
    /// Within +/- deadband: no actionable edge
    Deadband,
    /// Clearly negative
    Anchor,
}

impl Edge {
    pub fn classify(ev: f64, deadband: f64) -> Self {
        if ev > deadband {
            Edge::Attack
        } else if ev >= -deadband {
            Edge::Deadband
        } else {
            Edge::Anchor
        }
    }

    /// Deadband and anchor both downgrade an attack recommendation
    pub fn favors_attack(self) -> bool {
        self == Edge::Attack
    }
}
