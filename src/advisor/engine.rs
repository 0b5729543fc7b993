//! Advisory engine - walks the hole phases and produces a recommendation
//!
//! The engine is a pure function of a [`HoleContext`] and an
//! [`AdvisoryConfig`]: same inputs, same text, EV, attacker and rule trail.
//! Bad-streak warnings are always evaluated first, then exactly one phase
//! branch runs.

use serde::{Deserialize, Serialize};

use crate::advisor::context::HoleContext;
use crate::advisor::expected_value::{expected_net_advantage_for, Edge};
use crate::advisor::phase::{Phase, PhaseKind};
use crate::advisor::selection::choose_attacker;
use crate::core::config::AdvisoryConfig;
use crate::core::types::{Grade, Player};

/// Tactical line the engine settled on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tactic {
    /// Pre-tee: one player puts a ball in play first
    TeeOrder,
    /// Go at the flag
    Attack,
    /// Moderate risk toward the best angle
    MediumRisk,
    /// Attack downgraded to a controlled target
    Controlled,
    /// Conservative line, favour the fairway or centre
    Conservative,
    /// Partner in trouble: play to the safest target
    Anchor,
    /// Nobody safe: advance and protect bogey
    DamageControl,
}

/// Output of one engine run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub text: String,
    /// Explanation strings in evaluation order
    pub rules_fired: Vec<String>,
    pub expected_net_advantage: f64,
    pub recommended_attacker: Option<Player>,
    pub phase: PhaseKind,
    pub tactic: Tactic,
    /// Set only before anyone has teed off
    pub tee_first: Option<Player>,
}

/// Run the decision procedure for the context's hole
pub fn advise(ctx: &HoleContext<'_>, config: &AdvisoryConfig) -> Recommendation {
    let mut engine = Engine {
        ctx,
        config,
        rules: Vec::new(),
    };
    engine.streak_warnings();

    let phase = Phase::classify(ctx.log(Player::A), ctx.log(Player::B));
    tracing::debug!(
        "Hole {}: {:?} with {} and {} shots",
        ctx.hole,
        phase.kind(),
        ctx.shots(Player::A),
        ctx.shots(Player::B)
    );

    let outcome = match phase {
        Phase::PreTee => engine.pre_tee(),
        Phase::OneShot { player, grade } => engine.one_shot(player, grade),
        Phase::BothTeed { a, b } => engine.both_teed(a, b),
        Phase::Approach { a_last, b_last } => engine.approach(a_last, b_last),
    };

    Recommendation {
        text: outcome.text,
        rules_fired: engine.rules,
        expected_net_advantage: outcome.ev,
        recommended_attacker: outcome.attacker,
        phase: phase.kind(),
        tactic: outcome.tactic,
        tee_first: outcome.tee_first,
    }
}

struct Outcome {
    text: String,
    tactic: Tactic,
    ev: f64,
    attacker: Option<Player>,
    tee_first: Option<Player>,
}

impl Outcome {
    fn new(text: String, tactic: Tactic, ev: f64, attacker: Option<Player>) -> Self {
        Self {
            text,
            tactic,
            ev,
            attacker,
            tee_first: None,
        }
    }
}

struct Engine<'c, 'a> {
    ctx: &'c HoleContext<'a>,
    config: &'c AdvisoryConfig,
    rules: Vec<String>,
}

impl Engine<'_, '_> {
    fn name(&self, player: Player) -> &str {
        self.ctx.name(player)
    }

    fn is_safe(&self, grade: Grade) -> bool {
        self.config.is_safe(grade)
    }

    fn is_trouble(&self, grade: Grade) -> bool {
        self.config.is_trouble(grade)
    }

    fn streaking(&self, player: Player) -> bool {
        self.ctx.bad_streak(player, self.config) >= self.config.bad_streak_threshold
    }

    fn streak_warnings(&mut self) {
        for player in Player::ALL {
            let run = self.ctx.bad_streak(player, self.config);
            if run >= self.config.bad_streak_threshold {
                let name = self.name(player).to_string();
                self.rules.push(format!(
                    "{} bad streak: {} (≥{}) → {} should NOT attack.",
                    name, run, self.config.bad_streak_threshold, name
                ));
            }
        }
    }

    fn ev(&mut self, attacker: Player, has_safe_ball: bool) -> (f64, Edge) {
        let ev = expected_net_advantage_for(self.ctx, attacker, has_safe_ball, self.config);
        let edge = Edge::classify(ev, self.config.deadband);
        if ev > 0.0 && edge == Edge::Deadband {
            self.rules.push(format!(
                "EV {:+.2} inside deadband (±{:.2}) → no clear edge.",
                ev, self.config.deadband
            ));
        }
        (ev, edge)
    }

    /// Push the downgrade rule and report whether the attack is off
    fn downgrade(&mut self, attacker: Player, edge: Edge, check_streak: bool) -> bool {
        let streak = check_streak && self.streaking(attacker);
        let no_edge = !edge.favors_attack();
        if streak || no_edge {
            let reason = match (streak, no_edge) {
                (true, true) => "bad streak and no EV edge",
                (true, false) => "bad streak",
                _ => "no EV edge",
            };
            let name = self.name(attacker).to_string();
            self.rules
                .push(format!("{} attack downgraded ({}).", name, reason));
        }
        streak || no_edge
    }

    fn safe_label(&self) -> String {
        threshold_label(self.config.safe_threshold)
    }

    fn trouble_label(&self) -> String {
        threshold_label(self.config.bad_threshold)
    }

    /// " (bogey is net par or better for X ...)" for the player with most strokes here
    fn bogey_note(&self) -> String {
        let best = if self.ctx.strokes(Player::A) >= self.ctx.strokes(Player::B) {
            Player::A
        } else {
            Player::B
        };
        if self.ctx.strokes(best) == 0 {
            return String::new();
        }
        format!(
            " (bogey is net par or better for {} on this stroke hole)",
            self.name(best)
        )
    }

    fn pre_tee(&mut self) -> Outcome {
        let (a, b) = (Player::A, Player::B);
        let (sa, sb) = (self.ctx.strokes(a), self.ctx.strokes(b));
        let (wa, wb) = (self.ctx.strength(a), self.ctx.strength(b));

        let (first, rule) = if sa != sb {
            let first = if sa > sb { a } else { b };
            let (more, fewer) = (sa.max(sb), sa.min(sb));
            (
                first,
                format!(
                    "Tee order: {} receives more strokes ({} vs {}) → {} tees first.",
                    self.name(first),
                    more,
                    fewer,
                    self.name(first)
                ),
            )
        } else if wa != wb {
            let first = if wa > wb { a } else { b };
            let (high, low) = (wa.max(wb), wa.min(wb));
            (
                first,
                format!(
                    "Tee order: strokes level; {} is stronger here ({:.2} vs {:.2}) → {} tees first.",
                    self.name(first),
                    high,
                    low,
                    self.name(first)
                ),
            )
        } else {
            (
                a,
                format!(
                    "Tee order: strokes and strength level → {} tees first by convention.",
                    self.name(a)
                ),
            )
        };
        self.rules.push(rule);

        let text = format!(
            "{} tees first. First player: put a ball in play. Partner adjusts based on result.",
            self.name(first)
        );
        Outcome {
            tee_first: Some(first),
            ..Outcome::new(text, Tactic::TeeOrder, 0.0, None)
        }
    }

    fn one_shot(&mut self, first: Player, grade: Grade) -> Outcome {
        let other = first.other();
        let first_name = self.name(first).to_string();
        let other_name = self.name(other).to_string();

        if self.is_safe(grade) {
            self.rules
                .push(format!("{} safe (≥{}).", first_name, self.safe_label()));
            let (ev, edge) = self.ev(other, true);
            if self.downgrade(other, edge, true) {
                return Outcome::new(
                    format!("{} is safe. {}: controlled target; no hero shots.", first_name, other_name),
                    Tactic::Controlled,
                    ev,
                    Some(other),
                );
            }
            return Outcome::new(
                format!("{} is safe. {}: ATTACK for a birdie look.", first_name, other_name),
                Tactic::Attack,
                ev,
                Some(other),
            );
        }

        if self.is_trouble(grade) {
            self.rules
                .push(format!("{} in trouble (≤{}).", first_name, self.trouble_label()));
            return Outcome::new(
                format!(
                    "{} is in trouble. {}: ANCHOR (fairway finder; center green).",
                    first_name, other_name
                ),
                Tactic::Anchor,
                0.0,
                None,
            );
        }

        self.rules
            .push(format!("{} average ({}).", first_name, grade.letter()));
        let (ev, edge) = self.ev(other, false);
        if self.downgrade(other, edge, false) {
            return Outcome::new(
                format!(
                    "{} is average. {}: conservative line; favor fairway/center.",
                    first_name, other_name
                ),
                Tactic::Conservative,
                ev,
                Some(other),
            );
        }
        Outcome::new(
            format!(
                "{} is average. {}: medium risk line toward best angle.",
                first_name, other_name
            ),
            Tactic::MediumRisk,
            ev,
            Some(other),
        )
    }

    fn both_teed(&mut self, a: Grade, b: Grade) -> Outcome {
        if self.is_safe(a) || self.is_safe(b) {
            self.rules.push("At least one safe tee ball.".to_string());
            let attacker = choose_attacker(self.ctx, Some(a), Some(b), self.config);
            let partner = attacker.other();
            let (ev, edge) = self.ev(attacker, true);
            let (att, par) = (self.name(attacker).to_string(), self.name(partner).to_string());
            if self.downgrade(attacker, edge, true) {
                return Outcome::new(
                    format!(
                        "Team has a safe ball. {}: controlled target. {}: secure easy two-putt.",
                        att, par
                    ),
                    Tactic::Controlled,
                    ev,
                    Some(attacker),
                );
            }
            return Outcome::new(
                format!("Team has a safe ball. {}: ATTACK. {}: play for easy two-putt.", att, par),
                Tactic::Attack,
                ev,
                Some(attacker),
            );
        }

        if self.is_trouble(a) && self.is_trouble(b) {
            let better = if a >= b { Player::A } else { Player::B };
            self.rules.push("Both tee balls in trouble.".to_string());
            return Outcome::new(
                format!(
                    "Both in trouble. Play from {}'s better lie. Advance safely; protect bogey{}.",
                    self.name(better),
                    self.bogey_note()
                ),
                Tactic::DamageControl,
                0.0,
                None,
            );
        }

        self.rules
            .push("Mixed tee outcomes; attacker chosen by grades + hole strength.".to_string());
        let attacker = choose_attacker(self.ctx, Some(a), Some(b), self.config);
        let (ev, edge) = self.ev(attacker, false);
        let att = self.name(attacker).to_string();
        if self.downgrade(attacker, edge, false) {
            return Outcome::new(
                format!(
                    "Mixed results. Favor {}'s lie but avoid high-risk lines; set up inside-15-ft if easy.",
                    att
                ),
                Tactic::Conservative,
                ev,
                Some(attacker),
            );
        }
        Outcome::new(
            format!("Mixed results. Favor {}'s lie; attacker aims for inside-15-ft.", att),
            Tactic::Attack,
            ev,
            Some(attacker),
        )
    }

    fn approach(&mut self, a_last: Option<Grade>, b_last: Option<Grade>) -> Outcome {
        let a_safe = a_last.map_or(false, |g| self.is_safe(g));
        let b_safe = b_last.map_or(false, |g| self.is_safe(g));

        match (a_safe, b_safe) {
            (true, false) => self.one_safe(Player::A),
            (false, true) => self.one_safe(Player::B),
            (true, true) => {
                self.rules.push("Both safe.".to_string());
                let attacker = choose_attacker(self.ctx, a_last, b_last, self.config);
                let (ev, edge) = self.ev(attacker, true);
                if self.downgrade(attacker, edge, false) {
                    return Outcome::new(
                        "Both are safe. Choose best birdie look; both play controlled lines."
                            .to_string(),
                        Tactic::Controlled,
                        ev,
                        Some(attacker),
                    );
                }
                Outcome::new(
                    format!(
                        "Both are safe. Choose best birdie look; {} goes flag-hunting, {} locks in par.",
                        self.name(attacker),
                        self.name(attacker.other())
                    ),
                    Tactic::Attack,
                    ev,
                    Some(attacker),
                )
            }
            (false, false) => {
                self.rules
                    .push("No one safe yet → damage-control bias.".to_string());
                Outcome::new(
                    format!(
                        "Neither is safe yet. Advance to comfortable yardage; protect bogey{}.",
                        self.bogey_note()
                    ),
                    Tactic::DamageControl,
                    0.0,
                    None,
                )
            }
        }
    }

    /// Approach phase with exactly one safe ball: the other player may attack
    fn one_safe(&mut self, safe: Player) -> Outcome {
        let attacker = safe.other();
        let safe_name = self.name(safe).to_string();
        let att = self.name(attacker).to_string();
        self.rules
            .push(format!("{} safe; {} not safe.", safe_name, att));

        let (ev, edge) = self.ev(attacker, true);
        let streak = self.streaking(attacker);
        if self.downgrade(attacker, edge, true) {
            let text = if streak {
                format!(
                    "{} is safe. {}: stop chasing par; advance to comfortable yardage; avoid hazards.",
                    safe_name, att
                )
            } else {
                format!(
                    "{} is safe. {}: smart, center-green target. {}: avoid short-siding.",
                    safe_name, att, safe_name
                )
            };
            return Outcome::new(text, Tactic::Controlled, ev, Some(attacker));
        }
        Outcome::new(
            format!(
                "{} is safe. {}: ATTACK pin if angle allows. {}: play to easy two-putt; avoid short-siding.",
                safe_name, att, safe_name
            ),
            Tactic::Attack,
            ev,
            Some(attacker),
        )
    }
}

fn threshold_label(value: u8) -> String {
    Grade::new(value)
        .map(|g| g.letter().to_string())
        .unwrap_or_else(|_| value.to_string())
}
