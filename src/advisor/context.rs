//! The engine's view of the current hole
//!
//! Everything the decision procedure reads for one recommendation: both
//! shot logs, strokes received, per-hole strength and the day-2 bias.

use crate::advisor::streak::bad_streak;
use crate::core::config::AdvisoryConfig;
use crate::core::types::{Grade, HoleNumber, Player};
use crate::course::{strokes_for, Course, Team};

/// Read-only snapshot of one hole for the advisory engine
#[derive(Debug, Clone)]
pub struct HoleContext<'a> {
    pub hole: HoleNumber,
    pub par: u8,
    pub rating: u8,
    pub day2_bias: bool,
    logs: [&'a [Grade]; 2],
    strokes: [u8; 2],
    strength: [f64; 2],
    names: [&'a str; 2],
}

impl<'a> HoleContext<'a> {
    /// Build the context for `hole`; `handicaps` and `logs` are indexed by `Player`
    pub fn new(
        course: &Course,
        team: &'a Team,
        hole: HoleNumber,
        handicaps: [u8; 2],
        logs: [&'a [Grade]; 2],
    ) -> Self {
        let card = course.hole(hole);
        Self {
            hole,
            par: card.par,
            rating: card.rating,
            day2_bias: false,
            logs,
            strokes: handicaps.map(|h| strokes_for(h, card.rating)),
            strength: [
                team.a.strength_on(hole),
                team.b.strength_on(hole),
            ],
            names: [team.a.name.as_str(), team.b.name.as_str()],
        }
    }

    pub fn with_day2_bias(mut self, day2_bias: bool) -> Self {
        self.day2_bias = day2_bias;
        self
    }

    pub fn log(&self, player: Player) -> &'a [Grade] {
        self.logs[player.index()]
    }

    pub fn last_grade(&self, player: Player) -> Option<Grade> {
        self.log(player).last().copied()
    }

    pub fn shots(&self, player: Player) -> usize {
        self.log(player).len()
    }

    pub fn strokes(&self, player: Player) -> u8 {
        self.strokes[player.index()]
    }

    pub fn strength(&self, player: Player) -> f64 {
        self.strength[player.index()]
    }

    pub fn name(&self, player: Player) -> &'a str {
        self.names[player.index()]
    }

    pub fn bad_streak(&self, player: Player, config: &AdvisoryConfig) -> usize {
        bad_streak(self.log(player), config.bad_threshold)
    }
}
