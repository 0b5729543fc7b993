//! Round session - owner of the per-hole shot logs and round controls
//!
//! Shot logs only grow by `record` and only shrink by `reset_hole`. The
//! engine reads them through a `HoleContext` built for the current hole.

use std::collections::BTreeSet;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::advisor::{advise, Explanation, HoleContext, Recommendation};
use crate::core::error::Result;
use crate::core::types::{check_handicap, Grade, HoleNumber, Player};
use crate::course::{CaddieConfig, Team};

/// Grades one player has logged on one hole, oldest first
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShotLog {
    grades: Vec<Grade>,
}

impl ShotLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn grades(&self) -> &[Grade] {
        &self.grades
    }

    pub fn len(&self) -> usize {
        self.grades.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grades.is_empty()
    }

    pub fn last(&self) -> Option<Grade> {
        self.grades.last().copied()
    }

    fn push(&mut self, grade: Grade) {
        self.grades.push(grade);
    }

    fn clear(&mut self) {
        self.grades.clear();
    }
}

/// Live state of a round: where we are and what has been hit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundSession {
    hole: HoleNumber,
    handicaps: [u8; 2],
    day2: bool,
    improve: BTreeSet<HoleNumber>,
    logs: AHashMap<HoleNumber, [ShotLog; 2]>,
}

impl RoundSession {
    /// Start on hole 1 with the team's configured handicaps
    pub fn new(team: &Team) -> Self {
        Self {
            hole: HoleNumber::FIRST,
            handicaps: [team.a.handicap, team.b.handicap],
            day2: false,
            improve: BTreeSet::new(),
            logs: AHashMap::new(),
        }
    }

    pub fn hole(&self) -> HoleNumber {
        self.hole
    }

    pub fn handicap(&self, player: Player) -> u8 {
        self.handicaps[player.index()]
    }

    pub fn day2(&self) -> bool {
        self.day2
    }

    pub fn improve_holes(&self) -> Vec<HoleNumber> {
        self.improve.iter().copied().collect()
    }

    /// Day-2 bias applies only on holes marked for improvement
    pub fn day2_bias(&self) -> bool {
        self.day2 && self.improve.contains(&self.hole)
    }

    pub fn log(&self, player: Player, hole: HoleNumber) -> &[Grade] {
        self.logs
            .get(&hole)
            .map(|logs| logs[player.index()].grades())
            .unwrap_or(&[])
    }

    /// Log for the current hole
    pub fn current_log(&self, player: Player) -> &[Grade] {
        self.log(player, self.hole)
    }

    /// Append a shot grade to the current hole
    pub fn record(&mut self, player: Player, grade: Grade) {
        let logs = self.logs.entry(self.hole).or_default();
        logs[player.index()].push(grade);
        tracing::debug!(
            "Hole {}: {:?} logged {} ({} shots)",
            self.hole,
            player,
            grade,
            logs[player.index()].len()
        );
    }

    /// Clear both players' logs for `hole`
    pub fn reset_hole(&mut self, hole: HoleNumber) {
        if let Some(logs) = self.logs.get_mut(&hole) {
            logs.iter_mut().for_each(ShotLog::clear);
        }
        tracing::debug!("Hole {} reset", hole);
    }

    pub fn set_hole(&mut self, hole: HoleNumber) {
        self.hole = hole;
    }

    pub fn next_hole(&mut self) -> HoleNumber {
        self.hole = self.hole.next();
        self.hole
    }

    pub fn prev_hole(&mut self) -> HoleNumber {
        self.hole = self.hole.prev();
        self.hole
    }

    pub fn set_handicap(&mut self, player: Player, handicap: u8) -> Result<()> {
        self.handicaps[player.index()] = check_handicap(handicap)?;
        Ok(())
    }

    pub fn set_day2(&mut self, on: bool) {
        self.day2 = on;
    }

    /// Flip a hole in or out of the improve list; returns true if it is now in
    pub fn toggle_improve(&mut self, hole: HoleNumber) -> bool {
        if self.improve.remove(&hole) {
            false
        } else {
            self.improve.insert(hole);
            true
        }
    }

    pub fn set_improve_holes<I: IntoIterator<Item = HoleNumber>>(&mut self, holes: I) {
        self.improve = holes.into_iter().collect();
    }

    pub fn clear_improve(&mut self) {
        self.improve.clear();
    }

    /// Engine view of the current hole
    pub fn hole_context<'a>(&'a self, config: &'a CaddieConfig) -> HoleContext<'a> {
        HoleContext::new(
            &config.course,
            &config.team,
            self.hole,
            self.handicaps,
            [self.current_log(Player::A), self.current_log(Player::B)],
        )
        .with_day2_bias(self.day2_bias())
    }

    /// Recompute the recommendation for the current hole from scratch
    pub fn advise(&self, config: &CaddieConfig) -> Recommendation {
        advise(&self.hole_context(config), &config.advisor)
    }

    pub fn explain(&self, config: &CaddieConfig, recommendation: &Recommendation) -> Explanation {
        Explanation::new(
            &self.hole_context(config),
            recommendation,
            self.day2,
            &self.improve_holes(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisor::{PhaseKind, Tactic};

    fn hole(n: u8) -> HoleNumber {
        HoleNumber::new(n).unwrap()
    }

    #[test]
    fn test_new_session_starts_on_first_hole() {
        let session = RoundSession::new(&Team::default());
        assert_eq!(session.hole(), HoleNumber::FIRST);
        assert_eq!(session.handicap(Player::A), 19);
        assert_eq!(session.handicap(Player::B), 13);
        assert!(session.current_log(Player::A).is_empty());
    }

    #[test]
    fn test_record_appends_to_current_hole_only() {
        let mut session = RoundSession::new(&Team::default());
        session.record(Player::A, Grade::GOOD);
        session.record(Player::A, Grade::TROUBLE);
        session.next_hole();
        session.record(Player::B, Grade::PERFECT);

        assert_eq!(session.log(Player::A, hole(1)), &[Grade::GOOD, Grade::TROUBLE]);
        assert!(session.log(Player::B, hole(1)).is_empty());
        assert_eq!(session.log(Player::B, hole(2)), &[Grade::PERFECT]);
    }

    #[test]
    fn test_logs_survive_navigation() {
        let mut session = RoundSession::new(&Team::default());
        session.record(Player::B, Grade::PLAYABLE);
        session.next_hole();
        session.prev_hole();
        assert_eq!(session.current_log(Player::B), &[Grade::PLAYABLE]);
    }

    #[test]
    fn test_reset_clears_one_hole() {
        let mut session = RoundSession::new(&Team::default());
        session.record(Player::A, Grade::GOOD);
        session.record(Player::B, Grade::GOOD);
        session.set_hole(hole(4));
        session.record(Player::A, Grade::PENALTY);

        session.reset_hole(hole(1));
        assert!(session.log(Player::A, hole(1)).is_empty());
        assert!(session.log(Player::B, hole(1)).is_empty());
        assert_eq!(session.log(Player::A, hole(4)), &[Grade::PENALTY]);

        // Resetting an untouched hole is a no-op
        session.reset_hole(hole(9));
    }

    #[test]
    fn test_navigation_is_clamped() {
        let mut session = RoundSession::new(&Team::default());
        assert_eq!(session.prev_hole(), hole(1));
        session.set_hole(hole(18));
        assert_eq!(session.next_hole(), hole(18));
    }

    #[test]
    fn test_handicap_validation() {
        let mut session = RoundSession::new(&Team::default());
        assert!(session.set_handicap(Player::A, 54).is_ok());
        assert!(session.set_handicap(Player::B, 55).is_err());
        assert_eq!(session.handicap(Player::B), 13);
    }

    #[test]
    fn test_day2_bias_needs_flag_and_hole() {
        let mut session = RoundSession::new(&Team::default());
        session.toggle_improve(hole(1));
        assert!(!session.day2_bias());
        session.set_day2(true);
        assert!(session.day2_bias());
        session.next_hole();
        assert!(!session.day2_bias());
    }

    #[test]
    fn test_toggle_improve() {
        let mut session = RoundSession::new(&Team::default());
        assert!(session.toggle_improve(hole(7)));
        assert!(session.toggle_improve(hole(3)));
        assert_eq!(session.improve_holes(), vec![hole(3), hole(7)]);
        assert!(!session.toggle_improve(hole(7)));
        assert_eq!(session.improve_holes(), vec![hole(3)]);
        session.set_improve_holes([hole(12), hole(5)]);
        assert_eq!(session.improve_holes(), vec![hole(5), hole(12)]);
        session.clear_improve();
        assert!(session.improve_holes().is_empty());
    }

    #[test]
    fn test_advise_uses_current_hole() {
        let config = CaddieConfig::default();
        let mut session = RoundSession::new(&config.team);
        session.set_hole(hole(5));
        let rec = session.advise(&config);
        assert_eq!(rec.phase, PhaseKind::PreTee);
        assert_eq!(rec.tee_first, Some(Player::A));

        session.record(Player::A, Grade::PERFECT);
        let rec = session.advise(&config);
        assert_eq!(rec.tactic, Tactic::Attack);
        assert_eq!(rec.expected_net_advantage, 0.42);
    }

    #[test]
    fn test_day2_raises_ev_on_improve_hole() {
        let config = CaddieConfig::default();
        let mut session = RoundSession::new(&config.team);
        session.set_hole(hole(5));
        session.record(Player::A, Grade::PERFECT);
        session.set_day2(true);
        session.toggle_improve(hole(5));
        // 0.425 + 0.25
        assert_eq!(session.advise(&config).expected_net_advantage, 0.68);
    }

    #[test]
    fn test_explain_reflects_controls() {
        let config = CaddieConfig::default();
        let mut session = RoundSession::new(&config.team);
        session.set_day2(true);
        session.toggle_improve(hole(2));
        let rec = session.advise(&config);
        let explanation = session.explain(&config, &rec);
        assert!(explanation.day2);
        assert_eq!(explanation.improve_holes, vec![2]);
        assert_eq!(explanation.hole, 1);
    }
}
