//! Attacker candidate selection

use crate::advisor::context::HoleContext;
use crate::core::config::AdvisoryConfig;
use crate::core::types::{Grade, Player};

/// Ranking score for one player: last grade, plus hole comfort, minus bad streak
pub fn attacker_score(
    ctx: &HoleContext<'_>,
    player: Player,
    last: Option<Grade>,
    config: &AdvisoryConfig,
) -> f64 {
    let grade = last.map(|g| g.value()).unwrap_or(0) as f64;
    grade + ctx.strength(player) * config.attacker_strength_weight
        - ctx.bad_streak(player, config) as f64 * config.attacker_streak_penalty
}

/// Pick the better attacker from the two most recent grades. Ties go to `Player::A`.
pub fn choose_attacker(
    ctx: &HoleContext<'_>,
    a_last: Option<Grade>,
    b_last: Option<Grade>,
    config: &AdvisoryConfig,
) -> Player {
    let a = attacker_score(ctx, Player::A, a_last, config);
    let b = attacker_score(ctx, Player::B, b_last, config);
    tracing::debug!("Attacker scores: A {:.2}, B {:.2}", a, b);
    if a >= b {
        Player::A
    } else {
        Player::B
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::HoleNumber;
    use crate::course::{Course, Team};

    fn hole(n: u8) -> HoleNumber {
        HoleNumber::new(n).unwrap()
    }

    #[test]
    fn test_higher_grade_wins() {
        let (course, team) = (Course::default(), Team::default());
        let a = [Grade::PLAYABLE];
        let b = [Grade::GOOD];
        let ctx = HoleContext::new(&course, &team, hole(2), [19, 13], [&a[..], &b[..]]);
        let config = AdvisoryConfig::default();
        assert_eq!(choose_attacker(&ctx, Some(Grade::PLAYABLE), Some(Grade::GOOD), &config), Player::B);
    }

    #[test]
    fn test_strength_breaks_equal_grades() {
        // Hole 3: A 0.5, B 0.8
        let (course, team) = (Course::default(), Team::default());
        let a = [Grade::GOOD];
        let b = [Grade::GOOD];
        let ctx = HoleContext::new(&course, &team, hole(3), [19, 13], [&a[..], &b[..]]);
        let config = AdvisoryConfig::default();
        assert_eq!(choose_attacker(&ctx, Some(Grade::GOOD), Some(Grade::GOOD), &config), Player::B);
    }

    #[test]
    fn test_exact_tie_goes_to_a() {
        // Hole 2: both 0.5
        let (course, team) = (Course::default(), Team::default());
        let a = [Grade::GOOD];
        let b = [Grade::GOOD];
        let ctx = HoleContext::new(&course, &team, hole(2), [19, 13], [&a[..], &b[..]]);
        let config = AdvisoryConfig::default();
        assert_eq!(choose_attacker(&ctx, Some(Grade::GOOD), Some(Grade::GOOD), &config), Player::A);
    }

    #[test]
    fn test_bad_streak_penalised() {
        // A: D, streak 1 => 2 + 0.3 - 0.4; B: D D, streak 2 => 2 + 0.3 - 0.8
        let (course, team) = (Course::default(), Team::default());
        let a = [Grade::TROUBLE];
        let b = [Grade::TROUBLE, Grade::TROUBLE];
        let ctx = HoleContext::new(&course, &team, hole(2), [19, 13], [&a[..], &b[..]]);
        let config = AdvisoryConfig::default();
        let score_b = attacker_score(&ctx, Player::B, Some(Grade::TROUBLE), &config);
        assert!((score_b - 1.5).abs() < 1e-9);
        assert_eq!(choose_attacker(&ctx, Some(Grade::TROUBLE), Some(Grade::TROUBLE), &config), Player::A);
    }

    #[test]
    fn test_missing_grade_scores_zero() {
        let (course, team) = (Course::default(), Team::default());
        let ctx = HoleContext::new(&course, &team, hole(2), [19, 13], [&[], &[]]);
        let config = AdvisoryConfig::default();
        assert_eq!(choose_attacker(&ctx, None, Some(Grade::PENALTY), &config), Player::B);
    }
}
