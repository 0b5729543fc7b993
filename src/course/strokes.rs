//! Handicap stroke allocation

use crate::core::types::HOLES_PER_ROUND;

/// Strokes a player receives on a hole.
///
/// One stroke on every hole whose difficulty rating is at or below the
/// handicap index. Handicaps above 18 go round again from the hardest hole
/// (rating 1), so a 19 gets a second stroke on rating 1, a 20 on ratings 1
/// and 2, and so on. Supported handicaps (0-54) yield 0, 1 or 2.
pub fn strokes_for(handicap: u8, rating: u8) -> u8 {
    let mut strokes = u8::from(handicap >= rating);
    let extras = handicap.saturating_sub(HOLES_PER_ROUND as u8);
    if extras > 0 && rating <= extras {
        strokes += 1;
    }
    strokes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scratch_gets_nothing() {
        for rating in 1..=18 {
            assert_eq!(strokes_for(0, rating), 0);
        }
    }

    #[test]
    fn test_single_pass() {
        assert_eq!(strokes_for(13, 1), 1);
        assert_eq!(strokes_for(13, 13), 1);
        assert_eq!(strokes_for(13, 14), 0);
        assert_eq!(strokes_for(18, 18), 1);
    }

    #[test]
    fn test_extra_pass_restarts_at_hardest_hole() {
        assert_eq!(strokes_for(19, 1), 2);
        assert_eq!(strokes_for(19, 2), 1);
        assert_eq!(strokes_for(24, 6), 2);
        assert_eq!(strokes_for(24, 7), 1);
    }

    #[test]
    fn test_round_total_matches_handicap() {
        for handicap in 0..=36u8 {
            let total: u32 = (1..=18).map(|r| strokes_for(handicap, r) as u32).sum();
            assert_eq!(total, handicap as u32, "handicap {}", handicap);
        }
    }
}
