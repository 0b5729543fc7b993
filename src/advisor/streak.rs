//! Trailing trouble-shot counting

use crate::core::types::Grade;

/// Count consecutive trouble shots (grade <= `bad_threshold`) at the end of a log.
pub fn bad_streak(grades: &[Grade], bad_threshold: u8) -> usize {
    grades
        .iter()
        .rev()
        .take_while(|g| g.value() <= bad_threshold)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grades(values: &[u8]) -> Vec<Grade> {
        values.iter().map(|&v| Grade::new(v).unwrap()).collect()
    }

    #[test]
    fn test_empty_log() {
        assert_eq!(bad_streak(&[], 2), 0);
    }

    #[test]
    fn test_counts_only_trailing_run() {
        assert_eq!(bad_streak(&grades(&[5, 5, 1, 1]), 2), 2);
        assert_eq!(bad_streak(&grades(&[1, 1, 5]), 2), 0);
        assert_eq!(bad_streak(&grades(&[2, 2, 2, 2]), 2), 4);
        assert_eq!(bad_streak(&grades(&[1, 3, 2]), 2), 1);
    }

    #[test]
    fn test_neutral_grade_breaks_streak() {
        assert_eq!(bad_streak(&grades(&[2, 2, 3]), 2), 0);
    }
}
