//! Static course and team configuration
//!
//! The course card (par and difficulty rating per hole) and each partner's
//! handicap and per-hole comfort weights. Loaded once and read-only while
//! the round is played.

mod loader;
pub mod strokes;

pub use loader::{load_caddie_config, CaddieConfig};
pub use strokes::strokes_for;

use serde::{Deserialize, Serialize};

use crate::core::types::{HoleNumber, Player, HOLES_PER_ROUND, MAX_HANDICAP};

/// A single hole on the card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hole {
    pub par: u8,
    /// Stroke index, 1 = hardest; unique across the course
    pub rating: u8,
}

/// An 18-hole course card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    #[serde(default)]
    pub name: String,
    pub holes: Vec<Hole>,
}

impl Course {
    pub fn hole(&self, hole: HoleNumber) -> &Hole {
        &self.holes[hole.index()]
    }

    /// Collect every problem with the card instead of stopping at the first
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.holes.len() != HOLES_PER_ROUND {
            errors.push(format!(
                "course has {} holes, expected {}",
                self.holes.len(),
                HOLES_PER_ROUND
            ));
        }

        let mut seen = [false; HOLES_PER_ROUND];
        for (i, hole) in self.holes.iter().enumerate() {
            if !(3..=5).contains(&hole.par) {
                errors.push(format!("hole {}: par {} outside 3-5", i + 1, hole.par));
            }
            match hole.rating {
                r @ 1..=18 => {
                    let slot = &mut seen[(r - 1) as usize];
                    if *slot {
                        errors.push(format!("hole {}: rating {} used twice", i + 1, r));
                    }
                    *slot = true;
                }
                r => errors.push(format!("hole {}: rating {} outside 1-18", i + 1, r)),
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

impl Default for Course {
    fn default() -> Self {
        const RATINGS: [u8; HOLES_PER_ROUND] =
            [15, 9, 7, 17, 1, 13, 5, 11, 3, 16, 10, 2, 18, 8, 14, 4, 6, 12];
        const PARS: [u8; HOLES_PER_ROUND] = [4, 4, 4, 3, 4, 4, 4, 3, 5, 3, 4, 4, 3, 5, 4, 4, 5, 4];

        Self {
            name: "Home Course".to_string(),
            holes: RATINGS
                .iter()
                .zip(PARS.iter())
                .map(|(&rating, &par)| Hole { par, rating })
                .collect(),
        }
    }
}

/// One partner's handicap and per-hole comfort
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerProfile {
    pub name: String,
    pub handicap: u8,
    /// Comfort on each hole in [0, 1]; higher means more attack bias
    pub strength: Vec<f64>,
}

impl PlayerProfile {
    pub fn strength_on(&self, hole: HoleNumber) -> f64 {
        self.strength[hole.index()]
    }
}

/// The two partners, indexed by `Player`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub a: PlayerProfile,
    pub b: PlayerProfile,
}

impl Team {
    pub fn profile(&self, player: Player) -> &PlayerProfile {
        match player {
            Player::A => &self.a,
            Player::B => &self.b,
        }
    }

    pub fn name(&self, player: Player) -> &str {
        &self.profile(player).name
    }

    /// Match a player by name (case-insensitive) or by "a"/"b"
    pub fn find(&self, query: &str) -> Option<Player> {
        let query = query.trim();
        Player::ALL.into_iter().find(|&p| {
            self.name(p).eq_ignore_ascii_case(query)
                || match p {
                    Player::A => query.eq_ignore_ascii_case("a"),
                    Player::B => query.eq_ignore_ascii_case("b"),
                }
        })
    }

    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        for player in Player::ALL {
            let profile = self.profile(player);
            let label = format!("player {:?}", player);
            if profile.name.trim().is_empty() {
                errors.push(format!("{}: name is empty", label));
            } else if profile.name.chars().any(char::is_whitespace) {
                errors.push(format!(
                    "{}: name {:?} must be a single word",
                    label, profile.name
                ));
            }
            if profile.handicap > MAX_HANDICAP {
                errors.push(format!(
                    "{}: handicap {} above {}",
                    label, profile.handicap, MAX_HANDICAP
                ));
            }
            if profile.strength.len() != HOLES_PER_ROUND {
                errors.push(format!(
                    "{}: {} strength weights, expected {}",
                    label,
                    profile.strength.len(),
                    HOLES_PER_ROUND
                ));
            }
            for (i, w) in profile.strength.iter().enumerate() {
                if !(0.0..=1.0).contains(w) {
                    errors.push(format!("{}: hole {} strength {} outside 0-1", label, i + 1, w));
                }
            }
        }

        if self.a.name.eq_ignore_ascii_case(&self.b.name) {
            errors.push(format!("both players are named {:?}", self.a.name));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

impl Default for Team {
    fn default() -> Self {
        // A best: 8, 17, 1; worst: 9, 16, 5
        // B best: 10, 3, 17; worst: 12, 9, 14
        Self {
            a: PlayerProfile {
                name: "Matt".to_string(),
                handicap: 19,
                strength: vec![
                    0.8, 0.5, 0.5, 0.5, 0.2, 0.5, 0.5, 0.8, 0.2, 0.5, 0.5, 0.5, 0.5, 0.5, 0.5,
                    0.2, 0.8, 0.5,
                ],
            },
            b: PlayerProfile {
                name: "Mike".to_string(),
                handicap: 13,
                strength: vec![
                    0.5, 0.5, 0.8, 0.5, 0.5, 0.5, 0.5, 0.5, 0.2, 0.8, 0.5, 0.2, 0.5, 0.2, 0.5,
                    0.5, 0.8, 0.5,
                ],
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_course_is_valid() {
        let course = Course::default();
        assert!(course.validate().is_ok());
        assert_eq!(course.hole(HoleNumber::new(5).unwrap()).rating, 1);
        assert_eq!(course.hole(HoleNumber::new(9).unwrap()).par, 5);
    }

    #[test]
    fn test_duplicate_rating_rejected() {
        let mut course = Course::default();
        course.holes[1].rating = 15;
        let errors = course.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("rating 15 used twice"));
    }

    #[test]
    fn test_all_errors_collected() {
        let mut course = Course::default();
        course.holes[0].par = 7;
        course.holes[3].rating = 0;
        course.holes.pop();
        let errors = course.validate().unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_default_team_is_valid() {
        let team = Team::default();
        assert!(team.validate().is_ok());
        assert_eq!(team.name(Player::A), "Matt");
        assert_eq!(team.profile(Player::B).strength_on(HoleNumber::new(10).unwrap()), 0.8);
    }

    #[test]
    fn test_find_player() {
        let team = Team::default();
        assert_eq!(team.find("matt"), Some(Player::A));
        assert_eq!(team.find("MIKE"), Some(Player::B));
        assert_eq!(team.find("b"), Some(Player::B));
        assert_eq!(team.find("bob"), None);
    }

    #[test]
    fn test_team_validation() {
        let mut team = Team::default();
        team.b.name = "matt".to_string();
        team.a.strength[2] = 1.5;
        team.b.strength.truncate(10);
        let errors = team.validate().unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_multi_word_name_rejected() {
        let mut team = Team::default();
        team.a.name = "Matt Smith".to_string();
        let errors = team.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("single word"));
    }
}
