//! Command execution - applies parsed commands to the round session

use crate::command::parser::Command;
use crate::core::error::Result;
use crate::course::Team;
use crate::session::RoundSession;

/// Applies commands to a session
pub struct CommandExecutor;

impl CommandExecutor {
    /// Apply a command. Errors leave the session unchanged.
    pub fn execute(session: &mut RoundSession, team: &Team, command: Command) -> Result<Outcome> {
        let outcome = match command {
            Command::Record(player, grades) => {
                let letters: String = grades.iter().map(|g| g.letter()).collect();
                for grade in grades {
                    session.record(player, grade);
                }
                Outcome::Updated(format!(
                    "{} logged {} on hole {}.",
                    team.name(player),
                    letters,
                    session.hole()
                ))
            }
            Command::Hole(hole) => {
                session.set_hole(hole);
                Outcome::Updated(format!("Now on hole {}.", hole))
            }
            Command::Next => Outcome::Updated(format!("Now on hole {}.", session.next_hole())),
            Command::Prev => Outcome::Updated(format!("Now on hole {}.", session.prev_hole())),
            Command::Handicap(player, handicap) => {
                session.set_handicap(player, handicap)?;
                Outcome::Updated(format!("{} handicap set to {}.", team.name(player), handicap))
            }
            Command::Day2(on) => {
                session.set_day2(on);
                Outcome::Updated(format!("Day-2 bias {}.", if on { "ON" } else { "OFF" }))
            }
            Command::ToggleImprove(holes) => {
                for hole in holes {
                    session.toggle_improve(hole);
                }
                Outcome::Updated(format!("Improve list: {}.", improve_list(session)))
            }
            Command::ClearImprove => {
                session.clear_improve();
                Outcome::Updated("Improve list cleared.".to_string())
            }
            Command::Reset => {
                let hole = session.hole();
                session.reset_hole(hole);
                Outcome::Updated(format!("Hole {} reset.", hole))
            }
            Command::Why => Outcome::ShowExplanation,
            Command::Help => Outcome::ShowHelp,
            Command::Quit => Outcome::Quit,
        };
        Ok(outcome)
    }
}

/// What the caller should do after a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// State changed; message describes the change
    Updated(String),
    ShowExplanation,
    ShowHelp,
    Quit,
}

fn improve_list(session: &RoundSession) -> String {
    let holes = session.improve_holes();
    if holes.is_empty() {
        return "—".to_string();
    }
    holes
        .iter()
        .map(|h| h.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::parser::parse;
    use crate::core::types::{Grade, HoleNumber, Player};

    fn run(session: &mut RoundSession, input: &str) -> Result<Outcome> {
        let team = Team::default();
        let command = parse(input, &team)?;
        CommandExecutor::execute(session, &team, command)
    }

    #[test]
    fn test_record_command() {
        let mut session = RoundSession::new(&Team::default());
        let outcome = run(&mut session, "matt bd").unwrap();
        assert_eq!(outcome, Outcome::Updated("Matt logged BD on hole 1.".into()));
        assert_eq!(session.current_log(Player::A), &[Grade::GOOD, Grade::TROUBLE]);
    }

    #[test]
    fn test_navigation_commands() {
        let mut session = RoundSession::new(&Team::default());
        assert_eq!(
            run(&mut session, "hole 17").unwrap(),
            Outcome::Updated("Now on hole 17.".into())
        );
        run(&mut session, "next").unwrap();
        run(&mut session, "next").unwrap();
        assert_eq!(session.hole(), HoleNumber::LAST);
        run(&mut session, "p").unwrap();
        assert_eq!(session.hole().number(), 17);
    }

    #[test]
    fn test_bad_handicap_leaves_state() {
        let mut session = RoundSession::new(&Team::default());
        assert!(run(&mut session, "hcp a 70").is_err());
        assert_eq!(session.handicap(Player::A), 19);
        run(&mut session, "hcp a 7").unwrap();
        assert_eq!(session.handicap(Player::A), 7);
    }

    #[test]
    fn test_improve_and_day2() {
        let mut session = RoundSession::new(&Team::default());
        assert_eq!(
            run(&mut session, "improve 7 5").unwrap(),
            Outcome::Updated("Improve list: 5, 7.".into())
        );
        assert_eq!(
            run(&mut session, "improve 7").unwrap(),
            Outcome::Updated("Improve list: 5.".into())
        );
        run(&mut session, "improve clear").unwrap();
        assert!(session.improve_holes().is_empty());
        run(&mut session, "day2 on").unwrap();
        assert!(session.day2());
    }

    #[test]
    fn test_reset_current_hole() {
        let mut session = RoundSession::new(&Team::default());
        run(&mut session, "mike c").unwrap();
        assert_eq!(
            run(&mut session, "reset").unwrap(),
            Outcome::Updated("Hole 1 reset.".into())
        );
        assert!(session.current_log(Player::B).is_empty());
    }

    #[test]
    fn test_display_outcomes() {
        let mut session = RoundSession::new(&Team::default());
        assert_eq!(run(&mut session, "why").unwrap(), Outcome::ShowExplanation);
        assert_eq!(run(&mut session, "help").unwrap(), Outcome::ShowHelp);
        assert_eq!(run(&mut session, "quit").unwrap(), Outcome::Quit);
    }
}
