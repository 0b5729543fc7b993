//! Parse caddie input lines into structured commands

use serde::{Deserialize, Serialize};

use crate::core::error::{CaddieError, Result};
use crate::core::types::{Grade, HoleNumber, Player};
use crate::course::Team;

/// One line of caddie input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Log one or more shots for a player on the current hole
    Record(Player, Vec<Grade>),
    /// Jump to a hole
    Hole(HoleNumber),
    Next,
    Prev,
    /// Change a player's handicap
    Handicap(Player, u8),
    Day2(bool),
    /// Flip holes in or out of the improve list
    ToggleImprove(Vec<HoleNumber>),
    ClearImprove,
    /// Clear both logs on the current hole
    Reset,
    Why,
    Help,
    Quit,
}

/// Parse a single input line. Player names resolve against `team`.
pub fn parse(input: &str, team: &Team) -> Result<Command> {
    let mut words = input.split_whitespace();
    let Some(head) = words.next() else {
        return Err(CaddieError::InvalidCommand("empty input".into()));
    };
    let args: Vec<&str> = words.collect();

    match (head.to_ascii_lowercase().as_str(), args.as_slice()) {
        ("next" | "n", []) => Ok(Command::Next),
        ("prev" | "p", []) => Ok(Command::Prev),
        ("reset", []) => Ok(Command::Reset),
        ("why" | "w", []) => Ok(Command::Why),
        ("help" | "h" | "?", []) => Ok(Command::Help),
        ("quit" | "q" | "exit", []) => Ok(Command::Quit),
        ("hole", [n]) => Ok(Command::Hole(parse_hole(n)?)),
        ("hcp", [who, n]) => {
            let player = parse_player(who, team)?;
            let handicap = parse_number(n)?;
            Ok(Command::Handicap(player, handicap))
        }
        ("day2", [state]) => match state.to_ascii_lowercase().as_str() {
            "on" | "yes" | "true" => Ok(Command::Day2(true)),
            "off" | "no" | "false" => Ok(Command::Day2(false)),
            other => Err(CaddieError::InvalidCommand(format!(
                "day2 expects on or off, got {:?}",
                other
            ))),
        },
        ("improve", [word]) if word.eq_ignore_ascii_case("clear") => Ok(Command::ClearImprove),
        ("improve", holes) if !holes.is_empty() => holes
            .iter()
            .flat_map(|h| h.split(','))
            .filter(|h| !h.is_empty())
            .map(parse_hole)
            .collect::<Result<Vec<_>>>()
            .map(Command::ToggleImprove),
        (_, grades) if !grades.is_empty() => {
            let player = team
                .find(head)
                .ok_or_else(|| CaddieError::UnknownPlayer(head.to_string()))?;
            let grades = Grade::parse_letters(&grades.concat())?;
            Ok(Command::Record(player, grades))
        }
        _ => Err(CaddieError::InvalidCommand(format!(
            "unrecognized input {:?} (type help)",
            input.trim()
        ))),
    }
}

fn parse_player(word: &str, team: &Team) -> Result<Player> {
    team.find(word)
        .ok_or_else(|| CaddieError::UnknownPlayer(word.to_string()))
}

fn parse_number(word: &str) -> Result<u8> {
    word.parse::<u8>()
        .map_err(|_| CaddieError::InvalidCommand(format!("expected a number, got {:?}", word)))
}

fn parse_hole(word: &str) -> Result<HoleNumber> {
    HoleNumber::new(parse_number(word)?)
}
