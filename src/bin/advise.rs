//! One-shot advisor
//!
//! Builds a hole state from flags and prints the recommendation, either as
//! text or as JSON for scripting.

use better_ball_caddie::advisor::{Explanation, Recommendation};
use better_ball_caddie::core::error::{CaddieError, Result};
use better_ball_caddie::core::types::{Grade, HoleNumber, Player};
use better_ball_caddie::course::{load_caddie_config, CaddieConfig};
use better_ball_caddie::session::RoundSession;
use clap::Parser;
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Better-ball advice for a single hole state
#[derive(Parser, Debug)]
#[command(name = "advise")]
#[command(about = "Print the caddie recommendation for one hole state")]
struct Args {
    /// Course/team/advisor TOML (built-in defaults when omitted)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Hole number (1-18)
    #[arg(long, default_value_t = 1)]
    hole: u8,

    /// Handicap for player A (defaults to the configured value)
    #[arg(long)]
    hcp_a: Option<u8>,

    /// Handicap for player B (defaults to the configured value)
    #[arg(long)]
    hcp_b: Option<u8>,

    /// Player A's shots on this hole as letters, e.g. "BD"
    #[arg(long, default_value = "")]
    shots_a: String,

    /// Player B's shots on this hole as letters
    #[arg(long, default_value = "")]
    shots_b: String,

    /// Enable the day-2 aggression bias
    #[arg(long)]
    day2: bool,

    /// Holes to improve on day 2, comma separated
    #[arg(long, value_delimiter = ',')]
    improve: Vec<u8>,

    /// Output format: json or text
    #[arg(long, default_value = "text")]
    format: String,
}

/// JSON output structure
#[derive(Serialize)]
struct AdviceOutput {
    course: String,
    recommendation: Recommendation,
    explanation: Explanation,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("better_ball_caddie=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let config = match &args.config {
        Some(path) => load_caddie_config(path)?,
        None => CaddieConfig::default(),
    };

    let session = build_session(args, &config)?;
    let recommendation = session.advise(&config);
    let explanation = session.explain(&config, &recommendation);

    match args.format.as_str() {
        "json" => {
            let output = AdviceOutput {
                course: config.course.name.clone(),
                recommendation,
                explanation,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        "text" => {
            println!("{}", recommendation.text);
            println!("{}", explanation.net_targets);
            println!();
            print!("{}", explanation);
        }
        other => {
            return Err(CaddieError::InvalidCommand(format!(
                "unknown format {:?} (expected json or text)",
                other
            )))
        }
    }
    Ok(())
}

fn build_session(args: &Args, config: &CaddieConfig) -> Result<RoundSession> {
    let mut session = RoundSession::new(&config.team);
    session.set_hole(HoleNumber::new(args.hole)?);

    if let Some(hcp) = args.hcp_a {
        session.set_handicap(Player::A, hcp)?;
    }
    if let Some(hcp) = args.hcp_b {
        session.set_handicap(Player::B, hcp)?;
    }

    for (player, shots) in [(Player::A, &args.shots_a), (Player::B, &args.shots_b)] {
        for grade in Grade::parse_letters(shots)? {
            session.record(player, grade);
        }
    }

    session.set_day2(args.day2);
    let improve = args
        .improve
        .iter()
        .map(|&n| HoleNumber::new(n))
        .collect::<Result<Vec<_>>>()?;
    session.set_improve_holes(improve);

    Ok(session)
}
