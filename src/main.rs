//! Better Ball Caddie - Entry Point
//!
//! Interactive caddie: log shot grades as they happen and read the live
//! recommendation for the current hole.

use better_ball_caddie::advisor::{letters, net_targets};
use better_ball_caddie::command::{parse, CommandExecutor, Outcome};
use better_ball_caddie::core::error::Result;
use better_ball_caddie::core::types::{Grade, Player};
use better_ball_caddie::course::{load_caddie_config, CaddieConfig};
use better_ball_caddie::session::RoundSession;

use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG: &str = "data/caddie.toml";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("better_ball_caddie=info")),
        )
        .init();

    let config = load_config()?;
    let mut session = RoundSession::new(&config.team);

    println!("\n=== BETTER BALL CADDIE ===");
    println!("{}: {} & {}", config.course.name, config.team.a.name, config.team.b.name);
    print_help(&config);

    loop {
        display_status(&session, &config);

        print!("> ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            break;
        }
        let input = input.trim();
        if input.is_empty() {
            continue;
        }

        let outcome = parse(input, &config.team)
            .and_then(|command| CommandExecutor::execute(&mut session, &config.team, command));

        match outcome {
            Ok(Outcome::Updated(message)) => println!("{}", message),
            Ok(Outcome::ShowExplanation) => {
                let recommendation = session.advise(&config);
                println!();
                print!("{}", session.explain(&config, &recommendation));
            }
            Ok(Outcome::ShowHelp) => print_help(&config),
            Ok(Outcome::Quit) => break,
            Err(e) => println!("Error: {}", e),
        }
    }

    println!("\nGood round!");
    Ok(())
}

/// CADDIE_CONFIG, then data/caddie.toml, then built-in defaults
fn load_config() -> Result<CaddieConfig> {
    if let Ok(path) = std::env::var("CADDIE_CONFIG") {
        return load_caddie_config(&PathBuf::from(path));
    }

    let path = PathBuf::from(DEFAULT_CONFIG);
    if path.exists() {
        load_caddie_config(&path)
    } else {
        tracing::warn!("{} not found - using built-in course and team", DEFAULT_CONFIG);
        Ok(CaddieConfig::default())
    }
}

fn print_help(config: &CaddieConfig) {
    let (a, b) = (&config.team.a.name, &config.team.b.name);
    println!();
    println!("Commands:");
    println!("  <player> <grades>   - Log shots, e.g. `{} b` or `{} cd` (player may be a/b)", a, b);
    println!("  hole <n>            - Jump to hole n");
    println!("  next / n, prev / p  - Move between holes");
    println!("  hcp <player> <n>    - Set a handicap (0-54)");
    println!("  day2 on|off         - Toggle the day-2 aggression bias");
    println!("  improve <n>...      - Toggle holes in the improve list (`improve clear` empties it)");
    println!("  reset               - Clear both logs on this hole");
    println!("  why / w             - Explain the current recommendation");
    println!("  quit / q            - Exit");
    println!();
    println!("Grades:");
    for grade in [Grade::PERFECT, Grade::GOOD, Grade::PLAYABLE, Grade::TROUBLE, Grade::PENALTY] {
        println!("  {} - {}", grade, grade.help());
    }
}

/// Hole header, both logs, the recommendation and net targets
fn display_status(session: &RoundSession, config: &CaddieConfig) {
    let ctx = session.hole_context(config);
    let recommendation = session.advise(config);

    println!();
    println!(
        "--- Hole {} | Par {} | HCP {}{} ---",
        ctx.hole,
        ctx.par,
        ctx.rating,
        if session.day2_bias() { " | Day-2 bias" } else { "" }
    );
    for player in Player::ALL {
        println!(
            "  {:<8} hcp {:>2} | strokes {} | shots: {}",
            ctx.name(player),
            session.handicap(player),
            ctx.strokes(player),
            letters(ctx.log(player))
        );
    }
    println!("  >> {}", recommendation.text);
    println!("  {}", net_targets(&ctx));
}
