//! Play one greedy self-play game from the opening and print the result.

use anyhow::Result;
use clap::{Parser, ValueEnum};
use othello_core::{Game, Outcome};
use othello_engines::{play_out, MatchRecord};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Greedy Othello self-play
#[derive(Parser, Debug)]
#[command(name = "selfplay")]
#[command(about = "Play the greedy engine against itself from the opening position", long_about = None)]
#[command(version)]
struct Cli {
    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log: String,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log)),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("Starting greedy self-play");
    let record = play_out(Game::new())?;

    match cli.format {
        Format::Text => print_text(&record),
        Format::Json => println!("{}", serde_json::to_string_pretty(&record)?),
    }

    Ok(())
}

fn print_text(record: &MatchRecord) {
    for ply in &record.plies {
        let skip = if ply.opponent_skipped { " (opponent passes)" } else { "" };
        println!(
            "{:>2}. {:<5} {} +{}{}",
            ply.ply, ply.player, ply.placed, ply.flipped, skip
        );
    }

    println!();
    print!("{}", record.final_board);
    println!();
    println!("Black: {}, White: {}", record.black, record.white);
    match record.outcome {
        Outcome::Winner(player) => println!("{} wins", player),
        Outcome::Draw => println!("Draw"),
    }
}
