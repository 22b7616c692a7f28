//! Fairway CLI — print a player's leaderboard results for a season.
//!
//! Fetches the season tournament list from sportsdata.io, fans out one
//! leaderboard request per valid tournament, and prints every leaderboard
//! in which the target player appears. Dropped records are reported on the
//! log (set `RUST_LOG=warn` to see them).

use anyhow::{bail, Result};
use clap::Parser;
use fairway_core::pipeline::{current_season_year, Tracker};
use fairway_core::sportsdata::{SportsDataClient, DEFAULT_BASE_URL};

#[derive(Parser)]
#[command(
    name = "fairway",
    about = "Track a player's tournament leaderboards across a season"
)]
struct Cli {
    /// Player to track, by exact leaderboard name.
    #[arg(long, default_value = "Scottie Scheffler")]
    player: String,

    /// Season year. Defaults to the current year.
    #[arg(long)]
    year: Option<i32>,

    /// sportsdata.io API key. Falls back to $SPORTSDATA_API_KEY.
    #[arg(long, env = "SPORTSDATA_API_KEY", hide_env_values = true)]
    api_key: String,

    /// Provider base URL.
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if cli.player.is_empty() {
        bail!("--player must not be empty");
    }

    let client = SportsDataClient::new(cli.base_url, cli.api_key);
    let tracker = Tracker::new(&client, &client, &cli.player);

    let year = cli.year.unwrap_or_else(current_season_year);
    let leaderboards = tracker.run(year);

    if leaderboards.is_empty() {
        println!("No leaderboards for {} in {year}.", cli.player);
        return Ok(());
    }

    for leaderboard in &leaderboards {
        let name = leaderboard
            .tournament
            .as_ref()
            .map(|t| t.name.as_str())
            .unwrap_or("<unknown>");
        println!("Leaderboard for Tournament: {name}");
        println!();

        // Survivors passed the player filter, so the entry is present.
        if let Some(entry) = leaderboard.player_entry(&cli.player) {
            match entry.rank {
                Some(rank) => println!("Position: {rank}"),
                None => println!("Position: -"),
            }
            println!("Player: {}", entry.name);
            match entry.total_score {
                Some(score) => println!("Total Score: {score}"),
                None => println!("Total Score: -"),
            }
        }
        println!();
    }

    Ok(())
}
