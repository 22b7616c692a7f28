//! Domain types: tournaments, player results, leaderboards.
//!
//! Shapes mirror the sportsdata.io JSON (PascalCase fields). Records are
//! created by the gateways and only read downstream — the pipeline filters,
//! it never mutates.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque tournament identifier, stable across gateway calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TournamentId(pub i64);

impl fmt::Display for TournamentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A tournament as reported by the tournament gateway.
///
/// Malformed provider input can leave `name` empty or `start_date` absent;
/// the validators gate on both before anything downstream sees the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tournament {
    #[serde(rename = "TournamentID")]
    pub id: TournamentId,
    #[serde(rename = "Name", default)]
    pub name: String,
    #[serde(rename = "StartDate", default)]
    pub start_date: Option<NaiveDateTime>,
}

/// One player's line on a leaderboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerResult {
    #[serde(rename = "Name", default)]
    pub name: String,
    #[serde(rename = "Rank", default)]
    pub rank: Option<i32>,
    /// Signed and fractional: some scoring formats award sub-integer totals.
    #[serde(rename = "TotalScore", default)]
    pub total_score: Option<f64>,
}

/// A tournament's leaderboard: the tournament plus its player lines in
/// provider order. The pipeline never re-sorts the players.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Leaderboard {
    #[serde(rename = "Tournament")]
    pub tournament: Option<Tournament>,
    #[serde(rename = "Players", default)]
    pub players: Vec<PlayerResult>,
}

impl Leaderboard {
    /// True when `player` appears among the entries by exact name match.
    pub fn has_player(&self, player: &str) -> bool {
        self.players.iter().any(|p| p.name == player)
    }

    /// The entry for `player`, if present.
    pub fn player_entry(&self, player: &str) -> Option<&PlayerResult> {
        self.players.iter().find(|p| p.name == player)
    }
}
