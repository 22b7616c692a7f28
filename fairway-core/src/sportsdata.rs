//! sportsdata.io gateway.
//!
//! Fetches the season tournament list and per-tournament leaderboards from
//! the sportsdata.io golf JSON API. Non-success responses, transport errors,
//! and decode failures are logged and collapsed to `None`, per the gateway
//! contract in [`crate::gateway`].

use crate::domain::{Leaderboard, Tournament, TournamentId};
use crate::gateway::{LeaderboardGateway, TournamentGateway};
use log::warn;
use serde::de::DeserializeOwned;
use std::time::Duration;
use thiserror::Error;

/// Production endpoint for the golf API.
pub const DEFAULT_BASE_URL: &str = "https://api.sportsdata.io/golf/v2/json";

/// Faults internal to this gateway. Callers of the gateway traits never see
/// these; they observe absence only.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("provider returned HTTP {0}")]
    Status(reqwest::StatusCode),
}

/// Blocking HTTP client for the sportsdata.io API.
///
/// One instance implements both gateway traits; the underlying connection
/// pool is shared across the pipeline's concurrent leaderboard fetches.
pub struct SportsDataClient {
    client: reqwest::blocking::Client,
    base_url: String,
    api_key: String,
}

impl SportsDataClient {
    /// Build a client against `base_url` with the given API key.
    ///
    /// The request timeout bounds every call, including each branch of the
    /// leaderboard fan-out, so one hung request cannot stall a run forever.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("failed to build HTTP client");

        Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    fn tournaments_url(&self, year: i32) -> String {
        format!("{}/Tournaments/{}?key={}", self.base_url, year, self.api_key)
    }

    fn leaderboard_url(&self, id: TournamentId) -> String {
        format!("{}/Leaderboard/{}?key={}", self.base_url, id, self.api_key)
    }

    fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        let response = self.client.get(url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }
        Ok(response.json()?)
    }
}

impl TournamentGateway for SportsDataClient {
    fn recent_tournaments(&self, year: i32) -> Option<Vec<Tournament>> {
        match self.get_json::<Vec<Tournament>>(&self.tournaments_url(year)) {
            Ok(tournaments) => Some(tournaments),
            Err(e) => {
                warn!("tournament fetch for season {year} failed: {e}");
                None
            }
        }
    }
}

impl LeaderboardGateway for SportsDataClient {
    fn leaderboard(&self, id: TournamentId) -> Option<Leaderboard> {
        match self.get_json::<Leaderboard>(&self.leaderboard_url(id)) {
            Ok(leaderboard) => Some(leaderboard),
            Err(e) => {
                warn!("leaderboard fetch for tournament {id} failed: {e}");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn client() -> SportsDataClient {
        SportsDataClient::new("https://example.test/golf/v2/json", "secret")
    }

    #[test]
    fn tournaments_url_preserves_wire_contract() {
        assert_eq!(
            client().tournaments_url(2024),
            "https://example.test/golf/v2/json/Tournaments/2024?key=secret"
        );
    }

    #[test]
    fn leaderboard_url_preserves_wire_contract() {
        assert_eq!(
            client().leaderboard_url(TournamentId(482)),
            "https://example.test/golf/v2/json/Leaderboard/482?key=secret"
        );
    }

    #[test]
    fn decodes_tournament_list_json() {
        let json = r#"[
            {"TournamentID": 482, "Name": "The Masters", "StartDate": "2024-04-11T00:00:00"},
            {"TournamentID": 483, "Name": ""}
        ]"#;
        let tournaments: Vec<Tournament> = serde_json::from_str(json).unwrap();
        assert_eq!(tournaments.len(), 2);
        assert_eq!(tournaments[0].id, TournamentId(482));
        assert_eq!(
            tournaments[0].start_date,
            Some(
                NaiveDate::from_ymd_opt(2024, 4, 11)
                    .unwrap()
                    .and_hms_opt(0, 0, 0)
                    .unwrap()
            )
        );
        // Malformed entry still decodes; the validators drop it later.
        assert!(tournaments[1].name.is_empty());
        assert!(tournaments[1].start_date.is_none());
    }

    #[test]
    fn decodes_leaderboard_json() {
        let json = r#"{
            "Tournament": {"TournamentID": 482, "Name": "The Masters", "StartDate": "2024-04-11T00:00:00"},
            "Players": [
                {"Name": "Scottie Scheffler", "Rank": 1, "TotalScore": -11.5},
                {"Name": "Runner Up", "Rank": 2}
            ]
        }"#;
        let leaderboard: Leaderboard = serde_json::from_str(json).unwrap();
        assert_eq!(leaderboard.players.len(), 2);
        assert_eq!(leaderboard.players[0].total_score, Some(-11.5));
        assert_eq!(leaderboard.players[1].total_score, None);
        assert!(leaderboard.has_player("Scottie Scheffler"));
    }

    #[test]
    fn decodes_leaderboard_with_missing_players_as_empty() {
        let json = r#"{"Tournament": {"TournamentID": 482, "Name": "The Masters"}}"#;
        let leaderboard: Leaderboard = serde_json::from_str(json).unwrap();
        assert!(leaderboard.players.is_empty());
    }
}
