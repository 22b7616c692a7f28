//! The tracker pipeline — the one piece with real control flow.
//!
//! Stage order: resolve season → fetch tournament list → validate
//! tournaments → fan out leaderboard fetches → filter by target player →
//! validate leaderboards. Invalid records are logged and dropped, never
//! fatal; gateway absence is an empty result, never an error. Output order
//! follows input tournament order.

use crate::domain::{Leaderboard, Tournament};
use crate::gateway::{LeaderboardGateway, TournamentGateway};
use crate::validate::{validate_leaderboard, validate_tournament};
use chrono::{Datelike, Local};
use log::warn;
use rayon::prelude::*;

/// The season year implied by the local wall clock.
pub fn current_season_year() -> i32 {
    Local::now().year()
}

/// Orchestrates tournament retrieval, concurrent leaderboard retrieval, and
/// validation gating for one target player.
///
/// Collaborators are plain trait references passed in at construction, so
/// tests can substitute stub gateways.
pub struct Tracker<'a> {
    tournaments: &'a dyn TournamentGateway,
    leaderboards: &'a dyn LeaderboardGateway,
    target_player: String,
}

impl<'a> Tracker<'a> {
    pub fn new(
        tournaments: &'a dyn TournamentGateway,
        leaderboards: &'a dyn LeaderboardGateway,
        target_player: impl Into<String>,
    ) -> Self {
        Self {
            tournaments,
            leaderboards,
            target_player: target_player.into(),
        }
    }

    /// Leaderboards from the current season featuring the target player.
    pub fn run_current_season(&self) -> Vec<Leaderboard> {
        self.run(current_season_year())
    }

    /// Leaderboards from one season year featuring the target player.
    ///
    /// Returns an empty vec when the provider has no tournament list, when
    /// the list is empty, or when nothing survives the gates. The caller is
    /// not given a way to distinguish these cases.
    pub fn run(&self, year: i32) -> Vec<Leaderboard> {
        let Some(tournaments) = self.tournaments.recent_tournaments(year) else {
            return Vec::new();
        };

        let valid = self.valid_tournaments(tournaments);
        let fetched = self.fetch_leaderboards(&valid);
        self.surviving_leaderboards(fetched)
    }

    /// Drop tournaments that fail structural validation, preserving order.
    fn valid_tournaments(&self, tournaments: Vec<Tournament>) -> Vec<Tournament> {
        tournaments
            .into_iter()
            .filter(|tournament| {
                let report = validate_tournament(tournament);
                if !report.is_valid() {
                    warn!(
                        "dropping tournament {} ({:?}): {report}",
                        tournament.id, tournament.name
                    );
                }
                report.is_valid()
            })
            .collect()
    }

    /// Fan out one leaderboard request per tournament and join on all of
    /// them. `collect()` fills slots in input order, so each result stays
    /// associated with its tournament regardless of completion order.
    /// A `None` from the gateway means that tournament has no leaderboard;
    /// it is dropped without disturbing the other branches.
    fn fetch_leaderboards(&self, tournaments: &[Tournament]) -> Vec<Leaderboard> {
        tournaments
            .par_iter()
            .map(|tournament| self.leaderboards.leaderboard(tournament.id))
            .collect::<Vec<Option<Leaderboard>>>()
            .into_iter()
            .flatten()
            .collect()
    }

    /// Keep leaderboards where the target player appears, then apply the
    /// full leaderboard validator to what remains.
    fn surviving_leaderboards(&self, leaderboards: Vec<Leaderboard>) -> Vec<Leaderboard> {
        leaderboards
            .into_iter()
            .filter(|board| board.has_player(&self.target_player))
            .filter(|board| {
                let report = validate_leaderboard(board);
                if !report.is_valid() {
                    let name = board
                        .tournament
                        .as_ref()
                        .map(|t| t.name.as_str())
                        .unwrap_or("<unknown>");
                    warn!("dropping leaderboard for {name:?}: {report}");
                }
                report.is_valid()
            })
            .collect()
    }
}
