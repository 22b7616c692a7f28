//! Gateway traits over the remote sports-data provider.
//!
//! `None` means "no data available" — the one non-success outcome the
//! pipeline observes. Implementations must collapse transport and decoding
//! faults into the same `None`; the pipeline cannot tell them apart and
//! must not try.

use crate::domain::{Leaderboard, Tournament, TournamentId};

/// Source of the season tournament list.
pub trait TournamentGateway: Send + Sync {
    /// Tournaments for one season year, or `None` when the provider has
    /// nothing for it.
    fn recent_tournaments(&self, year: i32) -> Option<Vec<Tournament>>;
}

/// Source of per-tournament leaderboards.
pub trait LeaderboardGateway: Send + Sync {
    /// The leaderboard for one tournament, or `None` when the provider has
    /// nothing for it.
    fn leaderboard(&self, id: TournamentId) -> Option<Leaderboard>;
}
