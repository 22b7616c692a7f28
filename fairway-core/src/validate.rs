//! Structural validators with rule-level reporting.
//!
//! Each entity gets a pure function that checks every rule and accumulates
//! violations rather than short-circuiting. The leaderboard validator
//! composes the tournament and player validators explicitly, prefixing
//! nested rule identifiers (`tournament.`, `players[i].`).

use crate::domain::{Leaderboard, PlayerResult, Tournament};
use serde::Serialize;
use std::fmt;

/// A single violated rule: stable identifier plus operator-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub rule: String,
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.rule, self.message)
    }
}

/// Accumulated verdict for one record. Valid iff no violations.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Report {
    violations: Vec<Violation>,
}

impl Report {
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    fn push(&mut self, rule: &str, message: &str) {
        self.violations.push(Violation {
            rule: rule.to_string(),
            message: message.to_string(),
        });
    }

    /// Fold a child record's report into this one, prefixing its rule
    /// identifiers so nested violations stay attributable.
    fn absorb(&mut self, prefix: &str, child: Report) {
        for v in child.violations {
            self.violations.push(Violation {
                rule: format!("{prefix}.{}", v.rule),
                message: v.message,
            });
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for v in &self.violations {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{v}")?;
            first = false;
        }
        Ok(())
    }
}

/// Check a tournament: non-empty name, present start date.
///
/// There is deliberately no "start date must be in the past" rule — the
/// season feed legitimately lists tournaments that have not started yet.
pub fn validate_tournament(tournament: &Tournament) -> Report {
    let mut report = Report::default();
    if tournament.name.is_empty() {
        report.push("name.non_empty", "tournament name is required");
    }
    if tournament.start_date.is_none() {
        report.push("start_date.present", "tournament start date is required");
    }
    report
}

/// Check one player line: non-empty name, positive rank, present score.
/// Any score value is accepted, including zero and negative.
pub fn validate_player_result(player: &PlayerResult) -> Report {
    let mut report = Report::default();
    if player.name.is_empty() {
        report.push("name.non_empty", "player name is required");
    }
    match player.rank {
        Some(rank) if rank > 0 => {}
        _ => report.push(
            "rank.present_and_positive",
            "player rank must be present and greater than 0",
        ),
    }
    if player.total_score.is_none() {
        report.push("total_score.present", "player total score is required");
    }
    report
}

/// Check a leaderboard: tournament present and valid, at least one player,
/// every player valid. Sub-violations surface under this report with
/// `tournament.` / `players[i].` prefixes.
pub fn validate_leaderboard(leaderboard: &Leaderboard) -> Report {
    let mut report = Report::default();
    match &leaderboard.tournament {
        None => report.push("tournament.present", "tournament is required"),
        Some(tournament) => report.absorb("tournament", validate_tournament(tournament)),
    }
    if leaderboard.players.is_empty() {
        report.push("players.present_non_empty", "at least one player is required");
    }
    for (i, player) in leaderboard.players.iter().enumerate() {
        report.absorb(&format!("players[{i}]"), validate_player_result(player));
    }
    report
}
