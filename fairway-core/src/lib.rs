//! Fairway Core — season tournament tracking for a single target player.
//!
//! This crate contains everything except the console surface:
//! - Domain types (tournaments, player results, leaderboards)
//! - Structural validators with rule-level violation reporting
//! - Gateway traits over the remote sports-data provider
//! - The sportsdata.io HTTP gateway
//! - The tracker pipeline (validate → fan out → filter → validate)

pub mod domain;
pub mod gateway;
pub mod pipeline;
pub mod sportsdata;
pub mod validate;
