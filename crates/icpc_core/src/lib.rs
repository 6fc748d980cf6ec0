//! # icpc_core - Deterministic ICPC Contest Scoreboard Engine
//!
//! This library maintains a competitive-programming contest scoreboard
//! from a sequential event stream: team registration, judged
//! submissions, board freezing, and the scroll procedure that reveals
//! frozen results one ranking change at a time.
//!
//! ## Features
//! - Exact ICPC scoring: first-accept time plus 20 minutes per prior
//!   rejection, tie-broken by descending solve times and team name
//! - Freeze/scroll mechanics with order-sensitive reveal narration
//! - Fully sequential and deterministic: same event stream, same board

pub mod board;
pub mod engine;
pub mod error;
pub mod models;
pub mod ranking;
pub mod reveal;
pub mod store;

pub use board::{BoardRow, Cell};
pub use engine::{RankingReport, Scoreboard};
pub use error::{ContestError, ContestResult};
pub use models::{ProblemPhase, ProblemState, Submission, Team, Verdict};
pub use reveal::{RevealEvent, ScrollReport};
pub use store::TeamStore;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
