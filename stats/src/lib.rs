//! Cross-session statistics for Pong
//!
//! Two files back the store: a JSON document holding cumulative wins and
//! games per player (rewritten on every save) and a plain-text score log
//! that only ever grows.

mod error;
mod record;
mod store;

pub use error::StatsError;
pub use record::{format_score_record, timestamp, PersistedStats, RECORD_SEPARATOR};
pub use store::{LoadOutcome, StatsStore, DEFAULT_SCORES_FILE, DEFAULT_STATS_FILE};
