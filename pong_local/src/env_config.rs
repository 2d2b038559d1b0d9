//! Process settings read from the environment.
//!
//! `PONG_STATS_FILE`, `PONG_SCORES_FILE`, `PONG_SEED`, `PONG_REALTIME` and
//! `PONG_WAIT_FOR_EXIT`; every one has a default.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use stats::{DEFAULT_SCORES_FILE, DEFAULT_STATS_FILE};

#[derive(Debug, Clone)]
pub struct Settings {
    pub stats_path: PathBuf,
    pub scores_path: PathBuf,
    pub seed: u64,
    /// Sleep between ticks; off for headless runs
    pub realtime: bool,
    pub wait_for_exit: bool,
}

impl Settings {
    pub fn from_env() -> Self {
        let var = |name: &str| std::env::var(name).ok();
        Self {
            stats_path: var("PONG_STATS_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STATS_FILE)),
            scores_path: var("PONG_SCORES_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_SCORES_FILE)),
            seed: parse_seed(var("PONG_SEED")),
            realtime: parse_flag(var("PONG_REALTIME"), true),
            wait_for_exit: parse_flag(var("PONG_WAIT_FOR_EXIT"), true),
        }
    }
}

/// Numeric seed, or one derived from the current time
fn parse_seed(raw: Option<String>) -> u64 {
    raw.and_then(|s| s.trim().parse().ok()).unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(12345)
    })
}

/// `0`/`false`/`no`/`off` disable, anything else enables
fn parse_flag(raw: Option<String>, default: bool) -> bool {
    match raw {
        Some(value) => !matches!(
            value.trim().to_ascii_lowercase().as_str(),
            "0" | "false" | "no" | "off"
        ),
        None => default,
    }
}
