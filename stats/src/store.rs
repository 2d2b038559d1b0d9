use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use game_core::{MatchRecorder, Players, Score, Side};
use serde::Serialize;
use tracing::{error, info};

use crate::record::{format_score_record, timestamp, PersistedStats};
use crate::StatsError;

pub const DEFAULT_STATS_FILE: &str = "player_stats.json";
pub const DEFAULT_SCORES_FILE: &str = "game_scores.txt";

/// What [`StatsStore::load`] found
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded(PersistedStats),
    /// No stats file yet
    Fresh,
    /// File present but unreadable or malformed; defaults kept
    Failed,
}

/// Stats file plus append-only score log
#[derive(Debug, Clone)]
pub struct StatsStore {
    stats_path: PathBuf,
    scores_path: PathBuf,
}

impl Default for StatsStore {
    fn default() -> Self {
        Self::new(DEFAULT_STATS_FILE, DEFAULT_SCORES_FILE)
    }
}

impl StatsStore {
    pub fn new(stats_path: impl Into<PathBuf>, scores_path: impl Into<PathBuf>) -> Self {
        Self {
            stats_path: stats_path.into(),
            scores_path: scores_path.into(),
        }
    }

    pub fn stats_path(&self) -> &Path {
        &self.stats_path
    }

    pub fn scores_path(&self) -> &Path {
        &self.scores_path
    }

    /// Read the stats file. `Ok(None)` when it does not exist.
    pub fn read_stats(&self) -> Result<Option<PersistedStats>, StatsError> {
        let text = match fs::read_to_string(&self.stats_path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StatsError::io(&self.stats_path, e)),
        };
        serde_json::from_str(&text)
            .map(Some)
            .map_err(|e| StatsError::json(&self.stats_path, e))
    }

    /// Load cumulative counters into `players`. Never fails: a missing file
    /// is a first run, anything else is logged and the defaults stay.
    pub fn load(&self, players: &mut Players) -> LoadOutcome {
        match self.read_stats() {
            Ok(Some(stats)) => {
                stats.apply_to(players);
                info!(path = %self.stats_path.display(), "Loaded player statistics");
                LoadOutcome::Loaded(stats)
            }
            Ok(None) => {
                info!("No previous stats found. Starting fresh!");
                LoadOutcome::Fresh
            }
            Err(e) => {
                error!("Error loading stats: {e}");
                LoadOutcome::Failed
            }
        }
    }

    /// Overwrite the stats file with the current counters
    pub fn save(&self, players: &Players) -> Result<(), StatsError> {
        let stats = PersistedStats::from_players(players, timestamp());

        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        stats
            .serialize(&mut ser)
            .map_err(|e| StatsError::json(&self.stats_path, e))?;

        fs::write(&self.stats_path, buf).map_err(|e| StatsError::io(&self.stats_path, e))?;
        info!(path = %self.stats_path.display(), "Player statistics saved");
        Ok(())
    }

    /// Append one block to the score log, creating it if needed
    pub fn append_score_record(
        &self,
        winner: Side,
        players: &Players,
        score: &Score,
    ) -> Result<(), StatsError> {
        let block = format_score_record(winner, players, score, &timestamp());
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.scores_path)
            .map_err(|e| StatsError::io(&self.scores_path, e))?;
        file.write_all(block.as_bytes())
            .map_err(|e| StatsError::io(&self.scores_path, e))?;
        info!(path = %self.scores_path.display(), "Game score saved");
        Ok(())
    }

    /// Whole score log, or `None` when there is nothing recorded yet
    pub fn read_history(&self) -> Result<Option<String>, StatsError> {
        match fs::read_to_string(&self.scores_path) {
            Ok(text) if text.trim().is_empty() => Ok(None),
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StatsError::io(&self.scores_path, e)),
        }
    }
}

impl MatchRecorder for StatsStore {
    /// Best effort: failures are logged, never retried
    fn record_match(&mut self, winner: Side, players: &Players, score: &Score) {
        if let Err(e) = self.append_score_record(winner, players, score) {
            error!("Error saving score: {e}");
        }
        if let Err(e) = self.save(players) {
            error!("Error saving stats: {e}");
        }
    }
}
