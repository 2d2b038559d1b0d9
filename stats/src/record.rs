use chrono::Local;
use game_core::{Players, Score, Side};
use serde::{Deserialize, Serialize};

/// Line that opens and closes every block in the score log
pub const RECORD_SEPARATOR: &str = "==================================================";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Local time in the format used by both files
pub fn timestamp() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

/// On-disk shape of the stats file. Missing fields read as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistedStats {
    pub player1_wins: u32,
    pub player1_games: u32,
    pub player2_wins: u32,
    pub player2_games: u32,
    pub last_updated: String,
}

impl PersistedStats {
    pub fn from_players(players: &Players, last_updated: String) -> Self {
        Self {
            player1_wins: players.left.total_wins,
            player1_games: players.left.total_games,
            player2_wins: players.right.total_wins,
            player2_games: players.right.total_games,
            last_updated,
        }
    }

    /// Copy the cumulative counters onto the profiles
    pub fn apply_to(&self, players: &mut Players) {
        players.left.total_wins = self.player1_wins;
        players.left.total_games = self.player1_games;
        players.right.total_wins = self.player2_wins;
        players.right.total_games = self.player2_games;
    }
}

/// One score-log block, leading blank line included
pub fn format_score_record(
    winner: Side,
    players: &Players,
    score: &Score,
    timestamp: &str,
) -> String {
    format!(
        "\n{sep}\nGame Date: {timestamp}\nWinner: {winner}\nFinal Score - {left}: {l} | {right}: {r}\n{sep}\n",
        sep = RECORD_SEPARATOR,
        winner = players[winner].name,
        left = players.left.name,
        l = score.left,
        right = players.right.name,
        r = score.right,
    )
}
