//! Match progression: points, the win check, and the game-over transition

use std::collections::VecDeque;
use std::fmt;

use tracing::info;

use crate::{Config, Params, Players, Side};

/// Points in the current match
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub left: u32,
    pub right: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    /// Add one point and return the new total for that side
    pub fn increment(&mut self, side: Side) -> u32 {
        let slot = match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        };
        *slot += 1;
        *slot
    }

    pub fn has_winner(&self, win_score: u32) -> Option<Side> {
        if self.left >= win_score {
            Some(Side::Left)
        } else if self.right >= win_score {
            Some(Side::Right)
        } else {
            None
        }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.left, self.right)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPhase {
    InPlay,
    /// Terminal
    GameOver,
}

/// A scorer's name and their total right after the point
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreEvent {
    pub name: String,
    pub score: u32,
}

/// Receives the result of a finished match
pub trait MatchRecorder {
    fn record_match(&mut self, winner: Side, players: &Players, score: &Score);
}

/// Discards match results
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRecorder;

impl MatchRecorder for NullRecorder {
    fn record_match(&mut self, _winner: Side, _players: &Players, _score: &Score) {}
}

/// Score, phase and recent scoring history for one match
#[derive(Debug, Clone)]
pub struct MatchState {
    pub score: Score,
    pub phase: MatchPhase,
    pub winner: Option<Side>,
    /// Oldest first, bounded
    pub recent: VecDeque<ScoreEvent>,
}

impl Default for MatchState {
    fn default() -> Self {
        Self {
            score: Score::new(),
            phase: MatchPhase::InPlay,
            winner: None,
            recent: VecDeque::with_capacity(Params::SCORE_HISTORY_LEN),
        }
    }
}

impl MatchState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_over(&self) -> bool {
        self.phase == MatchPhase::GameOver
    }

    /// Credit a point to `side`, finishing the match once it reaches the
    /// winning score. Ignored after game over.
    pub fn add_point(
        &mut self,
        side: Side,
        players: &mut Players,
        config: &Config,
        recorder: &mut dyn MatchRecorder,
    ) -> MatchPhase {
        if self.is_over() {
            return self.phase;
        }

        let total = self.score.increment(side);
        players[side].score = total;

        if self.recent.len() == Params::SCORE_HISTORY_LEN {
            self.recent.pop_front();
        }
        self.recent.push_back(ScoreEvent {
            name: players[side].name.clone(),
            score: total,
        });

        info!("{} scored! Score: {}", players[side].name, self.score);

        if let Some(winner) = self.score.has_winner(config.winning_score) {
            self.finalize(winner, players, recorder);
        }
        self.phase
    }

    /// Enter GAME_OVER, update cumulative counters and hand the result to
    /// `recorder` before returning.
    pub fn finalize(
        &mut self,
        winner: Side,
        players: &mut Players,
        recorder: &mut dyn MatchRecorder,
    ) {
        if self.is_over() {
            return;
        }
        self.phase = MatchPhase::GameOver;
        self.winner = Some(winner);

        players[winner].total_wins += 1;
        for side in Side::BOTH {
            players[side].total_games += 1;
        }

        info!(
            "GAME OVER! {} WINS! Final Score: {}",
            players[winner].name, self.score
        );
        recorder.record_match(winner, players, &self.score);
    }

    /// `[('Player 1', 1), ('Player 2', 1)]` style listing of recent points
    pub fn recent_summary(&self) -> String {
        let entries: Vec<String> = self
            .recent
            .iter()
            .map(|event| format!("('{}', {})", event.name, event.score))
            .collect();
        format!("[{}]", entries.join(", "))
    }
}
