//! Draw descriptions handed to whatever surface displays the game.
//!
//! Entities describe themselves as [`DrawCommand`]s; the core never reads
//! anything back from the renderer.

use glam::Vec2;

use crate::{Ball, Config, MatchState, Paddle, Players, Side};

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Paddle {
        side: Side,
        pos: Vec2,
    },
    Ball {
        pos: Vec2,
        trail: Vec<Vec2>,
    },
    Score {
        left: u32,
        right: u32,
    },
    Names {
        left: String,
        right: String,
        left_color: String,
        right_color: String,
    },
    GameOver {
        headline: String,
        color: String,
        final_score: String,
        recent: String,
    },
}

/// Something that can describe itself for the current frame
pub trait Drawable {
    fn draw(&self, config: &Config, out: &mut Vec<DrawCommand>);
}

/// Fire-and-forget display surface
pub trait Renderer {
    fn present(&mut self, frame: &[DrawCommand]);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn present(&mut self, _frame: &[DrawCommand]) {}
}

impl Drawable for Paddle {
    fn draw(&self, config: &Config, out: &mut Vec<DrawCommand>) {
        out.push(DrawCommand::Paddle {
            side: self.side,
            pos: Vec2::new(config.paddle_x(self.side), self.y),
        });
    }
}

impl Drawable for Ball {
    fn draw(&self, _config: &Config, out: &mut Vec<DrawCommand>) {
        out.push(DrawCommand::Ball {
            pos: self.pos,
            trail: self.trail.iter().copied().collect(),
        });
    }
}

/// Score display: borrows the match state and the players it names
pub struct Scoreboard<'a> {
    pub state: &'a MatchState,
    pub players: &'a Players,
}

impl<'a> Scoreboard<'a> {
    pub fn new(state: &'a MatchState, players: &'a Players) -> Self {
        Self { state, players }
    }
}

impl Drawable for Scoreboard<'_> {
    fn draw(&self, _config: &Config, out: &mut Vec<DrawCommand>) {
        out.push(DrawCommand::Score {
            left: self.state.score.left,
            right: self.state.score.right,
        });
        out.push(DrawCommand::Names {
            left: self.players.left.name.clone(),
            right: self.players.right.name.clone(),
            left_color: self.players.left.color.clone(),
            right_color: self.players.right.color.clone(),
        });

        if let Some(winner) = self.state.winner {
            let profile = &self.players[winner];
            out.push(DrawCommand::GameOver {
                headline: format!("{} WINS!", profile.name),
                color: profile.color.clone(),
                final_score: format!("Final Score: {}", self.state.score),
                recent: format!("Recent Scores: {}", self.state.recent_summary()),
            });
        }
    }
}
