//! Paddle input
//!
//! Input sources latch at most one move per paddle between ticks. A newer
//! intent replaces an older one, so nothing queues up behind a slow tick.

use std::collections::VecDeque;

use glam::Vec2;

use crate::{Players, Side};

/// One paddle step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    Up,
    Down,
}

/// Latest pending move per side
#[derive(Debug, Clone, Copy, Default)]
pub struct InputLatch {
    left: Option<Move>,
    right: Option<Move>,
}

impl InputLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Latch a move, replacing anything not yet applied for that side
    pub fn set(&mut self, side: Side, mv: Move) {
        *self.slot(side) = Some(mv);
    }

    pub fn take(&mut self, side: Side) -> Option<Move> {
        self.slot(side).take()
    }

    pub fn peek(&self, side: Side) -> Option<Move> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    fn slot(&mut self, side: Side) -> &mut Option<Move> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}

/// Read-only snapshot handed to input sources each tick
#[derive(Debug, Clone, Copy)]
pub struct TickView {
    pub tick: u64,
    pub ball_pos: Vec2,
    pub ball_vel: Vec2,
    pub left_y: f32,
    pub right_y: f32,
}

impl TickView {
    pub fn paddle_y(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.left_y,
            Side::Right => self.right_y,
        }
    }
}

/// Anything that produces paddle intents
pub trait InputSource {
    fn poll(&mut self, view: &TickView, latch: &mut InputLatch);
}

/// Never moves either paddle
#[derive(Debug, Clone, Copy, Default)]
pub struct IdleInput;

impl InputSource for IdleInput {
    fn poll(&mut self, _view: &TickView, _latch: &mut InputLatch) {}
}

/// Replays key presses, one batch per tick, through the players' bindings
#[derive(Debug, Clone)]
pub struct ScriptedKeys {
    players: Players,
    batches: VecDeque<Vec<String>>,
}

impl ScriptedKeys {
    pub fn new(players: &Players) -> Self {
        Self {
            players: players.clone(),
            batches: VecDeque::new(),
        }
    }

    /// Queue the keys pressed during one tick
    pub fn push_tick<I, S>(&mut self, keys: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.batches
            .push_back(keys.into_iter().map(Into::into).collect());
        self
    }

    pub fn remaining(&self) -> usize {
        self.batches.len()
    }
}

impl InputSource for ScriptedKeys {
    fn poll(&mut self, _view: &TickView, latch: &mut InputLatch) {
        let Some(keys) = self.batches.pop_front() else {
            return;
        };
        for key in keys {
            match self.players.resolve_key(&key) {
                Some((side, mv)) => latch.set(side, mv),
                None => tracing::debug!(key = %key, "unbound key ignored"),
            }
        }
    }
}
