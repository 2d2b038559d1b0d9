//! Computer-controlled paddles
//!
//! Tracks the ball while it approaches and drifts back to the middle
//! otherwise. A seeded chance to skip each tick keeps rallies finite.

use rand::Rng;

use crate::{GameRng, InputLatch, InputSource, Move, Side, TickView};

pub struct Autopilot {
    rng: GameRng,
    sides: Vec<Side>,
    /// Probability of sitting out a tick, kept in [0, 1]
    hesitation: f64,
    pub deadzone: f32,
}

impl Autopilot {
    pub const DEFAULT_HESITATION: f64 = 0.45;

    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
            sides: Side::BOTH.to_vec(),
            hesitation: Self::DEFAULT_HESITATION,
            deadzone: 10.0,
        }
    }

    /// Only drive the given sides
    pub fn for_sides(mut self, sides: &[Side]) -> Self {
        self.sides = sides.to_vec();
        self
    }

    pub fn with_hesitation(mut self, hesitation: f64) -> Self {
        self.hesitation = hesitation.clamp(0.0, 1.0);
        self
    }

    pub fn hesitation(&self) -> f64 {
        self.hesitation
    }

    fn decide(&self, view: &TickView, side: Side) -> Option<Move> {
        let approaching = match side {
            Side::Left => view.ball_vel.x < 0.0,
            Side::Right => view.ball_vel.x > 0.0,
        };
        let target_y = if approaching { view.ball_pos.y } else { 0.0 };
        let diff = target_y - view.paddle_y(side);

        if diff > self.deadzone {
            Some(Move::Up)
        } else if diff < -self.deadzone {
            Some(Move::Down)
        } else {
            None
        }
    }
}

impl InputSource for Autopilot {
    fn poll(&mut self, view: &TickView, latch: &mut InputLatch) {
        for &side in &self.sides {
            if self.rng.0.gen_bool(self.hesitation) {
                continue;
            }
            if let Some(mv) = self.decide(view, side) {
                latch.set(side, mv);
            }
        }
    }
}
