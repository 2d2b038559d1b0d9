use std::collections::VecDeque;

use glam::Vec2;

use crate::{Config, Params};

/// Which half of the court an entity belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Left, Side::Right];

    pub fn opponent(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Paddle component - represents a player's paddle
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub y: f32, // Y position, |y| < half height - margin
}

impl Paddle {
    pub fn new(side: Side, y: f32) -> Self {
        Self { side, y }
    }

    /// Move up by one paddle step. Rejected moves leave the paddle where it is.
    pub fn move_up(&mut self, config: &Config) -> bool {
        let proposed = self.y + config.paddle_speed;
        if proposed < config.paddle_limit() {
            self.y = proposed;
            true
        } else {
            false
        }
    }

    /// Mirror of [`Paddle::move_up`]
    pub fn move_down(&mut self, config: &Config) -> bool {
        let proposed = self.y - config.paddle_speed;
        if proposed > -config.paddle_limit() {
            self.y = proposed;
            true
        } else {
            false
        }
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Seconds between ticks; shrinks on every paddle hit
    pub speed: f32,
    /// Most recent positions, oldest first
    pub trail: VecDeque<Vec2>,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, speed: f32) -> Self {
        Self {
            pos,
            vel,
            speed,
            trail: VecDeque::with_capacity(Params::TRAIL_LEN),
        }
    }

    /// Ball at the centre heading up and to the right
    pub fn serve(config: &Config) -> Self {
        Self::new(
            Vec2::ZERO,
            Vec2::splat(Params::BALL_STEP),
            config.ball_speed,
        )
    }

    /// Move by one tick and remember the new position
    pub fn advance(&mut self) {
        self.pos += self.vel;
        if self.trail.len() == Params::TRAIL_LEN {
            self.trail.pop_front();
        }
        self.trail.push_back(self.pos);
    }

    /// Bounce off the top or bottom wall
    pub fn bounce_vertical(&mut self) {
        self.vel.y = -self.vel.y;
    }

    /// Bounce off a paddle. The tick delay shrinks, so the ball speeds up.
    pub fn bounce_horizontal(&mut self) {
        self.flip_horizontal();
        self.speed *= Params::BALL_SPEED_DECAY;
    }

    fn flip_horizontal(&mut self) {
        self.vel.x = -self.vel.x;
    }

    /// Back to the centre at the initial speed, then reverse horizontal direction.
    /// The serve goes back toward whichever side the ball just left through.
    pub fn reset_to_center(&mut self, initial_speed: f32) {
        self.pos = Vec2::ZERO;
        self.speed = initial_speed;
        self.trail.clear();
        self.flip_horizontal();
    }
}
