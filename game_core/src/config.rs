use std::time::Duration;

use crate::{Params, Side};

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub screen_width: f32,
    pub screen_height: f32,
    pub bg_color: String,
    pub paddle_speed: f32,
    pub ball_speed: f32,
    pub winning_score: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            screen_width: Params::SCREEN_WIDTH,
            screen_height: Params::SCREEN_HEIGHT,
            bg_color: Params::BG_COLOR.to_string(),
            paddle_speed: Params::PADDLE_SPEED,
            ball_speed: Params::BALL_SPEED,
            winning_score: Params::WIN_SCORE,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Largest |y| a paddle centre may reach (exclusive)
    pub fn paddle_limit(&self) -> f32 {
        self.screen_height / 2.0 - Params::PADDLE_MARGIN
    }

    /// Get X position for paddle based on side
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => -Params::PADDLE_X,
            Side::Right => Params::PADDLE_X,
        }
    }

    /// Convert a ball speed scalar into the delay before the next tick.
    /// Non-finite or negative scalars collapse to zero.
    pub fn tick_delay(&self, speed_scalar: f32) -> Duration {
        if speed_scalar.is_finite() && speed_scalar > 0.0 {
            Duration::from_secs_f32(speed_scalar)
        } else {
            Duration::ZERO
        }
    }
}
