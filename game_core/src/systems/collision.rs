use crate::{Ball, Config, Events, Paddle, Params, Players, Side};
use hecs::World;
use tracing::debug;

/// Bounce the ball off the top and bottom of the playfield.
/// Re-evaluated every tick; a ball still past the bound next tick flips again.
pub fn check_wall_collision(world: &mut World, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.pos.y.abs() > Params::WALL_BOUND {
            ball.bounce_vertical();
            events.ball_hit_wall = true;
            debug!(y = ball.pos.y, "ball hit wall");
        }
    }
}

/// Whether a ball at `ball` is past `side`'s engagement line and close
/// enough to the paddle centre to count as a hit.
pub fn paddle_contact(config: &Config, side: Side, paddle_y: f32, ball: glam::Vec2) -> bool {
    let paddle_pos = glam::Vec2::new(config.paddle_x(side), paddle_y);
    let crossed = match side {
        Side::Right => ball.x > Params::ENGAGEMENT_LINE,
        Side::Left => ball.x < -Params::ENGAGEMENT_LINE,
    };
    crossed && ball.distance(paddle_pos) < Params::HIT_DISTANCE
}

/// Check ball against both paddles
pub fn check_paddle_collision(
    world: &mut World,
    config: &Config,
    players: &Players,
    events: &mut Events,
) {
    // Collect paddle data without holding borrows
    let paddles: Vec<(Side, f32)> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, p)| (p.side, p.y))
        .collect();

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        for &(side, paddle_y) in &paddles {
            if paddle_contact(config, side, paddle_y, ball.pos) {
                ball.bounce_horizontal();
                events.ball_hit_paddle = Some(side);
                debug!("{} hit the ball!", players[side].name);
            }
        }
    }
}
