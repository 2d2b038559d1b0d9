//! Deterministic core of a two-player Pong match: paddles, ball, collision
//! and scoring rules, match progression and the fixed-delay scheduler.

pub mod autopilot;
pub mod components;
pub mod config;
pub mod input;
pub mod params;
pub mod profile;
pub mod render;
pub mod resources;
pub mod runner;
pub mod scoreboard;
pub mod systems;

pub use autopilot::*;
pub use components::*;
pub use config::*;
pub use input::*;
pub use params::*;
pub use profile::*;
pub use render::*;
pub use resources::*;
pub use runner::*;
pub use scoreboard::*;

use hecs::World;
use systems::*;

/// Run one tick of the Pong simulation
#[allow(clippy::too_many_arguments)]
pub fn step(
    world: &mut World,
    config: &Config,
    match_state: &mut MatchState,
    players: &mut Players,
    events: &mut Events,
    latch: &mut InputLatch,
    recorder: &mut dyn MatchRecorder,
) {
    // Nothing moves once the match is decided
    if match_state.is_over() {
        return;
    }

    // Clear events at start of tick
    events.clear();

    // 1. Apply latched paddle moves
    apply_inputs(world, config, latch);

    // 2. Move ball
    move_ball(world);

    // 3. Check collisions (walls, then paddles)
    check_wall_collision(world, events);
    check_paddle_collision(world, config, players, events);

    // 4. Check scoring (ball exited playfield)
    check_scoring(world, config, match_state, players, events, recorder);
}

/// Helper to create a paddle entity at mid-height
pub fn create_paddle(world: &mut World, side: Side) -> hecs::Entity {
    world.spawn((Paddle::new(side, 0.0),))
}

/// Helper to create the ball entity at the centre
pub fn create_ball(world: &mut World, config: &Config) -> hecs::Entity {
    world.spawn((Ball::serve(config),))
}
