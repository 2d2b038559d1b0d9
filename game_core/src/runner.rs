//! Fixed-delay scheduler
//!
//! One tick runs per loop iteration, after a delay equal to the ball's speed
//! scalar. The delay goes through [`Clock`] so tests can step matches
//! without waiting on the wall clock.

use std::time::Duration;

use glam::Vec2;
use hecs::World;
use tracing::{debug, info};

use crate::{
    create_ball, create_paddle, step, Ball, Config, DrawCommand, Drawable, Events, InputLatch,
    InputSource, MatchRecorder, MatchState, Move, Paddle, Players, Renderer, Scoreboard, Side,
    TickView,
};

/// Source of the delay between ticks
pub trait Clock {
    fn sleep(&mut self, delay: Duration);
}

/// Blocks the current thread
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadClock;

impl Clock for ThreadClock {
    fn sleep(&mut self, delay: Duration) {
        std::thread::sleep(delay);
    }
}

/// Returns immediately
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelayClock;

impl Clock for NoDelayClock {
    fn sleep(&mut self, _delay: Duration) {}
}

/// Records requested delays without sleeping
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    pub elapsed: Duration,
    pub sleeps: Vec<Duration>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clock for ManualClock {
    fn sleep(&mut self, delay: Duration) {
        self.elapsed += delay;
        self.sleeps.push(delay);
    }
}

/// Owns everything one match needs
pub struct Simulation {
    pub world: World,
    pub config: Config,
    pub players: Players,
    pub match_state: MatchState,
    pub events: Events,
    pub latch: InputLatch,
    pub tick: u64,
}

impl Simulation {
    pub fn new(config: Config, mut players: Players) -> Self {
        let mut world = World::new();
        create_paddle(&mut world, Side::Left);
        create_paddle(&mut world, Side::Right);
        create_ball(&mut world, &config);

        for side in Side::BOTH {
            players[side].score = 0;
        }

        Self {
            world,
            config,
            players,
            match_state: MatchState::new(),
            events: Events::new(),
            latch: InputLatch::new(),
            tick: 0,
        }
    }

    pub fn is_over(&self) -> bool {
        self.match_state.is_over()
    }

    pub fn winner(&self) -> Option<Side> {
        self.match_state.winner
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| ball.clone())
    }

    /// Replace the ball state, e.g. to set up a specific situation
    pub fn set_ball(&mut self, pos: Vec2, vel: Vec2) {
        for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
            ball.pos = pos;
            ball.vel = vel;
        }
    }

    pub fn paddle_y(&self, side: Side) -> Option<f32> {
        self.world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, paddle)| paddle.side == side)
            .map(|(_e, paddle)| paddle.y)
    }

    /// Move a paddle right away, outside the tick
    pub fn move_paddle(&mut self, side: Side, mv: Move) -> bool {
        crate::systems::move_paddle(&mut self.world, &self.config, side, mv)
    }

    /// Key-press entry point: resolves through the players' bindings
    pub fn press_key(&mut self, key: &str) -> bool {
        match self.players.resolve_key(key) {
            Some((side, mv)) => self.move_paddle(side, mv),
            None => false,
        }
    }

    /// Delay before the next tick
    pub fn tick_delay(&self) -> Duration {
        let speed = self
            .ball()
            .map_or(self.config.ball_speed, |ball| ball.speed);
        self.config.tick_delay(speed)
    }

    pub fn view(&self) -> TickView {
        let (ball_pos, ball_vel) = self
            .ball()
            .map_or((Vec2::ZERO, Vec2::ZERO), |ball| (ball.pos, ball.vel));
        TickView {
            tick: self.tick,
            ball_pos,
            ball_vel,
            left_y: self.paddle_y(Side::Left).unwrap_or_default(),
            right_y: self.paddle_y(Side::Right).unwrap_or_default(),
        }
    }

    /// Advance by one tick. Returns false once the match is over.
    pub fn step(&mut self, recorder: &mut dyn MatchRecorder) -> bool {
        if self.is_over() {
            return false;
        }
        step(
            &mut self.world,
            &self.config,
            &mut self.match_state,
            &mut self.players,
            &mut self.events,
            &mut self.latch,
            recorder,
        );
        self.tick += 1;
        true
    }

    /// Everything the renderer needs for the current state
    pub fn frame(&self) -> Vec<DrawCommand> {
        let mut out = Vec::new();
        for (_e, paddle) in self.world.query::<&Paddle>().iter() {
            paddle.draw(&self.config, &mut out);
        }
        for (_e, ball) in self.world.query::<&Ball>().iter() {
            ball.draw(&self.config, &mut out);
        }
        Scoreboard::new(&self.match_state, &self.players).draw(&self.config, &mut out);
        out
    }

    /// Play until a side wins. Returns the winner.
    pub fn run(
        &mut self,
        clock: &mut dyn Clock,
        input: &mut dyn InputSource,
        renderer: &mut dyn Renderer,
        recorder: &mut dyn MatchRecorder,
    ) -> Option<Side> {
        info!(
            winning_score = self.config.winning_score,
            "match started: {} vs {}", self.players.left.name, self.players.right.name
        );

        while !self.is_over() {
            clock.sleep(self.tick_delay());
            renderer.present(&self.frame());

            let view = self.view();
            input.poll(&view, &mut self.latch);
            self.step(recorder);
        }

        renderer.present(&self.frame());
        debug!(ticks = self.tick, "match loop finished");
        self.winner()
    }
}
