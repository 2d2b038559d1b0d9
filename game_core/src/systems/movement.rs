use crate::{Ball, Config, InputLatch, Move, Paddle, Side};
use hecs::World;
use tracing::debug;

/// Apply one move to the paddle on `side`. Returns false when the move was
/// rejected at the bound or no such paddle exists.
pub fn move_paddle(world: &mut World, config: &Config, side: Side, mv: Move) -> bool {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side != side {
            continue;
        }
        let moved = match mv {
            Move::Up => paddle.move_up(config),
            Move::Down => paddle.move_down(config),
        };
        if !moved {
            debug!(?side, ?mv, y = paddle.y, "paddle move rejected at bound");
        }
        return moved;
    }
    false
}

/// Drain latched intents into paddle moves
pub fn apply_inputs(world: &mut World, config: &Config, latch: &mut InputLatch) {
    for side in Side::BOTH {
        if let Some(mv) = latch.take(side) {
            move_paddle(world, config, side, mv);
        }
    }
}

/// Move ball by one tick
pub fn move_ball(world: &mut World) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.advance();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle};

    fn paddle_y(world: &World, side: Side) -> f32 {
        world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, p)| p.side == side)
            .map(|(_e, p)| p.y)
            .unwrap()
    }

    #[test]
    fn test_move_paddle_targets_one_side() {
        let mut world = World::new();
        let config = Config::new();
        create_paddle(&mut world, Side::Left);
        create_paddle(&mut world, Side::Right);

        assert!(move_paddle(&mut world, &config, Side::Right, Move::Up));

        assert_eq!(paddle_y(&world, Side::Right), 20.0);
        assert_eq!(paddle_y(&world, Side::Left), 0.0);
    }

    #[test]
    fn test_move_paddle_without_paddle() {
        let mut world = World::new();
        let config = Config::new();
        assert!(!move_paddle(&mut world, &config, Side::Left, Move::Down));
    }

    #[test]
    fn test_apply_inputs_drains_latch() {
        let mut world = World::new();
        let config = Config::new();
        create_paddle(&mut world, Side::Left);
        let mut latch = InputLatch::new();
        latch.set(Side::Left, Move::Down);

        apply_inputs(&mut world, &config, &mut latch);
        apply_inputs(&mut world, &config, &mut latch);

        assert_eq!(paddle_y(&world, Side::Left), -20.0, "Applied once");
        assert_eq!(latch.peek(Side::Left), None);
    }

    #[test]
    fn test_move_ball() {
        let mut world = World::new();
        let config = Config::new();
        create_ball(&mut world, &config);

        move_ball(&mut world);

        for (_entity, ball) in world.query::<&Ball>().iter() {
            assert_eq!(ball.pos, glam::Vec2::new(10.0, 10.0));
            assert_eq!(ball.trail.len(), 1);
        }
    }
}
