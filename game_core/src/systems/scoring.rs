use crate::{Ball, Config, Events, MatchRecorder, MatchState, Params, Players, Side};
use hecs::World;

/// Check if ball left the playfield; reset it and credit the opposite side.
/// Returns the side that scored.
pub fn check_scoring(
    world: &mut World,
    config: &Config,
    match_state: &mut MatchState,
    players: &mut Players,
    events: &mut Events,
    recorder: &mut dyn MatchRecorder,
) -> Option<Side> {
    let mut scorer = None;
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.pos.x > Params::SCORE_LINE {
            // Left player scores
            ball.reset_to_center(config.ball_speed);
            events.left_scored = true;
            scorer = Some(Side::Left);
        } else if ball.pos.x < -Params::SCORE_LINE {
            // Right player scores
            ball.reset_to_center(config.ball_speed);
            events.right_scored = true;
            scorer = Some(Side::Right);
        }
    }

    if let Some(side) = scorer {
        match_state.add_point(side, players, config, recorder);
        events.game_over = match_state.is_over();
    }
    scorer
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, NullRecorder, Score};
    use glam::Vec2;

    fn setup_world() -> (World, Config, MatchState, Players, Events) {
        (
            World::new(),
            Config::new(),
            MatchState::new(),
            Players::new(),
            Events::new(),
        )
    }

    fn place_ball(world: &mut World, config: &Config, pos: Vec2, vel: Vec2) {
        let entity = create_ball(world, config);
        let mut ball = world.get::<&mut Ball>(entity).unwrap();
        ball.pos = pos;
        ball.vel = vel;
        ball.speed = 0.05;
        ball.trail.push_back(pos);
    }

    #[test]
    fn test_left_scores_when_ball_exits_right() {
        let (mut world, config, mut state, mut players, mut events) = setup_world();
        place_ball(&mut world, &config, Vec2::new(395.0, 40.0), Vec2::new(10.0, 10.0));

        let scorer = check_scoring(
            &mut world,
            &config,
            &mut state,
            &mut players,
            &mut events,
            &mut NullRecorder,
        );

        assert_eq!(scorer, Some(Side::Left));
        assert_eq!(state.score, Score { left: 1, right: 0 });
        assert!(events.left_scored);
        assert!(!events.game_over);
    }

    #[test]
    fn test_right_scores_when_ball_exits_left() {
        let (mut world, config, mut state, mut players, mut events) = setup_world();
        place_ball(&mut world, &config, Vec2::new(-381.0, 0.0), Vec2::new(-10.0, 10.0));

        check_scoring(
            &mut world,
            &config,
            &mut state,
            &mut players,
            &mut events,
            &mut NullRecorder,
        );

        assert_eq!(state.score, Score { left: 0, right: 1 });
        assert!(events.right_scored);
    }

    #[test]
    fn test_ball_resets_after_scoring() {
        let (mut world, config, mut state, mut players, mut events) = setup_world();
        place_ball(&mut world, &config, Vec2::new(-390.0, 100.0), Vec2::new(-10.0, -10.0));

        check_scoring(
            &mut world,
            &config,
            &mut state,
            &mut players,
            &mut events,
            &mut NullRecorder,
        );

        for (_entity, ball) in world.query::<&Ball>().iter() {
            assert_eq!(ball.pos, Vec2::ZERO, "Ball should reset to center");
            assert_eq!(ball.speed, config.ball_speed, "Speed restored exactly");
            assert!(ball.trail.is_empty());
            assert_eq!(ball.vel, Vec2::new(10.0, -10.0));
        }
    }

    #[test]
    fn test_no_scoring_when_ball_in_bounds() {
        let (mut world, config, mut state, mut players, mut events) = setup_world();
        place_ball(&mut world, &config, Vec2::new(380.0, 0.0), Vec2::new(10.0, 0.0));

        let scorer = check_scoring(
            &mut world,
            &config,
            &mut state,
            &mut players,
            &mut events,
            &mut NullRecorder,
        );

        assert_eq!(scorer, None);
        assert_eq!(state.score, Score::new());
    }

    #[test]
    fn test_winning_point_sets_game_over_event() {
        let (mut world, _config, mut state, mut players, mut events) = setup_world();
        let config = Config {
            winning_score: 1,
            ..Config::default()
        };
        place_ball(&mut world, &config, Vec2::new(390.0, 0.0), Vec2::new(10.0, 0.0));

        check_scoring(
            &mut world,
            &config,
            &mut state,
            &mut players,
            &mut events,
            &mut NullRecorder,
        );

        assert!(events.game_over);
        assert!(state.is_over());
    }
}
