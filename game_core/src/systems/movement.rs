use crate::{Ball, Config, Paddle, PaddleIntent, Time};
use hecs::World;

/// Apply paddle movement based on intents
pub fn move_paddles(world: &mut World, time: &Time, config: &Config) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&mut Paddle, &PaddleIntent)>() {
        if intent.dir != 0 {
            paddle.move_by(intent.dir, time.dt, config);
        }
    }
}

/// Move ball based on velocity
pub fn move_ball(world: &mut World, time: &Time) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.advance(time.dt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        check_collisions, check_scoring, create_ball, create_paddle, Events, GameMap, GameRng,
        Score, Side,
    };
    use glam::Vec2;

    #[test]
    fn test_ball_reaches_paddle_line_in_74_ticks() {
        let mut world = World::new();
        let ball = create_ball(&mut world, Vec2::new(400.0, 300.0), Vec2::new(5.0, 0.0));
        let tick = Time::new(1.0, 0.0);

        for _ in 0..74 {
            move_ball(&mut world, &tick);
        }

        let ball = world.get::<&Ball>(ball).unwrap();
        assert_eq!(ball.pos, Vec2::new(770.0, 300.0));
    }

    #[test]
    fn test_ball_reflects_at_right_paddle_line() {
        let mut world = World::new();
        let config = Config::new();
        let map = GameMap::new();
        let mut score = Score::new();
        let mut rng = GameRng::new(12345);
        create_paddle(&mut world, Side::Right, 250.0);
        let ball = create_ball(&mut world, Vec2::new(400.0, 300.0), Vec2::new(5.0, 0.0));
        let tick = Time::new(1.0, 0.0);

        let mut hit_tick = None;
        for n in 1..=74 {
            let mut events = Events::new();
            move_ball(&mut world, &tick);
            check_collisions(&mut world, &map, &config, &mut events);
            check_scoring(&mut world, &map, &mut score, &mut events, &mut rng, &config);

            if events.ball_hit_paddle {
                hit_tick = Some(n);
                break;
            }
            assert!(world.get::<&Ball>(ball).unwrap().vel.x > 0.0);
        }

        // Face at x = 764, so the ball's edge touches it once the centre reaches 760
        assert_eq!(hit_tick, Some(72));
        let ball = world.get::<&Ball>(ball).unwrap();
        assert!(ball.vel.x < 0.0);
        assert_eq!(ball.pos.x, 764.0 - config.ball_radius);
        assert_eq!(score, Score::new());
    }

    #[test]
    fn test_paddle_follows_intent() {
        let mut world = World::new();
        let config = Config::new();
        let paddle = create_paddle(&mut world, Side::Left, 250.0);
        world.get::<&mut PaddleIntent>(paddle).unwrap().dir = -1;

        move_paddles(&mut world, &Time::new(0.1, 0.0), &config);

        let y = world.get::<&Paddle>(paddle).unwrap().y;
        assert!((y - (250.0 - config.paddle_speed * 0.1)).abs() < 1e-3);
    }

    #[test]
    fn test_idle_paddle_stays_put() {
        let mut world = World::new();
        let config = Config::new();
        let paddle = create_paddle(&mut world, Side::Left, 123.0);

        move_paddles(&mut world, &Time::new(0.1, 0.0), &config);

        assert_eq!(world.get::<&Paddle>(paddle).unwrap().y, 123.0);
    }
}
