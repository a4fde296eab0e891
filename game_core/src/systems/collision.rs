use crate::{Ball, Config, Events, GameMap, Paddle};
use hecs::World;

/// Check ball collisions with walls and paddles
pub fn check_collisions(world: &mut World, map: &GameMap, config: &Config, events: &mut Events) {
    // Collect paddle data first so the ball can be borrowed mutably
    let paddles: Vec<Paddle> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, paddle)| *paddle)
        .collect();

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.reflect_wall(map.height, config.ball_radius) {
            events.ball_hit_wall = true;
        }

        for paddle in &paddles {
            if ball.reflect_paddle(paddle, config) {
                tracing::trace!(side = ?paddle.side, vel = ?ball.vel, "ball hit paddle");
                events.ball_hit_paddle = true;
                break;
            }
        }
    }
}
