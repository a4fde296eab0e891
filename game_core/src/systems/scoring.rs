use crate::{Ball, Config, Events, GameMap, GameRng, Score, Side};
use hecs::World;

/// Check if ball crossed a goal line (scoring)
pub fn check_scoring(
    world: &mut World,
    map: &GameMap,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
    config: &Config,
) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let scorer = if ball.pos.x < 0.0 {
            Side::Right
        } else if ball.pos.x > map.width {
            Side::Left
        } else {
            continue;
        };

        score.increment(scorer);
        match scorer {
            Side::Left => events.left_scored = true,
            Side::Right => events.right_scored = true,
        }

        let serve_to = config.serve_policy.serve_side(scorer, rng);
        ball.serve(map.ball_spawn(), serve_to, config, rng);

        tracing::debug!(
            ?scorer,
            left = score.left,
            right = score.right,
            ?serve_to,
            "goal"
        );
    }
}
