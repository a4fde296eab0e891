use glam::Vec2;
use hecs::World;
use rand::Rng;

use crate::{AiController, Ball, Config, Events, GameMap, GameRng, Paddle, PaddleIntent, Side, Time};

/// Drive AI paddle intents.
///
/// Each controller resamples its target once per `ai_reaction_delay`; on
/// every other tick it keeps chasing the stale target. The resulting intent
/// goes through the same movement system as the player's.
pub fn update_ai(
    world: &mut World,
    time: &Time,
    map: &GameMap,
    config: &Config,
    events: &mut Events,
    rng: &mut GameRng,
) {
    let ball = world
        .query::<&Ball>()
        .iter()
        .next()
        .map(|(_e, ball)| *ball);

    let Some(ball) = ball else {
        return; // No ball in world
    };

    for (_entity, (paddle, ai, intent)) in
        world.query_mut::<(&Paddle, &mut AiController, &mut PaddleIntent)>()
    {
        ai.timer += time.dt;
        if ai.timer >= config.ai_reaction_delay {
            ai.timer = 0.0;
            ai.retarget(&ball, paddle.side, map, config, rng);
            events.ai_retargeted = true;
            tracing::trace!(
                observed = ai.observed_y,
                target = ai.target_y,
                "ai retarget"
            );
        }

        intent.dir = ai.direction(paddle.center_y(config), config.ai_deadzone);
    }
}

impl AiController {
    /// Sample the ball and pick a new target for the paddle centre.
    ///
    /// A ball heading toward `side` is tracked, with up to `error_margin` of
    /// noise. A ball heading away sends the paddle back to mid-field.
    pub fn retarget(
        &mut self,
        ball: &Ball,
        side: Side,
        map: &GameMap,
        config: &Config,
        rng: &mut GameRng,
    ) {
        self.observed_y = ball.pos.y;

        let incoming = ball.vel.x * side.direction() > 0.0;
        if !incoming {
            self.target_y = map.height / 2.0;
            return;
        }

        let aim = if config.ai_predict_intercept {
            predict_ball_y_at_x(ball.pos, ball.vel, config.paddle_x(side), map.height)
        } else {
            ball.pos.y
        };
        let noise = rng.0.gen_range(-self.error_margin..=self.error_margin);
        self.target_y = (aim + noise).clamp(0.0, map.height);
    }
}

/// Where the ball will be vertically when it reaches `x`.
///
/// Top and bottom bounces are folded in by mirroring the unbounded straight
/// line into [0, height]. A ball that is not approaching `x` keeps its
/// current height.
pub fn predict_ball_y_at_x(pos: Vec2, vel: Vec2, x: f32, height: f32) -> f32 {
    if vel.x == 0.0 {
        return pos.y;
    }

    let time_to_x = (x - pos.x) / vel.x;
    if time_to_x <= 0.0 {
        return pos.y;
    }

    let simulated_y = pos.y + vel.y * time_to_x;
    let period = 2.0 * height;
    let folded = simulated_y.rem_euclid(period);
    if folded <= height {
        folded
    } else {
        period - folded
    }
}
