//! Deterministic Pong simulation
//!
//! Paddles and the ball live in a `hecs::World`; everything else (time, score,
//! events, input, RNG) is passed to `step` as plain resources. No rendering or
//! platform code lives here.

pub mod components;
pub mod config;
pub mod map;
pub mod params;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use map::*;
pub use params::*;
pub use resources::*;

use hecs::World;
use systems::*;

/// Run the deterministic Pong game simulation
#[allow(clippy::too_many_arguments)]
pub fn step(
    world: &mut World,
    time: &mut Time,
    map: &GameMap,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    input_queue: &mut InputQueue,
    rng: &mut GameRng,
) {
    // Clamp dt to prevent large jumps
    let clamped_dt = time.dt.clamp(0.0, Params::MAX_DT);

    // Events accumulate over all micro-steps of this frame
    events.clear();

    // Fixed micro-steps for stable physics
    let mut remaining_dt = clamped_dt;
    while remaining_dt > 0.0 {
        let step_dt = remaining_dt.min(Params::FIXED_DT);
        remaining_dt -= step_dt;

        let step_time = Time {
            dt: step_dt,
            now: time.now + (clamped_dt - remaining_dt),
        };

        // 1. Ingest inputs (apply to paddle intents)
        ingest_inputs(world, input_queue);

        // 2. Resample AI targets and derive AI intents
        update_ai(world, &step_time, map, config, events, rng);

        // 3. Move paddles based on intents
        move_paddles(world, &step_time, config);

        // 4. Move ball
        move_ball(world, &step_time);

        // 5. Check collisions (ball vs walls, paddles)
        check_collisions(world, map, config, events);

        // 6. Check scoring (ball crossed a goal line)
        check_scoring(world, map, score, events, rng, config);
    }

    // Update time
    time.now += clamped_dt;
}

/// Helper to create a human-controlled paddle entity
pub fn create_paddle(world: &mut World, side: Side, y: f32) -> hecs::Entity {
    world.spawn((Paddle::new(side, y), PaddleIntent::new()))
}

/// Helper to create a computer-controlled paddle entity
pub fn create_ai_paddle(world: &mut World, side: Side, y: f32, config: &Config) -> hecs::Entity {
    let controller = AiController::new(y + config.paddle_height / 2.0, config.ai_error_margin);
    world.spawn((Paddle::new(side, y), PaddleIntent::new(), controller))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: glam::Vec2, vel: glam::Vec2) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel),))
}

/// Spawn a fresh match: player on the left, AI on the right, ball served
/// from the centre toward a random side.
pub fn create_match(world: &mut World, map: &GameMap, config: &Config, rng: &mut GameRng) {
    let left = map.paddle_spawn(Side::Left, config);
    let right = map.paddle_spawn(Side::Right, config);
    create_paddle(world, Side::Left, left.y);
    create_ai_paddle(world, Side::Right, right.y, config);

    let mut ball = Ball::new(glam::Vec2::ZERO, glam::Vec2::ZERO);
    ball.serve(map.ball_spawn(), random_side(rng), config, rng);
    create_ball(world, ball.pos, ball.vel);
}
