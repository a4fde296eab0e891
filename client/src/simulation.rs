use game_core::{
    create_match, step, Ball, Config, Events, GameMap, GameRng, InputQueue, Paddle, Score, Side,
    Time,
};
use hecs::World;

use crate::state::GameStateSnapshot;

/// Single-player match against the computer paddle.
///
/// Owns the world and every simulation resource; the frame loop only feeds it
/// elapsed time and the player's direction.
pub struct LocalGame {
    pub world: World,
    pub time: Time,
    pub map: GameMap,
    pub config: Config,
    pub score: Score,
    pub events: Events,
    pub input_queue: InputQueue,
    pub rng: GameRng,
}

impl LocalGame {
    pub fn new(seed: u64) -> Self {
        Self::with_config(seed, Config::new())
    }

    pub fn with_config(seed: u64, config: Config) -> Self {
        let map = GameMap::from_config(&config);
        let mut world = World::new();
        let mut rng = GameRng::new(seed);

        create_match(&mut world, &map, &config, &mut rng);

        Self {
            world,
            time: Time::new(0.0, 0.0),
            map,
            config,
            score: Score::new(),
            events: Events::new(),
            input_queue: InputQueue::new(),
            rng,
        }
    }

    /// Advance by `dt` seconds with the player holding `player_dir`
    pub fn step(&mut self, dt: f32, player_dir: i8) -> GameStateSnapshot {
        self.input_queue.push_input(Side::Left, player_dir);
        self.time.dt = dt;

        step(
            &mut self.world,
            &mut self.time,
            &self.map,
            &self.config,
            &mut self.score,
            &mut self.events,
            &mut self.input_queue,
            &mut self.rng,
        );

        if let Some(scorer) = self.events.scored() {
            tracing::info!(
                ?scorer,
                player = self.score.left,
                ai = self.score.right,
                "point scored"
            );
        }

        self.snapshot()
    }

    pub fn snapshot(&self) -> GameStateSnapshot {
        let mut snapshot = GameStateSnapshot::centered(
            self.map.width,
            self.map.height,
            self.config.paddle_height,
        );

        if let Some((_e, ball)) = self.world.query::<&Ball>().iter().next() {
            snapshot.ball_x = ball.pos.x;
            snapshot.ball_y = ball.pos.y;
        }

        for (_e, paddle) in self.world.query::<&Paddle>().iter() {
            match paddle.side {
                Side::Left => snapshot.paddle_left_y = paddle.y,
                Side::Right => snapshot.paddle_right_y = paddle.y,
            }
        }

        snapshot.score_left = self.score.left;
        snapshot.score_right = self.score.right;
        snapshot
    }
}
