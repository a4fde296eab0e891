use glam::Vec2;

use crate::{Aabb, Config};

/// Which end of the arena a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,  // Player
    Right, // AI
}

impl Side {
    pub fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Horizontal sign pointing from the centre toward this side
    pub fn direction(self) -> f32 {
        match self {
            Side::Left => -1.0,
            Side::Right => 1.0,
        }
    }
}

/// Paddle component - represents a player's paddle
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub y: f32, // Top edge, clamped to [0, arena_height - paddle_height]
}

impl Paddle {
    pub fn new(side: Side, y: f32) -> Self {
        Self { side, y }
    }

    pub fn center_y(&self, config: &Config) -> f32 {
        self.y + config.paddle_height / 2.0
    }

    /// Shift by `paddle_speed * dt * dir`, clamped to the arena.
    pub fn move_by(&mut self, dir: i8, dt: f32, config: &Config) {
        let delta = dir as f32 * config.paddle_speed * dt;
        self.y = config.clamp_paddle_y(self.y + delta);
    }

    pub fn rect(&self, config: &Config) -> Aabb {
        let x = config.paddle_x(self.side);
        let half_width = config.paddle_width / 2.0;
        Aabb::new(
            Vec2::new(x - half_width, self.y),
            Vec2::new(x + half_width, self.y + config.paddle_height),
        )
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    pub fn advance(&mut self, dt: f32) {
        self.pos += self.vel * dt;
    }

    /// Bounce off the top or bottom wall. Only a ball moving into the wall is
    /// reflected, so |vy| is preserved and the ball never sticks.
    pub fn reflect_wall(&mut self, height: f32, radius: f32) -> bool {
        if self.pos.y - radius <= 0.0 && self.vel.y < 0.0 {
            self.pos.y = radius;
            self.vel.y = -self.vel.y;
            true
        } else if self.pos.y + radius >= height && self.vel.y > 0.0 {
            self.pos.y = height - radius;
            self.vel.y = -self.vel.y;
            true
        } else {
            false
        }
    }

    /// Bounce off a paddle with spin.
    ///
    /// The contact offset from the paddle centre is normalised to [-1, 1] and
    /// scaled by `ball_spin` into extra vertical velocity. Horizontal speed
    /// grows by `ball_speed_increase` up to `ball_max_vx`.
    pub fn reflect_paddle(&mut self, paddle: &Paddle, config: &Config) -> bool {
        let rect = paddle.rect(config);
        if !rect.intersects_circle(self.pos, config.ball_radius) {
            return false;
        }

        // Ignore a ball already travelling away from this paddle
        let approaching = self.vel.x * paddle.side.direction() > 0.0;
        if !approaching {
            return false;
        }

        // Push out to the paddle face
        self.pos.x = match paddle.side {
            Side::Left => rect.max.x + config.ball_radius,
            Side::Right => rect.min.x - config.ball_radius,
        };

        let half_height = config.paddle_height / 2.0;
        let offset = ((self.pos.y - paddle.center_y(config)) / half_height).clamp(-1.0, 1.0);

        self.vel.x = (-self.vel.x * config.ball_speed_increase)
            .clamp(-config.ball_max_vx, config.ball_max_vx);
        self.vel.y = (self.vel.y + offset * config.ball_spin)
            .clamp(-config.ball_max_vy, config.ball_max_vy);
        true
    }

    /// Place the ball at `center` and launch it toward `toward` at a
    /// near-horizontal random angle.
    pub fn serve(&mut self, center: Vec2, toward: Side, config: &Config, rng: &mut crate::GameRng) {
        use rand::Rng;
        self.pos = center;
        let angle = rng
            .0
            .gen_range(-config.ball_serve_angle..=config.ball_serve_angle);
        self.vel = Vec2::new(
            toward.direction() * config.ball_speed_initial,
            config.ball_speed_initial * angle,
        );
    }
}

/// Movement intent for paddle
#[derive(Debug, Clone, Copy, Default)]
pub struct PaddleIntent {
    pub dir: i8, // -1 = up, 0 = stop, 1 = down
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Computer control for a paddle.
///
/// The target is resampled once per reaction delay, so between samples the
/// paddle chases a stale, noisy estimate of where the ball is going.
#[derive(Debug, Clone, Copy)]
pub struct AiController {
    pub timer: f32,        // Seconds since the last resample
    pub observed_y: f32,   // Ball y at the last resample
    pub target_y: f32,     // Where the paddle centre is heading
    pub error_margin: f32, // Max absolute noise added to a sample
}

impl AiController {
    pub fn new(target_y: f32, error_margin: f32) -> Self {
        Self {
            timer: 0.0,
            observed_y: target_y,
            target_y,
            error_margin,
        }
    }

    /// Direction toward the current target, with a dead-zone around it
    pub fn direction(&self, center_y: f32, deadzone: f32) -> i8 {
        let diff = self.target_y - center_y;
        if diff.abs() <= deadzone {
            0
        } else if diff > 0.0 {
            1
        } else {
            -1
        }
    }
}
