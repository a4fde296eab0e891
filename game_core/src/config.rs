use crate::{GameRng, Params, Side};

/// Who receives the serve after a point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ServePolicy {
    /// Ball is launched at the side that just won the point
    #[default]
    TowardScorer,
    /// Ball is launched at the side that just lost the point
    TowardLoser,
    Random,
}

impl ServePolicy {
    pub fn serve_side(self, scorer: Side, rng: &mut GameRng) -> Side {
        match self {
            ServePolicy::TowardScorer => scorer,
            ServePolicy::TowardLoser => scorer.opposite(),
            ServePolicy::Random => random_side(rng),
        }
    }
}

/// Coin flip between the two sides
pub fn random_side(rng: &mut GameRng) -> Side {
    use rand::Rng;
    if rng.0.gen_bool(0.5) {
        Side::Right
    } else {
        Side::Left
    }
}

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub arena_width: f32,
    pub arena_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_margin: f32,
    pub paddle_speed: f32,
    pub ball_radius: f32,
    pub ball_speed_initial: f32,
    pub ball_serve_angle: f32,
    pub ball_spin: f32,
    pub ball_max_vy: f32,
    pub ball_speed_increase: f32,
    pub ball_max_vx: f32,
    pub ai_reaction_delay: f32,
    pub ai_error_margin: f32,
    pub ai_deadzone: f32,
    /// Aim at the predicted intercept instead of the ball's current height
    pub ai_predict_intercept: bool,
    pub serve_policy: ServePolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            arena_width: Params::ARENA_WIDTH,
            arena_height: Params::ARENA_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_margin: Params::PADDLE_MARGIN,
            paddle_speed: Params::PADDLE_SPEED,
            ball_radius: Params::BALL_RADIUS,
            ball_speed_initial: Params::BALL_SPEED_INITIAL,
            ball_serve_angle: Params::BALL_SERVE_ANGLE,
            ball_spin: Params::BALL_SPIN,
            ball_max_vy: Params::BALL_MAX_VY,
            ball_speed_increase: Params::BALL_SPEED_INCREASE,
            ball_max_vx: Params::BALL_MAX_VX,
            ai_reaction_delay: Params::AI_REACTION_DELAY,
            ai_error_margin: Params::AI_ERROR_MARGIN,
            ai_deadzone: Params::AI_DEADZONE,
            ai_predict_intercept: false,
            serve_policy: ServePolicy::default(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get centre X position for the paddle on `side`
    pub fn paddle_x(&self, side: Side) -> f32 {
        let inset = self.paddle_margin + self.paddle_width / 2.0;
        match side {
            Side::Left => inset,
            Side::Right => self.arena_width - inset,
        }
    }

    /// Clamp paddle top edge to arena bounds
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        y.clamp(0.0, self.arena_height - self.paddle_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_paddle_x() {
        let config = Config::new();
        assert_eq!(config.paddle_x(Side::Left), 30.0, "Left paddle X position");
        assert_eq!(config.paddle_x(Side::Right), 770.0, "Right paddle X position");
    }

    #[test]
    fn test_config_clamp_paddle_y() {
        let config = Config::new();
        assert_eq!(config.clamp_paddle_y(-10.0), 0.0);
        assert_eq!(
            config.clamp_paddle_y(1000.0),
            config.arena_height - config.paddle_height
        );
        let valid_y = 250.0;
        assert_eq!(config.clamp_paddle_y(valid_y), valid_y);
    }

    #[test]
    fn test_serve_policy_sides() {
        let mut rng = GameRng::new(12345);
        assert_eq!(
            ServePolicy::TowardScorer.serve_side(Side::Right, &mut rng),
            Side::Right
        );
        assert_eq!(
            ServePolicy::TowardLoser.serve_side(Side::Right, &mut rng),
            Side::Left
        );
    }

    #[test]
    fn test_random_serve_hits_both_sides() {
        let mut rng = GameRng::new(12345);
        let sides: Vec<Side> = (0..64)
            .map(|_| ServePolicy::Random.serve_side(Side::Left, &mut rng))
            .collect();
        assert!(sides.contains(&Side::Left));
        assert!(sides.contains(&Side::Right));
    }
}
