use glam::Vec2;

use crate::{Config, Params, Side};

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Check if circle intersects AABB
    pub fn intersects_circle(&self, center: Vec2, radius: f32) -> bool {
        let closest = Vec2::new(
            center.x.clamp(self.min.x, self.max.x),
            center.y.clamp(self.min.y, self.max.y),
        );
        (center - closest).length_squared() <= radius * radius
    }
}

/// Playing field geometry. Goal lines sit at x = 0 and x = width.
#[derive(Debug, Clone, Copy)]
pub struct GameMap {
    pub width: f32,
    pub height: f32,
}

impl Default for GameMap {
    fn default() -> Self {
        Self {
            width: Params::ARENA_WIDTH,
            height: Params::ARENA_HEIGHT,
        }
    }
}

impl GameMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            width: config.arena_width,
            height: config.arena_height,
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(Vec2::ZERO, Vec2::new(self.width, self.height))
    }

    pub fn ball_spawn(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Paddle start: centre x for the side, top edge vertically centred
    pub fn paddle_spawn(&self, side: Side, config: &Config) -> Vec2 {
        Vec2::new(
            config.paddle_x(side),
            (self.height - config.paddle_height) / 2.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ball_spawn_is_centre() {
        let map = GameMap::new();
        assert_eq!(map.ball_spawn(), Vec2::new(400.0, 300.0));
    }

    #[test]
    fn test_paddle_spawn_is_vertically_centred() {
        let map = GameMap::new();
        let config = Config::new();
        let spawn = map.paddle_spawn(Side::Right, &config);
        assert_eq!(spawn.x, 770.0);
        assert_eq!(spawn.y + config.paddle_height / 2.0, map.height / 2.0);
    }

    #[test]
    fn test_intersects_circle_edges() {
        let rect = Aabb::new(Vec2::new(10.0, 10.0), Vec2::new(20.0, 30.0));
        assert!(rect.intersects_circle(Vec2::new(25.0, 20.0), 5.0));
        assert!(!rect.intersects_circle(Vec2::new(25.1, 20.0), 5.0));
        assert!(!rect.intersects_circle(Vec2::new(24.0, 34.0), 5.0));
    }

    #[test]
    fn test_bounds_contains() {
        let map = GameMap::new();
        assert!(map.bounds().contains(map.ball_spawn()));
        assert!(!map.bounds().contains(Vec2::new(-1.0, 300.0)));
    }
}
