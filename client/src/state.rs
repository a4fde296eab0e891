//! Per-frame view of the game handed to the renderer

/// Everything the renderer needs to draw one frame
#[derive(Clone, Debug, PartialEq)]
pub struct GameStateSnapshot {
    pub ball_x: f32,
    pub ball_y: f32,
    pub paddle_left_y: f32,
    pub paddle_right_y: f32,
    pub score_left: u32,
    pub score_right: u32,
}

impl GameStateSnapshot {
    /// Snapshot of a field with nothing in play yet
    pub fn centered(width: f32, height: f32, paddle_height: f32) -> Self {
        let paddle_y = (height - paddle_height) / 2.0;
        Self {
            ball_x: width / 2.0,
            ball_y: height / 2.0,
            paddle_left_y: paddle_y,
            paddle_right_y: paddle_y,
            score_left: 0,
            score_right: 0,
        }
    }
}
