use game_core::{Config, Side};
use ratatui::style::Color;
use ratatui::widgets::canvas::{Circle, Context, Line, Points};

use crate::state::GameStateSnapshot;

const DASH_LENGTH: f64 = 12.0;
const DASH_GAP: f64 = 10.0;
/// Spacing of the vertical strokes that fill a paddle
const FILL_STEP: f64 = 2.0;

/// Canvas y grows upward, arena y grows downward
fn flip_y(config: &Config, y: f64) -> f64 {
    config.arena_height as f64 - y
}

pub fn draw_center_line(ctx: &mut Context, config: &Config, color: Color) {
    let x = config.arena_width as f64 / 2.0;
    let height = config.arena_height as f64;
    let mut y = 0.0;
    while y < height {
        let end = (y + DASH_LENGTH).min(height);
        ctx.draw(&Line::new(x, flip_y(config, y), x, flip_y(config, end), color));
        y += DASH_LENGTH + DASH_GAP;
    }
}

/// Solid paddle with its top edge at `top`
pub fn draw_paddle(ctx: &mut Context, config: &Config, side: Side, top: f32, color: Color) {
    let center_x = config.paddle_x(side) as f64;
    let half_width = config.paddle_width as f64 / 2.0;
    let y1 = flip_y(config, top as f64);
    let y2 = flip_y(config, (top + config.paddle_height) as f64);

    let mut x = center_x - half_width;
    while x <= center_x + half_width {
        ctx.draw(&Line::new(x, y1, x, y2, color));
        x += FILL_STEP;
    }
}

pub fn draw_ball(ctx: &mut Context, config: &Config, snapshot: &GameStateSnapshot, color: Color) {
    let x = snapshot.ball_x as f64;
    let y = flip_y(config, snapshot.ball_y as f64);
    ctx.draw(&Circle {
        x,
        y,
        radius: config.ball_radius as f64,
        color,
    });
    ctx.draw(&Points {
        coords: &[(x, y)],
        color,
    });
}
