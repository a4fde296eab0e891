//! Terminal rendering
//!
//! The arena is painted on a braille `Canvas` in arena coordinates, so the
//! picture scales with the terminal. Scores sit above the field and the
//! controls hint below it.

pub mod draw;

use game_core::{Config, Side};
use ratatui::{
    layout::{Alignment, Constraint, Layout},
    style::{Color, Style},
    symbols::Marker,
    widgets::{canvas::Canvas, Block, Paragraph},
    Frame,
};

use crate::state::GameStateSnapshot;

const WHITE: Color = Color::Rgb(240, 240, 240);
const DIM_WHITE: Color = Color::Rgb(200, 200, 200);
const DARK: Color = Color::Rgb(20, 20, 30);
const ACCENT: Color = Color::Rgb(120, 170, 255);

pub const CONTROLS_HINT: &str = "W/S to move • ESC to quit";

/// Draw one frame of the game
pub fn render(frame: &mut Frame, snapshot: &GameStateSnapshot, config: &Config) {
    let [header, field, footer] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    let [left_score, right_score] =
        Layout::horizontal([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)]).areas(header);
    let score_style = Style::default().fg(WHITE).bg(DARK);
    frame.render_widget(
        Paragraph::new(snapshot.score_left.to_string())
            .alignment(Alignment::Center)
            .style(score_style),
        left_score,
    );
    frame.render_widget(
        Paragraph::new(snapshot.score_right.to_string())
            .alignment(Alignment::Center)
            .style(score_style),
        right_score,
    );

    let canvas = Canvas::default()
        .block(Block::bordered().border_style(Style::default().fg(DIM_WHITE)))
        .background_color(DARK)
        .marker(Marker::Braille)
        .x_bounds([0.0, config.arena_width as f64])
        .y_bounds([0.0, config.arena_height as f64])
        .paint(|ctx| {
            draw::draw_center_line(ctx, config, DIM_WHITE);
            draw::draw_paddle(ctx, config, Side::Left, snapshot.paddle_left_y, WHITE);
            draw::draw_paddle(ctx, config, Side::Right, snapshot.paddle_right_y, WHITE);
            draw::draw_ball(ctx, config, snapshot, ACCENT);
        });
    frame.render_widget(canvas, field);

    frame.render_widget(
        Paragraph::new(CONTROLS_HINT)
            .alignment(Alignment::Center)
            .style(Style::default().fg(DIM_WHITE).bg(DARK)),
        footer,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn rendered_text(snapshot: &GameStateSnapshot) -> String {
        let config = Config::new();
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal
            .draw(|frame| render(frame, snapshot, &config))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_scores_rendered_in_header() {
        let mut snapshot = GameStateSnapshot::centered(800.0, 600.0, 100.0);
        snapshot.score_left = 3;
        snapshot.score_right = 11;

        let text = rendered_text(&snapshot);
        let header = text.lines().next().unwrap();
        assert!(header.contains('3'));
        assert!(header.contains("11"));
    }

    #[test]
    fn test_controls_hint_rendered() {
        let snapshot = GameStateSnapshot::centered(800.0, 600.0, 100.0);
        let text = rendered_text(&snapshot);
        assert!(text.lines().last().unwrap().contains("ESC to quit"));
    }

    #[test]
    fn test_field_is_painted() {
        let snapshot = GameStateSnapshot::centered(800.0, 600.0, 100.0);
        let text = rendered_text(&snapshot);
        // Braille block U+2800..U+28FF carries the paddles, ball and centre line
        assert!(text.chars().any(|c| ('\u{2801}'..='\u{28FF}').contains(&c)));
    }
}
