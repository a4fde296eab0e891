//! Frame loop
//!
//! One iteration per frame: drain pending input, step the simulation with the
//! measured frame time, draw, then sleep off the rest of the frame budget.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event};
use ratatui::{backend::Backend, Terminal};

use crate::input::{KeyAction, KeyState};
use crate::renderer;
use crate::simulation::LocalGame;

const TARGET_FPS: u32 = 60;

pub struct App {
    game: LocalGame,
    keys: KeyState,
    should_quit: bool,
}

impl App {
    pub fn new(seed: u64, reports_release: bool) -> Self {
        Self {
            game: LocalGame::new(seed),
            keys: KeyState::new(reports_release),
            should_quit: false,
        }
    }

    pub fn score(&self) -> (u32, u32) {
        (self.game.score.left, self.game.score.right)
    }

    /// Run until the player quits
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        let frame_budget = Duration::from_secs(1) / TARGET_FPS;
        let mut last_frame = Instant::now();

        while !self.should_quit {
            let frame_start = Instant::now();

            self.handle_events(frame_start)?;
            if self.should_quit {
                break;
            }

            let dt = frame_start.duration_since(last_frame).as_secs_f32();
            last_frame = frame_start;

            let direction = self.keys.direction(frame_start);
            let snapshot = self.game.step(dt, direction);
            terminal.draw(|frame| renderer::render(frame, &snapshot, &self.game.config))?;

            if let Some(rest) = frame_budget.checked_sub(frame_start.elapsed()) {
                std::thread::sleep(rest);
            }
        }

        Ok(())
    }

    /// Drain every pending terminal event without blocking
    fn handle_events(&mut self, now: Instant) -> Result<()> {
        while event::poll(Duration::ZERO)? {
            let event = event::read()?;
            self.apply_event(&event, now);
        }
        Ok(())
    }

    fn apply_event(&mut self, event: &Event, now: Instant) {
        match event {
            Event::Key(key) => {
                if self.keys.handle_key_event(key, now) == Some(KeyAction::Quit) {
                    tracing::info!("quit requested");
                    self.should_quit = true;
                }
            }
            Event::FocusLost => self.keys.clear(),
            _ => {}
        }
    }
}
