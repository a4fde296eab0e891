//! Terminal Pong: the player on the left against a computer paddle.
//!
//! W/S or the arrow keys move, Esc quits.

mod app;
mod input;
mod renderer;
mod simulation;
mod state;
mod terminal;

use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::Result;

use crate::app::App;

const LOG_DIR_ENV: &str = "PONG_LOG_DIR";

fn log_path() -> PathBuf {
    std::env::var_os(LOG_DIR_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(std::env::temp_dir)
        .join("pong.log")
}

/// Log to a file; stdout belongs to the TUI
fn init_logging() {
    #[cfg(unix)]
    let null_device = "/dev/null";
    #[cfg(windows)]
    let null_device = "NUL";

    let log_file = match File::create(log_path()).or_else(|_| File::create(null_device)) {
        Ok(file) => file,
        Err(_) => return,
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(log_file))
        .with_ansi(false)
        .init();
}

/// A frame-loop error is reported ahead of a teardown error
fn prefer_run_error(run: Result<()>, teardown: Result<()>) -> Result<()> {
    run.and(teardown)
}

fn main() -> Result<()> {
    // Set up panic hook to restore terminal state
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        terminal::restore_best_effort();
        original_hook(panic_info);
    }));

    init_logging();

    let seed: u64 = rand::random();
    tracing::info!(seed, "starting pong");

    let (mut tui, reports_release) =
        terminal::init().inspect_err(|_| terminal::restore_best_effort())?;
    let mut app = App::new(seed, reports_release);
    let result = app.run(&mut tui);

    // Always hand the terminal back, even if the loop failed
    let restored = terminal::restore(&mut tui, reports_release);
    prefer_run_error(result, restored)?;

    let (player, ai) = app.score();
    tracing::info!(player, ai, "game over");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_error_wins_over_teardown_error() {
        let err = prefer_run_error(
            Err(anyhow::anyhow!("draw failed")),
            Err(anyhow::anyhow!("restore failed")),
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "draw failed");
    }

    #[test]
    fn test_teardown_error_surfaces_after_clean_run() {
        let err = prefer_run_error(Ok(()), Err(anyhow::anyhow!("restore failed"))).unwrap_err();
        assert_eq!(err.to_string(), "restore failed");
    }
}
