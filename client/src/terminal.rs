//! Terminal setup and teardown

use std::io::{self, Stdout};

use anyhow::{Context, Result};
use crossterm::{
    event::{
        DisableFocusChange, EnableFocusChange, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use ratatui::{backend::CrosstermBackend, Terminal};

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Enter raw mode and the alternate screen.
///
/// Returns the terminal and whether it will report key releases.
pub fn init() -> Result<(Tui, bool)> {
    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableFocusChange)
        .context("failed to enter alternate screen")?;

    let reports_release = supports_keyboard_enhancement().unwrap_or(false);
    if reports_release {
        execute!(
            stdout,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
        )
        .context("failed to enable key release reporting")?;
    } else {
        tracing::info!("terminal does not report key releases, using hold timeout");
    }

    let mut terminal =
        Terminal::new(CrosstermBackend::new(stdout)).context("failed to create terminal")?;
    terminal.hide_cursor()?;
    terminal.clear()?;
    Ok((terminal, reports_release))
}

/// Leave the alternate screen and restore cooked mode.
///
/// Every step runs even if an earlier one fails; the first failure is returned.
pub fn restore(terminal: &mut Tui, reports_release: bool) -> Result<()> {
    let pop = if reports_release {
        execute!(terminal.backend_mut(), PopKeyboardEnhancementFlags)
    } else {
        Ok(())
    };
    let steps = [
        pop,
        disable_raw_mode(),
        execute!(
            terminal.backend_mut(),
            DisableFocusChange,
            LeaveAlternateScreen
        ),
        terminal.show_cursor(),
    ];
    first_failure(steps).context("failed to restore terminal")
}

fn first_failure(steps: impl IntoIterator<Item = io::Result<()>>) -> io::Result<()> {
    steps.into_iter().collect()
}

/// Restore terminal state - called on panic or a failed init
pub fn restore_best_effort() {
    let _ = execute!(io::stdout(), PopKeyboardEnhancementFlags);
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), DisableFocusChange, LeaveAlternateScreen);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_failure_keeps_earliest_error() {
        let steps = [
            Ok(()),
            Err(io::Error::other("pop failed")),
            Err(io::Error::other("raw mode failed")),
        ];
        let err = first_failure(steps).unwrap_err();
        assert_eq!(err.to_string(), "pop failed");
    }

    #[test]
    fn test_first_failure_all_ok() {
        assert!(first_failure([Ok(()), Ok(())]).is_ok());
    }
}
