//! Terminal lifecycle and tick scheduling
//!
//! Raw mode and the alternate screen are entered by `enter` and always
//! restored, either by `exit` or when the `Tui` is dropped.

use anyhow::Result;
use crossterm::{
    cursor,
    event::{self, Event, KeyEventKind},
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Frame, Terminal};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};

/// Fixed-rate tick schedule, independent of how much input arrives
#[derive(Debug, Clone, Copy)]
pub struct Ticker {
    rate: Duration,
    last: Instant,
}

impl Ticker {
    pub fn new(rate: Duration, now: Instant) -> Self {
        Self { rate, last: now }
    }

    /// Time left until the next tick is due
    pub fn timeout(&self, now: Instant) -> Duration {
        self.rate
            .saturating_sub(now.saturating_duration_since(self.last))
    }

    /// True once per elapsed period; starts the next period at `now`
    pub fn due(&mut self, now: Instant) -> bool {
        if now.saturating_duration_since(self.last) >= self.rate {
            self.last = now;
            true
        } else {
            false
        }
    }
}

pub struct Tui {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    active: bool,
}

impl Tui {
    pub fn new() -> Result<Self> {
        let terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
        Ok(Self {
            terminal,
            active: false,
        })
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        crossterm::execute!(io::stdout(), EnterAlternateScreen, cursor::Hide)?;
        self.terminal.clear()?;
        self.active = true;
        Ok(())
    }

    /// Restore the terminal. Safe to call more than once.
    pub fn exit(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        terminal::disable_raw_mode()?;
        crossterm::execute!(io::stdout(), LeaveAlternateScreen, cursor::Show)?;
        Ok(())
    }

    /// Wait up to `timeout` for input.
    ///
    /// Key releases are swallowed (Windows reports both edges).
    pub fn next_event(&self, timeout: Duration) -> Result<Option<Event>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }
        match event::read()? {
            Event::Key(key) if key.kind != KeyEventKind::Press => Ok(None),
            other => Ok(Some(other)),
        }
    }

    pub fn draw(&mut self, render: impl FnOnce(&mut Frame)) -> Result<()> {
        self.terminal.draw(render)?;
        Ok(())
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        let _ = self.exit();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_ticker_fires_once_per_period() {
        let start = Instant::now();
        let mut ticker = Ticker::new(ms(100), start);

        assert!(!ticker.due(start + ms(40)));
        assert_eq!(ticker.timeout(start + ms(40)), ms(60));

        assert!(ticker.due(start + ms(100)));
        assert!(!ticker.due(start + ms(150)));
        assert!(ticker.due(start + ms(230)));
        assert_eq!(ticker.timeout(start + ms(500)), Duration::ZERO);
    }

    #[test]
    fn test_exit_before_enter_is_noop() {
        // Without a TTY the backend may fail to build; nothing to check then
        if let Ok(mut tui) = Tui::new() {
            assert!(tui.exit().is_ok());
            assert!(tui.exit().is_ok());
        }
    }
}
