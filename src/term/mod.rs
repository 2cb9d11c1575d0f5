pub mod draw;
pub mod signal;

use std::io;
use std::time::Instant;

use anyhow::Result;
use crossterm::{cursor, execute, terminal};

use crate::animator::Clock;

pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }

    fn sleep(&self, ms: u64) {
        std::thread::sleep(std::time::Duration::from_millis(ms));
    }
}

/// Holds the terminal in the alternate screen with the cursor hidden for
/// the lifetime of the value. Creating one is the shell's precondition
/// check: if it fails, the animation never starts.
pub struct TermSurface;

impl TermSurface {
    pub fn new() -> Result<Self> {
        execute!(io::stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;
        Ok(Self)
    }
}

impl Drop for TermSurface {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), cursor::Show, terminal::LeaveAlternateScreen);
    }
}
