use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
};
use log::{debug, warn};

use crate::animator::SignalEmitter;
use crate::signal::{BlinkColor, SignalEvent};

// The indicator lives on the top row, clear of the sink's rows.
const INDICATOR_CELL: (u16, u16) = (1, 0);

pub struct TermSignalEmitter<W: Write> {
    out: W,
}

impl<W: Write> TermSignalEmitter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    fn indicator(&mut self, color: Option<Color>) -> io::Result<()> {
        let (x, y) = INDICATOR_CELL;
        match color {
            Some(color) => queue!(
                self.out,
                MoveTo(x, y),
                SetForegroundColor(color),
                Print("●"),
                ResetColor,
            )?,
            None => queue!(self.out, MoveTo(x, y), Print(" "))?,
        }
        self.out.flush()
    }

    fn bell(&mut self) -> io::Result<()> {
        self.out.write_all(b"\x07")?;
        self.out.flush()
    }
}

impl<W: Write> SignalEmitter for TermSignalEmitter<W> {
    fn emit(&mut self, event: SignalEvent) {
        let result = match event {
            SignalEvent::BlinkStart(color) => {
                let color = match color {
                    BlinkColor::Red => Color::Red,
                    BlinkColor::Green => Color::Green,
                };
                self.indicator(Some(color))
            }
            SignalEvent::BlinkStop => self.indicator(None),
            SignalEvent::Tone(note) => {
                debug!("tone {:.2}Hz", note.freq_hz());
                self.bell()
            }
            // Delays are paced by the loop driver.
            SignalEvent::Delay(_) => Ok(()),
        };

        if let Err(err) = result {
            warn!("signal emit failed: {}", err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal::Note;

    #[test]
    fn blink_start_paints_indicator() {
        let mut out = Vec::new();
        TermSignalEmitter::new(&mut out).emit(SignalEvent::BlinkStart(BlinkColor::Red));
        assert!(String::from_utf8(out).unwrap().contains('●'));
    }

    #[test]
    fn blink_stop_erases_indicator() {
        let mut out = Vec::new();
        TermSignalEmitter::new(&mut out).emit(SignalEvent::BlinkStop);
        let rendered = String::from_utf8(out).unwrap();
        assert!(!rendered.contains('●'));
        assert!(rendered.ends_with(' '));
    }

    #[test]
    fn tone_rings_the_bell() {
        let mut out = Vec::new();
        TermSignalEmitter::new(&mut out).emit(SignalEvent::Tone(Note::E4));
        assert_eq!(out, b"\x07");
    }

    #[test]
    fn delay_writes_nothing() {
        let mut out = Vec::new();
        TermSignalEmitter::new(&mut out).emit(SignalEvent::Delay(500));
        assert!(out.is_empty());
    }
}
