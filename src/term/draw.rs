use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use log::warn;

use crate::anim::lerp;
use crate::animator::{Frame, FrameSink};
use crate::config::{Labels, Theme};

// Two-cell margin on each side of the bar.
const BAR_MARGIN: u16 = 2;

pub struct TermSink<W: Write> {
    out: W,
    size: (u16, u16),
    labels: Labels,
    text_color: Color,
    bar_color: Color,
}

impl<W: Write> TermSink<W> {
    pub fn new(out: W, size: (u16, u16), labels: Labels, theme: &Theme) -> Self {
        Self {
            out,
            size,
            labels,
            text_color: parse_color(&theme.text).unwrap_or(Color::White),
            bar_color: parse_color(&theme.bar).unwrap_or(Color::Blue),
        }
    }

    fn draw(&mut self, frame: &Frame) -> io::Result<()> {
        let (cols, rows) = self.size;
        let mid = rows / 2;
        let title_row = mid.saturating_sub(1);
        let bar_row = mid.saturating_add(1);

        // Only the sink's own rows are cleared; the blink indicator on the
        // top row belongs to the signal emitter.
        if frame.finished {
            let done = &self.labels.done;
            queue!(
                self.out,
                MoveTo(0, title_row),
                Clear(ClearType::CurrentLine),
                MoveTo(0, bar_row),
                Clear(ClearType::CurrentLine),
                MoveTo(centered(cols, done), mid),
                SetForegroundColor(self.text_color),
                Print(done),
                ResetColor,
            )?;
        } else {
            let title = &self.labels.title;
            let bar = bar_string(frame.progress, cols.saturating_sub(BAR_MARGIN * 2) as usize);
            queue!(
                self.out,
                MoveTo(centered(cols, title), title_row),
                SetForegroundColor(self.text_color),
                Print(title),
                MoveTo(BAR_MARGIN, bar_row),
                SetForegroundColor(self.bar_color),
                Print(&bar),
                ResetColor,
            )?;
        }
        self.out.flush()
    }
}

impl<W: Write> FrameSink for TermSink<W> {
    fn render(&mut self, frame: &Frame) {
        if let Err(err) = self.draw(frame) {
            warn!("frame render failed: {}", err);
        }
    }
}

fn centered(cols: u16, text: &str) -> u16 {
    cols.saturating_sub(text.chars().count() as u16) / 2
}

fn bar_string(progress: f32, width: usize) -> String {
    let filled = lerp(0.0, width as f32, progress).round() as usize;
    let filled = filled.min(width);
    format!("{}{}", "▓".repeat(filled), "░".repeat(width - filled))
}

pub fn parse_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb { r, g, b })
}
