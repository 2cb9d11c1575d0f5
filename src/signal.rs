/// Notes used by the completion melody.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Note {
    C4,
    E4,
    G3,
    A3,
}

impl Note {
    pub fn freq_hz(self) -> f32 {
        match self {
            Note::C4 => 261.63,
            Note::E4 => 329.63,
            Note::G3 => 196.00,
            Note::A3 => 220.00,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlinkColor {
    Red,
    Green,
}

/// A discrete notification event, fire-and-forget from the core's side.
/// `Delay` entries are paced by the loop driver, not the emitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalEvent {
    BlinkStart(BlinkColor),
    BlinkStop,
    Tone(Note),
    Delay(u64),
}

// Played exactly once when the bar fills: steady green, a short melody
// with pauses, a trailing hold, then all signal activity stops.
pub const COMPLETION_SEQUENCE: &[SignalEvent] = &[
    SignalEvent::BlinkStart(BlinkColor::Green),
    SignalEvent::Tone(Note::E4),
    SignalEvent::Delay(500),
    SignalEvent::Tone(Note::C4),
    SignalEvent::Delay(500),
    SignalEvent::Tone(Note::G3),
    SignalEvent::Delay(500),
    SignalEvent::Tone(Note::A3),
    SignalEvent::Delay(1000),
    SignalEvent::BlinkStop,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completion_sequence_shape() {
        assert_eq!(
            COMPLETION_SEQUENCE.first(),
            Some(&SignalEvent::BlinkStart(BlinkColor::Green))
        );
        assert_eq!(COMPLETION_SEQUENCE.last(), Some(&SignalEvent::BlinkStop));

        let tones: Vec<Note> = COMPLETION_SEQUENCE
            .iter()
            .filter_map(|ev| match ev {
                SignalEvent::Tone(note) => Some(*note),
                _ => None,
            })
            .collect();
        assert_eq!(tones, [Note::E4, Note::C4, Note::G3, Note::A3]);
    }

    #[test]
    fn note_frequencies() {
        assert!(Note::E4.freq_hz() > Note::C4.freq_hz());
        assert!(Note::A3.freq_hz() > Note::G3.freq_hz());
    }
}
