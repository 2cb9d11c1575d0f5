use log::{debug, info};

use crate::anim::Timeline;
use crate::config::Timings;
use crate::signal::{BlinkColor, SignalEvent, COMPLETION_SEQUENCE};

/// Monotonic millisecond clock plus the loop's only suspension point.
pub trait Clock {
    fn now(&self) -> u64;
    fn sleep(&self, ms: u64);
}

/// Redraw target. Rendering must be a pure function of the frame.
pub trait FrameSink {
    fn render(&mut self, frame: &Frame);
}

pub trait SignalEmitter {
    fn emit(&mut self, event: SignalEvent);
}

/// Read-only snapshot handed to the frame sink each tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub progress: f32,
    pub finished: bool,
}

struct AnimationState {
    bar: Timeline,
    progress: f32,
    last_blink_time: u64,
    blink_on: bool,
    finished: bool,
}

impl AnimationState {
    fn new(start: u64, duration_ms: u64) -> Self {
        let mut bar = Timeline::new(duration_ms);
        bar.start(start);
        Self {
            bar,
            progress: 0.0,
            last_blink_time: start,
            blink_on: true,
            finished: false,
        }
    }

    fn frame(&self) -> Frame {
        Frame {
            progress: self.progress,
            finished: self.finished,
        }
    }
}

pub struct Animator {
    timings: Timings,
}

impl Animator {
    pub fn new(timings: Timings) -> Self {
        Self { timings }
    }

    /// Drives the animation to completion. One tick per `tick_interval_ms`:
    /// recompute progress, evaluate the blink toggle, redraw, sleep. The
    /// redraw must see the tick's updated values, so the order is fixed.
    pub fn run(
        &self,
        clock: &impl Clock,
        sink: &mut impl FrameSink,
        signals: &mut impl SignalEmitter,
    ) {
        let mut state = AnimationState::new(clock.now(), self.timings.progress_duration_ms);

        info!(
            "Animation started, {}ms to full",
            self.timings.progress_duration_ms
        );

        while state.progress < 1.0 {
            let now = clock.now();
            state.progress = state.bar.progress(now);

            if now - state.last_blink_time >= self.timings.blink_interval_ms {
                let event = if state.blink_on {
                    SignalEvent::BlinkStart(BlinkColor::Red)
                } else {
                    SignalEvent::BlinkStop
                };
                debug!("blink toggle: {:?}", event);
                signals.emit(event);
                state.blink_on = !state.blink_on;
                state.last_blink_time = clock.now();
            }

            sink.render(&state.frame());
            clock.sleep(self.timings.tick_interval_ms);
        }

        state.finished = true;
        sink.render(&state.frame());

        info!("Bar full, playing completion sequence");
        for event in COMPLETION_SEQUENCE {
            match *event {
                SignalEvent::Delay(ms) => clock.sleep(ms),
                other => signals.emit(other),
            }
        }
    }
}
