mod anim;
mod animator;
mod config;
mod signal;
mod term;

use std::io;

use anyhow::Result;
use animator::Animator;
use config::Config;
use log::info;
use term::{draw::TermSink, signal::TermSignalEmitter, MonotonicClock, TermSurface};

fn main() -> Result<()> {
    env_logger::init();

    let config = Config::load().unwrap_or_default();
    info!("Starting blinkbar...");

    let size = crossterm::terminal::size()?;
    let _surface = TermSurface::new()?;

    let clock = MonotonicClock::new();
    let mut sink = TermSink::new(io::stdout(), size, config.labels.clone(), &config.theme);
    let mut signals = TermSignalEmitter::new(io::stdout());

    Animator::new(config.timings).run(&clock, &mut sink, &mut signals);

    info!("Done");
    Ok(())
}
