//! Count command — animate a value sweep in the terminal

use crate::config::DisplayConfig;
use anyhow::Result;
use std::io::{self, Write};
use std::rc::Rc;
use tally_animation::{AnimatedCounter, FrameClock, FrameScheduler};
use tally_core::resolve_locale;

pub struct CountArgs {
    pub value: f64,
    pub from: f64,
    pub display: DisplayConfig,
}

pub fn run(args: CountArgs) -> Result<()> {
    let clock = Rc::new(FrameClock::with_fps(args.display.fps));
    let mut counter = AnimatedCounter::new(Rc::clone(&clock) as Rc<dyn FrameScheduler>, args.from)
        .with_duration(args.display.duration_ms);
    if let Some(tag) = &args.display.locale {
        counter = counter.with_locale(resolve_locale(tag)?);
    }

    counter.set_value(args.value);
    render(&counter)?;
    while counter.animating() {
        clock.tick();
        render(&counter)?;
    }
    println!();
    Ok(())
}

fn render(counter: &AnimatedCounter) -> Result<()> {
    let mut stdout = io::stdout();
    write!(stdout, "\r{counter}")?;
    stdout.flush()?;
    Ok(())
}
