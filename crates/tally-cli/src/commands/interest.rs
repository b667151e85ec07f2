//! Interest command — compound a principal and animate the total

use crate::config::DisplayConfig;
use anyhow::Result;
use clap::ValueEnum;
use std::io::{self, Write};
use std::rc::Rc;
use tally_animation::{AnimatedCounter, FrameClock, FrameScheduler};
use tally_core::{format_value, resolve_locale, TallyError};

pub const PRINCIPAL_RANGE: (f64, f64) = (1_000.0, 10_000_000.0);
pub const RATE_RANGE: (f64, f64) = (1.0, 50.0);
pub const YEARS_RANGE: (f64, f64) = (1.0, 30.0);

const DEFAULT_LOCALE: &str = "en-IN";

/// How often interest is compounded within a year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Frequency {
    Quarterly,
    SemiAnnually,
    Annually,
}

impl Frequency {
    /// Compounding periods per year.
    pub fn periods_per_year(self) -> f64 {
        match self {
            Frequency::Quarterly => 4.0,
            Frequency::SemiAnnually => 2.0,
            Frequency::Annually => 1.0,
        }
    }
}

/// The compounding collaborator: final amount after `years` years at `rate`
/// percent, compounded `frequency` times a year.
pub fn compound(principal: f64, rate: f64, frequency: Frequency, years: f64) -> f64 {
    let n = frequency.periods_per_year();
    principal * (1.0 + rate / (100.0 * n)).powf(n * years)
}

fn check_range(field: &str, value: f64, (min, max): (f64, f64)) -> Result<(), TallyError> {
    if value < min || value > max {
        return Err(TallyError::ValueOutOfRange {
            field: field.to_string(),
            min,
            max,
            value,
        });
    }
    Ok(())
}

pub struct InterestArgs {
    pub principal: f64,
    pub rate: f64,
    pub years: f64,
    pub frequency: Frequency,
    pub display: DisplayConfig,
}

pub fn run(args: InterestArgs) -> Result<()> {
    check_range("principal", args.principal, PRINCIPAL_RANGE)?;
    check_range("rate", args.rate, RATE_RANGE)?;
    check_range("years", args.years, YEARS_RANGE)?;

    let total = compound(args.principal, args.rate, args.frequency, args.years);
    let interest = total - args.principal;

    let tag = args.display.locale.as_deref().unwrap_or(DEFAULT_LOCALE);
    let locale = resolve_locale(tag)?;

    println!("Principal Amount  ₹{}", format_value(args.principal, Some(&locale)));
    println!("Total Interest    ₹{}", format_value(interest, Some(&locale)));

    let clock = Rc::new(FrameClock::with_fps(args.display.fps));
    let counter = AnimatedCounter::new(Rc::clone(&clock) as Rc<dyn FrameScheduler>, args.principal)
        .with_duration(args.display.duration_ms)
        .with_locale(locale);

    counter.set_value(total);
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
    write!(stdout, "\rTotal Amount      ₹{counter}")?;
    stdout.flush()?;
    Ok(())
}
