//! `lesson-clock` CLI -- countdown to the next weekly lesson from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # When is the next lesson?
//! lesson-clock next
//!
//! # How many regular lessons are left this term?
//! lesson-clock remaining
//!
//! # Live countdown, refreshed every second
//! lesson-clock countdown --watch
//!
//! # Pretend it is another moment, print JSON
//! lesson-clock --now 2025-01-09T12:00:00 --json countdown
//!
//! # Show the built-in timetable
//! lesson-clock schedule
//! ```
//!
//! Set `RUST_LOG=lesson_clock=trace` to see each skipped week on stderr.

use std::thread;
use std::time::Duration as StdDuration;

use anyhow::{Context, Result};
use chrono::{Datelike, Duration, Local, NaiveDateTime};
use clap::{Parser, Subcommand};
use lesson_clock::{
    count_remaining_in_term, resolve_next, Countdown, LessonSchedule, ResolvedOccurrence,
};
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

const NOW_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"];

#[derive(Parser)]
#[command(
    name = "lesson-clock",
    version,
    about = "Countdown to the next weekly lesson"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Use this local time instead of the system clock (e.g. 2025-01-09T12:00:00)
    #[arg(long, global = true)]
    now: Option<String>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the date and time of the next lesson
    Next,
    /// Count the regular lessons left until the end of term
    Remaining,
    /// Show the time left until the next lesson
    Countdown {
        /// Refresh once per second
        #[arg(long)]
        watch: bool,
        /// Stop after this many refreshes (requires --watch)
        #[arg(long, requires = "watch")]
        ticks: Option<u32>,
    },
    /// Print the built-in timetable
    Schedule,
}

/// Where "now" comes from: the local system clock, or a simulated clock that
/// starts at `--now` and advances exactly one second per refresh.
enum Clock {
    System,
    Simulated(NaiveDateTime),
}

impl Clock {
    fn new(now: Option<&str>) -> Result<Self> {
        match now {
            Some(raw) => Ok(Clock::Simulated(parse_now(raw)?)),
            None => Ok(Clock::System),
        }
    }

    /// The instant for the `tick`-th refresh (0 for one-shot commands).
    fn at_tick(&self, tick: u32) -> NaiveDateTime {
        match self {
            Clock::System => Local::now().naive_local(),
            Clock::Simulated(start) => *start + Duration::seconds(i64::from(tick)),
        }
    }
}

#[derive(Serialize)]
struct RemainingOutput {
    end: Option<String>,
    remaining: u32,
}

#[derive(Serialize)]
struct CountdownOutput {
    next: ResolvedOccurrence,
    countdown: Countdown,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let schedule = LessonSchedule::default();
    let clock = Clock::new(cli.now.as_deref())?;

    match cli.command {
        Commands::Next => {
            let next = resolve_next(&schedule, clock.at_tick(0));
            if cli.json {
                print_json(&next)?;
            } else {
                println!("{} {}", heading(&next), format_instant(next.instant));
            }
        }
        Commands::Remaining => {
            let now = clock.at_tick(0);
            let end = schedule.end_date_in(now.year());
            let remaining = count_remaining_in_term(&schedule, now);
            if cli.json {
                print_json(&RemainingOutput {
                    end: end.map(|d| d.to_string()),
                    remaining,
                })?;
            } else {
                match end {
                    Some(end) => println!("Remaining lessons until {}: {}", end, remaining),
                    None => println!("Remaining lessons: {}", remaining),
                }
            }
        }
        Commands::Countdown { watch, ticks } => {
            if watch {
                run_watch(&schedule, &clock, ticks, cli.json)?;
            } else {
                print_countdown(&schedule, clock.at_tick(0), cli.json)?;
            }
        }
        Commands::Schedule => {
            if cli.json {
                print_json(&schedule)?;
            } else {
                print_schedule(&schedule);
            }
        }
    }

    Ok(())
}

/// Re-resolve and print once per second, forever or for `ticks` refreshes.
fn run_watch(
    schedule: &LessonSchedule,
    clock: &Clock,
    ticks: Option<u32>,
    json: bool,
) -> Result<()> {
    info!(?ticks, "starting countdown");
    let mut tick = 0u32;
    loop {
        print_countdown(schedule, clock.at_tick(tick), json)?;
        tick = tick.saturating_add(1);
        if ticks.is_some_and(|limit| tick >= limit) {
            debug!(tick, "tick limit reached");
            return Ok(());
        }
        thread::sleep(StdDuration::from_secs(1));
    }
}

fn print_countdown(schedule: &LessonSchedule, now: NaiveDateTime, json: bool) -> Result<()> {
    let next = resolve_next(schedule, now);
    let countdown = Countdown::between(now, next.instant);

    if json {
        return print_json(&CountdownOutput { next, countdown });
    }

    match countdown {
        Countdown::Upcoming {
            days,
            hours,
            minutes,
            seconds,
        } => println!(
            "{} {} days, {} hours, {} minutes, {} seconds",
            heading(&next),
            days,
            hours,
            minutes,
            seconds
        ),
        Countdown::Started => {
            println!("The lesson (or test) is in progress or already over.")
        }
    }
    Ok(())
}

fn print_schedule(schedule: &LessonSchedule) {
    let calendar = schedule.calendar();
    let excluded: Vec<String> = calendar.excluded().iter().map(|md| md.to_string()).collect();

    println!("Lesson:    every {} at {}", schedule.weekday(), schedule.time().format("%H:%M"));
    println!("No lesson: {}", excluded.join(", "));
    println!("Test:      {}", calendar.special());
    println!("Term ends: {}", schedule.end_boundary());
}

fn heading(next: &ResolvedOccurrence) -> &'static str {
    if next.is_special {
        "Next lesson (test):"
    } else {
        "Next lesson:"
    }
}

fn format_instant(instant: NaiveDateTime) -> String {
    instant.format("%a %Y-%m-%d %H:%M").to_string()
}

fn parse_now(raw: &str) -> Result<NaiveDateTime> {
    NOW_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .with_context(|| {
            format!(
                "Invalid --now value '{}': expected YYYY-MM-DDTHH:MM[:SS]",
                raw
            )
        })
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", json);
    Ok(())
}
