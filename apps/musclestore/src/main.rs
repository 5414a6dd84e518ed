use anyhow::{Context, Result, bail};
use chrono::{Datelike, NaiveDate};
use clap::{Parser, Subcommand};
use musclestore_calendar::{CalendarMonth, Direction, YearMonth};
use musclestore_config::{MusclestoreConfig, load_config, local_today};
use musclestore_logging::LogLevel;
use musclestore_notation::{
    WorkoutNotation, display_date, events_from_notations, parse_timestamp, read_notations,
    recorded_on,
};
use musclestore_stats::WorkoutStats;
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(name = "musclestore")]
#[command(about = "Workout streaks, averages, and calendar months from recorded notations.", long_about = None)]
struct Cli {
    /// Config file (.yaml, .yml or .json).
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Reference date, YYYY-MM-DD. Overrides MUSCLESTORE_TODAY and the config.
    #[arg(long, global = true)]
    today: Option<NaiveDate>,
    /// Log level for diagnostics on stderr.
    #[arg(long, global = true)]
    log_level: Option<LogLevel>,
    /// Print machine-readable JSON.
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Streak, weekly and monthly averages, and whether today is recorded.
    Stats {
        /// JSON array of notations. Falls back to `notations` in the config.
        #[arg(long)]
        notations: Option<PathBuf>,
    },

    /// Show a month with workout days marked.
    Calendar {
        #[arg(long)]
        notations: Option<PathBuf>,
        /// Year to show; defaults to the reference date's year.
        #[arg(long)]
        year: Option<i32>,
        /// Month 1-12; defaults to the reference date's month.
        #[arg(long)]
        month: Option<u32>,
        /// Page to the next/prev month. Repeatable.
        #[arg(long)]
        shift: Vec<Direction>,
        /// Grid width; defaults to `calendar_columns` in the config.
        #[arg(long)]
        columns: Option<usize>,
        /// Attach a note to a day, as DAY=TEXT. Repeatable; a day keeps notes in order.
        #[arg(long = "note")]
        notes: Vec<String>,
    },

    /// Print the notation body for a new workout.
    Record {
        /// Workout time; defaults to the reference date at the current local time.
        #[arg(long)]
        at: Option<String>,
        /// Refuse when this history already has a workout on that day.
        #[arg(long)]
        notations: Option<PathBuf>,
    },

    /// Render a notation timestamp as dd.MM.yyyy.
    Date { timestamp: String },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => MusclestoreConfig::default(),
    };
    if let Some(level) = cli.log_level {
        config.logging = config.logging.with_level(level);
    }
    musclestore_logging::init(&config.logging)?;

    let today = match cli.today {
        Some(day) => day,
        None => config.resolve_today(local_today())?,
    };
    debug!(%today, "reference date");

    match cli.cmd {
        Command::Stats { notations } => {
            let path = notations_path(notations, &config)?;
            let stats = WorkoutStats::from_notations(&read_notations(&path)?, today);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                println!("{stats}");
            }
        }

        Command::Calendar { notations, year, month, shift, columns, notes } => {
            let path = notations_path(notations, &config)?;
            let events = events_from_notations(&read_notations(&path)?);

            let start = YearMonth::new(
                year.unwrap_or(today.year()),
                month.unwrap_or(today.month()),
            )?;
            let shown = shift.iter().try_fold(start, |ym, dir| ym.advance(*dir))?;
            info!(month = %shown, events = events.len(), "building calendar");

            let mut grid = CalendarMonth::build(shown, &events);
            for note in &notes {
                let (day, text) = note
                    .split_once('=')
                    .with_context(|| format!("note {note:?} is not DAY=TEXT"))?;
                let day: u32 = day
                    .trim()
                    .parse()
                    .with_context(|| format!("note {note:?} has no day number"))?;
                grid = grid.add_note(day, text.trim())?;
            }

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&grid)?);
            } else {
                println!("{}", grid.render(columns.unwrap_or(config.calendar_columns))?);
                for cell in grid.cells().iter().filter(|c| !c.notes.is_empty()) {
                    println!("{:>2}: {}", cell.day_of_month, cell.notes.join("; "));
                }
            }
        }

        Command::Record { at, notations } => {
            let at = match at {
                Some(raw) => parse_timestamp(&raw)?,
                None => today.and_time(chrono::Local::now().time()),
            };
            if let Some(path) = notations.or_else(|| config.notations.clone()) {
                let events = events_from_notations(&read_notations(&path)?);
                if recorded_on(&events, at.date()) {
                    bail!("a workout is already recorded for {}", at.date());
                }
            }
            println!("{}", serde_json::to_string(&WorkoutNotation::at(at))?);
        }

        Command::Date { timestamp } => {
            let shown = display_date(&timestamp);
            if cli.json {
                println!(
                    "{}",
                    serde_json::json!({ "timestamp": timestamp, "date": shown })
                );
            } else {
                println!("{shown}");
            }
        }
    }

    Ok(())
}

fn notations_path(arg: Option<PathBuf>, config: &MusclestoreConfig) -> Result<PathBuf> {
    arg.or_else(|| config.notations.clone())
        .context("no notation file; pass --notations or set `notations` in the config")
}
