//! Iteradle - CLI
//!
//! Daily guess-the-colleague puzzle with TUI and CLI modes.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use iteradle::{
    commands::{
        GameOptions, check_guess, hint_for_date, print_schedule_statistics, run_schedule,
        run_simple, today_info,
    },
    config::{GameConfig, Settings},
    core::Roster,
    output::{print_guess_report, print_today},
    rosters::{demo_roster, loader::load_from_file},
};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "iteradle",
    about = "Guess today's colleague from their attributes",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Roster file (semicolon separated); defaults to the built-in demo roster
    #[arg(short, long, global = true)]
    roster: Option<PathBuf>,

    /// TOML config file with variant, limits, glyphs and tolerances
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Puzzle date as YYYY-MM-DD (default: today, UTC)
    #[arg(short, long, global = true)]
    date: Option<NaiveDate>,

    /// Game variant: classic, directory or regional (overrides the config file)
    #[arg(short, long, global = true)]
    variant: Option<String>,

    /// Random target every game instead of the daily one
    #[arg(short, long, global = true)]
    practice: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based game without TUI)
    Simple,

    /// Show the puzzle number and roster size for the date
    Today {
        /// Also print the name of the target
        #[arg(long)]
        reveal: bool,
    },

    /// Check one guess against the target for the date
    Guess {
        /// Name or email of the person to guess
        name: String,
    },

    /// Show the hint at a given index for the date's target
    Hint {
        /// Zero-based hint index
        index: usize,
    },

    /// Simulate target selection over a range of days
    Schedule {
        /// Number of days to simulate
        #[arg(short = 'n', long, default_value = "365")]
        days: usize,

        /// First day (default: the puzzle date)
        #[arg(short, long)]
        from: Option<NaiveDate>,

        /// Print the target of every day
        #[arg(short, long)]
        show_days: bool,
    },
}

/// Load config from `--config` (or defaults) with the `--variant` override applied
fn load_settings(path: Option<&Path>, variant: Option<&str>) -> Result<Settings> {
    let mut config = match path {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => GameConfig::default(),
    };
    if let Some(variant) = variant {
        config.variant = variant.to_string();
    }
    Ok(config.settings()?)
}

/// Load the roster from `--roster`, or the built-in demo roster
fn load_roster(path: Option<&Path>, settings: &Settings) -> Result<Roster> {
    let roster = match path {
        Some(path) => load_from_file(path, &settings.schema)
            .with_context(|| format!("failed to load roster {}", path.display()))?,
        None => demo_roster(&settings.schema).context("built-in demo roster is invalid")?,
    };
    info!(people = roster.len(), "roster ready");
    Ok(roster)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();

    let settings = load_settings(cli.config.as_deref(), cli.variant.as_deref())?;
    let roster = load_roster(cli.roster.as_deref(), &settings)?;
    let date = cli
        .date
        .unwrap_or_else(|| chrono::Utc::now().date_naive());

    let options = GameOptions {
        date,
        limits: settings.limits,
        glyphs: settings.glyphs,
        practice: cli.practice,
    };

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&roster, &settings, options),
        Commands::Simple => run_simple(&roster, &settings.schema, &options),
        Commands::Today { reveal } => {
            let info = today_info(&roster, date, reveal)?;
            print_today(&info);
            Ok(())
        }
        Commands::Guess { name } => {
            let report = check_guess(&name, &roster, &settings.schema, date)?;
            print_guess_report(&report, &settings.schema);
            Ok(())
        }
        Commands::Hint { index } => {
            println!("{}", hint_for_date(&roster, &settings.schema, date, index)?);
            Ok(())
        }
        Commands::Schedule {
            days,
            from,
            show_days,
        } => {
            let stats = run_schedule(&roster, from.unwrap_or(date), days);
            print_schedule_statistics(&stats, show_days);
            Ok(())
        }
    }
}

fn run_play_command(roster: &Roster, settings: &Settings, options: GameOptions) -> Result<()> {
    use iteradle::interactive::{App, run_tui};

    let app = App::new(roster, &settings.schema, options)?;
    run_tui(app)
}
