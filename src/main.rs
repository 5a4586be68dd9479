//! FitnessDaily - personal fitness tracker
//!
//! Main entry point for the command-line front end.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use fitnessdaily::storage::config::{self, ThemeMode};
use fitnessdaily::storage::Database;
use fitnessdaily::{DataRepository, FitnessApp, Preferences, SystemClock};
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(
    name = "fitness-daily",
    version,
    about = "Personal fitness tracker",
    long_about = "Log workouts and meals, track goals, streaks and achievements."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Data directory override (config.toml and fitnessdaily.db)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Keep everything in memory for this run
    #[arg(long, global = true)]
    in_memory: bool,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Interactive session over stdin (default)
    Session,

    /// Show or change the theme
    Theme {
        #[command(subcommand)]
        action: Option<ThemeCommand>,
    },

    /// List achievements with progress
    Achievements,

    /// Weekly workout and goal progress
    Progress,

    /// Walk through the first-launch tutorial
    Tutorial {
        /// Mark the tutorial done without showing it
        #[arg(long)]
        skip: bool,
    },

    /// Show a motivational quote
    Quote {
        /// Show one even if the last was recent
        #[arg(long)]
        force: bool,
    },

    /// Delete all data and settings
    Reset {
        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },

    /// Write and print the effective configuration
    Config,
}

#[derive(Subcommand)]
enum ThemeCommand {
    /// Print the current theme
    Get,
    /// Set the theme: light, dark or system
    Set { mode: String },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting FitnessDaily v{}", env!("CARGO_PKG_VERSION"));

    let data_dir = cli.data_dir.clone().unwrap_or_else(config::get_data_dir);
    let app_config = config::load_config_from(&data_dir)
        .with_context(|| format!("Failed to load config from {}", data_dir.display()))?;

    let prefs = if cli.in_memory {
        tracing::info!("Using in-memory storage");
        Preferences::in_memory()
    } else {
        std::fs::create_dir_all(&app_config.data_dir)
            .with_context(|| format!("Failed to create {}", app_config.data_dir.display()))?;
        let db = Database::open(&app_config.database_path())?;
        Preferences::new(db)
    };

    let repo = DataRepository::new(prefs, Box::new(SystemClock), app_config.stats.clone());
    let mut app = FitnessApp::new(repo, app_config);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command.unwrap_or(Command::Session) {
        Command::Session => {
            for line in app.startup(&mut rand::thread_rng()) {
                writeln!(out, "{}", line)?;
            }
            let stdin = std::io::stdin();
            app.run_session(stdin.lock(), &mut out)?;
        }
        Command::Theme { action } => match action.unwrap_or(ThemeCommand::Get) {
            ThemeCommand::Get => {
                writeln!(out, "{}", app.repository().preferences().theme_mode())?;
            }
            ThemeCommand::Set { mode } => {
                let mode: ThemeMode = mode.parse()?;
                app.repository_mut().preferences_mut().set_theme_mode(mode);
                writeln!(out, "Theme set to {}", mode)?;
            }
        },
        Command::Achievements => writeln!(out, "{}", app.render_achievements())?,
        Command::Progress => writeln!(out, "{}", app.render_progress())?,
        Command::Tutorial { skip } => writeln!(out, "{}", app.run_tutorial(skip))?,
        Command::Quote { force } => match app.startup_quote(&mut rand::thread_rng(), force) {
            Some(quote) => writeln!(out, "{}", quote)?,
            None => writeln!(out, "No quote due yet (use --force)")?,
        },
        Command::Reset { yes } => {
            if !yes {
                bail!("Refusing to delete all data without --yes");
            }
            app.reset_all_data();
            writeln!(out, "All data deleted")?;
        }
        Command::Config => {
            let path = config::save_config(app.config())?;
            writeln!(out, "# {}", path.display())?;
            write!(out, "{}", toml::to_string_pretty(app.config())?)?;
        }
    }

    Ok(())
}
