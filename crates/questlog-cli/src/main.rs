//! questlog CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "questlog", version, about = "Gamified goal tracker")]
struct Cli {
    /// Save file path (default: save_path from questlog.toml, else questlog.json)
    #[arg(long, global = true)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new goal
    Add {
        /// Goal kind: simple, eternal, checklist, negative, progress
        #[arg(long)]
        kind: String,

        /// Goal name (unique, case-insensitive)
        #[arg(long)]
        name: String,

        /// Short description
        #[arg(long, default_value = "")]
        description: String,

        /// Base points (per event, or on completion for simple/progress)
        #[arg(long)]
        points: i64,

        /// Target count/steps (checklist and progress goals)
        #[arg(long)]
        target: Option<u32>,

        /// Bonus points on reaching the target (checklist goals)
        #[arg(long)]
        bonus: Option<i64>,

        /// Points per step (progress goals)
        #[arg(long)]
        step_points: Option<i64>,
    },

    /// Record an event for a goal
    Record {
        /// Name of the goal
        #[arg(long)]
        name: String,
    },

    /// List all goals with their progress
    List,

    /// Show total points, level, and achievements
    Score,

    /// Create a starter questlog.toml config
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("questlog=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();
    let save_file = config::resolve_save_file(cli.file);

    let result = match cli.command {
        Commands::Add {
            kind,
            name,
            description,
            points,
            target,
            bonus,
            step_points,
        } => commands::add::execute(
            &save_file,
            &kind,
            name,
            description,
            points,
            target,
            bonus,
            step_points,
        ),
        Commands::Record { name } => commands::record::execute(&save_file, &name),
        Commands::List => commands::list::execute(&save_file),
        Commands::Score => commands::score::execute(&save_file),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
