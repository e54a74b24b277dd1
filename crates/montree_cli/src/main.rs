//! Command-line driver for the curriculum sequencing core.
//!
//! # Responsibility
//! - Open a curriculum database and run progress/merge/placement queries.
//! - Print results as JSON on stdout; diagnostics go to the log sink.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use montree_core::{
    default_log_level, init_logging, CurriculumService, EngineConfig, LoggingOptions,
    ProgressService, SequencingEngine, SqliteAssignmentRepository, SqliteCurriculumRepository,
};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "montree", version, about = "Curriculum sequencing and progress queries")]
struct Cli {
    /// SQLite database holding curriculum and assignments.
    #[arg(long, global = true, default_value = "montree.db")]
    db: PathBuf,

    /// JSON engine configuration (aliases, keyword table, thresholds).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Absolute directory for rotating log files; stderr when omitted.
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Per-area progress for one child.
    Progress {
        #[arg(long)]
        child: String,
    },
    /// Merged curriculum view for one area.
    Merge {
        #[arg(long)]
        area: String,
        /// Persist the merged view instead of previewing it.
        #[arg(long)]
        apply: bool,
    },
    /// Similarity score between two work names.
    Score { a: String, b: String },
    /// Insertion index for a work name in an area's current list.
    Place {
        #[arg(long)]
        area: String,
        work: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = cli
        .log_level
        .clone()
        .unwrap_or_else(|| default_log_level().to_string());
    let options = match &cli.log_dir {
        Some(dir) => LoggingOptions::files(level, dir),
        None => LoggingOptions::stderr(level),
    };
    init_logging(&options).context("failed to initialize logging")?;

    let config = match &cli.config {
        Some(path) => EngineConfig::load(path)
            .with_context(|| format!("failed to load config `{}`", path.display()))?,
        None => EngineConfig::default(),
    };
    let engine = SequencingEngine::new(&config);

    if let Command::Score { a, b } = &cli.command {
        return print_json(&serde_json::json!({ "a": a, "b": b, "score": engine.score(a, b) }));
    }

    let conn = montree_core::db::open_db(&cli.db)
        .with_context(|| format!("failed to open database `{}`", cli.db.display()))?;
    let curriculum = SqliteCurriculumRepository::try_new(&conn)?;
    let assignments = SqliteAssignmentRepository::try_new(&conn)?;
    info!(
        "event=cli_command module=cli status=start command={}",
        command_name(&cli.command)
    );

    match &cli.command {
        Command::Progress { child } => {
            let service = ProgressService::new(curriculum, assignments, engine);
            let progress = service
                .child_progress(child)
                .context("failed to compute progress")?;
            print_json(&progress)
        }
        Command::Merge { area, apply: false } => {
            let service = CurriculumService::new(curriculum, assignments, engine);
            let merged = service
                .preview_merge(area)
                .context("failed to preview merge")?;
            print_json(&merged)
        }
        Command::Merge { area, apply: true } => {
            let service = CurriculumService::new(curriculum, assignments, engine);
            let summary = service
                .import_orphans(area)
                .context("failed to import orphan works")?;
            print_json(&summary)
        }
        Command::Place { area, work } => {
            let service = CurriculumService::new(curriculum, assignments, engine);
            let index = service
                .suggest_position(area, work)
                .context("failed to place work")?;
            print_json(&serde_json::json!({ "area": area, "work": work, "index": index }))
        }
        Command::Score { .. } => bail!("score does not read the database"),
    }
}

fn command_name(command: &Command) -> &'static str {
    match command {
        Command::Progress { .. } => "progress",
        Command::Merge { .. } => "merge",
        Command::Score { .. } => "score",
        Command::Place { .. } => "place",
    }
}

fn print_json(value: &impl serde::Serialize) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("failed to render JSON")?;
    println!("{rendered}");
    Ok(())
}
