//! Forza - Workout Routine Builder
//!
//! CLI entry point: renders a routine JSON file to a PDF document.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use forza::export::RoutineDocument;
use forza::routine::Routine;
use forza::storage::{Database, StudentStore};

#[derive(Parser)]
#[command(name = "forza", version, about = "Render a workout routine to PDF")]
struct Cli {
    /// Routine JSON file (the editor's serialized form)
    routine: PathBuf,

    /// SQLite database used to resolve the student name
    #[arg(long)]
    db: Option<PathBuf>,

    /// Watermark image (HTTP URL or file path)
    #[arg(long)]
    watermark: Option<String>,

    /// Output directory (defaults to the current directory)
    #[arg(long, short)]
    output: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Forza v{}", env!("CARGO_PKG_VERSION"));

    let cli = Cli::parse();

    let json = std::fs::read_to_string(&cli.routine)
        .with_context(|| format!("reading {}", cli.routine.display()))?;
    let routine: Routine = serde_json::from_str(&json)
        .with_context(|| format!("parsing {}", cli.routine.display()))?;

    let db = match &cli.db {
        Some(path) => Some(Database::open(path).context("opening database")?),
        None => None,
    };
    let students = db.as_ref().map(|db| StudentStore::new(db.connection()));

    let mut builder = RoutineDocument::new(&routine);
    if let Some(students) = &students {
        builder = builder.with_students(students);
    }
    if let Some(watermark) = &cli.watermark {
        builder = builder.with_watermark(watermark.clone());
    }

    let document = builder.generate().await?;

    let out_dir = cli.output.unwrap_or_else(|| PathBuf::from("."));
    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("creating {}", out_dir.display()))?;
    let out_path = out_dir.join(&document.filename);
    std::fs::write(&out_path, &document.bytes)
        .with_context(|| format!("writing {}", out_path.display()))?;

    tracing::info!("Wrote {}", out_path.display());
    Ok(())
}
