//! `attendance-engine` binary.
//!
//! Loads the pattern catalog, then either evaluates CSV grid exports into a
//! result table or serves the HTTP API.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, warn};

use attendance_engine::api::{AppState, create_router};
use attendance_engine::config::{ConfigLoader, PatternCatalog};
use attendance_engine::logging;
use attendance_engine::normalizer::read_grid_csv;
use attendance_engine::pipeline;

#[derive(Parser)]
#[command(name = "attendance-engine")]
#[command(about = "Holiday and overtime attendance eligibility engine", long_about = None)]
struct Cli {
    /// Directory holding patterns.yaml and rules.yaml
    #[arg(long, global = true, default_value = "./config/attendance")]
    config: PathBuf,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate CSV grid exports and write the result table
    Evaluate {
        /// Result table to write
        #[arg(long, short)]
        output: PathBuf,

        /// One headerless CSV grid per document
        #[arg(required = true)]
        grids: Vec<PathBuf>,
    },

    /// Serve the HTTP API
    Serve {
        /// Listen address
        #[arg(long, env = "ATTENDANCE_ADDR", default_value = "127.0.0.1:8080")]
        addr: SocketAddr,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    logging::init();
    let cli = Cli::parse();

    let catalog = load_catalog(&cli.config)?;

    match cli.cmd {
        Commands::Evaluate { output, grids } => evaluate(catalog, &grids, &output),
        Commands::Serve { addr } => serve(catalog, addr).await,
    }
}

fn load_catalog(dir: &Path) -> Result<PatternCatalog> {
    let loader = ConfigLoader::load(dir)
        .with_context(|| format!("failed to load configuration from {}", dir.display()))?;
    Ok(loader.into_catalog())
}

fn evaluate(catalog: PatternCatalog, grids: &[PathBuf], output: &Path) -> Result<()> {
    let documents = grids
        .iter()
        .map(|path| read_grid_csv(path).with_context(|| format!("reading {}", path.display())))
        .collect::<Result<Vec<_>>>()?;

    let report = pipeline::run(&documents, &catalog);
    for document_id in &report.summary.halted_documents {
        warn!(document_id = %document_id, "Document was only partially read");
    }

    report
        .to_table()
        .save_csv(output)
        .with_context(|| format!("writing {}", output.display()))?;

    info!(
        output = %output.display(),
        rows = report.results.len(),
        "Result table written"
    );
    Ok(())
}

async fn serve(catalog: PatternCatalog, addr: SocketAddr) -> Result<()> {
    let app = create_router(AppState::new(catalog));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {}", addr))?;
    info!("attendance-engine listening on http://{}", addr);

    axum::serve(listener, app).await.context("server crashed")?;
    Ok(())
}
