//! swaplog - component swap log reconciler CLI
//!
//! Thin host around swaplog-core: resolves configuration, runs one
//! reconciliation pass (seed table plus fetched sheet export), and renders
//! the derived occupancy intervals and per-source diagnostics. All
//! reconciliation logic lives in the library; this binary only loads, runs,
//! and prints.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use swaplog_core::fetch::SheetSource;
use swaplog_core::seed::SeedTable;
use swaplog_core::{config, CachedReconciler, FilterCriteria, Reconciler};

mod render;

#[derive(Parser, Debug)]
#[command(name = "swaplog", about = "Aircraft component swap log reconciler")]
struct Args {
    /// Sheet CSV export URL (overrides env and config file)
    #[arg(long)]
    sheet_url: Option<String>,

    /// TOML seed table replacing the compiled-in seed
    #[arg(long)]
    seed_file: Option<PathBuf>,

    /// TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Skip the sheet fetch and reconcile the seed table only
    #[arg(long)]
    offline: bool,

    /// Evaluation date for open intervals (YYYY-MM-DD, default today)
    #[arg(long)]
    now: Option<NaiveDate>,

    /// Restrict output to these aircraft (repeatable)
    #[arg(long = "aircraft")]
    aircraft_ids: Vec<String>,

    /// Restrict output to these positions (repeatable)
    #[arg(long = "position")]
    positions: Vec<String>,

    /// Restrict output to these serials (repeatable)
    #[arg(long = "serial")]
    serials: Vec<String>,

    /// Emit the full report as JSON instead of a table
    #[arg(long)]
    json: bool,
}

impl Args {
    /// Filter criteria with user input normalized the same way the parser
    /// normalizes source rows, so `--aircraft hs-pgy` matches "HS-PGY"
    fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            aircraft_ids: self
                .aircraft_ids
                .iter()
                .map(|a| swaplog_core::normalize::normalize_aircraft_id(a))
                .collect(),
            positions: self
                .positions
                .iter()
                .map(|p| swaplog_core::normalize::normalize_position(p))
                .collect(),
            serials: self.serials.iter().map(|s| s.trim().to_string()).collect(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    info!(
        "Starting swaplog v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let args = Args::parse();

    let resolved = config::resolve(
        args.sheet_url.as_deref(),
        args.seed_file.as_deref(),
        args.config.as_deref(),
    )
    .context("failed to resolve configuration")?;

    let seed = match &resolved.seed_file {
        Some(path) => SeedTable::load(path)
            .with_context(|| format!("failed to load seed table {}", path.display()))?,
        None => SeedTable::builtin(),
    };

    let sheet = if args.offline {
        None
    } else {
        Some(SheetSource::new(&resolved.sheet_url).context("failed to build sheet client")?)
    };

    let reconciler = Reconciler::new(seed, sheet);
    let report = match args.now {
        // Explicit evaluation date: always a fresh pass
        Some(now) => reconciler.reconcile(now).await?,
        None => {
            let cache = CachedReconciler::new(reconciler, resolved.cache_ttl);
            cache.report().await?
        }
    };

    let criteria = args.criteria();
    let view = report.filtered(&criteria);

    if args.json {
        let body = serde_json::json!({
            "intervals": view,
            "diagnostics": report.diagnostics,
        });
        println!("{}", serde_json::to_string_pretty(&body)?);
        return Ok(());
    }

    for diagnostic in &report.diagnostics {
        println!("{}", render::render_diagnostic(diagnostic));
    }
    println!();
    println!("{}", render::render_table(&view));

    Ok(())
}
