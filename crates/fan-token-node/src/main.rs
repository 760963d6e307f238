// fan-token-node/src/main.rs
use anyhow::Context;
use clap::{Parser, Subcommand};
use fan_token_core::{Ledger, LedgerSnapshot, Operation};
use fan_token_node::{write_journal, NodeConfig, SharedLedger};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "fan-token-node")]
#[command(about = "Fan token ledger operator tool", version, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default configuration file
    Init {
        /// Output path
        #[arg(short, long, default_value = "./config.toml")]
        out: PathBuf,
    },

    /// Replay a JSON batch of operations against a ledger
    Apply {
        /// Configuration file describing a fresh ledger
        #[arg(short, long, required_unless_present = "snapshot")]
        config: Option<PathBuf>,

        /// JSON array of operations
        #[arg(short, long)]
        ops: PathBuf,

        /// Start from this snapshot instead of a fresh ledger
        #[arg(short, long)]
        snapshot: Option<PathBuf>,

        /// Write the resulting snapshot here
        #[arg(long)]
        snapshot_out: Option<PathBuf>,

        /// Write the event journal here, one JSON event per line
        #[arg(long)]
        events_out: Option<PathBuf>,
    },

    /// Check a snapshot's invariants and print its state root
    Verify {
        /// Snapshot file
        #[arg(short, long)]
        snapshot: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.command {
        Commands::Apply {
            config: Some(path), ..
        } => Some(
            NodeConfig::from_file(path)
                .with_context(|| format!("loading config from {}", path.display()))?,
        ),
        _ => None,
    };

    let log_level = if cli.debug {
        "debug"
    } else {
        config.as_ref().map(|c| c.logging.level.as_str()).unwrap_or("info")
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("fan_token_node={0},fan_token_core={0}", log_level).into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Init { out } => init_config(&out)?,
        Commands::Apply {
            ops,
            snapshot,
            snapshot_out,
            events_out,
            ..
        } => apply_batch(
            config,
            &ops,
            snapshot.as_deref(),
            snapshot_out.as_deref(),
            events_out.as_deref(),
        )?,
        Commands::Verify { snapshot } => verify_snapshot(&snapshot)?,
    }

    Ok(())
}

fn init_config(out: &Path) -> anyhow::Result<()> {
    if let Some(parent) = out.parent() {
        std::fs::create_dir_all(parent)?;
    }
    NodeConfig::default().to_file(out)?;

    tracing::info!("Default configuration written to {}", out.display());
    tracing::info!("Set ledger.admin before applying operations");
    Ok(())
}

fn load_snapshot(path: &Path) -> anyhow::Result<LedgerSnapshot> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("reading snapshot {}", path.display()))?;
    Ok(LedgerSnapshot::from_json(&json)?)
}

fn apply_batch(
    config: Option<NodeConfig>,
    ops_path: &Path,
    snapshot_in: Option<&Path>,
    snapshot_out: Option<&Path>,
    events_out: Option<&Path>,
) -> anyhow::Result<()> {
    let ledger = match (snapshot_in, config) {
        (Some(path), _) => {
            tracing::info!("Restoring ledger from {}", path.display());
            Ledger::from_snapshot(load_snapshot(path)?)?
        }
        (None, Some(config)) => config.build_ledger()?,
        (None, None) => anyhow::bail!("either --config or --snapshot is required"),
    };
    let ledger = SharedLedger::new(ledger);

    let ops_json = std::fs::read_to_string(ops_path)
        .with_context(|| format!("reading operations {}", ops_path.display()))?;
    let ops: Vec<Operation> = serde_json::from_str(&ops_json).context("parsing operations")?;
    tracing::info!("Applying {} operations", ops.len());

    let mut rejected = 0usize;
    for op in &ops {
        let response = ledger.apply(op);
        if !response.is_ok() {
            rejected += 1;
        }
        println!("{}", serde_json::to_string(&response)?);
    }

    let events = ledger.drain_events();
    let snapshot = ledger.snapshot();
    tracing::info!(
        applied = ops.len() - rejected,
        rejected,
        events = events.len(),
        total_supply = %snapshot.total_supply,
        paused = snapshot.paused,
        "Batch complete"
    );
    tracing::info!("State root: {}", snapshot.state_root_hex()?);

    if let Some(path) = events_out {
        write_journal(path, &events)
            .with_context(|| format!("writing events {}", path.display()))?;
        tracing::info!("{} events saved to {}", events.len(), path.display());
    }

    if let Some(path) = snapshot_out {
        std::fs::write(path, snapshot.to_json_pretty()?)
            .with_context(|| format!("writing snapshot {}", path.display()))?;
        tracing::info!("Snapshot saved to {}", path.display());
    }

    Ok(())
}

fn verify_snapshot(path: &Path) -> anyhow::Result<()> {
    let snapshot = load_snapshot(path)?;
    let root = snapshot.state_root_hex()?;

    match Ledger::from_snapshot(snapshot) {
        Ok(ledger) => {
            tracing::info!(
                accounts = ledger.accounts(),
                total_supply = %ledger.total_supply(),
                "Snapshot is consistent"
            );
            println!("{}", root);
            Ok(())
        }
        Err(e) => {
            tracing::error!("Snapshot failed verification: {}", e);
            Err(e.into())
        }
    }
}
