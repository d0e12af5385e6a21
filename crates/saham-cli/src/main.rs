//! Command-line interface for the saham analysis workbench
//!
//! # Usage
//!
//! ```bash
//! export GEMINI_API_KEY="..."
//!
//! # Validate an input file locally, no network call
//! saham check --input request.json
//!
//! # Run one analysis round trip and archive the verdict
//! saham analyze --input request.json --save
//!
//! # Inspect and manage the vault
//! saham history list
//! saham history export --output vault-backup.json
//!
//! # Judge how the thesis evolved across archived verdicts
//! saham consistency --keys <id1> <id2> <id3>
//! ```

use anyhow::Context;
use clap::{Parser, Subcommand};
use saham_core::{
    capital_fit, AnalysisGateway, ArchiveStore, BlobStore, ConsistencyEngine, StockAnalysisInput,
    DEFAULT_MODEL,
};
use saham_llm::providers::GeminiProvider;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(name = "saham")]
#[command(about = "Forensic stock analysis workbench for the IDX", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Model identifier for inference calls
    #[arg(long, global = true, default_value = DEFAULT_MODEL)]
    model: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one analysis round trip for an input file
    Analyze {
        /// Path to the submission JSON
        #[arg(short, long)]
        input: PathBuf,

        /// Archive the verdict in the vault
        #[arg(long)]
        save: bool,
    },
    /// Validate an input file locally without calling the service
    Check {
        /// Path to the submission JSON
        #[arg(short, long)]
        input: PathBuf,
    },
    /// Inspect and manage the verdict vault
    History {
        #[command(subcommand)]
        command: HistoryCommands,
    },
    /// Judge trend consistency across archived verdicts of one ticker
    Consistency {
        /// Identity keys of the verdicts to compare, at least two
        #[arg(short, long, num_args = 2..)]
        keys: Vec<String>,
    },
}

#[derive(Subcommand)]
enum HistoryCommands {
    /// List archived verdicts, newest first
    List,
    /// Remove a verdict by identity key
    Remove {
        /// Identity key (id, or ticker for legacy entries)
        key: String,
    },
    /// Write the full vault to a snapshot file
    Export {
        /// Destination path; stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Merge a snapshot file into the vault
    Import {
        /// Path to a previously exported snapshot
        #[arg(short, long)]
        input: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    saham_utils::init_tracing();

    let cli = Cli::parse();
    let store = open_store()?;

    match cli.command {
        Commands::Analyze { input, save } => analyze(&cli.model, &input, save, &store).await,
        Commands::Check { input } => check(&input),
        Commands::History { command } => history(command, &store),
        Commands::Consistency { keys } => consistency(&cli.model, &keys, &store).await,
    }
}

fn open_store() -> anyhow::Result<ArchiveStore> {
    let root = saham_utils::data_dir();
    info!(root = %root.display(), "Opening vault");
    ArchiveStore::open(BlobStore::new(root)).context("failed to open the vault")
}

fn read_input(path: &PathBuf) -> anyhow::Result<StockAnalysisInput> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))
}

async fn analyze(
    model: &str,
    input: &PathBuf,
    save: bool,
    store: &ArchiveStore,
) -> anyhow::Result<()> {
    let input = read_input(input)?;
    let provider = GeminiProvider::from_env().context("failed to configure the Gemini provider")?;
    let gateway = AnalysisGateway::new(Arc::new(provider)).with_model(model);

    let result = gateway.analyze(&input).await?;
    println!("{}", serde_json::to_string_pretty(&result)?);

    if save {
        let key = store.add(result)?;
        info!(key = %key, "Verdict archived");
    }
    Ok(())
}

fn check(input: &PathBuf) -> anyhow::Result<()> {
    let input = read_input(input)?;

    match input.submission_ready() {
        Ok(()) => println!("submission-ready: yes"),
        Err(e) => println!("submission-ready: no ({e})"),
    }

    match capital_fit(&input.capital, input.capital_tier) {
        Some(advisory) => println!("capital advisory: {:?}: {}", advisory.severity, advisory.message),
        None => println!("capital advisory: none"),
    }
    Ok(())
}

fn history(command: HistoryCommands, store: &ArchiveStore) -> anyhow::Result<()> {
    match command {
        HistoryCommands::List => {
            let entries = store.entries()?;
            if entries.is_empty() {
                println!("vault is empty");
                return Ok(());
            }
            for entry in entries {
                let when = chrono::DateTime::from_timestamp_millis(entry.timestamp)
                    .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
                    .unwrap_or_else(|| entry.timestamp.to_string());
                println!(
                    "{}  {}  {}  {:?} ({}%)",
                    entry.identity_key(),
                    when,
                    entry.ticker,
                    entry.prediction.direction,
                    entry.prediction.probability,
                );
            }
        }
        HistoryCommands::Remove { key } => {
            if store.remove(&key)? {
                println!("removed {key}");
            } else {
                println!("no entry with key {key}");
            }
        }
        HistoryCommands::Export { output } => {
            let snapshot = store.export()?;
            match output {
                Some(path) => {
                    std::fs::write(&path, snapshot)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    println!("exported to {}", path.display());
                }
                None => println!("{snapshot}"),
            }
        }
        HistoryCommands::Import { input } => {
            let snapshot = std::fs::read_to_string(&input)
                .with_context(|| format!("failed to read {}", input.display()))?;
            let merged = store.import(&snapshot)?;
            println!("imported {merged} entries");
        }
    }
    Ok(())
}

async fn consistency(model: &str, keys: &[String], store: &ArchiveStore) -> anyhow::Result<()> {
    let history = store.select_subset(keys)?;
    let provider = GeminiProvider::from_env().context("failed to configure the Gemini provider")?;
    let engine = ConsistencyEngine::new(Arc::new(provider)).with_model(model);

    let result = engine.run_consistency_check(history).await?;
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
