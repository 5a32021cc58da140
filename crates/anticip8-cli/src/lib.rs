//! `anticip8` command-line driver over a SQLite counter store.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use serde_json::Value;

use anticip8_core::config::Anticip8Config;
use anticip8_core::models::{EdgeEvent, NavigationEvent, PolicyQuery};
use anticip8_embeddings::{publish_all, I2vCandidateSource, PayloadEntry};
use anticip8_policy::PolicyEngine;
use anticip8_storage::{Ingestor, SqliteCounterStore};

#[derive(Debug, Parser)]
#[command(name = "anticip8")]
#[command(about = "Predict the next API paths a client will request", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// TOML configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// SQLite database (overrides storage.db_path)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Rank likely next paths for a source
    Policy {
        #[arg(long)]
        service: String,
        #[arg(long)]
        path: String,
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Show the raw counters and embedding candidates behind a source
    Explain {
        #[arg(long)]
        service: String,
        #[arg(long)]
        path: String,
    },
    /// Record one event given as JSON
    Ingest {
        #[command(subcommand)]
        kind: IngestKind,
    },
    /// Publish embedding top-K lists from a JSON file
    #[command(name = "load-embeddings")]
    LoadEmbeddings { file: PathBuf },
}

#[derive(Debug, Subcommand)]
pub enum IngestKind {
    /// Same-service navigation
    Event { json: String },
    /// Cross-service navigation
    Edge { json: String },
    /// Client prefetch attempt
    Prefetch { json: String },
}

/// Configuration named by `--config`, or the defaults.
pub fn load_config(cli: &Cli) -> Result<Anticip8Config> {
    match &cli.config {
        Some(path) => Ok(Anticip8Config::from_file(path)?),
        None => Ok(Anticip8Config::default()),
    }
}

/// Resolved configuration and store for one invocation.
pub struct Session {
    pub config: Anticip8Config,
    pub store: Arc<SqliteCounterStore>,
}

impl Session {
    pub fn open(cli: &Cli, config: Anticip8Config) -> Result<Self> {
        let db = cli
            .db
            .clone()
            .unwrap_or_else(|| PathBuf::from(&config.storage.db_path));
        let store = SqliteCounterStore::open(&db, &config.storage)
            .with_context(|| format!("opening {}", db.display()))?;
        Ok(Self {
            config,
            store: Arc::new(store),
        })
    }

    fn engine(
        &self,
    ) -> PolicyEngine<Arc<SqliteCounterStore>, I2vCandidateSource<Arc<SqliteCounterStore>>> {
        let embeddings = I2vCandidateSource::new(Arc::clone(&self.store), &self.config.embeddings);
        PolicyEngine::new(Arc::clone(&self.store), embeddings, self.config.clone())
    }
}

/// Execute a parsed command, returning the JSON to print.
pub fn run(cli: &Cli, ctx: &Session) -> Result<Value> {
    tracing::debug!(command = ?cli.command, "running command");
    match &cli.command {
        Commands::Policy {
            service,
            path,
            limit,
        } => {
            let response = ctx
                .engine()
                .compute(&PolicyQuery::new(service.as_str(), path.as_str(), *limit))?;
            Ok(serde_json::to_value(response)?)
        }
        Commands::Explain { service, path } => {
            let explanation = ctx
                .engine()
                .explain(Some(service.as_str()), Some(path.as_str()))?;
            Ok(serde_json::to_value(explanation)?)
        }
        Commands::Ingest { kind } => {
            let ingestor = Ingestor::new(Arc::clone(&ctx.store), &ctx.config.policy);
            let outcome = match kind {
                IngestKind::Event { json } => {
                    let event: NavigationEvent =
                        serde_json::from_str(json).context("parsing navigation event")?;
                    ingestor.record_navigation(&event)?
                }
                IngestKind::Edge { json } => {
                    let event: EdgeEvent =
                        serde_json::from_str(json).context("parsing edge event")?;
                    ingestor.record_edge(&event)?
                }
                IngestKind::Prefetch { json } => {
                    let event: EdgeEvent =
                        serde_json::from_str(json).context("parsing prefetch event")?;
                    ingestor.record_prefetch_attempt(&event)?
                }
            };
            Ok(serde_json::json!({ "outcome": outcome }))
        }
        Commands::LoadEmbeddings { file } => {
            let lists = read_embedding_lists(file)?;
            let written = publish_all(&*ctx.store, &ctx.config.embeddings.key_prefix, &lists)?;
            Ok(serde_json::json!({ "published": written }))
        }
    }
}

fn read_embedding_lists(file: &Path) -> Result<BTreeMap<String, Vec<PayloadEntry>>> {
    let raw = std::fs::read_to_string(file)
        .with_context(|| format!("reading {}", file.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing {}", file.display()))
}
