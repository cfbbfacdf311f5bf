mod seed;

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use gramdex_core::Database;
use gramdex_core::types::{FieldName, RecordId, StoreConfig};
use gramdex_search::{Record, SearchConfig, SearchEngine, SearchQuery};
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Bigram search over an embedded document store.
#[derive(Parser, Debug)]
#[command(name = "gramdex", version, about)]
struct Args {
    /// Directory holding the database and search.toml
    #[arg(long, default_value = "gramdex-data")]
    data_dir: PathBuf,

    /// Search config file (defaults to <data-dir>/search.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Store the sample person roster
    Seed,
    /// Create a record, or replace the one at --id
    Put {
        #[arg(long)]
        id: Option<RecordId>,
        /// Field as name=value; repeatable
        #[arg(short, long = "field", value_parser = parse_field, required = true)]
        fields: Vec<(FieldName, String)>,
    },
    /// Print one record
    Get { id: RecordId },
    /// Delete one record
    Delete { id: RecordId },
    /// Find records carrying every bigram of the given terms
    Search {
        /// Free text matched against any indexed field
        #[arg(short = 'q', long)]
        query: Option<String>,
        /// Per-field term as name=value; repeatable
        #[arg(short, long = "field", value_parser = parse_field)]
        fields: Vec<(FieldName, String)>,
    },
    /// Write the effective search config to the config path
    InitConfig,
}

fn parse_field(s: &str) -> Result<(FieldName, String), String> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected name=value, got {s:?}"))?;
    let name = FieldName::try_from(name).map_err(|e| e.to_string())?;
    Ok((name, value.to_string()))
}

fn init_tracing(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn print_json(value: &impl serde::Serialize) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Opens the store under `data_dir` and wires the search engine onto it.
fn open_engine(data_dir: &Path, config: SearchConfig) -> Result<SearchEngine<Database>> {
    let db = Database::new(StoreConfig::new(data_dir)).context("opening database")?;
    Ok(SearchEngine::new(db, config)?)
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.debug);

    let config_path = args
        .config
        .clone()
        .unwrap_or_else(|| SearchConfig::path(&args.data_dir));
    let config = SearchConfig::load(&config_path)
        .with_context(|| format!("loading {}", config_path.display()))?;

    match args.command {
        Command::InitConfig => {
            std::fs::create_dir_all(&args.data_dir)?;
            config.save(&config_path)?;
            info!(path = %config_path.display(), "wrote search config");
        }
        Command::Seed => {
            let mut engine = open_engine(&args.data_dir, config)?;
            let ids = engine.put_many(&seed::roster()?)?;
            info!(count = ids.len(), "seeded roster");
            print_json(&ids)?;
        }
        Command::Put { id, fields } => {
            let mut engine = open_engine(&args.data_dir, config)?;
            let record: Record = fields.into_iter().collect();
            let id = engine.put(id, &record)?;
            print_json(&json!({ "id": id }))?;
        }
        Command::Get { id } => {
            let engine = open_engine(&args.data_dir, config)?;
            let record = engine
                .get(id)?
                .ok_or_else(|| anyhow!("record {id} not found"))?;
            print_json(&record)?;
        }
        Command::Delete { id } => {
            let mut engine = open_engine(&args.data_dir, config)?;
            engine
                .delete(id)?
                .ok_or_else(|| anyhow!("record {id} not found"))?;
            info!(record_id = %id, "deleted record");
        }
        Command::Search { query, fields } => {
            let engine = open_engine(&args.data_dir, config)?;
            let mut search = SearchQuery::new();
            search.free_text = query;
            search.fields = fields.into_iter().collect();
            print_json(&engine.search(&search)?)?;
        }
    }

    Ok(())
}
