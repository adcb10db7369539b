mod commands;

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use pinrex_core::{NameKind, env_non_empty};
use pinrex_storage::StorageBackend;
use tracing_subscriber::EnvFilter;

const DB_PATH_VAR: &str = "PINREX_DB_PATH";

#[derive(Parser)]
#[command(name = "pinrex")]
#[command(about = "Chemistry research catalog with searchable names", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create or upgrade the catalog schema
    Migrate,
    /// Drop every catalog table
    Teardown {
        /// Confirm dropping all data
        #[arg(long)]
        yes: bool,
    },
    /// Print the search key of a name
    Normalize { name: String },
    AddChemical {
        #[arg(long)]
        smiles: String,
        #[arg(long)]
        cas: Option<String>,
    },
    AddPolymer {
        #[arg(long)]
        smiles: Option<String>,
        #[arg(long)]
        rid: Option<String>,
        #[arg(long)]
        pid: Option<String>,
        #[arg(long)]
        category: Option<String>,
    },
    AddSolvent {
        #[arg(long)]
        smiles: String,
    },
    /// Attach a name to a chemical, polymer or solvent
    AddName {
        kind: NameKind,
        owner_id: i64,
        name: String,
        #[arg(short, long)]
        convention: Option<String>,
        #[arg(short, long)]
        notes: Option<String>,
    },
    /// Look up entities by name
    Find { kind: NameKind, query: String },
    /// List the names of one entity
    Names { kind: NameKind, owner_id: i64 },
    RenameName {
        kind: NameKind,
        id: i64,
        name: String,
    },
    Stats,
}

pub(crate) fn get_db_path() -> PathBuf {
    env_non_empty(DB_PATH_VAR).map_or_else(
        || {
            dirs::data_local_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("pinrex")
                .join("pinrex.db")
        },
        PathBuf::from,
    )
}

pub(crate) fn ensure_db_dir(db_path: &Path) -> Result<()> {
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    Ok(())
}

/// PostgreSQL when a connection URL is configured, the local SQLite file otherwise.
pub(crate) async fn open_backend() -> Result<StorageBackend> {
    #[cfg(feature = "postgres")]
    if let Some(url) = pinrex_core::postgres_url_from_env() {
        return Ok(StorageBackend::new_postgres(&url).await?);
    }

    let db_path = get_db_path();
    ensure_db_dir(&db_path)?;
    tracing::debug!(path = %db_path.display(), "opening SQLite catalog");
    let db_path_clone = db_path.clone();
    let backend =
        tokio::task::spawn_blocking(move || StorageBackend::new_sqlite(&db_path_clone)).await??;
    Ok(backend)
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Migrate => commands::schema::run_migrate().await?,
        Commands::Teardown { yes } => commands::schema::run_teardown(yes).await?,
        Commands::Normalize { name } => commands::names::run_normalize(&name),
        Commands::AddChemical { smiles, cas } => {
            commands::catalog::run_add_chemical(smiles, cas).await?;
        },
        Commands::AddPolymer { smiles, rid, pid, category } => {
            commands::catalog::run_add_polymer(smiles, rid, pid, category).await?;
        },
        Commands::AddSolvent { smiles } => commands::catalog::run_add_solvent(smiles).await?,
        Commands::AddName { kind, owner_id, name, convention, notes } => {
            commands::names::run_add_name(kind, owner_id, name, convention, notes).await?;
        },
        Commands::Find { kind, query } => commands::catalog::run_find(kind, &query).await?,
        Commands::Names { kind, owner_id } => commands::names::run_names(kind, owner_id).await?,
        Commands::RenameName { kind, id, name } => {
            commands::names::run_rename(kind, id, &name).await?;
        },
        Commands::Stats => commands::schema::run_stats().await?,
    }

    Ok(())
}
