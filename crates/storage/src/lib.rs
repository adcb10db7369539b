//! Storage layer for pinrex
//!
//! Versioned relational schema for the chemistry catalog with a SQLite
//! backend (default) and an optional PostgreSQL backend, both reached through
//! one async trait per catalog area.

mod backend;
mod error;
#[cfg(feature = "sqlite")]
mod migrations;
#[cfg(feature = "postgres")]
mod pg_migrations;
#[cfg(feature = "postgres")]
pub mod pg_storage;
mod schema;
#[cfg(feature = "sqlite")]
mod sqlite_async;
#[cfg(feature = "sqlite")]
mod storage;
#[cfg(all(test, feature = "sqlite"))]
mod tests;
pub mod traits;
mod types;

pub use backend::StorageBackend;
pub use error::StorageError;
#[cfg(feature = "postgres")]
pub use pg_storage::PgStorage;
pub use schema::{Migration, Schema};
#[cfg(feature = "sqlite")]
pub use storage::Storage;
pub use traits::{
    ChemicalStore, LabStore, MonomerStore, NameStore, PolymerStore, ReactionStore, SolventStore,
    StatsStore, ToxicityStore,
};
pub use types::CatalogStats;
