use anyhow::{Result, bail};
use pinrex_storage::{Schema, StatsStore};
use serde_json::json;

use super::print_json;
use crate::open_backend;

pub(crate) async fn run_migrate() -> Result<()> {
    let backend = open_backend().await?;
    backend.setup(&Schema::current()).await?;
    let version = backend.schema_version().await?;
    tracing::info!(backend = backend.kind(), version, "catalog schema ready");
    print_json(&json!({ "backend": backend.kind(), "schema_version": version }))
}

pub(crate) async fn run_teardown(confirmed: bool) -> Result<()> {
    if !confirmed {
        bail!("teardown drops every catalog table; pass --yes to confirm");
    }
    let backend = open_backend().await?;
    backend.teardown(&Schema::current()).await?;
    tracing::warn!(backend = backend.kind(), "catalog schema dropped");
    print_json(&json!({ "backend": backend.kind(), "schema_version": 0 }))
}

pub(crate) async fn run_stats() -> Result<()> {
    let backend = open_backend().await?;
    let stats = backend.get_stats().await?;
    print_json(&stats)
}
