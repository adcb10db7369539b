use anyhow::Result;
use pinrex_core::{NameKind, make_name_record, normalize};
use pinrex_storage::NameStore;

use super::print_json;
use crate::open_backend;

pub(crate) fn run_normalize(name: &str) {
    println!("{}", normalize(name));
}

pub(crate) async fn run_add_name(
    kind: NameKind,
    owner_id: i64,
    name: String,
    convention: Option<String>,
    notes: Option<String>,
) -> Result<()> {
    let backend = open_backend().await?;
    let mut input = make_name_record(name, owner_id, convention.as_deref());
    if let Some(notes) = notes {
        input = input.with_notes(notes);
    }
    let record = backend.add_name(kind, &input).await?;
    print_json(&record)
}

pub(crate) async fn run_names(kind: NameKind, owner_id: i64) -> Result<()> {
    let backend = open_backend().await?;
    let records = backend.names_for_owner(kind, owner_id).await?;
    print_json(&records)
}

pub(crate) async fn run_rename(kind: NameKind, id: i64, name: &str) -> Result<()> {
    let backend = open_backend().await?;
    let record = backend.rename_name(kind, id, name).await?;
    print_json(&record)
}
