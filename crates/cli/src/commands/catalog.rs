use anyhow::Result;
use pinrex_core::{ChemicalInput, NameKind, PolymerInput, SolventInput};
use pinrex_storage::{ChemicalStore, PolymerStore, SolventStore};

use super::print_json;
use crate::open_backend;

pub(crate) async fn run_add_chemical(smiles: String, cas: Option<String>) -> Result<()> {
    let mut input = ChemicalInput::new(smiles)?;
    if let Some(cas) = cas {
        input = input.cas(cas);
    }
    let backend = open_backend().await?;
    let chemical = backend.save_chemical(&input).await?;
    print_json(&chemical)
}

pub(crate) async fn run_add_polymer(
    smiles: Option<String>,
    rid: Option<String>,
    pid: Option<String>,
    category: Option<String>,
) -> Result<()> {
    let mut input = match smiles {
        Some(smiles) => PolymerInput::with_smiles(smiles)?,
        None => PolymerInput::default(),
    };
    input.rid = rid;
    input.pid = pid;
    input.category = category;
    let backend = open_backend().await?;
    let polymer = backend.save_polymer(&input).await?;
    print_json(&polymer)
}

pub(crate) async fn run_add_solvent(smiles: String) -> Result<()> {
    let input = SolventInput::new(smiles)?;
    let backend = open_backend().await?;
    let solvent = backend.save_solvent(&input).await?;
    print_json(&solvent)
}

/// Entities whose names normalize to the same key as `query`.
pub(crate) async fn run_find(kind: NameKind, query: &str) -> Result<()> {
    let backend = open_backend().await?;
    match kind {
        NameKind::Chemical => print_json(&backend.find_chemicals_by_name(query).await?),
        NameKind::Polymer => print_json(&backend.find_polymers_by_name(query).await?),
        NameKind::Solvent => print_json(&backend.find_solvents_by_name(query).await?),
    }
}
