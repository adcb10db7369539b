//! Test utilities and module declarations for storage tests.

use crate::Storage;
use pinrex_core::{ChemicalInput, PolymerInput, SolventInput};
use tempfile::TempDir;

mod async_tests;
mod catalog_tests;
mod lab_tests;
mod name_tests;
mod polymer_tests;
mod schema_tests;
mod toxicity_tests;

#[expect(clippy::unwrap_used, reason = "test code")]
pub fn create_test_storage() -> (Storage, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("test.db");
    let storage = Storage::new(&db_path).unwrap();
    (storage, temp_dir)
}

#[expect(clippy::unwrap_used, reason = "test code")]
pub fn create_test_polymer(storage: &Storage, rid: &str) -> i64 {
    let input = PolymerInput::with_smiles(format!("*CC(*){rid}")).unwrap().rid(rid);
    storage.save_polymer(&input).unwrap().id
}

#[expect(clippy::unwrap_used, reason = "test code")]
pub fn create_test_solvent(storage: &Storage, smiles: &str) -> i64 {
    storage.save_solvent(&SolventInput::new(smiles).unwrap()).unwrap().id
}

#[expect(clippy::unwrap_used, reason = "test code")]
pub fn create_test_chemical(storage: &Storage, smiles: &str) -> i64 {
    storage.save_chemical(&ChemicalInput::new(smiles).unwrap()).unwrap().id
}
