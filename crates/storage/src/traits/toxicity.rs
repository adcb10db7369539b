use async_trait::async_trait;
use pinrex_core::{
    ExperimentalCellLine, ExperimentalCellLineInput, Gene, Tox21Data, Tox21DataInput,
    Tox21Molecule, Tox21MoleculeInput, ToxAssay, ToxAssayInput,
};

use crate::error::StorageError;

/// Tox21 genes, cell lines, assays, molecules and results.
#[async_trait]
pub trait ToxicityStore: Send + Sync {
    async fn save_gene(&self, name: &str, uniprot_id: Option<i64>) -> Result<Gene, StorageError>;

    async fn save_cell_line(
        &self,
        input: &ExperimentalCellLineInput,
    ) -> Result<ExperimentalCellLine, StorageError>;

    async fn save_tox_assay(&self, input: &ToxAssayInput) -> Result<ToxAssay, StorageError>;

    async fn save_tox21_molecule(
        &self,
        input: &Tox21MoleculeInput,
    ) -> Result<Tox21Molecule, StorageError>;

    async fn add_tox21_data(&self, input: &Tox21DataInput) -> Result<Tox21Data, StorageError>;

    async fn tox21_data_for_assay(&self, assay_id: i64) -> Result<Vec<Tox21Data>, StorageError>;
}
