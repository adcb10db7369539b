//! ToxicityStore implementation for PgStorage.

use super::*;

use crate::traits::ToxicityStore;
use async_trait::async_trait;
use pinrex_core::{
    ExperimentalCellLine, ExperimentalCellLineInput, Gene, Tox21DataInput, Tox21MoleculeInput,
    ToxAssayInput,
};

#[async_trait]
impl ToxicityStore for PgStorage {
    async fn save_gene(&self, name: &str, uniprot_id: Option<i64>) -> Result<Gene, StorageError> {
        let id: i64 =
            sqlx::query_scalar("INSERT INTO genes (name, uniprot_id) VALUES ($1, $2) RETURNING id")
                .bind(name)
                .bind(uniprot_id)
                .fetch_one(&self.pool)
                .await?;
        Ok(Gene { id, name: name.to_owned(), uniprot_id })
    }

    async fn save_cell_line(
        &self,
        input: &ExperimentalCellLineInput,
    ) -> Result<ExperimentalCellLine, StorageError> {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO experimental_cell_lines
               (name, experimental_cell_clo_id, cell, cell_clo_id, cellosaurus_id, organism, organism_taxon_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING id",
        )
        .bind(&input.name)
        .bind(&input.experimental_cell_clo_id)
        .bind(&input.cell)
        .bind(&input.cell_clo_id)
        .bind(&input.cellosaurus_id)
        .bind(&input.organism)
        .bind(input.organism_taxon_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(ExperimentalCellLine {
            id,
            name: input.name.clone(),
            experimental_cell_clo_id: input.experimental_cell_clo_id.clone(),
            cell: input.cell.clone(),
            cell_clo_id: input.cell_clo_id.clone(),
            cellosaurus_id: input.cellosaurus_id.clone(),
            organism: input.organism.clone(),
            organism_taxon_id: input.organism_taxon_id,
        })
    }

    async fn save_tox_assay(&self, input: &ToxAssayInput) -> Result<ToxAssay, StorageError> {
        let row = sqlx::query(&format!(
            "INSERT INTO tox_assays
               (assay_type, pair_id, pubchem_aid, tox21_aid, reporter_gene_assay, exp_cell_line_id, gene_id,
                target, target_effect, target_mode_of_action, kit, physical_detection_method,
                detection_instrument, definition)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
             RETURNING {TOX_ASSAY_COLUMNS}"
        ))
        .bind(&input.assay_type)
        .bind(input.pair_id)
        .bind(input.pubchem_aid)
        .bind(input.tox21_aid)
        .bind(&input.reporter_gene_assay)
        .bind(input.exp_cell_line_id)
        .bind(input.gene_id)
        .bind(&input.target)
        .bind(&input.target_effect)
        .bind(input.target_mode_of_action.as_str())
        .bind(&input.kit)
        .bind(&input.physical_detection_method)
        .bind(&input.detection_instrument)
        .bind(&input.definition)
        .fetch_one(&self.pool)
        .await?;
        row_to_tox_assay(&row)
    }

    async fn save_tox21_molecule(
        &self,
        input: &Tox21MoleculeInput,
    ) -> Result<Tox21Molecule, StorageError> {
        let row = sqlx::query(&format!(
            "INSERT INTO tox21_molecules (pubchem_aid, tox21_sid, smiles, fingerprint, cluster)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {TOX21_MOLECULE_COLUMNS}"
        ))
        .bind(input.pubchem_aid)
        .bind(serde_json::to_value(&input.tox21_sid)?)
        .bind(&input.smiles)
        .bind(&input.fingerprint)
        .bind(input.cluster)
        .fetch_one(&self.pool)
        .await?;
        row_to_tox21_molecule(&row)
    }

    async fn add_tox21_data(&self, input: &Tox21DataInput) -> Result<Tox21Data, StorageError> {
        let row = sqlx::query(&format!(
            "INSERT INTO tox21_data (molecule_id, assay_id, activity, pac50_val, reference)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {TOX21_DATA_COLUMNS}"
        ))
        .bind(input.molecule_id)
        .bind(input.assay_id)
        .bind(input.activity.as_str())
        .bind(input.pac50_val)
        .bind(&input.reference)
        .fetch_one(&self.pool)
        .await?;
        row_to_tox21_data(&row)
    }

    async fn tox21_data_for_assay(&self, assay_id: i64) -> Result<Vec<Tox21Data>, StorageError> {
        let rows = sqlx::query(&format!(
            "SELECT {TOX21_DATA_COLUMNS} FROM tox21_data WHERE assay_id = $1 ORDER BY id"
        ))
        .bind(assay_id)
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(row_to_tox21_data).collect()
    }
}
