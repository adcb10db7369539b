use pinrex_core::{
    Activity, ExperimentalCellLine, ExperimentalCellLineInput, Gene, Tox21Data, Tox21DataInput,
    Tox21Molecule, Tox21MoleculeInput, ToxAssay, ToxAssayInput,
};
use rusqlite::params;

use super::{Storage, collect_rows, get_conn, json_text, parse_tag};
use crate::error::StorageError;

fn row_to_tox21_data(row: &rusqlite::Row<'_>) -> rusqlite::Result<Tox21Data> {
    let activity: String = row.get(3)?;
    Ok(Tox21Data {
        id: row.get(0)?,
        molecule_id: row.get(1)?,
        assay_id: row.get(2)?,
        activity: parse_tag::<Activity>(&activity)?,
        pac50_val: row.get(4)?,
        reference: row.get(5)?,
    })
}

impl Storage {
    /// Insert a gene.
    ///
    /// # Errors
    /// Returns `Duplicate` if the name or UniProt id is taken.
    pub fn save_gene(&self, name: &str, uniprot_id: Option<i64>) -> Result<Gene, StorageError> {
        let conn = get_conn(&self.pool)?;
        conn.execute(
            "INSERT INTO genes (name, uniprot_id) VALUES (?1, ?2)",
            params![name, uniprot_id],
        )?;
        Ok(Gene { id: conn.last_insert_rowid(), name: name.to_owned(), uniprot_id })
    }

    /// Insert an experimental cell line.
    ///
    /// # Errors
    /// Returns `Duplicate` if the name or CLO id is taken.
    pub fn save_cell_line(
        &self,
        input: &ExperimentalCellLineInput,
    ) -> Result<ExperimentalCellLine, StorageError> {
        let conn = get_conn(&self.pool)?;
        conn.execute(
            "INSERT INTO experimental_cell_lines
               (name, experimental_cell_clo_id, cell, cell_clo_id, cellosaurus_id, organism, organism_taxon_id)
               VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                input.name,
                input.experimental_cell_clo_id,
                input.cell,
                input.cell_clo_id,
                input.cellosaurus_id,
                input.organism,
                input.organism_taxon_id,
            ],
        )?;
        Ok(ExperimentalCellLine {
            id: conn.last_insert_rowid(),
            name: input.name.clone(),
            experimental_cell_clo_id: input.experimental_cell_clo_id.clone(),
            cell: input.cell.clone(),
            cell_clo_id: input.cell_clo_id.clone(),
            cellosaurus_id: input.cellosaurus_id.clone(),
            organism: input.organism.clone(),
            organism_taxon_id: input.organism_taxon_id,
        })
    }

    /// Insert a Tox21 assay.
    ///
    /// # Errors
    /// Returns `Constraint` if the cell line or gene does not exist.
    pub fn save_tox_assay(&self, input: &ToxAssayInput) -> Result<ToxAssay, StorageError> {
        let conn = get_conn(&self.pool)?;
        conn.execute(
            "INSERT INTO tox_assays
               (assay_type, pair_id, pubchem_aid, tox21_aid, reporter_gene_assay, exp_cell_line_id, gene_id,
                target, target_effect, target_mode_of_action, kit, physical_detection_method,
                detection_instrument, definition)
               VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14)",
            params![
                input.assay_type,
                input.pair_id,
                input.pubchem_aid,
                input.tox21_aid,
                input.reporter_gene_assay,
                input.exp_cell_line_id,
                input.gene_id,
                input.target,
                input.target_effect,
                input.target_mode_of_action.as_str(),
                input.kit,
                input.physical_detection_method,
                input.detection_instrument,
                input.definition,
            ],
        )?;
        Ok(ToxAssay {
            id: conn.last_insert_rowid(),
            assay_type: input.assay_type.clone(),
            pair_id: input.pair_id,
            pubchem_aid: input.pubchem_aid,
            tox21_aid: input.tox21_aid,
            reporter_gene_assay: input.reporter_gene_assay.clone(),
            exp_cell_line_id: input.exp_cell_line_id,
            gene_id: input.gene_id,
            target: input.target.clone(),
            target_effect: input.target_effect.clone(),
            target_mode_of_action: input.target_mode_of_action,
            kit: input.kit.clone(),
            physical_detection_method: input.physical_detection_method.clone(),
            detection_instrument: input.detection_instrument.clone(),
            definition: input.definition.clone(),
        })
    }

    /// Insert a Tox21 molecule.
    ///
    /// # Errors
    /// Returns error if database insert fails.
    pub fn save_tox21_molecule(
        &self,
        input: &Tox21MoleculeInput,
    ) -> Result<Tox21Molecule, StorageError> {
        let tox21_sid = serde_json::to_string(&input.tox21_sid)?;
        let fingerprint = json_text(input.fingerprint.as_ref())?;
        let conn = get_conn(&self.pool)?;
        conn.execute(
            "INSERT INTO tox21_molecules (pubchem_aid, tox21_sid, smiles, fingerprint, cluster)
               VALUES (?1, ?2, ?3, ?4, ?5)",
            params![input.pubchem_aid, tox21_sid, input.smiles, fingerprint, input.cluster],
        )?;
        Ok(Tox21Molecule {
            id: conn.last_insert_rowid(),
            pubchem_aid: input.pubchem_aid,
            tox21_sid: input.tox21_sid.clone(),
            smiles: input.smiles.clone(),
            fingerprint: input.fingerprint.clone(),
            cluster: input.cluster,
        })
    }

    /// Record an activity result of a molecule in an assay.
    ///
    /// # Errors
    /// Returns `Constraint` if the molecule or assay does not exist.
    pub fn add_tox21_data(&self, input: &Tox21DataInput) -> Result<Tox21Data, StorageError> {
        let conn = get_conn(&self.pool)?;
        conn.execute(
            "INSERT INTO tox21_data (molecule_id, assay_id, activity, pac50_val, reference)
               VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                input.molecule_id,
                input.assay_id,
                input.activity.as_str(),
                input.pac50_val,
                input.reference
            ],
        )?;
        Ok(Tox21Data {
            id: conn.last_insert_rowid(),
            molecule_id: input.molecule_id,
            assay_id: input.assay_id,
            activity: input.activity,
            pac50_val: input.pac50_val,
            reference: input.reference.clone(),
        })
    }

    /// Activity results recorded for an assay.
    ///
    /// # Errors
    /// Returns error if database query fails.
    pub fn tox21_data_for_assay(&self, assay_id: i64) -> Result<Vec<Tox21Data>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let mut stmt = conn.prepare(
            "SELECT id, molecule_id, assay_id, activity, pac50_val, reference
               FROM tox21_data WHERE assay_id = ?1 ORDER BY id",
        )?;
        let rows = stmt.query_map(params![assay_id], row_to_tox21_data)?;
        collect_rows(rows)
    }
}
