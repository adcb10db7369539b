//! PostgreSQL storage backend using sqlx.
//!
//! Split into modular files by catalog area. Inserts use `RETURNING` with the
//! same column lists as the reads, so every row goes through one `row_to_*`.

mod chemicals;
mod lab;
mod monomers;
mod names;
mod polymers;
mod reactions;
mod solvents;
mod stats;
mod toxicity;

use std::time::Duration;

use pinrex_core::{
    Chemical, ChemicalCost, CsstFile, Monomer, NameKind, NameRecord, PG_POOL_ACQUIRE_TIMEOUT_SECS,
    PG_POOL_IDLE_TIMEOUT_SECS, PG_POOL_MAX_CONNECTIONS, Polymer, PolymerProperty, Smarts,
    SolubilityData, Solvent, Tox21Data, Tox21Molecule, ToxAssay,
};
use serde::de::DeserializeOwned;
use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{PgPool, Row};

use crate::error::StorageError;
use crate::pg_migrations::{pg_schema_version, run_pg_migrations, teardown_pg};
use crate::schema::Schema;

#[derive(Clone, Debug)]
pub struct PgStorage {
    pool: PgPool,
}

impl PgStorage {
    /// Connect and bring the database to the current schema.
    ///
    /// # Errors
    /// Returns error if the connection or a migration fails.
    pub async fn new(database_url: &str) -> Result<Self, StorageError> {
        Self::open(database_url, &Schema::current()).await
    }

    /// Connect and bring the database to `schema`.
    ///
    /// # Errors
    /// Returns error if the connection or a migration fails.
    pub async fn open(database_url: &str, schema: &Schema) -> Result<Self, StorageError> {
        let pool = PgPoolOptions::new()
            .max_connections(PG_POOL_MAX_CONNECTIONS)
            .acquire_timeout(Duration::from_secs(PG_POOL_ACQUIRE_TIMEOUT_SECS))
            .idle_timeout(Duration::from_secs(PG_POOL_IDLE_TIMEOUT_SECS))
            .test_before_acquire(true)
            .connect(database_url)
            .await?;
        run_pg_migrations(&pool, schema)
            .await
            .map_err(|e| StorageError::Migration(e.to_string()))?;
        tracing::info!("PgStorage initialized");
        Ok(Self { pool })
    }

    /// Highest applied schema version.
    ///
    /// # Errors
    /// Returns error if the version table cannot be read.
    pub async fn schema_version(&self) -> Result<i32, StorageError> {
        pg_schema_version(&self.pool).await
    }

    /// Bring the database up to `schema`.
    ///
    /// # Errors
    /// Returns error if a migration fails.
    pub async fn setup(&self, schema: &Schema) -> Result<(), StorageError> {
        run_pg_migrations(&self.pool, schema)
            .await
            .map_err(|e| StorageError::Migration(e.to_string()))
    }

    /// Drop every table of `schema`.
    ///
    /// # Errors
    /// Returns error if a table cannot be dropped.
    pub async fn teardown(&self, schema: &Schema) -> Result<(), StorageError> {
        teardown_pg(&self.pool, schema).await.map_err(|e| StorageError::Migration(e.to_string()))
    }
}

pub(crate) fn parse_json_column<T: DeserializeOwned>(
    column: &str,
    val: serde_json::Value,
) -> Result<T, StorageError> {
    serde_json::from_value(val).map_err(|e| StorageError::corrupt(format!("JSON column {column}"), e))
}

pub(crate) fn parse_pg_tag<T>(column: &str, s: &str) -> Result<T, StorageError>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    s.parse().map_err(|e| {
        tracing::warn!(column, value = %s, "corrupt enum tag in DB");
        StorageError::corrupt(format!("enum column {column}"), e)
    })
}

pub(crate) fn name_columns(kind: NameKind) -> String {
    format!(
        "id, {} AS owner_id, name, search_name, naming_convention, notes",
        kind.owner_column()
    )
}

pub(crate) fn row_to_name(kind: NameKind, row: &PgRow) -> Result<NameRecord, StorageError> {
    Ok(NameRecord {
        id: row.try_get("id")?,
        kind,
        owner_id: row.try_get("owner_id")?,
        name: row.try_get("name")?,
        search_name: row.try_get("search_name")?,
        naming_convention: row.try_get("naming_convention")?,
        notes: row.try_get("notes")?,
    })
}

pub(crate) const CHEMICAL_COLUMNS: &str = "id, smiles, cas";

pub(crate) fn row_to_chemical(row: &PgRow) -> Result<Chemical, StorageError> {
    Ok(Chemical { id: row.try_get("id")?, smiles: row.try_get("smiles")?, cas: row.try_get("cas")? })
}

pub(crate) const COST_COLUMNS: &str = "id, chemical_id, supplier_id, cost, cost_unit, amount, \
     amount_unit, usd_cost_per_gram, datetime, note";

pub(crate) fn row_to_cost(row: &PgRow) -> Result<ChemicalCost, StorageError> {
    Ok(ChemicalCost {
        id: row.try_get("id")?,
        chemical_id: row.try_get("chemical_id")?,
        supplier_id: row.try_get("supplier_id")?,
        cost: row.try_get("cost")?,
        cost_unit: row.try_get("cost_unit")?,
        amount: row.try_get("amount")?,
        amount_unit: row.try_get("amount_unit")?,
        usd_cost_per_gram: row.try_get("usd_cost_per_gram")?,
        datetime: row.try_get("datetime")?,
        note: row.try_get("note")?,
    })
}

pub(crate) const SMARTS_COLUMNS: &str = "id, name, smarts, description, reference";

pub(crate) fn row_to_smarts(row: &PgRow) -> Result<Smarts, StorageError> {
    Ok(Smarts {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        smarts: row.try_get("smarts")?,
        description: row.try_get("description")?,
        reference: row.try_get("reference")?,
    })
}

pub(crate) const POLYMER_COLUMNS: &str =
    "id, pid, rid, smiles, canonical_smiles, fingerprint, category";

pub(crate) fn row_to_polymer(row: &PgRow) -> Result<Polymer, StorageError> {
    Ok(Polymer {
        id: row.try_get("id")?,
        pid: row.try_get("pid")?,
        rid: row.try_get("rid")?,
        smiles: row.try_get("smiles")?,
        canonical_smiles: row.try_get("canonical_smiles")?,
        fingerprint: row.try_get("fingerprint")?,
        category: row.try_get("category")?,
    })
}

pub(crate) const POLYMER_PROPERTY_COLUMNS: &str = "id, pol_id, property_id, value, method, \
     reference, note, error_value, error_type, conditions";

pub(crate) fn row_to_polymer_property(row: &PgRow) -> Result<PolymerProperty, StorageError> {
    let error_type: Option<String> = row.try_get("error_type")?;
    Ok(PolymerProperty {
        id: row.try_get("id")?,
        pol_id: row.try_get("pol_id")?,
        property_id: row.try_get("property_id")?,
        value: row.try_get("value")?,
        method: row.try_get("method")?,
        reference: row.try_get("reference")?,
        note: row.try_get("note")?,
        error_value: row.try_get("error_value")?,
        error_type: error_type.as_deref().map(|s| parse_pg_tag("error_type", s)).transpose()?,
        conditions: row.try_get("conditions")?,
    })
}

pub(crate) const MONOMER_COLUMNS: &str = "id, smiles, reference_id, reference";

pub(crate) fn row_to_monomer(row: &PgRow) -> Result<Monomer, StorageError> {
    Ok(Monomer {
        id: row.try_get("id")?,
        smiles: row.try_get("smiles")?,
        reference_id: row.try_get("reference_id")?,
        reference: row.try_get("reference")?,
    })
}

pub(crate) const SOLVENT_COLUMNS: &str = "id, smiles, fingerprint, map4_fingerprint";

pub(crate) fn row_to_solvent(row: &PgRow) -> Result<Solvent, StorageError> {
    Ok(Solvent {
        id: row.try_get("id")?,
        smiles: row.try_get("smiles")?,
        fingerprint: row.try_get("fingerprint")?,
        map4_fingerprint: row.try_get("map4_fingerprint")?,
    })
}

pub(crate) const SOLUBILITY_COLUMNS: &str = "id, reference, date_added, pol_id, sol_id, \
     solubility, date_of_test, temp_min, temp_max, pdi_min, pdi_max, pol_mw_min, pol_mw_max, \
     pol_mw_type, conc_mg_per_ml, csst_file_id";

pub(crate) fn row_to_solubility(row: &PgRow) -> Result<SolubilityData, StorageError> {
    Ok(SolubilityData {
        id: row.try_get("id")?,
        reference: row.try_get("reference")?,
        date_added: row.try_get("date_added")?,
        pol_id: row.try_get("pol_id")?,
        sol_id: row.try_get("sol_id")?,
        solubility: row.try_get("solubility")?,
        date_of_test: row.try_get("date_of_test")?,
        temp_min: row.try_get("temp_min")?,
        temp_max: row.try_get("temp_max")?,
        pdi_min: row.try_get("pdi_min")?,
        pdi_max: row.try_get("pdi_max")?,
        pol_mw_min: row.try_get("pol_mw_min")?,
        pol_mw_max: row.try_get("pol_mw_max")?,
        pol_mw_type: row.try_get("pol_mw_type")?,
        conc_mg_per_ml: row.try_get("conc_mg_per_ml")?,
        csst_file_id: row.try_get("csst_file_id")?,
    })
}

pub(crate) const TOX_ASSAY_COLUMNS: &str = "id, assay_type, pair_id, pubchem_aid, tox21_aid, \
     reporter_gene_assay, exp_cell_line_id, gene_id, target, target_effect, target_mode_of_action, \
     kit, physical_detection_method, detection_instrument, definition";

pub(crate) fn row_to_tox_assay(row: &PgRow) -> Result<ToxAssay, StorageError> {
    let mode: String = row.try_get("target_mode_of_action")?;
    Ok(ToxAssay {
        id: row.try_get("id")?,
        assay_type: row.try_get("assay_type")?,
        pair_id: row.try_get("pair_id")?,
        pubchem_aid: row.try_get("pubchem_aid")?,
        tox21_aid: row.try_get("tox21_aid")?,
        reporter_gene_assay: row.try_get("reporter_gene_assay")?,
        exp_cell_line_id: row.try_get("exp_cell_line_id")?,
        gene_id: row.try_get("gene_id")?,
        target: row.try_get("target")?,
        target_effect: row.try_get("target_effect")?,
        target_mode_of_action: parse_pg_tag("target_mode_of_action", &mode)?,
        kit: row.try_get("kit")?,
        physical_detection_method: row.try_get("physical_detection_method")?,
        detection_instrument: row.try_get("detection_instrument")?,
        definition: row.try_get("definition")?,
    })
}

pub(crate) const TOX21_MOLECULE_COLUMNS: &str =
    "id, pubchem_aid, tox21_sid, smiles, fingerprint, cluster";

pub(crate) fn row_to_tox21_molecule(row: &PgRow) -> Result<Tox21Molecule, StorageError> {
    Ok(Tox21Molecule {
        id: row.try_get("id")?,
        pubchem_aid: row.try_get("pubchem_aid")?,
        tox21_sid: parse_json_column("tox21_sid", row.try_get("tox21_sid")?)?,
        smiles: row.try_get("smiles")?,
        fingerprint: row.try_get("fingerprint")?,
        cluster: row.try_get("cluster")?,
    })
}

pub(crate) const TOX21_DATA_COLUMNS: &str =
    "id, molecule_id, assay_id, activity, pac50_val, reference";

pub(crate) fn row_to_tox21_data(row: &PgRow) -> Result<Tox21Data, StorageError> {
    let activity: String = row.try_get("activity")?;
    Ok(Tox21Data {
        id: row.try_get("id")?,
        molecule_id: row.try_get("molecule_id")?,
        assay_id: row.try_get("assay_id")?,
        activity: parse_pg_tag("activity", &activity)?,
        pac50_val: row.try_get("pac50_val")?,
        reference: row.try_get("reference")?,
    })
}

pub(crate) const CSST_FILE_COLUMNS: &str = "id, file_name, original_name, polymers, solvents, \
     concentrations, date_added, stir_rate, start_of_experiment, version, project";

pub(crate) fn row_to_csst_file(row: &PgRow) -> Result<CsstFile, StorageError> {
    Ok(CsstFile {
        id: row.try_get("id")?,
        file_name: row.try_get("file_name")?,
        original_name: row.try_get("original_name")?,
        polymers: parse_json_column("polymers", row.try_get("polymers")?)?,
        solvents: parse_json_column("solvents", row.try_get("solvents")?)?,
        concentrations: parse_json_column("concentrations", row.try_get("concentrations")?)?,
        date_added: row.try_get("date_added")?,
        stir_rate: row.try_get("stir_rate")?,
        start_of_experiment: row.try_get("start_of_experiment")?,
        version: row.try_get("version")?,
        project: row.try_get("project")?,
    })
}

/// Convert a `COUNT(*)` result, clamping negatives to zero.
pub(crate) fn count_to_u64(count: i64) -> u64 {
    u64::try_from(count).unwrap_or(0)
}
