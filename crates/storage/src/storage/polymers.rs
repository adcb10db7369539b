use pinrex_core::{
    Polymer, PolymerApplication, PolymerApplicationInput, PolymerInput, PolymerProperty,
    PolymerPropertyInput, Property, PropertyErrorType, PropertyInput, make_name_searchable,
};
use rusqlite::{OptionalExtension, params};

use super::{Storage, collect_rows, get_conn, json_text, parse_json_opt, parse_tag};
use crate::error::StorageError;

const POLYMER_COLUMNS: &str = "p.id, p.pid, p.rid, p.smiles, p.canonical_smiles, p.fingerprint, p.category";

fn row_to_polymer(row: &rusqlite::Row<'_>) -> rusqlite::Result<Polymer> {
    Ok(Polymer {
        id: row.get(0)?,
        pid: row.get(1)?,
        rid: row.get(2)?,
        smiles: row.get(3)?,
        canonical_smiles: row.get(4)?,
        fingerprint: parse_json_opt(row.get(5)?)?,
        category: row.get(6)?,
    })
}

fn row_to_polymer_property(row: &rusqlite::Row<'_>) -> rusqlite::Result<PolymerProperty> {
    let error_type: Option<String> = row.get(8)?;
    Ok(PolymerProperty {
        id: row.get(0)?,
        pol_id: row.get(1)?,
        property_id: row.get(2)?,
        value: row.get(3)?,
        method: row.get(4)?,
        reference: row.get(5)?,
        note: row.get(6)?,
        error_value: row.get(7)?,
        error_type: error_type.as_deref().map(parse_tag::<PropertyErrorType>).transpose()?,
        conditions: parse_json_opt(row.get(9)?)?,
    })
}

fn row_to_application(row: &rusqlite::Row<'_>) -> rusqlite::Result<PolymerApplication> {
    Ok(PolymerApplication {
        id: row.get(0)?,
        pol_id: row.get(1)?,
        application: row.get(2)?,
        category: row.get(3)?,
        note: row.get(4)?,
        reference: row.get(5)?,
    })
}

impl Storage {
    /// Insert a polymer.
    ///
    /// # Errors
    /// Returns `Duplicate` if the SMILES or registry id is already stored.
    pub fn save_polymer(&self, input: &PolymerInput) -> Result<Polymer, StorageError> {
        let fingerprint = json_text(input.fingerprint.as_ref())?;
        let conn = get_conn(&self.pool)?;
        conn.execute(
            "INSERT INTO polymers (pid, rid, smiles, canonical_smiles, fingerprint, category)
               VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                input.pid,
                input.rid,
                input.smiles,
                input.canonical_smiles,
                fingerprint,
                input.category
            ],
        )?;
        let id = conn.last_insert_rowid();
        tracing::debug!(id, rid = ?input.rid, "polymer saved");
        Ok(Polymer {
            id,
            pid: input.pid.clone(),
            rid: input.rid.clone(),
            smiles: input.smiles.clone(),
            canonical_smiles: input.canonical_smiles.clone(),
            fingerprint: input.fingerprint.clone(),
            category: input.category.clone(),
        })
    }

    /// Get polymer by id.
    ///
    /// # Errors
    /// Returns error if database query fails.
    pub fn get_polymer(&self, id: i64) -> Result<Option<Polymer>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let polymer = conn
            .query_row(
                &format!("SELECT {POLYMER_COLUMNS} FROM polymers p WHERE p.id = ?1"),
                params![id],
                row_to_polymer,
            )
            .optional()?;
        Ok(polymer)
    }

    /// Get polymer by registry id.
    ///
    /// # Errors
    /// Returns error if database query fails.
    pub fn get_polymer_by_rid(&self, rid: &str) -> Result<Option<Polymer>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let polymer = conn
            .query_row(
                &format!("SELECT {POLYMER_COLUMNS} FROM polymers p WHERE p.rid = ?1"),
                params![rid],
                row_to_polymer,
            )
            .optional()?;
        Ok(polymer)
    }

    /// Polymers having a name that normalizes like `query`.
    ///
    /// # Errors
    /// Returns error if database query fails.
    pub fn find_polymers_by_name(&self, query: &str) -> Result<Vec<Polymer>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let mut stmt = conn.prepare(&format!(
            "SELECT DISTINCT {POLYMER_COLUMNS}
               FROM polymers p JOIN polymer_names n ON n.pol_id = p.id
              WHERE n.search_name = ?1 ORDER BY p.id"
        ))?;
        let rows = stmt.query_map(params![make_name_searchable(query)], row_to_polymer)?;
        collect_rows(rows)
    }

    /// Insert a property definition.
    ///
    /// # Errors
    /// Returns error if database insert fails.
    pub fn save_property(&self, input: &PropertyInput) -> Result<Property, StorageError> {
        let conn = get_conn(&self.pool)?;
        conn.execute(
            "INSERT INTO properties (name, short_name, unit, plot_symbol) VALUES (?1, ?2, ?3, ?4)",
            params![input.name, input.short_name, input.unit, input.plot_symbol],
        )?;
        Ok(Property {
            id: conn.last_insert_rowid(),
            name: input.name.clone(),
            short_name: input.short_name.clone(),
            unit: input.unit.clone(),
            plot_symbol: input.plot_symbol.clone(),
        })
    }

    /// Record a measured property value for a polymer.
    ///
    /// # Errors
    /// Returns `Constraint` if the polymer or property does not exist.
    pub fn add_polymer_property(
        &self,
        input: &PolymerPropertyInput,
    ) -> Result<PolymerProperty, StorageError> {
        let conditions = json_text(input.conditions.as_ref())?;
        let conn = get_conn(&self.pool)?;
        conn.execute(
            "INSERT INTO polymer_properties
               (pol_id, property_id, value, method, reference, note, error_value, error_type, conditions)
               VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            params![
                input.pol_id,
                input.property_id,
                input.value,
                input.method,
                input.reference,
                input.note,
                input.error_value,
                input.error_type.map(|t| t.as_str()),
                conditions,
            ],
        )?;
        Ok(PolymerProperty {
            id: conn.last_insert_rowid(),
            pol_id: input.pol_id,
            property_id: input.property_id,
            value: input.value,
            method: input.method.clone(),
            reference: input.reference.clone(),
            note: input.note.clone(),
            error_value: input.error_value,
            error_type: input.error_type,
            conditions: input.conditions.clone(),
        })
    }

    /// Property values recorded for a polymer.
    ///
    /// # Errors
    /// Returns error if database query fails.
    pub fn polymer_properties(&self, pol_id: i64) -> Result<Vec<PolymerProperty>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let mut stmt = conn.prepare(
            "SELECT id, pol_id, property_id, value, method, reference, note, error_value, error_type, conditions
               FROM polymer_properties WHERE pol_id = ?1 ORDER BY id",
        )?;
        let rows = stmt.query_map(params![pol_id], row_to_polymer_property)?;
        collect_rows(rows)
    }

    /// Record an application of a polymer.
    ///
    /// # Errors
    /// Returns `Constraint` if the polymer does not exist.
    pub fn add_polymer_application(
        &self,
        input: &PolymerApplicationInput,
    ) -> Result<PolymerApplication, StorageError> {
        let conn = get_conn(&self.pool)?;
        conn.execute(
            "INSERT INTO polymer_applications (pol_id, application, category, note, reference)
               VALUES (?1, ?2, ?3, ?4, ?5)",
            params![input.pol_id, input.application, input.category, input.note, input.reference],
        )?;
        Ok(PolymerApplication {
            id: conn.last_insert_rowid(),
            pol_id: input.pol_id,
            application: input.application.clone(),
            category: input.category.clone(),
            note: input.note.clone(),
            reference: input.reference.clone(),
        })
    }

    /// Applications recorded for a polymer.
    ///
    /// # Errors
    /// Returns error if database query fails.
    pub fn polymer_applications(
        &self,
        pol_id: i64,
    ) -> Result<Vec<PolymerApplication>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let mut stmt = conn.prepare(
            "SELECT id, pol_id, application, category, note, reference
               FROM polymer_applications WHERE pol_id = ?1 ORDER BY id",
        )?;
        let rows = stmt.query_map(params![pol_id], row_to_application)?;
        collect_rows(rows)
    }
}
