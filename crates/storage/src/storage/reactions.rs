use pinrex_core::{
    Polymerization, PolymerizationReaction, PolymerizationReactionInput, Reaction, ReactionInput,
    ReactionPolymerMapping, ReactionProcedure, ReactionStep,
};
use rusqlite::{OptionalExtension, params};

use super::{Storage, collect_rows, get_conn};
use crate::error::StorageError;

impl Storage {
    /// Insert a reaction.
    ///
    /// # Errors
    /// Returns error if database insert fails.
    pub fn save_reaction(&self, input: &ReactionInput) -> Result<Reaction, StorageError> {
        let conn = get_conn(&self.pool)?;
        conn.execute(
            "INSERT INTO reactions (smarts, description, reference) VALUES (?1, ?2, ?3)",
            params![input.smarts, input.description, input.reference],
        )?;
        Ok(Reaction {
            id: conn.last_insert_rowid(),
            smarts: input.smarts.clone(),
            description: input.description.clone(),
            reference: input.reference.clone(),
        })
    }

    /// Insert a named reaction procedure.
    ///
    /// # Errors
    /// Returns `Duplicate` if the name is taken.
    pub fn save_reaction_procedure(
        &self,
        name: &str,
        description: Option<&str>,
    ) -> Result<ReactionProcedure, StorageError> {
        let conn = get_conn(&self.pool)?;
        conn.execute(
            "INSERT INTO reaction_procedures (name, description) VALUES (?1, ?2)",
            params![name, description],
        )?;
        Ok(ReactionProcedure {
            id: conn.last_insert_rowid(),
            name: name.to_owned(),
            description: description.map(ToOwned::to_owned),
        })
    }

    /// Get reaction procedure by name.
    ///
    /// # Errors
    /// Returns error if database query fails.
    pub fn get_reaction_procedure(
        &self,
        name: &str,
    ) -> Result<Option<ReactionProcedure>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let procedure = conn
            .query_row(
                "SELECT id, name, description FROM reaction_procedures WHERE name = ?1",
                params![name],
                |row| {
                    Ok(ReactionProcedure {
                        id: row.get(0)?,
                        name: row.get(1)?,
                        description: row.get(2)?,
                    })
                },
            )
            .optional()?;
        Ok(procedure)
    }

    /// Attach a reaction to a procedure at a step position.
    ///
    /// # Errors
    /// Returns `Constraint` if the reaction or procedure does not exist.
    pub fn add_reaction_step(&self, step: ReactionStep) -> Result<(), StorageError> {
        let conn = get_conn(&self.pool)?;
        conn.execute(
            "INSERT INTO reaction_steps (reaction_id, reaction_procedure_id, step) VALUES (?1, ?2, ?3)",
            params![step.reaction_id, step.reaction_procedure_id, step.step],
        )?;
        Ok(())
    }

    /// Steps of a procedure ordered by position.
    ///
    /// # Errors
    /// Returns error if database query fails.
    pub fn procedure_steps(&self, procedure_id: i64) -> Result<Vec<ReactionStep>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let mut stmt = conn.prepare(
            "SELECT reaction_id, reaction_procedure_id, step FROM reaction_steps
              WHERE reaction_procedure_id = ?1 ORDER BY step, reaction_id",
        )?;
        let rows = stmt.query_map(params![procedure_id], |row| {
            Ok(ReactionStep {
                reaction_id: row.get(0)?,
                reaction_procedure_id: row.get(1)?,
                step: row.get(2)?,
            })
        })?;
        collect_rows(rows)
    }

    /// Record the substructure a procedure starts from.
    ///
    /// # Errors
    /// Returns `Duplicate` if already recorded.
    pub fn add_starting_substructure(
        &self,
        procedure_id: i64,
        smarts_id: i64,
    ) -> Result<(), StorageError> {
        let conn = get_conn(&self.pool)?;
        conn.execute(
            "INSERT INTO reaction_procedure_starting_substructure (reaction_procedure_id, smarts_id)
               VALUES (?1, ?2)",
            params![procedure_id, smarts_id],
        )?;
        Ok(())
    }

    /// Record that a procedure turns a chemical into a polymer.
    ///
    /// # Errors
    /// Returns `Duplicate` if already recorded.
    pub fn add_reaction_polymer_mapping(
        &self,
        mapping: ReactionPolymerMapping,
    ) -> Result<(), StorageError> {
        let conn = get_conn(&self.pool)?;
        conn.execute(
            "INSERT INTO reaction_polymer_mappings (reaction_procedure_id, chemical_id, pol_id)
               VALUES (?1, ?2, ?3)",
            params![mapping.reaction_procedure_id, mapping.chemical_id, mapping.pol_id],
        )?;
        Ok(())
    }

    /// Insert a polymerization reaction.
    ///
    /// # Errors
    /// Returns error if database insert fails.
    pub fn save_polymerization_reaction(
        &self,
        input: &PolymerizationReactionInput,
    ) -> Result<PolymerizationReaction, StorageError> {
        let conn = get_conn(&self.pool)?;
        conn.execute(
            "INSERT INTO polymerization_reactions (name, smarts, description, reference)
               VALUES (?1, ?2, ?3, ?4)",
            params![input.name, input.smarts, input.description, input.reference],
        )?;
        Ok(PolymerizationReaction {
            id: conn.last_insert_rowid(),
            name: input.name.clone(),
            smarts: input.smarts.clone(),
            description: input.description.clone(),
            reference: input.reference.clone(),
        })
    }

    /// Record that a monomer polymerizes to a polymer through a reaction.
    ///
    /// # Errors
    /// Returns `Duplicate` if the (reaction, monomer) pair already has a product.
    pub fn add_polymerization(&self, polymerization: Polymerization) -> Result<(), StorageError> {
        let conn = get_conn(&self.pool)?;
        conn.execute(
            "INSERT INTO polymerizations (polymerization_reaction_id, monomer_id, pol_id)
               VALUES (?1, ?2, ?3)",
            params![
                polymerization.polymerization_reaction_id,
                polymerization.monomer_id,
                polymerization.pol_id
            ],
        )?;
        Ok(())
    }

    /// Polymerizations producing a polymer.
    ///
    /// # Errors
    /// Returns error if database query fails.
    pub fn polymerizations_for_polymer(
        &self,
        pol_id: i64,
    ) -> Result<Vec<Polymerization>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let mut stmt = conn.prepare(
            "SELECT polymerization_reaction_id, monomer_id, pol_id FROM polymerizations
              WHERE pol_id = ?1 ORDER BY polymerization_reaction_id, monomer_id",
        )?;
        let rows = stmt.query_map(params![pol_id], |row| {
            Ok(Polymerization {
                polymerization_reaction_id: row.get(0)?,
                monomer_id: row.get(1)?,
                pol_id: row.get(2)?,
            })
        })?;
        collect_rows(rows)
    }
}
