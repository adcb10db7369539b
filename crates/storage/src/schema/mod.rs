//! Versioned schema definition.
//!
//! A [`Schema`] is built once at startup and handed to the setup and teardown
//! routines of each backend. Migrations are applied in order; each carries the
//! SQL for both dialects and the tables it creates.

mod v1;
mod v2;
mod v3;
mod v4;

/// One schema step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Migration {
    pub version: i32,
    pub description: &'static str,
    pub sqlite: &'static str,
    pub postgres: &'static str,
    /// Tables created by this step, in creation order.
    pub tables: &'static [&'static str],
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: 1,
        description: "structures, chemicals, polymers, monomers, solvents and names",
        sqlite: v1::SQLITE,
        postgres: v1::POSTGRES,
        tables: v1::TABLES,
    },
    Migration {
        version: 2,
        description: "reactions, reaction procedures and polymerizations",
        sqlite: v2::SQLITE,
        postgres: v2::POSTGRES,
        tables: v2::TABLES,
    },
    Migration {
        version: 3,
        description: "Tox21 toxicity data",
        sqlite: v3::SQLITE,
        postgres: v3::POSTGRES,
        tables: v3::TABLES,
    },
    Migration {
        version: 4,
        description: "CSST files, solubility data, lab materials, packaging waste",
        sqlite: v4::SQLITE,
        postgres: v4::POSTGRES,
        tables: v4::TABLES,
    },
];

/// Ordered list of migrations making up the catalog schema.
#[derive(Debug, Clone)]
pub struct Schema {
    migrations: Vec<Migration>,
}

impl Schema {
    /// The full catalog schema at its latest version.
    #[must_use]
    pub fn current() -> Self {
        Self { migrations: MIGRATIONS.to_vec() }
    }

    /// The catalog schema cut off at `version`.
    #[must_use]
    pub fn up_to(version: i32) -> Self {
        Self { migrations: MIGRATIONS.iter().filter(|m| m.version <= version).copied().collect() }
    }

    /// Target version, 0 for an empty schema.
    #[must_use]
    pub fn version(&self) -> i32 {
        self.migrations.last().map_or(0, |m| m.version)
    }

    #[must_use]
    pub fn migrations(&self) -> &[Migration] {
        &self.migrations
    }

    /// Migrations not yet applied to a store at `current_version`.
    pub fn pending(&self, current_version: i32) -> impl Iterator<Item = &Migration> {
        self.migrations.iter().filter(move |m| m.version > current_version)
    }

    /// Every table in creation order.
    pub fn tables(&self) -> impl DoubleEndedIterator<Item = &'static str> + '_ {
        self.migrations.iter().flat_map(|m| m.tables.iter().copied())
    }

    /// Every table in an order safe for dropping (dependents first).
    pub fn teardown_order(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.tables().rev()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn versions_are_strictly_increasing() {
        let schema = Schema::current();
        let versions: Vec<i32> = schema.migrations().iter().map(|m| m.version).collect();
        assert!(versions.windows(2).all(|w| w[0] < w[1]), "{versions:?}");
        assert_eq!(schema.version(), 4);
    }

    #[test]
    fn every_table_is_created_in_both_dialects() {
        for migration in Schema::current().migrations() {
            for table in migration.tables {
                let ddl = format!("CREATE TABLE IF NOT EXISTS {table} (");
                assert!(migration.sqlite.contains(&ddl), "sqlite v{} lacks {table}", migration.version);
                assert!(migration.postgres.contains(&ddl), "postgres v{} lacks {table}", migration.version);
            }
        }
    }

    #[test]
    fn pending_skips_applied_versions() {
        let schema = Schema::current();
        let pending: Vec<i32> = schema.pending(2).map(|m| m.version).collect();
        assert_eq!(pending, vec![3, 4]);
        assert_eq!(schema.pending(schema.version()).count(), 0);
    }

    #[test]
    fn teardown_drops_dependents_first() {
        let schema = Schema::current();
        let order: Vec<&str> = schema.teardown_order().collect();
        let pos = |t: &str| order.iter().position(|x| *x == t).unwrap();
        assert!(pos("polymer_names") < pos("polymers"));
        assert!(pos("tox21_data") < pos("tox_assays"));
        assert!(pos("solubility_data") < pos("csst_files"));
        assert_eq!(order.last(), Some(&"smarts"));
    }

    #[test]
    fn up_to_truncates() {
        let schema = Schema::up_to(1);
        assert_eq!(schema.version(), 1);
        assert!(schema.tables().all(|t| !t.starts_with("tox")));
    }
}
