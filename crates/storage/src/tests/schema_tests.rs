#![expect(clippy::unwrap_used, reason = "test code")]

use super::{create_test_polymer, create_test_storage};
use crate::storage::get_conn;
use crate::{CatalogStats, Schema, Storage};
use pinrex_core::{NameKind, make_name_record};
use tempfile::TempDir;

fn table_exists(storage: &Storage, table: &str) -> bool {
    let conn = get_conn(&storage.pool).unwrap();
    conn.query_row(
        "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
        [table],
        |row| row.get::<_, i64>(0),
    )
    .unwrap()
        > 0
}

#[test]
fn test_new_store_is_at_current_version() {
    let (storage, _temp_dir) = create_test_storage();
    assert_eq!(storage.schema_version().unwrap(), Schema::current().version());
    assert_eq!(Schema::current().version(), 4);
    for table in Schema::current().tables() {
        assert!(table_exists(&storage, table), "missing table {table}");
    }
}

#[test]
fn test_partial_schema_then_upgrade() {
    let temp_dir = TempDir::new().unwrap();
    let storage = Storage::open(&temp_dir.path().join("partial.db"), &Schema::up_to(1)).unwrap();

    assert_eq!(storage.schema_version().unwrap(), 1);
    assert!(table_exists(&storage, "polymer_names"));
    assert!(!table_exists(&storage, "reaction_procedures"));

    storage.setup(&Schema::current()).unwrap();
    assert_eq!(storage.schema_version().unwrap(), 4);
    assert!(table_exists(&storage, "brettmann_lab"));
}

#[test]
fn test_setup_is_idempotent() {
    let (storage, _temp_dir) = create_test_storage();
    create_test_polymer(&storage, "PS");
    storage.setup(&Schema::current()).unwrap();
    assert_eq!(storage.get_stats().unwrap().polymer_count, 1);
}

#[test]
fn test_teardown_then_setup_leaves_empty_store() {
    let (storage, _temp_dir) = create_test_storage();
    let pol_id = create_test_polymer(&storage, "PE");
    storage.add_name(NameKind::Polymer, &make_name_record("polyethylene", pol_id, None)).unwrap();

    let schema = Schema::current();
    storage.teardown(&schema).unwrap();
    assert_eq!(storage.schema_version().unwrap(), 0);
    for table in schema.tables() {
        assert!(!table_exists(&storage, table), "table {table} survived teardown");
    }

    storage.setup(&schema).unwrap();
    assert_eq!(storage.get_stats().unwrap(), CatalogStats::default());

    let pol_id = create_test_polymer(&storage, "PE");
    let found = storage.find_names(NameKind::Polymer, "polyethylene").unwrap();
    assert!(found.is_empty());
    storage.add_name(NameKind::Polymer, &make_name_record("Poly(ethylene)", pol_id, None)).unwrap();
    assert_eq!(storage.find_polymers_by_name("polyethylene").unwrap().len(), 1);
}

#[test]
fn test_stats_count_names_across_kinds() {
    let (storage, _temp_dir) = create_test_storage();
    let pol_id = create_test_polymer(&storage, "PMMA");
    let sol_id = super::create_test_solvent(&storage, "CO");
    storage.add_name(NameKind::Polymer, &make_name_record("PMMA", pol_id, None)).unwrap();
    storage.add_name(NameKind::Polymer, &make_name_record("acrylic glass", pol_id, None)).unwrap();
    storage.add_name(NameKind::Solvent, &make_name_record("methanol", sol_id, None)).unwrap();

    let stats = storage.get_stats().unwrap();
    assert_eq!(stats.polymer_count, 1);
    assert_eq!(stats.solvent_count, 1);
    assert_eq!(stats.name_count, 3);
    assert_eq!(stats.chemical_count, 0);
}
