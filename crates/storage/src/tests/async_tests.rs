#![expect(clippy::unwrap_used, reason = "test code")]

use super::{create_test_polymer, create_test_storage};
use crate::{NameStore, PolymerStore, Schema, SolventStore, StatsStore, StorageBackend};
use pinrex_core::{NameKind, SolventInput, make_name_record};

#[tokio::test]
async fn test_traits_reach_sqlite_store() {
    let (storage, _temp_dir) = create_test_storage();
    let pol_id = create_test_polymer(&storage, "PS");

    let record = NameStore::add_name(
        &storage,
        NameKind::Polymer,
        &make_name_record("Poly(styrene)", pol_id, Some("IUPAC")),
    )
    .await
    .unwrap();
    assert_eq!(record.search_name, "polystyrene");

    let found = NameStore::find_names(&storage, NameKind::Polymer, "POLY STYRENE").await.unwrap();
    assert_eq!(found, vec![record]);

    let polymers = PolymerStore::find_polymers_by_name(&storage, "polystyrene").await.unwrap();
    assert_eq!(polymers.len(), 1);
    assert_eq!(polymers[0].id, pol_id);
}

#[tokio::test]
async fn test_backend_dispatch() {
    let (storage, _temp_dir) = create_test_storage();
    let backend = StorageBackend::Sqlite(storage);
    assert_eq!(backend.kind(), "sqlite");
    assert_eq!(backend.schema_version().await.unwrap(), 4);

    let solvent = backend.save_solvent(&SolventInput::new("CS(C)=O").unwrap()).await.unwrap();
    let name = backend
        .add_name(NameKind::Solvent, &make_name_record("DMSO", solvent.id, None))
        .await
        .unwrap();
    backend.rename_name(NameKind::Solvent, name.id, "Dimethyl sulfoxide").await.unwrap();

    let found = backend.find_solvents_by_name("dimethylsulfoxide").await.unwrap();
    assert_eq!(found, vec![solvent]);
    assert!(backend.find_solvents_by_name("dmso").await.unwrap().is_empty());

    let stats = backend.get_stats().await.unwrap();
    assert_eq!(stats.solvent_count, 1);
    assert_eq!(stats.name_count, 1);
}

#[tokio::test]
async fn test_backend_teardown_and_setup() {
    let (storage, _temp_dir) = create_test_storage();
    let backend = StorageBackend::Sqlite(storage);
    let schema = Schema::current();

    backend.teardown(&schema).await.unwrap();
    assert_eq!(backend.schema_version().await.unwrap(), 0);
    backend.setup(&schema).await.unwrap();
    assert_eq!(backend.schema_version().await.unwrap(), 4);
    assert_eq!(backend.get_stats().await.unwrap().polymer_count, 0);
}
