#![expect(clippy::unwrap_used, reason = "test code")]

use super::{create_test_chemical, create_test_polymer, create_test_solvent, create_test_storage};
use pinrex_core::{NameKind, make_name_record, normalize};

const LITERAL_NAMES: &[(&str, &str)] = &[
    ("colon:remove", "colonremove"),
    ("Upper_Case", "upper_case"),
    ("{bracket}", "bracket"),
    ("space exists", "spaceexists"),
    ("(parenthesis)", "parenthesis"),
    ("[brackets]", "brackets"),
    ("comma,", "comma"),
    ("dash-", "dash"),
    ("'single quote", "singlequote"),
    ("\"doublequote\"", "doublequote"),
    ("Ma{n}y_di[]fferent -'iss:\"(u)e-s", "many_differentissues"),
];

#[test]
fn test_polymer_names_store_search_key() {
    let (storage, _temp_dir) = create_test_storage();
    let pol_id = create_test_polymer(&storage, "P-1");

    for (raw, expected) in LITERAL_NAMES {
        let record = storage
            .add_name(NameKind::Polymer, &make_name_record(*raw, pol_id, Some("common")))
            .unwrap();
        let stored = storage.get_name(NameKind::Polymer, record.id).unwrap().unwrap();
        assert_eq!(stored.name, *raw);
        assert_eq!(stored.search_name, *expected, "raw: {raw:?}");
        assert_eq!(stored.owner_id, pol_id);
    }
    assert_eq!(storage.names_for_owner(NameKind::Polymer, pol_id).unwrap().len(), LITERAL_NAMES.len());
}

#[test]
fn test_solvent_names_store_search_key() {
    let (storage, _temp_dir) = create_test_storage();
    let sol_id = create_test_solvent(&storage, "CO");

    for (raw, expected) in LITERAL_NAMES {
        let record =
            storage.add_name(NameKind::Solvent, &make_name_record(*raw, sol_id, None)).unwrap();
        assert_eq!(record.search_name, *expected);
        let found = storage.find_names(NameKind::Solvent, raw).unwrap();
        assert!(found.iter().any(|n| n.id == record.id), "lookup by {raw:?} failed");
    }
}

#[test]
fn test_methanol_found_by_any_spelling() {
    let (storage, _temp_dir) = create_test_storage();
    let sol_id = create_test_solvent(&storage, "CO");
    let record = storage
        .add_name(NameKind::Solvent, &make_name_record("Methanol (HPLC grade)", sol_id, Some("common")))
        .unwrap();
    assert_eq!(record.search_name, normalize("Methanol (HPLC grade)"));

    for query in ["methanol (hplc grade)", "METHANOL(HPLC GRADE)", "methanol hplc grade"] {
        let found = storage.find_names(NameKind::Solvent, query).unwrap();
        assert_eq!(found.len(), 1, "query {query:?}");
        assert_eq!(found[0].id, record.id);

        let solvents = storage.find_solvents_by_name(query).unwrap();
        assert_eq!(solvents.len(), 1);
        assert_eq!(solvents[0].id, sol_id);
    }
}

#[test]
fn test_find_names_is_scoped_by_kind() {
    let (storage, _temp_dir) = create_test_storage();
    let chem_id = create_test_chemical(&storage, "CCO");
    let sol_id = create_test_solvent(&storage, "CCO");
    storage.add_name(NameKind::Chemical, &make_name_record("Ethanol", chem_id, None)).unwrap();
    storage.add_name(NameKind::Solvent, &make_name_record("ethanol", sol_id, None)).unwrap();

    let chemicals = storage.find_names(NameKind::Chemical, "ETHANOL").unwrap();
    assert_eq!(chemicals.len(), 1);
    assert_eq!(chemicals[0].kind, NameKind::Chemical);
    assert_eq!(chemicals[0].owner_id, chem_id);
    assert_eq!(storage.find_chemicals_by_name("e t h a n o l").unwrap()[0].id, chem_id);
    assert!(storage.find_names(NameKind::Polymer, "ethanol").unwrap().is_empty());
}

#[test]
fn test_rename_recomputes_search_key() {
    let (storage, _temp_dir) = create_test_storage();
    let sol_id = create_test_solvent(&storage, "CC(C)=O");
    let record =
        storage.add_name(NameKind::Solvent, &make_name_record("Acetone", sol_id, None)).unwrap();

    let renamed = storage.rename_name(NameKind::Solvent, record.id, "Propan-2-one").unwrap();
    assert_eq!(renamed.name, "Propan-2-one");
    assert_eq!(renamed.search_name, "propan2one");
    assert!(storage.find_names(NameKind::Solvent, "acetone").unwrap().is_empty());
    assert_eq!(storage.find_names(NameKind::Solvent, "PROPAN 2 ONE").unwrap().len(), 1);
}

#[test]
fn test_rename_missing_name_is_not_found() {
    let (storage, _temp_dir) = create_test_storage();
    let err = storage.rename_name(NameKind::Chemical, 404, "anything").unwrap_err();
    assert!(err.is_not_found(), "{err:?}");
}

#[test]
fn test_name_without_owner_is_rejected() {
    let (storage, _temp_dir) = create_test_storage();
    let err = storage
        .add_name(NameKind::Polymer, &make_name_record("orphan", 9_999, None))
        .unwrap_err();
    assert!(err.is_constraint(), "{err:?}");
}

#[test]
fn test_delete_name() {
    let (storage, _temp_dir) = create_test_storage();
    let chem_id = create_test_chemical(&storage, "O");
    let record =
        storage.add_name(NameKind::Chemical, &make_name_record("Water", chem_id, None)).unwrap();

    assert!(storage.delete_name(NameKind::Chemical, record.id).unwrap());
    assert!(!storage.delete_name(NameKind::Chemical, record.id).unwrap());
    assert!(storage.get_name(NameKind::Chemical, record.id).unwrap().is_none());
}

#[test]
fn test_naming_convention_and_notes_round_trip() {
    let (storage, _temp_dir) = create_test_storage();
    let chem_id = create_test_chemical(&storage, "CS(C)=O");
    let input = make_name_record("Dimethyl sulfoxide", chem_id, Some("iupac")).with_notes("DMSO");
    let record = storage.add_name(NameKind::Chemical, &input).unwrap();

    let stored = storage.get_name(NameKind::Chemical, record.id).unwrap().unwrap();
    assert_eq!(stored.naming_convention.as_deref(), Some("iupac"));
    assert_eq!(stored.notes.as_deref(), Some("DMSO"));
    assert_eq!(stored, record);
}
