mod common;

use common::{names, store_with};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ygo_shuffle::store::SELECTED_INDEX_KEY;
use ygo_shuffle::EditError;

#[test]
fn create_list_appends_trimmed_name_without_changing_selection() {
    let mut store = store_with(&["A", "B"]);
    store.select_list(1).unwrap();

    let created = store.create_list("  Goat Format  ").unwrap();
    assert_eq!(created.name, "Goat Format");
    assert!(created.rules.is_empty());

    assert_eq!(names(&store), vec!["A", "B", "Goat Format"]);
    assert_eq!(store.selected_index(), 1);
}

#[test]
fn create_list_rejects_blank_name() {
    let mut store = store_with(&["A"]);
    let writes = store.storage().write_count();

    assert_eq!(store.create_list(" \n\t ").unwrap_err(), EditError::EmptyName);
    assert_eq!(names(&store), vec!["A"]);
    assert_eq!(store.storage().write_count(), writes);
}

#[test]
fn rename_list_keeps_id_and_rules() {
    let mut store = store_with(&["A", "B"]);
    let before = store.list(1).unwrap().clone();

    store.rename_list(1, " Edison ").unwrap();

    let after = store.list(1).unwrap();
    assert_eq!(after.name, "Edison");
    assert_eq!(after.id, before.id);
    assert_eq!(after.rules, before.rules);
}

#[test]
fn rename_list_to_empty_is_a_noop() {
    let mut store = store_with(&["A"]);
    let writes = store.storage().write_count();

    assert_eq!(store.rename_list(0, "").unwrap_err(), EditError::EmptyName);
    assert_eq!(names(&store), vec!["A"]);
    assert_eq!(store.storage().write_count(), writes);
}

#[test]
fn delete_last_list_is_rejected() {
    let mut store = store_with(&["Only"]);
    let writes = store.storage().write_count();

    assert_eq!(store.delete_list(0).unwrap_err(), EditError::LastList);
    assert_eq!(names(&store), vec!["Only"]);
    assert_eq!(store.storage().write_count(), writes);
}

#[test]
fn delete_selected_list_resets_selection() {
    let mut store = store_with(&["A", "B", "C"]);
    store.select_list(2).unwrap();

    store.delete_list(2).unwrap();
    assert_eq!(names(&store), vec!["A", "B"]);
    assert_eq!(store.selected_index(), 0);
}

#[test]
fn delete_before_selection_tracks_selected_list() {
    let mut store = store_with(&["A", "B", "C"]);
    store.select_list(2).unwrap();
    let selected_id = store.current_list().id;

    store.delete_list(0).unwrap();
    assert_eq!(store.selected_index(), 1);
    assert_eq!(store.current_list().id, selected_id);
    assert_eq!(
        store.storage().raw(SELECTED_INDEX_KEY).as_deref(),
        Some(&b"1"[..])
    );
}

#[test]
fn delete_after_selection_keeps_selection() {
    let mut store = store_with(&["A", "B", "C"]);
    store.select_list(1).unwrap();

    store.delete_list(2).unwrap();
    assert_eq!(store.selected_index(), 1);
    assert_eq!(store.current_list().name, "B");
}

#[test]
fn duplicate_inserts_copy_after_source() {
    let mut store = store_with(&["A", "B"]);
    let source = store.list(0).unwrap().clone();

    let copy = store.duplicate_list(0).unwrap().clone();
    assert_eq!(store.rule_lists().len(), 3);
    assert_eq!(store.list(1).unwrap().id, copy.id);
    assert_ne!(copy.id, source.id);
    assert_eq!(copy.rules, source.rules);
    assert_eq!(names(&store), vec!["A", "A Copy", "B"]);
}

#[test]
fn duplicate_name_avoids_every_existing_name() {
    let mut store = store_with(&["Rules", "Rules Copy", "Rules Copy 2"]);

    store.duplicate_list(0).unwrap();
    assert_eq!(store.list(1).unwrap().name, "Rules Copy 3");

    let all = names(&store);
    let mut unique = all.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), all.len());
}

#[test]
fn duplicate_before_selection_shifts_selection() {
    let mut store = store_with(&["A", "B", "C"]);
    store.select_list(1).unwrap();

    store.duplicate_list(0).unwrap();
    assert_eq!(store.selected_index(), 2);
    assert_eq!(store.current_list().name, "B");

    store.duplicate_list(2).unwrap();
    assert_eq!(store.selected_index(), 2);
    assert_eq!(store.current_list().name, "B");
}

#[test]
fn move_selected_list_forward() {
    let mut store = store_with(&["A", "B", "C", "D"]);
    store.select_list(0).unwrap();

    store.move_list(0, 3).unwrap();
    assert_eq!(names(&store), vec!["B", "C", "A", "D"]);
    assert_eq!(store.selected_index(), 2);
    assert_eq!(store.current_list().name, "A");
}

#[test]
fn move_list_across_selection() {
    let mut store = store_with(&["A", "B", "C", "D"]);
    store.select_list(2).unwrap();

    store.move_list(0, 4).unwrap();
    assert_eq!(names(&store), vec!["B", "C", "D", "A"]);
    assert_eq!(store.current_list().name, "C");

    store.move_list(3, 0).unwrap();
    assert_eq!(names(&store), vec!["A", "B", "C", "D"]);
    assert_eq!(store.current_list().name, "C");
}

#[test]
fn move_list_to_own_position_writes_nothing() {
    let mut store = store_with(&["A", "B"]);
    let writes = store.storage().write_count();

    store.move_list(0, 1).unwrap();
    store.move_list(1, 1).unwrap();
    assert_eq!(names(&store), vec!["A", "B"]);
    assert_eq!(store.storage().write_count(), writes);
}

#[test]
fn out_of_range_indexes_are_rejected() {
    let mut store = store_with(&["A", "B"]);

    assert_eq!(
        store.delete_list(2).unwrap_err(),
        EditError::ListOutOfRange { index: 2, len: 2 }
    );
    assert_eq!(
        store.move_list(0, 3).unwrap_err(),
        EditError::ListOutOfRange { index: 3, len: 2 }
    );
    assert!(store.duplicate_list(5).is_err());
    assert!(store.select_list(2).is_err());
    assert_eq!(names(&store), vec!["A", "B"]);
}

#[test]
fn select_list_persists_index() {
    let mut store = store_with(&["A", "B", "C"]);
    store.select_list(2).unwrap();
    assert_eq!(
        store.storage().raw(SELECTED_INDEX_KEY).as_deref(),
        Some(&b"2"[..])
    );
}

/// Random sequences of list edits never leave the selection dangling, and
/// it keeps naming the same list unless that list was deleted.
#[test]
fn selection_stays_valid_under_random_edits() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut store = store_with(&["A", "B", "C"]);

    for step in 0..500 {
        let len = store.rule_lists().len();
        let selected_id = store.current_list().id;
        let op = rng.random_range(0..5);
        let index = rng.random_range(0..len);
        let mut deleted_selected = false;

        match op {
            0 => {
                let _ = store.create_list(&format!("List {step}"));
            }
            1 => {
                deleted_selected = len > 1 && store.list(index).unwrap().id == selected_id;
                let _ = store.delete_list(index);
            }
            2 => {
                let _ = store.duplicate_list(index);
            }
            3 => {
                let to = rng.random_range(0..=len);
                let _ = store.move_list(index, to);
            }
            _ => {
                let _ = store.select_list(index);
            }
        }

        assert!(store.selected_index() < store.rule_lists().len());
        if op != 4 && !deleted_selected {
            assert_eq!(store.current_list().id, selected_id, "step {step} op {op}");
        }
    }
}
