// tests/grid_invariants.rs
//
// The grid model's standing guarantees: the dataset never empties, selects
// never lose all options, and reordering is exact.

use checksheet::forms::dataset::Dataset;
use checksheet::forms::definitions::{
    column_label, default_select_options, ColumnKind, TableStructure,
};

#[test]
fn dataset_never_drops_below_one_row() {
    for start_len in 1..=6usize {
        let mut dataset = Dataset::default();
        for _ in 1..start_len {
            dataset.add_row();
        }
        assert_eq!(dataset.len(), start_len);

        // Delete more times than there are rows; the last one must survive.
        for _ in 0..start_len + 3 {
            let _ = dataset.delete_row(0);
        }
        assert_eq!(dataset.len(), 1);
        assert!(dataset.delete_row(0).is_err());
    }
}

#[test]
fn select_columns_always_keep_at_least_one_option() {
    let mut structure = TableStructure::default();
    structure.add_column();
    structure.set_kind(0, ColumnKind::Select).unwrap();

    for raw in ["OK,FAIL", "only-one", "", " , , ", "a,,b,"] {
        structure.set_options_from_input(0, raw).unwrap();
        let options = structure.columns[0].options.as_ref().unwrap();
        assert!(!options.is_empty(), "raw input {:?}", raw);
    }

    // Moving away from select removes the key entirely.
    structure.set_kind(0, ColumnKind::Textarea).unwrap();
    assert!(structure.columns[0].options.is_none());

    // And back again re-seeds the placeholders.
    structure.set_kind(0, ColumnKind::Select).unwrap();
    assert_eq!(structure.columns[0].options, Some(default_select_options()));
}

#[test]
fn neighbor_swaps_cancel_out() {
    let mut structure = TableStructure::default();
    for _ in 0..5 {
        structure.add_column();
    }
    let original = structure.headers();
    for i in 0..4 {
        assert!(structure.move_column(i, 1));
        assert!(structure.move_column(i + 1, -1));
        assert_eq!(structure.headers(), original, "at index {}", i);
    }
}

#[test]
fn drag_reorder_accounts_for_removal_shift() {
    // Dropping column 0 on the far side of column 2 inserts after it: the
    // target index collapses by one because the source was removed first.
    let mut structure = TableStructure::default();
    for _ in 0..4 {
        structure.add_column();
    }
    let source = 0usize;
    let target_drop = 3usize; // pointer right of column 2's midpoint
    let final_insert = if source < target_drop {
        target_drop - 1
    } else {
        target_drop
    };
    structure.reorder_column(source, final_insert).unwrap();
    assert_eq!(
        structure.headers(),
        vec!["Column2", "Column3", "Column1", "Column4"]
    );
}

#[test]
fn column_labels_follow_spreadsheet_sequence() {
    for (index, expected) in [(0, "A"), (1, "B"), (25, "Z"), (26, "AA"), (27, "AB"), (51, "AZ"), (52, "BA")]
    {
        assert_eq!(column_label(index), expected);
    }
}

#[test]
fn three_added_columns_are_numbered_in_order() {
    let mut structure = TableStructure::default();
    structure.add_column();
    structure.add_column();
    structure.add_column();
    assert_eq!(structure.headers(), vec!["Column1", "Column2", "Column3"]);
    assert!(structure
        .columns
        .iter()
        .all(|c| c.kind == ColumnKind::Text));
}
