//! Property tests for header translation and text trimming.

use decl_transform::normalization::trim_text_cells;
use decl_transform::{HEADER_ALIASES, canonical_name, rename_columns};
use polars::prelude::{Column, DataFrame};
use proptest::prelude::*;

fn padding() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(vec![' ', '\t', '\n']), 0..4)
        .prop_map(|chars| chars.into_iter().collect())
}

proptest! {
    #[test]
    fn padded_alias_translates(idx in 0..HEADER_ALIASES.len(), left in padding(), right in padding()) {
        let (aliases, canonical) = HEADER_ALIASES[idx];
        for alias in aliases {
            let header = format!("{left}{alias}{right}");
            prop_assert_eq!(canonical_name(&header), Some(canonical));
        }
    }

    #[test]
    fn unknown_header_passes_through(header in "[a-z ]{1,12}") {
        let mut df = DataFrame::new(vec![Column::new(header.as_str().into(), vec![Some("v")])]).unwrap();
        let renamed = rename_columns(&mut df).unwrap();

        prop_assert!(renamed.is_empty());
        prop_assert_eq!(df.get_column_names()[0].as_str(), header.as_str());
    }

    #[test]
    fn trimming_removes_only_outer_whitespace(
        left in padding(),
        core in "[a-zA-Zа-я0-9]([a-zA-Zа-я0-9 ]{0,8}[a-zA-Zа-я0-9])?",
        right in padding(),
    ) {
        let cell = format!("{left}{core}{right}");
        let mut df = DataFrame::new(vec![Column::new("c".into(), vec![Some(cell.as_str())])]).unwrap();

        trim_text_cells(&mut df).unwrap();

        let values: Vec<Option<&str>> = df.column("c").unwrap().str().unwrap().iter().collect();
        prop_assert_eq!(values, vec![Some(core.as_str())]);
    }
}
