// ============================================================
// Layer 4 — Labeled Fragment Merger
// ============================================================
// Stamps each fragment with its constant label, then stacks
// the fragments into one table:
//
//   memorable_concreteness.csv  (+ Memorable=1) ┐
//   memorable_emotional.csv     (+ Memorable=1) ├─► merged
//   non_memorable_texts.csv     (+ Memorable=0) ┘
//
// Rows stay in fragment order and are numbered contiguously in
// the output (there is no index column to carry over).
//
// Reference: Rust Book §13 (Iterators)

use crate::domain::error::PrepResult;
use crate::domain::labeled_record::Label;
use crate::domain::table::Table;

pub fn merge_labeled(fragments: Vec<(Table, Label)>, label_column: &str) -> PrepResult<Table> {
    let stamped = fragments
        .into_iter()
        .map(|(mut table, label)| {
            table.set_label_column(label_column, label);
            table
        })
        .collect();

    Table::concat(stamped)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::PrepError;
    use proptest::prelude::*;

    fn fragment(rows: usize, tag: &str) -> Table {
        let mut t = Table::new(["Text"]);
        for i in 0..rows {
            t.push_row(vec![format!("{tag}-{i}")]);
        }
        t
    }

    #[test]
    fn test_labels_follow_their_fragment() {
        let merged = merge_labeled(
            vec![
                (fragment(2, "m"), Label::Memorable),
                (fragment(1, "n"), Label::NonMemorable),
            ],
            "Memorable",
        )
        .unwrap();

        assert_eq!(merged.headers(), &["Text", "Memorable"]);
        assert_eq!(merged.rows()[0], vec!["m-0", "1"]);
        assert_eq!(merged.rows()[1], vec!["m-1", "1"]);
        assert_eq!(merged.rows()[2], vec!["n-0", "0"]);
    }

    #[test]
    fn test_no_fragments_is_error() {
        assert!(matches!(
            merge_labeled(Vec::new(), "Memorable"),
            Err(PrepError::EmptyInput(_))
        ));
    }

    proptest! {
        #[test]
        fn prop_row_count_is_sum_and_labels_match(
            sizes in prop::collection::vec((0usize..20, any::<bool>()), 1..6)
        ) {
            let fragments: Vec<(Table, Label)> = sizes
                .iter()
                .enumerate()
                .map(|(i, &(n, m))| {
                    let label = if m { Label::Memorable } else { Label::NonMemorable };
                    (fragment(n, &i.to_string()), label)
                })
                .collect();

            let merged = merge_labeled(fragments, "Memorable").unwrap();
            let total: usize = sizes.iter().map(|(n, _)| n).sum();
            prop_assert_eq!(merged.len(), total);

            for row in merged.rows() {
                let source: usize = row[0].split('-').next().unwrap().parse().unwrap();
                let expected = if sizes[source].1 { "1" } else { "0" };
                prop_assert_eq!(row[1].as_str(), expected);
            }
        }
    }
}
