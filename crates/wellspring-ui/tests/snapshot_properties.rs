//! Property-based tests for the snapshot card's view model
//!
//! Whatever the summary holds, lines appear in fixed order and only for
//! fields worth showing.

use proptest::prelude::*;
use serde_json::{json, Map, Value};
use wellspring_core::{Count, CommunitySummary};
use wellspring_ui::{SnapshotLine, SnapshotView};

/// Raw source objects: known keys with plausible values, plus noise keys
fn object_strategy() -> impl Strategy<Value = Map<String, Value>> {
    (
        prop::option::of(0u64..50),
        prop::option::of("[a-zA-Z ]{0,12}"),
        prop::option::of(0u64..50),
        prop::option::of("[a-z]{1,6}"),
    )
        .prop_map(|(stories, tip, discussions, noise)| {
            let mut object = Map::new();
            if let Some(n) = stories {
                object.insert("newSuccessStories".to_string(), json!(n));
            }
            if let Some(t) = tip {
                object.insert("popularTip".to_string(), json!(t));
            }
            if let Some(n) = discussions {
                object.insert("activeDiscussions".to_string(), json!(n));
            }
            if let Some(key) = noise {
                object.insert(format!("x-{key}"), Value::Null);
            }
            object
        })
}

fn rank(line: &SnapshotLine) -> u8 {
    match line {
        SnapshotLine::SuccessStories(_) => 0,
        SnapshotLine::PopularTip(_) => 1,
        SnapshotLine::ActiveDiscussions(_) => 2,
    }
}

fn truthy_count(value: Option<&Value>) -> bool {
    value.and_then(Value::as_u64).is_some_and(|n| n > 0)
}

proptest! {
    /// Lines are strictly ordered: stories, tip, discussions
    #[test]
    fn lines_keep_fixed_order(object in object_strategy()) {
        let summary = CommunitySummary::from_fields(&object);
        let view = SnapshotView::from_summary(Some(&summary));
        let ranks: Vec<u8> = view.lines().iter().map(rank).collect();
        prop_assert!(ranks.windows(2).all(|w| w[0] < w[1]));
    }

    /// Line count equals the number of truthy fields
    #[test]
    fn one_line_per_truthy_field(object in object_strategy()) {
        let expected = usize::from(truthy_count(object.get("newSuccessStories")))
            + usize::from(
                object
                    .get("popularTip")
                    .and_then(Value::as_str)
                    .is_some_and(|t| !t.is_empty()),
            )
            + usize::from(truthy_count(object.get("activeDiscussions")));
        let summary = CommunitySummary::from_fields(&object);
        let view = SnapshotView::from_summary(Some(&summary));
        prop_assert_eq!(view.lines().len(), expected);
    }

    /// Loading is shown exactly when the source object had no keys
    #[test]
    fn loading_iff_no_keys(object in object_strategy()) {
        let summary = CommunitySummary::from_fields(&object);
        let view = SnapshotView::from_summary(Some(&summary));
        prop_assert_eq!(view.is_loading(), object.is_empty());
    }

    /// Counts appear verbatim in their line text
    #[test]
    fn counts_appear_in_text(n in 1u64..100_000) {
        let count = Count::Number(n);
        prop_assert!(SnapshotLine::SuccessStories(count.clone()).text().contains(&n.to_string()));
        prop_assert!(SnapshotLine::ActiveDiscussions(count).text().contains(&n.to_string()));
    }
}
