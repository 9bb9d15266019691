// Property-based tests for the overlap layout
// Random days of items must always lay out without visual collisions

mod fixtures;

use cadence_calendar::models::item::TimeRangedItem;
use cadence_calendar::models::settings::ColumnWidthMode;
use cadence_calendar::services::layout::{
    calculate_layouts, calculate_layouts_with_mode, items_overlap, overlap_clusters, ItemLayout,
};
use proptest::prelude::*;
use std::collections::HashMap;

/// Quarter-hour aligned ranges inside one day, zero durations included
fn day_items() -> impl Strategy<Value = Vec<TimeRangedItem>> {
    prop::collection::vec((0u32..92, 0u32..16), 0..24).prop_map(|ranges| {
        let ranges: Vec<(f64, f64)> = ranges
            .into_iter()
            .map(|(start, len)| (start as f64 * 0.25, len as f64 * 0.25))
            .collect();
        fixtures::items(&ranges)
    })
}

/// A day of items alongside a random permutation of the same items
fn day_items_permuted() -> impl Strategy<Value = (Vec<TimeRangedItem>, Vec<TimeRangedItem>)> {
    day_items().prop_flat_map(|items| {
        let shuffled = Just(items.clone()).prop_shuffle();
        (Just(items), shuffled)
    })
}

fn by_id<'a>(layouts: &[ItemLayout<'a>]) -> HashMap<&'a str, (usize, usize)> {
    layouts
        .iter()
        .map(|l| (l.item_id(), (l.column, l.total_columns)))
        .collect()
}

proptest! {
    /// Property: every item gets exactly one layout with a valid column
    #[test]
    fn prop_every_item_laid_out_once(items in day_items()) {
        let layouts = calculate_layouts(&items);
        prop_assert_eq!(layouts.len(), items.len());
        prop_assert_eq!(by_id(&layouts).len(), items.len());
        for layout in &layouts {
            prop_assert!(layout.column < layout.total_columns);
        }
    }

    /// Property: overlapping items never share a column
    #[test]
    fn prop_overlapping_items_use_distinct_columns(items in day_items()) {
        let layouts = calculate_layouts(&items);
        for (i, a) in layouts.iter().enumerate() {
            for b in &layouts[i + 1..] {
                if items_overlap(a.item, b.item) {
                    prop_assert_ne!(a.column, b.column);
                }
            }
        }
    }

    /// Property: an item that overlaps nothing is full width
    #[test]
    fn prop_isolated_items_are_full_width(items in day_items()) {
        let layouts = calculate_layouts(&items);
        for layout in &layouts {
            let isolated = items
                .iter()
                .filter(|other| other.id != layout.item.id)
                .all(|other| !items_overlap(layout.item, other));
            if isolated {
                prop_assert_eq!(layout.column, 0);
                prop_assert_eq!(layout.total_columns, 1);
            }
        }
    }

    /// Property: input order does not change the layout
    #[test]
    fn prop_layout_ignores_input_order((items, shuffled) in day_items_permuted()) {
        let original = by_id(&calculate_layouts(&items));
        let permuted = by_id(&calculate_layouts(&shuffled));
        prop_assert_eq!(original, permuted);

        let cluster = by_id(&calculate_layouts_with_mode(&items, ColumnWidthMode::Cluster));
        let cluster_permuted =
            by_id(&calculate_layouts_with_mode(&shuffled, ColumnWidthMode::Cluster));
        prop_assert_eq!(cluster, cluster_permuted);
    }

    /// Property: both width modes assign the same columns
    #[test]
    fn prop_modes_share_columns(items in day_items()) {
        let local = by_id(&calculate_layouts_with_mode(&items, ColumnWidthMode::Local));
        let cluster = by_id(&calculate_layouts_with_mode(&items, ColumnWidthMode::Cluster));

        for (id, (column, local_total)) in &local {
            let (cluster_column, cluster_total) = cluster[id];
            prop_assert_eq!(*column, cluster_column);
            prop_assert!(cluster_total >= *local_total);
        }
    }

    /// Property: in cluster mode every member of a cluster has the same width
    #[test]
    fn prop_cluster_members_share_total(items in day_items()) {
        let cluster = by_id(&calculate_layouts_with_mode(&items, ColumnWidthMode::Cluster));
        for members in overlap_clusters(&items) {
            let totals: Vec<usize> = members
                .iter()
                .map(|&index| cluster[items[index].id.as_str()].1)
                .collect();
            prop_assert!(totals.windows(2).all(|pair| pair[0] == pair[1]));
        }
    }
}

#[test]
fn test_touching_items_do_not_overlap() {
    let items = fixtures::items(&[(9.0, 1.0), (10.0, 1.0)]);
    let layouts = calculate_layouts(&items);
    assert!(layouts.iter().all(|l| l.is_full_width()));
}
