//! Overlap layout for a single day column.
//!
//! Given the items rendered on one day, assigns every item a zero-based
//! `column` and a `total_columns` count so that items whose time ranges
//! overlap are painted side by side and never on top of each other.
//!
//! The layout is recomputed from scratch on every render pass. It is O(n²) in
//! the number of items, which is fine for the tens of items a day holds.

use chrono::NaiveDate;

use crate::models::item::{ItemFilter, TimeRangedItem};
use crate::models::settings::ColumnWidthMode;

/// Placement of one item inside its day column
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemLayout<'a> {
    pub item: &'a TimeRangedItem,
    pub column: usize,
    pub total_columns: usize,
}

impl<'a> ItemLayout<'a> {
    pub fn item_id(&self) -> &'a str {
        &self.item.id
    }

    /// Width of the item as a percentage of the day column
    pub fn width_percent(&self) -> f64 {
        100.0 / self.total_columns.max(1) as f64
    }

    /// Left offset of the item as a percentage of the day column
    pub fn left_percent(&self) -> f64 {
        self.column as f64 * self.width_percent()
    }

    /// True when the item is laid out at full width
    pub fn is_full_width(&self) -> bool {
        self.total_columns <= 1
    }
}

/// Check if two items overlap in time
pub fn items_overlap(a: &TimeRangedItem, b: &TimeRangedItem) -> bool {
    a.overlaps(b)
}

/// Lay out items with the local column-count rule.
pub fn calculate_layouts(items: &[TimeRangedItem]) -> Vec<ItemLayout<'_>> {
    calculate_layouts_with_mode(items, ColumnWidthMode::Local)
}

/// Lay out items, choosing how `total_columns` is derived.
///
/// Results are returned in placement order: start hour ascending, longer
/// items first on equal starts, then by id.
pub fn calculate_layouts_with_mode(
    items: &[TimeRangedItem],
    mode: ColumnWidthMode,
) -> Vec<ItemLayout<'_>> {
    layout_refs(items.iter().collect(), mode)
}

/// Lay out the timed items that belong to `date`.
///
/// All-day items never take part in the grid layout. Items the filter
/// rejects are dropped before columns are assigned.
pub fn layouts_for_day<'a>(
    items: &'a [TimeRangedItem],
    date: NaiveDate,
    filter: &ItemFilter,
    mode: ColumnWidthMode,
) -> Vec<ItemLayout<'a>> {
    let day_items: Vec<&TimeRangedItem> = items
        .iter()
        .filter(|item| item.date == date && !item.all_day)
        .filter(|item| filter.admits(item))
        .collect();
    layout_refs(day_items, mode)
}

/// `(column, total_columns)` the grid paints for item `id`.
///
/// `None` when the item is unknown, all-day, or hidden by the filter.
pub fn slot_of(
    items: &[TimeRangedItem],
    id: &str,
    filter: &ItemFilter,
    mode: ColumnWidthMode,
) -> Option<(usize, usize)> {
    let date = items.iter().find(|item| item.id == id)?.date;
    layouts_for_day(items, date, filter, mode)
        .into_iter()
        .find(|layout| layout.item_id() == id)
        .map(|layout| (layout.column, layout.total_columns))
}

/// Group items into connected overlap clusters.
///
/// Returns indices into `items`. Indices inside a cluster are ascending and
/// clusters are ordered by their smallest index.
pub fn overlap_clusters(items: &[TimeRangedItem]) -> Vec<Vec<usize>> {
    let refs: Vec<&TimeRangedItem> = items.iter().collect();
    clusters_of(&refs)
}

fn layout_refs(mut items: Vec<&TimeRangedItem>, mode: ColumnWidthMode) -> Vec<ItemLayout<'_>> {
    if items.is_empty() {
        return Vec::new();
    }

    let clamped = items
        .iter()
        .filter(|item| item.effective_duration() != item.duration)
        .count();
    if clamped > 0 {
        log::debug!("Clamped {} item duration(s) to zero before layout", clamped);
    }

    sort_for_placement(&mut items);
    let columns = assign_columns(&items);
    let totals = match mode {
        ColumnWidthMode::Local => local_total_columns(&items, &columns),
        ColumnWidthMode::Cluster => cluster_total_columns(&items, &columns),
    };

    items
        .into_iter()
        .zip(columns)
        .zip(totals)
        .map(|((item, column), total_columns)| ItemLayout {
            item,
            column,
            total_columns,
        })
        .collect()
}

fn sort_for_placement(items: &mut [&TimeRangedItem]) {
    items.sort_by(|a, b| {
        a.effective_start()
            .total_cmp(&b.effective_start())
            .then_with(|| b.effective_duration().total_cmp(&a.effective_duration()))
            .then_with(|| a.id.cmp(&b.id))
    });
}

/// First-fit placement: each item goes into the leftmost column holding
/// nothing it overlaps, or a new column when every column clashes.
fn assign_columns(sorted: &[&TimeRangedItem]) -> Vec<usize> {
    let mut columns: Vec<Vec<usize>> = Vec::new();
    let mut assigned = Vec::with_capacity(sorted.len());

    for (index, item) in sorted.iter().enumerate() {
        let free = columns
            .iter()
            .position(|column| column.iter().all(|&placed| !item.overlaps(sorted[placed])));

        let column = match free {
            Some(column) => {
                columns[column].push(index);
                column
            }
            None => {
                columns.push(vec![index]);
                columns.len() - 1
            }
        };
        assigned.push(column);
    }

    assigned
}

// 1 + highest column among the item and its direct neighbours. Not transitive:
// two items in the same cluster can end up with different counts.
fn local_total_columns(sorted: &[&TimeRangedItem], columns: &[usize]) -> Vec<usize> {
    (0..sorted.len())
        .map(|i| {
            let widest = (0..sorted.len())
                .filter(|&j| j != i && sorted[i].overlaps(sorted[j]))
                .map(|j| columns[j])
                .fold(columns[i], usize::max);
            widest + 1
        })
        .collect()
}

fn cluster_total_columns(sorted: &[&TimeRangedItem], columns: &[usize]) -> Vec<usize> {
    let mut totals = vec![1; sorted.len()];
    for cluster in clusters_of(sorted) {
        let widest = cluster.iter().map(|&i| columns[i]).max().unwrap_or(0);
        for &i in &cluster {
            totals[i] = widest + 1;
        }
    }
    totals
}

fn clusters_of(items: &[&TimeRangedItem]) -> Vec<Vec<usize>> {
    let mut visited = vec![false; items.len()];
    let mut clusters = Vec::new();

    for seed in 0..items.len() {
        if visited[seed] {
            continue;
        }
        visited[seed] = true;
        let mut cluster = vec![seed];
        let mut stack = vec![seed];

        while let Some(current) = stack.pop() {
            for next in 0..items.len() {
                if !visited[next] && items[current].overlaps(items[next]) {
                    visited[next] = true;
                    cluster.push(next);
                    stack.push(next);
                }
            }
        }

        cluster.sort_unstable();
        clusters.push(cluster);
    }

    clusters
}
