//! Table segmentation over a line sequence.
//!
//! A line with more than one run is a row candidate. A maximal run of row
//! candidates sharing the same column count (and, under a strict policy,
//! the same column positions) becomes one [`Table`]: the first line supplies
//! the headers and every later line one row.
//!
//! Note: by default only column *counts* are compared, so two unrelated
//! two-column lines that happen to be adjacent form a table. Position checks
//! live in [`StrictPolicy`](crate::layout::policy::StrictPolicy).

use crate::config::DEFAULT_MAX_TABLE_ITERATIONS;
use crate::document::{Element, Table};
use crate::layout::policy::LineSegmentationPolicy;
use crate::layout::text_block::Line;

/// Outcome of a segmentation pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Segmentation {
    /// Lines and tables in order
    pub elements: Vec<Element>,
    /// Number of tables built
    pub tables: usize,
    /// Scans performed
    pub iterations: usize,
    /// The iteration cap stopped the pass before the sequence was exhausted
    pub hit_iteration_cap: bool,
}

enum Slot {
    Line(Line),
    Table(Table),
}

/// Replace runs of row-like lines with tables using the default cap.
pub fn detect_tables(lines: Vec<Line>, policy: &dyn LineSegmentationPolicy) -> Segmentation {
    segment_tables(lines, policy, DEFAULT_MAX_TABLE_ITERATIONS)
}

/// Replace runs of row-like lines with tables.
///
/// Each iteration scans from the top for the first row-like line and the
/// extent of its run. A run of a single line ends the pass: a lone wide line
/// is never promoted to a table. Otherwise the run is swapped for a table
/// and the scan restarts. After `max_iterations` scans the pass stops and
/// returns whatever has been segmented so far. [`Segmentation::hit_iteration_cap`]
/// is set only if a table-forming run was still left at that point.
///
/// No text is dropped or duplicated.
///
/// # Examples
///
/// ```
/// use pdf_structure::layout::{Line, TextItem};
/// use pdf_structure::layout::policy::ReferencePolicy;
/// use pdf_structure::layout::table_detector::segment_tables;
///
/// let row = |y: f64, a: &str, b: &str| {
///     Line::with_items(y, vec![
///         TextItem::new(a, 0.0, 30.0, y, 12.0),
///         TextItem::new(b, 50.0, 70.0, y, 12.0),
///     ])
/// };
/// let result = segment_tables(vec![row(100.0, "Name", "Age"), row(80.0, "Alice", "30")], &ReferencePolicy, 1000);
/// assert_eq!(result.tables, 1);
/// let table = result.elements[0].as_table().unwrap();
/// assert_eq!(table.headers, vec!["Name", "Age"]);
/// ```
pub fn segment_tables(
    lines: Vec<Line>,
    policy: &dyn LineSegmentationPolicy,
    max_iterations: usize,
) -> Segmentation {
    let mut slots: Vec<Slot> = lines.into_iter().map(Slot::Line).collect();
    let mut iterations = 0;
    let mut tables = 0;
    let mut hit_iteration_cap = false;

    loop {
        if iterations >= max_iterations {
            // Only a run that would still become a table makes the result partial.
            hit_iteration_cap = find_row_run(&slots, policy).is_some_and(|(start, end)| start != end);
            if hit_iteration_cap {
                log::warn!(
                    "Table segmentation stopped at the iteration cap ({}); output is partially segmented",
                    max_iterations
                );
            }
            break;
        }
        iterations += 1;

        let Some((start, end)) = find_row_run(&slots, policy) else {
            break;
        };
        if start == end {
            break;
        }

        log::debug!("Table over lines {}..={} ({} columns)", start, end, column_count(&slots, start));
        slots = replace_run(slots, start, end);
        tables += 1;
    }

    let elements = slots
        .into_iter()
        .map(|slot| match slot {
            Slot::Line(line) => Element::from(line),
            Slot::Table(table) => Element::from(table),
        })
        .collect();

    Segmentation {
        elements,
        tables,
        iterations,
        hit_iteration_cap,
    }
}

/// First row-like line and the last line of its run.
///
/// The run ends before the first line whose column count differs, before a
/// line the policy rejects as misaligned, before an already built table, or
/// at the end of the sequence.
fn find_row_run(slots: &[Slot], policy: &dyn LineSegmentationPolicy) -> Option<(usize, usize)> {
    let start = slots
        .iter()
        .position(|slot| matches!(slot, Slot::Line(line) if line.is_row_like()))?;
    let Slot::Line(first_row) = &slots[start] else {
        return None;
    };

    let run_length = slots[start + 1..]
        .iter()
        .take_while(|slot| match slot {
            Slot::Line(line) => line.len() == first_row.len() && policy.row_aligns(first_row, line),
            Slot::Table(_) => false,
        })
        .count();

    Some((start, start + run_length))
}

fn column_count(slots: &[Slot], index: usize) -> usize {
    match slots.get(index) {
        Some(Slot::Line(line)) => line.len(),
        _ => 0,
    }
}

/// Rebuild the sequence with `start..=end` swapped for one table.
fn replace_run(slots: Vec<Slot>, start: usize, end: usize) -> Vec<Slot> {
    let mut rebuilt = Vec::with_capacity(slots.len() - (end - start));
    let mut run = Vec::with_capacity(end - start + 1);

    for (index, slot) in slots.into_iter().enumerate() {
        if index < start || index > end {
            rebuilt.push(slot);
            continue;
        }
        match slot {
            Slot::Line(line) => run.push(line),
            table @ Slot::Table(_) => rebuilt.push(table),
        }
        if index == end {
            rebuilt.push(Slot::Table(Table::from_lines(std::mem::take(&mut run))));
        }
    }

    rebuilt
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::policy::{ReferencePolicy, StrictPolicy};
    use crate::layout::TextItem;

    fn row(cells: &[&str], y: f64) -> Line {
        Line::with_items(
            y,
            cells
                .iter()
                .enumerate()
                .map(|(i, text)| TextItem::new(*text, i as f64 * 100.0, i as f64 * 100.0 + 40.0, y, 12.0))
                .collect(),
        )
    }

    fn s(text: &str) -> String {
        text.to_string()
    }

    #[test]
    fn test_two_rows_make_a_table() {
        let lines = vec![row(&["Name", "Age"], 100.0), row(&["Alice", "30"], 80.0)];
        let result = segment_tables(lines, &ReferencePolicy, 1000);
        assert_eq!(result.tables, 1);
        assert_eq!(
            result.elements,
            vec![Element::Table(Table {
                headers: vec![s("Name"), s("Age")],
                rows: vec![vec![vec![s("Alice")], vec![s("30")]]],
            })]
        );
        assert!(!result.hit_iteration_cap);
    }

    #[test]
    fn test_lone_row_is_not_a_table() {
        let lines = vec![row(&["intro"], 120.0), row(&["A", "B"], 100.0), row(&["outro"], 80.0)];
        let result = segment_tables(lines, &ReferencePolicy, 1000);
        assert_eq!(result.tables, 0);
        assert_eq!(result.elements.len(), 3);
        assert_eq!(result.elements[1], Element::Line(vec![s("A"), s("B")]));
    }

    #[test]
    fn test_column_count_mismatch_ends_run() {
        let lines = vec![
            row(&["intro"], 140.0),
            row(&["a", "b"], 120.0),
            row(&["1", "2"], 100.0),
            row(&["x", "y", "z"], 80.0),
            row(&["7", "8", "9"], 60.0),
            row(&["outro"], 40.0),
        ];
        let result = segment_tables(lines, &ReferencePolicy, 1000);
        assert_eq!(result.tables, 2);
        assert_eq!(result.elements.len(), 4);
        assert_eq!(result.elements[1].as_table().map(Table::num_columns), Some(2));
        assert_eq!(result.elements[2].as_table().map(Table::num_columns), Some(3));
    }

    #[test]
    fn test_run_reaching_end_of_sequence() {
        let lines = vec![row(&["text"], 100.0), row(&["h1", "h2"], 80.0), row(&["c1", "c2"], 60.0)];
        let result = segment_tables(lines, &ReferencePolicy, 1000);
        assert_eq!(result.tables, 1);
        assert_eq!(result.elements.len(), 2);
        assert_eq!(result.iterations, 2);
    }

    #[test]
    fn test_tables_do_not_swallow_each_other() {
        // A single-run line between two runs keeps them apart.
        let lines = vec![
            row(&["a", "b"], 200.0),
            row(&["c", "d"], 180.0),
            row(&["single"], 160.0),
            row(&["e", "f"], 140.0),
            row(&["g", "h"], 120.0),
        ];
        let result = segment_tables(lines, &ReferencePolicy, 1000);
        assert_eq!(result.tables, 2);
        assert_eq!(result.elements.len(), 3);
        assert!(result.elements[0].is_table());
        assert!(result.elements[2].is_table());
    }

    #[test]
    fn test_iteration_cap_returns_partial_result() {
        let lines = vec![
            row(&["a", "b"], 200.0),
            row(&["c", "d"], 180.0),
            row(&["single"], 160.0),
            row(&["e", "f"], 140.0),
            row(&["g", "h"], 120.0),
        ];
        let result = segment_tables(lines, &ReferencePolicy, 1);
        assert!(result.hit_iteration_cap);
        assert_eq!(result.tables, 1);
        assert_eq!(result.elements.len(), 4);
    }

    #[test]
    fn test_finishing_exactly_at_cap_is_not_partial() {
        let lines = vec![row(&["Name", "Age"], 100.0), row(&["Alice", "30"], 80.0)];
        let result = segment_tables(lines, &ReferencePolicy, 1);
        assert_eq!(result.tables, 1);
        assert_eq!(result.iterations, 1);
        assert!(!result.hit_iteration_cap);
    }

    #[test]
    fn test_text_is_preserved() {
        let lines = vec![
            row(&["p"], 220.0),
            row(&["a", "b"], 200.0),
            row(&["c", "d"], 180.0),
            row(&["q"], 160.0),
        ];
        let expected: Vec<String> = lines.iter().flat_map(Line::texts).collect();
        let result = segment_tables(lines, &ReferencePolicy, 1000);
        let actual: Vec<&str> = result.elements.iter().flat_map(Element::fragments).collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_strict_policy_splits_misaligned_rows() {
        let mut shifted = row(&["wide cell", "b"], 160.0);
        shifted.items[0].x_end = 150.0;
        let lines = vec![row(&["h1", "h2"], 200.0), row(&["a", "b"], 180.0), shifted];
        let result = segment_tables(lines, &StrictPolicy::new(5.0, 12.0), 1000);
        assert_eq!(result.tables, 1);
        assert_eq!(result.elements.len(), 2);
        assert_eq!(result.elements[0].as_table().map(Table::num_rows), Some(1));
    }
}
