//! Line clustering by vertical proximity.
//!
//! Items whose baselines sit within a tolerance of each other are grouped
//! into one [`Line`]. The tolerance is half the base font size: two runs less
//! than half a line height apart are read as the same line.

use crate::layout::text_block::{Line, TextItem};
use crate::utils::safe_float_cmp;

/// Clustering tolerance for a base font size.
///
/// # Examples
///
/// ```
/// use pdf_structure::layout::clustering::line_tolerance;
///
/// assert_eq!(line_tolerance(12.0), 6.0);
/// ```
pub fn line_tolerance(base_font_size: f64) -> f64 {
    0.5 * base_font_size
}

/// Representative baselines, top of the page first.
///
/// Distinct y-values of non-empty items are sorted descending; a value is
/// kept only when it lies at least `tolerance` below the last kept value.
/// Kept values therefore differ pairwise by at least `tolerance`.
pub fn representative_ys(items: &[TextItem], tolerance: f64) -> Vec<f64> {
    let mut ys: Vec<f64> = items
        .iter()
        .filter(|item| !item.text.is_empty())
        .map(|item| item.y)
        .collect();
    ys.sort_by(|a, b| safe_float_cmp(*b, *a));
    ys.dedup();

    let mut kept: Vec<f64> = Vec::with_capacity(ys.len());
    for y in ys {
        match kept.last() {
            Some(&last) if (last - y).abs() < tolerance => {},
            _ => kept.push(y),
        }
    }
    kept
}

/// Group a page's items into lines, top to bottom.
///
/// Each non-empty item is assigned to the representative baseline nearest
/// its own `y`; a tie goes to the upper line. Every item lands in exactly one
/// line and no returned line is empty. Items keep their input order within a
/// line.
///
/// # Examples
///
/// ```
/// use pdf_structure::layout::TextItem;
/// use pdf_structure::layout::clustering::cluster_into_lines;
///
/// let items = vec![
///     TextItem::new("world", 40.0, 70.0, 99.0, 12.0),
///     TextItem::new("Hello", 0.0, 30.0, 100.0, 12.0),
///     TextItem::new("Next", 0.0, 25.0, 80.0, 12.0),
/// ];
/// let lines = cluster_into_lines(items, 6.0);
/// assert_eq!(lines.len(), 2);
/// assert_eq!(lines[0].y, 100.0);
/// assert_eq!(lines[0].items.len(), 2);
/// assert_eq!(lines[1].y, 80.0);
/// ```
pub fn cluster_into_lines(items: Vec<TextItem>, tolerance: f64) -> Vec<Line> {
    let baselines = representative_ys(&items, tolerance);
    let mut lines: Vec<Line> = baselines.iter().map(|&y| Line::new(y)).collect();

    for item in items.into_iter().filter(|item| !item.text.is_empty()) {
        if let Some(index) = nearest_baseline(&baselines, item.y) {
            lines[index].items.push(item);
        }
    }

    lines.retain(|line| !line.is_empty());
    lines
}

/// Index of the baseline nearest `y` in a descending list.
fn nearest_baseline(baselines: &[f64], y: f64) -> Option<usize> {
    // First baseline at or below y; the one before it is the nearest above.
    let below = baselines.partition_point(|&baseline| baseline > y);
    let above = below.checked_sub(1);

    match (above, baselines.get(below)) {
        (Some(a), Some(&b)) => {
            if (baselines[a] - y).abs() <= (y - b).abs() {
                Some(a)
            } else {
                Some(below)
            }
        },
        (Some(a), None) => Some(a),
        (None, Some(_)) => Some(below),
        (None, None) => None,
    }
}
