//! Merging a line's fragments into left-to-right runs.
//!
//! Content streams often split one visual word or phrase into several show
//! operations. After sorting by `x`, each fragment is folded into the run to
//! its left whenever the policy allows it.

use crate::layout::policy::LineSegmentationPolicy;
use crate::layout::text_block::{Line, TextItem};
use crate::utils::safe_float_cmp;

/// Sort a line's items by `x` and fold adjacent fragments into runs.
///
/// A folded fragment appends its text to the run and pushes the run's right
/// edge out to the larger of the two `x_end` values. The run keeps the font
/// size and line-wrap flag of its first fragment. Returns the number of folds.
///
/// Under [`ReferencePolicy`](crate::layout::policy::ReferencePolicy) every
/// line collapses into a single run.
///
/// # Examples
///
/// ```
/// use pdf_structure::layout::{Line, TextItem};
/// use pdf_structure::layout::policy::ReferencePolicy;
/// use pdf_structure::layout::run_merger::merge_runs;
///
/// let mut line = Line::with_items(
///     100.0,
///     vec![
///         TextItem::new("lo", 20.0, 30.0, 100.0, 12.0),
///         TextItem::new("Hel", 0.0, 20.0, 100.0, 12.0),
///     ],
/// );
/// merge_runs(&mut line, &ReferencePolicy);
/// assert_eq!(line.items.len(), 1);
/// assert_eq!(line.items[0].text, "Hello");
/// assert_eq!(line.items[0].x_end, 30.0);
/// ```
pub fn merge_runs(line: &mut Line, policy: &dyn LineSegmentationPolicy) -> usize {
    let mut items = std::mem::take(&mut line.items);
    // Stable sort: fragments sharing an x keep their stream order.
    items.sort_by(|a, b| safe_float_cmp(a.x, b.x));

    let mut runs: Vec<TextItem> = Vec::with_capacity(items.len());
    let mut folds = 0;
    for item in items {
        if let Some(run) = runs.last_mut() {
            if policy.should_merge(run, &item) {
                run.text.push_str(&item.text);
                run.x_end = run.x_end.max(item.x_end);
                folds += 1;
                continue;
            }
            log::trace!(
                "{} keeps {:?} apart from {:?} (gap {:.2})",
                policy.name(),
                item.text,
                run.text,
                item.x - run.x_end
            );
        }
        runs.push(item);
    }

    line.items = runs;
    folds
}
