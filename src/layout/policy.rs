//! Pluggable segmentation heuristics.
//!
//! The clusterer, run merger, paragraph joiner and table segmenter consult a
//! [`LineSegmentationPolicy`] at each decision point, so stricter rules can be
//! switched on without touching the stages themselves.
//!
//! # Available Policies
//!
//! - [`ReferencePolicy`]: every gate open (merge everything, join on the
//!   line-wrap flag, compare column counts only)
//! - [`StrictPolicy`]: gap-gated merging, heading/bullet aware joining and
//!   column alignment checks

use crate::config::{PolicyKind, ReconstructionConfig};
use crate::layout::text_block::{Line, TextItem};

/// Decision points shared by the reconstruction stages.
pub trait LineSegmentationPolicy: Send + Sync {
    /// Whether `next` is folded into `run`, the run immediately to its left.
    fn should_merge(&self, _run: &TextItem, _next: &TextItem) -> bool {
        true
    }

    /// Whether `next` may be appended to the paragraph ending in `current`.
    ///
    /// Only asked once the line-wrap flag of `current` is set and both lines
    /// hold a single run.
    fn continues_paragraph(&self, _current: &TextItem, _next: &TextItem) -> bool {
        true
    }

    /// Whether `row` lines up with `first_row`, the opening row of a table.
    ///
    /// Only asked for rows with the same number of items.
    fn row_aligns(&self, _first_row: &Line, _row: &Line) -> bool {
        true
    }

    /// Return the name of this policy for debugging.
    fn name(&self) -> &'static str;
}

/// Keeps every heuristic gate open.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReferencePolicy;

impl LineSegmentationPolicy for ReferencePolicy {
    fn name(&self) -> &'static str {
        "ReferencePolicy"
    }
}

/// Geometry-aware heuristics.
///
/// - runs merge only across gaps narrower than `merge_gap`
/// - headings (font noticeably larger than body) and bullet items never
///   join the paragraph above them, and a heading never absorbs the line
///   below it
/// - a table row must keep each cell between the neighbouring columns of
///   the first row
#[derive(Debug, Clone, Copy)]
pub struct StrictPolicy {
    merge_gap: f64,
    base_font_size: f64,
}

/// Font size ratio above which a run reads as a heading.
const HEADING_SIZE_RATIO: f64 = 1.2;

impl StrictPolicy {
    /// Create a strict policy.
    pub fn new(merge_gap: f64, base_font_size: f64) -> Self {
        Self {
            merge_gap,
            base_font_size,
        }
    }

    /// Build from the reconstruction settings.
    pub fn from_config(config: &ReconstructionConfig) -> Self {
        Self::new(config.merge_gap, config.base_font_size)
    }

    fn is_heading(&self, item: &TextItem) -> bool {
        item.font_size.abs() > self.base_font_size * HEADING_SIZE_RATIO
    }
}

impl LineSegmentationPolicy for StrictPolicy {
    fn should_merge(&self, run: &TextItem, next: &TextItem) -> bool {
        next.x - run.x_end < self.merge_gap
    }

    fn continues_paragraph(&self, current: &TextItem, next: &TextItem) -> bool {
        !self.is_heading(current) && !self.is_heading(next) && !starts_with_bullet(&next.text)
    }

    fn row_aligns(&self, first_row: &Line, row: &Line) -> bool {
        let columns = &first_row.items;
        row.len() == columns.len()
            && row.items.iter().enumerate().all(|(i, cell)| {
                let after_previous = i
                    .checked_sub(1)
                    .and_then(|previous| columns.get(previous))
                    .map_or(true, |previous_column| cell.x >= previous_column.x_end);
                let before_next = columns
                    .get(i + 1)
                    .map_or(true, |next_column| cell.x_end <= next_column.x);
                after_previous && before_next
            })
    }

    fn name(&self) -> &'static str {
        "StrictPolicy"
    }
}

/// Create the policy selected by the configuration.
pub fn create_policy(config: &ReconstructionConfig) -> Box<dyn LineSegmentationPolicy> {
    match config.policy {
        PolicyKind::Reference => Box::new(ReferencePolicy),
        PolicyKind::Strict => Box::new(StrictPolicy::from_config(config)),
    }
}

/// True for list item openers: a bullet glyph, or `-`/`*`/`N.`/`N)` followed
/// by whitespace.
pub fn starts_with_bullet(text: &str) -> bool {
    let text = text.trim_start();
    let mut chars = text.chars();
    match chars.next() {
        Some('•' | '◦' | '▪' | '‣' | '●') => true,
        Some('-' | '*') => chars.next().is_some_and(char::is_whitespace),
        Some(c) if c.is_ascii_digit() => {
            let rest = text.trim_start_matches(|c: char| c.is_ascii_digit());
            let mut rest = rest.chars();
            matches!(rest.next(), Some('.' | ')')) && rest.next().is_some_and(char::is_whitespace)
        },
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(text: &str, x: f64, x_end: f64) -> TextItem {
        TextItem::new(text, x, x_end, 100.0, 12.0)
    }

    #[test]
    fn test_reference_policy_keeps_gates_open() {
        let policy = ReferencePolicy;
        assert!(policy.should_merge(&item("a", 0.0, 10.0), &item("b", 500.0, 510.0)));
        assert!(policy.continues_paragraph(&item("a", 0.0, 10.0), &item("• b", 0.0, 10.0)));
        assert_eq!(policy.name(), "ReferencePolicy");
    }

    #[test]
    fn test_strict_merge_is_gap_gated() {
        let policy = StrictPolicy::new(5.0, 12.0);
        assert!(policy.should_merge(&item("Hel", 0.0, 20.0), &item("lo", 22.0, 30.0)));
        assert!(!policy.should_merge(&item("Name", 0.0, 20.0), &item("Age", 50.0, 60.0)));
    }

    #[test]
    fn test_strict_join_stops_at_bullets_and_headings() {
        let policy = StrictPolicy::new(5.0, 12.0);
        let body = item("wrapped text", 0.0, 100.0);
        assert!(policy.continues_paragraph(&body, &item("continues here", 0.0, 80.0)));
        assert!(!policy.continues_paragraph(&body, &item("• first point", 0.0, 80.0)));
        assert!(!policy.continues_paragraph(&body, &item("2. second point", 0.0, 80.0)));

        let mut heading = item("Introduction", 0.0, 100.0);
        heading.font_size = 18.0;
        assert!(!policy.continues_paragraph(&body, &heading));
    }

    #[test]
    fn test_strict_heading_keeps_following_line_out() {
        let policy = StrictPolicy::new(5.0, 12.0);
        let mut heading = item("Introduction", 0.0, 100.0).with_ends_line(true);
        heading.font_size = 18.0;
        assert!(!policy.continues_paragraph(&heading, &item("Body text", 0.0, 80.0)));
    }

    #[test]
    fn test_strict_row_alignment() {
        let policy = StrictPolicy::new(5.0, 12.0);
        let header = Line::with_items(
            100.0,
            vec![item("Name", 0.0, 40.0), item("Age", 100.0, 130.0)],
        );
        let aligned = Line::with_items(
            80.0,
            vec![item("Alice", 0.0, 35.0), item("30", 105.0, 120.0)],
        );
        let shifted = Line::with_items(
            60.0,
            vec![item("Bob the builder", 0.0, 110.0), item("41", 115.0, 130.0)],
        );
        assert!(policy.row_aligns(&header, &aligned));
        assert!(!policy.row_aligns(&header, &shifted));
    }

    #[test]
    fn test_starts_with_bullet() {
        assert!(starts_with_bullet("• item"));
        assert!(starts_with_bullet("  - item"));
        assert!(starts_with_bullet("* item"));
        assert!(starts_with_bullet("12. item"));
        assert!(starts_with_bullet("3) item"));
        assert!(!starts_with_bullet("-based approach"));
        assert!(!starts_with_bullet("2024 was a year"));
        assert!(!starts_with_bullet("3.14 is pi"));
        assert!(!starts_with_bullet(""));
    }

    #[test]
    fn test_create_policy() {
        let reference = create_policy(&ReconstructionConfig::default());
        assert_eq!(reference.name(), "ReferencePolicy");
        let strict = create_policy(&ReconstructionConfig::default().with_policy(PolicyKind::Strict));
        assert_eq!(strict.name(), "StrictPolicy");
    }
}
