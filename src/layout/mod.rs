//! Layout reconstruction stages.
//!
//! Each page runs through:
//! - line clustering (items → lines by baseline proximity)
//! - run merging (fragments → left-to-right runs)
//! - paragraph joining (wrapped lines → one logical line)
//!
//! Table segmentation then runs once over the assembled document.

pub mod clustering;
pub mod paragraph;
pub mod policy;
pub mod run_merger;
pub mod table_detector;
pub mod text_block;

// Re-export main types
pub use clustering::{cluster_into_lines, line_tolerance};
pub use paragraph::{join_paragraphs, JoinedLines};
pub use policy::{create_policy, LineSegmentationPolicy, ReferencePolicy, StrictPolicy};
pub use run_merger::merge_runs;
pub use table_detector::{detect_tables, segment_tables, Segmentation};
pub use text_block::{Line, TextItem};
