//! Counters collected while reconstructing a document.

use serde::{Deserialize, Serialize};

/// What one reconstruction pass did.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconstructionStats {
    /// Pages processed
    pub pages: usize,
    /// Items received
    pub items: usize,
    /// Items skipped for having empty text
    pub skipped_items: usize,
    /// Lines produced by clustering
    pub clustered_lines: usize,
    /// Fragments folded into runs
    pub run_folds: usize,
    /// Lines absorbed by paragraph joining
    pub paragraph_joins: usize,
    /// Tables built
    pub tables: usize,
    /// Table segmentation scans
    pub segmentation_iterations: usize,
    /// Table segmentation stopped at its iteration cap
    pub hit_iteration_cap: bool,
}

impl ReconstructionStats {
    /// Fold one page's counters into the running totals.
    pub fn add_page(&mut self, page: &ReconstructionStats) {
        self.pages += page.pages;
        self.items += page.items;
        self.skipped_items += page.skipped_items;
        self.clustered_lines += page.clustered_lines;
        self.run_folds += page.run_folds;
        self.paragraph_joins += page.paragraph_joins;
    }
}
