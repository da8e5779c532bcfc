//! Configuration for document reconstruction.

use crate::error::{Error, Result};

/// Iteration cap for table segmentation.
pub const DEFAULT_MAX_TABLE_ITERATIONS: usize = 1000;

/// Font size assumed for body text when the caller gives no better hint.
pub const DEFAULT_BASE_FONT_SIZE: f64 = 12.0;

/// Horizontal gap below which the strict policy folds two items into one run.
pub const DEFAULT_MERGE_GAP: f64 = 5.0;

/// Which segmentation heuristics the pipeline applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PolicyKind {
    /// Unconditional run merge, join on the line-wrap flag, count-only tables
    #[default]
    Reference,
    /// Gap-gated merge, heading/bullet aware joins, column-aligned tables
    Strict,
}

/// Document profile for picking a sensible configuration.
///
/// - Prose: running text where every line collapses into one run
/// - Tabular: reports and statements where columns must survive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentProfile {
    /// Paragraph-oriented documents, tables left undetected
    Prose,
    /// Documents with columnar data, tables detected
    Tabular,
}

impl DocumentProfile {
    /// Create the configuration for this profile.
    pub fn create_config(&self) -> ReconstructionConfig {
        match self {
            Self::Prose => ReconstructionConfig::default(),
            Self::Tabular => ReconstructionConfig::default()
                .with_policy(PolicyKind::Strict)
                .with_table_detection(true),
        }
    }
}

/// Settings shared by every reconstruction stage.
#[derive(Debug, Clone, PartialEq)]
pub struct ReconstructionConfig {
    /// Body font size; lines are clustered within half of it
    pub base_font_size: f64,

    /// Run the table segmenter over the assembled document
    pub detect_tables: bool,

    /// Hard cap on table segmentation passes
    pub max_table_iterations: usize,

    /// Largest gap folded into a run by the strict policy
    pub merge_gap: f64,

    /// Segmentation heuristics
    pub policy: PolicyKind,
}

impl Default for ReconstructionConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ReconstructionConfig {
    /// Create new configuration with defaults.
    pub fn new() -> Self {
        Self {
            base_font_size: DEFAULT_BASE_FONT_SIZE,
            detect_tables: false,
            max_table_iterations: DEFAULT_MAX_TABLE_ITERATIONS,
            merge_gap: DEFAULT_MERGE_GAP,
            policy: PolicyKind::Reference,
        }
    }

    /// Set the base font size.
    pub fn with_base_font_size(mut self, size: f64) -> Self {
        self.base_font_size = size;
        self
    }

    /// Enable table detection.
    pub fn with_table_detection(mut self, enable: bool) -> Self {
        self.detect_tables = enable;
        self
    }

    /// Set the table segmentation iteration cap.
    pub fn with_max_table_iterations(mut self, max: usize) -> Self {
        self.max_table_iterations = max;
        self
    }

    /// Set the strict policy's merge gap.
    pub fn with_merge_gap(mut self, gap: f64) -> Self {
        self.merge_gap = gap;
        self
    }

    /// Select the segmentation policy.
    pub fn with_policy(mut self, policy: PolicyKind) -> Self {
        self.policy = policy;
        self
    }

    /// Vertical tolerance used to decide whether two y-values share a line.
    pub fn line_tolerance(&self) -> f64 {
        0.5 * self.base_font_size
    }

    /// Check that every setting is in range.
    pub fn validate(&self) -> Result<()> {
        if !self.base_font_size.is_finite() || self.base_font_size <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "base font size must be a positive number, got {}",
                self.base_font_size
            )));
        }
        if self.max_table_iterations == 0 {
            return Err(Error::InvalidConfig(
                "table iteration cap must be at least 1".to_string(),
            ));
        }
        if !self.merge_gap.is_finite() || self.merge_gap < 0.0 {
            return Err(Error::InvalidConfig(format!(
                "merge gap must be a non-negative number, got {}",
                self.merge_gap
            )));
        }
        Ok(())
    }
}
