//! # PDF Structure
//!
//! Reconstructs the logical structure of a paginated document from the
//! positioned text runs a PDF content-stream reader produces.
//!
//! ## Core Features
//!
//! - **Line Clustering**: groups runs sharing a baseline, top of page first
//! - **Run Merging**: folds fragments of a line into left-to-right runs
//! - **Paragraph Joining**: collapses wrapped lines into one logical line
//! - **Table Segmentation**: turns runs of multi-column lines into tables
//! - **Pluggable Heuristics**: [`LineSegmentationPolicy`] gates every merge,
//!   join and table decision
//!
//! ## Quick Start
//!
//! ```
//! use pdf_structure::{DocumentAssembler, DocumentProfile, TextItem};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let page = vec![
//!     TextItem::new("Name", 0.0, 24.0, 100.0, 12.0),
//!     TextItem::new("Age", 50.0, 68.0, 100.0, 12.0),
//!     TextItem::new("Alice", 0.0, 30.0, 80.0, 12.0),
//!     TextItem::new("30", 50.0, 62.0, 80.0, 12.0),
//! ];
//!
//! let assembler = DocumentAssembler::with_config(DocumentProfile::Tabular.create_config())?;
//! let result = assembler.assemble(vec![page])?;
//! println!("{}", result.document.to_json()?);
//! # Ok(())
//! # }
//! ```
//!
//! ## License
//!
//! Licensed under either of:
//!
//! * Apache License, Version 2.0 ([LICENSE-APACHE](LICENSE-APACHE) or <http://www.apache.org/licenses/LICENSE-2.0>)
//! * MIT license ([LICENSE-MIT](LICENSE-MIT) or <http://opensource.org/licenses/MIT>)
//!
//! at your option.

#![warn(missing_docs)]

// Error handling
pub mod error;

// Configuration
pub mod config;

// Input adapters
pub mod extractors;

// Layout reconstruction
pub mod layout;

// Output model
pub mod document;

// Pipeline
pub mod pipeline;

// Re-exports
pub use config::{DocumentProfile, PolicyKind, ReconstructionConfig};
pub use document::{Document, Element, Table};
pub use error::{Error, Result};
pub use layout::{Line, LineSegmentationPolicy, TextItem};
pub use pipeline::{reconstruct, DocumentAssembler, Reconstruction, ReconstructionStats};

// Internal utilities
pub(crate) mod utils {
    //! Internal utility functions for the library.

    use std::cmp::Ordering;

    /// Safely compare two floating point numbers, handling NaN cases.
    ///
    /// NaN values are treated as equal to each other and greater than all other values.
    /// This ensures that sorting operations never panic due to NaN comparisons.
    #[inline]
    pub fn safe_float_cmp(a: f64, b: f64) -> Ordering {
        match (a.is_nan(), b.is_nan()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater, // NaN > all numbers
            (false, true) => Ordering::Less,    // all numbers < NaN
            (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_safe_float_cmp_normal() {
            assert_eq!(safe_float_cmp(1.0, 2.0), Ordering::Less);
            assert_eq!(safe_float_cmp(2.0, 1.0), Ordering::Greater);
            assert_eq!(safe_float_cmp(1.5, 1.5), Ordering::Equal);
        }

        #[test]
        fn test_safe_float_cmp_nan() {
            assert_eq!(safe_float_cmp(f64::NAN, f64::NAN), Ordering::Equal);
            assert_eq!(safe_float_cmp(f64::NAN, 0.0), Ordering::Greater);
            assert_eq!(safe_float_cmp(0.0, f64::NAN), Ordering::Less);
        }

        #[test]
        fn test_safe_float_cmp_infinity() {
            assert_eq!(safe_float_cmp(f64::INFINITY, f64::INFINITY), Ordering::Equal);
            assert_eq!(safe_float_cmp(f64::INFINITY, 1.0), Ordering::Greater);
            assert_eq!(safe_float_cmp(f64::NEG_INFINITY, f64::INFINITY), Ordering::Less);
        }
    }
}

// Version info
/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
