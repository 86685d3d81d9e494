//! Password analysis
//!
//! Pure metrics over a single password plus the checks feeding the strength
//! evaluation. Nothing here draws randomness or touches the output stream.

mod blacklist;
mod entropy;
mod length;
mod pattern;
mod strength;
mod variety;

pub use blacklist::blacklist_section;
pub use entropy::{compression_ratio, estimated_entropy, shannon_entropy};
pub use length::length_section;
pub use pattern::{pattern_analysis_section, pattern_uniqueness};
pub use strength::evaluate_password_strength;
pub use variety::{Coverage, character_diversity, character_variety_section, class_coverage};

/// Result of one strength check.
/// - `Some(reason)` - check failed with reason
/// - `None` - check passed
pub type SectionResult = Option<String>;
