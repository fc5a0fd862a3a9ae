//! Record extraction from existing mock modules.
//!
//! Text is split into innermost brace blocks, then each block is matched
//! against an ordered [`BlockPattern`]. Blocks that do not carry every field
//! in order are skipped.

pub mod errors;
pub mod pattern;
pub mod records;
pub mod scanner;

pub use errors::ExtractError;
pub use pattern::{BlockPattern, ExtractedBlock, Extraction, FieldKind, FieldValue, extract_blocks};
pub use records::{CustomerExtraction, LegacyExtraction, extract_customers, extract_legacy_saving_books};
pub use scanner::scan_blocks;
