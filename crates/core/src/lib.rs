//! Template-free main-content extraction.
//!
//! [`extract`] takes a parsed [`Document`] and walks a fixed chain of
//! strategies, from cheap semantic selectors down to the whole page text,
//! stopping at the first one whose output clears its length threshold.

mod error;
pub mod extract;

pub use error::{ExtractError, Result};
pub use extract::{
	Candidate, DEFAULT_PREVIEW_CHARS, Document, Extraction, ExtractionResult, ExtractionRules, Extractor, Preview, Strategy, Thresholds, extract,
	is_likely_navigation, normalize,
};
