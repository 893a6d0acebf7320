//! Main-content extraction from parsed HTML documents.
//!
//! The extractor runs a fixed chain of [`Strategy`] values. Each one is a
//! pure function of the document and the active [`ExtractionRules`]; the
//! first that produces text above its threshold wins and later strategies
//! never run. Earlier strategies are cheap and precise, later ones scan
//! more of the tree and assume less about its structure.

mod config;
mod document;
mod pipeline;
mod preview;
mod strategy;
mod text;
mod types;

pub use config::{ExtractionRules, Thresholds};
pub use document::{Document, visible_text};
pub use pipeline::{Extractor, extract};
pub use preview::{DEFAULT_PREVIEW_CHARS, Preview};
pub use strategy::Strategy;
pub use text::{is_likely_navigation, normalize, tidy_block};
pub use types::{Candidate, Extraction, ExtractionResult};
