use thiserror::Error;

/// Errors raised while loading extraction rules.
///
/// Running the extractor never fails; a page without usable content is
/// reported as [`crate::ExtractionResult::NotFound`].
#[derive(Debug, Error)]
pub enum ExtractError {
	#[error("invalid extraction rules: {0}")]
	InvalidRules(#[from] serde_json::Error),

	#[error("invalid selector `{selector}`: {reason}")]
	InvalidSelector { selector: String, reason: String },
}

pub type Result<T> = std::result::Result<T, ExtractError>;
