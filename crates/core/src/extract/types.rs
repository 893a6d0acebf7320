//! Values produced by the strategy chain.

use serde::Serialize;

use crate::extract::strategy::Strategy;

/// Text proposed by a strategy, before its threshold check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
	pub text: String,
	/// Length of `text` in characters.
	pub length: usize,
}

impl Candidate {
	pub fn new(text: String) -> Self {
		let length = text.chars().count();
		Self { text, length }
	}

	/// Keep the candidate only if it is strictly longer than `min_chars`.
	pub(crate) fn accept(self, min_chars: usize) -> Option<Self> {
		(self.length > min_chars).then_some(self)
	}
}

/// The winning candidate together with the strategy that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
	pub strategy: Strategy,
	pub candidate: Candidate,
}

/// Outcome of one extraction call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "text", rename_all = "snake_case")]
pub enum ExtractionResult {
	/// Non-empty main-content text.
	Found(String),
	/// No strategy produced enough text, including the whole-page fallback.
	NotFound,
}

impl ExtractionResult {
	pub fn is_found(&self) -> bool {
		matches!(self, Self::Found(_))
	}

	pub fn text(&self) -> Option<&str> {
		match self {
			Self::Found(text) => Some(text),
			Self::NotFound => None,
		}
	}

	pub fn into_text(self) -> Option<String> {
		match self {
			Self::Found(text) => Some(text),
			Self::NotFound => None,
		}
	}
}

impl From<Option<Extraction>> for ExtractionResult {
	fn from(extraction: Option<Extraction>) -> Self {
		match extraction {
			Some(extraction) => Self::Found(extraction.candidate.text),
			None => Self::NotFound,
		}
	}
}
