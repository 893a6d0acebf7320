//! Strategy dispatch.

use std::sync::Arc;

use tracing::debug;

use crate::extract::config::{ExtractionRules, default_rules};
use crate::extract::document::Document;
use crate::extract::strategy::Strategy;
use crate::extract::types::{Extraction, ExtractionResult};

/// Runs [`Strategy::CHAIN`] against documents.
///
/// Holds only immutable rules, so one extractor can serve any number of
/// documents and calls.
#[derive(Debug, Clone)]
pub struct Extractor {
	rules: Arc<ExtractionRules>,
}

impl Default for Extractor {
	fn default() -> Self {
		Self::new()
	}
}

impl Extractor {
	/// Extractor using the embedded default rules.
	pub fn new() -> Self {
		Self { rules: default_rules() }
	}

	pub fn with_rules(rules: ExtractionRules) -> Self {
		Self { rules: Arc::new(rules) }
	}

	pub fn rules(&self) -> &ExtractionRules {
		&self.rules
	}

	/// Evaluate strategies in order and return the first success.
	pub fn run(&self, document: &Document) -> Option<Extraction> {
		let extraction = Strategy::CHAIN.into_iter().find_map(|strategy| {
			let candidate = strategy.run(document, &self.rules);
			debug!(target = "counterview", %strategy, matched = candidate.is_some(), "strategy evaluated");
			candidate.map(|candidate| Extraction { strategy, candidate })
		});

		match &extraction {
			Some(found) => debug!(target = "counterview", strategy = %found.strategy, chars = found.candidate.length, "main content found"),
			None => debug!(target = "counterview", "no main content found"),
		}

		extraction
	}

	pub fn extract(&self, document: &Document) -> ExtractionResult {
		self.run(document).into()
	}
}

/// Extract main content with the default rules.
pub fn extract(document: &Document) -> ExtractionResult {
	Extractor::new().extract(document)
}
