//! Extraction rules loaded from `extraction.json`.

use std::sync::{Arc, LazyLock};

use regex_lite::Regex;
use scraper::Selector;
use serde::Deserialize;

use crate::error::{ExtractError, Result};

static DEFAULT_RULES: LazyLock<Arc<ExtractionRules>> = LazyLock::new(|| {
	let json = include_str!("../extraction.json");
	Arc::new(ExtractionRules::from_json(json).expect("embedded extraction.json should be valid"))
});

pub(crate) fn default_rules() -> Arc<ExtractionRules> {
	Arc::clone(&DEFAULT_RULES)
}

/// Length limits applied by the strategy chain, in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Thresholds {
	/// Every strategy must produce more than this many characters.
	pub min_content_chars: usize,
	/// Paragraphs shorter than this are dropped before aggregation.
	pub min_paragraph_chars: usize,
	/// A container must hold more raw text than this to be ranked.
	pub min_container_chars: usize,
	/// Exclusive lower bound on text-block length.
	pub min_block_chars: usize,
	/// Exclusive upper bound on text-block length.
	pub max_block_chars: usize,
}

impl Default for Thresholds {
	fn default() -> Self {
		Self {
			min_content_chars: 100,
			min_paragraph_chars: 20,
			min_container_chars: 200,
			min_block_chars: 50,
			max_block_chars: 10_000,
		}
	}
}

#[derive(Debug, Deserialize)]
struct RawRules {
	content_selectors: Vec<String>,
	paragraph_tags: Vec<String>,
	container_tags: Vec<String>,
	block_tags: Vec<String>,
	navigation: RawNavigation,
	#[serde(default)]
	thresholds: Thresholds,
}

#[derive(Debug, Deserialize)]
struct RawNavigation {
	#[serde(default)]
	words: Vec<String>,
	#[serde(default)]
	count_nouns: Vec<String>,
	#[serde(default)]
	social_networks: Vec<String>,
}

/// A strategy-1 selector kept alongside its source text for diagnostics.
#[derive(Debug, Clone)]
pub(crate) struct ContentSelector {
	pub(crate) source: String,
	pub(crate) selector: Selector,
}

/// Compiled selectors, tag sets and navigation patterns used by the
/// strategy chain.
#[derive(Debug, Clone)]
pub struct ExtractionRules {
	pub(crate) content_selectors: Vec<ContentSelector>,
	pub(crate) paragraphs: Selector,
	pub(crate) containers: Selector,
	pub(crate) blocks: Selector,
	navigation: Option<Regex>,
	thresholds: Thresholds,
}

impl ExtractionRules {
	/// Parse and compile rules from their JSON form.
	pub fn from_json(json: &str) -> Result<Self> {
		let raw: RawRules = serde_json::from_str(json)?;

		let content_selectors = raw
			.content_selectors
			.iter()
			.map(|source| {
				Ok(ContentSelector {
					source: source.clone(),
					selector: parse_selector(source)?,
				})
			})
			.collect::<Result<Vec<_>>>()?;

		Ok(Self {
			content_selectors,
			paragraphs: tag_selector(&raw.paragraph_tags)?,
			containers: tag_selector(&raw.container_tags)?,
			blocks: tag_selector(&raw.block_tags)?,
			navigation: navigation_regex(&raw.navigation)?,
			thresholds: raw.thresholds,
		})
	}

	pub fn thresholds(&self) -> Thresholds {
		self.thresholds
	}

	/// Replace the length limits, keeping selectors and patterns.
	pub fn with_thresholds(mut self, thresholds: Thresholds) -> Self {
		self.thresholds = thresholds;
		self
	}

	/// Selector strings tried by the semantic scan, in priority order.
	pub fn content_selectors(&self) -> impl Iterator<Item = &str> {
		self.content_selectors.iter().map(|s| s.source.as_str())
	}

	/// Whole-string, case-insensitive match against the navigation patterns.
	pub fn is_navigation(&self, text: &str) -> bool {
		self.navigation.as_ref().is_some_and(|re| re.is_match(text.trim()))
	}
}

impl Default for ExtractionRules {
	fn default() -> Self {
		(*default_rules()).clone()
	}
}

fn parse_selector(source: &str) -> Result<Selector> {
	Selector::parse(source).map_err(|err| ExtractError::InvalidSelector {
		selector: source.to_string(),
		reason: err.to_string(),
	})
}

fn tag_selector(tags: &[String]) -> Result<Selector> {
	parse_selector(&tags.join(", "))
}

fn navigation_regex(navigation: &RawNavigation) -> Result<Option<Regex>> {
	let mut branches = Vec::new();

	let words = alternation(&navigation.words);
	if !words.is_empty() {
		branches.push(words);
	}
	let nouns = alternation(&navigation.count_nouns);
	if !nouns.is_empty() {
		branches.push(format!(r"\d[\d,.]*\s+(?:{nouns})s?"));
	}
	let social = alternation(&navigation.social_networks);
	if !social.is_empty() {
		branches.push(social);
	}

	if branches.is_empty() {
		return Ok(None);
	}

	let pattern = format!("(?i)^(?:{})$", branches.join("|"));
	Regex::new(&pattern).map(Some).map_err(|err| ExtractError::InvalidSelector {
		selector: pattern,
		reason: err.to_string(),
	})
}

fn alternation(items: &[String]) -> String {
	items
		.iter()
		.map(|item| item.trim())
		.filter(|item| !item.is_empty())
		.map(|item| regex_lite::escape(item).replace(' ', r"\s+"))
		.collect::<Vec<_>>()
		.join("|")
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn embedded_rules_load() {
		let rules = ExtractionRules::default();
		assert_eq!(rules.content_selectors().next(), Some("article"));
		assert_eq!(rules.thresholds(), Thresholds::default());
		assert!(rules.is_navigation("Read more"));
	}

	#[test]
	fn rejects_invalid_selector() {
		let json = r#"{
			"content_selectors": ["div[[["],
			"paragraph_tags": ["p"],
			"container_tags": ["div"],
			"block_tags": ["div"],
			"navigation": {}
		}"#;
		let err = ExtractionRules::from_json(json).unwrap_err();
		assert!(matches!(err, ExtractError::InvalidSelector { ref selector, .. } if selector == "div[[["));
	}

	#[test]
	fn rejects_malformed_json() {
		assert!(matches!(ExtractionRules::from_json("{"), Err(ExtractError::InvalidRules(_))));
	}

	#[test]
	fn thresholds_can_be_partially_overridden() {
		let json = r#"{
			"content_selectors": ["article"],
			"paragraph_tags": ["p"],
			"container_tags": ["div"],
			"block_tags": ["div"],
			"navigation": { "words": ["home"] },
			"thresholds": { "min_content_chars": 10 }
		}"#;
		let rules = ExtractionRules::from_json(json).expect("rules should parse");
		assert_eq!(rules.thresholds().min_content_chars, 10);
		assert_eq!(rules.thresholds().min_paragraph_chars, 20);
		assert!(rules.is_navigation("HOME"));
		assert!(!rules.is_navigation("facebook"));
	}

	#[test]
	fn empty_navigation_lists_match_nothing() {
		let json = r#"{
			"content_selectors": [],
			"paragraph_tags": ["p"],
			"container_tags": ["div"],
			"block_tags": ["div"],
			"navigation": {}
		}"#;
		let rules = ExtractionRules::from_json(json).expect("rules should parse");
		assert!(!rules.is_navigation(""));
		assert!(!rules.is_navigation("Home"));
	}
}
