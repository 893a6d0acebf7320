//! The individual content-location heuristics.

use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::extract::config::ExtractionRules;
use crate::extract::document::{Document, visible_text};
use crate::extract::text::{normalize, tidy_block};
use crate::extract::types::Candidate;

/// One heuristic in the extraction chain, listed in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
	/// First well-known content container (`article`, `main`, ...).
	Semantic,
	/// All substantive paragraphs joined by blank lines.
	Paragraphs,
	/// The structural element holding the most text.
	LargestContainer,
	/// The longest mid-sized text block.
	LongestBlock,
	/// All visible text of the page body.
	WholeDocument,
}

impl Strategy {
	pub const CHAIN: [Strategy; 5] = [
		Strategy::Semantic,
		Strategy::Paragraphs,
		Strategy::LargestContainer,
		Strategy::LongestBlock,
		Strategy::WholeDocument,
	];

	pub fn name(self) -> &'static str {
		match self {
			Strategy::Semantic => "semantic",
			Strategy::Paragraphs => "paragraphs",
			Strategy::LargestContainer => "largest_container",
			Strategy::LongestBlock => "longest_block",
			Strategy::WholeDocument => "whole_document",
		}
	}

	/// Run this strategy alone. `None` means no match or too little text.
	pub fn run(self, document: &Document, rules: &ExtractionRules) -> Option<Candidate> {
		match self {
			Strategy::Semantic => semantic_container(document, rules),
			Strategy::Paragraphs => paragraphs(document, rules),
			Strategy::LargestContainer => largest_container(document, rules),
			Strategy::LongestBlock => longest_block(document, rules),
			Strategy::WholeDocument => whole_document(document, rules),
		}
	}
}

impl fmt::Display for Strategy {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

fn semantic_container(document: &Document, rules: &ExtractionRules) -> Option<Candidate> {
	let min_chars = rules.thresholds().min_content_chars;

	for content in &rules.content_selectors {
		let Some(element) = document.select_first(&content.selector) else {
			continue;
		};
		if let Some(candidate) = Candidate::new(normalize(&visible_text(element))).accept(min_chars) {
			debug!(target = "counterview", selector = %content.source, chars = candidate.length, "content selector matched");
			return Some(candidate);
		}
	}

	None
}

fn paragraphs(document: &Document, rules: &ExtractionRules) -> Option<Candidate> {
	let thresholds = rules.thresholds();

	let kept: Vec<String> = document
		.select_all(&rules.paragraphs)
		.map(|paragraph| visible_text(paragraph).trim().to_string())
		.filter(|text| text.chars().count() >= thresholds.min_paragraph_chars && !rules.is_navigation(text))
		.collect();

	debug!(target = "counterview", paragraphs = kept.len(), "collected paragraphs");
	Candidate::new(kept.join("\n\n")).accept(thresholds.min_content_chars)
}

fn largest_container(document: &Document, rules: &ExtractionRules) -> Option<Candidate> {
	let thresholds = rules.thresholds();

	let mut largest = None;
	let mut largest_len = thresholds.min_container_chars;
	for element in document.select_all(&rules.containers) {
		let len = visible_text(element).chars().count();
		if len > largest_len {
			largest_len = len;
			largest = Some(element);
		}
	}

	Candidate::new(normalize(&visible_text(largest?))).accept(thresholds.min_content_chars)
}

fn longest_block(document: &Document, rules: &ExtractionRules) -> Option<Candidate> {
	let thresholds = rules.thresholds();

	let mut blocks: Vec<(usize, String)> = document
		.select_all(&rules.blocks)
		.filter_map(|element| {
			let text = visible_text(element);
			let len = text.trim().chars().count();
			(len > thresholds.min_block_chars && len < thresholds.max_block_chars).then_some((len, text))
		})
		.collect();

	// stable: equal lengths keep document order
	blocks.sort_by(|a, b| b.0.cmp(&a.0));
	let (_, text) = blocks.into_iter().next()?;

	Candidate::new(tidy_block(&text)).accept(thresholds.min_content_chars)
}

fn whole_document(document: &Document, rules: &ExtractionRules) -> Option<Candidate> {
	let body = document.body()?;
	Candidate::new(tidy_block(&visible_text(body))).accept(rules.thresholds().min_content_chars)
}
