//! Shared text cleanup helpers.

use crate::extract::config::default_rules;

/// Collapse every whitespace run to a single space and trim the ends.
pub fn normalize(text: &str) -> String {
	text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Normalize each line on its own and drop the blank ones.
pub fn tidy_block(text: &str) -> String {
	text.lines().map(normalize).filter(|line| !line.is_empty()).collect::<Vec<_>>().join("\n")
}

/// Whether `text` is page chrome such as a menu label, share counter or
/// social link, matched against the default rules.
///
/// Only whole strings match: "Home" is navigation, "Homeowners insurance"
/// is not.
pub fn is_likely_navigation(text: &str) -> bool {
	default_rules().is_navigation(text)
}
