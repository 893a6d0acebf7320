//! Display truncation for extracted text.
//!
//! Previews are for people looking at the result. Text handed to
//! downstream processing is never passed through here.

use serde::Serialize;

/// Default preview length in characters.
pub const DEFAULT_PREVIEW_CHARS: usize = 2000;

const ELLIPSIS: &str = "...";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Preview {
	pub text: String,
	/// Whether `text` was cut and an ellipsis appended.
	pub truncated: bool,
}

impl Preview {
	pub fn of(text: &str, max_chars: usize) -> Self {
		match text.char_indices().nth(max_chars) {
			Some((cut, _)) => Self {
				text: format!("{}{ELLIPSIS}", &text[..cut]),
				truncated: true,
			},
			None => Self {
				text: text.to_string(),
				truncated: false,
			},
		}
	}
}
