use std::path::PathBuf;

use counterview::Strategy;
use serde::Serialize;

/// Plain-text rendering of a payload for `--format text`.
pub trait TextOutput {
	fn to_text(&self) -> String;
}

/// Result data for the extract command.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractData {
	pub source: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub title: Option<String>,
	pub strategy: Strategy,
	/// Length of the full extracted text, before any preview cut.
	pub chars: usize,
	pub text: String,
	pub truncated: bool,
}

impl TextOutput for ExtractData {
	fn to_text(&self) -> String {
		self.text.clone()
	}
}

/// Result data for the critique command.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CritiqueData {
	pub model: String,
	/// Set when the text came from extraction rather than `--text`.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub strategy: Option<Strategy>,
	pub source_chars: usize,
	pub critique: String,
}

impl TextOutput for CritiqueData {
	fn to_text(&self) -> String {
		self.critique.clone()
	}
}

/// Result data for the settings commands.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsData {
	pub path: PathBuf,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub api_key: Option<String>,
	pub endpoint: String,
	pub model: String,
	pub preview_chars: usize,
}

impl TextOutput for SettingsData {
	fn to_text(&self) -> String {
		format!(
			"path: {}\napi-key: {}\nendpoint: {}\nmodel: {}\npreview-chars: {}",
			self.path.display(),
			self.api_key.as_deref().unwrap_or("(not set)"),
			self.endpoint,
			self.model,
			self.preview_chars
		)
	}
}
