//! Persistent settings for the critique requester.
//!
//! Stored as JSON in `~/.config/counterview/settings.json` unless a path is
//! given with `--settings`. A missing or unreadable file yields defaults.

use std::fs;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use counterview::DEFAULT_PREVIEW_CHARS;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{CliError, Result};

pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "gpt-5-mini";

/// Settings file contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub api_key: Option<String>,
	#[serde(default = "default_endpoint")]
	pub endpoint: String,
	#[serde(default = "default_model")]
	pub model: String,
	#[serde(default = "default_preview_chars")]
	pub preview_chars: usize,
}

fn default_endpoint() -> String {
	DEFAULT_ENDPOINT.to_string()
}

fn default_model() -> String {
	DEFAULT_MODEL.to_string()
}

fn default_preview_chars() -> usize {
	DEFAULT_PREVIEW_CHARS
}

impl Default for Settings {
	fn default() -> Self {
		Self {
			api_key: None,
			endpoint: default_endpoint(),
			model: default_model(),
			preview_chars: default_preview_chars(),
		}
	}
}

impl Settings {
	/// The API key with all but its last four characters hidden.
	pub fn masked_api_key(&self) -> Option<String> {
		let key = self.api_key.as_deref()?;
		let chars: Vec<char> = key.chars().collect();
		if chars.len() <= 4 {
			return Some("****".to_string());
		}
		let tail: String = chars[chars.len() - 4..].iter().collect();
		Some(format!("****{tail}"))
	}
}

/// Settings that can be changed with `settings set`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SettingKey {
	ApiKey,
	Endpoint,
	Model,
	PreviewChars,
}

/// A settings file with its location.
#[derive(Debug)]
pub struct SettingsStore {
	path: PathBuf,
	pub settings: Settings,
}

impl SettingsStore {
	pub fn default_path() -> Result<PathBuf> {
		dirs::config_dir()
			.map(|dir| dir.join("counterview").join("settings.json"))
			.ok_or_else(|| CliError::Settings("could not determine the user config directory".to_string()))
	}

	/// Open the store at `path`, or at the default location.
	pub fn open(path: Option<PathBuf>) -> Result<Self> {
		let path = match path {
			Some(path) => path,
			None => Self::default_path()?,
		};
		Ok(Self::load(path))
	}

	pub fn load(path: PathBuf) -> Self {
		let settings = match fs::read_to_string(&path) {
			Ok(content) => serde_json::from_str(&content).unwrap_or_else(|err| {
				warn!(target = "counterview", path = %path.display(), error = %err, "ignoring unreadable settings file");
				Settings::default()
			}),
			Err(_) => Settings::default(),
		};
		Self { path, settings }
	}

	pub fn path(&self) -> &Path {
		&self.path
	}

	pub fn set(&mut self, key: SettingKey, value: &str) -> Result<()> {
		let value = value.trim();
		match key {
			SettingKey::ApiKey => self.settings.api_key = (!value.is_empty()).then(|| value.to_string()),
			SettingKey::Endpoint => {
				let url = url::Url::parse(value).map_err(|err| CliError::InvalidInput(format!("endpoint `{value}` is not a URL: {err}")))?;
				self.settings.endpoint = url.to_string();
			}
			SettingKey::Model => {
				if value.is_empty() {
					return Err(CliError::InvalidInput("model must not be empty".to_string()));
				}
				self.settings.model = value.to_string();
			}
			SettingKey::PreviewChars => {
				self.settings.preview_chars = value
					.parse()
					.map_err(|_| CliError::InvalidInput(format!("preview-chars must be a non-negative integer, got `{value}`")))?;
			}
		}
		Ok(())
	}

	pub fn save(&self) -> Result<()> {
		if let Some(parent) = self.path.parent() {
			fs::create_dir_all(parent)?;
		}
		let json = serde_json::to_string_pretty(&self.settings)?;
		fs::write(&self.path, json)?;
		Ok(())
	}
}
