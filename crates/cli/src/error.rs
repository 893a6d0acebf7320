use thiserror::Error;

use crate::output::ErrorCode;

#[derive(Debug, Error)]
pub enum CliError {
	#[error("I/O error: {0}")]
	Io(#[from] std::io::Error),

	#[error("JSON error: {0}")]
	Json(#[from] serde_json::Error),

	#[error("HTTP request failed: {0}")]
	Http(#[from] reqwest::Error),

	#[error(transparent)]
	Rules(#[from] counterview::ExtractError),

	#[error("invalid input: {0}")]
	InvalidInput(String),

	#[error("failed to fetch {url}: HTTP {status}")]
	Fetch { url: String, status: u16 },

	#[error("No main content found; the page may load its content dynamically. Select the text manually and pass it with --text.")]
	ContentNotFound,

	#[error("no API key configured; pass --api-key, set COUNTERVIEW_API_KEY, or run `counterview settings set api-key <KEY>`")]
	MissingApiKey,

	#[error("API request failed with HTTP {status}: {message}")]
	Api { status: u16, message: String },

	#[error("settings error: {0}")]
	Settings(String),
}

impl CliError {
	pub fn code(&self) -> ErrorCode {
		match self {
			CliError::Io(_) => ErrorCode::IoError,
			CliError::Json(_) => ErrorCode::InternalError,
			CliError::Http(_) => ErrorCode::NetworkError,
			CliError::Rules(_) | CliError::InvalidInput(_) => ErrorCode::InvalidInput,
			CliError::Fetch { .. } => ErrorCode::FetchFailed,
			CliError::ContentNotFound => ErrorCode::ContentNotFound,
			CliError::MissingApiKey => ErrorCode::AuthError,
			CliError::Api { status: 401 | 403, .. } => ErrorCode::AuthError,
			CliError::Api { .. } => ErrorCode::ApiError,
			CliError::Settings(_) => ErrorCode::SettingsError,
		}
	}
}

pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn maps_errors_to_codes() {
		assert_eq!(CliError::ContentNotFound.code(), ErrorCode::ContentNotFound);
		assert_eq!(CliError::MissingApiKey.code(), ErrorCode::AuthError);
		assert_eq!(
			CliError::Api {
				status: 401,
				message: "bad key".into()
			}
			.code(),
			ErrorCode::AuthError
		);
		assert_eq!(
			CliError::Api {
				status: 500,
				message: "boom".into()
			}
			.code(),
			ErrorCode::ApiError
		);
	}

	#[test]
	fn not_found_message_asks_for_manual_selection() {
		let message = CliError::ContentNotFound.to_string();
		assert!(message.contains("dynamically"));
		assert!(message.contains("--text"));
	}
}
