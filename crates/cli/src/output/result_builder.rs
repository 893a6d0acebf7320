use std::io::{self, Write};
use std::time::Instant;

use serde::Serialize;

use crate::output::data::TextOutput;
use crate::output::format::OutputFormat;
use crate::output::model::{CommandError, CommandResult, ErrorCode, SCHEMA_VERSION};

/// Builder for constructing command results.
pub struct ResultBuilder<T: Serialize> {
	command: String,
	data: Option<T>,
	error: Option<CommandError>,
	start_time: Instant,
}

impl<T: Serialize> ResultBuilder<T> {
	pub fn new(command: impl Into<String>) -> Self {
		Self {
			command: command.into(),
			data: None,
			error: None,
			start_time: Instant::now(),
		}
	}

	pub fn data(mut self, data: T) -> Self {
		self.data = Some(data);
		self
	}

	pub fn error(mut self, code: ErrorCode, message: impl Into<String>) -> Self {
		self.error = Some(CommandError { code, message: message.into() });
		self
	}

	pub fn build(self) -> CommandResult<T> {
		let ok = self.error.is_none() && self.data.is_some();

		CommandResult {
			schema_version: SCHEMA_VERSION,
			ok,
			command: self.command,
			data: self.data,
			error: self.error,
			duration_ms: Some(self.start_time.elapsed().as_millis() as u64),
		}
	}
}

/// Print a command result in the specified format.
///
/// JSON formats always go to stdout. In text mode the payload goes to
/// stdout and errors to stderr, so piped output only ever carries content.
pub fn print_result<T: Serialize + TextOutput>(result: &CommandResult<T>, format: OutputFormat) {
	match format {
		OutputFormat::Json => {
			if let Ok(json) = serde_json::to_string_pretty(result) {
				println!("{json}");
			}
		}
		OutputFormat::Ndjson => {
			if let Ok(json) = serde_json::to_string(result) {
				println!("{json}");
			}
		}
		OutputFormat::Text => print_result_text(result),
	}
}

fn print_result_text<T: Serialize + TextOutput>(result: &CommandResult<T>) {
	if let Some(ref error) = result.error {
		print_error_stderr(error);
		return;
	}

	if let Some(ref data) = result.data {
		let mut stdout = io::stdout().lock();
		let _ = writeln!(stdout, "{}", data.to_text());
	}
}

/// Print an error to stderr in human-readable format.
pub fn print_error_stderr(error: &CommandError) {
	eprintln!("Error [{}]: {}", error.code, error.message);
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn success_requires_data() {
		let result: CommandResult<String> = ResultBuilder::new("extract").build();
		assert!(!result.ok);

		let result = ResultBuilder::new("extract").data("text".to_string()).build();
		assert!(result.ok);
	}

	#[test]
	fn error_envelope_serializes_code() {
		let result: CommandResult<String> = ResultBuilder::new("critique").error(ErrorCode::ContentNotFound, "nothing").build();
		let json = serde_json::to_value(&result).expect("result should serialize");
		assert_eq!(json["ok"], false);
		assert_eq!(json["error"]["code"], "CONTENT_NOT_FOUND");
		assert_eq!(json["schemaVersion"], SCHEMA_VERSION);
		assert!(json.get("data").is_none());
	}
}
