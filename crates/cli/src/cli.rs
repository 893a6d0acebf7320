use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

use crate::output::OutputFormat;
use crate::settings::SettingKey;

#[derive(Parser, Debug)]
#[command(name = "counterview")]
#[command(about = "Extract the main text of a web page and ask a model for a counter view")]
#[command(version)]
pub struct Cli {
	/// Increase verbosity (-v info, -vv debug)
	#[arg(short, long, global = true, action = ArgAction::Count)]
	pub verbose: u8,

	/// Output format
	#[arg(short = 'f', long, global = true, value_enum, default_value_t = OutputFormat::Text)]
	pub format: OutputFormat,

	/// Settings file (defaults to the user config directory)
	#[arg(long, global = true, value_name = "FILE", env = "COUNTERVIEW_SETTINGS")]
	pub settings: Option<PathBuf>,

	#[command(subcommand)]
	pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
	/// Extract the main text of an HTML page
	Extract(ExtractArgs),

	/// Ask the model for a counter view of a page or a text selection
	Critique(CritiqueArgs),

	/// Show or change stored settings
	Settings {
		#[command(subcommand)]
		action: SettingsAction,
	},
}

#[derive(Args, Debug)]
pub struct ExtractArgs {
	/// HTML file, `-` for stdin, or an http(s) URL
	pub source: String,

	/// Truncate the text for display
	#[arg(long)]
	pub preview: bool,

	/// Preview length in characters (defaults to the stored setting)
	#[arg(long, value_name = "N", requires = "preview")]
	pub preview_chars: Option<usize>,

	/// Extraction rules JSON replacing the built-in selectors and thresholds
	#[arg(long, value_name = "FILE")]
	pub rules: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct CritiqueArgs {
	/// HTML file, `-` for stdin, or an http(s) URL
	#[arg(required_unless_present = "text")]
	pub source: Option<String>,

	/// Critique this text instead of extracting from a page
	#[arg(long, conflicts_with = "source")]
	pub text: Option<String>,

	/// API key (overrides the stored setting)
	#[arg(long, env = "COUNTERVIEW_API_KEY", hide_env_values = true)]
	pub api_key: Option<String>,

	/// Model name (overrides the stored setting)
	#[arg(long)]
	pub model: Option<String>,

	/// Chat-completion endpoint URL (overrides the stored setting)
	#[arg(long)]
	pub endpoint: Option<String>,

	/// Extraction rules JSON replacing the built-in selectors and thresholds
	#[arg(long, value_name = "FILE")]
	pub rules: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum SettingsAction {
	/// Print the effective settings (API key masked)
	Show,

	/// Store a setting
	Set {
		#[arg(value_enum)]
		key: SettingKey,
		value: String,
	},
}

#[cfg(test)]
mod tests {
	use clap::CommandFactory;

	use super::*;

	#[test]
	fn cli_definition_is_valid() {
		Cli::command().debug_assert();
	}

	#[test]
	fn critique_needs_source_or_text() {
		assert!(Cli::try_parse_from(["counterview", "critique"]).is_err());
		assert!(Cli::try_parse_from(["counterview", "critique", "--text", "hello"]).is_ok());
		assert!(Cli::try_parse_from(["counterview", "critique", "page.html", "--text", "hello"]).is_err());
	}

	#[test]
	fn parses_settings_keys_in_kebab_case() {
		let cli = Cli::try_parse_from(["counterview", "settings", "set", "preview-chars", "300"]).expect("should parse");
		match cli.command {
			Commands::Settings {
				action: SettingsAction::Set { key, value },
			} => {
				assert_eq!(key, SettingKey::PreviewChars);
				assert_eq!(value, "300");
			}
			other => panic!("unexpected command: {other:?}"),
		}
	}
}
