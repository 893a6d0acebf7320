use std::path::{Path, PathBuf};

use counterview::{Document, Extraction, ExtractionRules, Extractor, Preview};
use tracing::info;

use crate::cli::ExtractArgs;
use crate::error::{CliError, Result};
use crate::output::ExtractData;
use crate::settings::SettingsStore;
use crate::source::{Source, http_client};

pub(super) async fn run(args: ExtractArgs, settings_path: Option<PathBuf>) -> Result<ExtractData> {
	let store = SettingsStore::open(settings_path)?;
	let source = Source::parse(&args.source);
	let extractor = load_extractor(args.rules.as_deref())?;

	let (title, extraction) = extract_from(&source, &extractor).await?;
	let Some(extraction) = extraction else {
		return Err(CliError::ContentNotFound);
	};

	let chars = extraction.candidate.length;
	let (text, truncated) = if args.preview {
		let max_chars = args.preview_chars.unwrap_or(store.settings.preview_chars);
		let preview = Preview::of(&extraction.candidate.text, max_chars);
		(preview.text, preview.truncated)
	} else {
		(extraction.candidate.text, false)
	};

	Ok(ExtractData {
		source: source.to_string(),
		title,
		strategy: extraction.strategy,
		chars,
		text,
		truncated,
	})
}

/// Built-in rules, or rules read from `path`.
pub(super) fn load_extractor(path: Option<&Path>) -> Result<Extractor> {
	match path {
		Some(path) => {
			let json = std::fs::read_to_string(path)?;
			Ok(Extractor::with_rules(ExtractionRules::from_json(&json)?))
		}
		None => Ok(Extractor::new()),
	}
}

/// Load `source` and run the extractor over it, returning the page title
/// alongside the winning extraction.
pub(super) async fn extract_from(source: &Source, extractor: &Extractor) -> Result<(Option<String>, Option<Extraction>)> {
	let html = source.load(&http_client()?).await?;
	Ok(extract_html(&html, extractor))
}

fn extract_html(html: &str, extractor: &Extractor) -> (Option<String>, Option<Extraction>) {
	let document = Document::parse(html);
	let extraction = extractor.run(&document);
	match &extraction {
		Some(found) => info!(target = "counterview", strategy = %found.strategy, chars = found.candidate.length, "extracted main content"),
		None => info!(target = "counterview", "no main content found"),
	}
	(document.title(), extraction)
}
