use std::path::PathBuf;

use counterview_protocol::ChatCompletionRequest;

use crate::api::ChatClient;
use crate::cli::CritiqueArgs;
use crate::commands::extract::{extract_from, load_extractor};
use crate::error::{CliError, Result};
use crate::output::CritiqueData;
use crate::prompt::COUNTER_VIEW_PROMPT;
use crate::settings::SettingsStore;
use crate::source::{Source, http_client};

pub(super) async fn run(args: CritiqueArgs, settings_path: Option<PathBuf>) -> Result<CritiqueData> {
	let store = SettingsStore::open(settings_path)?;
	// before any fetch
	let api_key = args.api_key.or(store.settings.api_key).filter(|key| !key.trim().is_empty()).ok_or(CliError::MissingApiKey)?;

	let (text, strategy) = match (args.text, args.source) {
		(Some(text), _) => {
			let text = text.trim();
			if text.is_empty() {
				return Err(CliError::InvalidInput("selected text is empty".to_string()));
			}
			(text.to_string(), None)
		}
		(None, Some(raw)) => {
			let extractor = load_extractor(args.rules.as_deref())?;
			let (_, extraction) = extract_from(&Source::parse(&raw), &extractor).await?;
			let extraction = extraction.ok_or(CliError::ContentNotFound)?;
			(extraction.candidate.text, Some(extraction.strategy))
		}
		(None, None) => return Err(CliError::InvalidInput("pass a page source or --text".to_string())),
	};

	let model = args.model.unwrap_or(store.settings.model);
	let endpoint = args.endpoint.unwrap_or(store.settings.endpoint);

	let request = ChatCompletionRequest::critique(model.clone(), COUNTER_VIEW_PROMPT, text.clone());
	let critique = ChatClient::new(http_client()?, endpoint, api_key).complete(&request).await?;

	Ok(CritiqueData {
		model,
		strategy,
		source_chars: text.chars().count(),
		critique,
	})
}
