use std::path::PathBuf;

use crate::cli::SettingsAction;
use crate::error::Result;
use crate::output::SettingsData;
use crate::settings::SettingsStore;

pub(super) fn run(action: SettingsAction, settings_path: Option<PathBuf>) -> Result<SettingsData> {
	let mut store = SettingsStore::open(settings_path)?;

	if let SettingsAction::Set { key, value } = action {
		store.set(key, &value)?;
		store.save()?;
	}

	Ok(SettingsData {
		path: store.path().to_path_buf(),
		api_key: store.settings.masked_api_key(),
		endpoint: store.settings.endpoint.clone(),
		model: store.settings.model.clone(),
		preview_chars: store.settings.preview_chars,
	})
}
