//! Where the HTML to extract from comes from.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use tokio::io::AsyncReadExt;
use tracing::info;
use url::Url;

use crate::error::{CliError, Result};

const USER_AGENT: &str = concat!("counterview/", env!("CARGO_PKG_VERSION"));
const HTTP_TIMEOUT: Duration = Duration::from_secs(60);

/// Shared HTTP client for page fetches and API calls.
pub fn http_client() -> Result<reqwest::Client> {
	Ok(reqwest::Client::builder().user_agent(USER_AGENT).timeout(HTTP_TIMEOUT).build()?)
}

/// An HTML document location given on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
	Stdin,
	File(PathBuf),
	Url(Url),
}

impl Source {
	/// `-` is stdin, `http(s)://` is fetched, `file://` and anything else
	/// is a file path.
	pub fn parse(raw: &str) -> Self {
		if raw == "-" {
			return Source::Stdin;
		}
		match Url::parse(raw) {
			Ok(url) if matches!(url.scheme(), "http" | "https") => Source::Url(url),
			Ok(url) if url.scheme() == "file" => match url.to_file_path() {
				Ok(path) => Source::File(path),
				Err(()) => Source::File(PathBuf::from(raw)),
			},
			_ => Source::File(PathBuf::from(raw)),
		}
	}

	pub async fn load(&self, http: &reqwest::Client) -> Result<String> {
		match self {
			Source::Stdin => {
				let mut bytes = Vec::new();
				tokio::io::stdin().read_to_end(&mut bytes).await?;
				Ok(String::from_utf8_lossy(&bytes).into_owned())
			}
			Source::File(path) => {
				let bytes = tokio::fs::read(path).await?;
				Ok(String::from_utf8_lossy(&bytes).into_owned())
			}
			Source::Url(url) => {
				info!(target = "counterview", %url, "fetching page");
				let response = http.get(url.clone()).send().await?;
				let status = response.status();
				if !status.is_success() {
					return Err(CliError::Fetch {
						url: url.to_string(),
						status: status.as_u16(),
					});
				}
				Ok(response.text().await?)
			}
		}
	}
}

impl fmt::Display for Source {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Source::Stdin => f.write_str("-"),
			Source::File(path) => write!(f, "{}", path.display()),
			Source::Url(url) => write!(f, "{url}"),
		}
	}
}
