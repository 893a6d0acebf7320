//! Client for the chat-completion API that produces the counter view.

use counterview_protocol::{ApiErrorEnvelope, ChatCompletionRequest, ChatCompletionResponse};
use tracing::{debug, info};

use crate::error::{CliError, Result};

pub struct ChatClient {
	http: reqwest::Client,
	endpoint: String,
	api_key: String,
}

impl ChatClient {
	pub fn new(http: reqwest::Client, endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
		Self {
			http,
			endpoint: endpoint.into(),
			api_key: api_key.into(),
		}
	}

	/// Send `request` and return the first choice's message content.
	pub async fn complete(&self, request: &ChatCompletionRequest) -> Result<String> {
		info!(target = "counterview", endpoint = %self.endpoint, model = %request.model, "requesting completion");

		let response = self.http.post(&self.endpoint).bearer_auth(&self.api_key).json(request).send().await?;
		let status = response.status();
		let body = response.text().await?;
		debug!(target = "counterview", status = status.as_u16(), bytes = body.len(), "completion response received");

		if !status.is_success() {
			let message = serde_json::from_str::<ApiErrorEnvelope>(&body)
				.map(|envelope| envelope.error.message)
				.unwrap_or_else(|_| body.trim().to_string());
			return Err(CliError::Api {
				status: status.as_u16(),
				message,
			});
		}

		let parsed: ChatCompletionResponse = serde_json::from_str(&body).map_err(|err| CliError::Api {
			status: status.as_u16(),
			message: format!("malformed completion response: {err}"),
		})?;
		parsed
			.first_content()
			.map(str::trim)
			.filter(|content| !content.is_empty())
			.map(str::to_string)
			.ok_or_else(|| CliError::Api {
				status: status.as_u16(),
				message: "response contained no message content".to_string(),
			})
	}
}
