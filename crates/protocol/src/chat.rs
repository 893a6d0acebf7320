use serde::{Deserialize, Serialize};

/// Author of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
	System,
	User,
	Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
	pub role: Role,
	pub content: String,
}

impl ChatMessage {
	pub fn system(content: impl Into<String>) -> Self {
		Self {
			role: Role::System,
			content: content.into(),
		}
	}

	pub fn user(content: impl Into<String>) -> Self {
		Self {
			role: Role::User,
			content: content.into(),
		}
	}
}

/// Body of `POST /v1/chat/completions`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatCompletionRequest {
	pub model: String,
	pub messages: Vec<ChatMessage>,
}

impl ChatCompletionRequest {
	/// A system prompt followed by the text to respond to.
	pub fn critique(model: impl Into<String>, system_prompt: impl Into<String>, text: impl Into<String>) -> Self {
		Self {
			model: model.into(),
			messages: vec![ChatMessage::system(system_prompt), ChatMessage::user(text)],
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatCompletionResponse {
	#[serde(default)]
	pub id: Option<String>,
	#[serde(default)]
	pub model: Option<String>,
	#[serde(default)]
	pub choices: Vec<Choice>,
}

impl ChatCompletionResponse {
	/// Content of the first choice, if the API returned one.
	pub fn first_content(&self) -> Option<&str> {
		self.choices.first().map(|choice| choice.message.content.as_str())
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
	#[serde(default)]
	pub index: u32,
	pub message: ChatMessage,
	#[serde(default)]
	pub finish_reason: Option<String>,
}
