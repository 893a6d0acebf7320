use serde::{Deserialize, Serialize};

/// Error body returned by the API on non-success status codes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorEnvelope {
	pub error: ApiErrorDetail,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorDetail {
	pub message: String,
	#[serde(default, rename = "type")]
	pub kind: Option<String>,
	#[serde(default)]
	pub code: Option<String>,
}
