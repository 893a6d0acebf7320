//! Wire types for the chat-completion API.
//!
//! This crate contains the serde-serializable request and response shapes
//! exchanged with an OpenAI-compatible `/v1/chat/completions` endpoint.
//!
//! Types in this crate are:
//! * Pure data: no behavior beyond construction and serialization
//! * Lenient on input: unknown response fields are ignored
//!
//! Transport, authentication and retries live in the CLI.

pub mod chat;
pub mod error;

pub use chat::*;
pub use error::*;
