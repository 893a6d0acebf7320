//! System prompt sent with every critique request.

pub const COUNTER_VIEW_PROMPT: &str = include_str!("counter_view_prompt.md");
