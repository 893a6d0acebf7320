pub mod api;
pub mod cli;
pub mod commands;
pub mod error;
pub mod logging;
pub mod output;
pub mod prompt;
pub mod settings;
pub mod source;
