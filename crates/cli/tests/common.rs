//! Helpers shared by the binary integration tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::Command;

use serde_json::Value;
use tempfile::TempDir;

pub const ARTICLE_PAGE: &str = r#"<html><head><title>Budget vote</title></head><body>
<nav><a href="/">Home</a> <a href="/menu">Menu</a></nav>
<article>
<h1>Council passes the budget</h1>
<p>The city council approved next year's budget on Tuesday after a long debate about transit funding and road repairs.</p>
<p>Opponents argued that the plan underfunds libraries, while supporters pointed to the lower property tax rate.</p>
</article>
<footer>Copyright 2026</footer>
</body></html>"#;

pub const EMPTY_PAGE: &str = "<html><head><title>Loading</title></head><body><div id=\"app\"></div><script>boot()</script></body></html>";

pub struct Workspace {
	dir: TempDir,
}

impl Workspace {
	pub fn new() -> Self {
		Self {
			dir: tempfile::tempdir().expect("tempdir"),
		}
	}

	pub fn path(&self) -> &Path {
		self.dir.path()
	}

	pub fn settings_path(&self) -> PathBuf {
		self.dir.path().join("settings.json")
	}

	pub fn write_page(&self, name: &str, html: &str) -> PathBuf {
		let path = self.dir.path().join(name);
		std::fs::write(&path, html).expect("write page");
		path
	}

	/// Runs the binary with this workspace's settings file and no ambient API key.
	pub fn run(&self, args: &[&str]) -> (bool, String, String) {
		run_with_settings(&self.settings_path(), args)
	}
}

pub fn run_with_settings(settings: &Path, args: &[&str]) -> (bool, String, String) {
	let output = Command::new(env!("CARGO_BIN_EXE_counterview"))
		.arg("--settings")
		.arg(settings)
		.args(args)
		.env_remove("COUNTERVIEW_API_KEY")
		.env_remove("COUNTERVIEW_SETTINGS")
		.env_remove("RUST_LOG")
		.output()
		.expect("failed to execute counterview");

	let stdout = String::from_utf8_lossy(&output.stdout).to_string();
	let stderr = String::from_utf8_lossy(&output.stderr).to_string();
	(output.status.success(), stdout, stderr)
}

pub fn parse_json(stdout: &str, stderr: &str) -> Value {
	serde_json::from_str(stdout).unwrap_or_else(|err| panic!("Expected JSON stdout: {err}\nstdout:\n{stdout}\nstderr:\n{stderr}"))
}
