#![allow(dead_code)]

use std::path::Path;

use assert_cmd::Command;
use docsync_core::AnyEmptyResult;
use insta_cmd::get_cargo_bin;

pub const README: &str = "# Demo\n\nThis crate renders things.\n\n* Feature A does X.\n\n## \
                          Examples\n\nOLD\n\n*\n\n## Crates.io\n";

pub const HEADER: &str = "//! old header\n\npub fn demo() {}\n";

pub const EXAMPLE: &str = "fn main() {\n    let x = 1;\n}\n";

pub fn docsync_cmd() -> Command {
	let mut cmd = Command::new(get_cargo_bin("docsync"));
	cmd.env("NO_COLOR", "1");
	cmd.env_remove("RUST_LOG");
	cmd
}

/// Lay out a project with a readme, a `src/lib.rs` header and the given
/// examples.
pub fn write_project(root: &Path, examples: &[(&str, &str)]) -> AnyEmptyResult {
	std::fs::create_dir_all(root.join("examples"))?;
	std::fs::create_dir_all(root.join("src"))?;
	std::fs::write(root.join("README.md"), README)?;
	std::fs::write(root.join("src/lib.rs"), HEADER)?;
	for (name, content) in examples {
		std::fs::write(root.join("examples").join(name), content)?;
	}
	Ok(())
}
