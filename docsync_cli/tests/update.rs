mod common;

use docsync_core::AnyEmptyResult;
use predicates::prelude::PredicateBooleanExt;
use similar_asserts::assert_eq;

const EXPECTED_README: &str = "# Demo\n\nThis crate renders things.\n\n* Feature A does X.\n\n## \
                               Examples\n\n```rust\nlet x = 1;\n```\n\n*\n\n## Crates.io\n";

const EXPECTED_HEADER: &str = "//! This crate renders things.\n//!\n//! Feature A does \
                               X.\n//!\n//! ## Examples\n//!\n//! ```rust\n//! let x = 1;\n//! \
                               ```\n//!\n//! *\n//!\n\npub fn demo() {}\n";

#[test]
fn update_rewrites_readme_and_header() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_project(tmp.path(), &[("demo.rs", common::EXAMPLE)])?;

	common::docsync_cmd()
		.arg("update")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains("Updated 2 file(s) from 1 example(s)"));

	let readme = std::fs::read_to_string(tmp.path().join("README.md"))?;
	let header = std::fs::read_to_string(tmp.path().join("src/lib.rs"))?;
	assert_eq!(readme, EXPECTED_README);
	assert_eq!(header, EXPECTED_HEADER);

	Ok(())
}

#[test]
fn update_twice_is_a_noop() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_project(tmp.path(), &[("demo.rs", common::EXAMPLE)])?;

	common::docsync_cmd()
		.arg("update")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success();
	let readme = std::fs::read_to_string(tmp.path().join("README.md"))?;
	let header = std::fs::read_to_string(tmp.path().join("src/lib.rs"))?;

	common::docsync_cmd()
		.arg("update")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains("already up to date"));

	assert_eq!(
		std::fs::read_to_string(tmp.path().join("README.md"))?,
		readme
	);
	assert_eq!(
		std::fs::read_to_string(tmp.path().join("src/lib.rs"))?,
		header
	);

	Ok(())
}

#[test]
fn update_dry_run_does_not_write() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_project(tmp.path(), &[("demo.rs", common::EXAMPLE)])?;

	common::docsync_cmd()
		.arg("update")
		.arg("--dry-run")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(
			predicates::str::contains("would update 2 file(s)")
				.and(predicates::str::contains("README.md"))
				.and(predicates::str::contains("lib.rs")),
		);

	assert_eq!(
		std::fs::read_to_string(tmp.path().join("README.md"))?,
		common::README
	);
	assert_eq!(
		std::fs::read_to_string(tmp.path().join("src/lib.rs"))?,
		common::HEADER
	);

	Ok(())
}

#[test]
fn update_without_anchors_leaves_files_alone() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_project(tmp.path(), &[("demo.rs", common::EXAMPLE)])?;
	std::fs::write(tmp.path().join("README.md"), "# Demo\n\nNo markers here.\n")?;

	common::docsync_cmd()
		.arg("update")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains("already up to date"));

	assert_eq!(
		std::fs::read_to_string(tmp.path().join("src/lib.rs"))?,
		common::HEADER
	);

	Ok(())
}

#[test]
fn update_fails_on_missing_priority_example() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_project(tmp.path(), &[("demo.rs", common::EXAMPLE)])?;
	std::fs::write(
		tmp.path().join("docsync.toml"),
		"[examples]\npriority = [\"gone.rs\"]\n",
	)?;

	common::docsync_cmd()
		.arg("update")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.code(2)
		.stderr(predicates::str::contains("gone.rs"));

	assert_eq!(
		std::fs::read_to_string(tmp.path().join("README.md"))?,
		common::README
	);

	Ok(())
}

#[test]
fn update_skips_missing_priority_example_when_configured() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_project(tmp.path(), &[("demo.rs", common::EXAMPLE)])?;
	std::fs::write(
		tmp.path().join("docsync.toml"),
		"[examples]\npriority = [\"gone.rs\"]\non_missing = \"skip\"\n",
	)?;

	common::docsync_cmd()
		.arg("update")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stderr(predicates::str::contains("priority example not found"));

	assert_eq!(
		std::fs::read_to_string(tmp.path().join("README.md"))?,
		EXPECTED_README
	);

	Ok(())
}

#[test]
fn update_fails_when_readme_is_missing() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_project(tmp.path(), &[("demo.rs", common::EXAMPLE)])?;
	std::fs::remove_file(tmp.path().join("README.md"))?;

	common::docsync_cmd()
		.arg("update")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.code(2)
		.stderr(predicates::str::contains("failed to read"));

	assert_eq!(
		std::fs::read_to_string(tmp.path().join("src/lib.rs"))?,
		common::HEADER
	);

	Ok(())
}
