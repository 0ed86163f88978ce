mod common;

use docsync_core::AnyEmptyResult;
use docsync_core::AnyResult;
use predicates::prelude::PredicateBooleanExt;
use rstest::rstest;
use serde_json::Value;

fn synced_project() -> AnyResult<tempfile::TempDir> {
	let tmp = tempfile::tempdir()?;
	common::write_project(tmp.path(), &[("demo.rs", common::EXAMPLE)])?;
	common::docsync_cmd()
		.arg("update")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success();
	Ok(tmp)
}

#[test]
fn check_passes_when_up_to_date() -> AnyEmptyResult {
	let tmp = synced_project()?;

	common::docsync_cmd()
		.arg("check")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains("up to date"));

	Ok(())
}

#[test]
fn check_fails_when_stale() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_project(tmp.path(), &[("demo.rs", common::EXAMPLE)])?;

	common::docsync_cmd()
		.arg("check")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.code(1)
		.stderr(
			predicates::str::contains("readme (README.md)")
				.and(predicates::str::contains("2 document(s) are out of date")),
		);

	// Check never writes.
	assert_eq!(
		std::fs::read_to_string(tmp.path().join("README.md"))?,
		common::README
	);

	Ok(())
}

#[test]
fn check_fails_after_example_changes() -> AnyEmptyResult {
	let tmp = synced_project()?;
	std::fs::write(
		tmp.path().join("examples/demo.rs"),
		"fn main() {\n    let y = 2;\n}\n",
	)?;

	common::docsync_cmd()
		.arg("check")
		.arg("--diff")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.code(1)
		.stderr(
			predicates::str::contains("-let x = 1;").and(predicates::str::contains("+let y = 2;")),
		);

	Ok(())
}

#[test]
fn check_json_lists_stale_documents() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_project(tmp.path(), &[("demo.rs", common::EXAMPLE)])?;

	let output = common::docsync_cmd()
		.arg("check")
		.arg("--format")
		.arg("json")
		.arg("--path")
		.arg(tmp.path())
		.output()?;
	assert_eq!(output.status.code(), Some(1));

	let json: Value = serde_json::from_slice(&output.stdout)?;
	assert_eq!(json["ok"], Value::Bool(false));
	let kinds: Vec<_> = json["stale"]
		.as_array()
		.ok_or("expected stale array")?
		.iter()
		.filter_map(|entry| entry["kind"].as_str())
		.collect();
	assert_eq!(kinds, vec!["readme", "header"]);

	Ok(())
}

#[test]
fn check_github_emits_annotations() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_project(tmp.path(), &[("demo.rs", common::EXAMPLE)])?;

	common::docsync_cmd()
		.arg("check")
		.arg("--format")
		.arg("github")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.code(1)
		.stdout(
			predicates::str::contains("::warning file=README.md::")
				.and(predicates::str::contains("The header document is out of date")),
		);

	Ok(())
}

#[rstest]
#[case::text("text", "Check passed")]
#[case::github("github", "Check passed")]
#[case::json("json", "{\"ok\":true,\"stale\":[]}")]
fn check_success_output_per_format(
	#[case] format: &str,
	#[case] expected: &str,
) -> AnyEmptyResult {
	let tmp = synced_project()?;

	common::docsync_cmd()
		.arg("check")
		.arg("--format")
		.arg(format)
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains(expected));

	Ok(())
}
