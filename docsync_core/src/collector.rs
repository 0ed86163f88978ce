use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;

use globset::Glob;
use globset::GlobSet;
use globset::GlobSetBuilder;

use crate::DocsyncError;
use crate::DocsyncResult;
use crate::config::ExamplesConfig;
use crate::config::MissingExamplePolicy;

/// One example program, read in full.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ExampleSource {
	/// Path of the example relative to the examples directory, using `/`
	/// separators (e.g. `fill_a_number.rs`).
	pub id: String,
	/// Absolute path the content was read from.
	pub path: PathBuf,
	/// Raw text of the example.
	pub content: String,
}

/// Merge the priority list and the scanned identifiers into one ordered list.
///
/// Priority entries come first in their given order, followed by the scanned
/// entries. Any identifier that was already emitted is skipped, so the first
/// occurrence wins.
pub fn collect<P, S>(priority: P, scanned: S) -> Vec<String>
where
	P: IntoIterator,
	P::Item: Into<String>,
	S: IntoIterator,
	S::Item: Into<String>,
{
	let mut seen = HashSet::new();
	let mut ordered = Vec::new();

	let all = priority
		.into_iter()
		.map(Into::into)
		.chain(scanned.into_iter().map(Into::into));

	for id in all {
		if seen.insert(id.clone()) {
			ordered.push(id);
		}
	}

	ordered
}

/// Build a glob set from the configured example patterns.
pub fn build_pattern_set(patterns: &[String]) -> DocsyncResult<GlobSet> {
	let mut builder = GlobSetBuilder::new();
	for pattern in patterns {
		let glob = Glob::new(pattern).map_err(|e| {
			DocsyncError::InvalidPattern {
				pattern: pattern.clone(),
				reason: e.to_string(),
			}
		})?;
		builder.add(glob);
	}
	builder.build().map_err(|e| {
		DocsyncError::InvalidPattern {
			pattern: patterns.join(", "),
			reason: e.to_string(),
		}
	})
}

/// List the example identifiers found directly inside `dir`.
///
/// Only regular files whose name matches `patterns` are returned. The result
/// is sorted so repeated scans of an unchanged directory agree.
pub fn scan_examples(dir: &Path, patterns: &GlobSet) -> DocsyncResult<Vec<String>> {
	let entries = std::fs::read_dir(dir).map_err(|e| {
		DocsyncError::MissingSource {
			path: dir.display().to_string(),
			reason: e.to_string(),
		}
	})?;

	let mut ids = Vec::new();
	for entry in entries {
		let path = entry?.path();
		if !path.is_file() {
			continue;
		}

		let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
			continue;
		};

		if patterns.is_match(name) {
			ids.push(name.to_string());
		}
	}

	ids.sort();
	Ok(ids)
}

/// Resolve the ordered example list for `config` and read every example.
///
/// `root` is the project root that `config.dir` is relative to. A
/// priority-listed example without a file either aborts the run or is
/// skipped, depending on [`ExamplesConfig::on_missing`].
pub fn read_examples(root: &Path, config: &ExamplesConfig) -> DocsyncResult<Vec<ExampleSource>> {
	let dir = root.join(&config.dir);
	let patterns = build_pattern_set(&config.patterns)?;
	let scanned = scan_examples(&dir, &patterns)?;
	let ids = collect(config.priority.iter().cloned(), scanned);

	let mut sources = Vec::with_capacity(ids.len());
	for id in ids {
		let path = dir.join(&id);
		if !path.is_file() {
			match config.on_missing {
				MissingExamplePolicy::Error => {
					return Err(DocsyncError::MissingExample {
						name: id,
						dir: dir.display().to_string(),
					});
				}
				MissingExamplePolicy::Skip => {
					tracing::warn!(example = %id, "priority example not found, skipping");
					continue;
				}
			}
		}

		let content = std::fs::read_to_string(&path).map_err(|e| {
			DocsyncError::MissingSource {
				path: path.display().to_string(),
				reason: e.to_string(),
			}
		})?;
		tracing::debug!(example = %id, "collected example");

		sources.push(ExampleSource { id, path, content });
	}

	Ok(sources)
}
