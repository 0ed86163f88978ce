use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;

use crate::DocsyncError;
use crate::DocsyncResult;

/// Supported config file locations in discovery order (highest precedence
/// first).
pub const CONFIG_FILE_CANDIDATES: [&str; 3] =
	["docsync.toml", ".docsync.toml", ".config/docsync.toml"];

/// Configuration loaded from a `docsync.toml` file.
///
/// Every section is optional and every field falls back to the layout of a
/// conventional Cargo package:
///
/// ```toml
/// [examples]
/// dir = "examples"
/// patterns = ["*.rs"]
/// priority = ["fill_a_number.rs", "read_a_number.rs"]
/// language = "rust"
/// entry_marker = "fn main() {"
/// terminator = "}"
/// indent_width = 4
/// on_missing = "error"
/// on_unterminated = "extract"
///
/// [readme]
/// path = "README.md"
/// section_start = "## Examples"
/// section_end = "*"
/// excerpt_start = "This crate"
/// excerpt_end = "## Crates.io"
/// bullet = "* "
///
/// [header]
/// path = "src/lib.rs"
/// prefix = "//! "
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DocsyncConfig {
	/// Where example programs live and how each one is rendered.
	#[serde(default)]
	pub examples: ExamplesConfig,
	/// The primary document that receives the rendered examples.
	#[serde(default)]
	pub readme: ReadmeConfig,
	/// The secondary document whose header comment mirrors the readme prose.
	#[serde(default)]
	pub header: HeaderConfig,
}

/// What to do when an identifier in `examples.priority` has no matching file.
#[derive(Debug, Clone, Copy, Default, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum MissingExamplePolicy {
	/// Abort the run with [`DocsyncError::MissingExample`].
	#[default]
	Error,
	/// Log a warning and leave the example out.
	Skip,
}

/// What to do when an example's entry point never reaches its terminator.
#[derive(Debug, Clone, Copy, Default, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum UnterminatedPolicy {
	/// Keep capturing lines until the end of the file.
	#[default]
	Extract,
	/// Abort the run with [`DocsyncError::UnterminatedExample`].
	Error,
}

/// The `[examples]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExamplesConfig {
	/// Directory scanned for example sources, relative to the project root.
	pub dir: PathBuf,
	/// Glob patterns a file name must match to be picked up by the scan.
	pub patterns: Vec<String>,
	/// Identifiers rendered first, in this exact order.
	pub priority: Vec<String>,
	/// Language tag written after the opening fence.
	pub language: String,
	/// Line prefix marking the line right before the extracted body.
	pub entry_marker: String,
	/// Whole line that ends the extracted body.
	pub terminator: String,
	/// Number of leading spaces removed from each captured line.
	pub indent_width: usize,
	pub on_missing: MissingExamplePolicy,
	pub on_unterminated: UnterminatedPolicy,
}

impl Default for ExamplesConfig {
	fn default() -> Self {
		Self {
			dir: PathBuf::from("examples"),
			patterns: vec!["*.rs".to_string()],
			priority: Vec::new(),
			language: "rust".to_string(),
			entry_marker: "fn main() {".to_string(),
			terminator: "}".to_string(),
			indent_width: 4,
			on_missing: MissingExamplePolicy::default(),
			on_unterminated: UnterminatedPolicy::default(),
		}
	}
}

/// The `[readme]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReadmeConfig {
	/// Path to the primary document, relative to the project root.
	pub path: PathBuf,
	/// Heading line that opens the examples section. It must be followed by
	/// exactly one blank line.
	pub section_start: String,
	/// Whole line that closes the examples section.
	pub section_end: String,
	/// Line prefix of the first prose line copied into the header.
	pub excerpt_start: String,
	/// Line prefix of the first line after the copied prose.
	pub excerpt_end: String,
	/// Bullet prefix swapped for the header prefix in copied lines.
	pub bullet: String,
}

impl Default for ReadmeConfig {
	fn default() -> Self {
		Self {
			path: PathBuf::from("README.md"),
			section_start: "## Examples".to_string(),
			section_end: "*".to_string(),
			excerpt_start: "This crate".to_string(),
			excerpt_end: "## Crates.io".to_string(),
			bullet: "* ".to_string(),
		}
	}
}

/// The `[header]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HeaderConfig {
	/// Path to the secondary document, relative to the project root.
	pub path: PathBuf,
	/// Prefix shared by every line of the header comment block.
	pub prefix: String,
}

impl Default for HeaderConfig {
	fn default() -> Self {
		Self {
			path: PathBuf::from("src/lib.rs"),
			prefix: "//! ".to_string(),
		}
	}
}

impl DocsyncConfig {
	/// Resolve the config path from known discovery candidates.
	#[must_use]
	pub fn resolve_path(root: &Path) -> Option<PathBuf> {
		CONFIG_FILE_CANDIDATES
			.iter()
			.map(|candidate| root.join(candidate))
			.find(|path| path.is_file())
	}

	/// Load the config from the first discovered config file at `root`.
	/// Returns `None` if no config file exists.
	pub fn load(root: &Path) -> DocsyncResult<Option<DocsyncConfig>> {
		let Some(config_path) = Self::resolve_path(root) else {
			tracing::debug!(root = %root.display(), "no config file found, using defaults");
			return Ok(None);
		};

		let content = std::fs::read_to_string(&config_path)?;
		let config = Self::parse(&content)?;
		tracing::debug!(path = %config_path.display(), "loaded config");

		Ok(Some(config))
	}

	/// Parse config from TOML text.
	pub fn parse(content: &str) -> DocsyncResult<DocsyncConfig> {
		toml::from_str(content).map_err(|e| DocsyncError::ConfigParse(e.to_string()))
	}
}
