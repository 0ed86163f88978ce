use std::fmt;
use std::path::Path;
use std::path::PathBuf;

use crate::DocsyncResult;
use crate::Document;
use crate::collector::ExampleSource;
use crate::collector::read_examples;
use crate::config::DocsyncConfig;
use crate::excerpt::ExcerptOptions;
use crate::excerpt::extract_excerpt;
use crate::header::update_header;
use crate::renderer::RenderOptions;
use crate::renderer::render_example;
use crate::section::update_section;

/// A project root together with its loaded configuration.
#[derive(Debug, Clone)]
pub struct SyncContext {
	/// Directory every configured path is relative to.
	pub root: PathBuf,
	pub config: DocsyncConfig,
}

impl SyncContext {
	pub fn new(root: impl Into<PathBuf>, config: DocsyncConfig) -> Self {
		Self {
			root: root.into(),
			config,
		}
	}

	/// Load the config discovered at `root`, falling back to defaults when
	/// there is none.
	pub fn load(root: &Path) -> DocsyncResult<Self> {
		let config = DocsyncConfig::load(root)?.unwrap_or_default();
		Ok(Self::new(root, config))
	}

	/// Absolute path of the document that receives the rendered examples.
	pub fn readme_path(&self) -> PathBuf {
		self.root.join(&self.config.readme.path)
	}

	/// Absolute path of the document whose header mirrors the readme prose.
	pub fn header_path(&self) -> PathBuf {
		self.root.join(&self.config.header.path)
	}
}

/// Which of the two synchronized documents an update belongs to.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DocumentKind {
	/// The document holding the rendered examples and the source prose.
	Readme,
	/// The document holding the comment header.
	Header,
}

impl fmt::Display for DocumentKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Readme => write!(f, "readme"),
			Self::Header => write!(f, "header"),
		}
	}
}

/// The before and after content of one document.
#[derive(Debug, Clone)]
pub struct DocumentUpdate {
	pub kind: DocumentKind,
	pub path: PathBuf,
	pub original: String,
	pub updated: String,
}

impl DocumentUpdate {
	/// Returns true if the pipeline changed this document.
	pub fn is_changed(&self) -> bool {
		self.original != self.updated
	}
}

/// Result of running the pipeline in memory.
#[derive(Debug)]
pub struct SyncResult {
	/// Identifiers of the rendered examples, in rendering order.
	pub examples: Vec<String>,
	/// The readme update followed by the header update.
	pub documents: Vec<DocumentUpdate>,
}

impl SyncResult {
	/// Documents whose content differs from what is on disk.
	pub fn changed(&self) -> impl Iterator<Item = &DocumentUpdate> {
		self.documents.iter().filter(|doc| doc.is_changed())
	}

	/// Number of documents that need to be written.
	pub fn updated_count(&self) -> usize {
		self.changed().count()
	}
}

/// A document whose current content differs from what the pipeline produces.
#[derive(Debug)]
pub struct StaleDocument {
	pub kind: DocumentKind,
	pub file: PathBuf,
	pub current_content: String,
	pub expected_content: String,
}

/// Result of checking whether the documents are in sync.
#[derive(Debug)]
pub struct CheckResult {
	pub stale: Vec<StaleDocument>,
}

impl CheckResult {
	/// Returns true if both documents are up to date.
	pub fn is_ok(&self) -> bool {
		self.stale.is_empty()
	}
}

/// Collect and read the examples for this project in rendering order.
pub fn collect_examples(ctx: &SyncContext) -> DocsyncResult<Vec<ExampleSource>> {
	read_examples(&ctx.root, &ctx.config.examples)
}

/// Render every example and concatenate the blocks in order.
pub fn render_examples(ctx: &SyncContext, examples: &[ExampleSource]) -> DocsyncResult<String> {
	let options = RenderOptions::from(&ctx.config.examples);
	let mut rendered = String::new();

	for example in examples {
		let block = render_example(example, &options)?;
		tracing::debug!(example = %example.id, lines = block.body().len(), "rendered example");
		rendered.push_str(&block.to_string());
	}

	Ok(rendered)
}

/// Apply the section, excerpt and header stages to in-memory documents.
///
/// Returns the new readme and header text. The excerpt is taken from the
/// updated readme. An empty excerpt leaves the header untouched.
pub fn sync_documents(
	readme: &str,
	header: &str,
	rendered_examples: &str,
	config: &DocsyncConfig,
) -> (String, String) {
	let readme = update_section(
		readme,
		&config.readme.section_start,
		&config.readme.section_end,
		rendered_examples,
	)
	.into_owned();

	let options = ExcerptOptions::new(&config.readme, &config.header.prefix);
	let excerpt = extract_excerpt(&readme, &options);
	if excerpt.is_empty() {
		tracing::debug!("empty excerpt, header left unchanged");
		return (readme, header.to_string());
	}

	let header = update_header(header, &config.header.prefix, &excerpt.to_text()).into_owned();
	(readme, header)
}

/// Run the whole pipeline without touching the disk.
///
/// Both documents are read in full before anything else happens.
pub fn compute_sync(ctx: &SyncContext) -> DocsyncResult<SyncResult> {
	let readme = Document::read(&ctx.readme_path())?;
	let header = Document::read(&ctx.header_path())?;

	let examples = collect_examples(ctx)?;
	let rendered = render_examples(ctx, &examples)?;
	let (new_readme, new_header) =
		sync_documents(&readme.content, &header.content, &rendered, &ctx.config);

	Ok(SyncResult {
		examples: examples.into_iter().map(|example| example.id).collect(),
		documents: vec![
			DocumentUpdate {
				kind: DocumentKind::Readme,
				path: readme.path,
				original: readme.content,
				updated: new_readme,
			},
			DocumentUpdate {
				kind: DocumentKind::Header,
				path: header.path,
				original: header.content,
				updated: new_header,
			},
		],
	})
}

/// Report which documents are out of date.
pub fn check_sync(ctx: &SyncContext) -> DocsyncResult<CheckResult> {
	let result = compute_sync(ctx)?;
	let stale = result
		.documents
		.into_iter()
		.filter(DocumentUpdate::is_changed)
		.map(|doc| {
			StaleDocument {
				kind: doc.kind,
				file: doc.path,
				current_content: doc.original,
				expected_content: doc.updated,
			}
		})
		.collect();

	Ok(CheckResult { stale })
}

/// Write every changed document back to disk, readme first.
///
/// Stops at the first failed write. Documents already written stay written.
pub fn write_updates(result: &SyncResult) -> DocsyncResult<usize> {
	let mut written = 0;

	for doc in result.changed() {
		Document::new(&doc.path, doc.updated.as_str()).write()?;
		tracing::info!(kind = %doc.kind, path = %doc.path.display(), "updated document");
		written += 1;
	}

	Ok(written)
}

/// Load the project at `root`, run the pipeline and write the results.
pub fn run(root: &Path) -> DocsyncResult<SyncResult> {
	let ctx = SyncContext::load(root)?;
	let result = compute_sync(&ctx)?;
	write_updates(&result)?;
	Ok(result)
}
