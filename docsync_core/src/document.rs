use std::path::Path;
use std::path::PathBuf;

use crate::DocsyncError;
use crate::DocsyncResult;

/// A whole-text buffer tied to a file on disk.
///
/// Documents are read once in full and written back with a single whole-file
/// overwrite. There is no incremental patching.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Document {
	pub path: PathBuf,
	pub content: String,
}

impl Document {
	pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
		Self {
			path: path.into(),
			content: content.into(),
		}
	}

	/// Read the full contents of `path`.
	pub fn read(path: &Path) -> DocsyncResult<Self> {
		let content = std::fs::read_to_string(path).map_err(|e| {
			DocsyncError::MissingSource {
				path: path.display().to_string(),
				reason: e.to_string(),
			}
		})?;

		Ok(Self::new(path, content))
	}

	/// Overwrite the file at this document's path with its content.
	pub fn write(&self) -> DocsyncResult<()> {
		std::fs::write(&self.path, &self.content).map_err(|e| {
			DocsyncError::WriteFailure {
				path: self.path.display().to_string(),
				reason: e.to_string(),
			}
		})
	}
}
