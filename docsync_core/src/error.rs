use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum DocsyncError {
	#[error(transparent)]
	#[diagnostic(code(docsync::io_error))]
	Io(#[from] std::io::Error),

	#[error("failed to read `{path}`: {reason}")]
	#[diagnostic(
		code(docsync::missing_source),
		help("check that the path exists and is readable, or adjust it in docsync.toml")
	)]
	MissingSource { path: String, reason: String },

	#[error("priority example `{name}` was not found in `{dir}`")]
	#[diagnostic(
		code(docsync::missing_example),
		help(
			"remove `{name}` from `examples.priority` or set `examples.on_missing = \"skip\"` in \
			 docsync.toml"
		)
	)]
	MissingExample { name: String, dir: String },

	#[error("example `{name}` has an entry point that is never closed")]
	#[diagnostic(
		code(docsync::unterminated_example),
		help(
			"close the entry point with a terminator line, or set `examples.on_unterminated = \
			 \"extract\"` to capture until the end of the file"
		)
	)]
	UnterminatedExample { name: String },

	#[error("failed to write `{path}`: {reason}")]
	#[diagnostic(code(docsync::write_failure))]
	WriteFailure { path: String, reason: String },

	#[error("failed to parse config file: {0}")]
	#[diagnostic(
		code(docsync::config_parse),
		help("check that docsync.toml is valid TOML with [examples], [readme] and [header] sections")
	)]
	ConfigParse(String),

	#[error("invalid example pattern `{pattern}`: {reason}")]
	#[diagnostic(code(docsync::invalid_pattern))]
	InvalidPattern { pattern: String, reason: String },
}

pub type DocsyncResult<T> = Result<T, DocsyncError>;
pub type AnyError = Box<dyn std::error::Error>;
pub type AnyEmptyResult = Result<(), AnyError>;
pub type AnyResult<T> = Result<T, AnyError>;
