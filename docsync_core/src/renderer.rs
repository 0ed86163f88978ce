use std::fmt;

use derive_more::Deref;

use crate::DocsyncError;
use crate::DocsyncResult;
use crate::collector::ExampleSource;
use crate::config::ExamplesConfig;
use crate::config::UnterminatedPolicy;

/// A fenced, language-tagged code block derived from one example, followed by
/// a blank separator line.
///
/// The block derefs to its lines. Its [`Display`](fmt::Display) output ends
/// every line with `\n`, so concatenating blocks keeps one blank line between
/// them.
#[derive(Debug, Clone, Default, Deref, Eq, PartialEq)]
pub struct RenderedBlock(Vec<String>);

impl RenderedBlock {
	/// Lines strictly between the opening and closing fences.
	pub fn body(&self) -> &[String] {
		let len = self.0.len();
		if len < 3 {
			return &[];
		}

		&self.0[1..len - 2]
	}
}

impl fmt::Display for RenderedBlock {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for line in &self.0 {
			writeln!(f, "{line}")?;
		}
		Ok(())
	}
}

/// Settings that control how an example body is located and reshaped.
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions<'a> {
	pub language: &'a str,
	pub entry_marker: &'a str,
	pub terminator: &'a str,
	pub indent_width: usize,
	pub on_unterminated: UnterminatedPolicy,
}

impl Default for RenderOptions<'static> {
	fn default() -> Self {
		Self {
			language: "rust",
			entry_marker: "fn main() {",
			terminator: "}",
			indent_width: 4,
			on_unterminated: UnterminatedPolicy::Extract,
		}
	}
}

impl<'a> From<&'a ExamplesConfig> for RenderOptions<'a> {
	fn from(config: &'a ExamplesConfig) -> Self {
		Self {
			language: &config.language,
			entry_marker: &config.entry_marker,
			terminator: &config.terminator,
			indent_width: config.indent_width,
			on_unterminated: config.on_unterminated,
		}
	}
}

/// How the scan for an example body finished.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum BodyEnd {
	/// No line matched the entry marker.
	NoEntry,
	/// The body was closed by a terminator line.
	Terminated,
	/// The body ran to the end of the source.
	EndOfFile,
}

/// Captured body lines together with how the scan ended.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Body<'s> {
	pub lines: Vec<&'s str>,
	pub end: BodyEnd,
}

/// Capture the lines strictly between the entry marker and its terminator.
///
/// The entry marker matches at the start of a line; the terminator must match
/// the whole line. Only the first entry point is captured. Each captured line
/// loses one indentation unit of `indent_width` spaces when it has one.
pub fn extract_body<'s>(source: &'s str, options: &RenderOptions<'_>) -> Body<'s> {
	let unit = " ".repeat(options.indent_width);
	let mut extracting = false;
	let mut lines = Vec::new();

	for line in source.lines() {
		if !extracting {
			if line.starts_with(options.entry_marker) {
				extracting = true;
			}
			continue;
		}

		if line == options.terminator {
			return Body {
				lines,
				end: BodyEnd::Terminated,
			};
		}

		lines.push(line.strip_prefix(unit.as_str()).unwrap_or(line));
	}

	let end = if extracting {
		BodyEnd::EndOfFile
	} else {
		BodyEnd::NoEntry
	};

	Body { lines, end }
}

/// Render `source` into a fenced block tagged with `options.language`.
///
/// A source without an entry marker yields a block with fences only. A body
/// that is never terminated is captured up to the end of the source.
pub fn render(source: &str, options: &RenderOptions<'_>) -> RenderedBlock {
	let body = extract_body(source, options);
	assemble(&body, options.language)
}

/// Render one example, applying the configured policy for bodies that are
/// never terminated.
pub fn render_example(
	example: &ExampleSource,
	options: &RenderOptions<'_>,
) -> DocsyncResult<RenderedBlock> {
	let body = extract_body(&example.content, options);

	match body.end {
		BodyEnd::NoEntry => {
			tracing::debug!(example = %example.id, "no entry marker found, rendering empty block");
		}
		BodyEnd::EndOfFile => {
			if options.on_unterminated == UnterminatedPolicy::Error {
				return Err(DocsyncError::UnterminatedExample {
					name: example.id.clone(),
				});
			}
			tracing::debug!(example = %example.id, "entry point never terminated, captured to end of file");
		}
		BodyEnd::Terminated => {}
	}

	Ok(assemble(&body, options.language))
}

fn assemble(body: &Body<'_>, language: &str) -> RenderedBlock {
	let mut lines = Vec::with_capacity(body.lines.len() + 3);
	lines.push(format!("```{language}"));
	lines.extend(body.lines.iter().map(|line| (*line).to_string()));
	lines.push("```".to_string());
	lines.push(String::new());

	RenderedBlock(lines)
}
