use derive_more::Deref;

use crate::config::ReadmeConfig;

/// Markers and prefixes used to lift a prose span out of a document.
#[derive(Debug, Clone, Copy)]
pub struct ExcerptOptions<'a> {
	/// Prefix of the first captured line.
	pub start: &'a str,
	/// Prefix of the first line after the captured span.
	pub end: &'a str,
	/// Bullet prefix replaced by `comment_prefix`.
	pub bullet: &'a str,
	/// Prefix written at the start of every excerpt line.
	pub comment_prefix: &'a str,
}

impl<'a> ExcerptOptions<'a> {
	pub fn new(readme: &'a ReadmeConfig, comment_prefix: &'a str) -> Self {
		Self {
			start: &readme.excerpt_start,
			end: &readme.excerpt_end,
			bullet: &readme.bullet,
			comment_prefix,
		}
	}
}

/// Comment-prefixed lines lifted from one document for use in another.
#[derive(Debug, Clone, Default, Deref, Eq, PartialEq)]
pub struct Excerpt(Vec<String>);

impl Excerpt {
	/// Join the lines, ending each one with `\n`.
	pub fn to_text(&self) -> String {
		let mut text = String::with_capacity(self.0.iter().map(|l| l.len() + 1).sum());
		for line in &self.0 {
			text.push_str(line);
			text.push('\n');
		}
		text
	}
}

/// Extract the span from the first line starting with `options.start` up to,
/// but excluding, the next later line starting with `options.end`.
///
/// Each captured line gets `options.comment_prefix` in place of a leading
/// bullet, or in front of the line otherwise, and loses trailing spaces and
/// tabs. Returns an empty excerpt when either marker is missing.
pub fn extract_excerpt(doc: &str, options: &ExcerptOptions<'_>) -> Excerpt {
	let lines: Vec<&str> = doc.lines().collect();

	let Some(first) = lines.iter().position(|line| line.starts_with(options.start)) else {
		tracing::debug!(start = options.start, "excerpt start not found");
		return Excerpt::default();
	};

	let Some(len) = lines[first + 1..]
		.iter()
		.position(|line| line.starts_with(options.end))
		.map(|idx| idx + 1)
	else {
		tracing::debug!(end = options.end, "excerpt end not found");
		return Excerpt::default();
	};

	let excerpt = lines[first..first + len]
		.iter()
		.map(|line| comment_line(line, options))
		.collect();

	Excerpt(excerpt)
}

fn comment_line(line: &str, options: &ExcerptOptions<'_>) -> String {
	let rest = line.strip_prefix(options.bullet).unwrap_or(line);
	let commented = format!("{}{rest}", options.comment_prefix);
	commented.trim_end_matches([' ', '\t']).to_string()
}
