use std::borrow::Cow;

/// Replace the first run of consecutive lines starting with `prefix` by
/// `replacement`.
///
/// The run ends at the first line without the prefix; that line and
/// everything after it are kept as they are. A line holding only the trimmed
/// prefix (e.g. `//!` for `"//! "`) belongs to the run, since excerpts write
/// blank lines that way. When no such line exists the document is returned
/// unchanged.
pub fn update_header<'d>(doc: &'d str, prefix: &str, replacement: &str) -> Cow<'d, str> {
	let Some((start, end)) = find_header(doc, prefix) else {
		tracing::debug!(prefix, "no header block found, leaving document unchanged");
		return Cow::Borrowed(doc);
	};

	if &doc[start..end] == replacement {
		return Cow::Borrowed(doc);
	}

	let mut buf = String::with_capacity(doc.len() - (end - start) + replacement.len());
	buf.push_str(&doc[..start]);
	buf.push_str(replacement);
	buf.push_str(&doc[end..]);
	Cow::Owned(buf)
}

/// Byte range of the first header run, including the newline of its last
/// line.
pub fn find_header(doc: &str, prefix: &str) -> Option<(usize, usize)> {
	let mut start = None;
	let mut offset = 0;

	for line in doc.split_inclusive('\n') {
		let text = line.strip_suffix('\n').unwrap_or(line);
		let matched = is_header_line(text, prefix);

		match (start, matched) {
			(None, true) => start = Some(offset),
			(Some(first), false) => return Some((first, offset)),
			_ => {}
		}

		offset += line.len();
	}

	start.map(|first| (first, doc.len()))
}

fn is_header_line(line: &str, prefix: &str) -> bool {
	if line.starts_with(prefix) {
		return true;
	}

	let bare = prefix.trim_end();
	!bare.is_empty() && line.trim_end() == bare
}
