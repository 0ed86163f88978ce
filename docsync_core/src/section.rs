use std::borrow::Cow;

/// A pair of line markers delimiting a replaceable span inside a document.
///
/// The span starts right after the first `start` line that is followed by
/// exactly one blank line, and ends right before the first following line
/// that equals `end`.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Anchor<'a> {
	pub start: &'a str,
	pub end: &'a str,
}

impl<'a> Anchor<'a> {
	pub fn new(start: &'a str, end: &'a str) -> Self {
		Self { start, end }
	}

	/// Locate the byte range of the span inside `doc`, if both markers exist.
	pub fn find(&self, doc: &str) -> Option<(usize, usize)> {
		let start = find_start(doc, self.start)?;
		let end = find_line(doc, start, self.end)?;
		Some((start, end))
	}
}

/// Replace the span delimited by `start_marker` and `end_marker_line` with
/// `replacement`.
///
/// The markers themselves and the blank line after the start marker are kept.
/// When either marker is missing the document is returned unchanged.
pub fn update_section<'d>(
	doc: &'d str,
	start_marker: &str,
	end_marker_line: &str,
	replacement: &str,
) -> Cow<'d, str> {
	let Some((start, end)) = Anchor::new(start_marker, end_marker_line).find(doc) else {
		tracing::debug!(
			start = start_marker,
			end = end_marker_line,
			"section anchors not found, leaving document unchanged"
		);
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

/// Offset just past `marker` followed by one blank line. The marker must sit
/// at the start of a line. Both `\n` and `\r\n` line endings are accepted.
fn find_start(doc: &str, marker: &str) -> Option<usize> {
	let mut from = 0;

	while let Some(idx) = doc[from..].find(marker) {
		let at = from + idx;
		let after = at + marker.len();
		if at == 0 || doc.as_bytes()[at - 1] == b'\n' {
			if let Some(len) = blank_line_len(&doc[after..]) {
				return Some(after + len);
			}
		}

		let Some(ch) = doc[at..].chars().next() else {
			break;
		};
		from = at + ch.len_utf8();
	}

	None
}

/// Length of a line ending followed by an empty line at the start of `rest`.
fn blank_line_len(rest: &str) -> Option<usize> {
	["\n\n", "\r\n\r\n"]
		.into_iter()
		.find(|ending| rest.starts_with(ending))
		.map(str::len)
}

/// Offset of the first line at or after `from` that equals `line`. `from`
/// must be at the start of a line.
fn find_line(doc: &str, from: usize, line: &str) -> Option<usize> {
	let mut offset = from;

	for current in doc[from..].split_inclusive('\n') {
		let text = current.strip_suffix('\n').unwrap_or(current);
		let text = text.strip_suffix('\r').unwrap_or(text);
		if text == line {
			return Some(offset);
		}
		offset += current.len();
	}

	None
}
