use crate::document::Line;
use regex::Regex;
use std::sync::OnceLock;

/// Head-of-line grammar: leading whitespace, an optional directive key (any
/// run of characters that is not whitespace, `=`, or `#`), and an optional
/// separator (whitespace around a single `=`, or plain whitespace).
fn line_head_regex() -> &'static Regex {
	static RE: OnceLock<Regex> = OnceLock::new();
	RE.get_or_init(|| {
		Regex::new(r"^(\s*)([^\s=#]+)?(\s*=\s*|\s+)?").expect("line head pattern is valid")
	})
}

/// Tokenize a single physical line into its six lexical fields.
///
/// Total over all strings: every input produces a record whose fields
/// concatenate back to the input exactly. Lines that are blank, whitespace
/// only, or comment only come back with an empty `key`.
pub fn tokenize(line: &str) -> Line {
	let Some(caps) = line_head_regex().captures(line) else {
		// The pattern matches the empty prefix of any string, so this should
		// be unreachable. Fall back to the all-empty record.
		return Line::default();
	};

	let indent = caps.get(1).map_or("", |m| m.as_str());
	let key = caps.get(2).map_or("", |m| m.as_str());
	let separator = caps.get(3).map_or("", |m| m.as_str());
	let rest = &line[caps.get(0).map_or(0, |m| m.end())..];

	let (body, comment) = split_comment(rest);
	let (value, trailing_indent) = if comment.is_empty() {
		// No comment: any trailing whitespace stays part of the value.
		(body, "")
	} else {
		let value = body.trim_end();
		(value, &body[value.len()..])
	};

	Line {
		indent: indent.to_string(),
		key: key.to_string(),
		separator: separator.to_string(),
		value: value.to_string(),
		trailing_indent: trailing_indent.to_string(),
		comment: comment.to_string(),
		children: Vec::new(),
	}
}

/// Split off an inline comment: everything from the first `#` that is neither
/// backslash-escaped nor inside a double-quoted span.
///
/// Returns `(before, comment)`; `comment` is empty when the line has none.
fn split_comment(rest: &str) -> (&str, &str) {
	let mut in_quotes = false;
	let mut escaped = false;

	for (idx, ch) in rest.char_indices() {
		if escaped {
			escaped = false;
			continue;
		}
		match ch {
			'\\' => escaped = true,
			'"' => in_quotes = !in_quotes,
			'#' if !in_quotes => return (&rest[..idx], &rest[idx..]),
			_ => {}
		}
	}

	(rest, "")
}

/// Tokenize a whole text blob into one record per physical line.
///
/// The empty string yields no records at all, so an empty fragment used as a
/// patch replacement splices in nothing.
pub fn tokenize_all(text: &str) -> Vec<Line> {
	if text.is_empty() {
		return Vec::new();
	}
	text.split('\n').map(tokenize).collect()
}
