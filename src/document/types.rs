use crate::parse::{organize, tokenize_all};
use serde::Serialize;

/// A single physical line of an SSH config file, decomposed into the exact
/// lexical pieces needed to reproduce it byte-for-byte.
///
/// Concatenating `indent + key + separator + value + trailing_indent + comment`
/// always yields the original line content.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Line {
	/// Leading whitespace.
	pub indent: String,

	/// Directive name. Empty for blank and comment-only lines.
	pub key: String,

	/// Exact text between key and value, e.g. `" "` or `" = "`.
	pub separator: String,

	/// Raw value text, possibly containing double-quoted spans.
	pub value: String,

	/// Whitespace between the value and an inline comment.
	pub trailing_indent: String,

	/// Comment text including the leading `#`. Empty if none.
	pub comment: String,

	/// Nested directives. Only `Host`/`Match` lines ever carry children.
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub children: Vec<Line>,
}

impl Line {
	/// Whether this record has a directive key at all (blank and comment-only
	/// lines do not).
	pub fn has_key(&self) -> bool {
		!self.key.is_empty()
	}
}

/// A parsed SSH config file: the ordered sequence of top-level lines, each
/// owning its nested children.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Document {
	/// Top-level lines, in file order.
	pub lines: Vec<Line>,
}

impl Document {
	/// Parse config text and organize directives under their `Host`/`Match`
	/// blocks.
	pub fn parse(text: &str) -> Self {
		Document {
			lines: organize(tokenize_all(text)),
		}
	}

	/// Parse config text without organizing: one flat record per physical
	/// line, no children.
	pub fn parse_raw(text: &str) -> Self {
		Document {
			lines: tokenize_all(text),
		}
	}
}
