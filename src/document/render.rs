use crate::document::types::{Document, Line};

/// Render a single line and its children into `out`.
///
/// Each line is the exact concatenation of its preserved fields; children
/// follow recursively, one per physical line.
fn render_line(line: &Line, out: &mut String) {
	out.push_str(&line.indent);
	out.push_str(&line.key);
	out.push_str(&line.separator);
	out.push_str(&line.value);
	out.push_str(&line.trailing_indent);
	out.push_str(&line.comment);

	for child in &line.children {
		out.push('\n');
		render_line(child, out);
	}
}

impl Document {
	/// Render the document back to config text.
	///
	/// For a document that has not been modified since parsing, the output is
	/// byte-identical to the input text.
	pub fn render(&self) -> String {
		let mut out = String::new();
		for (i, line) in self.lines.iter().enumerate() {
			if i > 0 {
				out.push('\n');
			}
			render_line(line, &mut out);
		}
		out
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn roundtrip(input: &str) {
		let doc = Document::parse(input);
		assert_eq!(doc.render(), input, "round-trip mismatch for {input:?}");
	}

	#[test]
	fn test_roundtrip_typical_config() {
		let input = r"# Global settings
Host example
    HostName example.com
    User myuser
    # Port comment
    Port 22

Host *
    Port 22
    User default";
		roundtrip(input);
	}

	#[test]
	fn test_roundtrip_empty_and_blank() {
		roundtrip("");
		roundtrip("\n");
		roundtrip("\n\n\n");
		roundtrip("   \n\t\n");
	}

	#[test]
	fn test_roundtrip_trailing_newline() {
		roundtrip("Host example\n    User me\n");
	}

	#[test]
	fn test_roundtrip_preserves_odd_formatting() {
		roundtrip("Host example   # tight ship\n\tUser = me\nPort=22   ");
		roundtrip("  indented-top-level value\nkey \"a # b\" tail # real comment");
		roundtrip("broken \"unterminated # not a comment");
	}

	#[test]
	fn test_roundtrip_flat_key_value_file() {
		roundtrip("User me\nPort 22\nIdentityFile ~/.ssh/id_ed25519");
	}

	#[test]
	fn test_render_raw_matches_render_organized() {
		let input = "Host a\n    User x\n\n# comment\nHost b";
		assert_eq!(Document::parse_raw(input).render(), input);
		assert_eq!(Document::parse(input).render(), input);
	}
}
