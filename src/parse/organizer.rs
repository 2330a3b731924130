use crate::document::Line;

/// Whether a key opens a block. SSH config has exactly two block-opening
/// directives; the comparison is ASCII-case-insensitive.
fn is_block_key(key: &str) -> bool {
	key.eq_ignore_ascii_case("Host") || key.eq_ignore_ascii_case("Match")
}

/// A record qualifies for trailing-blank promotion only when it has neither a
/// key nor any indentation. Indented comments and whitespace-only lines stay
/// with their block.
fn is_promotable_blank(line: &Line) -> bool {
	line.key.is_empty() && line.indent.is_empty()
}

/// Group a flat record sequence into a two-level tree: every record after a
/// `Host`/`Match` line becomes a child of that line, until the next block
/// opens. Records seen before any block stay at top level, so flat key/value
/// files organize flat.
pub fn organize(records: Vec<Line>) -> Vec<Line> {
	let mut roots: Vec<Line> = Vec::new();
	// Index of the last opened block within `roots`, not a live reference.
	let mut current_block: Option<usize> = None;

	for record in records {
		if record.has_key() && is_block_key(&record.key) {
			roots.push(record);
			current_block = Some(roots.len() - 1);
		} else {
			match current_block {
				Some(i) => roots[i].children.push(record),
				None => roots.push(record),
			}
		}
	}

	promote_trailing_blanks(roots)
}

/// Move each block's trailing run of true blank lines back out to top level,
/// immediately after the block. A blank line separating two blocks belongs to
/// the document, not to the block the scanner happened to have open.
fn promote_trailing_blanks(roots: Vec<Line>) -> Vec<Line> {
	let mut result = Vec::with_capacity(roots.len());

	for mut node in roots {
		let keep = node
			.children
			.iter()
			.rposition(|child| !is_promotable_blank(child))
			.map_or(0, |i| i + 1);
		let promoted = node.children.split_off(keep);
		result.push(node);
		result.extend(promoted);
	}

	result
}
