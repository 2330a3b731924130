//! Surgical editing of a parsed config.
//!
//! This module handles:
//! - Locating a top-level directive by exact key and value
//! - Replacing it (children included) with a freshly parsed fragment
//! - Deleting it via an empty replacement

use crate::document::Document;
use crate::error::{Result, SshconfError};
use crate::parse::tokenize;

impl Document {
	/// Replace the first top-level directive matching `find` with the parsed
	/// `replacement` fragment, or append the fragment if nothing matches.
	///
	/// `find` is a single directive line; only its key and value are used to
	/// locate the target, compared exactly. The matched line is removed
	/// together with its children. Matching never descends into blocks: a
	/// selector naming a nested directive will not match and the fragment is
	/// appended instead.
	pub fn patch(&mut self, find: &str, replacement: &str) -> Result<()> {
		let selector = tokenize(find);
		if !selector.has_key() {
			return Err(SshconfError::InvalidSelector {
				directive: find.to_string(),
			});
		}

		let fragment = Document::parse(replacement);

		let target = self
			.lines
			.iter()
			.position(|line| line.key == selector.key && line.value == selector.value);

		match target {
			Some(i) => {
				self.lines.splice(i..=i, fragment.lines);
			}
			None => self.lines.extend(fragment.lines),
		}

		Ok(())
	}

	/// Remove the first top-level directive matching `find`, children and
	/// all. A patch with an empty replacement.
	pub fn delete(&mut self, find: &str) -> Result<()> {
		self.patch(find, "")
	}
}
