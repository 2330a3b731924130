//! Whole-file wrappers around the parse and render primitives.

use crate::document::Document;
use crate::error::{Result, SshconfError};
use std::path::{Path, PathBuf};

/// Read and parse a config file.
pub fn parse_config_file(path: &Path) -> Result<Document> {
	let content = std::fs::read_to_string(path).map_err(|source| SshconfError::FileRead {
		path: path.to_path_buf(),
		source,
	})?;

	Ok(Document::parse(&content))
}

/// Render a document and write it to the given path.
pub fn write_config_file(path: &Path, doc: &Document) -> Result<()> {
	std::fs::write(path, doc.render()).map_err(|source| SshconfError::FileWrite {
		path: path.to_path_buf(),
		source,
	})
}

/// The default client config location, `~/.ssh/config`.
pub fn default_config_path() -> Result<PathBuf> {
	let home_dir = dirs::home_dir().ok_or(SshconfError::HomeDirectoryNotFound)?;
	Ok(home_dir.join(".ssh").join("config"))
}
