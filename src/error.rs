use std::path::PathBuf;

/// Library-level structured errors for sshconf.
///
/// Use `thiserror` for structured errors that library consumers can match on.
/// The CLI binary wraps these with `anyhow` for rich context chains.
#[derive(Debug, thiserror::Error)]
pub enum SshconfError {
	#[error("Invalid selector (no directive key): {directive:?}")]
	InvalidSelector { directive: String },

	#[error("Failed to read config file: {path}")]
	FileRead {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to write config file: {path}")]
	FileWrite {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to resolve home directory")]
	HomeDirectoryNotFound,
}

/// Result type alias using SshconfError.
pub type Result<T> = std::result::Result<T, SshconfError>;
