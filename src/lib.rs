//! sshconf - format-preserving parser and surgical editor for OpenSSH client
//! config files.
//!
//! This library provides the core functionality for sshconf, including:
//! - Line tokenizing that captures every byte of formatting
//! - Organizing directives under their `Host`/`Match` blocks
//! - Rendering that reproduces unmodified input exactly
//! - Patch and delete operations on top-level directives
//!
//! # Example
//!
//! ```
//! use sshconf::Document;
//!
//! let mut doc = Document::parse("Host example\n    User old");
//! assert_eq!(doc.render(), "Host example\n    User old");
//!
//! doc.patch("Host example", "Host example\n    User new").unwrap();
//! assert_eq!(doc.render(), "Host example\n    User new");
//! ```

pub mod document;
pub mod edit;
pub mod error;
pub mod file;
pub mod parse;

pub use document::{Document, Line};
pub use error::{Result, SshconfError};
