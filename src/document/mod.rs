//! The parsed config tree for sshconf.
//!
//! This module handles:
//! - The `Line` record carrying every lexical field of a physical line
//! - The `Document` owning the organized top-level sequence
//! - Rendering the tree back to byte-identical config text

pub mod render;
pub mod types;

pub use types::{Document, Line};
