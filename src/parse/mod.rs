//! Line tokenizing and tree organizing for sshconf.
//!
//! This module handles:
//! - Splitting raw text into one lexical record per physical line
//! - Grouping records under their `Host`/`Match` blocks
//! - Promoting blank lines that separate blocks back to the top level

pub mod organizer;
pub mod tokenizer;

pub use organizer::organize;
pub use tokenizer::{tokenize, tokenize_all};
