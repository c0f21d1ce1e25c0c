//! Address-list input sources.
//!
//! This module handles getting raw address text into the pipeline:
//! - [`reader`] - reading and tokenizing lists from a file or stdin

mod reader;

// Re-export public functions
pub use reader::{read_address_tokens, split_tokens};
