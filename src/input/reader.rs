//! Reading address lists from a file or stdin.

use crate::models::CondenseError;
use lazy_static::lazy_static;
use regex::Regex;
use std::io::Read;

lazy_static! {
    static ref SEPARATORS: Regex = Regex::new(r"[\s,;]+").expect("Invalid Regex?");
}

/// Split raw input text into address tokens.
///
/// Accepts whitespace, comma, or semicolon separated lists so that pasted
/// router or spreadsheet output works unchanged.
pub fn split_tokens(input: &str) -> Vec<String> {
    SEPARATORS
        .split(input)
        .filter(|token| !token.is_empty())
        .map(|token| token.to_string())
        .collect()
}

/// Read address tokens from a file, or stdin when no path is given.
pub fn read_address_tokens(path: Option<&str>) -> Result<Vec<String>, CondenseError> {
    let raw = match path {
        Some(file) => {
            log::info!("Reading address list from file: {file}");
            std::fs::read_to_string(file).map_err(|e| CondenseError::ReadFailed {
                reason: format!("{file}: {e}"),
            })?
        }
        None => {
            log::info!("Reading address list from stdin");
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| CondenseError::ReadFailed {
                    reason: e.to_string(),
                })?;
            buf
        }
    };
    Ok(split_tokens(&raw))
}
