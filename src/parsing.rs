//! Boundary parsing for size fields.
//!
//! Presentation shells collect block capacities and process sizes as
//! comma-delimited text. This module turns such a field into a validated
//! integer sequence, or a structured error the shell can show verbatim.
//! The allocator is never invoked on a failed parse, and parsing has no
//! side effects on prior simulation results.
//!
//! Policy for degenerate values: zero and negative sizes are rejected here
//! so the core only ever sees positive requests.
//!
//! # Examples
//!
//! ```rust
//! use bestfit_sim::parsing::parse_size_list;
//!
//! let sizes = parse_size_list(" 100, 200 ,300 ").unwrap();
//! assert_eq!(sizes, vec![100, 200, 300]);
//!
//! assert!(parse_size_list("100, twenty").is_err());
//! assert!(parse_size_list("").is_err());
//! ```

use crate::{Error, Result};

/// Parse a comma-delimited field into an ordered list of positive sizes.
///
/// Whitespace around each number is tolerated. Errors name the offending
/// token by its 1-based position:
///
/// - [`Error::Parse`] for an empty field, an empty token (e.g. a trailing
///   comma), or a token that is not an integer
/// - [`Error::Validation`] for a zero or negative value
pub fn parse_size_list(field: &str) -> Result<Vec<u64>> {
    if field.trim().is_empty() {
        return Err(Error::parse("field is empty"));
    }

    field
        .split(',')
        .enumerate()
        .map(|(pos, token)| parse_token(pos + 1, token.trim()))
        .collect()
}

fn parse_token(position: usize, token: &str) -> Result<u64> {
    if token.is_empty() {
        return Err(Error::parse(format!("token {position} is empty")));
    }

    match token.parse::<u64>() {
        Ok(0) => Err(Error::validation(format!(
            "token {position}: sizes must be positive, got 0"
        ))),
        Ok(value) => Ok(value),
        Err(_) => {
            // Distinguish a negative number from outright garbage.
            if let Ok(value) = token.parse::<i64>() {
                Err(Error::validation(format!(
                    "token {position}: sizes must be positive, got {value}"
                )))
            } else {
                Err(Error::parse(format!(
                    "token {position} is not an integer: {token:?}"
                )))
            }
        }
    }
}
