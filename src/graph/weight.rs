use crate::errors::{GraphError, Result};
use std::num::IntErrorKind;


/// Edge weight - non-negative integer
pub type Weight = u64;


/// Parse raw user text into an edge weight
/// Surrounding whitespace is ignored, a leading `+` is accepted
/// and a negated zero (`-0`, `-000`) is still zero
pub fn parse_weight(input: &str) -> Result<Weight> {
    let text = input.trim();

    match text.parse::<Weight>() {
        Ok(weight) => Ok(weight),
        Err(_) if is_negative_zero(text) => Ok(0),
        Err(e) => {
            let reason = match e.kind() {
                IntErrorKind::Empty => "weight is empty",
                IntErrorKind::PosOverflow => "weight is too large",
                // "-5" fails as InvalidDigit on an unsigned parse
                _ if is_negative_integer(text) => "weight must be non-negative",
                _ => "weight is not an integer",
            };
            Err(GraphError::invalid_weight(input, reason))
        }
    }
}

fn is_negative_integer(text: &str) -> bool {
    text.strip_prefix('-')
        .is_some_and(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
}

fn is_negative_zero(text: &str) -> bool {
    is_negative_integer(text) && text[1..].bytes().all(|b| b == b'0')
}
