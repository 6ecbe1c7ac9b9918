use std::borrow::Cow;

use crate::alphabet::Alphabet;
use crate::error::{BaseCheckError, Result};
use crate::types::PaddingSide;

/// Remove every occurrence of `separator`, wherever it appears.
pub fn strip_partitions<'a>(message: &'a str, separator: &str) -> Cow<'a, str> {
    if separator.is_empty() || !message.contains(separator) {
        Cow::Borrowed(message)
    } else {
        Cow::Owned(message.replace(separator, ""))
    }
}

pub fn trim_padding(message: &str, padding: Option<char>, side: PaddingSide) -> &str {
    match (padding, side) {
        (None, _) => message,
        (Some(pad), PaddingSide::Right) => message.trim_end_matches(pad),
        (Some(pad), PaddingSide::Left) => message.trim_start_matches(pad),
    }
}

/// The last `group_size` characters of `message`, or all of it when shorter.
pub fn final_group(message: &str, group_size: usize) -> &str {
    if group_size == 0 {
        return "";
    }
    match message.char_indices().rev().nth(group_size - 1) {
        Some((start, _)) => &message[start..],
        None => message,
    }
}

pub fn validate_alphabet(input: &str, alphabet: &Alphabet) -> Result<()> {
    for (pos, ch) in input.chars().enumerate() {
        if !alphabet.contains(ch) {
            return Err(BaseCheckError::invalid_char(ch, pos));
        }
    }
    Ok(())
}
