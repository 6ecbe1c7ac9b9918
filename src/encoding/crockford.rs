//! Crockford's base32.
//!
//! Decoders accept an extended alphabet so that user input survives common
//! mis-readings: `O`/`o` mean `0`, `I`/`i`/`L`/`l` mean `1`, and letters are
//! case-insensitive. `U` is excluded from the symbols and only appears as a
//! check symbol.
//!
//! @see http://www.crockford.com/wrmg/base32.html

use std::borrow::Cow;
use std::sync::OnceLock;

use regex::Regex;

use super::Profile;
use crate::alphabet::Alphabet;
use crate::types::PaddingSide;

const CROCKFORD_CLASSES: [&str; 32] = [
    "0Oo", "1IiLl", "2", "3", "4", "5", "6", "7", "8", "9", "Aa", "Bb", "Cc", "Dd", "Ee", "Ff",
    "Gg", "Hh", "Jj", "Kk", "Mm", "Nn", "Pp", "Qq", "Rr", "Ss", "Tt", "Vv", "Ww", "Xx", "Yy",
    "Zz",
];

/// Symbols that may only appear once, as the trailing check symbol.
pub const CHECK_SYMBOLS: &str = "*~$=Uu";

const GROUP_SIZE: usize = 8;

// Zero-extension happens on the most significant side, so any amount of
// leading zeros in the final group is structurally fine.
const PADDING_OCCURRENCES: &[usize] = &[0, 1, 2, 3, 4, 5, 6, 7, 8];

static CROCKFORD_ALPHABET: OnceLock<Alphabet> = OnceLock::new();
static WHOLE_GROUPS_PATTERN: OnceLock<Regex> = OnceLock::new();
static ANY_LENGTH_PATTERN: OnceLock<Regex> = OnceLock::new();

fn get_crockford_alphabet() -> &'static Alphabet {
    CROCKFORD_ALPHABET.get_or_init(|| Alphabet::new(CROCKFORD_CLASSES).unwrap())
}

pub(super) fn profile() -> Profile {
    Profile {
        alphabet: get_crockford_alphabet(),
        group_size: GROUP_SIZE,
        padding: Some('0'),
        padding_side: PaddingSide::Left,
        padding_occurrences: PADDING_OCCURRENCES,
        partition_separator: "-",
    }
}

fn escaped(chars: impl Iterator<Item = char>) -> String {
    chars.map(|c| regex::escape(c.encode_utf8(&mut [0; 4]))).collect()
}

/// `whole_groups` demands the body before the check symbol to be a sequence
/// of complete groups; otherwise any run of symbols is accepted.
fn build_pattern(whole_groups: bool) -> Regex {
    let symbols = escaped(get_crockford_alphabet().chars().chain(CHECK_SYMBOLS.chars()));
    let markers = escaped(CHECK_SYMBOLS.chars());
    let body = if whole_groups {
        format!("(?:[{}]{{{}}})*", symbols, GROUP_SIZE)
    } else {
        format!("[{}]*", symbols)
    };
    Regex::new(&format!("^{}[{}]$", body, markers)).unwrap()
}

fn check_symbol_pattern(whole_groups: bool) -> &'static Regex {
    if whole_groups {
        WHOLE_GROUPS_PATTERN.get_or_init(|| build_pattern(true))
    } else {
        ANY_LENGTH_PATTERN.get_or_init(|| build_pattern(false))
    }
}

/// Drop a single trailing check symbol. The symbol itself is not verified,
/// that would require decoding the message.
pub(super) fn strip_check_symbol(message: Cow<'_, str>, whole_groups: bool) -> Cow<'_, str> {
    if !check_symbol_pattern(whole_groups).is_match(&message) {
        return message;
    }
    // Check symbols are all ASCII.
    match message {
        Cow::Borrowed(s) => Cow::Borrowed(&s[..s.len() - 1]),
        Cow::Owned(mut s) => {
            s.pop();
            Cow::Owned(s)
        }
    }
}
