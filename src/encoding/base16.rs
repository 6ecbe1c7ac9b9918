use std::sync::OnceLock;

use super::Profile;
use crate::alphabet::Alphabet;
use crate::types::PaddingSide;

// @see https://tools.ietf.org/html/rfc4648#section-8
const BASE16_SYMBOLS: &str = "0123456789ABCDEF";

static BASE16_ALPHABET: OnceLock<Alphabet> = OnceLock::new();

fn get_base16_alphabet() -> &'static Alphabet {
    BASE16_ALPHABET.get_or_init(|| Alphabet::from_symbols(BASE16_SYMBOLS.chars()).unwrap())
}

/// Two characters per octet and no padding concept: every message is made
/// of whole groups.
pub(super) fn profile() -> Profile {
    Profile {
        alphabet: get_base16_alphabet(),
        group_size: 2,
        padding: None,
        padding_side: PaddingSide::Right,
        padding_occurrences: &[],
        partition_separator: super::CRLF,
    }
}
