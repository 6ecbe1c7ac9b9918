use std::sync::OnceLock;

use super::Profile;
use crate::alphabet::Alphabet;
use crate::types::PaddingSide;

const RFC4648_UPPER: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";
const HEX_UPPER: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUV";

/// A 40-bit input group becomes 8 characters. The final quantum of 8, 16,
/// 24 or 32 bits leaves 6, 4, 3 or 1 padding characters respectively.
///
/// @see https://tools.ietf.org/html/rfc4648#section-6
const GROUP_SIZE: usize = 8;
const PADDING_OCCURRENCES: &[usize] = &[0, 1, 3, 4, 6];

static BASE32_ALPHABET: OnceLock<Alphabet> = OnceLock::new();
static BASE32_HEX_ALPHABET: OnceLock<Alphabet> = OnceLock::new();

fn get_base32_alphabet() -> &'static Alphabet {
    BASE32_ALPHABET.get_or_init(|| Alphabet::from_symbols(RFC4648_UPPER.chars()).unwrap())
}

fn get_base32_hex_alphabet() -> &'static Alphabet {
    BASE32_HEX_ALPHABET.get_or_init(|| Alphabet::from_symbols(HEX_UPPER.chars()).unwrap())
}

fn make_profile(alphabet: &'static Alphabet) -> Profile {
    Profile {
        alphabet,
        group_size: GROUP_SIZE,
        padding: Some('='),
        padding_side: PaddingSide::Right,
        padding_occurrences: PADDING_OCCURRENCES,
        partition_separator: super::CRLF,
    }
}

pub(super) fn profile() -> Profile {
    make_profile(get_base32_alphabet())
}

// @see https://tools.ietf.org/html/rfc4648#section-7
pub(super) fn hex_profile() -> Profile {
    make_profile(get_base32_hex_alphabet())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base32_alphabets() {
        assert_eq!(get_base32_alphabet().symbols(), RFC4648_UPPER);
        assert_eq!(get_base32_hex_alphabet().symbols(), HEX_UPPER);
        assert_eq!(get_base32_alphabet().len(), 32);
        assert_eq!(get_base32_hex_alphabet().len(), 32);
    }

    #[test]
    fn test_base32_is_upper_case_only() {
        assert!(!get_base32_alphabet().contains('a'));
        assert!(!get_base32_hex_alphabet().contains('v'));
    }

    #[test]
    fn test_padding_occurrences_within_group() {
        assert!(PADDING_OCCURRENCES.iter().all(|&n| n <= GROUP_SIZE));
    }
}
