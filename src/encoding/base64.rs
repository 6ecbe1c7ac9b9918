use std::sync::OnceLock;

use super::Profile;
use crate::alphabet::Alphabet;
use crate::types::PaddingSide;

const STANDARD_ALPHABET: &str =
    "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789+/";
const URL_ALPHABET: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789-_";

/// A 24-bit input group becomes 4 characters. Since all input is an
/// integral number of octets, the final unit carries no padding (24 bits),
/// one `=` (16 bits) or two `=` (8 bits).
///
/// @see https://tools.ietf.org/html/rfc4648#section-4
const GROUP_SIZE: usize = 4;
const PADDING_OCCURRENCES: &[usize] = &[0, 1, 2];

static BASE64_ALPHABET: OnceLock<Alphabet> = OnceLock::new();
static BASE64_URL_ALPHABET: OnceLock<Alphabet> = OnceLock::new();

fn get_base64_alphabet() -> &'static Alphabet {
    BASE64_ALPHABET.get_or_init(|| Alphabet::from_symbols(STANDARD_ALPHABET.chars()).unwrap())
}

fn get_base64_url_alphabet() -> &'static Alphabet {
    BASE64_URL_ALPHABET.get_or_init(|| Alphabet::from_symbols(URL_ALPHABET.chars()).unwrap())
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
    make_profile(get_base64_alphabet())
}

// @see https://tools.ietf.org/html/rfc4648#section-5
pub(super) fn url_profile() -> Profile {
    make_profile(get_base64_url_alphabet())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base64_alphabets() {
        assert_eq!(get_base64_alphabet().len(), 64);
        assert_eq!(get_base64_url_alphabet().len(), 64);
        assert!(get_base64_alphabet().contains('+'));
        assert!(!get_base64_alphabet().contains('-'));
        assert!(get_base64_url_alphabet().contains('_'));
        assert!(!get_base64_url_alphabet().contains('/'));
    }

    #[test]
    fn test_padding_is_not_in_alphabet() {
        assert!(!get_base64_alphabet().contains('='));
        assert!(!get_base64_url_alphabet().contains('='));
    }
}
