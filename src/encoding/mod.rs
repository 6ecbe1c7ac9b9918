mod base16;
mod base32;
mod base64;
mod crockford;
pub mod registry;
pub(crate) mod util;

use std::borrow::Cow;
use std::collections::BTreeSet;

use serde::Serialize;

use crate::alphabet::Alphabet;
use crate::types::{PaddingSide, ValidatorOptions, Variant};

pub use crockford::CHECK_SYMBOLS;
pub use registry::Registry;

pub const CRLF: &str = "\r\n";

/// Fixed per-variant constants.
pub(crate) struct Profile {
    pub alphabet: &'static Alphabet,
    pub group_size: usize,
    pub padding: Option<char>,
    pub padding_side: PaddingSide,
    pub padding_occurrences: &'static [usize],
    pub partition_separator: &'static str,
}

impl Profile {
    fn of(variant: Variant) -> Self {
        match variant {
            Variant::Base16 => base16::profile(),
            Variant::Base32 => base32::profile(),
            Variant::Base32Hex => base32::hex_profile(),
            Variant::Base32Crockford => crockford::profile(),
            Variant::Base64 => base64::profile(),
            Variant::Base64Url => base64::url_profile(),
        }
    }
}

/// Everything needed to judge whether a message is a well-formed encoding.
#[derive(Debug, Clone, Serialize)]
pub struct EncodingDefinition {
    variant: Variant,
    name: String,
    identifier: String,
    alphabet: &'static Alphabet,
    group_size: usize,
    padding: Option<char>,
    padding_side: PaddingSide,
    maximum_padding_occurrences: BTreeSet<usize>,
    padding_required: bool,
    partitioning_allowed: bool,
    partition_separator: &'static str,
}

impl EncodingDefinition {
    /// Encodings without a padding character can never require it, so
    /// `require_padding` is ignored for them.
    pub fn new(variant: Variant, options: ValidatorOptions) -> Self {
        let profile = Profile::of(variant);
        assert!(profile.group_size > 0, "group size of {} must be positive", variant);

        let padding_required = options.require_padding && profile.padding.is_some();
        let name = format!("base{}{}", profile.alphabet.len(), variant.suffix());
        let identifier = format!(
            "{}({},{})",
            name,
            if padding_required {
                "require-padding"
            } else {
                "padding-optional"
            },
            if options.allow_partitioning {
                "partitioning"
            } else {
                "no-partitioning"
            }
        );

        Self {
            variant,
            name,
            identifier,
            alphabet: profile.alphabet,
            group_size: profile.group_size,
            padding: profile.padding,
            padding_side: profile.padding_side,
            maximum_padding_occurrences: profile.padding_occurrences.iter().copied().collect(),
            padding_required,
            partitioning_allowed: options.allow_partitioning,
            partition_separator: profile.partition_separator,
        }
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// e.g. `base32`, `base32crockford`, `base64url`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// e.g. `base64(require-padding,no-partitioning)`.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn alphabet(&self) -> &Alphabet {
        self.alphabet
    }

    /// Characters per encoded unit.
    pub fn group_size(&self) -> usize {
        self.group_size
    }

    pub fn padding_character(&self) -> Option<char> {
        self.padding
    }

    pub fn padding_side(&self) -> PaddingSide {
        self.padding_side
    }

    /// Legal amounts of padding characters in the final group.
    pub fn maximum_padding_occurrences(&self) -> &BTreeSet<usize> {
        &self.maximum_padding_occurrences
    }

    pub fn is_padding_required(&self) -> bool {
        self.padding_required
    }

    pub fn is_partitioning_allowed(&self) -> bool {
        self.partitioning_allowed
    }

    pub fn partition_separator(&self) -> &str {
        self.partition_separator
    }

    /// Remove partition separators, if partitioning is allowed.
    pub fn strip_partitions<'a>(&self, message: &'a str) -> Cow<'a, str> {
        if self.partitioning_allowed {
            util::strip_partitions(message, self.partition_separator)
        } else {
            Cow::Borrowed(message)
        }
    }

    /// Trim the padding character from the side this encoding pads.
    pub fn strip_padding<'a>(&self, message: &'a str) -> &'a str {
        util::trim_padding(message, self.padding, self.padding_side)
    }

    /// Apply the variant specific rewrites that precede length and alphabet
    /// checks.
    pub fn prepare<'a>(&self, candidate: &'a str) -> Cow<'a, str> {
        let message = self.strip_partitions(candidate);
        match self.variant {
            Variant::Base32Crockford => crockford::strip_check_symbol(message, self.padding_required),
            _ => message,
        }
    }
}
