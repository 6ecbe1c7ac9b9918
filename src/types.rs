use serde::Serialize;

/// The closed set of supported encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Base16,
    Base32,
    Base32Hex,
    Base32Crockford,
    Base64,
    Base64Url,
}

impl Variant {
    pub const ALL: [Variant; 6] = [
        Variant::Base16,
        Variant::Base32,
        Variant::Base32Hex,
        Variant::Base32Crockford,
        Variant::Base64,
        Variant::Base64Url,
    ];

    /// Appended to `base{N}` to form the encoding name.
    pub fn suffix(self) -> &'static str {
        match self {
            Variant::Base16 | Variant::Base32 | Variant::Base64 => "",
            Variant::Base32Hex => "hex",
            Variant::Base32Crockford => "crockford",
            Variant::Base64Url => "url",
        }
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let base = match self {
            Variant::Base16 => 16,
            Variant::Base32 | Variant::Base32Hex | Variant::Base32Crockford => 32,
            Variant::Base64 | Variant::Base64Url => 64,
        };
        write!(f, "base{}{}", base, self.suffix())
    }
}

/// Which end of a group the padding character fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PaddingSide {
    /// RFC4648 style: `=` follows the data.
    Right,
    /// Crockford style: zero-extension of the most significant digits.
    Left,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ValidatorOptions {
    pub require_padding: bool,
    pub allow_partitioning: bool,
}

impl Default for ValidatorOptions {
    fn default() -> Self {
        Self {
            require_padding: true,
            allow_partitioning: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_display() {
        let names: Vec<String> = Variant::ALL.iter().map(|v| v.to_string()).collect();
        assert_eq!(
            names,
            ["base16", "base32", "base32hex", "base32crockford", "base64", "base64url"]
        );
    }

    #[test]
    fn test_variant_serialize_matches_display() {
        for variant in Variant::ALL {
            assert_eq!(serde_json::to_value(variant).unwrap(), variant.to_string());
        }
    }

    #[test]
    fn test_default_options() {
        let options = ValidatorOptions::default();
        assert!(options.require_padding);
        assert!(!options.allow_partitioning);
    }
}
