use std::collections::HashMap;
use std::str::FromStr;
use std::sync::OnceLock;

use crate::error::{BaseCheckError, Result};
use crate::types::Variant;

macro_rules! register_variants {
    ($($variant:ident => [$($alias:expr),* $(,)?]),* $(,)?) => {
        fn build_registry() -> Registry {
            let mut name_map = HashMap::new();
            $(
                name_map.insert(Variant::$variant.to_string(), Variant::$variant);
                $(name_map.insert($alias.to_string(), Variant::$variant);)*
            )*
            Registry { name_map }
        }

        fn aliases_of(variant: Variant) -> &'static [&'static str] {
            match variant {
                $(Variant::$variant => &[$($alias),*],)*
            }
        }
    };
}

register_variants! {
    Base16 => ["b16", "hex"],
    Base32 => ["b32"],
    Base32Hex => ["b32hex"],
    Base32Crockford => ["crockford", "crockford32", "base32-crockford"],
    Base64 => ["b64", "std64"],
    Base64Url => ["b64url", "base64-url"],
}

static REGISTRY: OnceLock<Registry> = OnceLock::new();

/// Lookup of encodings by name or alias.
pub struct Registry {
    name_map: HashMap<String, Variant>,
}

impl Registry {
    fn new() -> Self {
        build_registry()
    }

    pub fn global() -> &'static Registry {
        REGISTRY.get_or_init(Registry::new)
    }

    /// Names are matched case-insensitively.
    pub fn get(&self, name: &str) -> Result<Variant> {
        self.name_map
            .get(name.to_lowercase().as_str())
            .copied()
            .ok_or_else(|| BaseCheckError::unsupported_encoding(name))
    }

    pub fn aliases(&self, variant: Variant) -> &'static [&'static str] {
        aliases_of(variant)
    }

    pub fn list(&self) -> Vec<Variant> {
        Variant::ALL.to_vec()
    }
}

impl FromStr for Variant {
    type Err = BaseCheckError;

    fn from_str(s: &str) -> Result<Self> {
        Registry::global().get(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_name() {
        for variant in Variant::ALL {
            assert_eq!(Registry::global().get(&variant.to_string()).unwrap(), variant);
        }
    }

    #[test]
    fn test_lookup_by_alias() {
        assert_eq!("hex".parse::<Variant>().unwrap(), Variant::Base16);
        assert_eq!("crockford".parse::<Variant>().unwrap(), Variant::Base32Crockford);
        assert_eq!("b64url".parse::<Variant>().unwrap(), Variant::Base64Url);
    }

    #[test]
    fn test_lookup_case_insensitive() {
        assert_eq!("Base32Hex".parse::<Variant>().unwrap(), Variant::Base32Hex);
    }

    #[test]
    fn test_unknown_name() {
        let err = "base58".parse::<Variant>().unwrap_err();
        assert_eq!(err, BaseCheckError::unsupported_encoding("base58"));
    }

    #[test]
    fn test_aliases_unique() {
        let registry = Registry::global();
        let mut seen = std::collections::HashSet::new();
        for variant in registry.list() {
            assert!(seen.insert(variant.to_string()));
            for alias in registry.aliases(variant) {
                assert!(seen.insert(alias.to_string()), "duplicate alias {}", alias);
            }
        }
    }
}
