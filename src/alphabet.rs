use std::collections::HashMap;

use serde::{Serialize, Serializer};

use crate::error::{BaseCheckError, Result};

/// A set of characters that all denote the same symbol. The first character
/// is the canonical spelling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EquivalenceClass {
    chars: Vec<char>,
}

impl EquivalenceClass {
    pub fn canonical(&self) -> char {
        self.chars[0]
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    pub fn contains(&self, ch: char) -> bool {
        self.chars.contains(&ch)
    }
}

impl Serialize for EquivalenceClass {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(&self.chars.iter().collect::<String>())
    }
}

/// An ordered, duplicate-free set of equivalence classes.
///
/// The position of a class is the value of its symbol. Membership is a
/// reverse lookup from character to class index, built once on construction.
#[derive(Debug, Clone, Serialize)]
pub struct Alphabet {
    classes: Vec<EquivalenceClass>,
    #[serde(skip)]
    lookup: HashMap<char, usize>,
}

impl Alphabet {
    /// Build an alphabet from one string per equivalence class, e.g.
    /// `["0Oo", "1IiLl", "2"]`.
    pub fn new<I, S>(classes: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut built = Vec::new();
        let mut lookup = HashMap::new();

        for (index, class) in classes.into_iter().enumerate() {
            let chars: Vec<char> = class.as_ref().chars().collect();
            if chars.is_empty() {
                return Err(BaseCheckError::EmptyClass { index });
            }
            for &ch in &chars {
                if lookup.insert(ch, index).is_some() {
                    return Err(BaseCheckError::DuplicateCharacter { char: ch });
                }
            }
            built.push(EquivalenceClass { chars });
        }

        Ok(Self {
            classes: built,
            lookup,
        })
    }

    /// Build an alphabet where every character is its own class.
    pub fn from_symbols<I>(symbols: I) -> Result<Self>
    where
        I: IntoIterator<Item = char>,
    {
        Self::new(symbols.into_iter().map(String::from))
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn contains(&self, ch: char) -> bool {
        self.lookup.contains_key(&ch)
    }

    pub fn class_of(&self, ch: char) -> Option<usize> {
        self.lookup.get(&ch).copied()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, EquivalenceClass> {
        self.classes.iter()
    }

    /// Every accepted character, in canonical class order.
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.classes.iter().flat_map(|c| c.chars.iter().copied())
    }

    /// The canonical spelling of the alphabet, one character per class.
    pub fn symbols(&self) -> String {
        self.classes.iter().map(EquivalenceClass::canonical).collect()
    }
}

impl<'a> IntoIterator for &'a Alphabet {
    type Item = &'a EquivalenceClass;
    type IntoIter = std::slice::Iter<'a, EquivalenceClass>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_symbols() {
        let alphabet = Alphabet::from_symbols('0'..='9').unwrap();
        assert_eq!(alphabet.len(), 10);
        assert!(alphabet.contains('7'));
        assert!(!alphabet.contains('a'));
        assert_eq!(alphabet.class_of('7'), Some(7));
        assert_eq!(alphabet.symbols(), "0123456789");
    }

    #[test]
    fn test_equivalence_classes() {
        let alphabet = Alphabet::new(["0Oo", "1IiLl", "2"]).unwrap();
        assert_eq!(alphabet.len(), 3);
        assert_eq!(alphabet.class_of('o'), Some(0));
        assert_eq!(alphabet.class_of('L'), Some(1));
        assert_eq!(alphabet.class_of('2'), Some(2));
        assert_eq!(alphabet.class_of('3'), None);
        assert_eq!(alphabet.symbols(), "012");
        assert_eq!(alphabet.chars().count(), 9);
    }

    #[test]
    fn test_iteration_order() {
        let alphabet = Alphabet::new(["Bb", "Aa"]).unwrap();
        let canonical: Vec<char> = alphabet.iter().map(EquivalenceClass::canonical).collect();
        assert_eq!(canonical, vec!['B', 'A']);
    }

    #[test]
    fn test_duplicate_character() {
        let result = Alphabet::new(["Aa", "ab"]);
        assert_eq!(result.unwrap_err(), BaseCheckError::DuplicateCharacter { char: 'a' });
    }

    #[test]
    fn test_empty_class() {
        let result = Alphabet::new(["A", ""]);
        assert_eq!(result.unwrap_err(), BaseCheckError::EmptyClass { index: 1 });
    }

    #[test]
    fn test_serialize() {
        let alphabet = Alphabet::new(["0Oo", "1"]).unwrap();
        assert_eq!(serde_json::to_string(&alphabet).unwrap(), r#"{"classes":["0Oo","1"]}"#);
    }
}
