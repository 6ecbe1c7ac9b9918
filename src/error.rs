use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BaseCheckError {
    #[error("subject is not text")]
    NotText,

    #[error("invalid character '{char}' at position {position}")]
    InvalidCharacter { char: char, position: usize },

    #[error("invalid length: expected multiple of {group_size}, got {actual}")]
    InvalidLength { group_size: usize, actual: usize },

    #[error("invalid padding: {count} padding characters in final group, allowed {allowed:?}")]
    InvalidPadding { count: usize, allowed: Vec<usize> },

    #[error("alphabet equivalence class {index} is empty")]
    EmptyClass { index: usize },

    #[error("character '{char}' appears in more than one alphabet class")]
    DuplicateCharacter { char: char },

    #[error("unsupported encoding: {name}")]
    UnsupportedEncoding { name: String },
}

impl BaseCheckError {
    pub fn invalid_char(ch: char, pos: usize) -> Self {
        Self::InvalidCharacter {
            char: ch,
            position: pos,
        }
    }

    pub fn invalid_length(group_size: usize, actual: usize) -> Self {
        Self::InvalidLength { group_size, actual }
    }

    pub fn invalid_padding(count: usize, allowed: impl IntoIterator<Item = usize>) -> Self {
        Self::InvalidPadding {
            count,
            allowed: allowed.into_iter().collect(),
        }
    }

    pub fn unsupported_encoding(name: impl Into<String>) -> Self {
        Self::UnsupportedEncoding { name: name.into() }
    }

    /// Whether this error describes a rejected candidate rather than a misuse
    /// of the API.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            BaseCheckError::NotText
                | BaseCheckError::InvalidCharacter { .. }
                | BaseCheckError::InvalidLength { .. }
                | BaseCheckError::InvalidPadding { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, BaseCheckError>;
