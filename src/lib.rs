//! Validation of RFC4648 base16, base32, base32hex, base64, base64url and
//! Crockford base32 text, without decoding it.
//!
//! ```
//! use basecheck::{Validator, Variant};
//!
//! let validator = Validator::new(Variant::Base64);
//! assert!(validator.validate("d2Fycmlvcg=="));
//! assert!(!validator.validate("d2Fycmlvcg"));
//! assert_eq!(validator.identifier(), "base64(require-padding,no-partitioning)");
//! ```

pub mod alphabet;
pub mod encoding;
pub mod error;
pub mod subject;
pub mod types;
pub mod validator;

pub use alphabet::{Alphabet, EquivalenceClass};
pub use encoding::{EncodingDefinition, Registry, CHECK_SYMBOLS};
pub use error::{BaseCheckError, Result};
pub use subject::Subject;
pub use types::{PaddingSide, ValidatorOptions, Variant};
pub use validator::Validator;
