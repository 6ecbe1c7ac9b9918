use crate::encoding::{util, EncodingDefinition};
use crate::error::{BaseCheckError, Result};
use crate::subject::Subject;
use crate::types::{ValidatorOptions, Variant};

/// Checks whether text is a well-formed encoding, without decoding it.
#[derive(Debug, Clone)]
pub struct Validator {
    definition: EncodingDefinition,
}

impl Validator {
    /// Require padding and disallow partitioning.
    pub fn new(variant: Variant) -> Self {
        Self::from_options(variant, ValidatorOptions::default())
    }

    pub fn with_options(variant: Variant, require_padding: bool, allow_partitioning: bool) -> Self {
        Self::from_options(
            variant,
            ValidatorOptions {
                require_padding,
                allow_partitioning,
            },
        )
    }

    pub fn from_options(variant: Variant, options: ValidatorOptions) -> Self {
        Self {
            definition: EncodingDefinition::new(variant, options),
        }
    }

    pub fn definition(&self) -> &EncodingDefinition {
        &self.definition
    }

    pub fn name(&self) -> &str {
        self.definition.name()
    }

    pub fn identifier(&self) -> &str {
        self.definition.identifier()
    }

    /// Anything that is not text is invalid.
    pub fn validate<S: Subject + ?Sized>(&self, subject: &S) -> bool {
        self.check_subject(subject).is_ok()
    }

    pub fn check_subject<S: Subject + ?Sized>(&self, subject: &S) -> Result<()> {
        let text = subject.as_text().ok_or(BaseCheckError::NotText)?;
        self.check(text)
    }

    /// Like [`validate`](Self::validate), but reports why a message was
    /// rejected.
    pub fn check(&self, candidate: &str) -> Result<()> {
        let def = &self.definition;
        let message = def.prepare(candidate);

        // Without a padding character there are only whole groups.
        if def.is_padding_required() || def.padding_character().is_none() {
            self.check_length(&message)?;
        }

        util::validate_alphabet(def.strip_padding(&message), def.alphabet())
    }

    /// The message as the alphabet check sees it: partitions, check symbol
    /// and padding removed.
    pub fn normalize(&self, candidate: &str) -> String {
        let message = self.definition.prepare(candidate);
        self.definition.strip_padding(&message).to_string()
    }

    fn check_length(&self, message: &str) -> Result<()> {
        let def = &self.definition;
        let group_size = def.group_size();
        let length = message.chars().count();

        if length % group_size != 0 {
            return Err(BaseCheckError::invalid_length(group_size, length));
        }

        if length == 0 || def.padding_character().is_none() {
            return Ok(());
        }

        let final_group = def.strip_padding(util::final_group(message, group_size));

        // A final group of nothing but padding is always accepted.
        if final_group.is_empty() {
            return Ok(());
        }

        let count = group_size - final_group.chars().count();
        if !def.maximum_padding_occurrences().contains(&count) {
            return Err(BaseCheckError::invalid_padding(
                count,
                def.maximum_padding_occurrences().iter().copied(),
            ));
        }

        Ok(())
    }
}
