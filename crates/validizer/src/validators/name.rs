//! Personal and place name validator.

use std::collections::BTreeSet;

use crate::config::DEFAULT_NAME_CHARACTERS;
use crate::foundation::{ErrorKind, Validate, ValidationError, ValidationResult, collapse_spaces};

/// Validates names against an allowed character set and title-cases them.
///
/// Characters are compared upper-cased, so the allowed set only needs the
/// capital form of each letter.
///
/// # Examples
///
/// ```
/// use validizer::validators::Name;
/// use validizer::foundation::Validate;
///
/// let name = Name::default();
/// assert_eq!(name.validate("mary-jane o'brien").unwrap(), "Mary-Jane O'Brien");
/// assert!(name.validate("R2-D2").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Name {
    allowed: BTreeSet<char>,
}

impl Name {
    /// Creates a validator accepting the characters of `allowed`.
    #[must_use]
    pub fn new(allowed: &str) -> Self {
        Self {
            allowed: allowed.chars().flat_map(char::to_uppercase).collect(),
        }
    }

    /// Returns the allowed characters in sorted order.
    #[must_use]
    pub fn allowed(&self) -> String {
        self.allowed.iter().collect()
    }

    fn is_allowed(&self, c: char) -> bool {
        c.to_uppercase().all(|u| self.allowed.contains(&u))
    }
}

impl Default for Name {
    fn default() -> Self {
        Self::new(DEFAULT_NAME_CHARACTERS)
    }
}

impl Validate for Name {
    type Input = str;
    type Output = String;

    fn validate(&self, input: &str) -> ValidationResult<String> {
        let name = collapse_spaces(input);
        if name.is_empty() {
            return Err(ValidationError::blank("name_blank"));
        }

        let mut rejected: Vec<char> = Vec::new();
        for c in name.chars() {
            if !self.is_allowed(c) && !rejected.contains(&c) {
                rejected.push(c);
            }
        }

        if !rejected.is_empty() {
            let listed = rejected
                .iter()
                .map(|c| format!("'{c}'"))
                .collect::<Vec<_>>()
                .join(", ");
            return Err(ValidationError::new(
                ErrorKind::BadCharacter,
                "name_characters",
                format!("{input} contains characters that are not allowed: {listed}."),
            )
            .with_param("characters", rejected.into_iter().collect::<String>()));
        }

        Ok(title_case(&name))
    }
}

/// Upper-cases the first letter of every run of letters and lower-cases the
/// rest.
fn title_case(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut in_word = false;
    for c in input.chars() {
        if c.is_alphabetic() {
            if in_word {
                output.extend(c.to_lowercase());
            } else {
                output.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            output.push(c);
            in_word = false;
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("JOHN smith"), "John Smith");
        assert_eq!(title_case("o'neil"), "O'Neil");
        assert_eq!(title_case("st. john's"), "St. John'S");
    }

    #[test]
    fn test_valid_names() {
        let name = Name::default();
        assert_eq!(name.validate("  ada   LOVELACE ").unwrap(), "Ada Lovelace");
        assert_eq!(name.validate("st. john's").unwrap(), "St. John'S");
    }

    #[test]
    fn test_rejected_characters_listed_once() {
        let error = Name::default().validate("a1b1_").unwrap_err();
        assert_eq!(error.kind, ErrorKind::BadCharacter);
        assert_eq!(error.param("characters"), Some("1_"));
        assert_eq!(
            error.message,
            "a1b1_ contains characters that are not allowed: '1', '_'."
        );
    }

    #[test]
    fn test_blank() {
        assert_eq!(Name::default().validate(" ").unwrap_err().kind, ErrorKind::Blank);
    }

    #[test]
    fn test_custom_set_is_case_insensitive() {
        let name = Name::new("abcé ");
        assert_eq!(name.validate("CAB é").unwrap(), "Cab É");
        assert_eq!(name.allowed(), " ABCÉ");
    }
}
