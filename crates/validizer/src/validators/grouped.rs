//! Fixed-length digit numbers split into groups.
//!
//! MCP (provincial medical care plan) numbers and bank card numbers are
//! all-digit tokens of an exact length, re-emitted with a separator between
//! fixed-size groups. Bank cards additionally check the issuer digit.

use std::collections::BTreeMap;

use crate::config::default_card_issuers;
use crate::foundation::{ErrorKind, Validate, ValidationError, ValidationResult, strip};

// ============================================================================
// DIGIT GROUPS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct DigitGroups {
    sizes: &'static [usize],
    separator: char,
}

impl DigitGroups {
    fn len(self) -> usize {
        self.sizes.iter().sum()
    }

    /// Strips `input` and splits it into groups, or explains why it cannot.
    fn format(self, input: &str, code: &'static str) -> ValidationResult<String> {
        let digits = strip(input);
        if digits.is_empty() {
            return Err(ValidationError::blank(code));
        }
        if !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(ValidationError::new(
                ErrorKind::BadCharacter,
                code,
                format!("{input} is not a valid number."),
            )
            .with_param("input", input.to_owned()));
        }
        if digits.len() != self.len() {
            return Err(ValidationError::wrong_length(
                code,
                &digits,
                self.len(),
                "digits",
            ));
        }

        let mut output = String::with_capacity(self.len() + self.sizes.len());
        let mut offset = 0;
        for (i, &size) in self.sizes.iter().enumerate() {
            if i > 0 {
                output.push(self.separator);
            }
            output.push_str(&digits[offset..offset + size]);
            offset += size;
        }
        Ok(output)
    }
}

// ============================================================================
// MCP NUMBER
// ============================================================================

const MCP_GROUPS: DigitGroups = DigitGroups {
    sizes: &[3, 3, 3, 3],
    separator: ' ',
};

/// Validates 12-digit MCP numbers, formatted `999 999 999 999`.
///
/// ```
/// use validizer::validators::Mcp;
/// use validizer::foundation::Validate;
///
/// assert_eq!(Mcp.validate("123456789012").unwrap(), "123 456 789 012");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Mcp;

impl Validate for Mcp {
    type Input = str;
    type Output = String;

    fn validate(&self, input: &str) -> ValidationResult<String> {
        MCP_GROUPS.format(input, "mcp")
    }
}

// ============================================================================
// BANK CARD
// ============================================================================

const CARD_GROUPS: DigitGroups = DigitGroups {
    sizes: &[4, 4, 4, 4],
    separator: '-',
};

/// Validates 16-digit bank card numbers, formatted `9999-9999-9999-9999`.
///
/// The first digit identifies the issuer and must be one of the configured
/// issuers (Amex, Visa and MasterCard by default).
///
/// ```
/// use validizer::validators::BankCard;
/// use validizer::foundation::Validate;
///
/// let card = BankCard::default();
/// assert_eq!(card.validate("4111 1111 1111 1111").unwrap(), "4111-1111-1111-1111");
/// assert!(card.validate("9111111111111111").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BankCard {
    issuers: BTreeMap<u8, String>,
}

impl BankCard {
    /// Creates a validator accepting the given lead-digit issuers.
    #[must_use]
    pub fn new(issuers: BTreeMap<u8, String>) -> Self {
        Self { issuers }
    }

    /// Returns the issuer name for a card number, if its lead digit is known.
    #[must_use]
    pub fn issuer(&self, number: &str) -> Option<&str> {
        let lead = number.chars().find(char::is_ascii_digit)?;
        let digit = u8::try_from(lead.to_digit(10)?).ok()?;
        self.issuers.get(&digit).map(String::as_str)
    }

    /// Issuer names in lead-digit order, comma-joined.
    #[must_use]
    pub fn issuer_names(&self) -> String {
        self.issuers
            .values()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Default for BankCard {
    fn default() -> Self {
        Self::new(default_card_issuers())
    }
}

impl Validate for BankCard {
    type Input = str;
    type Output = String;

    fn validate(&self, input: &str) -> ValidationResult<String> {
        let formatted = CARD_GROUPS.format(input, "bank_card")?;
        if self.issuer(&formatted).is_none() {
            let accepted = self.issuer_names();
            return Err(ValidationError::new(
                ErrorKind::UnknownCategory,
                "card_issuer",
                format!("{formatted} is not an accepted card type ({accepted})."),
            )
            .with_param("input", formatted)
            .with_param("accepted", accepted));
        }
        Ok(formatted)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    mod mcp {
        use super::*;

        #[test]
        fn test_valid_mcp() {
            assert_eq!(Mcp.validate("123 456 789 012").unwrap(), "123 456 789 012");
            assert_eq!(Mcp.validate("123-456-789-012").unwrap(), "123 456 789 012");
        }

        #[test]
        fn test_mcp_length() {
            let error = Mcp.validate("12345").unwrap_err();
            assert_eq!(error.kind, ErrorKind::WrongLength);
            assert_eq!(error.message, "12345 is not 12 digits.");
        }

        #[test]
        fn test_mcp_letters() {
            let error = Mcp.validate("12345678901A").unwrap_err();
            assert_eq!(error.kind, ErrorKind::BadCharacter);
        }

        #[test]
        fn test_mcp_blank() {
            assert_eq!(Mcp.validate(" - ").unwrap_err().kind, ErrorKind::Blank);
        }
    }

    mod bank_card {
        use super::*;

        #[test]
        fn test_known_issuers() {
            let card = BankCard::default();
            assert_eq!(
                card.validate("4111111111111111").unwrap(),
                "4111-1111-1111-1111"
            );
            assert_eq!(
                card.validate("5500 0000 0000 0004").unwrap(),
                "5500-0000-0000-0004"
            );
            assert_eq!(card.issuer("3400-0000-0000-0009"), Some("Amex"));
        }

        #[test]
        fn test_unknown_issuer() {
            let card = BankCard::default();
            let error = card.validate("9111111111111111").unwrap_err();
            assert_eq!(error.kind, ErrorKind::UnknownCategory);
            assert_eq!(
                error.message,
                "9111-1111-1111-1111 is not an accepted card type (Amex, Visa, MasterCard)."
            );
            assert_eq!(error.param("accepted"), Some("Amex, Visa, MasterCard"));
        }

        #[test]
        fn test_wrong_length() {
            let card = BankCard::default();
            let error = card.validate("4111").unwrap_err();
            assert_eq!(error.kind, ErrorKind::WrongLength);
        }

        #[test]
        fn test_wrong_length_counts_digits_only() {
            let error = BankCard::default().validate("4111 1111").unwrap_err();
            assert_eq!(error.message, "41111111 is not 16 digits.");
            assert_eq!(error.param("actual"), Some("8"));
            assert_eq!(error.param("expected"), Some("16"));
        }

        #[test]
        fn test_custom_issuers() {
            let card = BankCard::new(BTreeMap::from([(6, "Discover".to_owned())]));
            assert!(card.validate("6011000000000004").is_ok());
            assert!(card.validate("4111111111111111").is_err());
        }
    }
}
