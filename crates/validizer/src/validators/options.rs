//! Free-text validation against an enumerated set of options.
//!
//! [`OptionMatcher`] accepts input that names one of its options, ignoring
//! case and redundant spaces, and returns the option in its canonical
//! casing. With autocomplete enabled a unique prefix is enough; an
//! ambiguous prefix is rejected rather than guessed.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use smallvec::SmallVec;

use crate::foundation::{
    ErrorKind, Validate, ValidationError, ValidationResult, collapse_spaces,
};

// ============================================================================
// OPTION SET
// ============================================================================

/// An ordered list of canonical option strings.
///
/// Options are normalized on construction: surrounding whitespace is trimmed,
/// internal runs of spaces collapse to one, and options left empty are
/// dropped. Order is kept for display only.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OptionSet {
    options: Vec<String>,
}

impl OptionSet {
    /// Creates an option set from any list of strings.
    pub fn new<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            options: options
                .into_iter()
                .map(|o| collapse_spaces(o.as_ref()))
                .filter(|o| !o.is_empty())
                .collect(),
        }
    }

    /// Parses a comma-delimited list such as `"Rock, Paper,Scissors"`.
    #[must_use]
    pub fn parse(delimited: &str) -> Self {
        Self::new(delimited.split(','))
    }

    /// Returns the options as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.options
    }

    /// Iterates over the options in order.
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.options.iter()
    }

    /// Returns the number of options.
    #[must_use]
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Returns `true` if there are no options.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

impl fmt::Display for OptionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.options.join(", "))
    }
}

impl FromStr for OptionSet {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl<S: AsRef<str>> FromIterator<S> for OptionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<'a> IntoIterator for &'a OptionSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ============================================================================
// OPTION MATCHER
// ============================================================================

/// Validates input against an [`OptionSet`].
///
/// # Examples
///
/// ```
/// use validizer::validators::{OptionMatcher, OptionSet};
/// use validizer::foundation::Validate;
///
/// let rps = OptionMatcher::new(OptionSet::parse("Rock,Paper,Scissors")).autocomplete(true);
/// assert_eq!(rps.validate("ro").unwrap(), "Rock");
/// assert_eq!(rps.validate("SCISSORS").unwrap(), "Scissors");
/// assert!(rps.validate("lizard").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OptionMatcher {
    options: OptionSet,
    autocomplete: bool,
}

impl OptionMatcher {
    /// Creates an exact (case-insensitive) matcher.
    #[must_use]
    pub fn new(options: OptionSet) -> Self {
        Self {
            options,
            autocomplete: false,
        }
    }

    /// Enables or disables unique-prefix matching.
    #[must_use = "builder methods must be chained or built"]
    pub fn autocomplete(mut self, enabled: bool) -> Self {
        self.autocomplete = enabled;
        self
    }

    /// Returns the options this matcher accepts.
    #[must_use]
    pub fn options(&self) -> &OptionSet {
        &self.options
    }

    fn no_match(&self, code: &'static str, message: String) -> ValidationError {
        ValidationError::new(ErrorKind::NoMatch, code, message)
            .with_param("options", self.options.to_string())
    }

    fn match_prefix(&self, query: &str, needle: &str) -> ValidationResult<String> {
        let matches: SmallVec<[&String; 4]> = self
            .options
            .iter()
            .filter(|option| option.to_lowercase().starts_with(needle))
            .collect();

        match matches.as_slice() {
            [only] => Ok((*only).clone()),
            [] => Err(self.no_match(
                "option_no_match",
                format!(
                    "No matches for: {query}. Valid options: ({})",
                    self.options
                ),
            )),
            several => {
                let matched = several
                    .iter()
                    .map(|s| s.as_str())
                    .collect::<Vec<_>>()
                    .join(", ");
                Err(ValidationError::new(
                    ErrorKind::AmbiguousMatch,
                    "option_ambiguous",
                    format!(
                        "Too many matches for: {query}. Valid options: ({})",
                        self.options
                    ),
                )
                .with_param("options", self.options.to_string())
                .with_param("matches", matched))
            }
        }
    }

    fn match_exact(&self, query: &str, needle: &str) -> ValidationResult<String> {
        self.options
            .iter()
            .find(|option| option.to_lowercase() == needle)
            .cloned()
            .ok_or_else(|| {
                self.no_match(
                    "option_not_found",
                    format!(
                        "{query} is not an option. Valid options: ({}).",
                        self.options
                    ),
                )
            })
    }
}

impl Validate for OptionMatcher {
    type Input = str;
    type Output = String;

    fn validate(&self, input: &str) -> ValidationResult<String> {
        let query = collapse_spaces(input);
        if query.is_empty() {
            return Err(ValidationError::blank("option_blank"));
        }
        if self.options.is_empty() {
            return Err(ValidationError::misconfigured(
                "Option matcher has no options to match against.",
            ));
        }

        let needle = query.to_lowercase();
        if self.autocomplete {
            self.match_prefix(&query, &needle)
        } else {
            self.match_exact(&query, &needle)
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
