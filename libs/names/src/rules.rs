//! Naming rules shared by index and alias names.
//!
//! The rule table mirrors the cluster's documented constraints for index
//! names. Rules are evaluated in the order of [`Rule::ALL`] and evaluation
//! stops at the first violation, so an input that breaks several rules always
//! reports the same one.

use std::fmt;

use crate::{NameError, NameKind};

/// Characters that may not appear anywhere in a name.
pub const INVALID_CHARACTERS: [char; 11] =
    ['\\', '/', '*', '?', '"', '<', '>', '|', ',', '#', ':'];

/// Characters a name may not start with.
pub const INVALID_START_CHARACTERS: [char; 3] = ['-', '_', '+'];

/// Names that are reserved in their entirety.
pub const FORBIDDEN_NAMES: [&str; 2] = [".", ".."];

/// Maximum length of a name, in bytes of UTF-8.
pub const MAX_NAME_BYTES: usize = 255;

/// A single naming rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    /// Not empty and not whitespace only.
    NotEmpty,
    /// No uppercase letters.
    Lowercase,
    /// None of [`INVALID_CHARACTERS`].
    NoInvalidCharacters,
    /// Does not start with any of [`INVALID_START_CHARACTERS`].
    ValidStart,
    /// Not one of [`FORBIDDEN_NAMES`].
    NotForbidden,
    /// At most [`MAX_NAME_BYTES`] bytes.
    MaxLength,
}

impl Rule {
    /// All rules, in evaluation order.
    pub const ALL: [Rule; 6] = [
        Rule::NotEmpty,
        Rule::Lowercase,
        Rule::NoInvalidCharacters,
        Rule::ValidStart,
        Rule::NotForbidden,
        Rule::MaxLength,
    ];

    /// Returns true if `name` satisfies this rule.
    pub fn check(self, name: &str) -> bool {
        match self {
            Rule::NotEmpty => !name.trim().is_empty(),
            Rule::Lowercase => !name.chars().any(char::is_uppercase),
            Rule::NoInvalidCharacters => !name.contains(INVALID_CHARACTERS),
            Rule::ValidStart => !name.starts_with(INVALID_START_CHARACTERS),
            Rule::NotForbidden => !FORBIDDEN_NAMES.contains(&name),
            Rule::MaxLength => name.len() <= MAX_NAME_BYTES,
        }
    }

    /// Short human-readable description of the rule.
    pub fn describe(self) -> String {
        match self {
            Rule::NotEmpty => "must not be empty or whitespace".to_string(),
            Rule::Lowercase => "must not contain uppercase letters".to_string(),
            Rule::NoInvalidCharacters => {
                format!("must not contain any of: {}", Listed(&INVALID_CHARACTERS[..]))
            }
            Rule::ValidStart => {
                format!("must not start with any of: {}", Listed(&INVALID_START_CHARACTERS[..]))
            }
            Rule::NotForbidden => format!("must not be any of: {}", Listed(&FORBIDDEN_NAMES[..])),
            Rule::MaxLength => format!("must not be longer than {MAX_NAME_BYTES} bytes"),
        }
    }

    /// Stable identifier of the rule, suitable for machine-readable output.
    pub const fn as_str(self) -> &'static str {
        match self {
            Rule::NotEmpty => "not_empty",
            Rule::Lowercase => "lowercase",
            Rule::NoInvalidCharacters => "no_invalid_characters",
            Rule::ValidStart => "valid_start",
            Rule::NotForbidden => "not_forbidden",
            Rule::MaxLength => "max_length",
        }
    }

    fn violation(self, kind: NameKind, name: &str) -> NameError {
        let name = name.to_string();
        match self {
            Rule::NotEmpty => NameError::EmptyOrWhitespace { kind, name },
            Rule::Lowercase => NameError::ContainsUppercase { kind, name },
            Rule::NoInvalidCharacters => NameError::ContainsInvalidCharacter { kind, name },
            Rule::ValidStart => NameError::InvalidStartCharacter { kind, name },
            Rule::NotForbidden => NameError::ForbiddenName { kind, name },
            Rule::MaxLength => {
                let bytes = name.len();
                NameError::TooLong { kind, name, bytes }
            }
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validates `name` as a name of the given kind.
///
/// Returns the error for the first rule in [`Rule::ALL`] that `name` breaks.
pub fn validate(kind: NameKind, name: &str) -> Result<(), NameError> {
    for rule in Rule::ALL {
        if !rule.check(name) {
            return Err(rule.violation(kind, name));
        }
    }
    Ok(())
}

/// Space-separated rendering of a rule parameter set.
pub(crate) struct Listed<'a, T>(pub &'a [T]);

impl<T: fmt::Display> fmt::Display for Listed<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, item) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{item}")?;
        }
        Ok(())
    }
}
