//! Error types for name validation.

use thiserror::Error;

use crate::rules::{
    Listed, Rule, FORBIDDEN_NAMES, INVALID_CHARACTERS, INVALID_START_CHARACTERS, MAX_NAME_BYTES,
};
use crate::NameKind;

/// Errors that can occur when validating or comparing names.
///
/// Every validation variant carries the kind of name and the rejected input,
/// and its message lists the full rule parameters so callers can show the
/// error as-is.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NameError {
    /// The name is empty or consists only of whitespace.
    #[error("{kind} name cannot be empty or whitespace")]
    EmptyOrWhitespace { kind: NameKind, name: String },

    /// The name contains an uppercase letter.
    #[error("{kind} '{name}' cannot contain uppercase letters")]
    ContainsUppercase { kind: NameKind, name: String },

    /// The name contains a character the cluster rejects.
    #[error(
        "{kind} '{name}' cannot contain any of the following characters: {}",
        Listed(&INVALID_CHARACTERS[..])
    )]
    ContainsInvalidCharacter { kind: NameKind, name: String },

    /// The name starts with a reserved character.
    #[error(
        "{kind} '{name}' cannot start with any of the following characters: {}",
        Listed(&INVALID_START_CHARACTERS[..])
    )]
    InvalidStartCharacter { kind: NameKind, name: String },

    /// The name is one of the reserved names.
    #[error("{kind} '{name}' cannot be any of the following: {}", Listed(&FORBIDDEN_NAMES[..]))]
    ForbiddenName { kind: NameKind, name: String },

    /// The UTF-8 encoding of the name is too long.
    #[error(
        "{kind} '{name}' cannot be longer than {} bytes (got {bytes})",
        MAX_NAME_BYTES
    )]
    TooLong {
        kind: NameKind,
        name: String,
        bytes: usize,
    },

    /// Two names of different kinds were compared.
    #[error("cannot compare {left} name with {right} name")]
    IncompatibleComparison { left: NameKind, right: NameKind },
}

impl NameError {
    /// Returns the rule that rejected the name, if this is a validation error.
    pub fn rule(&self) -> Option<Rule> {
        match self {
            NameError::EmptyOrWhitespace { .. } => Some(Rule::NotEmpty),
            NameError::ContainsUppercase { .. } => Some(Rule::Lowercase),
            NameError::ContainsInvalidCharacter { .. } => Some(Rule::NoInvalidCharacters),
            NameError::InvalidStartCharacter { .. } => Some(Rule::ValidStart),
            NameError::ForbiddenName { .. } => Some(Rule::NotForbidden),
            NameError::TooLong { .. } => Some(Rule::MaxLength),
            NameError::IncompatibleComparison { .. } => None,
        }
    }

    /// Returns the rejected input, if this is a validation error.
    pub fn name(&self) -> Option<&str> {
        match self {
            NameError::EmptyOrWhitespace { name, .. }
            | NameError::ContainsUppercase { name, .. }
            | NameError::ContainsInvalidCharacter { name, .. }
            | NameError::InvalidStartCharacter { name, .. }
            | NameError::ForbiddenName { name, .. }
            | NameError::TooLong { name, .. } => Some(name),
            NameError::IncompatibleComparison { .. } => None,
        }
    }

    /// Returns the kind of name the error is about.
    ///
    /// For comparison errors this is the kind of the left-hand side.
    pub fn kind(&self) -> NameKind {
        match self {
            NameError::EmptyOrWhitespace { kind, .. }
            | NameError::ContainsUppercase { kind, .. }
            | NameError::ContainsInvalidCharacter { kind, .. }
            | NameError::InvalidStartCharacter { kind, .. }
            | NameError::ForbiddenName { kind, .. }
            | NameError::TooLong { kind, .. } => *kind,
            NameError::IncompatibleComparison { left, .. } => *left,
        }
    }
}
