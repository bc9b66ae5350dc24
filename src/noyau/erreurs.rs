// src/noyau/erreurs.rs
//
// Deux taxonomies parallèles :
// - ErrorKind      : bibliothèque d'opérations numériques
// - ParseErrorKind : évaluateur (syntaxe + arithmétique remontée)
//
// Les chaînes #[error] sont les messages fixes affichés par l'hôte
// ("ERROR: <message>").

use thiserror::Error;

/// Erreurs de la bibliothèque d'opérations numériques.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    #[error("Invalid input")]
    InvalidInput,
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Domain error")]
    DomainError,
    #[error("Overflow error")]
    Overflow,
    #[error("Underflow error")]
    Underflow,
    #[error("Memory error")]
    MemoryError,
    #[error("Invalid function")]
    InvalidFunction,
    #[error("Parse error")]
    ParseError,
}

/// Erreurs de l'évaluateur.
///
/// `Arithmetic` transporte tel quel un `ErrorKind` qui n'a pas d'équivalent
/// direct ici (Overflow, InvalidInput, ...) : on ne perd jamais la classe
/// d'origine en traversant l'arbre d'évaluation.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    #[error("Invalid character")]
    InvalidCharacter,
    #[error("Mismatched parentheses")]
    MismatchedParentheses,
    #[error("Invalid function")]
    InvalidFunction,
    #[error("Invalid syntax")]
    InvalidSyntax,
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Domain error")]
    DomainError,
    #[error("Too many arguments")]
    TooManyArguments,
    #[error("Too few arguments")]
    TooFewArguments,
    #[error("{0}")]
    Arithmetic(ErrorKind),
}

impl From<ErrorKind> for ParseErrorKind {
    fn from(kind: ErrorKind) -> Self {
        match kind {
            ErrorKind::DivisionByZero => ParseErrorKind::DivisionByZero,
            ErrorKind::DomainError => ParseErrorKind::DomainError,
            ErrorKind::InvalidFunction => ParseErrorKind::InvalidFunction,
            autre => ParseErrorKind::Arithmetic(autre),
        }
    }
}

impl ParseErrorKind {
    /// Projection vers la taxonomie arithmétique (pour un appelant qui ne
    /// connaît que `ErrorKind`). Les fautes purement syntaxiques deviennent
    /// `ErrorKind::ParseError`.
    pub fn error_kind(self) -> ErrorKind {
        match self {
            ParseErrorKind::DivisionByZero => ErrorKind::DivisionByZero,
            ParseErrorKind::DomainError => ErrorKind::DomainError,
            ParseErrorKind::InvalidFunction => ErrorKind::InvalidFunction,
            ParseErrorKind::Arithmetic(kind) => kind,
            ParseErrorKind::InvalidCharacter
            | ParseErrorKind::MismatchedParentheses
            | ParseErrorKind::InvalidSyntax
            | ParseErrorKind::TooManyArguments
            | ParseErrorKind::TooFewArguments => ErrorKind::ParseError,
        }
    }
}

/// Échec terminal d'une évaluation : classe + position dans le texte source
/// (index d'octet, toujours dans `[0, longueur]`) + message fixe.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{message} (position {position})")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub position: usize,
    pub message: String,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, position: usize) -> Self {
        Self {
            kind,
            position,
            message: kind.to_string(),
        }
    }

    pub fn error_kind(&self) -> ErrorKind {
        self.kind.error_kind()
    }
}
