//! Error types used in the library.
//!
//! - No part of a refutation (resolution, simplification, reconstruction) can fail once given well-formed clauses.
//!   So, every error here is found at the boundary of the library: reading text, checking input, or touching a knowledge base file.
//! - Some apparent failures are not errors.
//!   A query which does not lead to a refutation is [Exhausted](crate::reports::Report::Exhausted), and a retraction of a missing clause is a [report](crate::session::SessionReport::RetractMissing).
//!
//! Names of the error enums --- for the most part --- overlap with corresponding structs.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

/// The general error type of the library, wrapping specific errors.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Input(InputError),
    Parse(ParseError),
    Storage(StorageError),
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Input(e) => write!(f, "Invalid input: {e}"),
            Self::Parse(e) => write!(f, "Parse error: {e}"),
            Self::Storage(e) => write!(f, "Storage error: {e}"),
        }
    }
}

impl std::error::Error for ErrorKind {}

/// Errors in the clauses given to a refutation or a knowledge base.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InputError {
    /// A clause without literals, where some literal is required.
    EmptyClause,
}

impl std::fmt::Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyClause => write!(f, "a clause must contain at least one literal"),
        }
    }
}

impl From<InputError> for ErrorKind {
    fn from(e: InputError) -> Self {
        ErrorKind::Input(e)
    }
}

/// Errors during parsing.
///
/// Line numbers are 1-based and count every line of the input, including comments.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// An empty string, where some non-empty string was required.
    Empty,

    /// A negation character was read, but no candidate for negation was found.
    Negation(usize),

    /// Something which is not an atom, where an atom was required.
    Atom(usize),

    /// An instruction without one of the operations `?`, `+`, or `-`.
    Operation(usize),

    /// Some input was read, but no clause to use as a goal was found.
    NoGoal,

    /// The input could not be read at a specific line.
    Line(usize),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "empty clause text"),
            Self::Negation(line) => write!(f, "negation without an atom on line {line}"),
            Self::Atom(line) => write!(f, "invalid atom on line {line}"),
            Self::Operation(line) => write!(f, "unknown operation on line {line}"),
            Self::NoGoal => write!(f, "no goal clause found"),
            Self::Line(line) => write!(f, "failed to read line {line}"),
        }
    }
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

/// Errors when reading or writing a knowledge base file.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum StorageError {
    /// The file could not be read.
    Read(std::io::ErrorKind),

    /// The file (or the temporary file written in place of it) could not be written.
    Write(std::io::ErrorKind),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Read(kind) => write!(f, "failed to read knowledge base ({kind})"),
            Self::Write(kind) => write!(f, "failed to write knowledge base ({kind})"),
        }
    }
}

impl From<StorageError> for ErrorKind {
    fn from(e: StorageError) -> Self {
        ErrorKind::Storage(e)
    }
}
