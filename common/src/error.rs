//! # Tracker Errors
//!
//! Every rejection the tracker can produce while handling console input.
//!
//! None of these are fatal. The command router prints the [`Display`] form of
//! the error as a single diagnostic line and keeps reading input, so the
//! messages below are part of the console transcript and must stay stable.
//!
//! [`Display`]: std::fmt::Display

use std::fmt;

use thiserror::Error;

/// Which half of a student's name failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamePart {
    First,
    Last,
}

impl fmt::Display for NamePart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NamePart::First => f.write_str("first"),
            NamePart::Last => f.write_str("last"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrackerError {
    #[error("Incorrect {0} name")]
    NameInvalid(NamePart),

    #[error("Incorrect email")]
    EmailInvalid,

    /// The registration line does not even have the `first last email` shape.
    #[error("Incorrect credentials")]
    CredentialsInvalid,

    #[error("Incorrect points format.")]
    PointsInvalid,

    #[error("This email is already taken.")]
    EmailTaken,

    /// Carries the id exactly as typed, which may not even be numeric.
    #[error("No student is found for id={0}")]
    StudentNotFound(String),

    #[error("Unknown course.")]
    UnknownCourse,

    #[error("Error: unknown command!")]
    UnknownCommand,

    #[error("No input.")]
    NoInput,
}

pub type TrackerResult<T> = Result<T, TrackerError>;
