//! Input well-formedness checks.
//!
//! Pure functions with no knowledge of the roster: uniqueness of emails and
//! existence of students are the router's business, not ours.

use lptrack_common::error::{NamePart, TrackerError, TrackerResult};
use once_cell::sync::Lazy;
use regex::Regex;

/// A letter, an optional single separator, then letter runs joined by single
/// separators. Rules out leading/trailing and doubled separators.
static NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z][ '-]?[A-Za-z]+(?:[ '-][A-Za-z]+)*$").expect("valid name regex"));

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z0-9]+$").expect("valid email regex")
});

pub fn is_valid_name(name: &str) -> bool {
    NAME_RE.is_match(name)
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Runs the registration checks in their fixed order and stops at the first failure.
pub fn validate_credentials(first_name: &str, last_name: &str, email: &str) -> TrackerResult<()> {
    if !is_valid_name(first_name) {
        return Err(TrackerError::NameInvalid(NamePart::First));
    }
    if !is_valid_name(last_name) {
        return Err(TrackerError::NameInvalid(NamePart::Last));
    }
    if !is_valid_email(email) {
        return Err(TrackerError::EmailInvalid);
    }
    Ok(())
}

/// Parses a whitespace separated points line.
///
/// Every token must be plain decimal digits (no sign, no decimal point) and
/// there must be exactly `course_count` of them. Returns the deltas in the
/// order given, or [`TrackerError::PointsInvalid`] without partial results.
pub fn parse_points(line: &str, course_count: usize) -> TrackerResult<Vec<u64>> {
    let points = line
        .split_whitespace()
        .map(|token| {
            if token.bytes().all(|b| b.is_ascii_digit()) {
                token.parse::<u64>().map_err(|_| TrackerError::PointsInvalid)
            } else {
                Err(TrackerError::PointsInvalid)
            }
        })
        .collect::<TrackerResult<Vec<u64>>>()?;

    if points.len() != course_count {
        return Err(TrackerError::PointsInvalid);
    }
    Ok(points)
}
