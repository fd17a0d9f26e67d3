//! # Tracker Configuration
//!
//! Defines the course registry the tracker is started with.
//!
//! Courses are given as `NAME=SCORE` pairs (e.g. `Python=600`). The order in
//! which they are supplied is the registration order used everywhere else:
//! points lines, score summaries, statistics ties and notification order.

use std::collections::HashSet;
use std::str::FromStr;

use thiserror::Error;

/// Courses used when no `--course` flag is given.
pub const DEFAULT_COURSES: &[(&str, u64)] = &[
    ("Python", 600),
    ("DSA", 400),
    ("Databases", 480),
    ("Flask", 550),
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid course '{0}': expected NAME=SCORE")]
    MissingSeparator(String),

    #[error("invalid course '{0}': name cannot be empty")]
    EmptyName(String),

    #[error("invalid course '{spec}': passing score must be a positive integer")]
    InvalidScore { spec: String },

    #[error("course '{0}' is configured more than once")]
    DuplicateCourse(String),

    #[error("at least one course must be configured")]
    NoCourses,
}

/// A single course definition: its display name and passing score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseSpec {
    pub name: String,
    pub passing_score: u64,
}

impl CourseSpec {
    pub fn new(name: impl Into<String>, passing_score: u64) -> Self {
        Self {
            name: name.into(),
            passing_score,
        }
    }
}

impl FromStr for CourseSpec {
    type Err = ConfigError;

    /// Parses `NAME=SCORE`.
    ///
    /// The name is trimmed and must be non-empty. The score must be a
    /// positive integer, since a zero threshold would mark every student as
    /// complete before they submit anything.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((name, score)) = s.rsplit_once('=') else {
            return Err(ConfigError::MissingSeparator(s.to_string()));
        };

        let name = name.trim();
        if name.is_empty() {
            return Err(ConfigError::EmptyName(s.to_string()));
        }

        let passing_score = score
            .trim()
            .parse::<u64>()
            .ok()
            .filter(|score| *score > 0)
            .ok_or_else(|| ConfigError::InvalidScore {
                spec: s.to_string(),
            })?;

        Ok(CourseSpec::new(name, passing_score))
    }
}

pub struct Config {
    /// Courses in registration order.
    ///
    /// Never empty and never contains two names that differ only by case,
    /// because course lookups in the statistics view are case-insensitive.
    pub courses: Vec<CourseSpec>,
}

impl Config {
    /// Builds a config from user supplied courses.
    ///
    /// Callers that want [`DEFAULT_COURSES`] when nothing was supplied use
    /// [`Config::default`] instead.
    pub fn new(courses: Vec<CourseSpec>) -> Result<Self, ConfigError> {
        validate_registry(&courses)?;
        Ok(Self { courses })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            courses: default_courses(),
        }
    }
}

fn default_courses() -> Vec<CourseSpec> {
    DEFAULT_COURSES
        .iter()
        .map(|(name, score)| CourseSpec::new(*name, *score))
        .collect()
}

fn validate_registry(courses: &[CourseSpec]) -> Result<(), ConfigError> {
    if courses.is_empty() {
        return Err(ConfigError::NoCourses);
    }

    let mut seen: HashSet<String> = HashSet::new();
    for course in courses {
        if !seen.insert(course.name.to_lowercase()) {
            return Err(ConfigError::DuplicateCourse(course.name.clone()));
        }
    }
    Ok(())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
