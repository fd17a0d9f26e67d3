use std::collections::BTreeMap;

use lptrack_common::error::TrackerResult;
use tracing::debug;

use crate::course::Course;
use crate::validator;

pub type StudentId = u64;

/// All registered students, iterated in ascending id order.
pub type Roster = BTreeMap<StudentId, Student>;

/// A registered student and their running total in every course.
///
/// Students are only built by the tracker after their credentials passed
/// validation, so the fields here are trusted.
#[derive(Debug, Clone)]
pub struct Student {
    id: StudentId,
    first_name: String,
    last_name: String,
    email: String,
    /// Course name and total, in course registration order.
    points: Vec<(String, u64)>,
}

impl Student {
    pub fn new(id: StudentId, first_name: &str, last_name: &str, email: &str, courses: &[Course]) -> Self {
        Self {
            id,
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: email.to_string(),
            points: courses.iter().map(|c| (c.name().to_string(), 0)).collect(),
        }
    }

    pub fn id(&self) -> StudentId {
        self.id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn points_in(&self, course: &str) -> Option<u64> {
        self.points
            .iter()
            .find(|(name, _)| name == course)
            .map(|(_, total)| *total)
    }

    /// Adds one points line to this student and forwards each delta to its course.
    ///
    /// `courses` must be the registry this student was created with. The line
    /// is fully parsed before anything is touched, so a rejected line leaves
    /// both the student and the courses unchanged.
    pub fn add_points(&mut self, line: &str, courses: &mut [Course]) -> TrackerResult<()> {
        let deltas = validator::parse_points(line, self.points.len())?;

        for (((name, total), course), delta) in self.points.iter_mut().zip(courses.iter_mut()).zip(deltas) {
            debug_assert_eq!(name.as_str(), course.name());
            *total = total.saturating_add(delta);
            course.update(self.id, delta);
        }

        debug!(student = self.id, "points updated");
        Ok(())
    }

    /// `"<id> points: Python=10; DSA=0"`, courses in registration order.
    pub fn score_summary(&self) -> String {
        let entries: Vec<String> = self
            .points
            .iter()
            .map(|(name, total)| format!("{name}={total}"))
            .collect();
        format!("{} points: {}", self.id, entries.join("; "))
    }
}
