//! # Course Model
//!
//! A [`Course`] aggregates every point submission made against it and keeps
//! track of which students have just completed it.
//!
//! ## Completion
//! A student completes a course on the single update that first raises their
//! cumulative score to or above the passing score. That student is queued in
//! the course's completion roster exactly once; later submissions never queue
//! them again, even after the roster has been drained.

use std::collections::{BTreeMap, HashSet};

use lptrack_common::config::CourseSpec;
use tracing::debug;

use crate::student::{Roster, StudentId};

/// One row of a course ranking.
#[derive(Debug, Clone, PartialEq)]
pub struct RankEntry {
    pub id: StudentId,
    pub points: u64,
    /// Share of the passing score reached, in percent. May exceed 100.
    pub completion: f64,
}

/// A completion letter addressed to one student.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub student: StudentId,
    pub email: String,
    pub full_name: String,
    pub course: String,
}

impl Notification {
    /// The letter as printed on the console, one entry per line.
    pub fn lines(&self) -> [String; 3] {
        [
            format!("To: {}", self.email),
            "Re: Your Learning Progress".to_string(),
            format!(
                "Hello, {}! You have accomplished our {} course!",
                self.full_name, self.course
            ),
        ]
    }
}

#[derive(Debug, Clone)]
pub struct Course {
    name: String,
    passing_score: u64,
    student_scores: BTreeMap<StudentId, u64>,
    completed_tasks: u64,
    total_score: u64,
    completed_roster: Vec<StudentId>,
    graduated: HashSet<StudentId>,
}

impl From<&CourseSpec> for Course {
    fn from(spec: &CourseSpec) -> Self {
        Course::new(spec.name.clone(), spec.passing_score)
    }
}

impl Course {
    pub fn new(name: impl Into<String>, passing_score: u64) -> Self {
        Self {
            name: name.into(),
            passing_score,
            student_scores: BTreeMap::new(),
            completed_tasks: 0,
            total_score: 0,
            completed_roster: Vec::new(),
            graduated: HashSet::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn passing_score(&self) -> u64 {
        self.passing_score
    }

    /// Number of nonzero submissions made against this course.
    pub fn completed_tasks(&self) -> u64 {
        self.completed_tasks
    }

    pub fn total_score(&self) -> u64 {
        self.total_score
    }

    /// Students with at least one nonzero submission.
    pub fn enrolled(&self) -> usize {
        self.student_scores.len()
    }

    pub fn score_of(&self, id: StudentId) -> Option<u64> {
        self.student_scores.get(&id).copied()
    }

    /// Students queued for a completion letter, in completion order.
    pub fn pending_completions(&self) -> &[StudentId] {
        &self.completed_roster
    }

    /// Applies one point submission for `student`.
    ///
    /// A zero delta is ignored entirely: it creates no score entry, does not
    /// count as a task and cannot complete the course.
    pub fn update(&mut self, student: StudentId, delta: u64) {
        if delta == 0 {
            return;
        }

        let score = self.student_scores.entry(student).or_insert(0);
        *score = score.saturating_add(delta);
        let score = *score;

        self.completed_tasks += 1;
        self.total_score = self.total_score.saturating_add(delta);

        if score >= self.passing_score && self.graduated.insert(student) {
            debug!(course = %self.name, student, score, "course completed");
            self.completed_roster.push(student);
        }
    }

    pub fn average_score(&self) -> f64 {
        if self.completed_tasks == 0 {
            return 0.0;
        }
        self.total_score as f64 / self.completed_tasks as f64
    }

    /// Students ordered by points (highest first), ties by ascending id.
    pub fn ranking(&self) -> Vec<RankEntry> {
        let mut entries: Vec<RankEntry> = self
            .student_scores
            .iter()
            .map(|(&id, &points)| RankEntry {
                id,
                points,
                completion: points as f64 / self.passing_score as f64 * 100.0,
            })
            .collect();

        entries.sort_by(|a, b| b.points.cmp(&a.points).then(a.id.cmp(&b.id)));
        entries
    }

    /// Course name, table header, then one row per ranked student.
    pub fn ranking_report(&self) -> Vec<String> {
        let mut lines = vec![self.name.clone(), "id  points completed".to_string()];
        lines.extend(
            self.ranking()
                .into_iter()
                .map(|e| format!("{} {}    {:.1}%", e.id, e.points, e.completion)),
        );
        lines
    }

    /// Takes every pending completion and turns it into a letter.
    ///
    /// The roster is left empty, so a second call returns nothing until
    /// another student completes the course.
    pub fn drain_completed(&mut self, roster: &Roster) -> Vec<Notification> {
        let drained: Vec<StudentId> = std::mem::take(&mut self.completed_roster);
        if !drained.is_empty() {
            debug!(course = %self.name, count = drained.len(), "draining completions");
        }

        drained
            .into_iter()
            .filter_map(|id| roster.get(&id))
            .map(|student| Notification {
                student: student.id(),
                email: student.email().to_string(),
                full_name: student.full_name(),
                course: self.name.clone(),
            })
            .collect()
    }
}
