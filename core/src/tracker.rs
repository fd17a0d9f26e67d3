//! # Command Router
//!
//! [`Tracker`] owns every piece of mutable state (roster, email set, course
//! registry, id counter) and turns console lines into operations on the
//! domain model.
//!
//! ## Session modes
//! The tracker is a small state machine. From [`Mode::Idle`] a top-level
//! command either answers immediately (`list`, `notify`) or opens a sub-mode
//! that consumes lines until the literal `back`:
//!
//! ```text
//! Idle ── add students ──▶ Registering ─┐
//!      ── add points ───▶ Scoring ─────┤
//!      ── find ─────────▶ Lookup ──────┼── back ──▶ Idle
//!      ── statistics ───▶ Statistics ──┘
//!      ── exit ─────────▶ Exited
//! ```
//!
//! Every rejection is a [`TrackerError`] whose message becomes one output
//! line; nothing here ends the session except `exit`.

use std::collections::HashSet;
use std::str::FromStr;

use lptrack_common::config::Config;
use lptrack_common::error::{TrackerError, TrackerResult};
use tracing::{debug, trace};

use crate::course::{Course, Notification};
use crate::statistics::TrackerStatistics;
use crate::student::{Roster, Student, StudentId};
use crate::validator;

pub const FIRST_STUDENT_ID: StudentId = 1000;

const BACK: &str = "back";

/// Top-level commands. Matching is exact and case-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Exit,
    AddStudents,
    List,
    AddPoints,
    Find,
    Statistics,
    Notify,
}

impl FromStr for Command {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" => Err(TrackerError::NoInput),
            "exit" => Ok(Command::Exit),
            "add students" => Ok(Command::AddStudents),
            "list" => Ok(Command::List),
            "add points" => Ok(Command::AddPoints),
            "find" => Ok(Command::Find),
            "statistics" => Ok(Command::Statistics),
            "notify" => Ok(Command::Notify),
            _ => Err(TrackerError::UnknownCommand),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Idle,
    /// `added` counts students registered since entering this mode.
    Registering { added: usize },
    Scoring,
    Lookup,
    Statistics,
    Exited,
}

/// Output produced by one input line.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Reply {
    pub lines: Vec<String>,
}

impl Reply {
    fn line(text: impl Into<String>) -> Self {
        Self {
            lines: vec![text.into()],
        }
    }

    fn push(&mut self, text: impl Into<String>) {
        self.lines.push(text.into());
    }
}

impl From<TrackerError> for Reply {
    fn from(err: TrackerError) -> Self {
        debug!(error = ?err, "input rejected");
        Reply::line(err.to_string())
    }
}

/// Letters produced by one `notify` run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationBatch {
    pub letters: Vec<Notification>,
    /// Distinct students across all letters.
    pub students: usize,
}

pub struct Tracker {
    roster: Roster,
    emails: HashSet<String>,
    courses: Vec<Course>,
    next_id: StudentId,
    mode: Mode,
}

impl Tracker {
    pub fn new(config: &Config) -> Self {
        Self {
            roster: Roster::new(),
            emails: HashSet::new(),
            courses: config.courses.iter().map(Course::from).collect(),
            next_id: FIRST_STUDENT_ID,
            mode: Mode::Idle,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_exited(&self) -> bool {
        self.mode == Mode::Exited
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Feeds one raw console line into the current mode.
    pub fn handle_line(&mut self, line: &str) -> Reply {
        trace!(mode = ?self.mode, line, "dispatching");

        match self.mode {
            Mode::Idle => self.handle_command(line),
            Mode::Exited => Reply::default(),
            _ if line == BACK => self.leave_sub_mode(),
            Mode::Registering { added } => self.handle_credentials(line, added),
            Mode::Scoring => self.handle_points(line),
            Mode::Lookup => match self.find_by_id(line) {
                Ok(student) => Reply::line(student.score_summary()),
                Err(err) => err.into(),
            },
            Mode::Statistics => match self.statistics_drilldown(line) {
                Ok(course) => Reply {
                    lines: course.ranking_report(),
                },
                Err(err) => err.into(),
            },
        }
    }

    fn handle_command(&mut self, line: &str) -> Reply {
        let line = line.trim();
        if line == BACK {
            return Reply::line("Enter 'exit' to exit the program.");
        }

        let command = match Command::from_str(line) {
            Ok(command) => command,
            Err(err) => return err.into(),
        };

        match command {
            Command::Exit => {
                self.mode = Mode::Exited;
                Reply::line("Bye!")
            }
            Command::AddStudents => {
                self.mode = Mode::Registering { added: 0 };
                Reply::line("Enter student credentials or 'back' to return: ")
            }
            Command::List => self.list(),
            Command::AddPoints => {
                self.mode = Mode::Scoring;
                Reply::line("Enter an id and points or 'back' to return:")
            }
            Command::Find => {
                self.mode = Mode::Lookup;
                Reply::line("Enter an id or 'back' to return")
            }
            Command::Statistics => {
                self.mode = Mode::Statistics;
                let mut reply =
                    Reply::line("Type the name of a course to see details or 'back' to quit:");
                reply.lines.extend(self.statistics().report());
                reply
            }
            Command::Notify => self.notify_reply(),
        }
    }

    fn leave_sub_mode(&mut self) -> Reply {
        let reply = match self.mode {
            Mode::Registering { added } => {
                Reply::line(format!("Total {added} students have been added."))
            }
            _ => Reply::default(),
        };
        self.mode = Mode::Idle;
        reply
    }

    fn handle_credentials(&mut self, line: &str, added: usize) -> Reply {
        let result = split_credentials(line)
            .and_then(|(first, last, email)| self.register(first, last, email));

        match result {
            Ok(_) => {
                self.mode = Mode::Registering { added: added + 1 };
                Reply::line("The student has been added.")
            }
            Err(err) => err.into(),
        }
    }

    fn handle_points(&mut self, line: &str) -> Reply {
        let (id, points) = line.split_once(' ').unwrap_or((line, ""));
        match self.add_points_by_id(id, points) {
            Ok(()) => Reply::line("Points updated."),
            Err(err) => err.into(),
        }
    }

    /// Registers a student, returning the id assigned.
    ///
    /// Ids are only consumed on success: a rejected registration, including a
    /// duplicate email, leaves the counter where it was.
    pub fn register(&mut self, first_name: &str, last_name: &str, email: &str) -> TrackerResult<StudentId> {
        validator::validate_credentials(first_name, last_name, email)?;
        if self.emails.contains(email) {
            return Err(TrackerError::EmailTaken);
        }

        let id = self.next_id;
        self.next_id += 1;

        let student = Student::new(id, first_name, last_name, email, &self.courses);
        self.emails.insert(email.to_string());
        self.roster.insert(id, student);

        debug!(id, email, "student registered");
        Ok(id)
    }

    /// Looks a student up by the id exactly as typed.
    pub fn find_by_id(&self, id: &str) -> TrackerResult<&Student> {
        parse_id(id)
            .and_then(|id| self.roster.get(&id))
            .ok_or_else(|| TrackerError::StudentNotFound(id.to_string()))
    }

    pub fn add_points_by_id(&mut self, id: &str, line: &str) -> TrackerResult<()> {
        let student = parse_id(id)
            .and_then(|id| self.roster.get_mut(&id))
            .ok_or_else(|| TrackerError::StudentNotFound(id.to_string()))?;

        student.add_points(line, &mut self.courses)
    }

    /// Finds a course by name, ignoring case.
    pub fn statistics_drilldown(&self, name: &str) -> TrackerResult<&Course> {
        let wanted = name.to_lowercase();
        self.courses
            .iter()
            .find(|course| course.name().to_lowercase() == wanted)
            .ok_or(TrackerError::UnknownCourse)
    }

    pub fn statistics(&self) -> TrackerStatistics<'_> {
        TrackerStatistics::new(&self.courses)
    }

    pub fn list(&self) -> Reply {
        if self.roster.is_empty() {
            return Reply::line("No students found");
        }

        let mut reply = Reply::line("Students:");
        for id in self.roster.keys() {
            reply.push(id.to_string());
        }
        reply
    }

    /// Drains every course's completion roster, in registration order.
    pub fn notify(&mut self) -> NotificationBatch {
        let mut letters = Vec::new();
        for course in self.courses.iter_mut() {
            letters.extend(course.drain_completed(&self.roster));
        }

        let students: HashSet<StudentId> = letters.iter().map(|n| n.student).collect();
        NotificationBatch {
            students: students.len(),
            letters,
        }
    }

    fn notify_reply(&mut self) -> Reply {
        let batch = self.notify();
        let mut reply = Reply::default();
        if batch.letters.is_empty() {
            reply.push("");
        }
        for letter in &batch.letters {
            reply.lines.extend(letter.lines());
        }
        reply.push(format!("Total {} students have been notified.", batch.students));
        reply
    }
}

/// Splits `first last... email` into its three parts.
///
/// The email is whatever follows the final space and the first name is
/// whatever precedes the first one, so last names may contain spaces.
fn split_credentials(line: &str) -> TrackerResult<(&str, &str, &str)> {
    if line.matches(' ').count() < 2 {
        return Err(TrackerError::CredentialsInvalid);
    }

    let (full_name, email) = line.rsplit_once(' ').ok_or(TrackerError::CredentialsInvalid)?;
    let (first, last) = full_name.split_once(' ').ok_or(TrackerError::CredentialsInvalid)?;

    Ok((first.trim(), last.trim(), email.trim()))
}

fn parse_id(id: &str) -> Option<StudentId> {
    if id.is_empty() || !id.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    id.parse().ok()
}
