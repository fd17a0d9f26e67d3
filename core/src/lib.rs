//! # Learning Progress Tracker Core
//!
//! The domain model behind the `lptrack` console. Pure Rust, no I/O: every
//! operation takes input strings and returns values or output lines, and the
//! console front end decides where they are printed.
//!
//! ## Modules
//! * **[`validator`]**: name, email and points-line checks.
//! * **[`student`]**: a registered student and their per-course totals.
//! * **[`course`]**: score aggregation, completion detection and ranking.
//! * **[`statistics`]**: most/least popular, active and difficult courses.
//! * **[`tracker`]**: the command router and session state machine.

pub mod course;
pub mod statistics;
pub mod student;
pub mod tracker;
pub mod validator;
