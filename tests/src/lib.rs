//! End-to-end tests that replay console sessions through the tracker.

pub mod session;

mod notifications;
mod registration;
mod scoring;
mod statistics;
