//! Types shared by the tracker core and the console front end:
//! the startup [`config`] and the [`error`] kinds reported back to the user.

pub mod config;
pub mod error;
