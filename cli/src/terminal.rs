//! Everything that touches the terminal: the stderr log format and the
//! stdout transcript printer.

pub mod logging;
pub mod print;
