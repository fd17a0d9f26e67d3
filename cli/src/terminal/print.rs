//! Transcript output.
//!
//! Lines are written verbatim, without color or decoration: the console text
//! is the program's contract with whoever drives it.

use std::io::{self, Write};

use lptrack_core::tracker::Reply;

pub const BANNER: &str = "Learning Progress Tracker";

pub fn banner<W: Write>(out: &mut W, no_banner: bool) -> io::Result<()> {
    if no_banner {
        return Ok(());
    }
    writeln!(out, "{BANNER}")
}

pub fn reply<W: Write>(out: &mut W, reply: &Reply) -> io::Result<()> {
    for line in &reply.lines {
        writeln!(out, "{line}")?;
    }
    out.flush()
}
