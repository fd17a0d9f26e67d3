//! The read loop: one console line in, one [`Reply`] out.
//!
//! [`Reply`]: lptrack_core::tracker::Reply

use std::io::{BufRead, Write};

use anyhow::Context;
use lptrack_core::tracker::Tracker;
use tracing::info;

use crate::terminal::print;

/// Feeds `input` to the tracker line by line until `exit` or end of input.
pub fn run<R, W>(tracker: &mut Tracker, input: R, out: &mut W) -> anyhow::Result<()>
where
    R: BufRead,
    W: Write,
{
    for line in input.lines() {
        let line = line.context("failed to read console input")?;
        let reply = tracker.handle_line(&line);
        print::reply(out, &reply).context("failed to write console output")?;

        if tracker.is_exited() {
            return Ok(());
        }
    }

    info!("end of input reached, leaving");
    Ok(())
}
