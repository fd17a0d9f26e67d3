mod commands;
mod repl;
mod terminal;

use std::io;

use anyhow::Context;
use commands::CommandLine;
use console::Term;
use lptrack_common::config::Config;
use lptrack_core::tracker::Tracker;
use terminal::{logging, print};
use tracing::{debug, info};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose);

    let cfg = if commands.courses.is_empty() {
        debug!("no courses supplied, using the default registry");
        Config::default()
    } else {
        Config::new(commands.courses).context("invalid course configuration")?
    };
    let names: Vec<&str> = cfg.courses.iter().map(|c| c.name.as_str()).collect();
    info!("tracking {} courses: {}", names.len(), names.join(", "));

    let mut out = Term::stdout();
    print::banner(&mut out, commands.no_banner)?;

    let mut tracker = Tracker::new(&cfg);
    repl::run(&mut tracker, io::stdin().lock(), &mut out)
}
