use clap::Parser;
use lptrack_common::config::CourseSpec;

#[derive(Parser)]
#[command(name = "lptrack")]
#[command(about = "An interactive learning progress tracker.")]
pub struct CommandLine {
    /// Register a course as NAME=SCORE (repeatable, order matters).
    ///
    /// Replaces the default Python/DSA/Databases/Flask registry when given.
    #[arg(long = "course", value_name = "NAME=SCORE")]
    pub courses: Vec<CourseSpec>,

    /// Do not print the startup header
    #[arg(long)]
    pub no_banner: bool,

    /// Increase log output on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
