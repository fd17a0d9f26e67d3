use colored::*;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::FormatEvent;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::registry::LookupSpan;

/// Renders `[+] course: course completed student=1000`.
///
/// The component is the last segment of the event's module path, so a line
/// can be traced back to the router, a course or the read loop at a glance.
pub struct TrackerFormatter {
    ansi: bool,
}

impl TrackerFormatter {
    pub fn new(ansi: bool) -> Self {
        Self { ansi }
    }
}

impl<S, N> FormatEvent<S, N> for TrackerFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();
        let symbol = level_symbol(meta.level());
        let component = component(meta.target());

        if self.ansi {
            let color_func: fn(ColoredString) -> ColoredString = match *meta.level() {
                Level::TRACE => |s| s.dimmed(),
                Level::DEBUG => |s| s.blue(),
                Level::INFO => |s| s.green().bold(),
                Level::WARN => |s| s.yellow().bold(),
                Level::ERROR => |s| s.red().bold(),
            };
            write!(writer, "{} {}: ", color_func(symbol.into()), component.bright_black())?;
        } else {
            write!(writer, "{symbol} {component}: ")?;
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

pub fn level_symbol(level: &Level) -> &'static str {
    match *level {
        Level::TRACE => "[ ]",
        Level::DEBUG => "[?]",
        Level::INFO => "[+]",
        Level::WARN => "[*]",
        Level::ERROR => "[-]",
    }
}

/// `lptrack_core::course` -> `course`.
pub fn component(target: &str) -> &str {
    target.rsplit("::").next().unwrap_or(target)
}

/// Maps the `-v` count to a default filter directive.
pub fn default_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Installs the global subscriber. Logs go to stderr so that stdout only
/// carries the console transcript. `RUST_LOG` wins over `-v`.
pub fn init_logging(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));
    let ansi = console::colors_enabled_stderr();

    tracing_subscriber::fmt()
        .with_ansi(ansi)
        .event_format(TrackerFormatter::new(ansi))
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
