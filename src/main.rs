use std::env;

use chrono::{
    format::{Item, StrftimeItems},
    Local,
};
use clap::Parser;
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

use berlin_clock::{
    clock::{BerlinClock, DEFAULT_LABEL_FORMAT},
    error::UnwrapOrExplode,
    render::Style,
    stdin::spawn_command_channel,
    time::{system_locale, PickerTime},
};

/// A Berlin Clock (Mengenlehreuhr) for the terminal.
///
/// While running, type a time like 13:47 to show it instead of the live
/// clock, `now` to go back, or `q` to quit.
#[derive(Parser)]
#[command(version)]
struct CliArgs {
    /// Start on this hour and minute instead of the live time.
    #[arg(long, env = "BERLIN_CLOCK_TIME", value_name = "HH:MM")]
    time: Option<PickerTime>,

    /// Draw a single frame and exit.
    #[arg(long)]
    once: bool,

    /// Use letters instead of colors.
    #[arg(long, env = "BERLIN_CLOCK_PLAIN", conflicts_with = "compact")]
    plain: bool,

    /// Print all lamps on a single line.
    #[arg(long)]
    compact: bool,

    /// strftime format of the "Time is" label.
    #[arg(long, default_value = DEFAULT_LABEL_FORMAT, value_parser = parse_label_format)]
    label_format: String,
}

impl CliArgs {
    fn style(&self) -> Style {
        match (self.compact, self.plain) {
            (true, _) => Style::Compact,
            (false, true) => Style::Plain,
            (false, false) => Style::Colored,
        }
    }
}

fn parse_label_format(format: &str) -> Result<String, String> {
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(format!("{format:?} is not a valid strftime format"));
    }
    Ok(format.to_owned())
}

/// `RUST_LOG` directives, falling back to `warn` when none are given.
fn log_filter(directives: &str) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .parse_lossy(directives)
}

fn main() {
    let directives = env::var(EnvFilter::DEFAULT_ENV).unwrap_or_default();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(log_filter(&directives))
        .init();

    let args = CliArgs::parse();

    let clock = BerlinClock::new()
        .style(args.style())
        .label_format(&args.label_format)
        .locale(system_locale())
        .picked(args.time, Local::now().time());

    if args.once {
        clock.print_once();
    } else {
        clock
            .run(spawn_command_channel())
            .unwrap_or_explode("Failed to draw the clock");
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_is_well_formed() {
        CliArgs::command().debug_assert();
    }

    #[test]
    fn picks_style_from_flags() {
        let style = |argv: &[&str]| CliArgs::try_parse_from(argv).unwrap().style();

        assert_eq!(style(&["berlin-clock"]), Style::Colored);
        assert_eq!(style(&["berlin-clock", "--plain"]), Style::Plain);
        assert_eq!(style(&["berlin-clock", "--compact"]), Style::Compact);
    }

    #[test]
    fn parses_initial_time() {
        let args = CliArgs::try_parse_from(["berlin-clock", "--time", "05:15", "--once"]).unwrap();
        assert_eq!(args.time, Some(PickerTime { hour: 5, minute: 15 }));
        assert!(args.once);

        assert!(CliArgs::try_parse_from(["berlin-clock", "--time", "24:00"]).is_err());
    }

    #[test]
    fn rejects_broken_label_formats() {
        assert!(parse_label_format("%H:%M:%S").is_ok());
        assert!(parse_label_format("%Q").is_err());
        assert!(CliArgs::try_parse_from(["berlin-clock", "--label-format", "%"]).is_err());
    }

    #[test]
    fn log_filter_honors_rust_log() {
        let debug = tracing_subscriber::fmt().with_env_filter(log_filter("debug")).finish();
        assert!(tracing::subscriber::with_default(debug, || tracing::enabled!(tracing::Level::DEBUG)));
    }

    #[test]
    fn log_filter_defaults_to_warn() {
        let quiet = tracing_subscriber::fmt().with_env_filter(log_filter("")).finish();
        tracing::subscriber::with_default(quiet, || {
            assert!(tracing::enabled!(tracing::Level::WARN));
            assert!(!tracing::enabled!(tracing::Level::INFO));
        });
    }
}
