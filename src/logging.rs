use std::io::Write;

use chrono::Local;
use colored::{Color, Colorize as _};
use env_logger::{Builder, Env, Target};
use log::Level;

/// Sets up the diagnostic stream on stderr, leaving stdout to the CLI.
///
/// `RUST_LOG` takes precedence over `verbose`.
pub fn init(verbose: bool) {
    let mut builder = Builder::new();

    builder.parse_env(get_env(verbose));
    builder.target(Target::Stderr);

    builder.format(|f, record| {
        let time = Local::now().format("%Y-%m-%d %H:%M:%S").to_string().dimmed();
        let (tag, color) = level_style(record.level());
        let level = tag.color(color);
        let target = record.target().dimmed();
        let message = record.args().to_string().color(color);

        writeln!(f, "{time} [{level}@{target}] {message}")
    });

    builder.init();
}

fn get_env(verbose: bool) -> Env<'static> {
    let default_filter = if verbose || cfg!(debug_assertions) {
        "warn,ipchange_notify=debug"
    } else {
        "warn,ipchange_notify=info"
    };
    Env::default().default_filter_or(default_filter)
}

/// Single-letter tag and color for a level.
const fn level_style(level: Level) -> (&'static str, Color) {
    match level {
        Level::Error => ("E", Color::Red),
        Level::Warn => ("W", Color::Yellow),
        Level::Info => ("I", Color::Green),
        Level::Debug => ("D", Color::Blue),
        Level::Trace => ("T", Color::Magenta),
    }
}
