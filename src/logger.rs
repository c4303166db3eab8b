use chrono::Local;
use env_logger::fmt::Color;
use env_logger::{Builder, Env};
use log::Level;
use std::io::Write;

/// Installs an `env_logger` for the host application.
///
/// `RUST_LOG` is honoured, the default is `info`. Request dispatch is logged
/// at `debug` under `webdav_client::network`, header lists at `trace`.
/// Calling it again after a logger is installed does nothing.
pub fn init() {
    init_with_default("info");
}

pub fn init_with_default(filter: &str) {
    let _ = Builder::from_env(Env::default().default_filter_or(filter))
        .format(|buf, record| {
            let mut style = buf.style();
            style.set_color(level_color(record.level()));
            if record.level() == Level::Error {
                style.set_bold(true);
            }

            // Source locations only help when chasing individual requests.
            let location = match (record.level(), record.file(), record.line()) {
                (Level::Debug | Level::Trace, Some(file), Some(line)) => {
                    format!(" [{}:{}]", file, line)
                }
                _ => String::new(),
            };

            writeln!(
                buf,
                "{} {:<5}{} [{}] {}",
                Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                style.value(record.level()),
                location,
                record.target(),
                record.args()
            )
        })
        .try_init();
}

fn level_color(level: Level) -> Color {
    match level {
        Level::Error => Color::Red,
        Level::Warn => Color::Yellow,
        Level::Info => Color::Green,
        Level::Debug => Color::Blue,
        Level::Trace => Color::Cyan,
    }
}
