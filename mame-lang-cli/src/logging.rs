//! Console logger.
//!
//! Info lines go to stdout as plain text so command output reads like a
//! report. Warnings and errors go to stderr with a colored prefix. With
//! `--logfile`, every emitted line is also appended to the file with ANSI
//! codes removed.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

use log::{Level, LevelFilter, Metadata, Record};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

use crate::CliError;

struct CliLogger {
    level: LevelFilter,
    timestamps: bool,
    file: Option<Mutex<File>>,
}

impl CliLogger {
    fn format(&self, record: &Record) -> String {
        let prefix = match record.level() {
            Level::Error => format!("{} ", "error:".if_supports_color(Stderr, |t| t.red())),
            Level::Warn => format!("{} ", "warning:".if_supports_color(Stderr, |t| t.yellow())),
            Level::Info => String::new(),
            Level::Debug | Level::Trace => {
                format!("{} ", "debug:".if_supports_color(Stderr, |t| t.dimmed()))
            }
        };
        if self.timestamps {
            format!(
                "[{}] {}{}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                prefix,
                record.args()
            )
        } else {
            format!("{}{}", prefix, record.args())
        }
    }
}

impl log::Log for CliLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level && metadata.target().starts_with("mame_lang")
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = self.format(record);

        if record.level() == Level::Info {
            println!("{line}");
        } else {
            eprintln!("{line}");
        }

        if let Some(file) = &self.file {
            if let Ok(mut file) = file.lock() {
                let _ = writeln!(file, "{}", strip_ansi_escapes::strip_str(&line));
            }
        }
    }

    fn flush(&self) {
        if let Some(file) = &self.file {
            if let Ok(mut file) = file.lock() {
                let _ = file.flush();
            }
        }
    }
}

/// Install the global logger. Must be called once, before any command runs.
pub(crate) fn init(quiet: bool, verbose: bool, logfile: Option<&Path>) -> Result<(), CliError> {
    let level = if verbose {
        LevelFilter::Debug
    } else if quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    };

    let file = match logfile {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| {
                    CliError::other(format!("Failed to open log file {}: {}", path.display(), e))
                })?;
            Some(Mutex::new(file))
        }
        None => None,
    };

    log::set_boxed_logger(Box::new(CliLogger {
        level,
        timestamps: verbose,
        file,
    }))
    .map_err(|e| CliError::other(format!("Failed to install logger: {}", e)))?;
    log::set_max_level(level);
    Ok(())
}
