//! Console status lines. Status goes to stdout, errors to stderr.
//!
//! Colors are dropped when the stream is not a terminal or `NO_COLOR` is set,
//! so piped output and test captures stay plain text.

use std::fmt;
use std::io::{self, IsTerminal, Write};

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Level {
    Info,
    Success,
    Warning,
    Error,
}

impl Level {
    fn color(self) -> &'static str {
        match self {
            Level::Info => "\x1b[34m",
            Level::Success => "\x1b[32m",
            Level::Warning => "\x1b[33m",
            Level::Error => "\x1b[31m",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            Level::Info => "ℹ️",
            Level::Success => "✅",
            Level::Warning => "⚠️",
            Level::Error => "❌",
        }
    }
}

fn use_color(is_terminal: bool) -> bool {
    is_terminal && std::env::var_os("NO_COLOR").is_none()
}

fn emit(level: Level, msg: &dyn fmt::Display) {
    let line = |color: bool| {
        if color {
            format!("{}{}{} {}{}", level.color(), BOLD, level.icon(), RESET, msg)
        } else {
            format!("{} {}", level.icon(), msg)
        }
    };

    // A closed pipe is not worth a panic.
    let _ = if level == Level::Error {
        let stderr = io::stderr();
        writeln!(stderr.lock(), "{}", line(use_color(stderr.is_terminal())))
    } else {
        let stdout = io::stdout();
        writeln!(stdout.lock(), "{}", line(use_color(stdout.is_terminal())))
    };
}

pub fn info<T: fmt::Display>(msg: T) {
    emit(Level::Info, &msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    emit(Level::Success, &msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    emit(Level::Warning, &msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    emit(Level::Error, &msg);
}

/// Section header above a block of output, e.g. the preview table.
pub fn header<T: fmt::Display>(msg: T) {
    let stdout = io::stdout();
    let text = if use_color(stdout.is_terminal()) {
        format!("{}{}== {}{}\n", Level::Info.color(), BOLD, msg, RESET)
    } else {
        format!("== {}\n", msg)
    };
    let _ = writeln!(stdout.lock(), "{}", text);
}
