//! Console diagnostics channel.
//!
//! Status lines normally go to stdout. Once [`reserve_stdout`] is called
//! (`convert --stdout`), stdout carries only converted data and every
//! message, prompts included, moves to stderr.

use std::fmt;
use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

const FG_BLUE: &str = "\x1b[34m";
const FG_GREEN: &str = "\x1b[32m";
const FG_YELLOW: &str = "\x1b[33m";
const FG_RED: &str = "\x1b[31m";

static STDOUT_RESERVED: AtomicBool = AtomicBool::new(false);

/// Route all further messages to stderr.
pub fn reserve_stdout() {
    STDOUT_RESERVED.store(true, Ordering::Relaxed);
}

fn stdout_reserved() -> bool {
    STDOUT_RESERVED.load(Ordering::Relaxed)
}

fn emit(color: &str, icon: &str, msg: impl fmt::Display, to_stderr: bool) {
    let line = format!("{color}{BOLD}{icon}{RESET} {msg}");
    if to_stderr || stdout_reserved() {
        eprintln!("{line}");
    } else {
        println!("{line}");
    }
}

pub fn info<T: fmt::Display>(msg: T) {
    emit(FG_BLUE, "ℹ️", msg, false);
}

pub fn success<T: fmt::Display>(msg: T) {
    emit(FG_GREEN, "✅", msg, false);
}

pub fn warning<T: fmt::Display>(msg: T) {
    emit(FG_YELLOW, "⚠️", msg, false);
}

pub fn error<T: fmt::Display>(msg: T) {
    emit(FG_RED, "❌", msg, true);
}

/// `--verbose` diagnostics, always on stderr.
pub fn debug<T: fmt::Display>(msg: T) {
    eprintln!("{DIM}🔎 {msg}{RESET}");
}

/// Section title, underlined to its own width.
pub fn header<T: fmt::Display>(msg: T) {
    let title = msg.to_string();
    let rule = "─".repeat(title.chars().count());
    let out = format!("\n{FG_BLUE}{BOLD}{title}\n{rule}{RESET}");
    if stdout_reserved() {
        eprintln!("{out}");
    } else {
        println!("{out}");
    }
}

/// Print a question without newline and read one answer line.
pub fn prompt(question: &str) -> io::Result<String> {
    if stdout_reserved() {
        eprint!("{question}");
        io::stderr().flush().ok();
    } else {
        print!("{question}");
        io::stdout().flush().ok();
    }

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    Ok(answer.trim().to_string())
}
