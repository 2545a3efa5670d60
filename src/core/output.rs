//! Colored console printing and spinner steps for long-running commands.

use crate::error::Result;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::IsTerminal;
use std::time::Duration;

fn use_color() -> bool {
    std::io::stdout().is_terminal()
        && std::env::var("NO_COLOR").unwrap_or_default().is_empty()
}

pub fn success(msg: &str) {
    if use_color() {
        println!("{}", msg.green());
    } else {
        println!("{}", msg);
    }
}

pub fn info(msg: &str) {
    if use_color() {
        println!("{}", msg.cyan());
    } else {
        println!("{}", msg);
    }
}

pub fn error(msg: &str) {
    if use_color() {
        eprintln!("{}", msg.red());
    } else {
        eprintln!("{}", msg);
    }
}

pub fn dim_err(msg: &str) {
    if use_color() {
        eprintln!("{}", msg.dimmed());
    } else {
        eprintln!("{}", msg);
    }
}

/// Start a spinner with the given message.
pub fn spin(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠁⠂⠄⠈⠐⠠⠰⠸⠹")
            .template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

/// Clear the spinner and print its message as a completed step.
pub fn spin_done(pb: ProgressBar) {
    let message = pb.message();
    pb.finish_and_clear();
    success(&format!("✔ {}", message));
}

/// Run `f` under a spinner; the spinner is cleared whether `f` succeeds or fails.
pub fn spin_while<T>(message: &str, f: impl FnOnce() -> Result<T>) -> Result<T> {
    let pb = spin(message);
    match f() {
        Ok(value) => {
            spin_done(pb);
            Ok(value)
        }
        Err(err) => {
            pb.finish_and_clear();
            Err(err)
        }
    }
}
