//! ANSI color helper utilities for terminal output.
use crate::models::{Priority, Status};

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";
pub const ORANGE: &str = "\x1b[38;5;208m";

/// Priority colour: red, orange, yellow, blue. Unknown codes stay plain.
pub fn color_for_priority(priority: Option<Priority>) -> &'static str {
    match priority {
        Some(Priority::Critical) => RED,
        Some(Priority::Serious) => ORANGE,
        Some(Priority::Minor) => YELLOW,
        Some(Priority::DesignIssue) => BLUE,
        None => RESET,
    }
}

pub fn color_for_status(status: Status) -> &'static str {
    match status {
        Status::Pending => YELLOW,
        Status::Fix => CYAN,
        Status::Closed => GREEN,
    }
}

/// Wrap `value` in `color`; empty values are shown as a grey `--`.
pub fn paint(value: &str, color: &str) -> String {
    if value.trim().is_empty() {
        format!("{GREY}--{RESET}")
    } else {
        format!("{color}{value}{RESET}")
    }
}
