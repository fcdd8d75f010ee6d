//! Table rendering utilities for CLI outputs.
//!
//! Widths are measured in terminal columns, so emoji and accented text line
//! up. Cells may carry ANSI colour codes; those are ignored when measuring.

use regex::Regex;
use std::sync::OnceLock;
use unicode_width::UnicodeWidthStr;

/// Columns wider than this are truncated with an ellipsis.
pub const MAX_COL_WIDTH: usize = 40;

pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

fn ansi_re() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\x1B\[[0-9;]*[mK]").ok()).as_ref()
}

/// Visible width of a cell, ignoring ANSI escapes.
pub fn display_width(s: &str) -> usize {
    match ansi_re() {
        Some(re) => re.replace_all(s, "").width(),
        None => s.width(),
    }
}

/// Cut plain text to `max` columns, ending with `…` when shortened.
pub fn truncate(s: &str, max: usize) -> String {
    if s.width() <= max {
        return s.to_string();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w + 1 > max {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

fn pad(cell: &str, width: usize) -> String {
    let fill = width.saturating_sub(display_width(cell));
    format!("{cell}{}", " ".repeat(fill))
}

impl Table {
    pub fn new(headers: &[&str]) -> Self {
        Self {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    fn widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| display_width(h)).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                if let Some(w) = widths.get_mut(i) {
                    *w = (*w).max(display_width(cell));
                }
            }
        }
        widths
    }

    pub fn render(&self) -> String {
        let widths = self.widths();
        let mut out = String::new();

        for (h, w) in self.headers.iter().zip(&widths) {
            out.push_str(&pad(h, *w));
            out.push(' ');
        }
        out.push('\n');

        let total: usize = widths.iter().map(|w| w + 1).sum();
        out.push_str(&"-".repeat(total.saturating_sub(1)));
        out.push('\n');

        for row in &self.rows {
            for (cell, w) in row.iter().zip(&widths) {
                out.push_str(&pad(cell, *w));
                out.push(' ');
            }
            out.push('\n');
        }

        out
    }
}
