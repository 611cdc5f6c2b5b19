use crate::dashboard::Action;
use crate::db::models::{AccessRequest, Resource};
use std::fmt;

const HEADERS: [&str; 5] = ["ID", "Name", "Timeline", "Quantity", "Cost"];

/// A short message shown after an action, the terminal stand-in for a dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Info(String),
    Warning(String),
    Error(String),
}

impl Notice {
    pub fn info(msg: impl Into<String>) -> Self {
        Notice::Info(msg.into())
    }

    pub fn warning(msg: impl Into<String>) -> Self {
        Notice::Warning(msg.into())
    }

    pub fn error(err: impl fmt::Display) -> Self {
        Notice::Error(err.to_string())
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::Info(msg) => write!(f, "{msg}"),
            Notice::Warning(msg) => write!(f, "Warning: {msg}"),
            Notice::Error(msg) => write!(f, "Error: {msg}"),
        }
    }
}

/// Aligned text table of resources, or a placeholder when there are none.
pub fn resource_table(rows: &[Resource]) -> String {
    let cells: Vec<[String; 5]> = rows
        .iter()
        .map(|r| {
            [
                r.id.to_string(),
                r.name.clone(),
                r.timeline.clone(),
                r.quantity.to_string(),
                r.cost.to_string(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(str::len);
    for row in &cells {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let mut out = String::from("Resources\n");
    out.push_str(&format_row(&HEADERS.map(String::from), &widths));
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(&rule.join("-+-"));
    out.push('\n');
    if cells.is_empty() {
        out.push_str("(no resources)\n");
    }
    for row in &cells {
        out.push_str(&format_row(row, &widths));
    }
    out
}

fn format_row(cells: &[String; 5], widths: &[usize; 5]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &w)| format!("{cell:<w$}"))
        .collect();
    let mut line = padded.join(" | ").trim_end().to_string();
    line.push('\n');
    line
}

/// One `User: X | Time: Y` line per request, newest first.
pub fn request_list(requests: &[AccessRequest]) -> String {
    if requests.is_empty() {
        return "No requests.\n".to_string();
    }
    requests
        .iter()
        .map(|r| {
            format!(
                "User: {} | Time: {}\n",
                r.username,
                r.requested_at.format("%Y-%m-%d %H:%M:%S%.3f")
            )
        })
        .collect()
}

pub fn menu(title: &str, username: &str, actions: &[Action]) -> String {
    let mut out = format!("== {title} ({username}) ==\n");
    for (i, action) in actions.iter().enumerate() {
        out.push_str(&format!("  {}. {} [{}]\n", i + 1, action.label(), action.key()));
    }
    out
}
