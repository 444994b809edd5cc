//! Console API
//!
//! log, info, warn, error and table output, kept in a bounded history and
//! mirrored to `tracing`.

use crate::Result;
use serde::Serialize;
use serde_json::Value;
use std::collections::VecDeque;

/// Default history size
pub const MAX_MESSAGES: usize = 1000;

/// Console log level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Log,
    Info,
    Warn,
    Error,
}

/// Console message
#[derive(Debug, Clone, PartialEq)]
pub struct ConsoleMessage {
    pub level: LogLevel,
    pub message: String,
    /// Monotonic sequence number
    pub seq: u64,
}

/// Console
#[derive(Debug)]
pub struct Console {
    messages: VecDeque<ConsoleMessage>,
    max_messages: usize,
    next_seq: u64,
}

impl Default for Console {
    fn default() -> Self {
        Self::with_capacity(MAX_MESSAGES)
    }
}

impl Console {
    pub fn new() -> Self {
        Self::default()
    }

    /// Console keeping at most `max_messages` entries
    pub fn with_capacity(max_messages: usize) -> Self {
        Self {
            messages: VecDeque::new(),
            max_messages: max_messages.max(1),
            next_seq: 0,
        }
    }

    fn add_message(&mut self, level: LogLevel, message: String) {
        match level {
            LogLevel::Error => tracing::error!(target: "console", "{message}"),
            LogLevel::Warn => tracing::warn!(target: "console", "{message}"),
            LogLevel::Log | LogLevel::Info => tracing::info!(target: "console", "{message}"),
        }

        self.messages.push_back(ConsoleMessage {
            level,
            message,
            seq: self.next_seq,
        });
        self.next_seq += 1;
        while self.messages.len() > self.max_messages {
            self.messages.pop_front();
        }
    }

    /// console.log
    pub fn log(&mut self, message: &str) {
        self.add_message(LogLevel::Log, message.to_string());
    }

    /// console.info
    pub fn info(&mut self, message: &str) {
        self.add_message(LogLevel::Info, message.to_string());
    }

    /// console.warn
    pub fn warn(&mut self, message: &str) {
        self.add_message(LogLevel::Warn, message.to_string());
    }

    /// console.error
    pub fn error(&mut self, message: &str) {
        self.add_message(LogLevel::Error, message.to_string());
    }

    /// console.table: render `rows` as an aligned table, record it and
    /// return the rendering.
    pub fn table<T: Serialize>(&mut self, rows: &[T]) -> Result<String> {
        let rows = rows
            .iter()
            .map(serde_json::to_value)
            .collect::<std::result::Result<Vec<_>, _>>()?;
        let rendered = render_table(&rows);
        self.add_message(LogLevel::Log, rendered.clone());
        Ok(rendered)
    }

    pub fn messages(&self) -> &VecDeque<ConsoleMessage> {
        &self.messages
    }

    pub fn by_level(&self, level: LogLevel) -> Vec<&ConsoleMessage> {
        self.messages.iter().filter(|m| m.level == level).collect()
    }

    pub fn last(&self) -> Option<&ConsoleMessage> {
        self.messages.back()
    }
}

fn cell(value: &Value) -> String {
    match value {
        Value::String(s) => format!("'{s}'"),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Box-drawn table with an `(index)` column. Columns are the object keys
/// in order of first appearance; non-object rows go in a `Values` column.
pub fn render_table(rows: &[Value]) -> String {
    const INDEX: &str = "(index)";
    const VALUES: &str = "Values";

    let mut columns: Vec<&str> = Vec::new();
    let mut has_values = false;
    for row in rows {
        match row {
            Value::Object(map) => {
                for key in map.keys() {
                    if !columns.contains(&key.as_str()) {
                        columns.push(key);
                    }
                }
            }
            _ => has_values = true,
        }
    }
    if has_values {
        columns.push(VALUES);
    }

    let mut header = vec![INDEX.to_string()];
    header.extend(columns.iter().map(|c| c.to_string()));

    let body: Vec<Vec<String>> = rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let mut line = vec![i.to_string()];
            line.extend(columns.iter().map(|&col| match row {
                Value::Object(map) => map.get(col).map(cell).unwrap_or_default(),
                other if col == VALUES => cell(other),
                _ => String::new(),
            }));
            line
        })
        .collect();

    let widths: Vec<usize> = (0..header.len())
        .map(|c| {
            std::iter::once(&header)
                .chain(&body)
                .map(|line| line[c].chars().count())
                .max()
                .unwrap_or(0)
                + 2
        })
        .collect();

    let rule = |left: &str, mid: &str, right: &str| {
        let segments: Vec<String> = widths.iter().map(|w| "─".repeat(*w)).collect();
        format!("{left}{}{right}\n", segments.join(mid))
    };
    let line = |cells: &[String]| {
        let padded: Vec<String> = cells
            .iter()
            .zip(&widths)
            .map(|(text, w)| format!(" {text}{} ", " ".repeat(w - 2 - text.chars().count())))
            .collect();
        format!("│{}│\n", padded.join("│"))
    };

    let mut out = rule("┌", "┬", "┐");
    out.push_str(&line(&header));
    out.push_str(&rule("├", "┼", "┤"));
    for row in &body {
        out.push_str(&line(row));
    }
    out.push_str(&rule("└", "┴", "┘"));
    out
}
