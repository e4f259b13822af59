//! Terminal rendering for decoded events.
//!
//! Extension trait that adds colored output to ics-earliest-core types using
//! owo_colors.

use chrono::NaiveDateTime;
use ics_earliest_core::{CalEvent, Calendar};
use owo_colors::OwoColorize;

pub trait Render {
    fn render(&self) -> String;
}

impl Render for CalEvent {
    fn render(&self) -> String {
        let lines = [
            field_line("Event Name", &render_text(&self.summary)),
            field_line("Start Date", &render_timestamp(self.start)),
            field_line("End Date", &render_timestamp(self.end)),
            field_line("Created", &render_timestamp(self.created)),
            field_line("UID", &render_text(&self.uid)),
        ];
        lines.join("\n")
    }
}

impl Render for Calendar {
    fn render(&self) -> String {
        let name = self.name.as_deref().unwrap_or("(unnamed calendar)");
        format!("📅 {} {}", name.bold(), format!("({} events)", self.events.len()).dimmed())
    }
}

/// Render the selected event under its calendar header.
pub fn render_selection(calendar: &Calendar, selected: Option<&CalEvent>) -> String {
    match selected {
        Some(event) => format!("{}\n\n{}", calendar.render(), event.render()),
        None => format!("{}\n\n{}", calendar.render(), "No events found".dimmed()),
    }
}

fn field_line(label: &str, value: &str) -> String {
    format!("{} {}", format!("{}:", label).dimmed(), value)
}

fn render_text(value: &Option<String>) -> String {
    value.as_deref().unwrap_or("(none)").to_string()
}

fn render_timestamp(value: Option<NaiveDateTime>) -> String {
    value
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| "(none)".to_string())
}
