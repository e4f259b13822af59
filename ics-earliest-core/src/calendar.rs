//! Whole-export view: calendar properties plus decoded events.

use serde::Serialize;

use crate::diagnostics::Diagnostics;
use crate::event::{CalEvent, TimestampField};
use crate::ics::{BlockRange, decode_event, locate_blocks, trim_line_ending};
use crate::select::{Extreme, select_extreme};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Calendar {
    /// VERSION
    pub version: Option<String>,
    /// PRODID
    pub prod_id: Option<String>,
    /// X-WR-CALNAME
    pub name: Option<String>,
    pub events: Vec<CalEvent>,
}

impl Calendar {
    /// Read calendar properties from the lines outside event blocks and decode
    /// every event block. The structure of the file is not validated.
    pub fn parse<S: AsRef<str>>(lines: &[S], diagnostics: &mut dyn Diagnostics) -> Self {
        let blocks = locate_blocks(lines);
        let inside = block_mask(&blocks, lines.len());
        let mut calendar = Calendar::default();

        for (line, _) in lines.iter().zip(&inside).filter(|(_, inside)| !**inside) {
            let Some((name, value)) = line.as_ref().split_once(':') else {
                continue;
            };
            let value = Some(trim_line_ending(value).to_string());
            match name {
                "VERSION" => calendar.version = value,
                "PRODID" => calendar.prod_id = value,
                "X-WR-CALNAME" => calendar.name = value,
                _ => {}
            }
        }

        calendar.events = blocks
            .into_iter()
            .map(|range| decode_event(lines, range, diagnostics))
            .collect();

        tracing::debug!(events = calendar.events.len(), "Decoded calendar");

        calendar
    }

    /// The event with the earliest start, if any event has one.
    pub fn earliest_event(&self) -> Option<&CalEvent> {
        self.select(TimestampField::Start, Extreme::Min)
    }

    pub fn select(&self, field: TimestampField, extreme: Extreme) -> Option<&CalEvent> {
        select_extreme(&self.events, field, extreme)
    }
}

/// Mark which of `len` lines fall inside a block, in O(lines + blocks).
/// Ranges running past the input are clamped; reversed ranges mark nothing.
fn block_mask(blocks: &[BlockRange], len: usize) -> Vec<bool> {
    let mut depth = vec![0i64; len + 1];
    for block in blocks {
        if block.start > block.end || block.start >= len {
            continue;
        }
        depth[block.start] += 1;
        depth[block.end.min(len - 1) + 1] -= 1;
    }

    let mut open = 0;
    depth[..len]
        .iter()
        .map(|delta| {
            open += delta;
            open > 0
        })
        .collect()
}
