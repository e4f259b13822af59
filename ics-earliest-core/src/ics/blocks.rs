//! VEVENT block location.

const BEGIN_MARKER: &str = "BEGIN:VEVENT";
const END_MARKER: &str = "END:VEVENT";

/// Inclusive line range of one event block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockRange {
    pub start: usize,
    pub end: usize,
}

impl BlockRange {
    pub fn contains(&self, index: usize) -> bool {
        self.start <= index && index <= self.end
    }
}

/// Find every VEVENT block in `lines`, in the order they appear.
///
/// Begin and end markers are collected separately and paired by position.
/// Blocks are assumed to be flat and balanced; surplus markers on either side
/// are dropped.
pub fn locate_blocks<S: AsRef<str>>(lines: &[S]) -> Vec<BlockRange> {
    let mut starts = Vec::new();
    let mut ends = Vec::new();

    for (i, line) in lines.iter().enumerate() {
        let line = line.as_ref();
        if line.contains(BEGIN_MARKER) {
            starts.push(i);
        }
        if line.contains(END_MARKER) {
            ends.push(i);
        }
    }

    if starts.len() != ends.len() {
        tracing::debug!(
            begins = starts.len(),
            ends = ends.len(),
            "Unbalanced VEVENT markers, extra markers ignored"
        );
    }

    let blocks: Vec<BlockRange> = starts
        .into_iter()
        .zip(ends)
        .map(|(start, end)| BlockRange { start, end })
        .collect();

    tracing::debug!(blocks = blocks.len(), "Located VEVENT blocks");

    blocks
}
