// history.rs

use std::collections::VecDeque;
use std::fmt;

use crate::base::Base;

/// Number of conversions kept.
pub const HISTORY_CAPACITY: usize = 10;

/// One successful conversion. Built once by the converter, never changed.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ConversionRecord {
    original: String,
    from: Base,
    converted: String,
    to: Base,
}

impl ConversionRecord {
    pub fn new(original: String, from: Base, converted: String, to: Base) -> Self {
        Self { original, from, converted, to }
    }
    pub fn original(&self) -> &str {
        &self.original
    }
    pub fn source(&self) -> Base {
        self.from
    }
    pub fn converted(&self) -> &str {
        &self.converted
    }
    pub fn target(&self) -> Base {
        self.to
    }
}

impl fmt::Display for ConversionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) → {} ({})", self.original, self.from, self.converted, self.to)
    }
}

/// Anything a successful conversion can be logged to.
pub trait Recorder {
    fn record(&mut self, entry: ConversionRecord);
}

/// Most-recent-first log of conversions, capped at [`HISTORY_CAPACITY`].
#[derive(Default, Debug)]
pub struct History {
    entries: VecDeque<ConversionRecord>,
}

impl History {
    pub fn new() -> Self {
        Self { entries: VecDeque::with_capacity(HISTORY_CAPACITY + 1) }
    }
    /// Newest first.
    pub fn list(&self) -> impl Iterator<Item = &ConversionRecord> + '_ {
        self.entries.iter()
    }
    pub fn latest(&self) -> Option<&ConversionRecord> {
        self.entries.front()
    }
    pub fn len(&self) -> usize {
        self.entries.len()
    }
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Recorder for History {
    fn record(&mut self, entry: ConversionRecord) {
        self.entries.push_front(entry);
        self.entries.truncate(HISTORY_CAPACITY);
    }
}
