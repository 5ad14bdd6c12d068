//! Bounded operation history, most-recent-first

use std::collections::VecDeque;

use serde::Serialize;

/// Maximum retained operations; oldest evicted past this
pub const HISTORY_CAPACITY: usize = 10;

/// One evaluated expression, immutable once created
#[derive(Clone, Debug, Serialize)]
pub struct Operation {
    pub tokens: Vec<String>,
    pub result: f64,
    pub committed_at: f64,
}

/// Most-recent-first ring of evaluated operations
#[derive(Debug, Default)]
pub struct OperationHistory {
    entries: VecDeque<Operation>,
}

impl OperationHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, operation: Operation) {
        self.entries.push_front(operation);
        self.entries.truncate(HISTORY_CAPACITY);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Most recent operation, if any
    pub fn latest(&self) -> Option<&Operation> {
        self.entries.front()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Operation> {
        self.entries.iter()
    }

    /// Snapshot for serialization to the UI
    pub fn to_vec(&self) -> Vec<Operation> {
        self.entries.iter().cloned().collect()
    }
}
