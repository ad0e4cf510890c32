//! In-memory transcript of relayed exchanges.
//!
//! Append-only and never persisted; the contents are lost on restart. There
//! is no HTTP read surface - the snapshot accessor exists for tests and
//! debugging.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::llm::Role;

/// One logged side of an exchange. Ordering in the transcript is the only
/// timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct TranscriptEntry {
    pub role: Role,
    pub content: String,
    pub provider: String,
}

/// Shared append-only transcript store.
#[derive(Clone, Default)]
pub struct Transcript {
    entries: Arc<RwLock<Vec<TranscriptEntry>>>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a single entry. Whole-entry atomic under the lock; concurrent
    /// relay calls interleave entries but never tear them.
    pub async fn append(&self, entry: TranscriptEntry) {
        self.entries.write().await.push(entry);
    }

    /// Copy of the current entries, in append order.
    pub async fn snapshot(&self) -> Vec<TranscriptEntry> {
        self.entries.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}
