//! Undo System
//!
//! A bounded stack of full-scene snapshots. Every discrete mutating action
//! captures the item collection *before* it mutates; undo pops the most
//! recent capture and swaps it in wholesale.
//!
//! Snapshots are deep copies, O(n) per action. That is fine for a room of
//! tens of items; thousands would call for structural diffs instead.
//!
//! # Usage
//!
//! ```ignore
//! use furnish_engine::editor::undo::UndoManager;
//!
//! let mut undo = UndoManager::new(20);
//! undo.snapshot(&scene);
//! scene.remove(&id);
//!
//! undo.undo(&mut scene); // item is back
//! ```

use crate::config::DEFAULT_UNDO_LIMIT;
use crate::scene::{PlacedItem, Scene};

// ============================================================================
// SNAPSHOT
// ============================================================================

/// Immutable deep copy of the placed-item collection at one instant.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    items: Vec<PlacedItem>,
}

impl Snapshot {
    pub fn capture(scene: &Scene) -> Self {
        Self {
            items: scene.items().to_vec(),
        }
    }

    pub fn items(&self) -> &[PlacedItem] {
        &self.items
    }
}

// ============================================================================
// UNDO MANAGER
// ============================================================================

/// Bounded snapshot stack. When full, the oldest snapshot is dropped.
#[derive(Debug)]
pub struct UndoManager {
    /// Oldest first
    snapshots: Vec<Snapshot>,
    /// Maximum number of snapshots to retain.
    limit: usize,
}

impl Default for UndoManager {
    fn default() -> Self {
        Self::new(DEFAULT_UNDO_LIMIT)
    }
}

impl UndoManager {
    /// Create an empty manager. A zero limit is raised to one.
    pub fn new(limit: usize) -> Self {
        Self {
            snapshots: Vec::new(),
            limit: limit.max(1),
        }
    }

    /// Capture the scene before a mutating action.
    pub fn snapshot(&mut self, scene: &Scene) {
        self.snapshots.push(Snapshot::capture(scene));

        if self.snapshots.len() > self.limit {
            let excess = self.snapshots.len() - self.limit;
            self.snapshots.drain(0..excess);
        }
    }

    /// Restore the most recent snapshot. Returns `false` (no-op) when empty.
    pub fn undo(&mut self, scene: &mut Scene) -> bool {
        let Some(snapshot) = self.snapshots.pop() else {
            return false;
        };
        scene.replace_items(snapshot.items);
        tracing::info!(remaining = self.snapshots.len(), "undo applied");
        true
    }

    pub fn can_undo(&self) -> bool {
        !self.snapshots.is_empty()
    }

    /// Number of stored snapshots.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Most recent snapshot without consuming it.
    pub fn peek(&self) -> Option<&Snapshot> {
        self.snapshots.last()
    }

    /// Clear all history.
    pub fn clear(&mut self) {
        self.snapshots.clear();
    }
}

// ============================================================================
// TESTS
// ============================================================================
