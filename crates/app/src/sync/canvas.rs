//! Canvas drawing sync
//!
//! Every local drawing change is republished so all canvas observers
//! converge on the same strokes. The latest drawing replaces the held
//! one wholesale; there is no stroke-level merging.

use multisync_domain::constants::DRAWING_EVENT_CAPACITY;
use multisync_domain::Drawing;
use parking_lot::Mutex;
use tokio::sync::broadcast;

/// Republishes canvas drawings to every subscribed observer.
pub struct CanvasSyncService {
    latest: Mutex<Drawing>,
    tx: broadcast::Sender<Drawing>,
}

impl CanvasSyncService {
    /// Create a sync service holding an empty drawing.
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(DRAWING_EVENT_CAPACITY);
        Self { latest: Mutex::new(Drawing::default()), tx }
    }

    /// Replace the held drawing and republish it.
    pub fn update(&self, drawing: Drawing) {
        *self.latest.lock() = drawing.clone();
        let _ = self.tx.send(drawing);
    }

    /// Snapshot of the most recently published drawing.
    pub fn latest(&self) -> Drawing {
        self.latest.lock().clone()
    }

    /// Subscribe to drawing updates; past updates are not replayed.
    pub fn subscribe(&self) -> broadcast::Receiver<Drawing> {
        self.tx.subscribe()
    }
}

impl Default for CanvasSyncService {
    fn default() -> Self {
        Self::new()
    }
}
