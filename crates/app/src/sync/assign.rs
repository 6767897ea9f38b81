//! Name assignment feed
//!
//! Publishes a fixed announced name on a latest-value channel so labels
//! rendered anywhere in the app agree on it. Subscribers created before
//! the first announcement observe the empty string.

use tokio::sync::watch;

/// Latest-value feed for the announced group name.
pub struct AssignService {
    name: String,
    tx: watch::Sender<String>,
}

impl AssignService {
    /// Create a feed that will announce `name`.
    pub fn new(name: impl Into<String>) -> Self {
        let (tx, _) = watch::channel(String::new());
        Self { name: name.into(), tx }
    }

    /// Publish the announced name to all current and future subscribers.
    pub fn announce(&self) {
        let _ = self.tx.send_replace(self.name.clone());
    }

    /// Subscribe to the name feed; the receiver immediately holds the
    /// most recent value.
    pub fn subscribe(&self) -> watch::Receiver<String> {
        self.tx.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn starts_empty_then_delivers_announcement() {
        let service = AssignService::new("OEA");
        let mut rx = service.subscribe();
        assert_eq!(*rx.borrow(), "");

        service.announce();

        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow_and_update(), "OEA");
    }

    #[tokio::test]
    async fn late_subscriber_sees_latest_value() {
        let service = AssignService::new("OEA");
        service.announce();

        let rx = service.subscribe();
        assert_eq!(*rx.borrow(), "OEA");
    }
}
