//! Messages retained in memory under caller-chosen storage markers

use parking_lot::Mutex;
use std::collections::HashMap;

/// Append-only table from storage marker to the messages stored under it.
///
/// Entries are only removed by [`take`](Self::take) or
/// [`clear`](Self::clear).
#[derive(Debug, Default)]
pub struct StoredMessages {
    messages: Mutex<HashMap<String, Vec<String>>>,
}

impl StoredMessages {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message under a marker
    pub fn store(&self, marker: impl Into<String>, message: impl Into<String>) {
        self.messages
            .lock()
            .entry(marker.into())
            .or_default()
            .push(message.into());
    }

    /// Snapshot of the messages stored under a marker, in insertion order
    pub fn get(&self, marker: &str) -> Option<Vec<String>> {
        self.messages.lock().get(marker).cloned()
    }

    pub fn contains(&self, marker: &str) -> bool {
        self.messages.lock().contains_key(marker)
    }

    /// Markers with at least one stored message, sorted
    pub fn markers(&self) -> Vec<String> {
        let mut markers: Vec<String> = self.messages.lock().keys().cloned().collect();
        markers.sort();
        markers
    }

    /// Remove and return everything stored under a marker
    pub fn take(&self, marker: &str) -> Option<Vec<String>> {
        self.messages.lock().remove(marker)
    }

    pub fn clear(&self) {
        self.messages.lock().clear();
    }

    /// Total number of stored messages across all markers
    pub fn len(&self) -> usize {
        self.messages.lock().values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.lock().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_store_appends_in_order() {
        let stored = StoredMessages::new();
        stored.store("m", "first");
        stored.store("m", "second");
        stored.store("m", "first");

        assert_eq!(
            stored.get("m"),
            Some(vec!["first".to_string(), "second".to_string(), "first".to_string()])
        );
        assert_eq!(stored.len(), 3);
    }

    #[test]
    fn test_missing_marker() {
        let stored = StoredMessages::new();
        assert!(stored.get("nope").is_none());
        assert!(!stored.contains("nope"));
        assert!(stored.is_empty());
    }

    #[test]
    fn test_take_and_clear() {
        let stored = StoredMessages::new();
        stored.store("b", "x");
        stored.store("a", "y");
        assert_eq!(stored.markers(), vec!["a".to_string(), "b".to_string()]);

        assert_eq!(stored.take("a"), Some(vec!["y".to_string()]));
        assert!(!stored.contains("a"));

        stored.clear();
        assert!(stored.is_empty());
    }

    #[test]
    fn test_concurrent_store() {
        let stored = Arc::new(StoredMessages::new());
        let handles: Vec<_> = (0..8)
            .map(|t| {
                let stored = Arc::clone(&stored);
                thread::spawn(move || {
                    for i in 0..100 {
                        stored.store("shared", format!("{}-{}", t, i));
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(stored.get("shared").map(|m| m.len()), Some(800));
    }
}
