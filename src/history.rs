/// Session-local history of generated addresses, newest first

use crate::email_data::GeneratedEmail;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct History {
    entries: Vec<GeneratedEmail>,
}

impl History {
    pub fn new() -> Self {
        History {
            entries: Vec::new(),
        }
    }

    /// Insert at the front; index 0 is always the most recent entry
    pub fn prepend(&mut self, entry: GeneratedEmail) {
        self.entries.insert(0, entry);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// The "latest result"
    pub fn latest(&self) -> Option<&GeneratedEmail> {
        self.entries.first()
    }

    pub fn get(&self, entry_id: &str) -> Option<&GeneratedEmail> {
        self.entries.iter().find(|e| e.id == entry_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &GeneratedEmail> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_entry(id: &str, counter: u32) -> GeneratedEmail {
        GeneratedEmail::generate("ahmed", counter, "gmail.com", id.to_string(), 1698508200000.0).unwrap()
    }

    #[test]
    fn test_history_new() {
        let history = History::new();
        assert_eq!(history.len(), 0);
        assert!(history.is_empty());
        assert!(history.latest().is_none());
    }

    #[test]
    fn test_prepend_orders_newest_first() {
        let mut history = History::new();
        history.prepend(create_test_entry("entry-1", 1));
        history.prepend(create_test_entry("entry-2", 2));
        history.prepend(create_test_entry("entry-3", 3));

        let ids: Vec<&str> = history.iter().map(|e| e.id.as_str()).collect();

        assert_eq!(ids, vec!["entry-3", "entry-2", "entry-1"]);
        assert_eq!(history.latest().unwrap().id, "entry-3");
    }

    #[test]
    fn test_get_entry() {
        let mut history = History::new();
        history.prepend(create_test_entry("entry-1", 1));

        assert_eq!(history.get("entry-1").unwrap().full_email, "ahmed+1@gmail.com");
        assert!(history.get("nonexistent").is_none());
    }

    #[test]
    fn test_clear() {
        let mut history = History::new();
        for i in 1..=25 {
            history.prepend(create_test_entry(&format!("entry-{}", i), i));
        }
        assert_eq!(history.len(), 25);

        history.clear();

        assert!(history.is_empty());

        // Clearing an empty history is fine too
        history.clear();
        assert!(history.is_empty());
    }

    #[test]
    fn test_duplicates_are_kept() {
        let mut history = History::new();
        history.prepend(create_test_entry("entry-1", 1));
        history.prepend(create_test_entry("entry-2", 1));

        assert_eq!(history.len(), 2);
    }

    #[test]
    fn test_serialization() {
        let mut history = History::new();
        history.prepend(create_test_entry("entry-1", 1));

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: History = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.len(), 1);
        assert_eq!(deserialized.latest().unwrap().id, "entry-1");
    }
}
