//! In-memory outcome cache.

use std::collections::HashMap;
use std::sync::Mutex;

use treeduce_lib::{Cache, Outcome};

/// Cache keyed by candidate text, safe to share between reducer workers.
#[derive(Default)]
pub struct ContentCache {
    entries: Mutex<HashMap<String, Outcome>>,
}

impl Cache for ContentCache {
    fn lookup(&self, candidate: &str) -> Option<Outcome> {
        self.entries.lock().unwrap().get(candidate).copied()
    }

    fn store(&self, candidate: &str, outcome: Outcome) {
        self.entries
            .lock()
            .unwrap()
            .insert(candidate.to_owned(), outcome);
    }

    fn clear(&self) {
        self.entries.lock().unwrap().clear();
    }
}
