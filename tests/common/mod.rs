#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use plexcli::{management::RefreshReporter, plex::PlexError, types::RefreshTarget};

/// Collects reporter notifications as plain strings.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    pub events: Vec<String>,
}

impl RefreshReporter for RecordingReporter {
    fn refreshing(&mut self, target: &RefreshTarget) {
        self.events.push(format!("refreshing {}", target.label));
    }

    fn failed(&mut self, target: &RefreshTarget, _error: &PlexError) {
        self.events.push(format!("failed {}", target.label));
    }

    fn finished(&mut self) {
        self.events.push("finished".to_string());
    }
}

/// Shared, append-only request log.
#[derive(Debug, Clone, Default)]
pub struct RequestLog(Arc<Mutex<Vec<String>>>);

impl RequestLog {
    pub fn push(&self, entry: impl Into<String>) {
        self.0.lock().unwrap().push(entry.into());
    }

    pub fn entries(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }
}
