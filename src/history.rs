//! Bounded in-memory store of recent assistant submissions.
//!
//! Entries live newest-first and die with the process. The store is
//! owned by the API context and shared across handlers behind a mutex;
//! nothing here survives a restart.

use std::collections::VecDeque;
use std::sync::Mutex;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Maximum number of entries retained.
pub const HISTORY_CAPACITY: usize = 50;

/// Store-level failure. A lock acquisition only fails when a holder
/// panicked.
#[derive(Error, Debug)]
pub enum HistoryError {
    #[error("history lock poisoned")]
    LockPoisoned,
}

/// Identity attached to a submission. Field defaults mirror the demo
/// client, so a partial or absent `user` object still yields a complete
/// identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    #[serde(default = "default_user_id")]
    pub id: String,
    #[serde(default = "default_user_role")]
    pub role: String,
}

fn default_user_id() -> String {
    "demo-user".to_string()
}

fn default_user_role() -> String {
    "clinician".to_string()
}

impl Default for UserIdentity {
    fn default() -> Self {
        Self {
            id: default_user_id(),
            role: default_user_role(),
        }
    }
}

/// One recorded submission.
///
/// `id` is the list length + 1 at insertion time, so ids repeat once the
/// store is full. Entries are told apart by position and `created_at`.
#[derive(Debug, Clone, Serialize)]
pub struct HistoryEntry {
    pub id: u64,
    pub created_at: String,
    pub note_text: String,
    pub conditions: Vec<String>,
    pub user: UserIdentity,
}

/// Bounded deque of recent submissions, newest first.
pub struct HistoryStore {
    entries: Mutex<VecDeque<HistoryEntry>>,
}

impl HistoryStore {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(VecDeque::with_capacity(HISTORY_CAPACITY)),
        }
    }

    /// Record a submission at the front, evicting the oldest entry once
    /// the store exceeds capacity. Stamps `created_at` (UTC, microsecond
    /// precision) and returns the stored entry.
    pub fn record(
        &self,
        note_text: &str,
        conditions: Vec<String>,
        user: UserIdentity,
    ) -> Result<HistoryEntry, HistoryError> {
        let mut entries = self.entries.lock().map_err(|_| HistoryError::LockPoisoned)?;

        let entry = HistoryEntry {
            id: entries.len() as u64 + 1,
            created_at: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
            note_text: note_text.to_string(),
            conditions,
            user,
        };

        entries.push_front(entry.clone());
        if entries.len() > HISTORY_CAPACITY {
            entries.pop_back();
        }

        Ok(entry)
    }

    /// Snapshot of the stored entries, newest first.
    pub fn recent(&self) -> Result<Vec<HistoryEntry>, HistoryError> {
        let entries = self.entries.lock().map_err(|_| HistoryError::LockPoisoned)?;
        Ok(entries.iter().cloned().collect())
    }
}

impl Default for HistoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_note(store: &HistoryStore, note: &str) -> HistoryEntry {
        store
            .record(note, vec![], UserIdentity::default())
            .unwrap()
    }

    #[test]
    fn record_assigns_sequential_ids() {
        let store = HistoryStore::new();
        assert_eq!(record_note(&store, "first").id, 1);
        assert_eq!(record_note(&store, "second").id, 2);
        assert_eq!(record_note(&store, "third").id, 3);
    }

    #[test]
    fn newest_entry_first() {
        let store = HistoryStore::new();
        record_note(&store, "older");
        record_note(&store, "newer");

        let entries = store.recent().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].note_text, "newer");
        assert_eq!(entries[1].note_text, "older");
    }

    #[test]
    fn capacity_evicts_oldest() {
        let store = HistoryStore::new();
        for i in 1..=(HISTORY_CAPACITY + 1) {
            record_note(&store, &format!("note-{i}"));
        }

        let entries = store.recent().unwrap();
        assert_eq!(entries.len(), HISTORY_CAPACITY);
        assert_eq!(entries[0].note_text, "note-51");
        // note-1 fell off the back
        assert_eq!(entries.last().unwrap().note_text, "note-2");
    }

    #[test]
    fn ids_repeat_once_full() {
        let store = HistoryStore::new();
        for i in 1..=(HISTORY_CAPACITY + 2) {
            record_note(&store, &format!("note-{i}"));
        }

        let entries = store.recent().unwrap();
        // Both of the last two inserts saw a full store of 50
        assert_eq!(entries[0].id, 51);
        assert_eq!(entries[1].id, 51);
    }

    #[test]
    fn created_at_is_utc_with_micros() {
        let store = HistoryStore::new();
        let entry = record_note(&store, "note");
        assert!(entry.created_at.ends_with('Z'));
        assert!(entry.created_at.contains('T'));
        // 2026-08-24T12:34:56.123456Z
        assert_eq!(entry.created_at.len(), 27);
    }

    #[test]
    fn records_conditions_and_user() {
        let store = HistoryStore::new();
        let user = UserIdentity {
            id: "dr-1".into(),
            role: "physician".into(),
        };
        let entry = store
            .record("chest pain", vec!["angina".into()], user.clone())
            .unwrap();

        assert_eq!(entry.conditions, vec!["angina".to_string()]);
        assert_eq!(entry.user, user);
        assert_eq!(store.recent().unwrap()[0].user, user);
    }

    #[test]
    fn default_user_identity() {
        let user = UserIdentity::default();
        assert_eq!(user.id, "demo-user");
        assert_eq!(user.role, "clinician");
    }

    #[test]
    fn partial_user_object_fills_missing_fields() {
        let user: UserIdentity = serde_json::from_str(r#"{"id": "dr-9"}"#).unwrap();
        assert_eq!(user.id, "dr-9");
        assert_eq!(user.role, "clinician");

        let user: UserIdentity = serde_json::from_str("{}").unwrap();
        assert_eq!(user.id, "demo-user");
    }

    #[test]
    fn entry_serializes_expected_fields() {
        let store = HistoryStore::new();
        let entry = store
            .record("note", vec!["flu".into()], UserIdentity::default())
            .unwrap();

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["note_text"], "note");
        assert_eq!(json["conditions"][0], "flu");
        assert_eq!(json["user"]["id"], "demo-user");
        assert!(json["created_at"].is_string());
    }
}
