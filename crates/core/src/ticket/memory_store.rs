//! In-memory ticket store implementation.

use std::collections::HashMap;
use std::sync::Mutex;

use chrono::Utc;
use tracing::debug;

use super::{Payload, StoreCounts, Ticket, TicketResult, TicketStatus, TicketStore};

/// Map plus insertion order, guarded as one unit so a submit racing with a
/// scan never observes a half-written record.
struct Inner {
    entries: HashMap<String, Ticket>,
    /// Ids in insertion order. Tickets are never physically removed, so this
    /// doubles as the scan order for `next_pending`.
    order: Vec<String>,
}

/// In-memory ticket store.
///
/// Lives for the lifetime of the process; tickets are never physically
/// removed, which is what lets `result` distinguish "never existed" from
/// "deleted".
pub struct MemoryTicketStore {
    inner: Mutex<Inner>,
}

impl Default for MemoryTicketStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryTicketStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                entries: HashMap::new(),
                order: Vec::new(),
            }),
        }
    }
}

impl TicketStore for MemoryTicketStore {
    fn create(&self, payload: Payload) -> String {
        let id = uuid::Uuid::new_v4().to_string();
        let ticket = Ticket {
            id: id.clone(),
            created_at: Utc::now(),
            payload,
            status: TicketStatus::Pending,
            result: None,
        };

        let mut inner = self.inner.lock().unwrap();
        inner.order.push(id.clone());
        inner.entries.insert(id.clone(), ticket);
        debug!("Created ticket {}", id);
        id
    }

    fn payload(&self, id: &str) -> Option<Payload> {
        let inner = self.inner.lock().unwrap();
        inner.entries.get(id).map(|t| t.payload.clone())
    }

    fn result(&self, id: &str) -> (TicketStatus, Option<TicketResult>) {
        let inner = self.inner.lock().unwrap();
        match inner.entries.get(id) {
            Some(ticket) => (ticket.status, ticket.result.clone()),
            None => (TicketStatus::NotFound, None),
        }
    }

    fn status(&self, id: &str) -> TicketStatus {
        let inner = self.inner.lock().unwrap();
        inner
            .entries
            .get(id)
            .map(|t| t.status)
            .unwrap_or(TicketStatus::NotFound)
    }

    fn delete(&self, id: &str) -> bool {
        let mut inner = self.inner.lock().unwrap();
        match inner.entries.get_mut(id) {
            Some(ticket) if ticket.status == TicketStatus::Ready => {
                ticket.status = TicketStatus::Deleted;
                ticket.result = None;
                debug!("Deleted result for ticket {}", id);
                true
            }
            _ => false,
        }
    }

    fn next_pending(&self, n: usize) -> Vec<String> {
        let inner = self.inner.lock().unwrap();
        let mut ids = Vec::new();
        for id in &inner.order {
            if ids.len() == n {
                break;
            }
            if let Some(ticket) = inner.entries.get(id) {
                if ticket.status == TicketStatus::Pending {
                    ids.push(id.clone());
                }
            }
        }
        ids
    }

    fn store_result(&self, id: &str, result: TicketResult) -> bool {
        let mut inner = self.inner.lock().unwrap();
        match inner.entries.get_mut(id) {
            Some(ticket) => {
                ticket.result = Some(result);
                ticket.status = TicketStatus::Ready;
                debug!("Stored result for ticket {}", id);
                true
            }
            None => false,
        }
    }

    fn counts(&self) -> StoreCounts {
        let inner = self.inner.lock().unwrap();
        let mut counts = StoreCounts {
            total: inner.entries.len(),
            ..Default::default()
        };
        for ticket in inner.entries.values() {
            match ticket.status {
                TicketStatus::Pending => counts.pending += 1,
                TicketStatus::Ready => counts.ready += 1,
                TicketStatus::Deleted => counts.deleted += 1,
                TicketStatus::NotFound => {}
            }
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;

    #[test]
    fn test_create_returns_unique_ids() {
        let store = MemoryTicketStore::new();
        let mut seen = HashSet::new();
        for i in 0..100 {
            let id = store.create(format!("payload-{}", i).into_bytes());
            assert!(seen.insert(id), "duplicate id returned by create");
        }
    }

    #[test]
    fn test_unknown_id_is_not_found() {
        let store = MemoryTicketStore::new();
        let (status, result) = store.result("no-such-id");
        assert_eq!(status, TicketStatus::NotFound);
        assert!(result.is_none());
        assert_eq!(store.status("no-such-id"), TicketStatus::NotFound);
        assert!(store.payload("no-such-id").is_none());
    }

    #[test]
    fn test_fresh_ticket_is_pending_without_result() {
        let store = MemoryTicketStore::new();
        let id = store.create(b"data".to_vec());
        let (status, result) = store.result(&id);
        assert_eq!(status, TicketStatus::Pending);
        assert!(result.is_none());
        assert_eq!(store.payload(&id), Some(b"data".to_vec()));
    }

    #[test]
    fn test_next_pending_respects_limit_and_insertion_order() {
        let store = MemoryTicketStore::new();
        let ids: Vec<String> = (0..5)
            .map(|i| store.create(vec![i as u8]))
            .collect();

        let batch = store.next_pending(3);
        assert_eq!(batch, ids[..3].to_vec());

        let all = store.next_pending(10);
        assert_eq!(all, ids);

        assert!(store.next_pending(0).is_empty());
    }

    #[test]
    fn test_next_pending_skips_ready_tickets() {
        let store = MemoryTicketStore::new();
        let first = store.create(b"a".to_vec());
        let second = store.create(b"b".to_vec());

        assert!(store.store_result(&first, TicketResult::ok(serde_json::json!("done"))));

        let batch = store.next_pending(10);
        assert_eq!(batch, vec![second]);
    }

    #[test]
    fn test_store_result_marks_ready() {
        let store = MemoryTicketStore::new();
        let id = store.create(b"data".to_vec());

        assert!(store.store_result(&id, TicketResult::ok(serde_json::json!({"n": 1}))));

        let (status, result) = store.result(&id);
        assert_eq!(status, TicketStatus::Ready);
        assert_eq!(result, Some(TicketResult::ok(serde_json::json!({"n": 1}))));
    }

    #[test]
    fn test_store_result_unknown_id_returns_false() {
        let store = MemoryTicketStore::new();
        assert!(!store.store_result("ghost", TicketResult::ok(serde_json::json!(null))));
    }

    #[test]
    fn test_result_is_idempotent_until_delete() {
        let store = MemoryTicketStore::new();
        let id = store.create(b"data".to_vec());
        store.store_result(&id, TicketResult::ok(serde_json::json!("r")));

        let first = store.result(&id);
        let second = store.result(&id);
        assert_eq!(first, second);

        assert!(store.delete(&id));
        let (status, result) = store.result(&id);
        assert_eq!(status, TicketStatus::Deleted);
        assert!(result.is_none());
    }

    #[test]
    fn test_delete_requires_ready_status() {
        let store = MemoryTicketStore::new();
        let id = store.create(b"data".to_vec());

        // Pending tickets cannot be deleted out from under the worker.
        assert!(!store.delete(&id));
        assert_eq!(store.status(&id), TicketStatus::Pending);

        store.store_result(&id, TicketResult::ok(serde_json::json!(1)));
        assert!(store.delete(&id));

        // Second delete is a no-op.
        assert!(!store.delete(&id));
        assert!(!store.delete("ghost"));
    }

    #[test]
    fn test_counts() {
        let store = MemoryTicketStore::new();
        let a = store.create(b"a".to_vec());
        let b = store.create(b"b".to_vec());
        let _c = store.create(b"c".to_vec());

        store.store_result(&a, TicketResult::ok(serde_json::json!(1)));
        store.store_result(&b, TicketResult::ok(serde_json::json!(2)));
        store.delete(&b);

        let counts = store.counts();
        assert_eq!(counts.total, 3);
        assert_eq!(counts.pending, 1);
        assert_eq!(counts.ready, 1);
        assert_eq!(counts.deleted, 1);
    }

    #[test]
    fn test_concurrent_creates_preserve_uniqueness() {
        let store = Arc::new(MemoryTicketStore::new());
        let mut handles = Vec::new();
        for _ in 0..8 {
            let store = Arc::clone(&store);
            handles.push(std::thread::spawn(move || {
                (0..50)
                    .map(|i| store.create(vec![i as u8]))
                    .collect::<Vec<_>>()
            }));
        }

        let mut seen = HashSet::new();
        for handle in handles {
            for id in handle.join().unwrap() {
                assert!(seen.insert(id));
            }
        }
        assert_eq!(store.counts().total, 400);
    }
}
