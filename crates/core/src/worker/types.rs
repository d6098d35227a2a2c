//! Types for the batch worker.

use serde::{Deserialize, Serialize};

/// Current status of the batch worker.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkerStatus {
    /// Whether a worker loop is currently running.
    pub running: bool,
    /// Tickets waiting to be processed.
    pub pending: usize,
    /// Tickets with a stored result.
    pub ready: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_worker_status_default() {
        let status = WorkerStatus::default();
        assert!(!status.running);
        assert_eq!(status.pending, 0);
        assert_eq!(status.ready, 0);
    }

    #[test]
    fn test_worker_status_serialization() {
        let status = WorkerStatus {
            running: true,
            pending: 3,
            ready: 7,
        };
        let json = serde_json::to_string(&status).unwrap();
        let parsed: WorkerStatus = serde_json::from_str(&json).unwrap();
        assert!(parsed.running);
        assert_eq!(parsed.pending, 3);
        assert_eq!(parsed.ready, 7);
    }
}
