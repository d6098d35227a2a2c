//! Mock implementations for testing.

mod mock_processor;

pub use mock_processor::{MockBatchProcessor, RecordedBatch};
