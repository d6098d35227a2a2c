//! Batch processing seam.
//!
//! The worker loop depends only on [`BatchProcessor`]: a callable that takes
//! a fixed-size list of payloads and returns one result per position, or
//! fails as a whole. Concrete implementations are registered by name in a
//! [`ProcessorRegistry`] at startup and looked up by string key from the
//! configuration.

mod config;
mod echo;
mod error;
mod registry;
mod traits;

pub use config::ProcessorConfig;
pub use echo::EchoProcessor;
pub use error::ProcessorError;
pub use registry::{ProcessorFactory, ProcessorRegistry};
pub use traits::BatchProcessor;
