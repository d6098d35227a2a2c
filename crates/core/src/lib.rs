pub mod config;
pub mod dispatch;
pub mod metrics;
pub mod processor;
pub mod testing;
pub mod ticket;
pub mod worker;

pub use config::{
    load_config, load_config_from_str, validate_config, Config, ConfigError, ServerConfig,
};
pub use dispatch::RequestDispatcher;
pub use processor::{
    BatchProcessor, EchoProcessor, ProcessorConfig, ProcessorError, ProcessorRegistry,
};
pub use ticket::{
    MemoryTicketStore, Payload, StoreCounts, Ticket, TicketResult, TicketStatus, TicketStore,
};
pub use worker::{BatchWorker, WorkerConfig, WorkerStatus};
