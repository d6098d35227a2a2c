//! Ticket system for tracking submitted batch requests.

mod memory_store;
mod store;
mod types;

pub use memory_store::MemoryTicketStore;
pub use store::{StoreCounts, TicketStore};
pub use types::{Payload, Ticket, TicketResult, TicketStatus};
