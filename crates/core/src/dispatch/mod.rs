//! Submission/retrieval façade.

mod dispatcher;

pub use dispatcher::RequestDispatcher;
