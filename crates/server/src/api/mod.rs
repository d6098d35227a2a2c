pub mod handlers;
pub mod requests;
pub mod routes;
pub mod worker;

pub use routes::create_router;
