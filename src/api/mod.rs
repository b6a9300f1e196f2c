pub mod client;
pub mod handlers;
pub mod server;

pub use client::BackendClient;
pub use handlers::{configure, ApiError, AppState};
