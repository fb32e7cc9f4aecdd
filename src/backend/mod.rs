//! Backend-delegated variant.
//!
//! The backend is an external HTTP peer; only the client side lives here.

mod client;

pub use client::BackendClient;
