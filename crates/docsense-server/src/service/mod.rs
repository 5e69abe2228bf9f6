//! Shared state injected into request handlers.

mod state;

pub use state::ServiceState;
