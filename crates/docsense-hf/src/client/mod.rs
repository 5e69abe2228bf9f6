//! HTTP client for the hosted inference API.

mod credentials;
mod hf_client;
mod hf_config;

pub use credentials::HfCredentials;
pub use hf_client::HfClient;
pub use hf_config::{HfBuilder, HfConfig};
