#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

/// Tracing target for the main library
pub const TRACING_TARGET: &str = "docsense_hf";

/// Tracing target for client operations
pub const TRACING_TARGET_CLIENT: &str = "docsense_hf::client";

mod client;
mod error;
#[doc(hidden)]
pub mod prelude;
mod provider;

pub use crate::client::{HfBuilder, HfClient, HfConfig, HfCredentials};
pub use crate::error::{Error, Result};
