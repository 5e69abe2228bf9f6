#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

mod error;
pub mod nlp;
#[doc(hidden)]
pub mod prelude;
mod types;

pub use error::{BoxedError, Error, ErrorKind, Result};
#[cfg(feature = "test-utils")]
#[cfg_attr(docsrs, doc(cfg(feature = "test-utils")))]
pub use nlp::{MockConfig, MockProvider};
pub use nlp::{NlpProvider, NlpService};
pub use types::{ServiceHealth, ServiceStatus};
