//! Commonly used items from docsense-hf.
//!
//! # Usage
//!
//! ```rust,ignore
//! use docsense_hf::prelude::*;
//! ```

pub use crate::client::{HfBuilder, HfClient, HfConfig, HfCredentials};
pub use crate::error::{Error, Result};
