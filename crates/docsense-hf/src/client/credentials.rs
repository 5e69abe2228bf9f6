//! Authentication credentials for the hosted inference API
//!
//! This module provides authentication credential types and constructors for
//! the inference client.

/// Authentication credentials for the inference service
///
/// The public inference API works without authentication at reduced rate
/// limits; dedicated deployments require a bearer token.
#[derive(Debug, Clone, Default)]
pub enum HfCredentials {
    /// Bearer token authentication
    BearerToken(String),
    /// No authentication
    #[default]
    None,
}

impl HfCredentials {
    /// Create bearer token credentials
    pub fn bearer_token(token: impl Into<String>) -> Self {
        Self::BearerToken(token.into())
    }

    /// Create credentials with no authentication
    pub fn none() -> Self {
        Self::None
    }

    /// Returns the bearer token, if any.
    pub fn token(&self) -> Option<&str> {
        match self {
            Self::BearerToken(token) => Some(token),
            Self::None => None,
        }
    }
}
