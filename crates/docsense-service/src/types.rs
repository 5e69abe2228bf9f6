//! Shared service status types.

use serde::{Deserialize, Serialize};

/// Operational status reported by a provider health check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    /// Service is fully operational.
    #[default]
    Healthy,
    /// Service is reachable but impaired.
    Degraded,
    /// Service is not usable.
    Unhealthy,
}

/// Result of a provider health check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceHealth {
    /// Overall status of the backend.
    pub status: ServiceStatus,
    /// Optional human-readable detail.
    pub message: Option<String>,
}

impl ServiceHealth {
    /// Creates a healthy status.
    pub fn healthy() -> Self {
        Self {
            status: ServiceStatus::Healthy,
            message: None,
        }
    }

    /// Creates a degraded status with a detail message.
    pub fn degraded(message: impl Into<String>) -> Self {
        Self {
            status: ServiceStatus::Degraded,
            message: Some(message.into()),
        }
    }

    /// Creates an unhealthy status with a detail message.
    pub fn unhealthy(message: impl Into<String>) -> Self {
        Self {
            status: ServiceStatus::Unhealthy,
            message: Some(message.into()),
        }
    }

    /// Returns true if the backend is usable.
    pub fn is_healthy(&self) -> bool {
        self.status == ServiceStatus::Healthy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_constructors() {
        assert!(ServiceHealth::healthy().is_healthy());
        assert!(!ServiceHealth::degraded("slow").is_healthy());
        assert!(!ServiceHealth::unhealthy("down").is_healthy());
    }

    #[test]
    fn status_serializes_lowercase() {
        let json = serde_json::to_string(&ServiceStatus::Healthy).unwrap();
        assert_eq!(json, "\"healthy\"");
    }
}
