//! Shared service state for request handlers.

use axum::extract::FromRef;
use docsense_service::NlpService;

/// Shared, read-only state injected into every handler.
///
/// The NLP service is the only process-wide resource; it is constructed
/// once before serving begins and never mutated afterwards. Cloning the
/// state is cheap.
#[derive(Clone, Debug)]
pub struct ServiceState {
    nlp_service: NlpService,
}

impl ServiceState {
    /// Creates the state from an NLP service.
    pub fn from_service(nlp_service: NlpService) -> Self {
        Self { nlp_service }
    }

    /// Returns the NLP service.
    pub fn nlp_service(&self) -> &NlpService {
        &self.nlp_service
    }
}

impl FromRef<ServiceState> for NlpService {
    fn from_ref(state: &ServiceState) -> Self {
        state.nlp_service.clone()
    }
}
