use std::sync::Arc;

use crate::bio::generator::BioGenerator;
use crate::store::ProfileRepository;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// File-backed in production, in-memory in tests.
    pub profiles: Arc<dyn ProfileRepository>,
    pub bio: BioGenerator,
}
