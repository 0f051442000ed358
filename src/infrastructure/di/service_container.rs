//! Service container for dependency injection
//!
//! Wires up all services with their dependencies.

use std::sync::Arc;

use crate::application::services::PricingService;
use crate::config::Settings;
use crate::infrastructure::traits::{Diagnostics, StderrDiagnostics};

/// Container holding all application services.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    pub pricing: PricingService,
}

impl ServiceContainer {
    /// Create a new service container with real implementations.
    pub fn new(settings: Settings) -> Self {
        Self::with_deps(settings, Arc::new(StderrDiagnostics))
    }

    /// Create a service container with custom dependencies (for testing).
    pub fn with_deps(settings: Settings, diagnostics: Arc<dyn Diagnostics>) -> Self {
        let settings = Arc::new(settings);
        let pricing = PricingService::new(diagnostics);

        Self { settings, pricing }
    }
}
