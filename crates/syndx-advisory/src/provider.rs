use futures::future::BoxFuture;
use syndx_core::models::advisory::AdvisoryResult;
use syndx_core::models::patient::PatientContext;

use crate::error::AdvisoryError;

/// A source of supplementary diagnostic suggestions.
///
/// Implementations may be slow or unavailable. Callers go through
/// [`fetch_advisory`](crate::aggregate::fetch_advisory), which bounds the
/// call and never lets a failure block a diagnosis.
pub trait AdvisoryProvider: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &str;

    fn get_advisory<'a>(
        &'a self,
        context: &'a PatientContext,
    ) -> BoxFuture<'a, Result<AdvisoryResult, AdvisoryError>>;
}

/// Provider used when the advisory is switched off in configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledAdvisor;

impl AdvisoryProvider for DisabledAdvisor {
    fn name(&self) -> &str {
        "disabled"
    }

    fn get_advisory<'a>(
        &'a self,
        _context: &'a PatientContext,
    ) -> BoxFuture<'a, Result<AdvisoryResult, AdvisoryError>> {
        Box::pin(async { Err(AdvisoryError::Disabled) })
    }
}
