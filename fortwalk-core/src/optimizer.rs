//! The planner boundary.

use thiserror::Error;

use crate::{RouteRequest, RouteRequestValidationError, RouteResult};

/// Errors returned by [`RouteOptimizer::optimize`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OptimizeError {
    /// The request cannot be planned against the optimizer's fort.
    #[error("invalid route request: {0}")]
    InvalidRequest(#[from] RouteRequestValidationError),
}

/// Plan a closed walk through a fort.
///
/// Implementations own the fort they plan over. Failing to fit a stop, or
/// finding nothing worth visiting beyond the entry point, is an ordinary
/// result rather than an error. Requests fail only when
/// [`RouteRequest::validate_for`] rejects them, which includes a positive
/// budget too small to cover the visit at the entry point
/// ([`RouteRequestValidationError::BudgetBelowEntryVisit`]).
/// Optimizers must be `Send + Sync` so one instance can serve concurrent
/// callers.
///
/// # Examples
/// ```
/// use fortwalk_core::{
///     OptimizeError, RouteMetrics, RouteOptimizer, RouteRequest, RouteResult,
/// };
///
/// struct StayPut;
///
/// impl RouteOptimizer for StayPut {
///     fn optimize(&self, request: &RouteRequest) -> Result<RouteResult, OptimizeError> {
///         Ok(RouteResult {
///             strategy: request.strategy,
///             stops: vec![request.entry_point.clone()],
///             locations: Vec::new(),
///             metrics: RouteMetrics::default(),
///             decision_log: Vec::new(),
///         })
///     }
/// }
///
/// let result = StayPut.optimize(&RouteRequest::new("gate", 30.0)).unwrap();
/// assert!(result.is_closed());
/// ```
pub trait RouteOptimizer: Send + Sync {
    /// Plan a route for `request`.
    ///
    /// # Errors
    /// Returns [`OptimizeError::InvalidRequest`] when the request fails
    /// validation.
    fn optimize(&self, request: &RouteRequest) -> Result<RouteResult, OptimizeError>;
}
