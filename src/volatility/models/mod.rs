//! Model layer — the "log predictive sequence" contract and its two
//! implementations.
//!
//! Purpose
//! -------
//! Define the shared scoring protocol ([`LogPredictiveModel`]) that makes the
//! coupled RV-DLM and the classical discount-DLM baseline swappable for
//! apples-to-apples comparison, and host the sequence driver / likelihood
//! accumulator as provided trait methods.
//!
//! Conventions
//! -----------
//! - A log-predictive sequence has the same length as the input series.
//!   Index 0 carries no one-step density (there is no previous observation)
//!   and is defined as 0.0 by convention; indices 1..n−1 hold the per-step
//!   Student-t log densities.
//! - The total log-likelihood is the sum over indices 1..n−1, so additivity
//!   with the per-step array holds by construction.
//! - A pass either completes or returns an error; callers treating a failing
//!   calibration trial as infinite loss is policy, not something models do
//!   silently.

pub mod baseline;
pub mod rv_dlm;

use crate::volatility::{core::data::RVData, errors::RVResult};
use ndarray::{Array1, s};

pub use self::baseline::BaselineDLM;
pub use self::rv_dlm::RVDLM;

/// Shared one-step-ahead scoring contract.
///
/// Implementors run one full forward pass over the supplied series and
/// report the per-step log predictive densities. The provided methods derive
/// the scalar views used by calibration: the total log-likelihood and its
/// negation for minimization-based tuning.
pub trait LogPredictiveModel {
    /// One-step-ahead log predictive densities for the whole series.
    ///
    /// Returns an array of the same length as `data`, with index 0 equal to
    /// 0.0 and indices 1.. populated by the per-step computation.
    fn log_predictive(&self, data: &RVData) -> RVResult<Array1<f64>>;

    /// Total log-likelihood: the sum of the per-step densities for t ≥ 1.
    fn loglik(&self, data: &RVData) -> RVResult<f64> {
        Ok(self.log_predictive(data)?.slice(s![1..]).sum())
    }

    /// Negated total log-likelihood, the minimization view used by tuning.
    fn neg_loglik(&self, data: &RVData) -> RVResult<f64> {
        Ok(-self.loglik(data)?)
    }
}
