//! Discount-weighted linear-Gaussian state block for price dynamics.
//!
//! Implements the per-step Kalman-type recursion of the RV-DLM price block.
//! Observation variance and Student-t degrees of freedom are *supplied* per
//! step via a [`PrecisionSnapshot`], not estimated here, which is what lets
//! both the coupled model and the baseline discount DLM share this recursion.
//!
//! ## Per-step recursion
//! Given the current `(mean, covariance)`, a design vector `F_t`, and a
//! snapshot `(dof, σ²)`:
//!
//! 1. `C_prior = covariance / λ_θ` — covariance-only discounting (the mean
//!    carries over undiscounted).
//! 2. `ŷ = F_t · mean`, `Q = F_tᵀ C_prior F_t + σ²` (must be finite, > 0).
//! 3. log predictive = Student-t `ln_pdf(y_t)` with location `ŷ`, scale
//!    `√Q`, degrees of freedom `dof`.
//! 4. `A = C_prior F_t / Q`, `e = y_t − ŷ`, `mean ← mean + A e`,
//!    `covariance ← C_prior − outer(A, A)·Q`, then symmetrized `(C + Cᵀ)/2`.
//!
//! The symmetrization is an invariant-restoring step against floating-point
//! drift, applied after every covariance update, never skipped.
use crate::volatility::{
    core::precision::PrecisionSnapshot,
    errors::{RVError, RVResult},
};
use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Axis};
use statrs::distribution::{Continuous, StudentsT};

/// Result of one state-space step.
///
/// `log_predictive` is the one-step-ahead Student-t log density of the
/// observation; `forecast_error` and `forecast_variance` are exposed so
/// variance-learning callers (the baseline discount DLM) can run their own
/// scale recursion on top of the shared state update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepOutcome {
    /// Student-t log predictive density of `y_t`.
    pub log_predictive: f64,
    /// One-step forecast error `e = y_t − ŷ`.
    pub forecast_error: f64,
    /// Forecast variance `Q`.
    pub forecast_variance: f64,
}

/// `StateSpace` — mean vector, covariance matrix, and state discount.
///
/// Owns the linear regression-coefficient belief for the price block. The
/// covariance is symmetrized at construction and after every update, so
/// `covariance == covarianceᵀ` holds exactly between steps.
#[derive(Debug, Clone, PartialEq)]
pub struct StateSpace {
    mean: Array1<f64>,
    covariance: Array2<f64>,
    lambda_theta: f64,
}

impl StateSpace {
    /// Construct a validated state block from an initial mean, covariance,
    /// and state discount factor.
    ///
    /// The supplied covariance is symmetrized on entry so the symmetry
    /// invariant holds from the first step.
    ///
    /// # Errors
    /// - `RVError::CovarianceShapeMismatch` when `c0` is not
    ///   `m0.len() × m0.len()`.
    /// - `RVError::NonFiniteInitialState` when any mean/covariance entry is
    ///   NaN/±∞.
    /// - `RVError::InvalidDiscount` when `lambda_theta` is outside (0, 1].
    pub fn new(m0: Array1<f64>, c0: Array2<f64>, lambda_theta: f64) -> RVResult<Self> {
        let k = m0.len();
        let (rows, cols) = c0.dim();
        if rows != k || cols != k {
            return Err(RVError::CovarianceShapeMismatch { expected: k, rows, cols });
        }
        if let Some(&value) = m0.iter().find(|v| !v.is_finite()) {
            return Err(RVError::NonFiniteInitialState { value });
        }
        if let Some(&value) = c0.iter().find(|v| !v.is_finite()) {
            return Err(RVError::NonFiniteInitialState { value });
        }
        if !lambda_theta.is_finite() || lambda_theta <= 0.0 || lambda_theta > 1.0 {
            return Err(RVError::InvalidDiscount { name: "lambda_theta", value: lambda_theta });
        }
        let covariance = (&c0 + &c0.t()) / 2.0;
        Ok(StateSpace { mean: m0, covariance, lambda_theta })
    }

    /// Current state mean.
    pub fn mean(&self) -> ArrayView1<'_, f64> {
        self.mean.view()
    }

    /// Current state covariance (exactly symmetric).
    pub fn covariance(&self) -> ArrayView2<'_, f64> {
        self.covariance.view()
    }

    /// State dimension `k`.
    pub fn dim(&self) -> usize {
        self.mean.len()
    }

    /// Advance the state by one observation and return the one-step outcome.
    ///
    /// `snapshot` must be the *pre-update* view of the variance block for
    /// the same time index `t` (used only for error reporting); the caller
    /// updates its variance block after this call, never before.
    ///
    /// # Errors
    /// - `RVError::StateDimensionMismatch` when `design.len() != dim()`.
    /// - `RVError::NonPositiveForecastVariance` when `Q` is ≤ 0 or
    ///   non-finite.
    /// - `RVError::InvalidStudentsTParam` if the predictive density cannot
    ///   be formed (non-positive dof).
    /// - `RVError::NonFiniteCovariance` when the posterior covariance has
    ///   non-finite entries after symmetrization.
    pub fn step(
        &mut self, t: usize, y_t: f64, design: ArrayView1<'_, f64>, snapshot: &PrecisionSnapshot,
    ) -> RVResult<StepOutcome> {
        if design.len() != self.mean.len() {
            return Err(RVError::StateDimensionMismatch {
                expected: self.mean.len(),
                actual: design.len(),
            });
        }

        let c_prior = &self.covariance / self.lambda_theta;
        let yhat = design.dot(&self.mean);
        let c_design = c_prior.dot(&design);
        let q = design.dot(&c_design) + snapshot.sigma2;
        if !q.is_finite() || q <= 0.0 {
            return Err(RVError::NonPositiveForecastVariance { t, value: q });
        }

        let predictive = StudentsT::new(yhat, q.sqrt(), snapshot.dof)?;
        let log_predictive = predictive.ln_pdf(y_t);

        let gain = &c_design / q;
        let forecast_error = y_t - yhat;
        self.mean = &self.mean + &(&gain * forecast_error);

        let gain_col = gain.view().insert_axis(Axis(1));
        let gain_row = gain.view().insert_axis(Axis(0));
        let c_post = &c_prior - &(gain_col.dot(&gain_row) * q);
        self.covariance = (&c_post + &c_post.t()) / 2.0;
        if self.covariance.iter().any(|v| !v.is_finite()) {
            return Err(RVError::NonFiniteCovariance { t });
        }

        Ok(StepOutcome { log_predictive, forecast_error, forecast_variance: q })
    }
}
