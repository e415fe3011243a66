//! Grid-search calibration for the RV-DLM and the discount-DLM baseline.
//!
//! Purpose
//! -------
//! Exhaustively evaluate the Cartesian product of hyperparameter grids
//! against the negative one-step-ahead log-likelihood and return the argmin
//! configuration. No early stopping and no gradient information: each trial
//! constructs an independent model instance, scores one full pass, and the
//! sweep keeps the strict minimum.
//!
//! Key behaviors
//! -------------
//! - A failing trial (invalid candidate combination, degenerate pass, or a
//!   non-finite loss) is treated as having infinite loss: it is excluded
//!   from the argmin rather than aborting the sweep.
//! - Iteration order is fixed and improvement requires a strict `<`, so two
//!   runs over identical grids and data return bit-identical results.
//! - Trials share no mutable state; the sweep is kept sequential to preserve
//!   that bit-for-bit determinism.
//!
//! Conventions
//! -----------
//! - Grids are plain `Vec<f64>` axes; defaults follow the usual daily-data
//!   sweeps, with the α axis starting strictly inside the valid `α > 1`
//!   region.
//! - Non-swept configuration (initial state, precision seeds, leverage
//!   toggle) is taken from a caller-supplied base options value.
use crate::volatility::{
    core::{data::RVData, options::{BaselineOptions, RVOptions}},
    errors::{RVError, RVResult},
    models::{BaselineDLM, LogPredictiveModel, RVDLM},
};
use ndarray::Array1;

fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    Array1::linspace(start, end, n).to_vec()
}

/// Candidate axes for the coupled RV-DLM sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct RVGrid {
    /// Precision discount candidates (0, 1].
    pub beta: Vec<f64>,
    /// Observation shape candidates (> 1).
    pub alpha: Vec<f64>,
    /// State discount candidates (0, 1].
    pub lambda_theta: Vec<f64>,
}

impl Default for RVGrid {
    /// Five points per axis: β in [0.70, 0.80], α in [1.5, 5.0],
    /// λ_θ in [0.95, 0.99].
    fn default() -> Self {
        RVGrid {
            beta: linspace(0.70, 0.80, 5),
            alpha: linspace(1.5, 5.0, 5),
            lambda_theta: linspace(0.95, 0.99, 5),
        }
    }
}

/// Candidate axes for the baseline sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct BaselineGrid {
    /// State discount candidates (0, 1].
    pub lambda_theta: Vec<f64>,
    /// Variance discount candidates (0, 1].
    pub lambda_sigma: Vec<f64>,
}

impl Default for BaselineGrid {
    /// Five points per axis: λ_θ in [0.95, 0.99], λ_σ in [0.85, 0.95].
    fn default() -> Self {
        BaselineGrid {
            lambda_theta: linspace(0.95, 0.99, 5),
            lambda_sigma: linspace(0.85, 0.95, 5),
        }
    }
}

/// Argmin of an RV-DLM sweep: the winning hyperparameters and their loss.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RVTuning {
    /// Winning precision discount β.
    pub beta: f64,
    /// Winning observation shape α.
    pub alpha: f64,
    /// Winning state discount λ_θ.
    pub lambda_theta: f64,
    /// Negative log-likelihood at the argmin.
    pub neg_loglik: f64,
}

/// Argmin of a baseline sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaselineTuning {
    /// Winning state discount λ_θ.
    pub lambda_theta: f64,
    /// Winning variance discount λ_σ.
    pub lambda_sigma: f64,
    /// Negative log-likelihood at the argmin.
    pub neg_loglik: f64,
}

/// Exhaustive sweep over `(beta, alpha, lambda_theta)` for the coupled
/// RV-DLM.
///
/// `base` supplies the non-swept configuration (initial state, precision
/// seeds, leverage toggle); its own discount/shape values are ignored in
/// favor of the grid candidates.
///
/// # Errors
/// - `RVError::EmptyGrid` when any axis is empty (checked before the sweep).
/// - `RVError::AllTrialsFailed` when no candidate produced a finite loss.
pub fn tune_rv_dlm(data: &RVData, base: &RVOptions, grid: &RVGrid) -> RVResult<RVTuning> {
    if grid.beta.is_empty() {
        return Err(RVError::EmptyGrid { name: "beta" });
    }
    if grid.alpha.is_empty() {
        return Err(RVError::EmptyGrid { name: "alpha" });
    }
    if grid.lambda_theta.is_empty() {
        return Err(RVError::EmptyGrid { name: "lambda_theta" });
    }

    let mut best: Option<RVTuning> = None;
    for &beta in &grid.beta {
        for &alpha in &grid.alpha {
            for &lambda_theta in &grid.lambda_theta {
                let options = match RVOptions::new(
                    beta,
                    alpha,
                    lambda_theta,
                    base.m0.clone(),
                    base.c0.clone(),
                    base.n0,
                    base.s0,
                    base.use_leverage,
                ) {
                    Ok(options) => options,
                    // Invalid candidate combination: infinite loss.
                    Err(_) => continue,
                };
                let neg_loglik = match RVDLM::new(options).neg_loglik(data) {
                    Ok(value) if value.is_finite() => value,
                    // Degenerate pass or non-finite loss: infinite loss.
                    _ => continue,
                };
                if best.map_or(true, |b| neg_loglik < b.neg_loglik) {
                    best = Some(RVTuning { beta, alpha, lambda_theta, neg_loglik });
                }
            }
        }
    }
    best.ok_or(RVError::AllTrialsFailed)
}

/// Exhaustive sweep over `(lambda_theta, lambda_sigma)` for the baseline
/// discount DLM.
///
/// # Errors
/// - `RVError::EmptyGrid` when any axis is empty.
/// - `RVError::AllTrialsFailed` when no candidate produced a finite loss.
pub fn tune_baseline(
    data: &RVData, base: &BaselineOptions, grid: &BaselineGrid,
) -> RVResult<BaselineTuning> {
    if grid.lambda_theta.is_empty() {
        return Err(RVError::EmptyGrid { name: "lambda_theta" });
    }
    if grid.lambda_sigma.is_empty() {
        return Err(RVError::EmptyGrid { name: "lambda_sigma" });
    }

    let mut best: Option<BaselineTuning> = None;
    for &lambda_theta in &grid.lambda_theta {
        for &lambda_sigma in &grid.lambda_sigma {
            let options = match BaselineOptions::new(
                lambda_theta,
                lambda_sigma,
                base.m0.clone(),
                base.c0.clone(),
                base.nu0,
                base.s0,
            ) {
                Ok(options) => options,
                Err(_) => continue,
            };
            let neg_loglik = match BaselineDLM::new(options).neg_loglik(data) {
                Ok(value) if value.is_finite() => value,
                _ => continue,
            };
            if best.map_or(true, |b| neg_loglik < b.neg_loglik) {
                best = Some(BaselineTuning { lambda_theta, lambda_sigma, neg_loglik });
            }
        }
    }
    best.ok_or(RVError::AllTrialsFailed)
}
