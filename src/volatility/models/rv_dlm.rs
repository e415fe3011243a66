//! Coupled RV-DLM: price block + realized-precision variance block.
//!
//! The price block is `y_t = F_tᵀ θ_t + ε_t` with `ε_t ~ N(0, φ_t⁻¹)`, where
//! `F_t = [1, y_{t−1}]` (optionally augmented with the leverage covariate
//! `x_t = z_t^{−1/2}`) and the precision `φ_t` evolves through the
//! [`PrecisionFilter`]. At each step the state block forms its one-step
//! Student-t forecast from the *pre-update* precision snapshot, and only
//! then is the precision posterior advanced with `z_t` — the two recursions
//! move in lockstep with consistent time indices.
//!
//! A scoring pass constructs a fresh filter pair from the configured initial
//! state, so passes are independent, repeatable, and safe to run from
//! many calibration trials at once.
use crate::volatility::{
    core::{
        data::RVData,
        options::RVOptions,
        precision::PrecisionFilter,
        state::StateSpace,
    },
    errors::RVResult,
    models::LogPredictiveModel,
};
use ndarray::Array1;

/// Coupled price / realized-volatility dynamic linear model.
///
/// Owns only its validated configuration; per-pass filter state is built in
/// [`LogPredictiveModel::log_predictive`]. Construct via validated
/// [`RVOptions`] (or [`RVOptions::default_for`]).
#[derive(Debug, Clone, PartialEq)]
pub struct RVDLM {
    /// Validated model configuration.
    pub options: RVOptions,
}

impl RVDLM {
    /// Wrap validated options into a model instance.
    pub fn new(options: RVOptions) -> RVDLM {
        RVDLM { options }
    }

    /// Build the design vector `F_t` for one step.
    ///
    /// `[1, y_prev]` in the baseline variant; `[1, y_prev, z_t^{−1/2}]` with
    /// leverage. `z_t > 0` is guaranteed by [`RVData`] validation.
    fn design_vector(&self, y_prev: f64, z_t: f64) -> Array1<f64> {
        if self.options.use_leverage {
            ndarray::array![1.0, y_prev, 1.0 / z_t.sqrt()]
        } else {
            ndarray::array![1.0, y_prev]
        }
    }
}

impl LogPredictiveModel for RVDLM {
    /// Run one forward pass over `data`, coupling the two blocks per step:
    /// read the precision snapshot, advance the state, then advance the
    /// precision. Index 0 of the returned array is 0.0 by convention.
    fn log_predictive(&self, data: &RVData) -> RVResult<Array1<f64>> {
        let y = &data.prices;
        let z = &data.precisions;

        let mut precision = PrecisionFilter::new(
            self.options.n0,
            self.options.s0,
            self.options.beta,
            self.options.alpha,
        )?;
        let mut state = StateSpace::new(
            self.options.m0.clone(),
            self.options.c0.clone(),
            self.options.lambda_theta,
        )?;

        let mut log_predictive = Array1::zeros(y.len());
        for t in 1..y.len() {
            let design = self.design_vector(y[t - 1], z[t]);
            // Strict ordering: forecast with the pre-update precision,
            // then absorb z_t.
            let snapshot = precision.snapshot();
            let outcome = state.step(t, y[t], design.view(), &snapshot)?;
            log_predictive[t] = outcome.log_predictive;
            precision.update(z[t])?;
        }
        Ok(log_predictive)
    }
}
