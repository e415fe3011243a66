//! Model configuration — validated, default-valued option structs.
//!
//! Purpose
//! -------
//! Collect every construction-time knob of the two models in one place, with
//! all validation centralized in the constructors. Absent configuration is
//! expressed through explicit default constructors rather than nullable
//! parameters, so a model can never be built from a partially specified or
//! unchecked state.
//!
//! Key behaviors
//! -------------
//! - [`RVOptions`] configures the coupled RV-DLM: precision discount `beta`,
//!   observation shape `alpha`, state discount `lambda_theta`, initial state
//!   `(m0, c0)`, initial precision hyperparameters `(n0, s0)`, and the
//!   leverage toggle that switches the design vector between `[1, y_prev]`
//!   and `[1, y_prev, z^{-1/2}]`.
//! - [`BaselineOptions`] configures the classical discount DLM: the two
//!   discounts `(lambda_theta, lambda_sigma)`, initial state `(m0, c0)`, and
//!   initial inverse-gamma variance hyperparameters `(nu0, s0)`.
//! - Both constructors validate ranges, dimensions, and finiteness up front;
//!   downstream filters assume valid options.
//!
//! Conventions
//! -----------
//! - The state dimension is implied by `use_leverage`: 2 without the
//!   leverage covariate, 3 with it. `m0` and `c0` must match it.
//! - Defaults mirror a conservative daily-returns setup: `m0 = [0, 0.9]`
//!   (plus a zero leverage coefficient when enabled), `c0 = 0.1·I`,
//!   `n0 = nu0 = 2`, `s0 = 0.001`.
use crate::volatility::errors::{RVError, RVResult};
use ndarray::{Array1, Array2};

fn validate_discount(name: &'static str, value: f64) -> RVResult<()> {
    if !value.is_finite() || value <= 0.0 || value > 1.0 {
        return Err(RVError::InvalidDiscount { name, value });
    }
    Ok(())
}

fn validate_initial_state(m0: &Array1<f64>, c0: &Array2<f64>, expected: usize) -> RVResult<()> {
    if m0.len() != expected {
        return Err(RVError::StateDimensionMismatch { expected, actual: m0.len() });
    }
    let (rows, cols) = c0.dim();
    if rows != expected || cols != expected {
        return Err(RVError::CovarianceShapeMismatch { expected, rows, cols });
    }
    if let Some(&value) = m0.iter().chain(c0.iter()).find(|v| !v.is_finite()) {
        return Err(RVError::NonFiniteInitialState { value });
    }
    Ok(())
}

/// `RVOptions` — construction-time configuration of the coupled RV-DLM.
///
/// Fields
/// ------
/// - `beta`: precision discount factor, 0 < beta ≤ 1.
/// - `alpha`: observation shape parameter, > 1.
/// - `lambda_theta`: state discount factor, 0 < lambda_theta ≤ 1.
/// - `m0` / `c0`: initial state mean and covariance, sized to the design
///   dimension (2, or 3 with leverage).
/// - `n0` / `s0`: initial precision hyperparameters, both > 0.
/// - `use_leverage`: whether the design vector includes the volatility
///   covariate `z_t^{-1/2}`.
///
/// Invariants
/// ----------
/// - All numeric fields are finite and inside their documented ranges;
///   `m0`/`c0` match the design dimension implied by `use_leverage`.
#[derive(Debug, Clone, PartialEq)]
pub struct RVOptions {
    /// Precision discount factor β.
    pub beta: f64,
    /// Observation shape parameter α.
    pub alpha: f64,
    /// State discount factor λ_θ.
    pub lambda_theta: f64,
    /// Initial state mean.
    pub m0: Array1<f64>,
    /// Initial state covariance.
    pub c0: Array2<f64>,
    /// Initial precision shape n₀.
    pub n0: f64,
    /// Initial precision scale s₀.
    pub s0: f64,
    /// Whether to augment the design vector with the leverage covariate.
    pub use_leverage: bool,
}

impl RVOptions {
    /// Design-vector dimension implied by the leverage toggle.
    pub fn design_dim(use_leverage: bool) -> usize {
        if use_leverage { 3 } else { 2 }
    }

    /// Construct validated options for the coupled RV-DLM.
    ///
    /// # Errors
    /// - `RVError::InvalidDiscount` for `beta` / `lambda_theta` outside
    ///   (0, 1].
    /// - `RVError::InvalidObservationShape` when `alpha` is not finite
    ///   and > 1.
    /// - `RVError::InvalidInitialDof` / `RVError::InvalidInitialScale` when
    ///   `n0` / `s0` are not finite and > 0.
    /// - `RVError::StateDimensionMismatch` /
    ///   `RVError::CovarianceShapeMismatch` /
    ///   `RVError::NonFiniteInitialState` for an initial state that does not
    ///   fit the design dimension.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        beta: f64, alpha: f64, lambda_theta: f64, m0: Array1<f64>, c0: Array2<f64>, n0: f64,
        s0: f64, use_leverage: bool,
    ) -> RVResult<Self> {
        validate_discount("beta", beta)?;
        if !alpha.is_finite() || alpha <= 1.0 {
            return Err(RVError::InvalidObservationShape { value: alpha });
        }
        validate_discount("lambda_theta", lambda_theta)?;
        if !n0.is_finite() || n0 <= 0.0 {
            return Err(RVError::InvalidInitialDof { value: n0 });
        }
        if !s0.is_finite() || s0 <= 0.0 {
            return Err(RVError::InvalidInitialScale { value: s0 });
        }
        validate_initial_state(&m0, &c0, Self::design_dim(use_leverage))?;
        Ok(RVOptions { beta, alpha, lambda_theta, m0, c0, n0, s0, use_leverage })
    }

    /// Conservative default configuration for the requested design variant.
    ///
    /// Uses `beta = 0.75`, `alpha = 2`, `lambda_theta = 0.97`,
    /// `m0 = [0, 0.9]` (with a zero leverage coefficient appended when
    /// enabled), `c0 = 0.1·I`, `n0 = 2`, `s0 = 0.001`.
    pub fn default_for(use_leverage: bool) -> RVOptions {
        let k = Self::design_dim(use_leverage);
        let mut m0 = Array1::zeros(k);
        m0[1] = 0.9;
        let c0 = Array2::eye(k) * 0.1;
        RVOptions::new(0.75, 2.0, 0.97, m0, c0, 2.0, 0.001, use_leverage)
            .expect("default RVOptions are valid by construction")
    }
}

/// `BaselineOptions` — configuration of the classical discount DLM.
///
/// The baseline learns its observation variance through an inverse-gamma
/// discount recursion instead of a coupled precision filter: `nu0`/`s0` seed
/// that recursion and `lambda_sigma` discounts it.
#[derive(Debug, Clone, PartialEq)]
pub struct BaselineOptions {
    /// State discount factor λ_θ.
    pub lambda_theta: f64,
    /// Variance discount factor λ_σ.
    pub lambda_sigma: f64,
    /// Initial state mean (length 2: intercept + AR(1)).
    pub m0: Array1<f64>,
    /// Initial state covariance (2×2).
    pub c0: Array2<f64>,
    /// Initial variance degrees of freedom ν₀.
    pub nu0: f64,
    /// Initial variance scale S₀.
    pub s0: f64,
}

impl BaselineOptions {
    /// Construct validated baseline options.
    ///
    /// # Errors
    /// - `RVError::InvalidDiscount` for either discount outside (0, 1].
    /// - `RVError::InvalidInitialDof` / `RVError::InvalidInitialScale` when
    ///   `nu0` / `s0` are not finite and > 0.
    /// - Initial-state errors as in [`RVOptions::new`], with the dimension
    ///   fixed at 2.
    pub fn new(
        lambda_theta: f64, lambda_sigma: f64, m0: Array1<f64>, c0: Array2<f64>, nu0: f64, s0: f64,
    ) -> RVResult<Self> {
        validate_discount("lambda_theta", lambda_theta)?;
        validate_discount("lambda_sigma", lambda_sigma)?;
        if !nu0.is_finite() || nu0 <= 0.0 {
            return Err(RVError::InvalidInitialDof { value: nu0 });
        }
        if !s0.is_finite() || s0 <= 0.0 {
            return Err(RVError::InvalidInitialScale { value: s0 });
        }
        validate_initial_state(&m0, &c0, 2)?;
        Ok(BaselineOptions { lambda_theta, lambda_sigma, m0, c0, nu0, s0 })
    }
}

impl Default for BaselineOptions {
    /// The classical daily-returns baseline: `lambda_theta = 0.97`,
    /// `lambda_sigma = 0.9`, `m0 = [0, 0.9]`, `c0 = 0.1·I`, `nu0 = 2`,
    /// `S0 = 0.001`.
    fn default() -> Self {
        BaselineOptions::new(
            0.97,
            0.9,
            ndarray::array![0.0, 0.9],
            Array2::eye(2) * 0.1,
            2.0,
            0.001,
        )
        .expect("default BaselineOptions are valid by construction")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover option validation for both models and the shape of
    // the default configurations. Filtering semantics are covered by the
    // model modules.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify each RVOptions precondition produces its matching error.
    //
    // Given
    // -----
    // - One out-of-range value per constructor argument.
    //
    // Expect
    // ------
    // - The matching error variant for each invalid input.
    fn rvoptions_new_validates_every_field() {
        let m0 = array![0.0, 0.9];
        let c0 = Array2::eye(2) * 0.1;

        let err = RVOptions::new(1.5, 2.0, 0.97, m0.clone(), c0.clone(), 2.0, 0.001, false);
        assert_eq!(err.unwrap_err(), RVError::InvalidDiscount { name: "beta", value: 1.5 });

        let err = RVOptions::new(0.75, 1.0, 0.97, m0.clone(), c0.clone(), 2.0, 0.001, false);
        assert_eq!(err.unwrap_err(), RVError::InvalidObservationShape { value: 1.0 });

        let err = RVOptions::new(0.75, 2.0, -0.1, m0.clone(), c0.clone(), 2.0, 0.001, false);
        assert_eq!(
            err.unwrap_err(),
            RVError::InvalidDiscount { name: "lambda_theta", value: -0.1 }
        );

        let err = RVOptions::new(0.75, 2.0, 0.97, m0.clone(), c0.clone(), 0.0, 0.001, false);
        assert_eq!(err.unwrap_err(), RVError::InvalidInitialDof { value: 0.0 });

        let err = RVOptions::new(0.75, 2.0, 0.97, m0.clone(), c0.clone(), 2.0, 0.0, false);
        assert_eq!(err.unwrap_err(), RVError::InvalidInitialScale { value: 0.0 });

        // Dimension 2 state against the 3-dimensional leverage design.
        let err = RVOptions::new(0.75, 2.0, 0.97, m0, c0, 2.0, 0.001, true);
        assert_eq!(
            err.unwrap_err(),
            RVError::StateDimensionMismatch { expected: 3, actual: 2 }
        );
    }

    #[test]
    // Purpose
    // -------
    // Verify the default configurations are valid and sized to the design
    // variant.
    //
    // Given
    // -----
    // - `default_for(false)` and `default_for(true)`.
    //
    // Expect
    // ------
    // - State dimension 2 and 3 respectively, with the documented default
    //   values in place.
    fn rvoptions_defaults_match_design_dim() {
        let plain = RVOptions::default_for(false);
        assert_eq!(plain.m0.len(), 2);
        assert_eq!(plain.c0.dim(), (2, 2));
        assert_eq!(plain.m0[1], 0.9);
        assert!(!plain.use_leverage);

        let leveraged = RVOptions::default_for(true);
        assert_eq!(leveraged.m0.len(), 3);
        assert_eq!(leveraged.c0.dim(), (3, 3));
        assert_eq!(leveraged.m0[2], 0.0);
        assert!(leveraged.use_leverage);
    }

    #[test]
    // Purpose
    // -------
    // Verify BaselineOptions validation and defaults.
    //
    // Given
    // -----
    // - An out-of-range lambda_sigma, a 3-element m0, and the Default impl.
    //
    // Expect
    // ------
    // - Matching errors for the invalid inputs; documented values in the
    //   default.
    fn baseline_options_validate_and_default() {
        let err = BaselineOptions::new(0.97, 0.0, array![0.0, 0.9], Array2::eye(2), 2.0, 0.001);
        assert_eq!(
            err.unwrap_err(),
            RVError::InvalidDiscount { name: "lambda_sigma", value: 0.0 }
        );

        let err =
            BaselineOptions::new(0.97, 0.9, array![0.0, 0.9, 0.0], Array2::eye(2), 2.0, 0.001);
        assert_eq!(
            err.unwrap_err(),
            RVError::StateDimensionMismatch { expected: 2, actual: 3 }
        );

        let defaults = BaselineOptions::default();
        assert_eq!(defaults.lambda_theta, 0.97);
        assert_eq!(defaults.lambda_sigma, 0.9);
        assert_eq!(defaults.m0, array![0.0, 0.9]);
        assert_eq!(defaults.nu0, 2.0);
        assert_eq!(defaults.s0, 0.001);
    }
}
