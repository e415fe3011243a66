//! Errors for RV-DLM filtering (input validation, hyperparameter checks,
//! recursion degeneracies, and calibration failures).
//!
//! This module defines the crate-wide error type, [`RVError`], and the
//! [`RVResult`] alias used across the volatility stack. The enum follows a
//! single taxonomy:
//!
//! - **Invalid observations**: non-finite prices, non-positive or non-finite
//!   realized precisions — rejected at data construction or at the point of
//!   use in the precision update.
//! - **Input shape**: mismatched or too-short series, state/covariance
//!   dimension mismatches — rejected before any recursion starts.
//! - **Numerical degeneracy**: non-positive forecast variance or non-finite
//!   covariance entries mid-pass. These abort the pass; the partially mutated
//!   filter has no recovery path and must not be reused.
//! - **Calibration**: empty grid axes and sweeps in which every trial failed.
//!
//! An undefined predictive moment (F-distribution with `df2 ≤ 2`) is *not* an
//! error: it is reported as a NaN sentinel by the precision block.
//!
//! ## Conventions
//! - Indices are 0-based and refer to positions in the supplied series.
//! - statrs distribution errors are normalized into dedicated wrapper
//!   variants via `From` impls.
use statrs::distribution::{FisherSnedecorError, StudentsTError};

/// Crate-wide result alias for operations that may produce [`RVError`].
pub type RVResult<T> = Result<T, RVError>;

/// Unified error type for RV-DLM modeling.
///
/// Covers input/data validation, hyperparameter checks, recursion
/// invariants, and grid-search failures. Implements `Display` and
/// `std::error::Error`.
#[derive(Debug, Clone, PartialEq)]
pub enum RVError {
    // ---- Input/data validation ----
    /// Price and realized-precision series have different lengths.
    LengthMismatch { prices: usize, precisions: usize },

    /// Series is too short to compute any one-step density (length < 2).
    SeriesTooShort { len: usize },

    /// A price observation is NaN/±inf.
    NonFinitePrice { index: usize, value: f64 },

    /// A realized-precision observation is NaN/±inf.
    NonFinitePrecision { index: usize, value: f64 },

    /// A realized-precision observation is ≤ 0 (precisions must be strictly
    /// positive).
    NonPositivePrecision { index: usize, value: f64 },

    // ---- Hyperparameter validation ----
    /// A discount factor is outside (0, 1] or non-finite.
    InvalidDiscount { name: &'static str, value: f64 },

    /// The observation shape parameter α must be finite and > 1.
    InvalidObservationShape { value: f64 },

    /// An initial degrees-of-freedom hyperparameter must be finite and > 0.
    InvalidInitialDof { value: f64 },

    /// An initial scale hyperparameter must be finite and > 0.
    InvalidInitialScale { value: f64 },

    /// Initial state mean length does not match the design-vector dimension.
    StateDimensionMismatch { expected: usize, actual: usize },

    /// Initial covariance is not a square matrix of the state dimension.
    CovarianceShapeMismatch { expected: usize, rows: usize, cols: usize },

    /// An initial mean or covariance entry is NaN/±inf.
    NonFiniteInitialState { value: f64 },

    // ---- Observation / recursion invariants ----
    /// A realized precision supplied to the precision update is ≤ 0 or
    /// non-finite.
    InvalidPrecisionObservation { value: f64 },

    /// Forecast variance Q_t was non-positive or non-finite.
    NonPositiveForecastVariance { t: usize, value: f64 },

    /// The state covariance developed non-finite entries after
    /// symmetrization at step t.
    NonFiniteCovariance { t: usize },

    // ---- Calibration ----
    /// A grid axis supplied to the grid search is empty.
    EmptyGrid { name: &'static str },

    /// Every candidate in the grid-search sweep failed or produced a
    /// non-finite loss.
    AllTrialsFailed,

    // ---- statrs distribution errors ----
    /// Wrapper for `statrs::distribution::StudentsTError`.
    InvalidStudentsTParam,

    /// Wrapper for `statrs::distribution::FisherSnedecorError`.
    InvalidFParam,
}

impl std::error::Error for RVError {}

impl std::fmt::Display for RVError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Input/data validation ----
            RVError::LengthMismatch { prices, precisions } => {
                write!(
                    f,
                    "Price series (len {prices}) and precision series (len {precisions}) must have equal lengths."
                )
            }
            RVError::SeriesTooShort { len } => {
                write!(f, "Series of length {len} is too short; at least 2 observations are required.")
            }
            RVError::NonFinitePrice { index, value } => {
                write!(f, "Price at index {index} is non-finite: {value}")
            }
            RVError::NonFinitePrecision { index, value } => {
                write!(f, "Realized precision at index {index} is non-finite: {value}")
            }
            RVError::NonPositivePrecision { index, value } => {
                write!(f, "Realized precision at index {index} is non-positive: {value}")
            }
            // ---- Hyperparameter validation ----
            RVError::InvalidDiscount { name, value } => {
                write!(f, "Discount factor {name} must be finite with 0 < {name} <= 1; got: {value}")
            }
            RVError::InvalidObservationShape { value } => {
                write!(f, "Observation shape alpha must be finite and > 1; got: {value}")
            }
            RVError::InvalidInitialDof { value } => {
                write!(f, "Initial degrees of freedom must be finite and > 0; got: {value}")
            }
            RVError::InvalidInitialScale { value } => {
                write!(f, "Initial scale must be finite and > 0; got: {value}")
            }
            RVError::StateDimensionMismatch { expected, actual } => {
                write!(f, "Initial mean length mismatch: expected {expected}, got {actual}")
            }
            RVError::CovarianceShapeMismatch { expected, rows, cols } => {
                write!(
                    f,
                    "Initial covariance must be {expected}x{expected}; got {rows}x{cols}"
                )
            }
            RVError::NonFiniteInitialState { value } => {
                write!(f, "Initial state entries must be finite; got: {value}")
            }
            // ---- Observation / recursion invariants ----
            RVError::InvalidPrecisionObservation { value } => {
                write!(
                    f,
                    "Realized precision observation must be finite and > 0; got: {value}"
                )
            }
            RVError::NonPositiveForecastVariance { t, value } => {
                write!(f, "Forecast variance at step {t} is non-positive or non-finite: {value}")
            }
            RVError::NonFiniteCovariance { t } => {
                write!(f, "State covariance developed non-finite entries at step {t}.")
            }
            // ---- Calibration ----
            RVError::EmptyGrid { name } => {
                write!(f, "Grid axis '{name}' must contain at least one candidate value.")
            }
            RVError::AllTrialsFailed => {
                write!(f, "Every grid-search trial failed or produced a non-finite loss.")
            }
            // ---- statrs distribution errors ----
            RVError::InvalidStudentsTParam => {
                write!(f, "Student-t distribution requires finite location, scale > 0, and dof > 0.")
            }
            RVError::InvalidFParam => {
                write!(f, "F distribution requires both degrees of freedom to be finite and > 0.")
            }
        }
    }
}

impl From<StudentsTError> for RVError {
    fn from(_: StudentsTError) -> RVError {
        RVError::InvalidStudentsTParam
    }
}

impl From<FisherSnedecorError> for RVError {
    fn from(_: FisherSnedecorError) -> RVError {
        RVError::InvalidFParam
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use statrs::distribution::{FisherSnedecor, StudentsT};

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Display formatting of representative variants.
    // - Conversion of statrs distribution errors into RVError wrappers.
    //
    // They intentionally DO NOT cover the conditions under which the variants
    // are produced; those live with the modules that raise them.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that payload-carrying variants render their fields in the
    // Display output, so calibration callers can log failing trials usefully.
    fn display_includes_payload_fields() {
        let err = RVError::LengthMismatch { prices: 10, precisions: 9 };
        let msg = err.to_string();
        assert!(msg.contains("10"));
        assert!(msg.contains("9"));

        let err = RVError::NonPositivePrecision { index: 3, value: -0.5 };
        let msg = err.to_string();
        assert!(msg.contains("index 3"));
        assert!(msg.contains("-0.5"));

        let err = RVError::InvalidDiscount { name: "beta", value: 1.5 };
        assert!(err.to_string().contains("beta"));
    }

    #[test]
    // Purpose
    // -------
    // Verify that an invalid Student-t construction maps onto the dedicated
    // wrapper variant.
    fn studentst_error_maps_to_wrapper_variant() {
        let statrs_err = StudentsT::new(0.0, -1.0, 5.0).unwrap_err();
        assert_eq!(RVError::from(statrs_err), RVError::InvalidStudentsTParam);
    }

    #[test]
    // Purpose
    // -------
    // Verify that an invalid F construction maps onto the dedicated wrapper
    // variant.
    fn fisher_error_maps_to_wrapper_variant() {
        let statrs_err = FisherSnedecor::new(-1.0, 2.0).unwrap_err();
        assert_eq!(RVError::from(statrs_err), RVError::InvalidFParam);
    }
}
