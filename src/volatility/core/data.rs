//! Paired observation containers for RV-DLM models.
//!
//! Purpose
//! -------
//! Provide a small, validated container for the paired input series every
//! model pass consumes: observed prices (or returns) and realized precisions
//! (reciprocals of a realized-variance estimate). This module centralizes
//! input validation so the recursions downstream can assume clean data.
//!
//! Key behaviors
//! -------------
//! - [`RVData`] enforces equal lengths, a minimum length of 2 (one step of
//!   history is needed before the first one-step density), finite prices, and
//!   strictly positive finite precisions.
//! - Validation happens once, before any recursion starts; the filters never
//!   re-check basic data properties mid-pass.
//!
//! Invariants & assumptions
//! ------------------------
//! - `prices.len() == precisions.len() >= 2`.
//! - Every price is finite; every precision is finite and strictly positive.
//! - Any cleaning, alignment, or resampling is the data supplier's job; this
//!   type validates, it does not transform.
//!
//! Conventions
//! -----------
//! - Indexing is 0-based; index `t` pairs `prices[t]` with `precisions[t]`.
//! - The precision at index `t` is `z_t = 1 / RV_t` for the same interval as
//!   the price observation at `t`.
//!
//! Testing notes
//! -------------
//! - Unit tests cover the happy path and each rejection: length mismatch,
//!   too-short series, non-finite prices, and non-positive or non-finite
//!   precisions.
use crate::volatility::errors::{RVError, RVResult};
use ndarray::Array1;

/// `RVData` — validated paired series of prices and realized precisions.
///
/// Purpose
/// -------
/// Represent one ordered sequence of model inputs with all shape and
/// finiteness invariants established at construction, so that a scoring pass
/// can fail fast before mutating any filter state.
///
/// Fields
/// ------
/// - `prices`: `Array1<f64>`
///   Observed price/return values; must be finite.
/// - `precisions`: `Array1<f64>`
///   Realized precisions `z_t = 1 / RV_t`; must be finite and strictly
///   positive.
///
/// Invariants
/// ----------
/// - `prices.len() == precisions.len()` and both are ≥ 2.
/// - All entries satisfy the finiteness/positivity rules above.
///
/// Notes
/// -----
/// - Validation is O(n) with a single scan per series, stopping at the first
///   offending element.
#[derive(Debug, Clone, PartialEq)]
pub struct RVData {
    /// Observed prices or returns (finite).
    pub prices: Array1<f64>,
    /// Realized precisions, `1 / RV_t` (finite and > 0).
    pub precisions: Array1<f64>,
}

impl RVData {
    /// Construct a validated [`RVData`] instance from raw paired series.
    ///
    /// Parameters
    /// ----------
    /// - `prices`: observed price/return series.
    /// - `precisions`: realized-precision series aligned with `prices`.
    ///
    /// Returns
    /// -------
    /// `RVResult<RVData>`
    ///   - `Ok(RVData)` if all invariants hold.
    ///   - `Err(RVError)` otherwise.
    ///
    /// Errors
    /// ------
    /// - `RVError::LengthMismatch` when the series lengths differ.
    /// - `RVError::SeriesTooShort` when the common length is < 2.
    /// - `RVError::NonFinitePrice` for a NaN/±∞ price; the index points to
    ///   the first offending element.
    /// - `RVError::NonFinitePrecision` / `RVError::NonPositivePrecision` for
    ///   invalid precision entries.
    pub fn new(prices: Array1<f64>, precisions: Array1<f64>) -> RVResult<Self> {
        if prices.len() != precisions.len() {
            return Err(RVError::LengthMismatch {
                prices: prices.len(),
                precisions: precisions.len(),
            });
        }
        if prices.len() < 2 {
            return Err(RVError::SeriesTooShort { len: prices.len() });
        }

        for (index, &value) in prices.iter().enumerate() {
            if !value.is_finite() {
                return Err(RVError::NonFinitePrice { index, value });
            }
        }
        for (index, &value) in precisions.iter().enumerate() {
            if !value.is_finite() {
                return Err(RVError::NonFinitePrecision { index, value });
            }
            if value <= 0.0 {
                return Err(RVError::NonPositivePrecision { index, value });
            }
        }

        Ok(RVData { prices, precisions })
    }

    /// Number of paired observations.
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    /// Always `false` for a constructed instance (`len() >= 2`), provided for
    /// API completeness.
    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}
