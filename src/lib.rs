//! rv_dlm — sequential Bayesian filtering of price and realized volatility.
//!
//! Purpose
//! -------
//! Provide online (one-step-ahead) updating of beliefs about price trend and
//! observation volatility via a dynamic linear model coupled to a
//! stochastic-precision block. All posterior recursions are closed-form
//! conjugate updates; no simulation is involved.
//!
//! Key behaviors
//! -------------
//! - Track the latent observation precision through a beta-discount gamma
//!   recursion with a scaled-F predictive law ([`volatility::core::precision`]).
//! - Maintain a discount-weighted linear-Gaussian state for price dynamics
//!   whose observation variance is supplied by the precision block
//!   ([`volatility::core::state`]).
//! - Score ordered (price, realized-precision) sequences by one-step-ahead
//!   Student-t log predictive density, exposed through the
//!   [`volatility::models::LogPredictiveModel`] contract for both the coupled
//!   RV-DLM and a classical discount-DLM baseline.
//! - Calibrate discount/shape hyperparameters by exhaustive, deterministic
//!   grid search ([`tuning`]).
//!
//! Invariants & assumptions
//! ------------------------
//! - All heavy numerics live in `f64`; inputs are validated at construction
//!   ([`volatility::core::data::RVData`], the option structs) so recursions
//!   can assume clean data.
//! - The filtering stack performs no I/O and no logging; callers orchestrate
//!   data loading and reporting. Error conditions surface as
//!   [`volatility::errors::RVResult`] values, never as panics.
//! - Each scoring pass over a sequence is the atomic unit of work: a pass
//!   constructs its own filter state, so model instances are reusable and
//!   independent trials share nothing mutable.
//!
//! Downstream usage
//! ----------------
//! - Most consumers should import from [`volatility::prelude`] and drive a
//!   model through [`volatility::models::LogPredictiveModel`].
//! - Calibration loops should call [`tuning::tune_rv_dlm`] /
//!   [`tuning::tune_baseline`] rather than re-implementing the sweep.
//!
//! Testing notes
//! -------------
//! - Conjugate-algebra identities, symmetry safeguards, and validation paths
//!   are covered by unit tests beside each module; the full pipeline (data →
//!   model → likelihood → tuning) is exercised by the integration tests in
//!   `tests/`.

pub mod tuning;
pub mod volatility;
