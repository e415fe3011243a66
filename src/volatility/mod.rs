//! volatility — the RV-DLM stack: core numerics, models, and errors.
//!
//! Purpose
//! -------
//! Bundle the sequential-filtering layer under a single namespace: validated
//! data containers, the dynamic gamma/F precision block, the shared
//! linear-Gaussian state block, the two scoring models, and the common error
//! surface. This is the module most consumers (including the [`crate::tuning`]
//! calibration layer) should depend on.
//!
//! Key behaviors
//! -------------
//! - Collect the numerical building blocks in [`core`]: `RVData`,
//!   `PrecisionFilter`, `StateSpace`, and the option structs.
//! - Expose the scoring surface in [`models`]: the [`models::LogPredictiveModel`]
//!   contract with the coupled [`models::RVDLM`] and the classical
//!   [`models::BaselineDLM`] behind it.
//! - Centralize errors in [`errors`] (`RVError`, `RVResult`) so callers see a
//!   uniform error surface across the stack.
//! - Re-export the everyday types here and via [`prelude`] for ergonomic
//!   imports downstream.
//!
//! Invariants & assumptions
//! ------------------------
//! - Input series are carried in validated [`core::data::RVData`] instances:
//!   equal lengths ≥ 2, finite prices, strictly positive finite precisions.
//! - Hyperparameters are validated by the option constructors; recursions
//!   assume clean configuration and report only genuine runtime degeneracies
//!   (non-positive forecast variance, non-finite covariance).
//! - Within a pass the two blocks advance in strict read-then-update order:
//!   the state block forecasts with the pre-update precision snapshot, then
//!   the precision block absorbs the observation.
//!
//! Conventions
//! -----------
//! - Indexing is 0-based; log-predictive sequences define index 0 as 0.0.
//! - The stack performs no I/O and no logging; errors surface as
//!   [`errors::RVResult`], and panics indicate programming errors only.

pub mod core;
pub mod errors;
pub mod models;

// ---- Re-exports (primary public surface) ----------------------------------
//
// The “everyday” types most users need. Lower-level pieces (the individual
// filter blocks, step outcomes) remain importable from their submodules.

pub use self::core::{
    BaselineOptions, PrecisionFilter, PrecisionMoments, PrecisionPredictive, PrecisionPrior,
    PrecisionSnapshot, RVData, RVOptions, StateSpace, StepOutcome,
};

pub use self::errors::{RVError, RVResult};

pub use self::models::{BaselineDLM, LogPredictiveModel, RVDLM};

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream code can write
//
//     use rv_dlm::volatility::prelude::*;
//
// to import the main modeling surface in a single line.

pub mod prelude {
    pub use super::{
        BaselineDLM, BaselineOptions, LogPredictiveModel, PrecisionFilter, PrecisionSnapshot,
        RVDLM, RVData, RVError, RVOptions, RVResult, StateSpace,
    };
}
