//! Core numerics of the volatility stack: validated data containers, the
//! dynamic gamma/F precision block, the shared linear-Gaussian state block,
//! and the option structs that configure them.
//!
//! These are the building blocks the model layer composes; they carry no
//! sequence-driving logic of their own. Everything here is allocation-light,
//! single-threaded, and validated at construction so the recursions can
//! assume clean inputs.

pub mod data;
pub mod options;
pub mod precision;
pub mod state;

pub use self::data::RVData;
pub use self::options::{BaselineOptions, RVOptions};
pub use self::precision::{
    PrecisionFilter, PrecisionMoments, PrecisionPredictive, PrecisionPrior, PrecisionSnapshot,
};
pub use self::state::{StateSpace, StepOutcome};
