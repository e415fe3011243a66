//! Dynamic gamma / dynamic-F precision block.
//!
//! Implements the beta-discount gamma evolution for the latent observation
//! precision φ_t and the scaled-F predictive law for the next realized
//! precision z_t = 1/RV_t.
//!
//! ## Recursion
//! - Prior:      `n_prior = β n_{t−1}`, `s_prior = s_{t−1}` (the mean of
//!   1/φ is unchanged across the prediction step; only the effective sample
//!   size is discounted).
//! - Predictive: `z_t | D_{t−1} = scale · F(df1, df2)` with
//!   `df1 = 2 n_prior`, `df2 = 2α + 2`, `scale = α / ((1 + α) s_prior)`.
//! - Posterior:  `n_t = β n_{t−1} + 1 + α`,
//!   `s_t = (β n_{t−1} s_{t−1} + α / z_t) / n_t`.
//!
//! ## Ordering invariant
//! The state-space block must read [`PrecisionFilter::snapshot`] (the
//! pre-update `n` and `s`) to form its one-step forecast *before*
//! [`PrecisionFilter::update`] is called for the same time index. Reversing
//! that order changes the one-step-ahead likelihood semantics.
//!
//! ## Moments before the first update
//! The initial prior is the first valid query point: `predictive_params` and
//! `predictive_moments` may be called on a freshly constructed filter and
//! describe `z_1 | D_0`.
use crate::volatility::errors::{RVError, RVResult};
use statrs::distribution::{ContinuousCDF, FisherSnedecor};

/// Prior hyperparameters `(n_prior, s_prior)` at time t given `(n_{t−1}, s_{t−1})`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrecisionPrior {
    /// Discounted degrees-of-freedom-like shape, `β · n`.
    pub n: f64,
    /// Scale, carried over unchanged.
    pub s: f64,
}

/// Parameters of the scaled-F predictive law `z_t | D_{t−1} = scale · F(df1, df2)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrecisionPredictive {
    /// Multiplicative scale applied to the F variate.
    pub scale: f64,
    /// Numerator degrees of freedom, `2 n_prior`.
    pub df1: f64,
    /// Denominator degrees of freedom, `2α + 2`.
    pub df2: f64,
}

/// Summary moments of the predictive distribution of the next realized
/// precision.
///
/// `mean` is `NaN` when `df2 ≤ 2` — the F mean is undefined at low degrees of
/// freedom and this is a legitimate degenerate case, not an error. With the
/// construction-time constraint `α > 1` it cannot occur through
/// [`PrecisionFilter`], but the sentinel convention is preserved for
/// consumers inspecting raw parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrecisionMoments {
    /// Predictive mean, or NaN when undefined (`df2 ≤ 2`).
    pub mean: f64,
    /// Predictive median.
    pub median: f64,
    /// Central 95% credible interval (lower, upper).
    pub ci95: (f64, f64),
}

/// Pre-update view of the precision state consumed by the state-space block.
///
/// Passing this snapshot explicitly (rather than sharing the filter) makes
/// the read-then-update ordering between the two blocks visible and testable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrecisionSnapshot {
    /// Current shape `n`, used as Student-t degrees of freedom.
    pub dof: f64,
    /// Current scale `s`, used as the observation variance.
    pub sigma2: f64,
}

/// `PrecisionFilter` — beta-discount gamma filter for the latent precision.
///
/// Holds the evolving hyperparameters `(n, s)` plus the immutable discount
/// `β` and observation shape `α`. The single mutation point is [`update`],
/// which callers must invoke exactly once per observed time step, in time
/// order.
///
/// # Invariants
/// - `n > 0` and `s > 0` at all times (established at construction and
///   preserved by the update algebra given valid observations).
/// - `0 < β ≤ 1` and `α > 1`, immutable after construction. Validating `α`
///   here, rather than at moment computation, keeps the predictive mean
///   well-defined for every reachable state.
///
/// [`update`]: PrecisionFilter::update
#[derive(Debug, Clone, PartialEq)]
pub struct PrecisionFilter {
    n: f64,
    s: f64,
    beta: f64,
    alpha: f64,
}

impl PrecisionFilter {
    /// Construct a validated precision filter with initial hyperparameters
    /// `φ_0 ~ G(n0, n0·s0)`.
    ///
    /// # Errors
    /// - `RVError::InvalidInitialDof` when `n0` is not finite and > 0.
    /// - `RVError::InvalidInitialScale` when `s0` is not finite and > 0.
    /// - `RVError::InvalidDiscount` when `beta` is outside (0, 1].
    /// - `RVError::InvalidObservationShape` when `alpha` is not finite
    ///   and > 1.
    pub fn new(n0: f64, s0: f64, beta: f64, alpha: f64) -> RVResult<Self> {
        if !n0.is_finite() || n0 <= 0.0 {
            return Err(RVError::InvalidInitialDof { value: n0 });
        }
        if !s0.is_finite() || s0 <= 0.0 {
            return Err(RVError::InvalidInitialScale { value: s0 });
        }
        if !beta.is_finite() || beta <= 0.0 || beta > 1.0 {
            return Err(RVError::InvalidDiscount { name: "beta", value: beta });
        }
        if !alpha.is_finite() || alpha <= 1.0 {
            return Err(RVError::InvalidObservationShape { value: alpha });
        }
        Ok(PrecisionFilter { n: n0, s: s0, beta, alpha })
    }

    /// Current shape hyperparameter `n`.
    pub fn n(&self) -> f64 {
        self.n
    }

    /// Current scale hyperparameter `s`.
    pub fn s(&self) -> f64 {
        self.s
    }

    /// Discount factor `β` (immutable).
    pub fn beta(&self) -> f64 {
        self.beta
    }

    /// Observation shape `α` (immutable).
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Prior `(n_prior, s_prior)` at time t given the current state.
    ///
    /// Pure: no state mutation; calling it repeatedly yields identical
    /// results.
    pub fn prior(&self) -> PrecisionPrior {
        PrecisionPrior { n: self.beta * self.n, s: self.s }
    }

    /// Parameters of the predictive law `z_t | D_{t−1} = scale · F(df1, df2)`.
    ///
    /// Pure function of the current state, derived from [`prior`].
    ///
    /// [`prior`]: PrecisionFilter::prior
    pub fn predictive_params(&self) -> PrecisionPredictive {
        let prior = self.prior();
        PrecisionPredictive {
            scale: self.alpha / ((1.0 + self.alpha) * prior.s),
            df1: 2.0 * prior.n,
            df2: 2.0 * self.alpha + 2.0,
        }
    }

    /// Mean, median, and central 95% interval of `z_t | D_{t−1}`.
    ///
    /// The mean is `scale · df2 / (df2 − 2)` when `df2 > 2` and NaN
    /// otherwise; median and interval come from the F quantile function
    /// scaled by `scale`.
    ///
    /// # Errors
    /// - `RVError::InvalidFParam` if the F distribution rejects the derived
    ///   degrees of freedom (unreachable for a validly constructed filter).
    pub fn predictive_moments(&self) -> RVResult<PrecisionMoments> {
        let params = self.predictive_params();
        let mean = if params.df2 > 2.0 {
            params.scale * params.df2 / (params.df2 - 2.0)
        } else {
            f64::NAN
        };
        let f_dist = FisherSnedecor::new(params.df1, params.df2)?;
        Ok(PrecisionMoments {
            mean,
            median: params.scale * f_dist.inverse_cdf(0.5),
            ci95: (
                params.scale * f_dist.inverse_cdf(0.025),
                params.scale * f_dist.inverse_cdf(0.975),
            ),
        })
    }

    /// Pre-update view `(dof = n, sigma2 = s)` for the state-space block.
    pub fn snapshot(&self) -> PrecisionSnapshot {
        PrecisionSnapshot { dof: self.n, sigma2: self.s }
    }

    /// Absorb the realized precision `z_t` into the posterior.
    ///
    /// Applies the beta-gamma recursion
    ///
    /// ```text
    /// n_t = β n_{t−1} + 1 + α
    /// s_t = (β n_{t−1} s_{t−1} + α / z_t) / n_t
    /// ```
    ///
    /// This is the filter's single state mutation; invoke exactly once per
    /// observed time step, in time order.
    ///
    /// # Errors
    /// - `RVError::InvalidPrecisionObservation` when `z_t` is ≤ 0 or
    ///   non-finite. The state is left untouched in that case.
    pub fn update(&mut self, z_t: f64) -> RVResult<()> {
        if !z_t.is_finite() || z_t <= 0.0 {
            return Err(RVError::InvalidPrecisionObservation { value: z_t });
        }
        let n_prior = self.beta * self.n;
        let n_post = n_prior + 1.0 + self.alpha;
        let s_post = (n_prior * self.s + self.alpha / z_t) / n_post;
        self.n = n_post;
        self.s = s_post;
        Ok(())
    }
}
