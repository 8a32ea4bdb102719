//! The sine-based generator.
//!
//! A seeded generator takes `sin(seed)`, moves five digits before the
//! decimal point and keeps the fractional part, then advances the seed by
//! exactly 1.0. The same seed therefore always yields the same sequence.
//! An unseeded generator delegates to [`Entropy`].
//!
//! None of this is cryptographically meaningful.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::config::PrngConfig;
use crate::entropy::Entropy;

/// Multiplier that moves the first five digits of the sine before the point.
const DIGIT_SCALE: f64 = 1e5;

/// Added to a seed that is an exact multiple of pi, where `sin` would be 0.
const SANITIZE_OFFSET: f64 = 0.1;

/// Where draws come from. Fixed at construction.
#[derive(Debug, Clone)]
enum Source {
    Seeded(f64),
    Unseeded(Entropy),
}

/// Pseudorandom number generator that may optionally be seeded.
///
/// Draws take `&mut self`; share an instance across threads only behind a
/// lock, or give each consumer its own.
#[derive(Debug, Clone)]
pub struct Prng {
    source: Source,
}

/// Serializable snapshot of a generator's mode and current seed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PrngState {
    /// Current seed, or `None` for an unseeded generator.
    pub seed: Option<f64>,
}

impl Prng {
    /// Create a generator. `None`, zero and NaN all select unseeded mode.
    pub fn new(seed: Option<f64>) -> Self {
        Self::from_config(&PrngConfig {
            seed,
            ..PrngConfig::default()
        })
    }

    /// Create an unseeded generator backed by platform entropy.
    pub fn unseeded() -> Self {
        Self::new(None)
    }

    pub fn from_config(config: &PrngConfig) -> Self {
        let source = match config.effective_seed() {
            Some(seed) => Source::Seeded(sanitize(seed)),
            None => Source::Unseeded(Entropy::new()),
        };
        tracing::trace!(seeded = matches!(source, Source::Seeded(_)), "prng constructed");
        Self { source }
    }

    /// Resume from a snapshot.
    ///
    /// The seed is restored verbatim: no zero check and no pi adjustment,
    /// since an advanced seed may legitimately sit anywhere.
    pub fn from_state(state: PrngState) -> Self {
        let source = match state.seed {
            Some(seed) => Source::Seeded(seed),
            None => Source::Unseeded(Entropy::new()),
        };
        Self { source }
    }

    pub fn state(&self) -> PrngState {
        match self.source {
            Source::Seeded(seed) => PrngState { seed: Some(seed) },
            Source::Unseeded(_) => PrngState { seed: None },
        }
    }

    pub fn is_seeded(&self) -> bool {
        matches!(self.source, Source::Seeded(_))
    }

    /// Draw an f64 in [0, 1). Advances the seed by 1.0 when seeded.
    pub fn random(&mut self) -> f64 {
        match &mut self.source {
            Source::Seeded(seed) => {
                let digits = sine_digits(*seed);
                *seed += 1.0;
                digits
            }
            Source::Unseeded(entropy) => entropy.next_unit(),
        }
    }

    /// Draw an f64 in [min, max). Bounds are not checked for ordering.
    pub fn random_float(&mut self, min: f64, max: f64) -> f64 {
        self.random() * (max - min) + min
    }

    /// Draw an integer in [min, max], both bounds inclusive.
    pub fn random_int(&mut self, min: i64, max: i64) -> i64 {
        // Span in f64 so wide bounds cannot overflow before scaling.
        let span = max as f64 - min as f64 + 1.0;
        ((self.random() * span).floor() as i64).saturating_add(min)
    }
}

impl Default for Prng {
    fn default() -> Self {
        Self::unseeded()
    }
}

/// Nudge a seed off an exact multiple of pi.
fn sanitize(seed: f64) -> f64 {
    if seed % PI == 0.0 {
        tracing::debug!(seed, offset = SANITIZE_OFFSET, "seed is a multiple of pi, offsetting");
        seed + SANITIZE_OFFSET
    } else {
        seed
    }
}

/// Fractional part of `sin(seed) * 10^5`, kept inside [0, 1).
#[inline(always)]
fn sine_digits(seed: f64) -> f64 {
    let digits = seed.sin() * DIGIT_SCALE;
    let frac = digits - digits.floor();
    // A tiny negative `digits` rounds up to exactly 1.0 here.
    if frac >= 1.0 {
        0.0
    } else {
        frac
    }
}
