//! Random number sources
//!
//! This module defines the `RandomSource` trait and the two sources used for
//! circle generation: an entropy-seeded one for normal runs and a seeded one
//! for reproducible runs.

pub mod pseudo;

/// Trait for sources of uniformly distributed floats
pub trait RandomSource {
    /// Returns the source name (e.g., "pseudo", "pseudo-seeded")
    fn name(&self) -> &'static str;

    /// Generate a single random float uniformly distributed in [0.0, 1.0)
    fn float(&mut self) -> f64;

    /// Generate n random floats, each uniformly distributed in [0.0, 1.0)
    ///
    /// Default implementation calls float() n times, in order.
    fn floats(&mut self, n: usize) -> Vec<f64> {
        (0..n).map(|_| self.float()).collect()
    }
}

/// Get a source for an optional seed
///
/// A seed gives a reproducible source; no seed gives one seeded from OS entropy.
pub fn source_for(seed: Option<i64>) -> Box<dyn RandomSource> {
    match seed {
        Some(seed) => Box::new(pseudo::SeededSource::from_signed(seed)),
        None => Box::new(pseudo::PseudoSource::new()),
    }
}
