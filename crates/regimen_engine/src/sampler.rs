//! Weighted random selection.
//!
//! Options keep their declaration order. A draw `r` is taken uniformly from
//! `[0, total)` and the first option whose running sum reaches `r` wins, so
//! for a given generator stream the pick is fully determined. A zero-weight
//! option shares its running sum with the option before it, so it wins only
//! a draw landing exactly on that sum.

use rand::Rng;
use regimen_foundation::{Error, Result};
use regimen_language::Weight;

/// Reads a weight literal as a finite, non-negative number.
///
/// Surrounding whitespace is ignored.
///
/// # Errors
/// Returns an invalid weight error naming the trimmed literal.
pub fn parse_weight(literal: &str) -> Result<f64> {
    let literal = literal.trim();
    match literal.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Ok(value),
        _ => Err(Error::invalid_weight(literal)),
    }
}

/// An ordered set of weighted options ready to be sampled.
#[derive(Clone, Debug, PartialEq)]
pub struct WeightedChoice<'a> {
    /// `(name, weight)` in declaration order.
    options: Vec<(&'a str, f64)>,
    /// Sum of all weights.
    total: f64,
}

impl<'a> WeightedChoice<'a> {
    /// Creates a choice from `(name, weight)` pairs.
    ///
    /// # Errors
    /// Returns an invalid weight error if any weight is negative, NaN, or
    /// infinite, or if the weights overflow when summed.
    pub fn new(options: Vec<(&'a str, f64)>) -> Result<Self> {
        if let Some((_, bad)) = options
            .iter()
            .find(|(_, w)| !w.is_finite() || *w < 0.0)
        {
            return Err(Error::invalid_weight(bad.to_string()));
        }

        let total: f64 = options.iter().map(|(_, w)| w).sum();
        if !total.is_finite() {
            return Err(Error::invalid_weight(format!("sum {total}")));
        }

        Ok(Self { options, total })
    }

    /// Creates a choice from parsed plan weights, trimming names and values.
    ///
    /// # Errors
    /// Returns an invalid weight error for the first bad literal.
    pub fn from_weights(weights: &'a [Weight]) -> Result<Self> {
        let options = weights
            .iter()
            .map(|w| Ok((w.name(), parse_weight(w.value())?)))
            .collect::<Result<Vec<_>>>()?;
        Self::new(options)
    }

    /// Returns the options in declaration order.
    #[must_use]
    pub fn options(&self) -> &[(&'a str, f64)] {
        &self.options
    }

    /// Returns the sum of all weights.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.total
    }

    /// Returns the number of options.
    #[must_use]
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Returns true if there are no options.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Returns the option selected by a draw `r` in `[0, total)`.
    ///
    /// Scans in declaration order and returns the first option whose
    /// running sum is at least `r`.
    #[must_use]
    pub fn pick(&self, r: f64) -> Option<&'a str> {
        let mut cumulative = 0.0;
        for &(name, weight) in &self.options {
            cumulative += weight;
            if cumulative >= r {
                return Some(name);
            }
        }
        None
    }

    /// Draws one option name.
    ///
    /// Consumes exactly one value from the generator.
    ///
    /// # Errors
    /// Returns a sampling error if the weights sum to zero.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<&'a str> {
        if self.total <= 0.0 {
            return Err(Error::no_positive_weight());
        }
        let r = rng.gen_range(0.0..self.total);
        self.pick(r).ok_or_else(Error::no_positive_weight)
    }
}
