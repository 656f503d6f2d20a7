//! Batch validation of many card numbers.
//!
//! Results keep the order of the input. With the `parallel` feature, rayon
//! spreads the work across threads; each validation is independent so no
//! coordination is needed.

use crate::error::ValidationError;
use crate::network::CardNetwork;
use crate::validate::{validate_card, ValidationResult};
use std::collections::BTreeMap;

/// Result type for a single entry of a batch.
pub type BatchResult = Result<ValidationResult, ValidationError>;

/// Validates a slice of card numbers in order.
///
/// # Example
///
/// ```
/// use cardcheck::batch::validate_batch;
///
/// let results = validate_batch(&["4111111111111111", "123", "4111111111111112"]);
/// assert!(results[0].as_ref().unwrap().is_valid());
/// assert!(results[1].is_err());
/// assert!(!results[2].as_ref().unwrap().is_valid());
/// ```
pub fn validate_batch<S: AsRef<str>>(cards: &[S]) -> Vec<BatchResult> {
    cards.iter().map(|c| validate_card(c.as_ref())).collect()
}

/// Validates a slice of card numbers in parallel, keeping input order.
///
/// # Feature
///
/// Requires the `parallel` feature to be enabled.
#[cfg(feature = "parallel")]
pub fn validate_batch_parallel<S: AsRef<str> + Sync>(cards: &[S]) -> Vec<BatchResult> {
    use rayon::prelude::*;
    cards.par_iter().map(|c| validate_card(c.as_ref())).collect()
}

/// Counts of a batch run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BatchSummary {
    /// Entries processed.
    pub total: usize,
    /// Entries with an acceptable length and a passing checksum.
    pub valid: usize,
    /// Entries with an acceptable length and a failing checksum.
    pub invalid: usize,
    /// Entries rejected before the checksum (no digits, bad length).
    pub errors: usize,
    /// Acceptable-length entries per detected network.
    pub by_network: BTreeMap<String, usize>,
}

impl BatchSummary {
    /// Tallies a set of batch results.
    ///
    /// # Example
    ///
    /// ```
    /// use cardcheck::batch::{validate_batch, BatchSummary};
    ///
    /// let results = validate_batch(&["4111111111111111", "", "371449635398431"]);
    /// let summary = BatchSummary::from_results(&results);
    /// assert_eq!(summary.total, 3);
    /// assert_eq!(summary.valid, 2);
    /// assert_eq!(summary.errors, 1);
    /// ```
    pub fn from_results(results: &[BatchResult]) -> Self {
        let mut summary = Self {
            total: results.len(),
            ..Self::default()
        };

        for result in results {
            match result {
                Ok(r) => {
                    if r.is_valid() {
                        summary.valid += 1;
                    } else {
                        summary.invalid += 1;
                    }
                    *summary
                        .by_network
                        .entry(r.card_type().id().to_string())
                        .or_insert(0) += 1;
                }
                Err(_) => summary.errors += 1,
            }
        }

        summary
    }

    /// Number of entries for one network.
    pub fn count_for(&self, network: CardNetwork) -> usize {
        self.by_network.get(network.id()).copied().unwrap_or(0)
    }
}

/// Counts cards that pass validation, without keeping results.
///
/// Returns `(passing, not_passing)`.
pub fn count_valid<S: AsRef<str>>(cards: &[S]) -> (usize, usize) {
    let passing = cards
        .iter()
        .filter(|c| crate::is_valid(c.as_ref()))
        .count();
    (passing, cards.len() - passing)
}
