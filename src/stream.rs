//! Streaming validation for processing cards as they arrive.
//!
//! Iterator adapters let large files or network streams be validated line by
//! line without loading everything into memory.
//!
//! # Example
//!
//! ```
//! use cardcheck::stream::ValidateExt;
//!
//! let lines = vec!["4111111111111111", "123", "4111111111111112"];
//! let passing: Vec<_> = lines.into_iter().valid_only().collect();
//! assert_eq!(passing.len(), 1);
//! ```

use crate::error::ValidationError;
use crate::validate::{validate_card, ValidationResult};

/// Validates every item of the inner iterator.
///
/// Created by [`ValidateExt::validate_cards`].
#[derive(Debug, Clone)]
pub struct ValidateStream<I> {
    inner: I,
}

impl<I, S> Iterator for ValidateStream<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    type Item = Result<ValidationResult, ValidationError>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|s| validate_card(s.as_ref()))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<I, S> ExactSizeIterator for ValidateStream<I>
where
    I: ExactSizeIterator<Item = S>,
    S: AsRef<str>,
{
}

/// Yields only results that have an acceptable length and pass the checksum.
///
/// Created by [`ValidateExt::valid_only`].
#[derive(Debug, Clone)]
pub struct ValidOnlyStream<I> {
    inner: I,
}

impl<I, S> Iterator for ValidOnlyStream<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    type Item = ValidationResult;

    fn next(&mut self) -> Option<Self::Item> {
        for s in self.inner.by_ref() {
            if let Ok(result) = validate_card(s.as_ref()) {
                if result.is_valid() {
                    return Some(result);
                }
            }
        }
        None
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let (_, upper) = self.inner.size_hint();
        (0, upper)
    }
}

/// Yields each result paired with the zero-based position of its input.
///
/// Created by [`ValidateExt::indexed`].
#[derive(Debug, Clone)]
pub struct IndexedValidateStream<I> {
    inner: I,
    index: usize,
}

impl<I, S> Iterator for IndexedValidateStream<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    type Item = (usize, Result<ValidationResult, ValidationError>);

    fn next(&mut self) -> Option<Self::Item> {
        let s = self.inner.next()?;
        let index = self.index;
        self.index += 1;
        Some((index, validate_card(s.as_ref())))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

/// Extension trait adding validation adapters to string iterators.
pub trait ValidateExt: Iterator + Sized
where
    Self::Item: AsRef<str>,
{
    /// Validates each item.
    fn validate_cards(self) -> ValidateStream<Self> {
        ValidateStream { inner: self }
    }

    /// Keeps only items that validate with a passing checksum.
    fn valid_only(self) -> ValidOnlyStream<Self> {
        ValidOnlyStream { inner: self }
    }

    /// Validates each item and tags it with its position.
    fn indexed(self) -> IndexedValidateStream<Self> {
        IndexedValidateStream {
            inner: self,
            index: 0,
        }
    }
}

impl<I> ValidateExt for I
where
    I: Iterator,
    I::Item: AsRef<str>,
{
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::CardNetwork;

    #[test]
    fn test_validate_cards() {
        let cards = vec!["4111111111111111", "", "6011111111111117"];
        let results: Vec<_> = cards.into_iter().validate_cards().collect();

        assert_eq!(results.len(), 3);
        assert!(results[0].is_ok());
        assert_eq!(results[1], Err(ValidationError::EmptyInput));
        assert_eq!(
            results[2].as_ref().unwrap().card_type(),
            CardNetwork::Discover
        );
    }

    #[test]
    fn test_exact_size() {
        let cards = ["4111111111111111", "123"];
        assert_eq!(cards.iter().validate_cards().len(), 2);
    }

    #[test]
    fn test_valid_only_skips_failures() {
        let cards = vec![
            "123".to_string(),
            "4111111111111112".to_string(),
            "371449635398431".to_string(),
        ];
        let valid: Vec<_> = cards.iter().valid_only().collect();
        assert_eq!(valid.len(), 1);
        assert_eq!(valid[0].card_type(), CardNetwork::AmericanExpress);
    }

    #[test]
    fn test_indexed() {
        let cards = ["", "4111111111111111", "123"];
        let failed: Vec<usize> = cards
            .iter()
            .indexed()
            .filter(|(_, r)| r.is_err())
            .map(|(i, _)| i)
            .collect();
        assert_eq!(failed, vec![0, 2]);
    }
}
