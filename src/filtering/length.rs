//! record-level length filtering
use super::Filter;
use crate::record::Record;

/// Token count filter.
/// Returns `false` if either side of the record has less than [Length::min_size]
/// or more than [Length::max_size] whitespace separated tokens.
///
/// Bounds are inclusive. Default is `1..=usize::MAX`, which keeps every aligned record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Length {
    min_size: usize,
    max_size: usize,
}

impl Length {
    pub fn new(min_size: usize, max_size: usize) -> Self {
        Self { min_size, max_size }
    }

    /// specify a maximum length
    pub fn with_max_size(max_size: usize) -> Self {
        Self {
            max_size,
            ..Default::default()
        }
    }

    /// Get a reference to the length's min size.
    pub fn min_size(&self) -> &usize {
        &self.min_size
    }

    /// Get a reference to the length's max size.
    pub fn max_size(&self) -> &usize {
        &self.max_size
    }

    #[inline]
    fn in_bounds(&self, len: usize) -> bool {
        (self.min_size..=self.max_size).contains(&len)
    }
}

impl Filter<&Record> for Length {
    fn detect(&self, record: &Record) -> bool {
        self.in_bounds(record.source_len()) && self.in_bounds(record.target_len())
    }
}

impl Default for Length {
    fn default() -> Self {
        Length {
            min_size: 1,
            max_size: usize::MAX,
        }
    }
}
