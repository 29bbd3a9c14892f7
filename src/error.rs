use thiserror::Error;

use crate::interval::Interval;

/// Ways the bounded gap search can fail.
///
/// Every variant except `InvalidBound` means the report broke the promise of
/// exactly one uncovered position inside the square.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    #[error("square bound must not be negative, got {0}")]
    InvalidBound(i64),
    #[error("no uncovered position within [0, {size_limit}]")]
    NoGap { size_limit: i64 },
    #[error("row {row}: uncovered run {}..={} is wider than one column", .gap.start(), .gap.end())]
    WideGap { row: i64, gap: Interval },
    #[error("row {row}: more than one uncovered column ({first} and {second})")]
    MultipleGaps { row: i64, first: i64, second: i64 },
}
