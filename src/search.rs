use itertools::Itertools;
use rayon::prelude::*;

use crate::error::SearchError;
use crate::geometry::Pos;
use crate::interval::Interval;
use crate::report::Report;

pub const FREQUENCY_FACTOR: i64 = 4_000_000;

pub fn tuning_frequency(pos: Pos) -> i64 {
    pos.x * FREQUENCY_FACTOR + pos.y
}

impl Report {
    /// Find the one position in `[0, size_limit]²` that no sensor covers.
    ///
    /// The report is expected to leave exactly one such position. Rows are
    /// scanned in ascending order and the first uncovered column wins; a row
    /// showing a wider hole, or two holes, fails the whole search instead of
    /// guessing.
    pub fn find_gap(&self, size_limit: i64) -> Result<Pos, SearchError> {
        let bounds = square(size_limit)?;

        for y in 0..=size_limit {
            if let Some(x) = self.row_gap(y, bounds)? {
                log::debug!("found gap at ({}, {})", x, y);
                return Ok(Pos::new(x, y));
            }
        }

        Err(SearchError::NoGap { size_limit })
    }

    /// Same as [`Report::find_gap`], with rows spread over the rayon pool.
    ///
    /// The lowest row that reports anything, a gap or an error, decides the
    /// result, so this agrees with the sequential search.
    pub fn find_gap_par(&self, size_limit: i64) -> Result<Pos, SearchError> {
        let bounds = square(size_limit)?;

        (0..=size_limit)
            .into_par_iter()
            .find_map_first(|y| {
                self.row_gap(y, bounds)
                    .map(|x| x.map(|x| Pos::new(x, y)))
                    .transpose()
            })
            .unwrap_or(Err(SearchError::NoGap { size_limit }))
    }

    fn row_gap(&self, row: i64, bounds: Interval) -> Result<Option<i64>, SearchError> {
        let mut spans = self.spans(row).sorted();
        let mut hole = Hole::new(row, bounds);

        let Some(mut run) = spans.next() else {
            // Nothing reaches this row at all.
            hole.record(bounds)?;
            return Ok(hole.column);
        };

        if let Some(lead) = Interval::new(bounds.start(), run.start() - 1) {
            hole.record(lead)?;
        }

        for span in spans {
            // Nothing past here can open a hole inside the square.
            if run.end() >= bounds.end() {
                break;
            }

            run = match run.merge(span) {
                Ok(merged) => merged,
                Err((run, span)) => {
                    if let Some(gap) = run.gap_between(span) {
                        log::trace!("row {}: uncovered {:?}", row, gap);
                        hole.record(gap)?;
                    }
                    run.hull(span)
                }
            };
        }

        if let Some(tail) = Interval::new(run.end() + 1, bounds.end()) {
            hole.record(tail)?;
        }

        Ok(hole.column)
    }
}

fn square(size_limit: i64) -> Result<Interval, SearchError> {
    Interval::new(0, size_limit).ok_or(SearchError::InvalidBound(size_limit))
}

/// The uncovered column seen so far on one row.
struct Hole {
    row: i64,
    bounds: Interval,
    column: Option<i64>,
}

impl Hole {
    fn new(row: i64, bounds: Interval) -> Self {
        Hole {
            row,
            bounds,
            column: None,
        }
    }

    fn record(&mut self, gap: Interval) -> Result<(), SearchError> {
        let Some(gap) = gap.clamp_to(self.bounds) else {
            return Ok(());
        };

        if gap.len() > 1 {
            return Err(SearchError::WideGap { row: self.row, gap });
        }

        match self.column {
            Some(first) => Err(SearchError::MultipleGaps {
                row: self.row,
                first,
                second: gap.start(),
            }),
            None => {
                self.column = Some(gap.start());
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::report::tests::example;

    #[test]
    fn test_tuning_frequency() {
        assert_eq!(tuning_frequency(Pos::new(14, 11)), 56000011);
        assert_eq!(
            tuning_frequency(Pos::new(4_000_000, 4_000_000)),
            16_000_004_000_000
        );
    }

    #[test]
    fn test_find_gap() {
        let report = example();

        assert_eq!(report.find_gap(20), Ok(Pos::new(14, 11)));
        assert_eq!(report.find_gap_par(20), Ok(Pos::new(14, 11)));
        assert_eq!(report.find_gap(20).map(tuning_frequency), Ok(56000011));
    }

    #[test]
    fn test_find_gap_stays_in_square() {
        let report = example();

        for size_limit in 0..=25 {
            let found = report.find_gap(size_limit);
            assert_eq!(found, report.find_gap_par(size_limit), "size {}", size_limit);

            if let Ok(Pos { x, y }) = found {
                assert!((0..=size_limit).contains(&x), "size {}: x = {}", size_limit, x);
                assert!((0..=size_limit).contains(&y), "size {}: y = {}", size_limit, y);
            }
        }
    }

    #[test]
    fn test_find_gap_on_left_edge() {
        let report = Report::from_quads([(2, 2, 2, 0), (1, 0, 2, 0)]);
        assert_eq!(report.find_gap(2), Ok(Pos::new(0, 1)));
        assert_eq!(report.find_gap_par(2), Ok(Pos::new(0, 1)));
    }

    #[test]
    fn test_find_gap_on_right_edge() {
        let report = Report::from_quads([(0, 2, 0, 0), (1, 0, 0, 0)]);
        assert_eq!(report.find_gap(2), Ok(Pos::new(2, 1)));
    }

    #[test]
    fn test_gap_outside_square_is_ignored() {
        // Column -2 is open on row 0, but only column 0 belongs to the square.
        let report = Report::from_quads([(0, 0, 1, 0), (-4, 0, -3, 0)]);
        assert_eq!(report.find_gap(0), Err(SearchError::NoGap { size_limit: 0 }));
    }

    #[test]
    fn test_no_gap() {
        let report = Report::from_quads([(10, 10, 10, 40)]);
        assert_eq!(report.find_gap(20), Err(SearchError::NoGap { size_limit: 20 }));
        assert_eq!(
            report.find_gap_par(20),
            Err(SearchError::NoGap { size_limit: 20 })
        );
    }

    #[test]
    fn test_wide_gap() {
        let report = Report::from_quads([(100, 100, 100, 101)]);
        assert_eq!(
            report.find_gap(5),
            Err(SearchError::WideGap {
                row: 0,
                gap: Interval::new(0, 5).unwrap()
            })
        );
    }

    #[test]
    fn test_multiple_gaps() {
        let report = Report::from_quads([(0, 0, 0, 0), (2, 0, 2, 0), (4, 0, 4, 0)]);
        let expected = Err(SearchError::MultipleGaps {
            row: 0,
            first: 1,
            second: 3,
        });

        assert_eq!(report.find_gap(4), expected);
        assert_eq!(report.find_gap_par(4), expected);
    }

    #[test]
    fn test_invalid_bound() {
        let report = example();
        assert_eq!(report.find_gap(-1), Err(SearchError::InvalidBound(-1)));
        assert_eq!(report.find_gap_par(-1), Err(SearchError::InvalidBound(-1)));
    }
}
