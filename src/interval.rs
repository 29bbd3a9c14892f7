use itertools::Itertools;

/// A closed run of columns, `start..=end`.
///
/// The constructor refuses `start > end`, so every value describes at least
/// one column.
#[derive(PartialEq, Eq, Debug, Hash, Clone, Copy, PartialOrd, Ord)]
pub struct Interval {
    start: i64,
    end: i64,
}

impl Interval {
    pub fn new(start: i64, end: i64) -> Option<Self> {
        (start <= end).then_some(Interval { start, end })
    }

    pub fn start(&self) -> i64 {
        self.start
    }

    pub fn end(&self) -> i64 {
        self.end
    }

    /// Number of columns covered.
    pub fn len(&self) -> u64 {
        self.end.abs_diff(self.start) + 1
    }

    pub fn contains(&self, x: i64) -> bool {
        (self.start..=self.end).contains(&x)
    }

    // Collapse overlapping intervals into one, or returns both unchanged as Err.
    //
    // Intervals sharing an endpoint overlap, so (0, 5) and (5, 10) collapse to
    // (0, 10). Merely adjacent ones like (0, 5) and (6, 10) do not.
    pub fn merge(self, other: Interval) -> Result<Interval, (Interval, Interval)> {
        if other.start <= self.end && other.end >= self.start {
            Ok(self.hull(other))
        } else {
            Err((self, other))
        }
    }

    /// Smallest interval covering both.
    pub fn hull(self, other: Interval) -> Interval {
        Interval {
            start: i64::min(self.start, other.start),
            end: i64::max(self.end, other.end),
        }
    }

    /// The columns strictly between two disjoint intervals, in either order.
    ///
    /// Returns `None` when they overlap or sit right next to each other.
    pub fn gap_between(self, other: Interval) -> Option<Interval> {
        let (left, right) = if self.start <= other.start {
            (self, other)
        } else {
            (other, self)
        };

        if left.end >= right.start {
            return None;
        }

        Interval::new(left.end + 1, right.start - 1)
    }

    pub fn clamp_to(self, bounds: Interval) -> Option<Interval> {
        Interval::new(
            i64::max(self.start, bounds.start),
            i64::min(self.end, bounds.end),
        )
    }
}

/// Sort intervals by `(start, end)` and collapse overlapping neighbours.
///
/// The result is ascending and pairwise disjoint, though two runs may still be
/// adjacent.
pub fn coalesce_runs<I>(intervals: I) -> Vec<Interval>
where
    I: IntoIterator<Item = Interval>,
{
    intervals
        .into_iter()
        .sorted()
        .coalesce(Interval::merge)
        .collect()
}
