use itertools::Itertools;

use crate::geometry::Pos;
use crate::interval::{coalesce_runs, Interval};
use crate::parser::{nom_parse_to_owned, Error};
use crate::sensor::Sensor;

pub use self::parser::parse_input;

/// Every sensor from one input, in the order it was listed.
#[derive(PartialEq, Eq, Debug, Clone, Default)]
pub struct Report {
    sensors: Vec<Sensor>,
}

impl Report {
    pub fn new(sensors: Vec<Sensor>) -> Self {
        Report { sensors }
    }

    /// Build from `(sensor_x, sensor_y, beacon_x, beacon_y)` quadruples.
    pub fn from_quads<I>(quads: I) -> Self
    where
        I: IntoIterator<Item = (i64, i64, i64, i64)>,
    {
        quads
            .into_iter()
            .map(|(sx, sy, bx, by)| Sensor::new(Pos::new(sx, sy), Pos::new(bx, by)))
            .collect()
    }

    pub fn parse(input: &str) -> Result<Self, Error> {
        Ok(nom_parse_to_owned(parser::parse_input, input)?)
    }

    pub fn sensors(&self) -> &[Sensor] {
        &self.sensors
    }

    /// Coverage of every sensor reaching `row`, collapsed into ascending,
    /// disjoint runs.
    pub fn runs(&self, row: i64) -> Vec<Interval> {
        coalesce_runs(self.spans(row))
    }

    pub(crate) fn spans(&self, row: i64) -> impl Iterator<Item = Interval> + '_ {
        self.sensors
            .iter()
            .flat_map(move |s| s.coverage(row).interval())
    }

    /// Count the columns on `row` that cannot hold an undetected beacon.
    ///
    /// Beacons already known to sit on the row are not counted: they are
    /// inside some exclusion zone, but they are not unknown.
    pub fn count_excluded(&self, row: i64) -> u64 {
        let runs = self.runs(row);
        let covered = runs.iter().map(Interval::len).sum::<u64>();

        let known = self
            .sensors
            .iter()
            .map(|s| s.beacon)
            .filter(|b| b.y == row)
            .map(|b| b.x)
            .unique()
            .filter(|&x| runs.iter().any(|r| r.contains(x)))
            .count() as u64;

        log::debug!(
            "row {}: {} runs covering {} columns, {} known beacons",
            row,
            runs.len(),
            covered,
            known
        );

        covered - known
    }
}

impl FromIterator<Sensor> for Report {
    fn from_iter<T: IntoIterator<Item = Sensor>>(iter: T) -> Self {
        Report::new(iter.into_iter().collect())
    }
}

mod parser {
    use super::*;

    use crate::parser::base10_numeric;

    use nom::bytes::complete::tag;
    use nom::character::complete::{line_ending, space0};
    use nom::combinator::eof;
    use nom::multi::{many0, many1, separated_list1};
    use nom::sequence::{preceded, separated_pair, terminated, tuple};
    use nom::{IResult, Parser};

    fn pos(input: &str) -> IResult<&str, Pos> {
        separated_pair(
            preceded(tag("x="), base10_numeric),
            tuple((space0, tag(","), space0)),
            preceded(tag("y="), base10_numeric),
        )
        .map(|(x, y)| Pos { x, y })
        .parse(input)
    }

    fn sensor(input: &str) -> IResult<&str, Sensor> {
        tuple((
            preceded(tag("Sensor at "), pos),
            preceded(tag(": closest beacon is at "), pos),
        ))
        .map(|(pos, beacon)| Sensor { pos, beacon })
        .parse(input)
    }

    /// One report, one sensor per line.
    pub fn parse_input(input: &str) -> IResult<&str, Report> {
        terminated(
            separated_list1(many1(line_ending), sensor),
            tuple((many0(line_ending), eof)),
        )
        .map(Report::new)
        .parse(input)
    }

}
