use crate::geometry::Pos;
use crate::interval::Interval;

/// The columns a single sensor rules out on one row.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum Coverage {
    None,
    Range(Interval),
}

impl Coverage {
    pub fn interval(self) -> Option<Interval> {
        match self {
            Coverage::None => None,
            Coverage::Range(interval) => Some(interval),
        }
    }
}

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub struct Sensor {
    pub pos: Pos,
    pub beacon: Pos,
}

impl Sensor {
    pub fn new(pos: Pos, beacon: Pos) -> Self {
        Sensor { pos, beacon }
    }

    /// The distance from the sensor to its beacon is the known reach of the sensor.
    pub fn radius(&self) -> i64 {
        self.pos.manhattan(self.beacon)
    }

    pub fn coverage(&self, row: i64) -> Coverage {
        // The distance consumed by moving to the target row.
        let distance = (self.pos.y - row).abs();

        // Whatever reach is left spreads left/right from there, as long as
        // we haven't already exceeded it.
        let slack = self.radius() - distance;

        match Interval::new(self.pos.x - slack, self.pos.x + slack) {
            Some(interval) => Coverage::Range(interval),
            None => Coverage::None,
        }
    }
}
