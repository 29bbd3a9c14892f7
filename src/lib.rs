//! Sensor exclusion zones: count the columns a row rules out, and find the
//! one position inside a bounded square that no sensor covers.

pub mod cli;
pub mod error;
pub mod geometry;
pub mod interval;
pub mod logger;
pub mod parser;
pub mod report;
pub mod search;
pub mod sensor;

pub use self::error::SearchError;
pub use self::geometry::Pos;
pub use self::interval::Interval;
pub use self::report::Report;
pub use self::search::tuning_frequency;
pub use self::sensor::{Coverage, Sensor};
