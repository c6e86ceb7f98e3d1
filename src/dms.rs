//! Degrees/minutes/seconds notation with a hemisphere letter.

use std::fmt;
use std::str::FromStr;

use crate::error::ClosestError;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    fn is_negative(&self) -> bool {
        matches!(self, Direction::South | Direction::West)
    }
}

impl FromStr for Direction {
    type Err = ClosestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "N" => Ok(Direction::North),
            "S" => Ok(Direction::South),
            "E" => Ok(Direction::East),
            "W" => Ok(Direction::West),
            other => Err(ClosestError::InvalidInput(format!(
                "direction must be one of N, S, E, W, got {:?}",
                other
            ))),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            Direction::North => "N",
            Direction::South => "S",
            Direction::East => "E",
            Direction::West => "W",
        };
        f.write_str(letter)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Dms {
    pub degrees: u32,
    pub minutes: u32,
    pub seconds: f32,
    pub direction: Direction,
}

impl Dms {
    /// Splits a decimal value into whole degrees, whole minutes and seconds.
    /// The direction is N for non-negative input and S otherwise; see
    /// [`Dms::from_longitude`] for E/W.
    pub fn from_decimal(decimal: f32) -> Self {
        let direction = if decimal >= 0.0 { Direction::North } else { Direction::South };
        let decimal = decimal.abs();
        let degrees = decimal.trunc();
        let minutes_decimal = (decimal - degrees) * 60.0;
        let minutes = minutes_decimal.trunc();
        let seconds = (minutes_decimal - minutes) * 60.0;
        Self::carried(degrees as u32, minutes as u32, seconds, direction)
    }

    pub fn from_longitude(decimal: f32) -> Self {
        let dms = Self::from_decimal(decimal);
        let direction = if dms.direction == Direction::North { Direction::East } else { Direction::West };
        Self { direction, ..dms }
    }

    /// Rounding can leave 60 seconds or 60 minutes; carry them upward.
    fn carried(mut degrees: u32, mut minutes: u32, mut seconds: f32, direction: Direction) -> Self {
        if seconds >= 60.0 {
            seconds -= 60.0;
            minutes += 1;
        }
        if minutes >= 60 {
            minutes -= 60;
            degrees += 1;
        }
        Self {
            degrees,
            minutes,
            seconds: seconds.max(0.0),
            direction,
        }
    }

    pub fn to_decimal(&self) -> f32 {
        to_decimal(self.degrees as f32, self.minutes as f32, self.seconds, self.direction)
    }
}

impl fmt::Display for Dms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Round to the printed tenth first so 59.96 shows as a carried minute, not 60.0.
        let tenths = (self.seconds * 10.0).round() / 10.0;
        let shown = Self::carried(self.degrees, self.minutes, tenths, self.direction);
        write!(f, "{}°{}'{:.1}\"{}", shown.degrees, shown.minutes, shown.seconds, shown.direction)
    }
}

pub fn to_decimal(degrees: f32, minutes: f32, seconds: f32, direction: Direction) -> f32 {
    let decimal = degrees + minutes / 60.0 + seconds / 3600.0;
    if direction.is_negative() {
        -decimal
    } else {
        decimal
    }
}
