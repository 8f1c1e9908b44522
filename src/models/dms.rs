use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use validator::Validate;

use crate::utils::constants::{MAX_LAT, MAX_LON};
use crate::utils::coordinates::dms_to_decimal;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Invalid hemisphere '{0}', expected one of N, S, E, W")]
pub struct InvalidHemisphere(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Hemisphere {
    #[serde(rename = "N")]
    North,
    #[serde(rename = "S")]
    South,
    #[serde(rename = "E")]
    East,
    #[serde(rename = "W")]
    West,
}

impl Hemisphere {
    /// Hemisphere of a signed decimal value; zero and positive values are north/east
    pub fn for_value(decimal: f64, is_latitude: bool) -> Self {
        match (is_latitude, decimal >= 0.0) {
            (true, true) => Self::North,
            (true, false) => Self::South,
            (false, true) => Self::East,
            (false, false) => Self::West,
        }
    }

    pub fn letter(self) -> char {
        match self {
            Self::North => 'N',
            Self::South => 'S',
            Self::East => 'E',
            Self::West => 'W',
        }
    }

    pub fn is_latitude(self) -> bool {
        matches!(self, Self::North | Self::South)
    }

    pub fn is_negative(self) -> bool {
        matches!(self, Self::South | Self::West)
    }
}

impl fmt::Display for Hemisphere {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl FromStr for Hemisphere {
    type Err = InvalidHemisphere;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "N" => Ok(Self::North),
            "S" => Ok(Self::South),
            "E" => Ok(Self::East),
            "W" => Ok(Self::West),
            _ => Err(InvalidHemisphere(s.to_string())),
        }
    }
}

/// Degrees, minutes and seconds of one ordinate with its hemisphere
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
pub struct DmsComponents {
    #[validate(range(min = 0.0, max = 180.0))]
    pub degrees: f64,

    #[validate(range(min = 0.0, exclusive_max = 60.0))]
    pub minutes: f64,

    #[validate(range(min = 0.0, exclusive_max = 60.0))]
    pub seconds: f64,

    pub hemisphere: Hemisphere,
}

impl DmsComponents {
    pub fn new(degrees: f64, minutes: f64, seconds: f64, hemisphere: Hemisphere) -> Self {
        Self {
            degrees,
            minutes,
            seconds,
            hemisphere,
        }
    }

    /// Upper bound for the degrees component on this hemisphere's axis
    pub fn max_degrees(&self) -> f64 {
        if self.hemisphere.is_latitude() {
            MAX_LAT
        } else {
            MAX_LON
        }
    }

    /// Signed decimal degrees of the triple
    pub fn to_decimal(&self) -> f64 {
        dms_to_decimal(self.degrees, self.minutes, self.seconds, self.hemisphere)
    }

    /// Whether the triple is usable as a latitude (`is_latitude`) or a longitude
    ///
    /// Each component must be in bounds and the combined value must stay within the axis
    /// range, so `90° 0' 1" N` is rejected even though every field is.
    pub fn is_valid_for(&self, is_latitude: bool) -> bool {
        self.hemisphere.is_latitude() == is_latitude
            && self.validate().is_ok()
            && self.to_decimal().abs() <= self.max_degrees()
    }
}

impl fmt::Display for DmsComponents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}° {}' {}\" {}",
            self.degrees, self.minutes, self.seconds, self.hemisphere
        )
    }
}

/// A latitude/longitude pair in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
pub struct DecimalCoordinate {
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,

    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
}

impl DecimalCoordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}
