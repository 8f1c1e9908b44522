use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use validator::Validate;

use crate::error::ConversionError;
use crate::models::{ConversionResult, DecimalCoordinate, DmsComponents, Hemisphere};
use crate::utils::constants::{
    DECIMAL_OUTPUT_PRECISION, MSG_DECIMAL_MISSING, MSG_DECIMAL_NON_NUMERIC,
    MSG_DECIMAL_OUT_OF_RANGE, MSG_DMS_MISSING, MSG_DMS_NON_NUMERIC, MSG_DMS_OUT_OF_RANGE,
    NOTE_DECIMAL_TO_DMS, NOTE_DMS_TO_DECIMAL,
};
use crate::utils::coordinates::decimal_to_dms;
use crate::utils::parsing::parse_fields;

/// Raw degree, minute and second fields of one ordinate plus its hemisphere selector
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DmsFields {
    pub degrees: String,
    pub minutes: String,
    pub seconds: String,
    pub hemisphere: Hemisphere,
}

impl DmsFields {
    pub fn new(degrees: &str, minutes: &str, seconds: &str, hemisphere: Hemisphere) -> Self {
        Self {
            degrees: degrees.to_string(),
            minutes: minutes.to_string(),
            seconds: seconds.to_string(),
            hemisphere,
        }
    }

    /// Empty latitude fields, northern hemisphere selected
    pub fn latitude() -> Self {
        Self::new("", "", "", Hemisphere::North)
    }

    /// Empty longitude fields, eastern hemisphere selected
    pub fn longitude() -> Self {
        Self::new("", "", "", Hemisphere::East)
    }

    fn clear(&mut self) {
        self.degrees.clear();
        self.minutes.clear();
        self.seconds.clear();
    }
}

/// Convert a decimal-degree pair to DMS notation
///
/// # Examples
/// ```
/// use georesolve::converters::convert_decimal_to_dms;
///
/// let result = convert_decimal_to_dms("-1.5", "30.25");
/// assert_eq!(result.output(), "1° 30' 0.0000\" S, 30° 15' 0.0000\" E");
/// ```
pub fn convert_decimal_to_dms(latitude: &str, longitude: &str) -> ConversionResult {
    debug!(latitude, longitude, "Converting decimal degrees to DMS");

    match decimal_pair(latitude, longitude) {
        Ok(coordinate) => {
            let output = format!(
                "{}, {}",
                decimal_to_dms(coordinate.latitude, true),
                decimal_to_dms(coordinate.longitude, false)
            );
            info!(output = %output, "Decimal to DMS conversion complete");

            ConversionResult::success(
                // `+ 0.0` turns a typed `-0` into `0`
                format!("{}°, {}°", coordinate.latitude + 0.0, coordinate.longitude + 0.0),
                output,
                [coordinate.latitude, coordinate.longitude],
                None,
                NOTE_DECIMAL_TO_DMS,
            )
        }
        Err(e) => {
            warn!(category = ?e.category(), "Decimal input rejected: {}", e);
            ConversionResult::failure(&e, String::new(), None)
        }
    }
}

fn decimal_pair(latitude: &str, longitude: &str) -> Result<DecimalCoordinate, ConversionError> {
    let [lat, lon] = parse_fields(
        [latitude, longitude],
        MSG_DECIMAL_MISSING,
        MSG_DECIMAL_NON_NUMERIC,
    )?;

    let coordinate = DecimalCoordinate::new(lat, lon);
    coordinate
        .validate()
        .map_err(|_| ConversionError::OutOfRange(MSG_DECIMAL_OUT_OF_RANGE.to_string()))?;

    Ok(coordinate)
}

/// Convert DMS fields for a latitude and a longitude to decimal degrees
///
/// The result values hold the signed latitude and longitude; the output shows each to
/// eight decimal places.
pub fn convert_dms_to_decimal(latitude: &DmsFields, longitude: &DmsFields) -> ConversionResult {
    debug!("Converting DMS to decimal degrees");

    match dms_pair(latitude, longitude) {
        Ok((lat, lon)) => {
            let decimal_lat = lat.to_decimal();
            let decimal_lon = lon.to_decimal();

            let output = format!(
                "{:.prec$}°, {:.prec$}°",
                decimal_lat,
                decimal_lon,
                prec = DECIMAL_OUTPUT_PRECISION
            );
            info!(output = %output, "DMS to decimal conversion complete");

            ConversionResult::success(
                format!("{}, {}", lat, lon),
                output,
                [decimal_lat, decimal_lon],
                None,
                NOTE_DMS_TO_DECIMAL,
            )
        }
        Err(e) => {
            warn!(category = ?e.category(), "DMS input rejected: {}", e);
            ConversionResult::failure(&e, String::new(), None)
        }
    }
}

fn dms_pair(
    latitude: &DmsFields,
    longitude: &DmsFields,
) -> Result<(DmsComponents, DmsComponents), ConversionError> {
    let [lat_d, lat_m, lat_s, lon_d, lon_m, lon_s] = parse_fields(
        [
            latitude.degrees.as_str(),
            latitude.minutes.as_str(),
            latitude.seconds.as_str(),
            longitude.degrees.as_str(),
            longitude.minutes.as_str(),
            longitude.seconds.as_str(),
        ],
        MSG_DMS_MISSING,
        MSG_DMS_NON_NUMERIC,
    )?;

    let lat = DmsComponents::new(lat_d, lat_m, lat_s, latitude.hemisphere);
    let lon = DmsComponents::new(lon_d, lon_m, lon_s, longitude.hemisphere);

    if !lat.is_valid_for(true) || !lon.is_valid_for(false) {
        return Err(ConversionError::OutOfRange(MSG_DMS_OUT_OF_RANGE.to_string()));
    }

    Ok((lat, lon))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConversionMode {
    #[default]
    DecimalToDms,
    DmsToDecimal,
}

impl ConversionMode {
    pub fn toggled(self) -> Self {
        match self {
            ConversionMode::DecimalToDms => ConversionMode::DmsToDecimal,
            ConversionMode::DmsToDecimal => ConversionMode::DecimalToDms,
        }
    }
}

/// Two-way DMS converter holding the fields of the active mode and the latest result
#[derive(Debug, Clone, PartialEq)]
pub struct DmsConverter {
    mode: ConversionMode,
    pub decimal_latitude: String,
    pub decimal_longitude: String,
    pub latitude: DmsFields,
    pub longitude: DmsFields,
    result: Option<ConversionResult>,
}

impl Default for DmsConverter {
    fn default() -> Self {
        Self {
            mode: ConversionMode::default(),
            decimal_latitude: String::new(),
            decimal_longitude: String::new(),
            latitude: DmsFields::latitude(),
            longitude: DmsFields::longitude(),
            result: None,
        }
    }
}

impl DmsConverter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> ConversionMode {
        self.mode
    }

    pub fn result(&self) -> Option<&ConversionResult> {
        self.result.as_ref()
    }

    /// Flip the mode and drop every pending field and the last result
    ///
    /// Hemisphere selectors keep their current choice.
    pub fn switch_mode(&mut self) -> ConversionMode {
        self.mode = self.mode.toggled();
        self.result = None;
        self.decimal_latitude.clear();
        self.decimal_longitude.clear();
        self.latitude.clear();
        self.longitude.clear();

        debug!(mode = ?self.mode, "DMS converter mode switched");
        self.mode
    }

    /// Convert the fields of the active mode, replacing any previous result
    pub fn convert(&mut self) -> &ConversionResult {
        let result = match self.mode {
            ConversionMode::DecimalToDms => {
                convert_decimal_to_dms(&self.decimal_latitude, &self.decimal_longitude)
            }
            ConversionMode::DmsToDecimal => convert_dms_to_decimal(&self.latitude, &self.longitude),
        };
        self.result.insert(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCategory;
    use pretty_assertions::assert_eq;

    fn kampala() -> (DmsFields, DmsFields) {
        (
            DmsFields::new("0", "20", "51.3456", Hemisphere::North),
            DmsFields::new("32", "34", "57.072", Hemisphere::East),
        )
    }

    #[test]
    fn test_decimal_to_dms_success() {
        let result = convert_decimal_to_dms("0.347596", "32.58252");

        assert!(result.is_success());
        assert_eq!(result.input(), "0.347596°, 32.58252°");
        assert_eq!(
            result.output(),
            "0° 20' 51.3456\" N, 32° 34' 57.0720\" E"
        );
        assert_eq!(
            result.note(),
            Some("Decimal degrees converted to degrees-minutes-seconds format")
        );
    }

    #[test]
    fn test_decimal_to_dms_validation_order() {
        let missing = convert_decimal_to_dms("", "abc");
        assert_eq!(missing.category(), Some(ErrorCategory::MissingInput));

        let non_numeric = convert_decimal_to_dms("91", "abc");
        assert_eq!(non_numeric.category(), Some(ErrorCategory::NonNumericInput));

        let out_of_range = convert_decimal_to_dms("91", "0");
        assert_eq!(out_of_range.category(), Some(ErrorCategory::OutOfRange));
        assert_eq!(
            out_of_range.output(),
            "Coordinates out of range. Latitude must be between -90° and 90°, longitude between -180° and 180°."
        );

        let bad_lon = convert_decimal_to_dms("0", "-180.0001");
        assert_eq!(bad_lon.category(), Some(ErrorCategory::OutOfRange));
    }

    #[test]
    fn test_distinct_decimal_messages() {
        let messages = [
            convert_decimal_to_dms("", "1").output().to_string(),
            convert_decimal_to_dms("x", "1").output().to_string(),
            convert_decimal_to_dms("100", "1").output().to_string(),
        ];
        assert_ne!(messages[0], messages[1]);
        assert_ne!(messages[1], messages[2]);
        assert_ne!(messages[0], messages[2]);
    }

    #[test]
    fn test_dms_to_decimal_kampala() {
        let (lat, lon) = kampala();
        let result = convert_dms_to_decimal(&lat, &lon);

        assert!(result.is_success());
        assert_eq!(result.input(), "0° 20' 51.3456\" N, 32° 34' 57.072\" E");
        assert_eq!(result.output(), "0.34759600°, 32.58252000°");

        let [decimal_lat, decimal_lon] = result.values().unwrap();
        assert_eq!(format!("{:.6}", decimal_lat), "0.347596");
        assert_eq!(format!("{:.6}", decimal_lon), "32.582520");
    }

    #[test]
    fn test_dms_to_decimal_southern_western() {
        let lat = DmsFields::new("6", "10", "12", Hemisphere::South);
        let lon = DmsFields::new("0", "7", "39", Hemisphere::West);
        let [decimal_lat, decimal_lon] = convert_dms_to_decimal(&lat, &lon).values().unwrap();

        assert!((decimal_lat + 6.17).abs() < 1e-9);
        assert!((decimal_lon + 0.1275).abs() < 1e-9);
    }

    #[test]
    fn test_dms_latitude_degrees_bound() {
        let lat = DmsFields::new("91", "0", "0", Hemisphere::North);
        let lon = DmsFields::new("0", "0", "0", Hemisphere::East);
        let result = convert_dms_to_decimal(&lat, &lon);

        assert_eq!(result.category(), Some(ErrorCategory::OutOfRange));
        assert_eq!(
            result.output(),
            "Invalid DMS values. Check ranges: degrees (0-90° for lat, 0-180° for lon), minutes/seconds (0-59)."
        );
    }

    #[test]
    fn test_dms_component_bounds() {
        let lon_ok = DmsFields::new("180", "0", "0", Hemisphere::West);
        let lat_ok = DmsFields::new("90", "0", "0", Hemisphere::South);
        assert!(convert_dms_to_decimal(&lat_ok, &lon_ok).is_success());

        let minutes_60 = DmsFields::new("10", "60", "0", Hemisphere::North);
        let seconds_60 = DmsFields::new("10", "0", "60", Hemisphere::East);
        let negative = DmsFields::new("-1", "0", "0", Hemisphere::North);
        let (lat, lon) = kampala();

        for (la, lo) in [(&minutes_60, &lon), (&lat, &seconds_60), (&negative, &lon)] {
            assert_eq!(
                convert_dms_to_decimal(la, lo).category(),
                Some(ErrorCategory::OutOfRange)
            );
        }
    }

    #[test]
    fn test_dms_combined_value_out_of_range() {
        let (lat, lon) = kampala();
        let lat_over = DmsFields::new("90", "0", "1", Hemisphere::North);
        let lon_over = DmsFields::new("180", "0", "0.1", Hemisphere::East);

        for (la, lo) in [(&lat_over, &lon), (&lat, &lon_over)] {
            let result = convert_dms_to_decimal(la, lo);
            assert_eq!(result.category(), Some(ErrorCategory::OutOfRange));
            assert_eq!(result.output(), MSG_DMS_OUT_OF_RANGE);
        }

        let lat_edge = DmsFields::new("90", "0", "0", Hemisphere::North);
        let lon_edge = DmsFields::new("180", "0", "0", Hemisphere::East);
        assert_eq!(
            convert_dms_to_decimal(&lat_edge, &lon_edge).output(),
            "90.00000000°, 180.00000000°"
        );
    }

    #[test]
    fn test_negative_zero_echo() {
        let result = convert_decimal_to_dms("-0", "-0.0");
        assert_eq!(result.input(), "0°, 0°");
        assert_eq!(result.output(), "0° 0' 0.0000\" N, 0° 0' 0.0000\" E");
    }

    #[test]
    fn test_dms_hemisphere_on_wrong_axis() {
        let lat = DmsFields::new("1", "0", "0", Hemisphere::East);
        let lon = DmsFields::new("1", "0", "0", Hemisphere::East);
        assert_eq!(
            convert_dms_to_decimal(&lat, &lon).category(),
            Some(ErrorCategory::OutOfRange)
        );
    }

    #[test]
    fn test_dms_validation_order() {
        let (lat, _) = kampala();
        let blank = DmsFields::new("32", "", "57", Hemisphere::East);
        assert_eq!(
            convert_dms_to_decimal(&lat, &blank).category(),
            Some(ErrorCategory::MissingInput)
        );

        let text = DmsFields::new("32", "x", "57", Hemisphere::East);
        let out_of_range = DmsFields::new("95", "0", "0", Hemisphere::North);
        assert_eq!(
            convert_dms_to_decimal(&out_of_range, &text).category(),
            Some(ErrorCategory::NonNumericInput)
        );
    }

    #[test]
    fn test_switch_mode_clears_state() {
        let mut converter = DmsConverter::new();
        assert_eq!(converter.mode(), ConversionMode::DecimalToDms);

        converter.decimal_latitude = "0.5".to_string();
        converter.decimal_longitude = "32.5".to_string();
        assert!(converter.convert().is_success());

        assert_eq!(converter.switch_mode(), ConversionMode::DmsToDecimal);
        assert!(converter.result().is_none());
        assert!(converter.decimal_latitude.is_empty());
        assert!(converter.decimal_longitude.is_empty());

        // Nothing entered in the new mode yet
        assert_eq!(
            converter.convert().category(),
            Some(ErrorCategory::MissingInput)
        );

        let (lat, lon) = kampala();
        converter.latitude = lat;
        converter.longitude = lon;
        assert_eq!(converter.convert().output(), "0.34759600°, 32.58252000°");

        assert_eq!(converter.switch_mode(), ConversionMode::DecimalToDms);
        assert_eq!(converter.latitude.degrees, "");
        assert_eq!(converter.longitude.seconds, "");
        assert!(converter.result().is_none());
    }
}
