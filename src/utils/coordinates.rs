use crate::error::ConversionError;
use crate::models::dms::{DmsComponents, Hemisphere};
use crate::utils::constants::DMS_SECONDS_PRECISION;

/// Split a decimal coordinate into degrees, minutes and seconds
///
/// The decomposition is floor based: seconds keep their full fractional part and a value
/// such as 59.99996 is never carried into the minutes.
pub fn decompose(decimal: f64, is_latitude: bool) -> DmsComponents {
    let absolute = decimal.abs();

    let degrees = absolute.floor();
    let minutes_float = (absolute - degrees) * 60.0;
    let minutes = minutes_float.floor();
    let seconds = (minutes_float - minutes) * 60.0;

    DmsComponents::new(
        degrees,
        minutes,
        seconds,
        Hemisphere::for_value(decimal, is_latitude),
    )
}

/// Convert decimal degrees to a `D° M' S.ssss" H` string
///
/// # Examples
/// ```
/// use georesolve::utils::decimal_to_dms;
///
/// assert_eq!(decimal_to_dms(-1.5, true), "1° 30' 0.0000\" S");
/// ```
pub fn decimal_to_dms(decimal: f64, is_latitude: bool) -> String {
    let dms = decompose(decimal, is_latitude);

    format!(
        "{}° {}' {:.prec$}\" {}",
        dms.degrees,
        dms.minutes,
        dms.seconds,
        dms.hemisphere,
        prec = DMS_SECONDS_PRECISION
    )
}

/// Combine DMS components into signed decimal degrees
///
/// # Examples
/// ```
/// use georesolve::models::Hemisphere;
/// use georesolve::utils::dms_to_decimal;
///
/// let decimal = dms_to_decimal(50.0, 30.0, 15.0, Hemisphere::West);
/// assert!((decimal + 50.504167).abs() < 0.000001);
/// ```
pub fn dms_to_decimal(degrees: f64, minutes: f64, seconds: f64, hemisphere: Hemisphere) -> f64 {
    let decimal = degrees + minutes / 60.0 + seconds / 3600.0;

    if hemisphere.is_negative() {
        -decimal
    } else {
        decimal
    }
}

/// Parse a `D° M' S" H` string back into its components
///
/// The degree, minute and second marks are optional separators, so `0 20 51.3456 N`
/// is accepted as well. Ranges are not checked here; any malformed string is reported as
/// non-numeric input.
pub fn parse_dms(dms: &str) -> Result<DmsComponents, ConversionError> {
    let normalized: String = dms
        .chars()
        .map(|c| match c {
            '°' | '\'' | '"' | '′' | '″' => ' ',
            other => other,
        })
        .collect();
    let parts: Vec<&str> = normalized.split_whitespace().collect();

    if parts.len() != 4 {
        return Err(ConversionError::NonNumericInput(format!(
            "Invalid DMS format: '{}'. Expected format: D° M' S\" H",
            dms
        )));
    }

    let number = |label: &str, raw: &str| {
        raw.parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .ok_or_else(|| {
                ConversionError::NonNumericInput(format!("Invalid {} value: '{}'", label, raw))
            })
    };

    let degrees = number("degrees", parts[0])?;
    let minutes = number("minutes", parts[1])?;
    let seconds = number("seconds", parts[2])?;
    let hemisphere = parts[3]
        .parse::<Hemisphere>()
        .map_err(|e| ConversionError::NonNumericInput(e.to_string()))?;

    Ok(DmsComponents::new(degrees, minutes, seconds, hemisphere))
}
