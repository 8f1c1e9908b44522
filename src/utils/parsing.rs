use crate::error::ConversionError;

/// Whether a raw form field holds anything beyond whitespace
pub fn is_blank(field: &str) -> bool {
    field.trim().is_empty()
}

/// Parse a raw form field as a finite number
///
/// Surrounding whitespace is ignored. Infinite and NaN values are rejected.
pub fn parse_finite(field: &str) -> Option<f64> {
    field
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Validate and parse a group of form fields in two passes
///
/// Every field is checked for presence before any of them is parsed, so a blank
/// field always reports `missing` even when a sibling field is not numeric.
///
/// # Examples
/// ```
/// use georesolve::utils::parsing::parse_fields;
///
/// let [lat, lon] = parse_fields(["0.5", " 32.5 "], "missing", "not a number").unwrap();
/// assert_eq!((lat, lon), (0.5, 32.5));
/// assert!(parse_fields(["", "abc"], "missing", "not a number").is_err());
/// ```
pub fn parse_fields<const N: usize>(
    fields: [&str; N],
    missing: &str,
    non_numeric: &str,
) -> Result<[f64; N], ConversionError> {
    if fields.iter().any(|field| is_blank(field)) {
        return Err(ConversionError::MissingInput(missing.to_string()));
    }

    let mut values = [0.0; N];
    for (slot, field) in values.iter_mut().zip(fields) {
        *slot = parse_finite(field)
            .ok_or_else(|| ConversionError::NonNumericInput(non_numeric.to_string()))?;
    }

    Ok(values)
}
