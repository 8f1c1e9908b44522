use tracing::{debug, info, warn};

use crate::converters::projection::{Proj4Engine, ProjectionEngine};
use crate::error::ConversionError;
use crate::models::crs::lookup;
use crate::models::{ConversionResult, Country, CrsContext};
use crate::utils::constants::{
    CRS_OUTPUT_PRECISION, DEFAULT_SOURCE_CRS, DEFAULT_TARGET_CRS, MSG_CRS_MISSING,
    MSG_CRS_NON_NUMERIC, NOTE_PROJECTED, NOTE_SAME_CRS,
};
use crate::utils::parsing::parse_fields;

/// Converts coordinate pairs between the registered reference systems
#[derive(Debug, Default, Clone)]
pub struct CoordinateConverter<E = Proj4Engine> {
    engine: E,
}

impl CoordinateConverter<Proj4Engine> {
    pub fn new() -> Self {
        Self::with_engine(Proj4Engine::new())
    }
}

impl<E: ProjectionEngine> CoordinateConverter<E> {
    pub fn with_engine(engine: E) -> Self {
        Self { engine }
    }

    /// Convert a raw pair of form fields from `source_crs` to `target_crs`
    ///
    /// `ordinate1` is the longitude or easting and `ordinate2` the latitude or northing,
    /// whatever the source system. `country` is echoed in the result and plays no part in
    /// the transform.
    pub fn convert(
        &self,
        country: Country,
        source_crs: &str,
        target_crs: &str,
        ordinate1: &str,
        ordinate2: &str,
    ) -> ConversionResult {
        debug!(
            country = country.key(),
            source = source_crs,
            target = target_crs,
            "Converting coordinates"
        );

        let context = CrsContext {
            country,
            source_crs: source_crs.to_string(),
            target_crs: target_crs.to_string(),
        };

        let parsed = parse_fields([ordinate1, ordinate2], MSG_CRS_MISSING, MSG_CRS_NON_NUMERIC);
        let [x, y] = match parsed {
            Ok(values) => values,
            Err(e) => {
                warn!(category = ?e.category(), "Coordinate input rejected: {}", e);
                return ConversionResult::failure(&e, String::new(), Some(context));
            }
        };

        let input = format!("{}, {}", ordinate1, ordinate2);

        let (values, note) = if source_crs == target_crs {
            ([x, y], NOTE_SAME_CRS)
        } else {
            match self.reproject(source_crs, target_crs, [x, y]) {
                Ok(values) => (values, NOTE_PROJECTED),
                Err(e) => {
                    warn!(category = ?e.category(), "Projection failed: {}", e);
                    return ConversionResult::failure(&e, input, Some(context));
                }
            }
        };

        let output = format!(
            "{:.prec$}, {:.prec$}",
            values[0],
            values[1],
            prec = CRS_OUTPUT_PRECISION
        );
        info!(source = source_crs, target = target_crs, output = %output, "Conversion complete");

        ConversionResult::success(input, output, values, Some(context), note)
    }

    fn reproject(
        &self,
        source_crs: &str,
        target_crs: &str,
        point: [f64; 2],
    ) -> Result<[f64; 2], ConversionError> {
        let source = lookup(source_crs).ok_or_else(|| {
            ConversionError::projection(format!("Unknown coordinate system '{}'", source_crs))
        })?;
        let target = lookup(target_crs).ok_or_else(|| {
            ConversionError::projection(format!("Unknown coordinate system '{}'", target_crs))
        })?;

        self.engine
            .project(source.definition, target.definition, point)
    }
}

/// Convert with the default `proj4rs` engine
///
/// # Examples
/// ```
/// use georesolve::converters::convert;
/// use georesolve::models::Country;
///
/// let result = convert(Country::Uganda, "EPSG:4326", "EPSG:4326", "32.5", "0.5");
/// assert_eq!(result.output(), "32.500000, 0.500000");
/// ```
pub fn convert(
    country: Country,
    source_crs: &str,
    target_crs: &str,
    ordinate1: &str,
    ordinate2: &str,
) -> ConversionResult {
    CoordinateConverter::new().convert(country, source_crs, target_crs, ordinate1, ordinate2)
}

/// Selections and raw fields of the coordinate converter, with its latest result
#[derive(Debug, Clone)]
pub struct CoordinateForm<E = Proj4Engine> {
    converter: CoordinateConverter<E>,
    pub country: Country,
    pub source_crs: String,
    pub target_crs: String,
    /// Longitude or easting
    pub ordinate1: String,
    /// Latitude or northing
    pub ordinate2: String,
    result: Option<ConversionResult>,
}

impl Default for CoordinateForm<Proj4Engine> {
    fn default() -> Self {
        Self::new(Country::default(), DEFAULT_SOURCE_CRS, DEFAULT_TARGET_CRS)
    }
}

impl CoordinateForm<Proj4Engine> {
    pub fn new(country: Country, source_crs: &str, target_crs: &str) -> Self {
        Self::with_converter(CoordinateConverter::new(), country, source_crs, target_crs)
    }
}

impl<E: ProjectionEngine> CoordinateForm<E> {
    pub fn with_converter(
        converter: CoordinateConverter<E>,
        country: Country,
        source_crs: &str,
        target_crs: &str,
    ) -> Self {
        Self {
            converter,
            country,
            source_crs: source_crs.to_string(),
            target_crs: target_crs.to_string(),
            ordinate1: String::new(),
            ordinate2: String::new(),
            result: None,
        }
    }

    /// Run a conversion on the current fields, replacing any previous result
    pub fn convert(&mut self) -> &ConversionResult {
        let result = self.converter.convert(
            self.country,
            &self.source_crs,
            &self.target_crs,
            &self.ordinate1,
            &self.ordinate2,
        );
        self.result.insert(result)
    }

    pub fn result(&self) -> Option<&ConversionResult> {
        self.result.as_ref()
    }
}
