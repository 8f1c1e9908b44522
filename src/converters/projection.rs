use proj4rs::proj::Proj;
use proj4rs::transform::transform;
use tracing::trace;

use crate::error::ConversionError;

/// Cartographic engine that reprojects a point between two proj-string definitions
///
/// Points are `[x, y]` ordered as longitude/easting then latitude/northing. Geographic
/// ordinates are in decimal degrees on both sides of the call.
pub trait ProjectionEngine {
    fn project(
        &self,
        source_definition: &str,
        target_definition: &str,
        point: [f64; 2],
    ) -> Result<[f64; 2], ConversionError>;
}

/// Engine backed by `proj4rs`
#[derive(Debug, Default, Clone, Copy)]
pub struct Proj4Engine;

impl Proj4Engine {
    pub fn new() -> Self {
        Self
    }

    fn parse(definition: &str) -> Result<Proj, ConversionError> {
        Proj::from_proj_string(definition).map_err(|e| {
            ConversionError::projection(format!("Unsupported definition '{}': {}", definition, e))
        })
    }
}

impl ProjectionEngine for Proj4Engine {
    fn project(
        &self,
        source_definition: &str,
        target_definition: &str,
        point: [f64; 2],
    ) -> Result<[f64; 2], ConversionError> {
        let source = Self::parse(source_definition)?;
        let target = Self::parse(target_definition)?;

        // proj4rs works on radians for geographic systems
        let [x, y] = point;
        let mut xyz = if source.is_latlong() {
            (x.to_radians(), y.to_radians(), 0.0)
        } else {
            (x, y, 0.0)
        };

        trace!(
            source = source_definition,
            target = target_definition,
            x,
            y,
            "Invoking projection engine"
        );

        transform(&source, &target, &mut xyz)
            .map_err(|e| ConversionError::projection(e.to_string()))?;

        let (mut out_x, mut out_y, _) = xyz;
        if target.is_latlong() {
            out_x = out_x.to_degrees();
            out_y = out_y.to_degrees();
        }

        if !out_x.is_finite() || !out_y.is_finite() {
            return Err(ConversionError::projection(
                "Projection produced a non-finite coordinate",
            ));
        }

        Ok([out_x, out_y])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCategory;
    use crate::models::crs::lookup;

    fn definition(id: &str) -> &'static str {
        lookup(id).unwrap().definition
    }

    #[test]
    fn test_wgs84_to_utm36n_kampala() {
        let engine = Proj4Engine::new();
        let [easting, northing] = engine
            .project(
                definition("EPSG:4326"),
                definition("EPSG:32636"),
                [32.58252, 0.347596],
            )
            .unwrap();

        // Kampala sits about 46 km west of the zone 36 central meridian
        assert!((easting - 453_545.0).abs() < 100.0, "easting {}", easting);
        assert!((northing - 38_420.0).abs() < 100.0, "northing {}", northing);
    }

    #[test]
    fn test_utm_round_trip() {
        let engine = Proj4Engine::new();
        let projected = engine
            .project(
                definition("EPSG:4326"),
                definition("EPSG:32736"),
                [36.682995, -3.386925],
            )
            .unwrap();
        let [lon, lat] = engine
            .project(definition("EPSG:32736"), definition("EPSG:4326"), projected)
            .unwrap();

        assert!((lon - 36.682995).abs() < 1e-6);
        assert!((lat + 3.386925).abs() < 1e-6);
    }

    #[test]
    fn test_datum_shift_moves_point() {
        let engine = Proj4Engine::new();
        let wgs84 = engine
            .project(
                definition("EPSG:4326"),
                definition("EPSG:32736"),
                [36.8219, -1.2921],
            )
            .unwrap();
        let arc1960 = engine
            .project(
                definition("EPSG:4326"),
                definition("EPSG:21036"),
                [36.8219, -1.2921],
            )
            .unwrap();

        // Same zone, different datum: the shift is a few hundred metres at most
        let shift = ((wgs84[0] - arc1960[0]).powi(2) + (wgs84[1] - arc1960[1]).powi(2)).sqrt();
        assert!(shift > 1.0 && shift < 1_000.0, "shift {}", shift);
    }

    #[test]
    fn test_invalid_definition() {
        let err = Proj4Engine::new()
            .project("+proj=nonsense", definition("EPSG:4326"), [0.0, 0.0])
            .unwrap_err();
        assert_eq!(err.category(), ErrorCategory::ProjectionFailure);
    }
}
