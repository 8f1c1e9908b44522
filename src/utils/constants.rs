/// Upper geographic bounds in decimal degrees
pub const MAX_LAT: f64 = 90.0;
pub const MAX_LON: f64 = 180.0;

/// Display precision (decimal places)
pub const CRS_OUTPUT_PRECISION: usize = 6;
pub const DMS_SECONDS_PRECISION: usize = 4;
pub const DECIMAL_OUTPUT_PRECISION: usize = 8;

/// Registry identifiers
pub const EPSG_WGS84: &str = "EPSG:4326";
pub const EPSG_ARC1960_UTM36S: &str = "EPSG:21036";
pub const EPSG_ARC1960_UTM37S: &str = "EPSG:21037";
pub const EPSG_ADINDAN_UTM36N: &str = "EPSG:20136";
pub const EPSG_ADINDAN_UTM37N: &str = "EPSG:20137";
pub const EPSG_WGS84_UTM36S: &str = "EPSG:32736";
pub const EPSG_WGS84_UTM36N: &str = "EPSG:32636";

/// Initial selections of the coordinate converter
pub const DEFAULT_COUNTRY: &str = "uganda";
pub const DEFAULT_SOURCE_CRS: &str = EPSG_WGS84;
pub const DEFAULT_TARGET_CRS: &str = EPSG_WGS84_UTM36N;

/// Coordinate converter messages
pub const MSG_CRS_MISSING: &str = "Please enter both coordinates.";
pub const MSG_CRS_NON_NUMERIC: &str = "Please enter valid numeric coordinates.";
pub const NOTE_SAME_CRS: &str = "No conversion needed - same coordinate system";
pub const NOTE_PROJECTED: &str = "Precise conversion using the projection engine";

/// DMS converter messages
pub const MSG_DECIMAL_MISSING: &str =
    "Please enter both latitude and longitude in decimal degrees.";
pub const MSG_DECIMAL_NON_NUMERIC: &str =
    "Please enter valid numeric values for latitude and longitude.";
pub const MSG_DECIMAL_OUT_OF_RANGE: &str =
    "Coordinates out of range. Latitude must be between -90° and 90°, longitude between -180° and 180°.";
pub const MSG_DMS_MISSING: &str =
    "Please fill in all DMS fields (degrees, minutes, seconds) for both latitude and longitude.";
pub const MSG_DMS_NON_NUMERIC: &str = "Please enter valid numeric values for all DMS components.";
pub const MSG_DMS_OUT_OF_RANGE: &str =
    "Invalid DMS values. Check ranges: degrees (0-90° for lat, 0-180° for lon), minutes/seconds (0-59).";
pub const NOTE_DECIMAL_TO_DMS: &str = "Decimal degrees converted to degrees-minutes-seconds format";
pub const NOTE_DMS_TO_DECIMAL: &str = "DMS format converted to decimal degrees";

/// Configuration
pub const CONFIG_FILE_STEM: &str = "georesolve";
pub const CONFIG_ENV_PREFIX: &str = "GEORESOLVE";
