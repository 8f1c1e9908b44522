pub mod cli;
pub mod config;
pub mod converters;
pub mod error;
pub mod models;
pub mod utils;

pub use converters::{
    convert, convert_decimal_to_dms, convert_dms_to_decimal, CoordinateConverter, DmsConverter,
};
pub use error::{ConversionError, ErrorCategory, GeoResolveError, Result};
pub use models::ConversionResult;
