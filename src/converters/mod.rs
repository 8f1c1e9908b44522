pub mod crs_converter;
pub mod dms_converter;
pub mod projection;

pub use crs_converter::{convert, CoordinateConverter, CoordinateForm};
pub use dms_converter::{
    convert_decimal_to_dms, convert_dms_to_decimal, ConversionMode, DmsConverter, DmsFields,
};
pub use projection::{Proj4Engine, ProjectionEngine};
