pub mod country;
pub mod crs;
pub mod dms;
pub mod result;

pub use country::Country;
pub use crs::{CrsDescriptor, Datum, CRS_REGISTRY};
pub use dms::{DecimalCoordinate, DmsComponents, Hemisphere};
pub use result::{ConversionFailure, ConversionResult, ConversionSuccess, CrsContext};
