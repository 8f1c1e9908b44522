pub mod constants;
pub mod coordinates;
pub mod parsing;

pub use constants::*;
pub use coordinates::{decimal_to_dms, decompose, dms_to_decimal, parse_dms};
pub use parsing::{parse_fields, parse_finite};
