// Measurement unit formatting and parsing
// Format: raw value -> "<magnitude> <prefix><suffix>"
// Parse: typed text with an optional prefix letter -> raw value

pub mod error;
pub mod formatter;
pub mod parser;
pub mod types;


pub use error::UnitError;
pub use formatter::{pretty_print, try_pretty_print, INVALID_UNIT};
pub use parser::{parse_string, try_parse};
pub use types::{ScaledValue, Scaling, Unit, UnitKind};
