//! Field extraction from generated service units.
mod error;
mod fields;
mod parser;
mod words;

pub use error::{Error, Result};
pub use fields::UnitFields;
pub use parser::{UnitKey, UnitLine, parse_unit_line};
pub use words::{SplitError, split_words};
