pub mod convert;
pub mod formatter;
pub mod parser;

pub use convert::{Conversion, ConversionResult};
pub use formatter::{format, format_with};
pub use parser::{parse, parse_with_report};
