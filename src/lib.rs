pub mod case;
pub mod cli;
pub mod config;
pub mod converter;
pub mod error;

pub use case::{convert, guess, join, segment, Casing, Source, Style, StyleDescriptor};
pub use config::Config;
pub use converter::Converter;
pub use error::InvalidStyleError;

use serde::Serialize;

/// Convert `input` from any mix of camel, snake and kebab casing into `style`.
///
/// `style` is matched against `camel`, `snake` and `kebab` ignoring case, and is
/// validated before the input is looked at. Any input string is accepted.
///
/// ```
/// assert_eq!(caseconv::unjumble("HTTPServer", "snake").unwrap(), "http_server");
/// assert!(caseconv::unjumble("foo", "bogus").is_err());
/// ```
pub fn unjumble(input: &str, style: &str) -> Result<String, InvalidStyleError> {
    let style = Style::from_name(style)?;
    Ok(convert(input, Source::Jumbled, style))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conversion {
    pub input: String,
    pub output: String,
    pub style: Style,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Guess {
    pub input: String,
    pub style: Style,
}
