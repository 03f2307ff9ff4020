//! Process configuration loaded from JSON.
//!
//! ```json
//! { "language": "es", "number": { "thousands": ".", "decimal": "," } }
//! ```
//!
//! Both fields are optional. Without `number`, separators follow the language.

use std::io::{BufRead, Write};

use serde::{Deserialize, Serialize};

use crate::{
    error::Error,
    number::NumberFormat,
    traits::Parser,
    translate::{self, Language},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub language: Language,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<NumberFormat>,
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    pub fn with_number_format(mut self, number: NumberFormat) -> Self {
        self.number = Some(number);
        self
    }

    /// Separators for `format_number`: the explicit ones, else the language preset.
    pub fn number_format(&self) -> NumberFormat {
        self.number
            .unwrap_or_else(|| NumberFormat::for_language(self.language))
    }

    /// Installs the language process-wide.
    pub fn apply(&self) {
        log::debug!(
            "applying settings: language={}, number={:?}",
            self.language,
            self.number_format()
        );
        translate::use_language(self.language);
    }
}

impl Parser for Settings {
    fn from_reader<R: BufRead>(reader: R) -> Result<Self, Error> {
        let settings: Settings = serde_json::from_reader(reader)?;
        log::debug!("loaded settings for language {}", settings.language);
        Ok(settings)
    }

    fn to_writer<W: Write>(&self, mut writer: W) -> Result<(), Error> {
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_fields_missing() {
        let settings = Settings::from_str("{}").unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.number_format(), NumberFormat::default());
    }

    #[test]
    fn test_language_preset_separators() {
        let settings = Settings::from_str(r#"{ "language": "de" }"#).unwrap();
        assert_eq!(settings.language, Language::De);
        assert_eq!(settings.number_format(), NumberFormat::new('.', ','));
    }

    #[test]
    fn test_explicit_separators_win() {
        let settings = Settings::from_str(
            r#"{ "language": "fr", "number": { "thousands": "'", "decimal": "." } }"#,
        )
        .unwrap();
        assert_eq!(settings.number_format(), NumberFormat::new('\'', '.'));
    }

    #[test]
    fn test_partial_number_format() {
        let settings = Settings::from_str(r#"{ "number": { "thousands": " " } }"#).unwrap();
        assert_eq!(settings.number_format(), NumberFormat::new(' ', '.'));
    }

    #[test]
    fn test_rejects_unknown_language() {
        let result = Settings::from_str(r#"{ "language": "xx" }"#);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_text_round_trip() {
        let settings = Settings::new()
            .with_language(Language::Pt)
            .with_number_format(NumberFormat::new('.', ','));
        let text = settings.to_text().unwrap();
        assert!(text.contains("\"pt\""));
        assert_eq!(Settings::from_str(&text).unwrap(), settings);
        assert_eq!(Settings::from_bytes(text.as_bytes()).unwrap(), settings);
    }
}
