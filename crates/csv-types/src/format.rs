//! Text format configuration.
//!
//! `TextFormat` describes how one line of delimited text is tokenized and how
//! a record is written back: delimiter, quote and escape characters, quoting
//! policy, record terminator and field trimming. The codec only reads it.

use serde::Deserialize;
use std::str::FromStr;

/// Error type for invalid format settings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    /// Setting is not a single ASCII character
    #[error("CSV: {name} must be a single ASCII character, got {value:?}")]
    InvalidChar { name: &'static str, value: String },

    /// Two settings that must differ use the same character
    #[error("CSV: {first} and {second} must differ, both are {value:?}")]
    Conflict {
        first: &'static str,
        second: &'static str,
        value: char,
    },

    /// Setting is a line break
    #[error("CSV: {name} cannot be a line break")]
    LineBreak { name: &'static str },

    /// Preset name not recognized
    #[error("CSV: unknown format preset {0:?} (expected default, rfc4180 or tdf)")]
    UnknownPreset(String),
}

/// When fields are wrapped in quotes on write.
///
/// Reading always recognizes quotes, whatever the style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuoteStyle {
    Always,
    #[default]
    Necessary,
    NonNumeric,
    Never,
}

impl QuoteStyle {
    fn to_csv(self) -> csv::QuoteStyle {
        match self {
            Self::Always => csv::QuoteStyle::Always,
            Self::Necessary => csv::QuoteStyle::Necessary,
            Self::NonNumeric => csv::QuoteStyle::NonNumeric,
            Self::Never => csv::QuoteStyle::Never,
        }
    }
}

/// Line break written after each record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordTerminator {
    #[default]
    Lf,
    Crlf,
    Cr,
}

impl RecordTerminator {
    fn to_csv(self) -> csv::Terminator {
        match self {
            Self::Lf => csv::Terminator::Any(b'\n'),
            Self::Crlf => csv::Terminator::CRLF,
            Self::Cr => csv::Terminator::Any(b'\r'),
        }
    }
}

/// Named starting points for a `TextFormat`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormatPreset {
    /// Comma separated, doubled quotes, LF
    #[default]
    Default,
    /// Comma separated, doubled quotes, CRLF
    Rfc4180,
    /// Tab separated, trimmed fields, CRLF
    Tdf,
}

impl FormatPreset {
    pub fn format(self) -> TextFormat {
        match self {
            Self::Default => TextFormat::default(),
            Self::Rfc4180 => TextFormat::rfc4180(),
            Self::Tdf => TextFormat::tdf(),
        }
    }
}

impl FromStr for FormatPreset {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "default" | "csv" => Ok(Self::Default),
            "rfc4180" => Ok(Self::Rfc4180),
            "tdf" | "tsv" => Ok(Self::Tdf),
            _ => Err(FormatError::UnknownPreset(s.to_string())),
        }
    }
}

/// Delimited text format for a single record.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "TextFormatConfig")]
pub struct TextFormat {
    /// Field delimiter
    pub delimiter: u8,

    /// Quote character
    pub quote: u8,

    /// Escape for quotes inside quoted fields; `None` means quotes are doubled
    pub escape: Option<u8>,

    pub quote_style: QuoteStyle,

    pub terminator: RecordTerminator,

    /// Strip whitespace around raw fields when reading
    pub trim: bool,
}

impl Default for TextFormat {
    fn default() -> Self {
        Self {
            delimiter: b',',
            quote: b'"',
            escape: None,
            quote_style: QuoteStyle::Necessary,
            terminator: RecordTerminator::Lf,
            trim: false,
        }
    }
}

impl TextFormat {
    /// RFC 4180: comma separated, doubled quotes, CRLF terminated.
    pub fn rfc4180() -> Self {
        Self {
            terminator: RecordTerminator::Crlf,
            ..Self::default()
        }
    }

    /// Tab-delimited with surrounding whitespace ignored.
    pub fn tdf() -> Self {
        Self {
            delimiter: b'\t',
            terminator: RecordTerminator::Crlf,
            trim: true,
            ..Self::default()
        }
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_quote(mut self, quote: u8) -> Self {
        self.quote = quote;
        self
    }

    pub fn with_escape(mut self, escape: Option<u8>) -> Self {
        self.escape = escape;
        self
    }

    pub fn with_quote_style(mut self, quote_style: QuoteStyle) -> Self {
        self.quote_style = quote_style;
        self
    }

    pub fn with_terminator(mut self, terminator: RecordTerminator) -> Self {
        self.terminator = terminator;
        self
    }

    pub fn with_trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }

    /// Check that the configured characters can tokenize unambiguously.
    pub fn validate(&self) -> Result<(), FormatError> {
        let mut chars = vec![("delimiter", self.delimiter), ("quote", self.quote)];
        if let Some(escape) = self.escape {
            chars.push(("escape", escape));
        }
        for &(name, c) in &chars {
            if !c.is_ascii() {
                return Err(FormatError::InvalidChar {
                    name,
                    value: char::from(c).to_string(),
                });
            }
            if c == b'\n' || c == b'\r' {
                return Err(FormatError::LineBreak { name });
            }
        }
        if self.delimiter == self.quote {
            return Err(FormatError::Conflict {
                first: "delimiter",
                second: "quote",
                value: self.delimiter as char,
            });
        }
        if self.escape == Some(self.delimiter) {
            return Err(FormatError::Conflict {
                first: "delimiter",
                second: "escape",
                value: self.delimiter as char,
            });
        }
        Ok(())
    }

    /// Reader for a single line. Headers are never consumed.
    pub(crate) fn reader_builder(&self) -> csv::ReaderBuilder {
        let mut builder = csv::ReaderBuilder::new();
        builder
            .has_headers(false)
            .flexible(true)
            .delimiter(self.delimiter)
            .quote(self.quote)
            .quoting(true)
            .double_quote(self.escape.is_none())
            .escape(self.escape)
            .terminator(csv::Terminator::CRLF)
            .trim(if self.trim {
                csv::Trim::Fields
            } else {
                csv::Trim::None
            });
        builder
    }

    pub(crate) fn writer_builder(&self) -> csv::WriterBuilder {
        let mut builder = csv::WriterBuilder::new();
        builder
            .has_headers(false)
            .flexible(true)
            .delimiter(self.delimiter)
            .quote(self.quote)
            .quote_style(self.quote_style.to_csv())
            .double_quote(self.escape.is_none())
            .escape(self.escape.unwrap_or(b'\\'))
            .terminator(self.terminator.to_csv());
        builder
    }
}

/// Parse a format character from config text.
///
/// Accepts a single ASCII character, or `\t` written as an escape sequence.
pub fn parse_format_char(name: &'static str, value: &str) -> Result<u8, FormatError> {
    match value {
        "\\t" | "\t" => Ok(b'\t'),
        s if s.len() == 1 && s.is_ascii() => Ok(s.as_bytes()[0]),
        other => Err(FormatError::InvalidChar {
            name,
            value: other.to_string(),
        }),
    }
}

/// Config-file shape of a `TextFormat`: a preset plus optional overrides.
///
/// ```yaml
/// preset: rfc4180
/// delimiter: ";"
/// escape: "\\"
/// quote_style: always
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TextFormatConfig {
    pub preset: FormatPreset,
    pub delimiter: Option<String>,
    pub quote: Option<String>,
    pub escape: Option<String>,
    pub quote_style: Option<QuoteStyle>,
    pub terminator: Option<RecordTerminator>,
    pub trim: Option<bool>,
}

impl TryFrom<TextFormatConfig> for TextFormat {
    type Error = FormatError;

    fn try_from(config: TextFormatConfig) -> Result<Self, Self::Error> {
        let mut format = config.preset.format();
        if let Some(delimiter) = config.delimiter {
            format.delimiter = parse_format_char("delimiter", &delimiter)?;
        }
        if let Some(quote) = config.quote {
            format.quote = parse_format_char("quote", &quote)?;
        }
        if let Some(escape) = config.escape {
            format.escape = Some(parse_format_char("escape", &escape)?);
        }
        if let Some(quote_style) = config.quote_style {
            format.quote_style = quote_style;
        }
        if let Some(terminator) = config.terminator {
            format.terminator = terminator;
        }
        if let Some(trim) = config.trim {
            format.trim = trim;
        }
        format.validate()?;
        Ok(format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        let default = TextFormat::default();
        assert_eq!(default.delimiter, b',');
        assert_eq!(default.quote, b'"');
        assert_eq!(default.escape, None);
        assert_eq!(default.terminator, RecordTerminator::Lf);

        assert_eq!(TextFormat::rfc4180().terminator, RecordTerminator::Crlf);

        let tdf = TextFormat::tdf();
        assert_eq!(tdf.delimiter, b'\t');
        assert!(tdf.trim);

        assert_eq!(FormatPreset::Tdf.format(), tdf);
    }

    #[test]
    fn test_preset_from_str() {
        assert_eq!("RFC4180".parse::<FormatPreset>(), Ok(FormatPreset::Rfc4180));
        assert_eq!("tsv".parse::<FormatPreset>(), Ok(FormatPreset::Tdf));
        assert_eq!(
            "excel".parse::<FormatPreset>(),
            Err(FormatError::UnknownPreset("excel".to_string()))
        );
    }

    #[test]
    fn test_parse_format_char() {
        assert_eq!(parse_format_char("delimiter", ";"), Ok(b';'));
        assert_eq!(parse_format_char("delimiter", "\\t"), Ok(b'\t'));
        assert_eq!(parse_format_char("delimiter", "\t"), Ok(b'\t'));
        assert!(matches!(
            parse_format_char("delimiter", "::"),
            Err(FormatError::InvalidChar { name: "delimiter", .. })
        ));
        assert!(parse_format_char("quote", "").is_err());
        assert!(parse_format_char("quote", "é").is_err());
    }

    #[test]
    fn test_validate() {
        assert!(TextFormat::default().validate().is_ok());
        assert!(TextFormat::tdf().validate().is_ok());

        let err = TextFormat::default().with_quote(b',').validate().unwrap_err();
        assert_eq!(
            err,
            FormatError::Conflict {
                first: "delimiter",
                second: "quote",
                value: ','
            }
        );

        let err = TextFormat::default()
            .with_escape(Some(b','))
            .validate()
            .unwrap_err();
        assert!(matches!(err, FormatError::Conflict { second: "escape", .. }));

        let err = TextFormat::default()
            .with_delimiter(b'\n')
            .validate()
            .unwrap_err();
        assert_eq!(err, FormatError::LineBreak { name: "delimiter" });
    }

    #[test]
    fn test_validate_rejects_non_ascii() {
        let err = TextFormat::default()
            .with_delimiter(0xE9)
            .validate()
            .unwrap_err();
        assert_eq!(
            err,
            FormatError::InvalidChar {
                name: "delimiter",
                value: "é".to_string()
            }
        );

        let err = TextFormat::default()
            .with_escape(Some(0x80))
            .validate()
            .unwrap_err();
        assert!(matches!(err, FormatError::InvalidChar { name: "escape", .. }));
    }

    #[test]
    fn test_deserialize_with_overrides() {
        let yaml = r#"
preset: rfc4180
delimiter: ";"
escape: "\\"
quote_style: always
trim: true
"#;
        let format: TextFormat = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(format.delimiter, b';');
        assert_eq!(format.escape, Some(b'\\'));
        assert_eq!(format.quote_style, QuoteStyle::Always);
        assert_eq!(format.terminator, RecordTerminator::Crlf);
        assert!(format.trim);
    }

    #[test]
    fn test_deserialize_empty_is_default() {
        let format: TextFormat = serde_yaml::from_str("{}").unwrap();
        assert_eq!(format, TextFormat::default());
    }

    #[test]
    fn test_deserialize_rejects_invalid() {
        let err = serde_yaml::from_str::<TextFormat>("delimiter: \"\\\"\"\n").unwrap_err();
        assert!(err.to_string().contains("delimiter and quote must differ"));

        assert!(serde_yaml::from_str::<TextFormat>("separator: \";\"\n").is_err());
    }
}
