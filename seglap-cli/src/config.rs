use std::fmt::{self, Display};
use std::fs::read_to_string;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use seglap_io::{Delimiter, LengthUnit, OutputFormat};
use seglap_overlaprs::ScannerType;

/// How segment identifiers are parsed, and therefore how they sort.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum IdType {
    #[default]
    Int,
    String,
}

impl FromStr for IdType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "int" | "integer" => Ok(IdType::Int),
            "string" | "str" => Ok(IdType::String),
            _ => Err(format!(
                "Invalid id type: {}. Valid options are 'int' or 'string'",
                s
            )),
        }
    }
}

impl Display for IdType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdType::Int => write!(f, "int"),
            IdType::String => write!(f, "string"),
        }
    }
}

///
/// Settings for the `overlap` command read from a TOML file.
///
/// Every key is optional. Command-line flags take precedence over the file.
///
/// ```toml
/// minimum_shared_segments = 1
/// scanner = "pairwise"
/// id_type = "string"
/// delimiter = "comma"
/// header = true
/// format = "json"
/// unit = "years"
/// ```
///
#[derive(Deserialize, Serialize, Debug, Default, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct OverlapConfig {
    pub minimum_shared_segments: Option<usize>,
    pub scanner: Option<ScannerType>,
    pub parallel: Option<bool>,
    pub require_segments: Option<bool>,
    pub id_type: Option<IdType>,
    pub delimiter: Option<Delimiter>,
    pub header: Option<bool>,
    pub comment: Option<char>,
    pub format: Option<OutputFormat>,
    pub unit: Option<LengthUnit>,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

impl TryFrom<&Path> for OverlapConfig {
    type Error = ConfigError;

    fn try_from(path: &Path) -> ConfigResult<Self> {
        let toml_str = read_to_string(path)?;
        let config = toml::from_str(&toml_str)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Write;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[rstest]
    fn test_try_from_toml() {
        let file = write_config(
            r#"
            minimum_shared_segments = 1
            scanner = "pairwise"
            id_type = "string"
            delimiter = "comma"
            header = true
            comment = "%"
            format = "json"
            unit = "years"
            "#,
        );
        let config = OverlapConfig::try_from(file.path()).unwrap();

        assert_eq!(
            config,
            OverlapConfig {
                minimum_shared_segments: Some(1),
                scanner: Some(ScannerType::Pairwise),
                parallel: None,
                require_segments: None,
                id_type: Some(IdType::String),
                delimiter: Some(Delimiter::Comma),
                header: Some(true),
                comment: Some('%'),
                format: Some(OutputFormat::Json),
                unit: Some(LengthUnit::Years),
            }
        );
    }

    #[rstest]
    fn test_empty_toml_is_all_defaults() {
        let file = write_config("");
        let config = OverlapConfig::try_from(file.path()).unwrap();
        assert_eq!(config, OverlapConfig::default());
    }

    #[rstest]
    fn test_unknown_key_is_rejected() {
        let file = write_config("threshold = 3\n");
        let result = OverlapConfig::try_from(file.path());
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[rstest]
    fn test_missing_file_is_io_error() {
        let tempdir = tempfile::tempdir().unwrap();
        let result = OverlapConfig::try_from(tempdir.path().join("missing.toml").as_path());
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[rstest]
    #[case("int", IdType::Int)]
    #[case("String", IdType::String)]
    fn test_id_type_from_str(#[case] input: &str, #[case] expected: IdType) {
        assert_eq!(input.parse::<IdType>(), Ok(expected));
    }
}
