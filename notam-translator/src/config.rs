use config::{Config, ConfigError, File, FileFormat};
use extractors::{CenturyRule, NotamExtractorConfig};
use serde::{Deserialize, Serialize};
use shared_types::ExtractionError;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct TranslatorConfig {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub timestamps: TimestampConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum CenturyMode {
    #[default]
    Pivot,
    TwentyFirst,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct TimestampConfig {
    #[serde(default)]
    pub century: CenturyMode,
    #[serde(default = "default_pivot")]
    pub pivot: u8,
}

fn default_pivot() -> u8 {
    CenturyRule::DEFAULT_PIVOT
}

impl Default for TimestampConfig {
    fn default() -> Self {
        Self {
            century: CenturyMode::Pivot,
            pivot: default_pivot(),
        }
    }
}

impl TimestampConfig {
    pub fn century_rule(&self) -> Result<CenturyRule, ExtractionError> {
        match self.century {
            CenturyMode::Pivot => CenturyRule::Pivot(self.pivot).validate(),
            CenturyMode::TwentyFirst => Ok(CenturyRule::TwentyFirst),
        }
    }
}

impl TranslatorConfig {
    /// Load from an explicit path, or from the default location when it exists.
    ///
    /// An explicit path must exist; a missing default file means built-in defaults.
    pub fn load(explicit: Option<&Path>) -> Result<(Self, Option<PathBuf>), ConfigError> {
        let (config_path, required) = match explicit {
            Some(path) => (path.to_path_buf(), true),
            None => (get_config_path(), false),
        };

        if !required && !config_path.exists() {
            return Ok((Self::default(), None));
        }

        let builder = Config::builder()
            .add_source(File::from(config_path.clone()).format(FileFormat::Toml).required(required))
            .build()?;

        let config: TranslatorConfig = builder.try_deserialize()?;

        Ok((config, Some(config_path)))
    }

    pub fn extractor_config(&self) -> Result<NotamExtractorConfig, ExtractionError> {
        Ok(NotamExtractorConfig {
            century: self.timestamps.century_rule()?,
        })
    }
}

pub fn get_config_path() -> PathBuf {
    if let Some(config_dir) = dirs::config_dir() {
        config_dir.join("notam-translator").join("config.toml")
    } else {
        PathBuf::from("notam-translator.toml")
    }
}
