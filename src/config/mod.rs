pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::domain::model::DEFAULT_WORD_LENGTH;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use toml_config::{TomlConfig, DEFAULT_WORD_LIST_PATH, MAX_WORD_LENGTH};

#[cfg(feature = "cli")]
use clap::{Parser, ValueEnum};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "word-filter")]
#[command(about = "Keeps only the words of one length in a word list, rewriting it in place")]
pub struct CliConfig {
    /// Word list to filter [default: popularity_raw.txt]
    pub path: Option<String>,

    /// Write the filtered list here instead of overwriting PATH
    #[arg(short, long)]
    pub output: Option<String>,

    /// Number of characters a word must have to be kept [default: 5]
    #[arg(short, long)]
    pub length: Option<usize>,

    /// Write through a temp file and rename it over the destination
    #[arg(long)]
    pub atomic: bool,

    /// Path to a TOML configuration file; flags override its values
    #[arg(short, long)]
    pub config: Option<String>,

    /// Filter and report without writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Print the run report as JSON on stdout
    #[arg(long)]
    pub json: bool,

    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log process CPU and memory after each phase")]
    pub monitor: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Layers the flags over the config file (if any) over the defaults.
    pub fn resolve(&self) -> Result<FilterSettings> {
        let mut settings = match &self.config {
            Some(path) => {
                let file = TomlConfig::from_file(path)?;
                file.validate()?;
                FilterSettings::from(&file)
            }
            None => FilterSettings::default(),
        };

        if let Some(path) = &self.path {
            settings.source = path.clone();
        }
        if let Some(output) = &self.output {
            settings.destination = Some(output.clone());
        }
        if let Some(length) = self.length {
            settings.word_length = length;
        }
        settings.atomic_write |= self.atomic;
        settings.dry_run |= self.dry_run;
        settings.monitor |= self.monitor;

        Ok(settings)
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.path {
            validation::validate_path("path", path)?;
        }
        if let Some(output) = &self.output {
            validation::validate_path("output", output)?;
        }
        if let Some(length) = self.length {
            validation::validate_range("length", length, 1, MAX_WORD_LENGTH)?;
        }
        if let Some(config) = &self.config {
            validation::validate_path("config", config)?;
        }
        Ok(())
    }
}

/// Effective settings for one run, after every configuration layer is applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSettings {
    pub source: String,
    pub destination: Option<String>,
    pub word_length: usize,
    pub atomic_write: bool,
    pub dry_run: bool,
    pub monitor: bool,
    pub log_level: Option<String>,
}

impl Default for FilterSettings {
    fn default() -> Self {
        Self {
            source: DEFAULT_WORD_LIST_PATH.to_string(),
            destination: None,
            word_length: DEFAULT_WORD_LENGTH,
            atomic_write: false,
            dry_run: false,
            monitor: false,
            log_level: None,
        }
    }
}

impl FilterSettings {
    pub fn in_place(path: impl Into<String>) -> Self {
        Self {
            source: path.into(),
            ..Self::default()
        }
    }
}

impl From<&TomlConfig> for FilterSettings {
    fn from(file: &TomlConfig) -> Self {
        // No output_path keeps the run in place even when PATH is overridden.
        Self {
            source: file.source_path().to_string(),
            destination: file.load.output_path.clone(),
            word_length: file.word_length(),
            atomic_write: file.atomic_write(),
            dry_run: file.dry_run(),
            monitor: file.monitoring_enabled(),
            log_level: file.log_level().map(str::to_string),
        }
    }
}

impl Validate for FilterSettings {
    fn validate(&self) -> Result<()> {
        validation::validate_path("path", &self.source)?;
        if let Some(destination) = &self.destination {
            validation::validate_path("output", destination)?;
        }
        validation::validate_range("length", self.word_length, 1, MAX_WORD_LENGTH)?;
        if let Some(level) = &self.log_level {
            validation::validate_log_level("log_level", level)?;
        }
        Ok(())
    }
}

impl ConfigProvider for FilterSettings {
    fn source_path(&self) -> &str {
        &self.source
    }

    fn destination_path(&self) -> &str {
        self.destination.as_deref().unwrap_or(&self.source)
    }

    fn word_length(&self) -> usize {
        self.word_length
    }

    fn atomic_write(&self) -> bool {
        self.atomic_write
    }

    fn dry_run(&self) -> bool {
        self.dry_run
    }
}
