use crate::core::ConfigProvider;
use crate::domain::model::DEFAULT_WORD_LENGTH;
use crate::utils::error::{FilterError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

pub const DEFAULT_WORD_LIST_PATH: &str = "popularity_raw.txt";
pub const MAX_WORD_LENGTH: usize = 64;

static ENV_VAR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").unwrap());

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub filter: FilterSection,
    #[serde(default)]
    pub load: LoadSection,
    pub monitoring: Option<MonitoringConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterSection {
    #[serde(default = "default_path")]
    pub path: String,
    #[serde(default = "default_word_length")]
    pub word_length: usize,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoadSection {
    pub output_path: Option<String>,
    #[serde(default)]
    pub atomic_write: bool,
    #[serde(default)]
    pub dry_run: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    #[serde(default)]
    pub enabled: bool,
    pub log_level: Option<String>,
}

impl Default for FilterSection {
    fn default() -> Self {
        Self {
            path: default_path(),
            word_length: default_word_length(),
        }
    }
}

fn default_path() -> String {
    DEFAULT_WORD_LIST_PATH.to_string()
}

fn default_word_length() -> usize {
    DEFAULT_WORD_LENGTH
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(FilterError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| FilterError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${WORDS_DIR})，未設定的保持原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR_PATTERN
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().map(|m| m.enabled).unwrap_or(false)
    }

    pub fn log_level(&self) -> Option<&str> {
        self.monitoring.as_ref().and_then(|m| m.log_level.as_deref())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("filter.path", &self.filter.path)?;
        validation::validate_range(
            "filter.word_length",
            self.filter.word_length,
            1,
            MAX_WORD_LENGTH,
        )?;

        if let Some(output) = &self.load.output_path {
            validation::validate_path("load.output_path", output)?;
        }

        if let Some(level) = self.log_level() {
            validation::validate_log_level("monitoring.log_level", level)?;
        }

        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn source_path(&self) -> &str {
        &self.filter.path
    }

    fn destination_path(&self) -> &str {
        self.load.output_path.as_deref().unwrap_or(&self.filter.path)
    }

    fn word_length(&self) -> usize {
        self.filter.word_length
    }

    fn atomic_write(&self) -> bool {
        self.load.atomic_write
    }

    fn dry_run(&self) -> bool {
        self.load.dry_run
    }
}
