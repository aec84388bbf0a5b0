pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, LogFormat};

pub use config::{cli::LocalStorage, toml_config::TomlConfig, FilterSettings};
pub use core::{
    etl::{filter_file, run_with_settings, FilterEngine},
    pipeline::WordFilterPipeline,
};
pub use domain::model::{FilterOutcome, FilterReport, WordList, DEFAULT_WORD_LENGTH};
pub use utils::error::{FilterError, Result};
