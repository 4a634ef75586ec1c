use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use strum::{Display, EnumString};

use crate::Result;
use crate::error::MergeError;

pub const DEFAULT_BASE_PATH: &str = "base.json";
pub const DEFAULT_SECONDARY_PATH: &str = "fiorandomreadlatency_output.json";
pub const DEFAULT_OUTPUT_PATH: &str = "final.json";
pub const DEFAULT_FIELD: &str = "fiorandomreadlatency";

/// Where the result of a merge ends up.
///
/// `File` writes the merged document. `Console` is the legacy debug mode: it
/// prints the secondary document only and leaves the file system untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum OutputMode {
    #[default]
    File,
    Console,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MergeConfig {
    pub base_path: PathBuf,
    pub secondary_path: PathBuf,
    pub output_path: PathBuf,
    pub field: String,
    pub mode: OutputMode,
    pub pretty: bool,
}

impl Default for MergeConfig {
    fn default() -> Self {
        MergeConfig {
            base_path: PathBuf::from(DEFAULT_BASE_PATH),
            secondary_path: PathBuf::from(DEFAULT_SECONDARY_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            field: DEFAULT_FIELD.to_string(),
            mode: OutputMode::default(),
            pretty: false,
        }
    }
}

impl MergeConfig {
    /// Loads a config file. Fields absent from the file keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| MergeError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = serde_json::from_str(&contents).map_err(|source| MergeError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("Loaded merge configuration from {}", path.display());
        Ok(config)
    }

    /// Output path for file mode, `None` in console mode.
    pub fn output(&self) -> Option<&Path> {
        match self.mode {
            OutputMode::File => Some(&self.output_path),
            OutputMode::Console => None,
        }
    }
}
