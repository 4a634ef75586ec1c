use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::config::MergeConfig;
use crate::document::{render, write_document};
use crate::Result;
use crate::error::MergeError;

const CONSOLE_NAME: &str = "<stdout>";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// Write the merged document to a file.
    File(PathBuf),
    /// Print the secondary document to standard output.
    Console,
}

impl OutputTarget {
    pub fn from_path(path: Option<&Path>) -> Self {
        match path {
            Some(path) => OutputTarget::File(path.to_path_buf()),
            None => OutputTarget::Console,
        }
    }

    pub fn from_config(config: &MergeConfig) -> Self {
        Self::from_path(config.output())
    }

    /// Writes `merged` to the file, or prints the value attached under
    /// `field` to the console.
    pub fn emit(&self, merged: &Value, field: &str, pretty: bool) -> Result<()> {
        match self {
            OutputTarget::File(path) => write_document(path, merged, pretty),
            OutputTarget::Console => {
                let secondary = merged.get(field).unwrap_or(&Value::Null);
                let stdout = io::stdout();
                let mut handle = stdout.lock();
                emit_console(&mut handle, secondary)
            }
        }
    }
}

impl std::fmt::Display for OutputTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputTarget::File(path) => write!(f, "{}", path.display()),
            OutputTarget::Console => f.write_str(CONSOLE_NAME),
        }
    }
}

/// Console output is always pretty-printed, whatever the file setting.
pub(crate) fn emit_console<W: Write>(out: &mut W, secondary: &Value) -> Result<()> {
    let text = render(secondary, true)?;
    writeln!(out, "{text}")
        .and_then(|_| out.flush())
        .map_err(|source| MergeError::Write {
            path: PathBuf::from(CONSOLE_NAME),
            source,
        })
}
