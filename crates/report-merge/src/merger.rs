use std::path::Path;

use derive_new::new;

use crate::config::{MergeConfig, OutputMode};
use crate::document::{attach, load_document};
use crate::Result;
use crate::output::OutputTarget;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeOutcome {
    pub target: OutputTarget,
    /// Number of top-level keys in the merged document.
    pub keys: usize,
    /// Whether the base document already had a value under the field.
    pub replaced: bool,
}

#[derive(Debug, Clone, new)]
pub struct Merger {
    config: MergeConfig,
}

impl Merger {
    /// Loads both documents, attaches the secondary one to the base and emits
    /// the result to the configured target.
    ///
    /// Any failure aborts the run. Nothing is written unless both documents
    /// parsed and the attachment succeeded.
    pub fn run(&self) -> Result<MergeOutcome> {
        let config = &self.config;
        let target = OutputTarget::from_config(config);

        let base = load_document(&config.base_path)?;
        let secondary = load_document(&config.secondary_path)?;

        let replaced = base.get(&config.field).is_some();
        let merged = attach(base, &config.field, secondary)?;
        if replaced {
            log::warn!(
                "Base document already has a '{}' field, it will be overwritten",
                config.field
            );
        }
        let keys = merged.as_object().map_or(0, |map| map.len());

        target.emit(&merged, &config.field, config.pretty)?;
        log::info!(
            "Attached {} to {} under '{}', output: {}",
            config.secondary_path.display(),
            config.base_path.display(),
            config.field,
            target
        );

        Ok(MergeOutcome {
            target,
            keys,
            replaced,
        })
    }
}

/// Merges `secondary_path` into `base_path` under the default field.
///
/// With an `output` path the merged document is written there. Without one
/// the secondary document is printed to standard output instead.
pub fn merge(
    base_path: &Path,
    secondary_path: &Path,
    output: Option<&Path>,
) -> Result<MergeOutcome> {
    let mut config = MergeConfig {
        base_path: base_path.to_path_buf(),
        secondary_path: secondary_path.to_path_buf(),
        ..Default::default()
    };
    match output {
        Some(path) => config.output_path = path.to_path_buf(),
        None => config.mode = OutputMode::Console,
    }
    Merger::new(config).run()
}
