use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context as _;
use clap::Parser;
use report_merge::{MergeConfig, MergeOutcome, Merger, OutputMode, OutputTarget};

use crate::{print_debug, print_success, print_warn};

/// Attach a benchmark result document to a base JSON report.
///
/// Without arguments, reads `base.json` and `fiorandomreadlatency_output.json`
/// from the current directory and writes `final.json`.
#[derive(Parser, Debug)]
#[command(name = "report-merge", author, version, about, long_about = None)]
pub struct CliArgs {
    /// JSON file with merge settings. Flags given on the command line win over it.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Base document the field is added to.
    #[arg(long)]
    pub base: Option<PathBuf>,
    /// Document attached under the field.
    #[arg(long)]
    pub secondary: Option<PathBuf>,
    /// Where the merged document is written in file mode.
    #[arg(long)]
    pub output: Option<PathBuf>,
    /// Top-level key the secondary document is stored under.
    #[arg(long)]
    pub field: Option<String>,
    /// `file` writes the merged document, `console` prints the secondary document.
    #[arg(long)]
    pub mode: Option<OutputMode>,
    /// Pretty-print the merged document.
    #[arg(long)]
    pub pretty: bool,
}

impl CliArgs {
    /// Builds the merge settings: defaults, then the config file, then flags.
    pub fn resolve(&self) -> anyhow::Result<MergeConfig> {
        let mut config = match &self.config {
            Some(path) => MergeConfig::load(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => MergeConfig::default(),
        };

        if let Some(base) = &self.base {
            config.base_path = base.clone();
        }
        if let Some(secondary) = &self.secondary {
            config.secondary_path = secondary.clone();
        }
        if let Some(output) = &self.output {
            config.output_path = output.clone();
        }
        if let Some(field) = &self.field {
            config.field = field.clone();
        }
        if let Some(mode) = self.mode {
            config.mode = mode;
        }
        if self.pretty {
            config.pretty = true;
        }

        if config.field.is_empty() {
            anyhow::bail!("The field name must not be empty");
        }
        if config.mode == OutputMode::Console && self.output.is_some() {
            print_warn!("--output is ignored in console mode");
        }

        Ok(config)
    }
}

pub fn cli_main(args: CliArgs) -> anyhow::Result<MergeOutcome> {
    let time_begin = Instant::now();
    let config = args.resolve()?;
    print_debug!("Resolved configuration: {:?}", config);

    let outcome = Merger::new(config.clone())
        .run()
        .context("Merge failed")?;

    if let OutputTarget::File(path) = &outcome.target {
        print_success!(
            "Wrote {} ({} top-level keys, '{}' {})",
            path.display(),
            outcome.keys,
            config.field,
            if outcome.replaced { "replaced" } else { "added" }
        );
    }
    print_debug!("Time elapsed: {:?}", time_begin.elapsed());

    Ok(outcome)
}

#[cfg(test)]
mod test {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_no_arguments_keeps_fixed_paths() {
        let args = CliArgs::try_parse_from(["report-merge"]).unwrap();
        let config = args.resolve().unwrap();
        assert_eq!(config, MergeConfig::default());
        assert_eq!(config.output(), Some(Path::new("final.json")));
    }

    #[test]
    fn test_flags_override_defaults() {
        let args = CliArgs::try_parse_from([
            "report-merge",
            "--base",
            "host.json",
            "--secondary",
            "fio.json",
            "--output",
            "report.json",
            "--field",
            "randread",
            "--pretty",
        ])
        .unwrap();
        let config = args.resolve().unwrap();
        assert_eq!(config.base_path, Path::new("host.json"));
        assert_eq!(config.secondary_path, Path::new("fio.json"));
        assert_eq!(config.output_path, Path::new("report.json"));
        assert_eq!(config.field, "randread");
        assert_eq!(config.mode, OutputMode::File);
        assert!(config.pretty);
    }

    #[test]
    fn test_console_mode() {
        let args = CliArgs::try_parse_from(["report-merge", "--mode", "console"]).unwrap();
        let config = args.resolve().unwrap();
        assert_eq!(config.mode, OutputMode::Console);
        assert_eq!(config.output(), None);
    }

    #[test]
    fn test_unknown_mode_is_rejected() {
        assert!(CliArgs::try_parse_from(["report-merge", "--mode", "stdout"]).is_err());
    }

    #[test]
    fn test_flags_win_over_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("merge.json");
        std::fs::write(&path, r#"{ "field": "from_file", "base_path": "file_base.json" }"#)
            .unwrap();

        let args = CliArgs::try_parse_from([
            "report-merge",
            "--config",
            path.to_str().unwrap(),
            "--field",
            "from_flag",
        ])
        .unwrap();
        let config = args.resolve().unwrap();
        assert_eq!(config.field, "from_flag");
        assert_eq!(config.base_path, Path::new("file_base.json"));
    }

    #[test]
    fn test_empty_field_is_rejected() {
        let args = CliArgs::try_parse_from(["report-merge", "--field", ""]).unwrap();
        assert!(args.resolve().is_err());
    }
}
