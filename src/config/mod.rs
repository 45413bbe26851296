pub mod cli;
pub mod toml_config;

use crate::core::converter::{default_ignored_prefixes, DEFAULT_INDENT};
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate, MAX_INDENT};
#[cfg(feature = "cli")]
use clap::Parser;
use serde::{Deserialize, Serialize};

/// Resolved settings for one conversion, whichever front end produced them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionSettings {
    pub input_path: String,
    pub output_path: String,
    pub indent: usize,
    pub ignored_prefixes: Vec<String>,
}

impl ConversionSettings {
    pub fn new(input_path: impl Into<String>, output_path: impl Into<String>) -> Self {
        Self {
            input_path: input_path.into(),
            output_path: output_path.into(),
            indent: DEFAULT_INDENT,
            ignored_prefixes: default_ignored_prefixes(),
        }
    }
}

impl ConfigProvider for ConversionSettings {
    fn input_path(&self) -> &str {
        &self.input_path
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn indent(&self) -> usize {
        self.indent
    }

    fn ignored_prefixes(&self) -> &[String] {
        &self.ignored_prefixes
    }
}

impl Validate for ConversionSettings {
    fn validate(&self) -> Result<()> {
        validation::validate_path("input_path", &self.input_path)?;
        validation::validate_path("output_path", &self.output_path)?;
        validation::validate_range("indent", self.indent, 0, MAX_INDENT)?;
        validation::validate_prefixes("ignored_prefixes", &self.ignored_prefixes)?;
        Ok(())
    }
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "laban-json")]
#[command(about = "Convert a pipe-delimited movement score into JSON frames")]
pub struct CliConfig {
    /// Score text file to read
    pub input: Option<String>,

    /// JSON file to write (overwritten if present)
    pub output: Option<String>,

    /// TOML job file; replaces INPUT/OUTPUT and the options below
    #[arg(short, long, conflicts_with_all = ["input", "output"])]
    pub config: Option<String>,

    /// Spaces per indentation level in the JSON output
    #[arg(long, default_value_t = DEFAULT_INDENT)]
    pub indent: usize,

    /// Line prefix marking headers and comments (repeatable)
    #[arg(long = "ignore-prefix", default_values = ["TIME", "=", "//"])]
    pub ignored_prefixes: Vec<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Resolve the command line into validated settings.
    pub fn to_settings(&self) -> Result<ConversionSettings> {
        let settings = match &self.config {
            Some(path) => toml_config::TomlConfig::from_file(path)?.to_settings(),
            None => ConversionSettings {
                input_path: validation::validate_required_field("input", &self.input)?.clone(),
                output_path: validation::validate_required_field("output", &self.output)?.clone(),
                indent: self.indent,
                ignored_prefixes: self.ignored_prefixes.clone(),
            },
        };
        settings.validate()?;
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = ConversionSettings::new("in.txt", "out.json");
        assert_eq!(settings.indent(), 4);
        assert_eq!(settings.ignored_prefixes(), &["TIME", "=", "//"]);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_settings_reject_wide_indent() {
        let mut settings = ConversionSettings::new("in.txt", "out.json");
        settings.indent = 40;
        assert!(settings.validate().is_err());
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_cli_positional_paths() {
        let cli = CliConfig::parse_from(["laban-json", "dance.txt", "dance.json"]);
        let settings = cli.to_settings().unwrap();
        assert_eq!(settings, ConversionSettings::new("dance.txt", "dance.json"));
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_cli_missing_output() {
        let cli = CliConfig::parse_from(["laban-json", "dance.txt"]);
        assert!(matches!(
            cli.to_settings(),
            Err(crate::utils::error::ConvertError::MissingConfigError { .. })
        ));
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_cli_missing_job_file_is_io_failure() {
        let cli = CliConfig::parse_from(["laban-json", "--config", "no/such/job.toml"]);
        let err = cli.to_settings().unwrap_err();
        assert!(matches!(err, crate::utils::error::ConvertError::IoError(_)));
        assert_eq!(err.exit_code(), 3);
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_cli_custom_prefixes_and_indent() {
        let cli = CliConfig::parse_from([
            "laban-json",
            "a.txt",
            "a.json",
            "--indent",
            "2",
            "--ignore-prefix",
            "#",
        ]);
        let settings = cli.to_settings().unwrap();
        assert_eq!(settings.indent, 2);
        assert_eq!(settings.ignored_prefixes, vec!["#".to_string()]);
    }
}
