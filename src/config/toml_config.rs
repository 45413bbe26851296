use crate::config::ConversionSettings;
use crate::core::converter::{default_ignored_prefixes, DEFAULT_INDENT};
use crate::core::ConfigProvider;
use crate::utils::error::{ConvertError, Result};
use crate::utils::validation::{self, Validate, MAX_INDENT};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub job: Option<JobConfig>,
    pub source: SourceConfig,
    pub load: LoadConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobConfig {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    pub input_path: String,
    #[serde(default = "default_ignored_prefixes")]
    pub ignored_prefixes: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadConfig {
    pub output_path: String,
    pub indent: Option<usize>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ConvertError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${SCORE_DIR})；未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ConvertError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn job_name(&self) -> Option<&str> {
        self.job.as_ref().and_then(|j| j.name.as_deref())
    }

    pub fn to_settings(&self) -> ConversionSettings {
        ConversionSettings {
            input_path: self.source.input_path.clone(),
            output_path: self.load.output_path.clone(),
            indent: self.indent(),
            ignored_prefixes: self.source.ignored_prefixes.clone(),
        }
    }
}

impl ConfigProvider for TomlConfig {
    fn input_path(&self) -> &str {
        &self.source.input_path
    }

    fn output_path(&self) -> &str {
        &self.load.output_path
    }

    fn indent(&self) -> usize {
        self.load.indent.unwrap_or(DEFAULT_INDENT)
    }

    fn ignored_prefixes(&self) -> &[String] {
        &self.source.ignored_prefixes
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("source.input_path", &self.source.input_path)?;
        validation::validate_path("load.output_path", &self.load.output_path)?;
        validation::validate_range("load.indent", self.indent(), 0, MAX_INDENT)?;
        validation::validate_prefixes("source.ignored_prefixes", &self.source.ignored_prefixes)?;
        Ok(())
    }
}
