use crate::config::PipelineSettings;
use crate::utils::error::{Result, VoucherError};
use crate::utils::validation::{validate_path, validate_positive_number, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional settings file. Every key may be omitted; omitted keys keep the defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub pipeline: PipelineSection,
    #[serde(default)]
    pub report: ReportSection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PipelineSection {
    pub dest_path: Option<String>,
    pub transform_only: Option<bool>,
    pub silent: Option<bool>,
    pub allow_useless_vouchers: Option<bool>,
    pub strict_barcodes: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportSection {
    pub enabled: Option<bool>,
    pub top: Option<usize>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| VoucherError::ConfigError {
            message: format!("Can not read settings file {}: {}", path.as_ref().display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        let config: TomlConfig = toml::from_str(&processed_content)?;
        Ok(config)
    }

    /// 替換環境變數 (例如 ${OUTPUT_DIR})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| VoucherError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// Overlays the values present in the file onto `settings`.
    pub fn apply_to(&self, settings: &mut PipelineSettings) {
        let pipeline = &self.pipeline;
        if let Some(dest_path) = &pipeline.dest_path {
            settings.dest_path = Some(dest_path.clone());
        }
        if let Some(transform_only) = pipeline.transform_only {
            settings.transform_only = transform_only;
        }
        if let Some(silent) = pipeline.silent {
            settings.silent = silent;
        }
        if let Some(allow) = pipeline.allow_useless_vouchers {
            settings.allow_useless_vouchers = allow;
        }
        if let Some(strict) = pipeline.strict_barcodes {
            settings.strict_barcodes = strict;
        }
        if let Some(enabled) = self.report.enabled {
            settings.report = enabled;
        }
        if let Some(top) = self.report.top {
            settings.top = top;
        }
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(dest_path) = &self.pipeline.dest_path {
            validate_path("pipeline.dest_path", dest_path)?;
        }
        if let Some(top) = self.report.top {
            validate_positive_number("report.top", top, 1)?;
        }
        Ok(())
    }
}
