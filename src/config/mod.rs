#[cfg(feature = "cli")]
pub mod cli;
pub mod storage;
pub mod toml_config;

use crate::core::reporter::DEFAULT_TOP;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_positive_number, Validate};

/// Resolved settings for one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineSettings {
    pub orders_path: String,
    pub barcodes_path: String,
    /// Output directory; the current directory when `None`.
    pub dest_path: Option<String>,
    pub transform_only: bool,
    pub silent: bool,
    pub allow_useless_vouchers: bool,
    pub strict_barcodes: bool,
    pub report: bool,
    pub top: usize,
}

impl PipelineSettings {
    pub fn new(orders_path: impl Into<String>, barcodes_path: impl Into<String>) -> Self {
        Self {
            orders_path: orders_path.into(),
            barcodes_path: barcodes_path.into(),
            dest_path: None,
            transform_only: false,
            silent: false,
            allow_useless_vouchers: true,
            strict_barcodes: true,
            report: false,
            top: DEFAULT_TOP,
        }
    }

    /// Settings used by the report tasks: no output file, no diagnostics.
    pub fn for_reports(orders_path: impl Into<String>, barcodes_path: impl Into<String>) -> Self {
        Self {
            transform_only: true,
            silent: true,
            ..Self::new(orders_path, barcodes_path)
        }
    }
}

impl Validate for PipelineSettings {
    fn validate(&self) -> Result<()> {
        validate_path("orders", &self.orders_path)?;
        validate_path("barcodes", &self.barcodes_path)?;
        if let Some(dest_path) = &self.dest_path {
            validate_path("dest", dest_path)?;
        }
        validate_positive_number("top", self.top, 1)?;
        Ok(())
    }
}

impl ConfigProvider for PipelineSettings {
    fn orders_path(&self) -> &str {
        &self.orders_path
    }

    fn barcodes_path(&self) -> &str {
        &self.barcodes_path
    }

    fn dest_path(&self) -> Option<&str> {
        self.dest_path.as_deref()
    }

    fn transform_only(&self) -> bool {
        self.transform_only
    }

    fn silent(&self) -> bool {
        self.silent
    }

    fn allow_useless_vouchers(&self) -> bool {
        self.allow_useless_vouchers
    }

    fn strict_barcodes(&self) -> bool {
        self.strict_barcodes
    }
}
