use thiserror::Error;

#[derive(Error, Debug)]
pub enum VoucherError {
    #[error("{message}")]
    InvalidInput { message: String },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Storage,
    Configuration,
}

impl VoucherError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidInput { .. } | Self::CsvError(_) => ErrorCategory::Input,
            Self::IoError(_) => ErrorCategory::Storage,
            Self::TomlError(_)
            | Self::ConfigError { .. }
            | Self::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Input => format!("Input data rejected: {}", self),
            ErrorCategory::Storage => format!("Could not access the file system: {}", self),
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Input => {
                "Fix the input csv files (orders: customer_id,order_id; barcodes: barcode,order_id) and run again"
            }
            ErrorCategory::Storage => "Check that the destination directory exists and is writable",
            ErrorCategory::Configuration => "Check the command line flags and the settings file",
        }
    }
}

pub type Result<T> = std::result::Result<T, VoucherError>;
