pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliConfig;
pub use crate::config::{storage::LocalStorage, toml_config::TomlConfig, PipelineSettings};

pub use crate::core::{
    etl::{EtlEngine, PipelineResponse},
    pipeline::VoucherPipeline,
    statistic::VoucherStatistic,
};
pub use domain::model::{Barcode, Identifier, Order, TopCustomer, Voucher};
pub use utils::error::{Result, VoucherError};
