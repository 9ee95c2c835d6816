use crate::core::transformer::transform;
use crate::core::validator::{validate_barcodes, validate_orders, BarcodePolicy};
use crate::domain::model::{RawSources, TransformResult};
use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
use crate::utils::error::Result;
use crate::utils::fs::{current_time, output_file_path};

pub struct VoucherPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    clock: fn() -> i64,
}

impl<S: Storage, C: ConfigProvider> VoucherPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self {
            storage,
            config,
            clock: current_time,
        }
    }

    /// Replaces the source of the timestamp used in the output file name.
    pub fn with_clock(mut self, clock: fn() -> i64) -> Self {
        self.clock = clock;
        self
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for VoucherPipeline<S, C> {
    fn extract(&self) -> Result<RawSources> {
        tracing::debug!("Reading orders from {}", self.config.orders_path());
        let orders = self.storage.read_table(self.config.orders_path())?;

        tracing::debug!("Reading barcodes from {}", self.config.barcodes_path());
        let barcodes = self.storage.read_table(self.config.barcodes_path())?;

        Ok(RawSources { orders, barcodes })
    }

    fn transform(&self, data: RawSources) -> Result<TransformResult> {
        let orders = validate_orders(&data.orders)?;
        let policy = BarcodePolicy {
            strict: self.config.strict_barcodes(),
            silent: self.config.silent(),
        };
        let validation = validate_barcodes(&data.barcodes, policy)?;
        for block in &validation.diagnostics {
            print!("{}", block);
        }

        let vouchers = transform(
            &orders,
            &validation.barcodes,
            self.config.allow_useless_vouchers(),
        );

        Ok(TransformResult {
            orders,
            raw_barcodes: validation.raw,
            barcodes: validation.barcodes,
            vouchers,
        })
    }

    fn load(&self, result: &TransformResult) -> Result<Option<String>> {
        if self.config.transform_only() {
            tracing::debug!("Transform only, skipping output file");
            return Ok(None);
        }

        let path = output_file_path(self.config.dest_path(), (self.clock)());
        let written = self.storage.write_vouchers(&result.vouchers, &path)?;
        Ok(Some(written))
    }
}
