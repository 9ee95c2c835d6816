use crate::domain::model::{Barcode, Order, Voucher};
use crate::domain::ports::Pipeline;
use crate::utils::error::Result;

/// Everything one run produced.
#[derive(Debug, Clone)]
pub struct PipelineResponse {
    pub orders: Vec<Order>,
    /// Barcode rows as read; the unused-barcode report works on these.
    pub raw_barcodes: Vec<Barcode>,
    pub barcodes: Vec<Barcode>,
    pub vouchers: Vec<Voucher>,
    pub output_filepath: Option<String>,
}

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn pipeline(&self) -> &P {
        &self.pipeline
    }

    /// Runs extract, validate/transform and load. Any failure stops the run before output is written.
    pub fn run(&self) -> Result<PipelineResponse> {
        tracing::info!("Extracting orders and barcodes");
        let raw = self.pipeline.extract()?;
        tracing::info!(
            "Extracted {} orders and {} barcodes",
            raw.orders.len(),
            raw.barcodes.len()
        );

        tracing::info!("Validating and transforming");
        let result = self.pipeline.transform(raw)?;

        let output_filepath = self.pipeline.load(&result)?;
        if let Some(path) = &output_filepath {
            tracing::info!("Output saved to: {}", path);
        }

        Ok(PipelineResponse {
            orders: result.orders,
            raw_barcodes: result.raw_barcodes,
            barcodes: result.barcodes,
            vouchers: result.vouchers,
            output_filepath,
        })
    }
}
