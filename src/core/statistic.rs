use crate::config::PipelineSettings;
use crate::core::etl::{EtlEngine, PipelineResponse};
use crate::core::pipeline::VoucherPipeline;
use crate::core::reporter::{
    top_customers, top_customers_header, top_customers_rows, unused_barcodes,
    unused_barcodes_header, unused_barcodes_rows,
};
use crate::domain::model::{Barcode, TopCustomer};
use crate::domain::ports::Storage;
use crate::utils::console::pretty_print;
use crate::utils::error::Result;

/// Report tasks over a pair of input files. Runs the pipeline silently and without output.
pub struct VoucherStatistic<S: Storage> {
    storage: S,
    orders_path: String,
    barcodes_path: String,
}

impl<S: Storage> VoucherStatistic<S> {
    pub fn new(storage: S, orders_path: impl Into<String>, barcodes_path: impl Into<String>) -> Self {
        Self {
            storage,
            orders_path: orders_path.into(),
            barcodes_path: barcodes_path.into(),
        }
    }

    fn run(self) -> Result<PipelineResponse> {
        let settings = PipelineSettings::for_reports(self.orders_path, self.barcodes_path);
        EtlEngine::new(VoucherPipeline::new(self.storage, settings)).run()
    }

    pub fn top_customers(self, top: usize) -> Result<Vec<TopCustomer>> {
        let response = self.run()?;
        let ranking = top_customers(&response.vouchers, top);
        print_top_customers(&ranking, top);
        Ok(ranking)
    }

    pub fn unused_barcodes(self) -> Result<Vec<Barcode>> {
        let response = self.run()?;
        let unused = unused_barcodes(&response.orders, &response.raw_barcodes);
        print_unused_barcodes(&unused);
        Ok(unused)
    }
}

pub fn print_top_customers(ranking: &[TopCustomer], top: usize) {
    pretty_print(&top_customers_header(top), &top_customers_rows(ranking));
}

pub fn print_unused_barcodes(unused: &[Barcode]) {
    pretty_print(unused_barcodes_header(), &unused_barcodes_rows(unused));
}

/// Prints both reports for a finished run.
pub fn print_report(response: &PipelineResponse, top: usize) {
    print_top_customers(&top_customers(&response.vouchers, top), top);
    print_unused_barcodes(&unused_barcodes(&response.orders, &response.raw_barcodes));
}
