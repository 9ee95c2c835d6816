use crate::domain::model::{format_list, Table, Voucher};
use crate::domain::ports::Storage;
use crate::utils::error::{Result, VoucherError};
use std::fs;
use std::path::Path;

/// csv-backed file reader and writer.
#[derive(Debug, Clone, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }

    fn load_table(path: &str) -> std::result::Result<Table, csv::Error> {
        let mut reader = csv::ReaderBuilder::new().flexible(true).from_path(path)?;
        let headers = reader
            .headers()?
            .iter()
            .map(|header| header.trim().to_string())
            .collect();

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            rows.push(
                record
                    .iter()
                    .map(|value| {
                        let value = value.trim();
                        (!value.is_empty()).then(|| value.to_string())
                    })
                    .collect(),
            );
        }

        Ok(Table::new(headers, rows))
    }
}

impl Storage for LocalStorage {
    fn read_table(&self, path: &str) -> Result<Table> {
        let table = Self::load_table(path).map_err(|e| {
            VoucherError::invalid_input(format!("Can not read file {}: {}", path, e))
        })?;
        tracing::debug!("Read {} rows from {}", table.len(), path);
        Ok(table)
    }

    fn write_vouchers(&self, vouchers: &[Voucher], path: &str) -> Result<String> {
        if let Some(parent) = Path::new(path).parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut writer = csv::Writer::from_path(path)?;
        writer.write_record(["customer_id", "order_id", "barcodes"])?;
        for voucher in vouchers {
            writer.write_record([
                voucher.customer_id.to_string(),
                voucher.order_id.to_string(),
                format_list(&voucher.barcodes),
            ])?;
        }
        writer.flush()?;

        tracing::debug!("Wrote {} vouchers to {}", vouchers.len(), path);
        Ok(path.to_string())
    }
}
