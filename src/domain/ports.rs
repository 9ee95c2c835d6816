use crate::domain::model::{RawSources, Table, TransformResult, Voucher};
use crate::utils::error::Result;

/// File collaborator: reads raw record sets and persists vouchers.
pub trait Storage {
    fn read_table(&self, path: &str) -> Result<Table>;

    /// Writes the vouchers to `path` and returns the path written.
    fn write_vouchers(&self, vouchers: &[Voucher], path: &str) -> Result<String>;
}

pub trait ConfigProvider {
    fn orders_path(&self) -> &str;
    fn barcodes_path(&self) -> &str;
    fn dest_path(&self) -> Option<&str>;
    fn transform_only(&self) -> bool;
    fn silent(&self) -> bool;
    fn allow_useless_vouchers(&self) -> bool;
    fn strict_barcodes(&self) -> bool;
}

pub trait Pipeline {
    fn extract(&self) -> Result<RawSources>;
    fn transform(&self, data: RawSources) -> Result<TransformResult>;
    /// Persists the vouchers; `None` when persistence is disabled.
    fn load(&self, result: &TransformResult) -> Result<Option<String>>;
}
