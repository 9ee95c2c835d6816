use crate::domain::model::{format_list, parse_integral, Barcode, Identifier, Order, Table};
use crate::utils::console::render_block;
use crate::utils::error::{Result, VoucherError};
use std::collections::HashMap;

/// A required column and the position it is expected at.
#[derive(Debug, Clone, Copy)]
struct ColumnSpec {
    name: &'static str,
    position: usize,
}

const ORDER_COLUMNS: [ColumnSpec; 2] = [
    ColumnSpec { name: "customer_id", position: 0 },
    ColumnSpec { name: "order_id", position: 1 },
];

const BARCODE_COLUMNS: [ColumnSpec; 2] = [
    ColumnSpec { name: "barcode", position: 0 },
    ColumnSpec { name: "order_id", position: 1 },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarcodePolicy {
    /// Drop rows without a barcode value.
    pub strict: bool,
    /// Suppress diagnostic blocks on stdout.
    pub silent: bool,
}

impl Default for BarcodePolicy {
    fn default() -> Self {
        Self {
            strict: true,
            silent: false,
        }
    }
}

/// Resolves the column contract against the table headers, or `None` when a column is missing.
fn locate_columns<const N: usize>(table: &Table, specs: &[ColumnSpec; N]) -> Option<[usize; N]> {
    let mut indices = [0usize; N];
    for (slot, spec) in indices.iter_mut().zip(specs.iter()) {
        let index = table.column_index(spec.name)?;
        if index != spec.position {
            tracing::debug!(
                "Column '{}' found at position {} (expected {})",
                spec.name,
                index,
                spec.position
            );
        }
        *slot = index;
    }
    Some(indices)
}

fn cell(row: &[Option<String>], index: usize) -> Option<&str> {
    row.get(index).and_then(|value| value.as_deref())
}

/// Parses an integer-like barcode cell. `"12"` and `"12.0"` are accepted.
pub fn parse_barcode(raw: &str) -> Result<i64> {
    parse_integral(raw).ok_or_else(|| {
        VoucherError::invalid_input(format!("Column barcode holds a non-integer value: {}", raw))
    })
}

pub fn validate_orders(table: &Table) -> Result<Vec<Order>> {
    let invalid = || VoucherError::invalid_input("Orders csv file has to contain 2 columns - customer_id, order_id");

    let [customer_idx, order_idx] = locate_columns(table, &ORDER_COLUMNS).ok_or_else(invalid)?;

    let orders = table
        .rows
        .iter()
        .map(|row| {
            match (cell(row, customer_idx), cell(row, order_idx)) {
                (Some(customer_id), Some(order_id)) => Ok(Order {
                    customer_id: Identifier::parse(customer_id),
                    order_id: Identifier::parse(order_id),
                }),
                _ => Err(invalid()),
            }
        })
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!("Validated {} orders", orders.len());
    Ok(orders)
}

/// Outcome of barcode validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BarcodeValidation {
    /// Every parsed row, before cleanup.
    pub raw: Vec<Barcode>,
    /// Rows left after duplicate and null cleanup.
    pub barcodes: Vec<Barcode>,
    /// Rendered diagnostic blocks; always empty under a silent policy.
    pub diagnostics: Vec<String>,
}

/// Reads the barcode rows without applying any cleanup.
pub fn parse_barcodes(table: &Table) -> Result<Vec<Barcode>> {
    let [barcode_idx, order_idx] = locate_columns(table, &BARCODE_COLUMNS).ok_or_else(|| {
        VoucherError::invalid_input("Barcode csv file has to contain 2 columns - barcode, order_id")
    })?;

    table
        .rows
        .iter()
        .map(|row| {
            Ok(Barcode {
                barcode: cell(row, barcode_idx).map(parse_barcode).transpose()?,
                order_id: cell(row, order_idx).map(Identifier::parse),
            })
        })
        .collect()
}

pub fn validate_barcodes(table: &Table, policy: BarcodePolicy) -> Result<BarcodeValidation> {
    let raw = parse_barcodes(table)?;
    let mut barcodes = raw.clone();
    let mut diagnostics = Vec::new();

    let duplicates = duplicated_barcodes(&barcodes);
    if !duplicates.is_empty() {
        tracing::warn!("Dropping {} duplicated barcode values", duplicates.len());
        if !policy.silent {
            let mut rows = vec!["Next barcodes are duplicated".to_string()];
            rows.extend(duplicates.iter().map(|value| value.to_string()));
            diagnostics.push(render_block("Barcodes Validator - No Barcode Duplicates", &rows));
        }
        barcodes.retain(|record| match record.barcode {
            Some(value) => !duplicates.contains(&value),
            None => true,
        });
    }

    if policy.strict {
        let orphans: Vec<String> = barcodes
            .iter()
            .filter(|record| record.barcode.is_none())
            .map(|record| match &record.order_id {
                Some(order_id) => order_id.to_string(),
                None => "None".to_string(),
            })
            .collect();

        if !orphans.is_empty() {
            tracing::warn!("Dropping {} rows without a barcode", orphans.len());
            if !policy.silent {
                let mut rows = vec!["Next orders don't have barcodes".to_string()];
                rows.extend(orphans);
                diagnostics.push(render_block("Barcodes Validator - No Orders Without Barcodes", &rows));
            }
            barcodes.retain(|record| record.barcode.is_some());
        }
    }

    tracing::debug!("Validated {} of {} barcodes", barcodes.len(), raw.len());
    Ok(BarcodeValidation {
        raw,
        barcodes,
        diagnostics,
    })
}

/// Barcode values seen on more than one row, in first-seen order. Nulls never count.
fn duplicated_barcodes(barcodes: &[Barcode]) -> Vec<i64> {
    let mut counts: HashMap<i64, usize> = HashMap::new();
    let mut order = Vec::new();
    for value in barcodes.iter().filter_map(|record| record.barcode) {
        let count = counts.entry(value).or_insert(0);
        if *count == 0 {
            order.push(value);
        }
        *count += 1;
    }
    order.retain(|value| counts[value] > 1);
    tracing::debug!("Duplicated barcodes: {}", format_list(&order));
    order
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(headers: &[&str], rows: &[&[Option<&str>]]) -> Table {
        Table::new(
            headers.iter().map(|h| h.to_string()).collect(),
            rows.iter()
                .map(|row| row.iter().map(|c| c.map(str::to_string)).collect())
                .collect(),
        )
    }

    const SILENT: BarcodePolicy = BarcodePolicy {
        strict: true,
        silent: true,
    };

    #[test]
    fn test_validate_orders_requires_both_columns() {
        let missing_customer = table(&["customer_ids", "order_id"], &[]);
        let missing_order = table(&["customer_id", "order_ids"], &[]);

        for input in [missing_customer, missing_order] {
            let err = validate_orders(&input).unwrap_err();
            assert!(matches!(err, VoucherError::InvalidInput { .. }));
            assert!(err.to_string().contains("customer_id, order_id"));
        }
    }

    #[test]
    fn test_validate_orders_rejects_nulls() {
        let null_order = table(&["customer_id", "order_id"], &[&[Some("1"), None]]);
        let null_customer = table(&["customer_id", "order_id"], &[&[None, Some("1")]]);

        assert!(validate_orders(&null_order).is_err());
        assert!(validate_orders(&null_customer).is_err());
    }

    #[test]
    fn test_validate_orders_accepts_swapped_columns() {
        let input = table(&["order_id", "customer_id"], &[&[Some("7"), Some("3")]]);
        let orders = validate_orders(&input).unwrap();

        assert_eq!(
            orders,
            vec![Order {
                customer_id: Identifier::Int(3),
                order_id: Identifier::Int(7),
            }]
        );
    }

    #[test]
    fn test_validate_barcodes_requires_columns() {
        assert!(validate_barcodes(&table(&["barcodes", "order_id"], &[]), SILENT).is_err());
        assert!(validate_barcodes(&table(&["barcode", "order_ids"], &[]), SILENT).is_err());
        assert!(validate_barcodes(&table(&["barcode", "order_id"], &[&[Some("1"), Some("1")]]), SILENT).is_ok());
    }

    #[test]
    fn test_duplicates_are_dropped_entirely() {
        let input = table(
            &["barcode", "order_id"],
            &[&[Some("1"), Some("1")], &[Some("1"), Some("2")], &[Some("2"), Some("2")]],
        );
        let validation = validate_barcodes(&input, SILENT).unwrap();

        assert_eq!(validation.barcodes.len(), 1);
        assert_eq!(validation.barcodes[0].barcode, Some(2));
        assert_eq!(validation.raw.len(), 3);
    }

    #[test]
    fn test_strict_policy_drops_rows_without_barcode() {
        let input = table(&["barcode", "order_id"], &[&[None, Some("1")], &[Some("1"), Some("2")]]);

        let strict = validate_barcodes(&input, SILENT).unwrap().barcodes;
        assert_eq!(strict.len(), 1);
        assert_eq!(strict[0].order_id, Some(Identifier::Int(2)));

        let lenient = validate_barcodes(&input, BarcodePolicy { strict: false, silent: true })
            .unwrap()
            .barcodes;
        assert_eq!(lenient.len(), 2);
    }

    #[test]
    fn test_null_order_ids_survive_validation() {
        let input = table(&["barcode", "order_id"], &[&[Some("5"), None]]);
        let barcodes = validate_barcodes(&input, SILENT).unwrap().barcodes;

        assert_eq!(barcodes, vec![Barcode { barcode: Some(5), order_id: None }]);
    }

    #[test]
    fn test_diagnostics_name_dropped_values() {
        let input = table(
            &["barcode", "order_id"],
            &[
                &[Some("8"), Some("1")],
                &[Some("3"), Some("1")],
                &[Some("3"), Some("2")],
                &[Some("8"), Some("3")],
                &[Some("8"), Some("4")],
                &[None, Some("5")],
            ],
        );
        let policy = BarcodePolicy { strict: true, silent: false };

        let validation = validate_barcodes(&input, policy).unwrap();

        assert_eq!(validation.diagnostics.len(), 2);
        let duplicates: Vec<&str> = validation.diagnostics[0].lines().collect();
        assert_eq!(duplicates[1], "Barcodes Validator - No Barcode Duplicates");
        assert_eq!(&duplicates[3..6], &["Next barcodes are duplicated", "8", "3"]);

        let orphans: Vec<&str> = validation.diagnostics[1].lines().collect();
        assert_eq!(orphans[1], "Barcodes Validator - No Orders Without Barcodes");
        assert_eq!(&orphans[3..5], &["Next orders don't have barcodes", "5"]);
    }

    #[test]
    fn test_silent_policy_suppresses_diagnostics() {
        let input = table(
            &["barcode", "order_id"],
            &[&[Some("1"), Some("1")], &[Some("1"), Some("2")], &[None, Some("3")]],
        );

        let validation = validate_barcodes(&input, SILENT).unwrap();

        assert!(validation.diagnostics.is_empty());
        assert!(validation.barcodes.is_empty());
    }

    #[test]
    fn test_clean_input_has_no_diagnostics() {
        let input = table(&["barcode", "order_id"], &[&[Some("1"), Some("1")]]);
        let validation = validate_barcodes(&input, BarcodePolicy::default()).unwrap();

        assert!(validation.diagnostics.is_empty());
        assert_eq!(validation.raw, validation.barcodes);
    }

    #[test]
    fn test_order_ids_in_float_form_are_integers() {
        let input = table(&["barcode", "order_id"], &[&[Some("5.0"), Some("1.0")]]);
        let barcodes = validate_barcodes(&input, SILENT).unwrap().barcodes;

        assert_eq!(
            barcodes,
            vec![Barcode { barcode: Some(5), order_id: Some(Identifier::Int(1)) }]
        );
    }

    #[test]
    fn test_parse_barcode() {
        assert_eq!(parse_barcode("12").unwrap(), 12);
        assert_eq!(parse_barcode(" 12.0 ").unwrap(), 12);
        assert_eq!(parse_barcode("11111111111111111").unwrap(), 11111111111111111);
        assert!(parse_barcode("12.5").is_err());
        assert!(parse_barcode("abc").is_err());
        assert!(parse_barcode("12.").is_err());
    }
}
