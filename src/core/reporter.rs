use crate::domain::model::{format_list, Barcode, Identifier, Order, TopCustomer, Voucher};
use std::collections::{HashMap, HashSet};

pub const DEFAULT_TOP: usize = 5;

/// Customers with the most vouchers, highest count first.
///
/// Counting is per voucher, so an order counts once whatever its barcodes.
/// Equal counts keep ascending `customer_id` order.
pub fn top_customers(vouchers: &[Voucher], top: usize) -> Vec<TopCustomer> {
    let mut counts: HashMap<&Identifier, usize> = HashMap::new();
    for voucher in vouchers {
        *counts.entry(&voucher.customer_id).or_insert(0) += 1;
    }

    let mut ranking: Vec<TopCustomer> = counts
        .into_iter()
        .map(|(customer_id, amount_of_tickets)| TopCustomer {
            customer_id: customer_id.clone(),
            amount_of_tickets,
        })
        .collect();
    ranking.sort_by(|a, b| a.customer_id.cmp(&b.customer_id));
    ranking.sort_by(|a, b| b.amount_of_tickets.cmp(&a.amount_of_tickets));
    ranking.truncate(top);
    ranking
}

/// Barcodes not linked to any known order: a null `order_id`, or one that
/// matches no order.
pub fn unused_barcodes(orders: &[Order], barcodes: &[Barcode]) -> Vec<Barcode> {
    let known: HashSet<&Identifier> = orders.iter().map(|order| &order.order_id).collect();

    barcodes
        .iter()
        .filter(|record| match &record.order_id {
            Some(order_id) => !known.contains(order_id),
            None => true,
        })
        .cloned()
        .collect()
}

pub fn top_customers_header(top: usize) -> String {
    format!("Top {} Customers", top)
}

pub fn top_customers_rows(ranking: &[TopCustomer]) -> Vec<String> {
    let mut rows = vec!["customer_id, amount_of_tickets".to_string()];
    rows.extend(
        ranking
            .iter()
            .map(|entry| format!("{}, {}", entry.customer_id, entry.amount_of_tickets)),
    );
    rows
}

pub fn unused_barcodes_header() -> &'static str {
    "Unused barcodes"
}

pub fn unused_barcodes_rows(unused: &[Barcode]) -> Vec<String> {
    let count = unused.len();
    let sentence = if count == 1 {
        "There is 1 unused barcode".to_string()
    } else {
        format!("There are {} unused barcodes", count)
    };

    let values: Vec<String> = unused
        .iter()
        .map(|record| match record.barcode {
            Some(value) => value.to_string(),
            None => "None".to_string(),
        })
        .collect();

    vec![sentence, "Barcodes:".to_string(), format_list(&values)]
}
