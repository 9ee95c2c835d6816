use crate::domain::model::{Barcode, Identifier, Order, Voucher};
use std::collections::HashMap;

/// One row of the orders-left-join-barcodes set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinedRow {
    pub customer_id: Identifier,
    pub order_id: Identifier,
    pub barcode: Option<i64>,
}

/// Left join of barcodes onto orders by `order_id`.
///
/// Every order appears at least once, once per matching barcode row, in
/// order of the orders input and then of the barcodes input. Barcodes whose
/// `order_id` matches no order do not appear.
pub fn left_join(orders: &[Order], barcodes: &[Barcode]) -> Vec<JoinedRow> {
    let mut by_order: HashMap<&Identifier, Vec<Option<i64>>> = HashMap::new();
    for record in barcodes {
        if let Some(order_id) = &record.order_id {
            by_order.entry(order_id).or_default().push(record.barcode);
        }
    }

    let mut joined = Vec::with_capacity(orders.len());
    for order in orders {
        match by_order.get(&order.order_id) {
            Some(matches) => joined.extend(matches.iter().map(|barcode| JoinedRow {
                customer_id: order.customer_id.clone(),
                order_id: order.order_id.clone(),
                barcode: *barcode,
            })),
            None => joined.push(JoinedRow {
                customer_id: order.customer_id.clone(),
                order_id: order.order_id.clone(),
                barcode: None,
            }),
        }
    }
    joined
}

/// Builds one voucher per (customer_id, order_id) pair, sorted by that pair.
///
/// When `allow_useless_vouchers` is false, orders without any barcode are
/// left out instead of getting an empty list.
pub fn transform(orders: &[Order], barcodes: &[Barcode], allow_useless_vouchers: bool) -> Vec<Voucher> {
    let mut joined = left_join(orders, barcodes);
    tracing::debug!("Joined set holds {} rows", joined.len());

    if !allow_useless_vouchers {
        joined.retain(|row| row.barcode.is_some());
    }

    // sort_by is stable, so barcodes keep their join order within a group
    joined.sort_by(|a, b| (&a.customer_id, &a.order_id).cmp(&(&b.customer_id, &b.order_id)));

    let mut vouchers: Vec<Voucher> = Vec::new();
    for row in joined {
        let same_group = vouchers
            .last()
            .is_some_and(|last| last.customer_id == row.customer_id && last.order_id == row.order_id);

        if same_group {
            if let Some(last) = vouchers.last_mut() {
                last.barcodes.extend(row.barcode);
            }
        } else {
            vouchers.push(Voucher {
                customer_id: row.customer_id,
                order_id: row.order_id,
                barcodes: row.barcode.into_iter().collect(),
            });
        }
    }

    tracing::info!("Built {} vouchers from {} orders", vouchers.len(), orders.len());
    vouchers
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(customer_id: i64, order_id: i64) -> Order {
        Order {
            customer_id: customer_id.into(),
            order_id: order_id.into(),
        }
    }

    fn barcode(barcode: Option<i64>, order_id: Option<i64>) -> Barcode {
        Barcode {
            barcode,
            order_id: order_id.map(Identifier::Int),
        }
    }

    fn voucher(customer_id: i64, order_id: i64, barcodes: &[i64]) -> Voucher {
        Voucher {
            customer_id: customer_id.into(),
            order_id: order_id.into(),
            barcodes: barcodes.to_vec(),
        }
    }

    fn sample_orders() -> Vec<Order> {
        let customers = [1, 1, 1, 1, 2, 2, 2, 3, 3, 3, 3, 4, 4, 5, 6, 7, 8];
        customers
            .iter()
            .zip(1..)
            .map(|(customer_id, order_id)| order(*customer_id, order_id))
            .collect()
    }

    // Barcodes as they leave validation: 7, 8 and 10 were duplicated and
    // the row without a barcode was dropped.
    fn sample_barcodes() -> Vec<Barcode> {
        [(1, 1), (2, 1), (3, 2), (4, 3), (5, 4), (6, 4), (9, 7), (11, 9), (12, 10)]
            .iter()
            .map(|(value, order_id)| barcode(Some(*value), Some(*order_id)))
            .collect()
    }

    #[test]
    fn test_left_join_keeps_every_order() {
        let orders = vec![order(1, 1), order(1, 2)];
        let barcodes = vec![
            barcode(Some(5), Some(1)),
            barcode(Some(6), Some(1)),
            barcode(Some(9), Some(99)),
        ];
        let joined = left_join(&orders, &barcodes);

        assert_eq!(joined.len(), 3);
        assert_eq!(joined[2].order_id, Identifier::Int(2));
        assert_eq!(joined[2].barcode, None);
        assert!(joined.iter().all(|row| row.barcode != Some(9)));
    }

    #[test]
    fn test_transform_keeps_useless_vouchers() {
        let orders = vec![order(1, 1), order(1, 2)];
        let barcodes = vec![
            barcode(Some(5), Some(1)),
            barcode(Some(6), Some(1)),
            barcode(None, Some(2)),
        ];

        assert_eq!(
            transform(&orders, &barcodes, true),
            vec![voucher(1, 1, &[5, 6]), voucher(1, 2, &[])]
        );
        assert_eq!(transform(&orders, &barcodes, false), vec![voucher(1, 1, &[5, 6])]);
    }

    #[test]
    fn test_transform_full_dataset_allowing_useless() {
        let vouchers = transform(&sample_orders(), &sample_barcodes(), true);
        let expected: Vec<Vec<i64>> = vec![
            vec![1, 2],
            vec![3],
            vec![4],
            vec![5, 6],
            vec![],
            vec![],
            vec![9],
            vec![],
            vec![11],
            vec![12],
            vec![],
            vec![],
            vec![],
            vec![],
            vec![],
            vec![],
            vec![],
        ];

        assert_eq!(vouchers.len(), 17);
        assert_eq!(
            vouchers.iter().map(|v| v.barcodes.clone()).collect::<Vec<_>>(),
            expected
        );
    }

    #[test]
    fn test_transform_full_dataset_disallowing_useless() {
        let vouchers = transform(&sample_orders(), &sample_barcodes(), false);

        assert_eq!(
            vouchers,
            vec![
                voucher(1, 1, &[1, 2]),
                voucher(1, 2, &[3]),
                voucher(1, 3, &[4]),
                voucher(1, 4, &[5, 6]),
                voucher(2, 7, &[9]),
                voucher(3, 9, &[11]),
                voucher(3, 10, &[12]),
            ]
        );
    }

    #[test]
    fn test_transform_sorts_by_customer_then_order() {
        let orders = vec![order(2, 1), order(1, 3), order(1, 2)];
        let vouchers = transform(&orders, &[], true);

        assert_eq!(
            vouchers,
            vec![voucher(1, 2, &[]), voucher(1, 3, &[]), voucher(2, 1, &[])]
        );
    }

    #[test]
    fn test_transform_is_deterministic() {
        let first = transform(&sample_orders(), &sample_barcodes(), true);
        let second = transform(&sample_orders(), &sample_barcodes(), true);
        assert_eq!(first, second);
    }
}
