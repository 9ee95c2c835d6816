use std::cmp::Ordering;
use std::fmt;

/// Key value for `customer_id` and `order_id` columns.
///
/// Integer-looking cells are kept as integers so that sorting is numeric;
/// integers order before free text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Identifier {
    Int(i64),
    Text(String),
}

impl Identifier {
    /// `"7"` and `"7.0"` both become `Int(7)`; anything else is text.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        match parse_integral(trimmed) {
            Some(value) => Identifier::Int(value),
            None => Identifier::Text(trimmed.to_string()),
        }
    }
}

/// Parses a whole number, also in float form with a zero fraction (`"12.0"`).
pub fn parse_integral(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    if let Ok(value) = trimmed.parse::<i64>() {
        return Some(value);
    }

    let (whole, fraction) = trimmed.split_once('.')?;
    if fraction.is_empty() || !fraction.chars().all(|c| c == '0') {
        return None;
    }
    whole.parse::<i64>().ok()
}

impl Ord for Identifier {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Identifier::Int(a), Identifier::Int(b)) => a.cmp(b),
            (Identifier::Int(_), Identifier::Text(_)) => Ordering::Less,
            (Identifier::Text(_), Identifier::Int(_)) => Ordering::Greater,
            (Identifier::Text(a), Identifier::Text(b)) => a.cmp(b),
        }
    }
}

impl PartialOrd for Identifier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Int(value) => write!(f, "{}", value),
            Identifier::Text(value) => write!(f, "{}", value),
        }
    }
}

impl From<i64> for Identifier {
    fn from(value: i64) -> Self {
        Identifier::Int(value)
    }
}

/// Raw record set as read from a delimited file. Empty cells are `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Option<String>>>,
}

impl Table {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<Option<String>>>) -> Self {
        let width = headers.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, None);
                row
            })
            .collect();
        Self { headers, rows }
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header.trim() == name)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub customer_id: Identifier,
    pub order_id: Identifier,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Barcode {
    pub barcode: Option<i64>,
    pub order_id: Option<Identifier>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Voucher {
    pub customer_id: Identifier,
    pub order_id: Identifier,
    pub barcodes: Vec<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopCustomer {
    pub customer_id: Identifier,
    pub amount_of_tickets: usize,
}

#[derive(Debug, Clone)]
pub struct RawSources {
    pub orders: Table,
    pub barcodes: Table,
}

#[derive(Debug, Clone)]
pub struct TransformResult {
    pub orders: Vec<Order>,
    /// Barcode rows as read, before duplicate and null cleanup.
    pub raw_barcodes: Vec<Barcode>,
    pub barcodes: Vec<Barcode>,
    pub vouchers: Vec<Voucher>,
}

/// Renders a list the way it appears in the output file and in reports.
pub fn format_list<T: fmt::Display>(items: &[T]) -> String {
    let inner: Vec<String> = items.iter().map(|item| item.to_string()).collect();
    format!("[{}]", inner.join(", "))
}
