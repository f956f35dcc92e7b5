//! Display Helpers
//!
//! Pure formatting for the listing table.

use crate::models::Motorcycle;

pub const CURRENCY_SUFFIX: &str = "฿";
pub const NO_IMAGE_LABEL: &str = "ไม่มีรูป";
pub const EMPTY_LIST_LABEL: &str = "ยังไม่มีข้อมูล";

/// Stock indicator shown in the status column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Availability {
    InStock,
    SoldOut,
}

impl Availability {
    pub fn of(available: bool) -> Self {
        if available {
            Self::InStock
        } else {
            Self::SoldOut
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::InStock => "มีสินค้า",
            Self::SoldOut => "หมด",
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Self::InStock => "status in-stock",
            Self::SoldOut => "status sold-out",
        }
    }
}

/// Everything one table row shows, already formatted
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RowDisplay {
    pub id: Option<String>,
    /// `None` renders the no-image placeholder
    pub image_url: Option<String>,
    pub name: String,
    pub brand: String,
    pub price: String,
    pub availability: Availability,
}

impl From<&Motorcycle> for RowDisplay {
    fn from(moto: &Motorcycle) -> Self {
        Self {
            id: moto.id.clone(),
            image_url: (!moto.image_url.is_empty()).then(|| moto.image_url.clone()),
            name: moto.name.clone(),
            brand: moto.brand.clone(),
            price: price_label(moto.price),
            availability: Availability::of(moto.available),
        }
    }
}

/// `For` key for a table row.
///
/// Covers the whole record, so any backend change rebuilds the row and
/// its edit action never holds a stale copy. The index keeps records
/// without an id apart.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RowKey {
    index: usize,
    record: String,
}

impl RowKey {
    pub fn new(index: usize, moto: &Motorcycle) -> Self {
        Self {
            index,
            record: serde_json::to_string(moto).unwrap_or_default(),
        }
    }
}

/// One rendered row and the record its actions operate on
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub key: RowKey,
    pub display: RowDisplay,
    pub motorcycle: Motorcycle,
}

/// Placeholder instead of a table when there is nothing to list
pub fn shows_placeholder(motorcycles: &[Motorcycle]) -> bool {
    motorcycles.is_empty()
}

/// One row per record, in list order
pub fn table_rows(motorcycles: &[Motorcycle]) -> Vec<TableRow> {
    motorcycles
        .iter()
        .enumerate()
        .map(|(index, moto)| TableRow {
            key: RowKey::new(index, moto),
            display: RowDisplay::from(moto),
            motorcycle: moto.clone(),
        })
        .collect()
}

/// Price with grouping and currency, e.g. `1,000,000 ฿`
pub fn price_label(price: f64) -> String {
    format!("{} {}", format_price(price), CURRENCY_SUFFIX)
}

/// en-US number style: comma thousands groups, at most three decimals
pub fn format_price(price: f64) -> String {
    if price.is_nan() {
        return "NaN".to_string();
    }
    if price.is_infinite() {
        return if price > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    let fixed = format!("{:.3}", price.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    // Like toLocaleString, -0 and negatives that round to zero keep the sign
    let sign = if price.is_sign_negative() { "-" } else { "" };

    if frac_part.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{frac_part}")
    }
}
