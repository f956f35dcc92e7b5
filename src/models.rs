//! Frontend Models
//!
//! Data structures matching the backend `motorcycles` resource.

use serde::{Deserialize, Deserializer, Serialize};

/// Motorcycle listing (matches backend JSON)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Motorcycle {
    /// Assigned by the backend; `None` for an unsaved draft
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "motorcycleName", default)]
    pub name: String,
    #[serde(rename = "motorcycleBrand", default)]
    pub brand: String,
    /// NaN is serialized as JSON `null`
    #[serde(
        rename = "motorcyclePrice",
        default = "nan",
        deserialize_with = "price_or_nan"
    )]
    pub price: f64,
    #[serde(rename = "motorcycleAvailable", default)]
    pub available: bool,
    /// Empty string means no image
    #[serde(rename = "motorcycleImage", default)]
    pub image_url: String,
}

impl Motorcycle {
    /// Empty form draft: no id, zero price, available
    pub fn draft() -> Self {
        Self {
            id: None,
            name: String::new(),
            brand: String::new(),
            price: 0.0,
            available: true,
            image_url: String::new(),
        }
    }

    /// Copy of this record with one field replaced
    pub fn with_field(&self, field: DraftField) -> Self {
        let mut next = self.clone();
        match field {
            DraftField::Name(name) => next.name = name,
            DraftField::Brand(brand) => next.brand = brand,
            DraftField::Price(price) => next.price = price,
            DraftField::Available(available) => next.available = available,
            DraftField::Image(url) => next.image_url = url,
        }
        next
    }
}

impl Default for Motorcycle {
    fn default() -> Self {
        Self::draft()
    }
}

/// A single form input change
#[derive(Debug, Clone, PartialEq)]
pub enum DraftField {
    Name(String),
    Brand(String),
    Price(f64),
    Available(bool),
    Image(String),
}

/// Coerce raw number-input text to a price.
///
/// Blank input is zero. Anything that does not parse becomes NaN and is
/// left for the backend to judge.
pub fn parse_price_input(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

/// Price as shown in the number input. NaN shows as an empty field.
pub fn price_input_text(price: f64) -> String {
    if price.is_nan() {
        String::new()
    } else {
        price.to_string()
    }
}

/// Text for the price input when the draft changes from outside it.
///
/// Returns `None` while the typed text already means `price`, so partial
/// input like `1.` or an emptied field is left as typed.
pub fn price_input_resync(current: &str, price: f64) -> Option<String> {
    let typed = parse_price_input(current);
    if typed == price || (typed.is_nan() && price.is_nan()) {
        return None;
    }
    Some(price_input_text(price))
}

fn nan() -> f64 {
    f64::NAN
}

fn price_or_nan<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_defaults() {
        let draft = Motorcycle::draft();
        assert_eq!(draft.id, None);
        assert!(draft.name.is_empty());
        assert!(draft.brand.is_empty());
        assert_eq!(draft.price, 0.0);
        assert!(draft.available);
        assert!(draft.image_url.is_empty());
    }

    #[test]
    fn test_with_field_touches_one_attribute() {
        let base = Motorcycle {
            id: Some("abc".to_string()),
            name: "CBR650R".to_string(),
            brand: "Honda".to_string(),
            price: 329_000.0,
            available: true,
            image_url: "http://img/cbr.png".to_string(),
        };

        let renamed = base.with_field(DraftField::Name("CB650R".to_string()));
        assert_eq!(renamed.name, "CB650R");
        assert_eq!(renamed.brand, base.brand);
        assert_eq!(renamed.price, base.price);
        assert_eq!(renamed.id, base.id);
        assert_eq!(base.name, "CBR650R");

        let sold_out = base.with_field(DraftField::Available(false));
        assert!(!sold_out.available);
        assert_eq!(sold_out.name, base.name);
    }

    #[test]
    fn test_parse_price_input() {
        assert_eq!(parse_price_input(""), 0.0);
        assert_eq!(parse_price_input("   "), 0.0);
        assert_eq!(parse_price_input("125000"), 125_000.0);
        assert_eq!(parse_price_input(" 99.5 "), 99.5);
        assert!(parse_price_input("abc").is_nan());
    }

    #[test]
    fn test_price_input_keeps_text_that_means_the_draft_price() {
        assert_eq!(price_input_resync("1.0", 1.0), None);
        assert_eq!(price_input_resync("1.", 1.0), None);
        assert_eq!(price_input_resync("", 0.0), None);
        assert_eq!(price_input_resync("1.05", 1.05), None);
    }

    #[test]
    fn test_price_input_follows_reset_and_edit() {
        assert_eq!(price_input_resync("1.05", 0.0), Some("0".to_string()));
        assert_eq!(price_input_resync("", 329_000.0), Some("329000".to_string()));
        assert_eq!(price_input_resync("12", f64::NAN), Some(String::new()));
    }

    #[test]
    fn test_price_input_text() {
        assert_eq!(price_input_text(0.0), "0");
        assert_eq!(price_input_text(1.05), "1.05");
        assert_eq!(price_input_text(f64::NAN), "");
    }

    #[test]
    fn test_json_shape() {
        let draft = Motorcycle::draft().with_field(DraftField::Name("Ninja 400".to_string()));
        let json = serde_json::to_value(&draft).unwrap();

        assert!(json.get("id").is_none());
        assert_eq!(json["motorcycleName"], "Ninja 400");
        assert_eq!(json["motorcyclePrice"], 0.0);
        assert_eq!(json["motorcycleAvailable"], true);
        assert_eq!(json["motorcycleImage"], "");
    }

    #[test]
    fn test_nan_price_serializes_as_null() {
        let draft = Motorcycle::draft().with_field(DraftField::Price(f64::NAN));
        let json = serde_json::to_string(&draft).unwrap();
        assert!(json.contains(r#""motorcyclePrice":null"#));
    }

    #[test]
    fn test_decode_lenient_record() {
        let json = r#"{"id":"m1","motorcycleName":"MT-07","motorcyclePrice":null}"#;
        let moto: Motorcycle = serde_json::from_str(json).unwrap();

        assert_eq!(moto.id.as_deref(), Some("m1"));
        assert_eq!(moto.name, "MT-07");
        assert!(moto.brand.is_empty());
        assert!(moto.price.is_nan());
        assert!(!moto.available);
        assert!(moto.image_url.is_empty());
    }
}
