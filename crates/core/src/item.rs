//! Item record decoding
//!
//! Pure functions for turning a delimited text line such as
//! `Bread$$##12.5$$##10` into a validated [`ItemRecord`]. Every rejection is
//! reported through [`ItemError`]; a partially populated record is never
//! produced.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Token separating the name, price and quantity segments.
pub const DEFAULT_DELIMITER: &str = "$$##";

/// A quantity segment this long (or longer) is rejected before parsing.
///
/// Messages advertise "9 digits maximum", so a length of 10 is the first
/// rejected length.
pub const MAX_QUANTITY_LEN: usize = 10;

/// A validated item: name, unit price and quantity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemRecord {
    name: String,
    price: f64,
    quantity: i32,
}

/// Reasons a raw line is rejected, in the order they are checked.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ItemError {
    #[error("Invalid format, expected 'ItemName{delimiter}ItemPrice{delimiter}ItemQuantity' (found {found} segment(s))")]
    WrongSegmentCount { delimiter: String, found: usize },

    #[error("The item name is required")]
    EmptyName,

    #[error("Invalid number format, use a dot (.) as the decimal separator")]
    DecimalCommaNotAllowed,

    #[error("The price must be a non-negative number")]
    InvalidPrice,

    #[error("The quantity is too long (9 digits maximum)")]
    QuantityTooLong,

    #[error("The quantity must be a whole number of 9 digits maximum")]
    InvalidQuantity,

    #[error("The quantity cannot be negative")]
    NegativeQuantity,
}

impl ItemError {
    /// Stable identifier of the failure kind
    pub fn code(&self) -> &'static str {
        match self {
            ItemError::WrongSegmentCount { .. } => "wrong_segment_count",
            ItemError::EmptyName => "empty_name",
            ItemError::DecimalCommaNotAllowed => "decimal_comma_not_allowed",
            ItemError::InvalidPrice => "invalid_price",
            ItemError::QuantityTooLong => "quantity_too_long",
            ItemError::InvalidQuantity => "invalid_quantity",
            ItemError::NegativeQuantity => "negative_quantity",
        }
    }
}

impl ItemRecord {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn quantity(&self) -> i32 {
        self.quantity
    }

    /// The record used when a caller submits a blank line
    pub fn sample() -> Self {
        ItemRecord {
            name: "Bread".to_string(),
            price: 12.5,
            quantity: 10,
        }
    }

    /// Render the record back into its delimited form
    pub fn encode(&self, delimiter: &str) -> String {
        format!(
            "{}{delimiter}{}{delimiter}{}",
            self.name, self.price, self.quantity
        )
    }
}

impl fmt::Display for ItemRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode(DEFAULT_DELIMITER))
    }
}

impl FromStr for ItemRecord {
    type Err = ItemError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode_item(s)
    }
}

/// Decoder settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemDecoder {
    pub delimiter: String,
    pub max_quantity_len: usize,
}

impl Default for ItemDecoder {
    fn default() -> Self {
        ItemDecoder {
            delimiter: DEFAULT_DELIMITER.to_string(),
            max_quantity_len: MAX_QUANTITY_LEN,
        }
    }
}

impl ItemDecoder {
    pub fn new(delimiter: impl Into<String>) -> Self {
        ItemDecoder {
            delimiter: delimiter.into(),
            ..Default::default()
        }
    }

    /// Decode a raw line; the first failing check wins.
    pub fn decode(&self, raw: &str) -> Result<ItemRecord, ItemError> {
        let segments: Vec<&str> = raw.split(self.delimiter.as_str()).collect();
        let [name, price, quantity] = segments.as_slice() else {
            return Err(ItemError::WrongSegmentCount {
                delimiter: self.delimiter.clone(),
                found: segments.len(),
            });
        };

        let name = name.trim();
        if name.is_empty() {
            return Err(ItemError::EmptyName);
        }

        let price = parse_price(price.trim())?;
        let quantity = self.parse_quantity(quantity.trim())?;

        Ok(ItemRecord {
            name: name.to_string(),
            price,
            quantity,
        })
    }

    fn parse_quantity(&self, segment: &str) -> Result<i32, ItemError> {
        if segment.chars().count() >= self.max_quantity_len {
            return Err(ItemError::QuantityTooLong);
        }

        let quantity: i32 = segment.parse().map_err(|_| ItemError::InvalidQuantity)?;
        if quantity < 0 {
            return Err(ItemError::NegativeQuantity);
        }

        Ok(quantity)
    }
}

fn parse_price(segment: &str) -> Result<f64, ItemError> {
    if segment.contains(',') {
        return Err(ItemError::DecimalCommaNotAllowed);
    }

    match segment.parse::<f64>() {
        // `-0` is accepted as zero
        Ok(price) if price.is_finite() && price >= 0.0 => Ok(price + 0.0),
        _ => Err(ItemError::InvalidPrice),
    }
}

/// Decode a line using the default delimiter and quantity bound
pub fn decode_item(raw: &str) -> Result<ItemRecord, ItemError> {
    ItemDecoder::default().decode(raw)
}
