use crate::prelude::{eprintln, println, *};
use colored::Colorize;
use serde::{Deserialize, Serialize};

use katas_core::item::{ItemDecoder, ItemError, ItemRecord, DEFAULT_DELIMITER};

#[derive(Debug, clap::Parser)]
#[command(name = "item")]
#[command(about = "Decode a 'name$$##price$$##quantity' item record")]
#[command(after_help = "EXAMPLES:
  # Decode a record:
  katas item 'Bread$$##12.5$$##10'

  # Decode the built-in sample record:
  katas item

  # Use a different delimiter:
  katas item 'Apple|0.5|6' --delimiter '|'

NOTES:
  - The price must use a dot (.) as decimal separator and cannot be negative
  - The quantity is a non-negative whole number of 9 digits maximum")]
pub struct App {
    /// Raw item line; the sample record is decoded when omitted or blank
    line: Option<String>,

    /// Token separating name, price and quantity
    #[arg(short, long, env = "KATAS_ITEM_DELIMITER", default_value = DEFAULT_DELIMITER)]
    delimiter: String,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Decoded item as returned to callers
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ItemOutput {
    pub item_name: String,
    pub item_price: f64,
    pub item_quantity: i32,
}

impl From<ItemRecord> for ItemOutput {
    fn from(record: ItemRecord) -> Self {
        ItemOutput {
            item_name: record.name().to_string(),
            item_price: record.price(),
            item_quantity: record.quantity(),
        }
    }
}

/// Public data function - used by both CLI and HTTP server
///
/// A missing or blank line falls back to [`ItemRecord::sample`].
pub fn decode_data(line: Option<&str>, decoder: &ItemDecoder) -> Result<ItemOutput, ItemError> {
    let line = match line {
        Some(line) if !line.trim().is_empty() => line.to_string(),
        _ => ItemRecord::sample().encode(&decoder.delimiter),
    };

    decoder.decode(&line).map(ItemOutput::from)
}

/// Human readable description of the expected line layout
pub fn expected_format(delimiter: &str) -> String {
    format!("ItemName{delimiter}ItemPrice{delimiter}ItemQuantity")
}

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    let decoder = ItemDecoder::new(app.delimiter);

    if global.verbose {
        eprintln!("Delimiter: {}", decoder.delimiter);
        eprintln!();
    }

    let item = decode_data(app.line.as_deref(), &decoder).with_context(|| {
        format!(
            "Failed to process the line, the format must be '{}'",
            expected_format(&decoder.delimiter)
        )
    })?;

    if app.json {
        println!("{}", serde_json::to_string_pretty(&item)?);
        return Ok(());
    }

    let mut table = new_table();
    table.add_row(prettytable::row!["Name".bold(), item.item_name]);
    table.add_row(prettytable::row!["Price".bold(), item.item_price]);
    table.add_row(prettytable::row!["Quantity".bold(), item.item_quantity]);
    table.printstd();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_data_line() {
        let out = decode_data(Some("Milk$$##0.99$$##6"), &ItemDecoder::default()).unwrap();
        assert_eq!(
            out,
            ItemOutput {
                item_name: "Milk".to_string(),
                item_price: 0.99,
                item_quantity: 6
            }
        );
    }

    #[test]
    fn test_decode_data_blank_uses_sample() {
        let decoder = ItemDecoder::default();
        let blank = decode_data(Some("   "), &decoder).unwrap();
        let missing = decode_data(None, &decoder).unwrap();
        assert_eq!(blank.item_name, "Bread");
        assert_eq!(blank, missing);
    }

    #[test]
    fn test_decode_data_sample_follows_delimiter() {
        let out = decode_data(None, &ItemDecoder::new("|")).unwrap();
        assert_eq!(out.item_quantity, 10);
    }

    #[test]
    fn test_decode_data_error() {
        let err = decode_data(Some("Bread$$##12.5$$##-1"), &ItemDecoder::default()).unwrap_err();
        assert_eq!(err, ItemError::NegativeQuantity);
    }

    #[test]
    fn test_expected_format() {
        assert_eq!(
            expected_format("$$##"),
            "ItemName$$##ItemPrice$$##ItemQuantity"
        );
    }
}
