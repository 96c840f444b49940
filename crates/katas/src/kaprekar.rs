use crate::prelude::{eprintln, println, *};

use katas_core::kaprekar::{check, parse_number, KaprekarError, KaprekarOutput};

#[derive(Debug, clap::Parser)]
#[command(name = "kaprekar")]
#[command(about = "Check whether a number is a Kaprekar number")]
#[command(after_help = "EXAMPLES:
  katas kaprekar 297
  katas kaprekar 45 --json

NOTES:
  - A Kaprekar number's square splits into two parts that add up to the number,
    with a non-zero right part (45² = 2025 and 20 + 25 = 45)")]
pub struct App {
    /// Non-negative whole number, 9 digits maximum
    number: String,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Public data function - used by both CLI and HTTP server
pub fn check_data(raw: &str) -> Result<KaprekarOutput, KaprekarError> {
    parse_number(raw).map(check)
}

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    let out = check_data(&app.number).map_err(|e| eyre!("{}", e))?;

    if global.verbose {
        eprintln!("Tried {} split points", out.operations);
    }

    if app.json {
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else if out.is_kaprekar {
        println!("{} is a Kaprekar number", out.number);
    } else {
        println!("{} is not a Kaprekar number", out.number);
    }

    Ok(())
}
