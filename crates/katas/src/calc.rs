use crate::prelude::{eprintln, println, *};
use serde::{Deserialize, Serialize};

use katas_core::calculator::{
    calculate, compare, CalcError, CalcOutput, CompareOutput, DecimalCalculator,
    FloatCalculator, Operation, DEFAULT_DECIMALS,
};

#[derive(Debug, clap::Parser)]
#[command(name = "calc")]
#[command(about = "Floating-point and fixed-point calculator")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Add two numbers
    #[clap(name = "add")]
    Add(OperationOptions),

    /// Subtract the second number from the first
    #[clap(name = "subtract")]
    Subtract(OperationOptions),

    /// Multiply two numbers
    #[clap(name = "multiply")]
    Multiply(OperationOptions),

    /// Divide the first number by the second
    #[clap(name = "divide")]
    Divide(OperationOptions),

    /// Remainder of dividing the first number by the second
    #[clap(name = "modulo")]
    Modulo(OperationOptions),

    /// Tell which of two numbers is greater
    #[clap(name = "compare")]
    Compare(CompareOptions),
}

#[derive(Debug, clap::Args, Clone)]
pub struct OperationOptions {
    /// First operand (use '.' as decimal separator)
    #[arg(allow_hyphen_values = true)]
    a: String,

    /// Second operand (use '.' as decimal separator)
    #[arg(allow_hyphen_values = true)]
    b: String,

    /// Number of decimals of the result (0 to 8)
    #[arg(short, long, default_value_t = DEFAULT_DECIMALS as i64, allow_hyphen_values = true)]
    decimals: i64,

    /// Use fixed-point decimal arithmetic instead of f64
    #[arg(long)]
    decimal: bool,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Debug, clap::Args, Clone)]
pub struct CompareOptions {
    /// First number
    #[arg(allow_hyphen_values = true)]
    a: String,

    /// Second number
    #[arg(allow_hyphen_values = true)]
    b: String,

    /// Use fixed-point decimal arithmetic instead of f64
    #[arg(long)]
    decimal: bool,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Which number representation to compute with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalculatorKind {
    Float,
    Decimal,
}

impl CalculatorKind {
    fn from_flag(decimal: bool) -> Self {
        if decimal {
            CalculatorKind::Decimal
        } else {
            CalculatorKind::Float
        }
    }
}

/// Public data function - used by both CLI and HTTP server
pub fn calculate_data(
    kind: CalculatorKind,
    op: Operation,
    a: &str,
    b: &str,
    decimals: i64,
) -> Result<CalcOutput, CalcError> {
    match kind {
        CalculatorKind::Float => calculate(&FloatCalculator, op, a, b, decimals),
        CalculatorKind::Decimal => calculate(&DecimalCalculator, op, a, b, decimals),
    }
}

/// Public data function - used by both CLI and HTTP server
pub fn compare_data(kind: CalculatorKind, a: &str, b: &str) -> Result<CompareOutput, CalcError> {
    match kind {
        CalculatorKind::Float => compare(&FloatCalculator, a, b),
        CalculatorKind::Decimal => compare(&DecimalCalculator, a, b),
    }
}

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    let (op, options) = match app.command {
        Commands::Add(options) => (Operation::Add, options),
        Commands::Subtract(options) => (Operation::Subtract, options),
        Commands::Multiply(options) => (Operation::Multiply, options),
        Commands::Divide(options) => (Operation::Divide, options),
        Commands::Modulo(options) => (Operation::Modulo, options),
        Commands::Compare(options) => return run_compare(options, global),
    };

    let kind = CalculatorKind::from_flag(options.decimal);
    if global.verbose {
        eprintln!("Calculator: {:?}, operation: {:?}", kind, op);
    }

    let out = calculate_data(kind, op, &options.a, &options.b, options.decimals)
        .map_err(|e| eyre!("{}", e))?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{}", out.result);
    }

    Ok(())
}

fn run_compare(options: CompareOptions, global: crate::Global) -> Result<()> {
    let kind = CalculatorKind::from_flag(options.decimal);
    if global.verbose {
        eprintln!("Calculator: {:?}, operation: compare", kind);
    }

    let out = compare_data(kind, &options.a, &options.b).map_err(|e| eyre!("{}", e))?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{}", out.result);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_data_float() {
        let out = calculate_data(CalculatorKind::Float, Operation::Add, "1.5", "2", 1).unwrap();
        assert_eq!(out.result, "3.5");
    }

    #[test]
    fn test_calculate_data_decimal() {
        let out =
            calculate_data(CalculatorKind::Decimal, Operation::Multiply, "-5", "0", 2).unwrap();
        assert_eq!(out.result, "0.00");
    }

    #[test]
    fn test_compare_data() {
        let out = compare_data(CalculatorKind::Float, "1", "2").unwrap();
        assert_eq!(out.result, "The second number is greater.");
    }

    #[test]
    fn test_calculator_kind_from_flag() {
        assert_eq!(CalculatorKind::from_flag(true), CalculatorKind::Decimal);
        assert_eq!(CalculatorKind::from_flag(false), CalculatorKind::Float);
    }
}
