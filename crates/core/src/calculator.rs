//! Two-operand calculators
//!
//! [`FloatCalculator`] works on `f64`, [`DecimalCalculator`] on
//! [`rust_decimal::Decimal`]. Both round results half-to-even and share the
//! operand validation and output formatting in this module.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;

pub const MIN_DECIMALS: u32 = 0;
pub const MAX_DECIMALS: u32 = 8;
pub const DEFAULT_DECIMALS: u32 = 2;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalcError {
    #[error("Invalid number format, use a dot (.) as the decimal separator")]
    DecimalCommaNotAllowed,

    #[error("The numbers are not valid or cannot be converted")]
    InvalidNumber,

    #[error("The number of decimals must be between 0 and 8")]
    InvalidDecimalPlaces,

    #[error("Cannot divide by 0")]
    DivisionByZero,

    #[error("The result is too large or too small to process")]
    Overflow,
}

impl CalcError {
    pub fn code(&self) -> &'static str {
        match self {
            CalcError::DecimalCommaNotAllowed => "decimal_comma_not_allowed",
            CalcError::InvalidNumber => "invalid_number",
            CalcError::InvalidDecimalPlaces => "invalid_decimal_places",
            CalcError::DivisionByZero => "division_by_zero",
            CalcError::Overflow => "overflow",
        }
    }
}

/// Binary operations that produce a rounded number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
}

impl Operation {
    pub fn needs_nonzero_divisor(self) -> bool {
        matches!(self, Operation::Divide | Operation::Modulo)
    }
}

impl FromStr for Operation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "add" => Ok(Operation::Add),
            "subtract" => Ok(Operation::Subtract),
            "multiply" => Ok(Operation::Multiply),
            "divide" => Ok(Operation::Divide),
            "modulo" => Ok(Operation::Modulo),
            other => Err(format!("Unknown operation: {}", other)),
        }
    }
}

/// Result of an arithmetic operation, already formatted
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct CalcOutput {
    pub operation: Operation,
    pub result: String,
}

/// Result of a comparison
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct CompareOutput {
    pub result: String,
}

pub trait Calculator {
    type Number: Copy + PartialOrd;

    /// Parse one operand (already checked for commas)
    fn parse(&self, raw: &str) -> Option<Self::Number>;

    fn is_zero(&self, n: Self::Number) -> bool;

    fn add(
        &self,
        a: Self::Number,
        b: Self::Number,
        decimals: u32,
    ) -> Result<Self::Number, CalcError>;
    fn subtract(
        &self,
        a: Self::Number,
        b: Self::Number,
        decimals: u32,
    ) -> Result<Self::Number, CalcError>;
    fn multiply(
        &self,
        a: Self::Number,
        b: Self::Number,
        decimals: u32,
    ) -> Result<Self::Number, CalcError>;
    fn divide(
        &self,
        a: Self::Number,
        b: Self::Number,
        decimals: u32,
    ) -> Result<Self::Number, CalcError>;
    fn modulo(
        &self,
        a: Self::Number,
        b: Self::Number,
        decimals: u32,
    ) -> Result<Self::Number, CalcError>;

    fn format(&self, n: Self::Number, decimals: u32) -> String;

    fn compare(&self, a: Self::Number, b: Self::Number) -> Ordering {
        a.partial_cmp(&b).unwrap_or(Ordering::Equal)
    }

    fn apply(
        &self,
        op: Operation,
        a: Self::Number,
        b: Self::Number,
        decimals: u32,
    ) -> Result<Self::Number, CalcError> {
        match op {
            Operation::Add => self.add(a, b, decimals),
            Operation::Subtract => self.subtract(a, b, decimals),
            Operation::Multiply => self.multiply(a, b, decimals),
            Operation::Divide => self.divide(a, b, decimals),
            Operation::Modulo => self.modulo(a, b, decimals),
        }
    }
}

/// Validate both operands: commas are reported before parse failures.
pub fn parse_operands<C: Calculator>(
    calc: &C,
    a: &str,
    b: &str,
) -> Result<(C::Number, C::Number), CalcError> {
    if a.contains(',') || b.contains(',') {
        return Err(CalcError::DecimalCommaNotAllowed);
    }

    match (calc.parse(a.trim()), calc.parse(b.trim())) {
        (Some(a), Some(b)) => Ok((a, b)),
        _ => Err(CalcError::InvalidNumber),
    }
}

pub fn validate_decimals(decimals: i64) -> Result<u32, CalcError> {
    if decimals < MIN_DECIMALS as i64 || decimals > MAX_DECIMALS as i64 {
        return Err(CalcError::InvalidDecimalPlaces);
    }
    Ok(decimals as u32)
}

/// Parse, validate and compute `a op b`, formatted with `decimals` places.
pub fn calculate<C: Calculator>(
    calc: &C,
    op: Operation,
    a: &str,
    b: &str,
    decimals: i64,
) -> Result<CalcOutput, CalcError> {
    let (a, b) = parse_operands(calc, a, b)?;
    let decimals = validate_decimals(decimals)?;

    if op.needs_nonzero_divisor() && calc.is_zero(b) {
        return Err(CalcError::DivisionByZero);
    }

    let value = calc.apply(op, a, b, decimals)?;

    Ok(CalcOutput {
        operation: op,
        result: calc.format(value, decimals),
    })
}

/// Parse both operands and describe which one is greater.
pub fn compare<C: Calculator>(calc: &C, a: &str, b: &str) -> Result<CompareOutput, CalcError> {
    let (a, b) = parse_operands(calc, a, b)?;

    let result = match calc.compare(a, b) {
        Ordering::Greater => "The first number is greater.",
        Ordering::Equal => "Both numbers are equal.",
        Ordering::Less => "The second number is greater.",
    };

    Ok(CompareOutput {
        result: result.to_string(),
    })
}

// ============================================================================
// f64
// ============================================================================

#[derive(Debug, Default, Clone, Copy)]
pub struct FloatCalculator;

/// Round half-to-even at `decimals` places.
///
/// Values too large to scale are returned unchanged.
pub fn round_half_even(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round_ties_even() / factor
}

fn finite(n: f64) -> Result<f64, CalcError> {
    if n.is_finite() {
        Ok(n)
    } else {
        Err(CalcError::Overflow)
    }
}

impl Calculator for FloatCalculator {
    type Number = f64;

    fn parse(&self, raw: &str) -> Option<f64> {
        raw.parse::<f64>().ok().filter(|n| n.is_finite())
    }

    fn is_zero(&self, n: f64) -> bool {
        n == 0.0
    }

    fn add(&self, a: f64, b: f64, decimals: u32) -> Result<f64, CalcError> {
        finite(a + b).map(|n| round_half_even(n, decimals))
    }

    fn subtract(&self, a: f64, b: f64, decimals: u32) -> Result<f64, CalcError> {
        finite(a - b).map(|n| round_half_even(n, decimals))
    }

    fn multiply(&self, a: f64, b: f64, decimals: u32) -> Result<f64, CalcError> {
        finite(a * b).map(|n| round_half_even(n, decimals))
    }

    fn divide(&self, a: f64, b: f64, decimals: u32) -> Result<f64, CalcError> {
        finite(a / b).map(|n| round_half_even(n, decimals))
    }

    fn modulo(&self, a: f64, b: f64, decimals: u32) -> Result<f64, CalcError> {
        finite(a % b).map(|n| round_half_even(n, decimals))
    }

    fn format(&self, n: f64, decimals: u32) -> String {
        format_grouped(&format!("{:.*}", decimals as usize, n))
    }
}

// ============================================================================
// Decimal
// ============================================================================

#[derive(Debug, Default, Clone, Copy)]
pub struct DecimalCalculator;

impl Calculator for DecimalCalculator {
    type Number = Decimal;

    fn parse(&self, raw: &str) -> Option<Decimal> {
        Decimal::from_str(raw)
            .or_else(|_| Decimal::from_scientific(raw))
            .ok()
    }

    fn is_zero(&self, n: Decimal) -> bool {
        n.is_zero()
    }

    fn add(&self, a: Decimal, b: Decimal, decimals: u32) -> Result<Decimal, CalcError> {
        a.checked_add(b)
            .map(|n| n.round_dp(decimals))
            .ok_or(CalcError::Overflow)
    }

    fn subtract(&self, a: Decimal, b: Decimal, decimals: u32) -> Result<Decimal, CalcError> {
        a.checked_sub(b)
            .map(|n| n.round_dp(decimals))
            .ok_or(CalcError::Overflow)
    }

    fn multiply(&self, a: Decimal, b: Decimal, decimals: u32) -> Result<Decimal, CalcError> {
        let n = a
            .checked_mul(b)
            .map(|n| n.round_dp(decimals))
            .ok_or(CalcError::Overflow)?;

        // -5 * 0 renders as 0, not -0
        if n.is_zero() {
            return Ok(n.abs());
        }
        Ok(n)
    }

    fn divide(&self, a: Decimal, b: Decimal, decimals: u32) -> Result<Decimal, CalcError> {
        a.checked_div(b)
            .map(|n| n.round_dp(decimals))
            .ok_or(CalcError::Overflow)
    }

    fn modulo(&self, a: Decimal, b: Decimal, decimals: u32) -> Result<Decimal, CalcError> {
        a.checked_rem(b)
            .map(|n| n.round_dp(decimals).abs())
            .ok_or(CalcError::Overflow)
    }

    fn format(&self, n: Decimal, decimals: u32) -> String {
        format_grouped(&format!("{:.*}", decimals as usize, n))
    }
}

/// Insert `,` thousands separators into a plain `-1234.5` style number.
pub fn format_grouped(plain: &str) -> String {
    let (sign, unsigned) = match plain.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", plain),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    match frac_part {
        Some(frac) => format!("{sign}{grouped}.{frac}"),
        None => format!("{sign}{grouped}"),
    }
}
