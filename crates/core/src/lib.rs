//! Core library for katas
//!
//! This crate implements the **Functional Core** of the katas application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! The katas project uses a two-crate architecture:
//!
//! - **`katas_core`** (this crate): Pure validation and computation with zero I/O
//! - **`katas`**: The CLI and HTTP server (the Imperative Shell)
//!
//! ## Functional Core Principles
//!
//! - **Pure functions**: Same input always produces the same output
//! - **No side effects**: No I/O, no clock reads, no global state
//! - **Explicit randomness**: Shape generation takes the `Rng` as an argument
//! - **Typed failures**: Every module reports rejections through its own error enum
//!   with a stable `code()`
//!
//! # Module Organization
//!
//! - [`item`]: Decoding of `name$$##price$$##quantity` item records
//! - [`calculator`]: `f64` and fixed-point calculators with rounding and formatting
//! - [`dates`]: Day differences, year bounds and week numbers
//! - [`text`]: Character counts, case conversion, repeated words, concatenation
//! - [`kaprekar`]: Kaprekar number check
//! - [`shapes`]: Random circles, squares and triangles
//!
//! # Example Usage
//!
//! ```rust
//! use katas_core::item::{decode_item, ItemError};
//!
//! let item = decode_item("Bread$$##12.5$$##10").unwrap();
//! assert_eq!(item.name(), "Bread");
//! assert_eq!(item.price(), 12.5);
//! assert_eq!(item.quantity(), 10);
//!
//! assert_eq!(
//!     decode_item("Bread$$##12,5$$##10").unwrap_err(),
//!     ItemError::DecimalCommaNotAllowed
//! );
//! ```

pub mod calculator;
pub mod dates;
pub mod item;
pub mod kaprekar;
pub mod shapes;
pub mod text;
