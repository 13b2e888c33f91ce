// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! # Polynomial Library
//!
//! A dense polynomial value type with `i64` coefficients stored highest degree
//! first.
//!
//! ## Features
//!
//! - Normalized storage: leading zeros are stripped, the zero polynomial is `[0]`.
//! - Degree query and `W(x) = ...` rendering.
//! - Evaluation at an integer point.
//! - Addition, subtraction and multiplication, both value-returning and in place.
//! - Serialization: Optional serde support (the coefficient list), with bincode integration.

pub mod errors;
pub mod polynomial;
pub mod utils;

pub use errors::{PolynomialError, Result};
pub use polynomial::Polynomial;
