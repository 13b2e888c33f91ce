//! Polynomial arithmetic implementation.

use crate::errors::{PolynomialError, Result};
use crate::utils::{
    add_coefficients, ensure_non_empty, evaluate_coefficients, mul_coefficients, normalize,
    sub_coefficients,
};
use std::fmt;
use std::str::FromStr;
use tracing::trace;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A polynomial with integer coefficients stored in descending order of degree.
///
/// The polynomial is represented as:
/// `a_n * x^n + a_{n-1} * x^{n-1} + ... + a_1 * x + a_0`
///
/// The coefficient list is never empty and never starts with a zero unless the
/// polynomial is the zero polynomial `[0]`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<i64>", into = "Vec<i64>")
)]
pub struct Polynomial {
    /// Coefficients in descending order (highest degree first).
    pub(crate) coefficients: Vec<i64>,
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "W(x) = ")?;

        let Some((first, rest)) = self.coefficients.split_first() else {
            return write!(f, "0");
        };

        let degree = self.coefficients.len() - 1;
        write_term(f, *first, degree)?;

        for (i, coeff) in rest.iter().enumerate() {
            if *coeff == 0 {
                continue;
            }

            if *coeff > 0 {
                write!(f, " + ")?;
            } else {
                write!(f, " - ")?;
            }
            write_term(f, coeff.unsigned_abs(), degree - 1 - i)?;
        }

        Ok(())
    }
}

fn write_term(f: &mut fmt::Formatter<'_>, coeff: impl fmt::Display, degree: usize) -> fmt::Result {
    match degree {
        0 => write!(f, "{coeff}"),
        1 => write!(f, "{coeff}x"),
        _ => write!(f, "{coeff}x^{degree}"),
    }
}

impl Polynomial {
    /// Creates a new polynomial from a vector of coefficients.
    ///
    /// Leading zero coefficients are stripped; an all-zero input becomes the
    /// zero polynomial.
    ///
    /// # Arguments
    ///
    /// * `coefficients` - Vector of coefficients in descending order of degree.
    ///
    /// # Errors
    ///
    /// Returns `PolynomialError::InvalidArgument` if `coefficients` is empty.
    pub fn new(coefficients: Vec<i64>) -> Result<Self> {
        if coefficients.is_empty() {
            return Err(PolynomialError::invalid_argument(
                "cannot build a polynomial from an empty coefficient list",
            ));
        }

        let coefficients = normalize(coefficients);
        trace!(degree = coefficients.len() - 1, "polynomial created");
        Ok(Self { coefficients })
    }

    /// Creates a polynomial from coefficients in ascending order format.
    ///
    /// This method converts from ascending order coefficient ordering (lowest degree first)
    /// to this library's ordering (highest degree first).
    pub fn from_ascending_coefficients(ascending_coefficients: Vec<i64>) -> Result<Self> {
        let mut coefficients = ascending_coefficients;
        coefficients.reverse();
        Self::new(coefficients)
    }

    /// Converts the polynomial to ascending order coefficient format.
    pub fn to_ascending_coefficients(&self) -> Vec<i64> {
        let mut coefficients = self.coefficients.clone();
        coefficients.reverse();
        coefficients
    }

    /// The zero polynomial `[0]`.
    pub fn zero() -> Self {
        Self {
            coefficients: vec![0],
        }
    }

    /// Creates a constant polynomial.
    pub fn constant(constant: i64) -> Self {
        Self {
            coefficients: vec![constant],
        }
    }

    /// Returns the coefficients of the polynomial.
    pub fn coefficients(&self) -> &[i64] {
        &self.coefficients
    }

    /// Returns the degree of the polynomial.
    ///
    /// The degree of the zero polynomial is 0.
    pub fn degree(&self) -> Result<usize> {
        Ok(ensure_non_empty(&self.coefficients)?.len() - 1)
    }

    /// Renders the polynomial as `W(x) = ...`.
    ///
    /// Same output as the `Display` implementation, but fails when the
    /// coefficient list is empty.
    pub fn display(&self) -> Result<String> {
        ensure_non_empty(&self.coefficients)?;
        Ok(self.to_string())
    }

    /// Checks if the polynomial is zero.
    pub fn is_zero(&self) -> bool {
        self.coefficients.iter().all(|c| *c == 0)
    }

    /// Returns the leading coefficient of the polynomial.
    pub fn leading_coefficient(&self) -> Option<i64> {
        self.coefficients.first().copied()
    }

    /// Evaluates the polynomial at `x`.
    ///
    /// Terms are accumulated in `f64` and the sum is truncated toward zero, so
    /// results beyond 2^53 in magnitude lose precision.
    pub fn evaluate(&self, x: i64) -> Result<i64> {
        evaluate_coefficients(&self.coefficients, x)
    }

    /// Adds two polynomials together.
    ///
    /// # Returns
    ///
    /// A new polynomial containing the sum of the two polynomials.
    pub fn add(&self, other: &Self) -> Result<Self> {
        add_coefficients(&self.coefficients, &other.coefficients).map(Self::from_normalized)
    }

    /// Subtracts `other` from `self`.
    pub fn sub(&self, other: &Self) -> Result<Self> {
        sub_coefficients(&self.coefficients, &other.coefficients).map(Self::from_normalized)
    }

    /// Multiplies two polynomials using the naive algorithm.
    pub fn mul(&self, other: &Self) -> Result<Self> {
        mul_coefficients(&self.coefficients, &other.coefficients).map(Self::from_normalized)
    }

    /// Adds `other` into `self`.
    pub fn add_in_place(&mut self, other: &Self) -> Result<()> {
        self.coefficients = add_coefficients(&self.coefficients, &other.coefficients)?;
        Ok(())
    }

    /// Subtracts `other` from `self` in place.
    pub fn sub_in_place(&mut self, other: &Self) -> Result<()> {
        self.coefficients = sub_coefficients(&self.coefficients, &other.coefficients)?;
        Ok(())
    }

    /// Multiplies `self` by `other` in place.
    pub fn mul_in_place(&mut self, other: &Self) -> Result<()> {
        self.coefficients = mul_coefficients(&self.coefficients, &other.coefficients)?;
        Ok(())
    }

    /// Negates all coefficients of the polynomial.
    pub fn neg(&self) -> Self {
        Self::from_normalized(self.coefficients.iter().map(|c| c.wrapping_neg()).collect())
    }

    /// Multiplies each coefficient of the polynomial by a scalar.
    pub fn scalar_mul(&self, scalar: i64) -> Self {
        Self::from_normalized(normalize(
            self.coefficients
                .iter()
                .map(|c| c.wrapping_mul(scalar))
                .collect(),
        ))
    }

    fn from_normalized(coefficients: Vec<i64>) -> Self {
        Self { coefficients }
    }
}

impl TryFrom<Vec<i64>> for Polynomial {
    type Error = PolynomialError;

    fn try_from(coefficients: Vec<i64>) -> Result<Self> {
        Self::new(coefficients)
    }
}

impl From<Polynomial> for Vec<i64> {
    fn from(polynomial: Polynomial) -> Self {
        polynomial.coefficients
    }
}

/// Parses comma-separated coefficients in descending order, e.g. `"7,-5,-2,7,-19"`.
///
/// A single trailing comma is allowed; any other empty field is an error.
impl FromStr for Polynomial {
    type Err = PolynomialError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Self::new(Vec::new());
        }

        let s = s.strip_suffix(',').unwrap_or(s);
        let coefficients = s
            .split(',')
            .map(str::trim)
            .enumerate()
            .map(|(i, part)| {
                if part.is_empty() {
                    return Err(PolynomialError::invalid_argument(format!(
                        "empty coefficient at field {i}"
                    )));
                }
                part.parse::<i64>().map_err(|e| {
                    PolynomialError::invalid_argument(format!("bad coefficient '{part}': {e}"))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Self::new(coefficients)
    }
}
