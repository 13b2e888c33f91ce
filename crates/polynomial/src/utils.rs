// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Coefficient-slice algorithms shared by the value-returning and in-place
//! polynomial operations.
//!
//! Every function here works on coefficients in descending order of degree
//! (index 0 is the highest-degree term) and returns a normalized vector: leading
//! zeros are stripped while more than one coefficient remains, so the zero
//! polynomial is always `[0]`.

use crate::errors::{PolynomialError, Result};

/// Strips leading zero coefficients, keeping at least one coefficient.
///
/// An empty input becomes `[0]`.
pub fn normalize(mut coefficients: Vec<i64>) -> Vec<i64> {
    let leading_zeros = coefficients
        .iter()
        .take_while(|c| **c == 0)
        .count()
        .min(coefficients.len().saturating_sub(1));
    coefficients.drain(..leading_zeros);

    if coefficients.is_empty() {
        coefficients.push(0);
    }
    coefficients
}

/// Fails with [`PolynomialError::InvalidArgument`] when `coefficients` is empty.
pub fn ensure_non_empty(coefficients: &[i64]) -> Result<&[i64]> {
    if coefficients.is_empty() {
        return Err(PolynomialError::invalid_argument(
            "polynomial has no coefficients",
        ));
    }
    Ok(coefficients)
}

fn ensure_operands(lhs: &[i64], rhs: &[i64]) -> Result<()> {
    if lhs.is_empty() || rhs.is_empty() {
        return Err(PolynomialError::invalid_argument(
            "at least one operand has no coefficients",
        ));
    }
    Ok(())
}

/// Aligns both operands at their constant terms and combines them term by term.
fn combine_aligned(lhs: &[i64], rhs: &[i64], op: impl Fn(i64, i64) -> i64) -> Result<Vec<i64>> {
    ensure_operands(lhs, rhs)?;

    let max_length = lhs.len().max(rhs.len());
    let lhs_offset = max_length - lhs.len();
    let rhs_offset = max_length - rhs.len();

    let result = (0..max_length)
        .map(|i| {
            let a = if i >= lhs_offset { lhs[i - lhs_offset] } else { 0 };
            let b = if i >= rhs_offset { rhs[i - rhs_offset] } else { 0 };
            op(a, b)
        })
        .collect();

    Ok(normalize(result))
}

/// Adds two coefficient sequences.
pub fn add_coefficients(lhs: &[i64], rhs: &[i64]) -> Result<Vec<i64>> {
    combine_aligned(lhs, rhs, i64::wrapping_add)
}

/// Subtracts `rhs` from `lhs`.
pub fn sub_coefficients(lhs: &[i64], rhs: &[i64]) -> Result<Vec<i64>> {
    combine_aligned(lhs, rhs, i64::wrapping_sub)
}

/// Multiplies two coefficient sequences by full convolution.
///
/// The product has `lhs.len() + rhs.len() - 1` coefficients before
/// normalization; `result[i + j]` accumulates `lhs[i] * rhs[j]`.
pub fn mul_coefficients(lhs: &[i64], rhs: &[i64]) -> Result<Vec<i64>> {
    ensure_operands(lhs, rhs)?;

    let mut product = vec![0i64; lhs.len() + rhs.len() - 1];
    for (i, a) in lhs.iter().enumerate() {
        for (j, b) in rhs.iter().enumerate() {
            product[i + j] = product[i + j].wrapping_add(a.wrapping_mul(*b));
        }
    }

    Ok(normalize(product))
}

/// Evaluates the coefficients at `x`.
///
/// Each term is computed as `coefficient * x^power` in `f64` and summed in
/// `f64`; the sum is truncated toward zero (saturating at the `i64` bounds).
pub fn evaluate_coefficients(coefficients: &[i64], x: i64) -> Result<i64> {
    let coefficients = ensure_non_empty(coefficients)?;
    let degree = coefficients.len() - 1;
    let base = x as f64;

    let sum: f64 = coefficients
        .iter()
        .enumerate()
        .map(|(i, c)| *c as f64 * base.powf((degree - i) as f64))
        .sum();

    Ok(sum as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_leading_zeros() {
        assert_eq!(normalize(vec![0, 0, 1, 2]), vec![1, 2]);
        assert_eq!(normalize(vec![3, 0, 1]), vec![3, 0, 1]);
    }

    #[test]
    fn test_normalize_all_zero() {
        assert_eq!(normalize(vec![0, 0, 0]), vec![0]);
        assert_eq!(normalize(vec![0]), vec![0]);
        assert_eq!(normalize(vec![]), vec![0]);
    }

    #[test]
    fn test_add_right_aligned() {
        // (x^2 + 2x + 3) + (5x + 1)
        assert_eq!(add_coefficients(&[1, 2, 3], &[5, 1]).unwrap(), vec![1, 7, 4]);
        assert_eq!(add_coefficients(&[5, 1], &[1, 2, 3]).unwrap(), vec![1, 7, 4]);
    }

    #[test]
    fn test_add_cancels_leading_terms() {
        assert_eq!(add_coefficients(&[1, 2, 3], &[-1, -2, 1]).unwrap(), vec![4]);
        assert_eq!(add_coefficients(&[1, 2], &[-1, -2]).unwrap(), vec![0]);
    }

    #[test]
    fn test_sub_shorter_minuend() {
        // (x + 1) - (2x^2 + x + 1) = -2x^2
        assert_eq!(sub_coefficients(&[1, 1], &[2, 1, 1]).unwrap(), vec![-2, 0, 0]);
    }

    #[test]
    fn test_mul_convolution() {
        assert_eq!(
            mul_coefficients(&[1, 2, 1], &[3, 5, 2]).unwrap(),
            vec![3, 11, 15, 9, 2]
        );
        assert_eq!(mul_coefficients(&[0], &[3, 5, 2]).unwrap(), vec![0]);
    }

    #[test]
    fn test_empty_operands_rejected() {
        assert!(add_coefficients(&[], &[1]).is_err());
        assert!(sub_coefficients(&[1], &[]).is_err());
        assert!(mul_coefficients(&[], &[]).is_err());
        assert!(evaluate_coefficients(&[], 3).is_err());
    }

    #[test]
    fn test_evaluate_exact() {
        assert_eq!(evaluate_coefficients(&[2, -2, 1], 2).unwrap(), 5);
        assert_eq!(evaluate_coefficients(&[1, 0, 0], -3).unwrap(), 9);
        assert_eq!(evaluate_coefficients(&[7], 100).unwrap(), 7);
        assert_eq!(evaluate_coefficients(&[1, 0], 0).unwrap(), 0);
    }

    #[test]
    fn test_evaluate_saturates_at_i64_range() {
        // 1.6e19 does not fit in i64
        assert_eq!(evaluate_coefficients(&[1, 0, 0], 4_000_000_000).unwrap(), i64::MAX);
        assert_eq!(evaluate_coefficients(&[-1, 0, 0], 4_000_000_000).unwrap(), i64::MIN);
        assert_eq!(evaluate_coefficients(&[1, 0, 0, 0], -4_000_000_000).unwrap(), i64::MIN);
    }

    #[test]
    fn test_evaluate_loses_precision_above_2_pow_53() {
        let x = 1_i64 << 53;
        // x + 1 is not representable in f64 and rounds back to x
        assert_eq!(evaluate_coefficients(&[1, 1], x).unwrap(), x);
        assert_eq!(evaluate_coefficients(&[1, 2], x).unwrap(), x + 2);
    }
}
