// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use anyhow::Result;
use clap::{Args, Subcommand};
use labd_polynomial::Polynomial;
use tracing::debug;

#[derive(Args, Debug)]
pub struct BinaryArgs {
    /// Left operand, comma-separated coefficients highest degree first. Eg. `7,-5,-2,7,-19`
    #[arg(allow_hyphen_values = true)]
    lhs: Polynomial,

    /// Right operand
    #[arg(allow_hyphen_values = true)]
    rhs: Polynomial,

    /// Update the left operand in place instead of building a new polynomial
    #[arg(long)]
    in_place: bool,
}

#[derive(Subcommand, Debug)]
pub enum PolyCommands {
    /// Print the degree
    Degree {
        #[arg(allow_hyphen_values = true)]
        coefficients: Polynomial,
    },
    /// Print `W(x) = ...`
    Show {
        #[arg(allow_hyphen_values = true)]
        coefficients: Polynomial,
    },
    /// Evaluate at a point
    Eval {
        #[arg(allow_hyphen_values = true)]
        coefficients: Polynomial,

        #[arg(long = "at", allow_hyphen_values = true)]
        x: i64,
    },
    /// Add two polynomials
    Add(BinaryArgs),
    /// Subtract the second polynomial from the first
    Sub(BinaryArgs),
    /// Multiply two polynomials
    Mul(BinaryArgs),
}

#[derive(Debug, Clone, Copy)]
enum Operation {
    Add,
    Sub,
    Mul,
}

fn apply(op: Operation, args: BinaryArgs) -> Result<Polynomial> {
    let BinaryArgs { lhs, rhs, in_place } = args;
    debug!(?op, in_place, "polynomial arithmetic");

    if in_place {
        let mut acc = lhs;
        match op {
            Operation::Add => acc.add_in_place(&rhs)?,
            Operation::Sub => acc.sub_in_place(&rhs)?,
            Operation::Mul => acc.mul_in_place(&rhs)?,
        }
        return Ok(acc);
    }

    let result = match op {
        Operation::Add => lhs.add(&rhs)?,
        Operation::Sub => lhs.sub(&rhs)?,
        Operation::Mul => lhs.mul(&rhs)?,
    };
    Ok(result)
}

pub fn render(command: PolyCommands) -> Result<String> {
    let out = match command {
        PolyCommands::Degree { coefficients } => coefficients.degree()?.to_string(),
        PolyCommands::Show { coefficients } => coefficients.display()?,
        PolyCommands::Eval { coefficients, x } => coefficients.evaluate(x)?.to_string(),
        PolyCommands::Add(args) => apply(Operation::Add, args)?.display()?,
        PolyCommands::Sub(args) => apply(Operation::Sub, args)?.display()?,
        PolyCommands::Mul(args) => apply(Operation::Mul, args)?.display()?,
    };
    Ok(out)
}

pub fn execute(command: PolyCommands) -> Result<()> {
    println!("{}", render(command)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser, Debug)]
    struct PolyCli {
        #[command(subcommand)]
        command: PolyCommands,
    }

    fn run(args: &[&str]) -> Result<String> {
        let argv = std::iter::once("poly").chain(args.iter().copied());
        render(PolyCli::try_parse_from(argv)?.command)
    }

    #[test]
    fn test_show_and_degree() -> Result<()> {
        assert_eq!(
            run(&["show", "7,-5,-2,7,-19"])?,
            "W(x) = 7x^4 - 5x^3 - 2x^2 + 7x - 19"
        );
        assert_eq!(run(&["degree", "0,0,4,0,0,0"])?, "3");
        Ok(())
    }

    #[test]
    fn test_eval() -> Result<()> {
        assert_eq!(run(&["eval", "2,-2,1", "--at", "2"])?, "5");
        assert_eq!(run(&["eval", "1,0,0", "--at", "-3"])?, "9");
        Ok(())
    }

    #[test]
    fn test_arithmetic_both_forms() -> Result<()> {
        for extra in [None, Some("--in-place")] {
            let with = |mut args: Vec<&'static str>| {
                args.extend(extra);
                args
            };
            assert_eq!(run(&with(vec!["add", "1,2,3", "3,2,1"]))?, "W(x) = 4x^2 + 4x + 4");
            assert_eq!(run(&with(vec!["sub", "4,2,0", "1,2,-1"]))?, "W(x) = 3x^2 + 1");
            assert_eq!(
                run(&with(vec!["mul", "1,2,1", "3,5,2"]))?,
                "W(x) = 3x^4 + 11x^3 + 15x^2 + 9x + 2"
            );
        }
        Ok(())
    }

    #[test]
    fn test_bad_coefficients() {
        assert!(run(&["show", "1,two,3"]).is_err());
    }
}
