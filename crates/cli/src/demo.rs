// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::helpers::format_offsets;
use anyhow::{Context, Result};
use labd_config::DemoConfig;
use labd_polynomial::Polynomial;
use labd_sequence::DnaSequence;
use std::fmt::Write;
use tracing::{info, instrument};

fn polynomials(config: &DemoConfig, out: &mut String) -> Result<()> {
    let polys = config
        .polynomials
        .iter()
        .map(|c| Polynomial::new(c.clone()))
        .collect::<Result<Vec<_>, _>>()
        .context("Invalid demo polynomial")?;

    for p in &polys {
        writeln!(out, "{}", p.degree()?)?;
        writeln!(out, "{}", p.display()?)?;
        writeln!(out, "W({}) = {}", config.eval_point, p.evaluate(config.eval_point)?)?;
    }

    if let Err(e) = Polynomial::new(Vec::new()) {
        writeln!(out, "Error: {e}")?;
    }

    if let [a, b, ..] = polys.as_slice() {
        writeln!(out, "{}", a.add(b)?.display()?)?;
        writeln!(out, "{}", a.sub(b)?.display()?)?;
        writeln!(out, "{}", a.mul(b)?.display()?)?;

        let mut acc = a.clone();
        acc.add_in_place(b)?;
        acc.mul_in_place(b)?;
        acc.sub_in_place(a)?;
        writeln!(out, "{}", acc.display()?)?;
    }
    Ok(())
}

fn sequences(config: &DemoConfig, out: &mut String) -> Result<()> {
    let mut dna = DnaSequence::new(&config.dna.identifier, &config.dna.data)
        .context("Invalid demo DNA sequence")?;
    writeln!(out, "{dna}")?;

    dna.mutate(config.mutation.position, config.mutation.residue)?;
    writeln!(out, "{dna}")?;
    writeln!(out, "{}", format_offsets(&dna.find_motif(&config.motif)))?;
    writeln!(out, "{}", dna.complement()?)?;

    let rna = dna.transcribe()?;
    writeln!(out, "{rna}")?;
    let protein = rna.translate()?;
    writeln!(out, "{protein}")?;
    Ok(())
}

/// Builds the walkthrough text for `config`.
pub fn report(config: &DemoConfig) -> Result<String> {
    let mut out = String::new();
    polynomials(config, &mut out)?;
    writeln!(out)?;
    sequences(config, &mut out)?;
    Ok(out)
}

#[instrument(skip_all)]
pub fn execute(config: &DemoConfig) -> Result<()> {
    info!(
        polynomials = config.polynomials.len(),
        sequence = %config.dna.identifier,
        "running demo"
    );
    print!("{}", report(config)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_report() -> Result<()> {
        let out = report(&DemoConfig::default())?;
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines[0], "3");
        assert_eq!(lines[1], "W(x) = 4x^3");
        assert_eq!(lines[2], "W(2) = 32");
        assert_eq!(lines[4], "W(x) = 7x^4 - 5x^3 - 2x^2 + 7x - 19");
        assert_eq!(lines[6], "0");
        assert_eq!(lines[7], "W(x) = 21");
        assert!(lines[9].starts_with("Error: "));
        assert_eq!(lines[10], "W(x) = 7x^4 - 1x^3 - 2x^2 + 7x - 19");

        assert!(out.contains(">sekwencja1\nATACCCGATGCGATATCGAAAATAGATCTCA\n"));
        assert!(out.contains("[6, 11, 24]\n"));
        assert!(out.contains("TATGGGCTACGCTATAGCTTTTATCTAGAGT\n"));
        assert!(out.contains(">sekwencja1\nUAUGGGCUACGCUAUAGCUUUUAUCUAGAGU\n"));
        assert!(out.ends_with(">sekwencja1\nYGLRYSFYLE\n"));
        Ok(())
    }

    #[test]
    fn test_invalid_inputs_fail() {
        let mut config = DemoConfig::default();
        config.polynomials.push(Vec::new());
        assert!(report(&config).is_err());

        let mut config = DemoConfig::default();
        config.dna.data = "ACGU".to_string();
        assert!(report(&config).is_err());

        let mut config = DemoConfig::default();
        config.mutation.position = 99;
        assert!(report(&config).is_err());
    }
}
