// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::helpers::format_offsets;
use anyhow::{bail, Result};
use clap::{Args, Subcommand};
use labd_sequence::{DnaSequence, ProteinSequence, RnaSequence, SequenceKind};
use tracing::debug;

#[derive(Args, Debug, Clone)]
pub struct SequenceArgs {
    /// Sequence variant: dna, rna or protein
    #[arg(long, default_value = "dna")]
    kind: SequenceKind,

    /// Sequence identifier (stored lowercase)
    #[arg(long = "id", default_value = "seq")]
    identifier: String,

    /// Residues (stored uppercase)
    #[arg(long)]
    data: String,
}

#[derive(Subcommand, Debug)]
pub enum SeqCommands {
    /// Print the sequence as `>identifier` followed by its data
    Show(SequenceArgs),
    /// Replace one residue and print the result
    Mutate {
        #[command(flatten)]
        seq: SequenceArgs,

        /// Zero-based offset of the residue to replace
        #[arg(long)]
        position: usize,

        #[arg(long)]
        residue: char,
    },
    /// Print every offset where the motif starts
    Motif {
        #[command(flatten)]
        seq: SequenceArgs,

        #[arg(long)]
        motif: String,
    },
    /// Print the complementary DNA strand
    Complement(SequenceArgs),
    /// Transcribe DNA into RNA
    Transcribe(SequenceArgs),
    /// Translate RNA into protein
    Translate(SequenceArgs),
}

/// A sequence whose variant is only known at runtime.
#[derive(Debug)]
enum AnySequence {
    Dna(DnaSequence),
    Rna(RnaSequence),
    Protein(ProteinSequence),
}

impl AnySequence {
    fn build(args: &SequenceArgs) -> Result<Self> {
        let (id, data) = (args.identifier.as_str(), args.data.as_str());
        Ok(match args.kind {
            SequenceKind::Dna => Self::Dna(DnaSequence::new(id, data)?),
            SequenceKind::Rna => Self::Rna(RnaSequence::new(id, data)?),
            SequenceKind::Protein => Self::Protein(ProteinSequence::new(id, data)?),
        })
    }

    fn mutate(&mut self, position: usize, residue: char) -> Result<()> {
        match self {
            Self::Dna(s) => s.mutate(position, residue)?,
            Self::Rna(s) => s.mutate(position, residue)?,
            Self::Protein(s) => s.mutate(position, residue)?,
        }
        Ok(())
    }

    fn find_motif(&self, motif: &str) -> Vec<usize> {
        match self {
            Self::Dna(s) => s.find_motif(motif),
            Self::Rna(s) => s.find_motif(motif),
            Self::Protein(s) => s.find_motif(motif),
        }
    }

    fn into_dna(self, operation: &str) -> Result<DnaSequence> {
        match self {
            Self::Dna(s) => Ok(s),
            other => bail!("{operation} requires a DNA sequence, got {}", other.kind()),
        }
    }

    fn into_rna(self, operation: &str) -> Result<RnaSequence> {
        match self {
            Self::Rna(s) => Ok(s),
            other => bail!("{operation} requires an RNA sequence, got {}", other.kind()),
        }
    }

    fn kind(&self) -> SequenceKind {
        match self {
            Self::Dna(s) => s.kind(),
            Self::Rna(s) => s.kind(),
            Self::Protein(s) => s.kind(),
        }
    }
}

impl std::fmt::Display for AnySequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dna(s) => write!(f, "{s}"),
            Self::Rna(s) => write!(f, "{s}"),
            Self::Protein(s) => write!(f, "{s}"),
        }
    }
}

pub fn render(command: SeqCommands) -> Result<String> {
    let out = match command {
        SeqCommands::Show(args) => AnySequence::build(&args)?.to_string(),
        SeqCommands::Mutate {
            seq,
            position,
            residue,
        } => {
            let mut sequence = AnySequence::build(&seq)?;
            sequence.mutate(position, residue)?;
            sequence.to_string()
        }
        SeqCommands::Motif { seq, motif } => {
            let offsets = AnySequence::build(&seq)?.find_motif(&motif);
            debug!(motif = %motif, hits = offsets.len(), "motif search");
            format_offsets(&offsets)
        }
        SeqCommands::Complement(args) => AnySequence::build(&args)?
            .into_dna("complement")?
            .complement()?,
        SeqCommands::Transcribe(args) => AnySequence::build(&args)?
            .into_dna("transcribe")?
            .transcribe()?
            .to_string(),
        SeqCommands::Translate(args) => AnySequence::build(&args)?
            .into_rna("translate")?
            .translate()?
            .to_string(),
    };
    Ok(out)
}

pub fn execute(command: SeqCommands) -> Result<()> {
    println!("{}", render(command)?);
    Ok(())
}
