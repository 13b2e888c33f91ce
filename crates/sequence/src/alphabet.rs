// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Alphabets of the three sequence variants.
//!
//! Each alphabet is a zero-sized marker implementing [`Alphabet`]; the marker
//! picks the residue set a [`BioSequence`](crate::BioSequence) is validated
//! against.

use crate::errors::SequenceError;
use std::fmt;
use std::str::FromStr;

/// The closed set of sequence variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SequenceKind {
    Dna,
    Rna,
    Protein,
}

impl fmt::Display for SequenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SequenceKind::Dna => "DNA",
            SequenceKind::Rna => "RNA",
            SequenceKind::Protein => "protein",
        };
        f.write_str(name)
    }
}

impl FromStr for SequenceKind {
    type Err = SequenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dna" => Ok(SequenceKind::Dna),
            "rna" => Ok(SequenceKind::Rna),
            "protein" => Ok(SequenceKind::Protein),
            _ => Err(SequenceError::UnknownKind {
                name: s.to_string(),
            }),
        }
    }
}

/// Fixed residue set of a sequence variant.
pub trait Alphabet: fmt::Debug + Clone + Copy + PartialEq + Eq + 'static {
    const KIND: SequenceKind;

    /// Valid residues, uppercase.
    const VALID_CHARS: &'static [char];

    /// Whether `residue` (already uppercased) belongs to the alphabet.
    fn is_valid(residue: char) -> bool {
        Self::VALID_CHARS.contains(&residue)
    }
}

/// `ACGT`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dna;

impl Alphabet for Dna {
    const KIND: SequenceKind = SequenceKind::Dna;
    const VALID_CHARS: &'static [char] = &['A', 'C', 'G', 'T'];
}

/// `ACGU`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rna;

impl Alphabet for Rna {
    const KIND: SequenceKind = SequenceKind::Rna;
    const VALID_CHARS: &'static [char] = &['A', 'C', 'G', 'U'];
}

/// The 20 standard amino acids plus `O` (pyrrolysine), `X` (unknown) and `*` (stop).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Protein;

impl Alphabet for Protein {
    const KIND: SequenceKind = SequenceKind::Protein;
    const VALID_CHARS: &'static [char] = &[
        'A', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S', 'T',
        'V', 'W', 'X', 'Y', '*',
    ];
}
