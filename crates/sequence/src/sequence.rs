// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Validated biological sequence parameterized by its alphabet.

use crate::alphabet::{Alphabet, Dna, Protein, Rna, SequenceKind};
use crate::errors::{Result, SequenceError};
use std::fmt;
use std::marker::PhantomData;
use tracing::{debug, trace};

/// A named sequence whose residues all belong to the alphabet `A`.
///
/// The identifier is stored lowercase and the data uppercase. `length` is the
/// data length recorded at construction; point mutations never change it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BioSequence<A: Alphabet> {
    identifier: String,
    data: String,
    length: usize,
    _alphabet: PhantomData<A>,
}

pub type DnaSequence = BioSequence<Dna>;
pub type RnaSequence = BioSequence<Rna>;
pub type ProteinSequence = BioSequence<Protein>;

/// Checks that `data` is non-empty and made only of residues of `A`.
fn validate<A: Alphabet>(data: &str) -> Result<()> {
    if data.is_empty() {
        return Err(SequenceError::EmptySequence { kind: A::KIND });
    }

    match data.chars().enumerate().find(|(_, c)| !A::is_valid(*c)) {
        Some((position, residue)) => Err(SequenceError::InvalidResidue {
            kind: A::KIND,
            residue,
            position,
        }),
        None => Ok(()),
    }
}

impl<A: Alphabet> BioSequence<A> {
    /// Creates a sequence, lowercasing `identifier` and uppercasing `data`.
    ///
    /// Only ASCII letters are case-folded in `data`, so a non-ASCII residue is
    /// rejected as is.
    ///
    /// # Errors
    ///
    /// `EmptySequence` when `data` is empty, `InvalidResidue` when an
    /// uppercased residue is not in the alphabet.
    pub fn new(identifier: &str, data: &str) -> Result<Self> {
        let identifier = identifier.to_lowercase();
        let data = data.to_ascii_uppercase();
        validate::<A>(&data)?;

        let length = data.chars().count();
        trace!(identifier = %identifier, kind = %A::KIND, length, "sequence created");

        Ok(Self {
            identifier,
            data,
            length,
            _alphabet: PhantomData,
        })
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn data(&self) -> &str {
        &self.data
    }

    pub fn valid_chars(&self) -> &'static [char] {
        A::VALID_CHARS
    }

    /// Length of the data when the sequence was created.
    pub fn length(&self) -> usize {
        self.length
    }

    pub fn kind(&self) -> SequenceKind {
        A::KIND
    }

    /// Replaces the residue at `position` with the uppercased `value`.
    ///
    /// Nothing is written unless both the position and the residue are valid.
    pub fn mutate(&mut self, position: usize, value: char) -> Result<()> {
        let length = self.data.len();
        if position >= length {
            return Err(SequenceError::PositionOutOfRange { position, length });
        }

        let residue = value.to_ascii_uppercase();
        if !A::is_valid(residue) {
            return Err(SequenceError::InvalidReplacement {
                kind: A::KIND,
                residue: value,
            });
        }

        // Data is validated ASCII, so byte offsets are residue offsets.
        let mut buf = [0u8; 4];
        self.data
            .replace_range(position..position + 1, residue.encode_utf8(&mut buf));
        debug!(identifier = %self.identifier, position, %residue, "sequence mutated");
        Ok(())
    }

    /// Offsets of every occurrence of `motif`, compared case-insensitively.
    ///
    /// Overlapping occurrences are all reported, in ascending order. An empty
    /// motif matches at every offset `0..=len`.
    pub fn find_motif(&self, motif: &str) -> Vec<usize> {
        let motif = motif.to_ascii_uppercase();
        let haystack = self.data.as_bytes();
        let needle = motif.as_bytes();

        if needle.len() > haystack.len() {
            return Vec::new();
        }

        (0..=haystack.len() - needle.len())
            .filter(|&offset| &haystack[offset..offset + needle.len()] == needle)
            .collect()
    }

    /// Validates the current data against the alphabet again.
    pub(crate) fn revalidate(&self) -> Result<()> {
        validate::<A>(&self.data)
    }

    /// Maps every residue through `table`, failing on the first unmapped one.
    pub(crate) fn map_residues(&self, table: fn(char) -> Option<char>) -> Result<String> {
        self.data
            .chars()
            .enumerate()
            .map(|(position, residue)| {
                table(residue).ok_or(SequenceError::InvalidResidue {
                    kind: A::KIND,
                    residue,
                    position,
                })
            })
            .collect()
    }
}

/// FASTA-style rendering: `>identifier` followed by the data on the next line.
impl<A: Alphabet> fmt::Display for BioSequence<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ">{}\n{}", self.identifier, self.data)
    }
}
