// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Error types for sequence operations.
//!
//! Every variant is an invalid-argument failure: it is returned before any
//! state is touched.

use crate::alphabet::SequenceKind;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SequenceError {
    /// No residues were supplied
    #[error("Invalid argument: empty {kind} sequence")]
    EmptySequence { kind: SequenceKind },

    /// A residue outside the alphabet was found in the sequence data
    #[error("Invalid argument: {kind} sequence cannot contain '{residue}' (position {position})")]
    InvalidResidue {
        kind: SequenceKind,
        residue: char,
        position: usize,
    },

    /// Mutation position past the end of the data
    #[error("Invalid argument: position {position} is outside a sequence of length {length}")]
    PositionOutOfRange { position: usize, length: usize },

    /// Mutation residue outside the alphabet
    #[error("Invalid argument: '{residue}' is not a valid {kind} residue")]
    InvalidReplacement { kind: SequenceKind, residue: char },

    #[error("Invalid argument: codon '{codon}' is not in the genetic code")]
    UnknownCodon { codon: String },

    #[error("Invalid argument: unknown sequence kind '{name}' (expected dna, rna or protein)")]
    UnknownKind { name: String },
}

/// Result type alias for sequence operations
pub type Result<T> = std::result::Result<T, SequenceError>;
