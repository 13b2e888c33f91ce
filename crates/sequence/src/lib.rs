// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! # Sequence Library
//!
//! DNA, RNA and protein sequences sharing one contract: FASTA-style display,
//! point mutation and motif search. DNA adds complementation and
//! transcription, RNA adds translation with the standard genetic code.
//!
//! ```
//! use labd_sequence::DnaSequence;
//!
//! let dna = DnaSequence::new("demo", "ACGTC").unwrap();
//! assert_eq!(dna.complement().unwrap(), "TGCAG");
//! assert_eq!(dna.transcribe().unwrap().data(), "UGCAG");
//! ```

pub mod alphabet;
mod dna;
pub mod errors;
mod rna;
pub mod sequence;
pub mod tables;

pub use alphabet::{Alphabet, Dna, Protein, Rna, SequenceKind};
pub use errors::{Result, SequenceError};
pub use sequence::{BioSequence, DnaSequence, ProteinSequence, RnaSequence};
pub use tables::{complement_base, transcribe_base, translate_codon};
