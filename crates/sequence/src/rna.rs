// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::errors::{Result, SequenceError};
use crate::sequence::{ProteinSequence, RnaSequence};
use crate::tables::translate_codon;
use tracing::debug;

impl RnaSequence {
    /// Translates the sequence into protein under the same identifier.
    ///
    /// Codons are read from offset 0 without overlap; a trailing one or two
    /// bases are dropped. Stop codons become `*` and translation continues past
    /// them. Fewer than three bases leave nothing to translate, which fails as
    /// an empty protein sequence.
    pub fn translate(&self) -> Result<ProteinSequence> {
        self.revalidate()?;

        let data = self.data();
        let residues = (0..data.len() / 3)
            .map(|i| {
                let codon = data.get(3 * i..3 * i + 3).unwrap_or_default();
                translate_codon(codon).ok_or_else(|| SequenceError::UnknownCodon {
                    codon: codon.to_string(),
                })
            })
            .collect::<Result<String>>()?;

        let protein = ProteinSequence::new(self.identifier(), &residues)?;
        debug!(
            identifier = %protein.identifier(),
            dropped = data.len() % 3,
            "translated RNA"
        );
        Ok(protein)
    }
}
