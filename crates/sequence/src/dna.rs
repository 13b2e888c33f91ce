// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::errors::Result;
use crate::sequence::{DnaSequence, RnaSequence};
use crate::tables::{complement_base, transcribe_base};
use tracing::debug;

impl DnaSequence {
    /// Complementary strand (A<->T, C<->G) as a new string.
    pub fn complement(&self) -> Result<String> {
        self.revalidate()?;
        self.map_residues(complement_base)
    }

    /// Transcribes the strand into RNA under the same identifier.
    ///
    /// Each base is replaced by the RNA base pairing with it
    /// (A->U, T->A, C->G, G->C), so the result is read off a template strand.
    pub fn transcribe(&self) -> Result<RnaSequence> {
        self.revalidate()?;
        let rna = RnaSequence::new(self.identifier(), &self.map_residues(transcribe_base)?)?;
        debug!(identifier = %rna.identifier(), length = rna.length(), "transcribed DNA");
        Ok(rna)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complement() {
        let seq = DnaSequence::new("sekwencja1", "ACGTC").unwrap();
        assert_eq!(seq.complement().unwrap(), "TGCAG");
        // source is untouched
        assert_eq!(seq.data(), "ACGTC");
    }

    #[test]
    fn transcribe() {
        let seq = DnaSequence::new("sekwencja1", "ACGTC").unwrap();
        let rna = seq.transcribe().unwrap();
        assert_eq!(
            rna.to_string(),
            RnaSequence::new("sekwencja1", "UGCAG").unwrap().to_string()
        );
        assert_eq!(rna.identifier(), seq.identifier());
    }

    #[test]
    fn transcribe_after_mutation() {
        let mut seq = DnaSequence::new("x", "AAAA").unwrap();
        seq.mutate(2, 'g').unwrap();
        assert_eq!(seq.transcribe().unwrap().data(), "UUCU");
        assert_eq!(seq.complement().unwrap(), "TTCT");
    }
}
