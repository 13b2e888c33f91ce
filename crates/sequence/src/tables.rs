// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Static lookup tables for complementation, transcription and translation.

use phf::phf_map;

static DNA_COMPLEMENT: phf::Map<char, char> = phf_map! {
    'A' => 'T',
    'T' => 'A',
    'C' => 'G',
    'G' => 'C',
};

// Template-strand transcription: each base maps to the RNA base it pairs with.
static DNA_TO_RNA: phf::Map<char, char> = phf_map! {
    'A' => 'U',
    'T' => 'A',
    'C' => 'G',
    'G' => 'C',
};

/// Standard genetic code, RNA codons to one-letter amino acids (`*` = stop).
static GENETIC_CODE: phf::Map<&'static str, char> = phf_map! {
    "UUU" => 'F', "UUC" => 'F', "UUA" => 'L', "UUG" => 'L',
    "CUU" => 'L', "CUC" => 'L', "CUA" => 'L', "CUG" => 'L',
    "AUU" => 'I', "AUC" => 'I', "AUA" => 'I', "AUG" => 'M',
    "GUU" => 'V', "GUC" => 'V', "GUA" => 'V', "GUG" => 'V',
    "UCU" => 'S', "UCC" => 'S', "UCA" => 'S', "UCG" => 'S',
    "CCU" => 'P', "CCC" => 'P', "CCA" => 'P', "CCG" => 'P',
    "ACU" => 'T', "ACC" => 'T', "ACA" => 'T', "ACG" => 'T',
    "GCU" => 'A', "GCC" => 'A', "GCA" => 'A', "GCG" => 'A',
    "UAU" => 'Y', "UAC" => 'Y', "UAA" => '*', "UAG" => '*',
    "CAU" => 'H', "CAC" => 'H', "CAA" => 'Q', "CAG" => 'Q',
    "AAU" => 'N', "AAC" => 'N', "AAA" => 'K', "AAG" => 'K',
    "GAU" => 'D', "GAC" => 'D', "GAA" => 'E', "GAG" => 'E',
    "UGU" => 'C', "UGC" => 'C', "UGA" => '*', "UGG" => 'W',
    "CGU" => 'R', "CGC" => 'R', "CGA" => 'R', "CGG" => 'R',
    "AGU" => 'S', "AGC" => 'S', "AGA" => 'R', "AGG" => 'R',
    "GGU" => 'G', "GGC" => 'G', "GGA" => 'G', "GGG" => 'G',
};

/// Watson-Crick complement of a DNA base.
pub fn complement_base(base: char) -> Option<char> {
    DNA_COMPLEMENT.get(&base).copied()
}

/// RNA base transcribed from a template-strand DNA base.
pub fn transcribe_base(base: char) -> Option<char> {
    DNA_TO_RNA.get(&base).copied()
}

/// Amino acid encoded by an uppercase RNA codon.
pub fn translate_codon(codon: &str) -> Option<char> {
    GENETIC_CODE.get(codon).copied()
}
