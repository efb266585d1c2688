use crate::error::{CODON_HAS_INVALID_BASE, DogmaError};
use crate::naming::NamingType;
use crate::sequence::{MoleculeKind, invalid_bases, invalid_bases_message};
use std::fmt;

pub const START_CODON: &str = "AUG";

/// The 20 standard amino acids plus the stop signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AminoAcid {
    Valine,
    Alanine,
    AsparticAcid,
    GlutamicAcid,
    Glycine,
    Phenylalanine,
    Serine,
    Tyrosine,
    Cysteine,
    Tryptophan,
    Leucine,
    Proline,
    Histidine,
    Glutamine,
    Arginine,
    Isoleucine,
    Threonine,
    Asparagine,
    Lysine,
    Methionine,
    Stop,
}

impl AminoAcid {
    pub const ALL: [AminoAcid; 21] = [
        Self::Valine,
        Self::Alanine,
        Self::AsparticAcid,
        Self::GlutamicAcid,
        Self::Glycine,
        Self::Phenylalanine,
        Self::Serine,
        Self::Tyrosine,
        Self::Cysteine,
        Self::Tryptophan,
        Self::Leucine,
        Self::Proline,
        Self::Histidine,
        Self::Glutamine,
        Self::Arginine,
        Self::Isoleucine,
        Self::Threonine,
        Self::Asparagine,
        Self::Lysine,
        Self::Methionine,
        Self::Stop,
    ];

    /// Short code, 3-letter code, full name.
    pub const fn names(&self) -> [&'static str; 3] {
        match self {
            Self::Valine => ["V", "Val", "Valine"],
            Self::Alanine => ["A", "Ala", "Alanine"],
            Self::AsparticAcid => ["D", "Asp", "Aspartic Acid"],
            Self::GlutamicAcid => ["E", "Glu", "Glutamic Acid"],
            Self::Glycine => ["G", "Gly", "Glycine"],
            Self::Phenylalanine => ["F", "Phe", "Phenylalanine"],
            Self::Serine => ["S", "Ser", "Serine"],
            Self::Tyrosine => ["Y", "Tyr", "Tyrosine"],
            Self::Cysteine => ["C", "Cys", "Cysteine"],
            Self::Tryptophan => ["W", "Trp", "Tryptophan"],
            Self::Leucine => ["L", "Leu", "Leucine"],
            Self::Proline => ["P", "Pro", "Proline"],
            Self::Histidine => ["H", "His", "Histidine"],
            Self::Glutamine => ["Q", "Gln", "Glutamine"],
            Self::Arginine => ["R", "Arg", "Arginine"],
            Self::Isoleucine => ["I", "Ile", "Isoleucine"],
            Self::Threonine => ["T", "Thr", "Threonine"],
            Self::Asparagine => ["N", "Asn", "Asparagine"],
            Self::Lysine => ["K", "Lys", "Lysine"],
            Self::Methionine => ["M", "Met", "Methionine"],
            Self::Stop => ["Stop", "Stop", "Stop"],
        }
    }

    pub fn name(&self, naming: NamingType) -> &'static str {
        self.names()[naming.name_index()]
    }

    /// Synonymous codons, in table order.
    pub const fn codons(&self) -> &'static [&'static str] {
        match self {
            Self::Valine => &["GUU", "GUC", "GUA", "GUG"],
            Self::Alanine => &["GCU", "GCC", "GCA", "GCG"],
            Self::AsparticAcid => &["GAU", "GAC"],
            Self::GlutamicAcid => &["GAA", "GAG"],
            Self::Glycine => &["GGU", "GGC", "GGA", "GGG"],
            Self::Phenylalanine => &["UUU", "UUC"],
            Self::Serine => &["UCU", "UCC", "UCA", "UCG", "AGU", "AGC"],
            Self::Tyrosine => &["UAU", "UAC"],
            Self::Cysteine => &["UGU", "UGC"],
            Self::Tryptophan => &["UGG"],
            Self::Leucine => &["CUU", "CUC", "CUA", "CUG", "UUA", "UUG"],
            Self::Proline => &["CCU", "CCC", "CCA", "CCG"],
            Self::Histidine => &["CAU", "CAC"],
            Self::Glutamine => &["CAA", "CAG"],
            Self::Arginine => &["CGU", "CGC", "CGA", "CGG", "AGA", "AGG"],
            Self::Isoleucine => &["AUU", "AUC", "AUA"],
            Self::Threonine => &["ACU", "ACC", "ACA", "ACG"],
            Self::Asparagine => &["AAU", "AAC"],
            Self::Lysine => &["AAA", "AAG"],
            Self::Methionine => &["AUG"],
            Self::Stop => &["UAA", "UAG", "UGA"],
        }
    }

    /// Look up an uppercase RNA triplet.
    pub fn from_codon(codon: &[u8]) -> Option<Self> {
        codon_index(codon).and_then(|index| CODON_TABLE[index])
    }
}

/// Index of a base in U/C/A/G order.
const fn base_index(base: u8) -> Option<usize> {
    match base {
        b'U' => Some(0),
        b'C' => Some(1),
        b'A' => Some(2),
        b'G' => Some(3),
        _ => None,
    }
}

const fn codon_index(codon: &[u8]) -> Option<usize> {
    if codon.len() != 3 {
        return None;
    }

    match (
        base_index(codon[0]),
        base_index(codon[1]),
        base_index(codon[2]),
    ) {
        (Some(first), Some(second), Some(third)) => Some(first * 16 + second * 4 + third),
        _ => None,
    }
}

/// Reverse of `AminoAcid::codons`, indexed by `codon_index`.
static CODON_TABLE: [Option<AminoAcid>; 64] = {
    let mut table = [None; 64];
    let mut i = 0;
    while i < AminoAcid::ALL.len() {
        let amino_acid = AminoAcid::ALL[i];
        let codons = amino_acid.codons();
        let mut j = 0;
        while j < codons.len() {
            if let Some(index) = codon_index(codons[j].as_bytes()) {
                table[index] = Some(amino_acid);
            }
            j += 1;
        }
        i += 1;
    }
    table
};

/// Three validated RNA bases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Codon([u8; 3]);

impl Codon {
    /// Uppercase `codon`, then check its length and alphabet.
    pub fn parse(codon: &str) -> Result<Self, DogmaError> {
        let codon = codon.to_uppercase();
        if codon.chars().count() != 3 {
            return Err(DogmaError::invalid_codon_length());
        }

        let invalid = invalid_bases(&codon, MoleculeKind::Rna.alphabet());
        if !invalid.is_empty() {
            return Err(DogmaError::InvalidCodon(invalid_bases_message(
                CODON_HAS_INVALID_BASE,
                &invalid,
            )));
        }

        let bases: [u8; 3] = codon
            .as_bytes()
            .try_into()
            .map_err(|_| DogmaError::invalid_codon_length())?;
        Ok(Self(bases))
    }

    pub fn amino_acid(&self) -> Option<AminoAcid> {
        AminoAcid::from_codon(&self.0)
    }

    pub fn is_stop(&self) -> bool {
        self.amino_acid() == Some(AminoAcid::Stop)
    }
}

impl fmt::Display for Codon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for base in self.0 {
            write!(f, "{}", base as char)?;
        }
        Ok(())
    }
}
