use crate::base_pair::{self, UNPAIRED};
use crate::error::{DNA_HAS_INVALID_BASE, DogmaError, RNA_HAS_INVALID_BASE};
use crate::strand::ReadDirection;
use itertools::Itertools;
use serde::Serialize;
use strum::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
pub enum MoleculeKind {
    #[strum(serialize = "DNA")]
    #[serde(rename = "DNA")]
    Dna,

    #[strum(serialize = "RNA")]
    #[serde(rename = "RNA")]
    Rna,
}

impl MoleculeKind {
    pub const DNA_BASES: [char; 4] = ['A', 'T', 'G', 'C'];
    pub const RNA_BASES: [char; 4] = ['A', 'U', 'G', 'C'];

    pub fn alphabet(&self) -> &'static [char] {
        match self {
            Self::Dna => &Self::DNA_BASES,
            Self::Rna => &Self::RNA_BASES,
        }
    }

    /// The molecule a strand of this kind pairs with.
    pub fn paired(&self) -> Self {
        match self {
            Self::Dna => Self::Rna,
            Self::Rna => Self::Dna,
        }
    }

    fn pair_base(&self, base: char) -> Option<char> {
        match self {
            Self::Dna => base_pair::dna_to_rna(base),
            Self::Rna => base_pair::rna_to_dna(base),
        }
    }

    fn invalid_bases_error(&self, invalid: &[char]) -> DogmaError {
        match self {
            Self::Dna => DogmaError::InvalidDna(invalid_bases_message(DNA_HAS_INVALID_BASE, invalid)),
            Self::Rna => DogmaError::InvalidRna(invalid_bases_message(RNA_HAS_INVALID_BASE, invalid)),
        }
    }
}

/// Characters of `sequence` outside `alphabet`, in order, duplicates kept.
pub(crate) fn invalid_bases(sequence: &str, alphabet: &[char]) -> Vec<char> {
    sequence
        .chars()
        .filter(|base| !alphabet.contains(base))
        .collect()
}

pub(crate) fn invalid_bases_message(prefix: &str, invalid: &[char]) -> String {
    format!("{}: {}", prefix, invalid.iter().join(", "))
}

/// A validated DNA or RNA strand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NucleotideSequence {
    kind: MoleculeKind,

    /// Uppercase bases, every one in `kind.alphabet()`.
    bases: String,

    direction: ReadDirection,
}

impl NucleotideSequence {
    /// Uppercase `sequence` and check it against the alphabet of `kind`.
    pub fn new(
        kind: MoleculeKind,
        sequence: &str,
        direction: ReadDirection,
    ) -> Result<Self, DogmaError> {
        let bases = sequence.to_uppercase();

        let invalid = invalid_bases(&bases, kind.alphabet());
        if !invalid.is_empty() {
            return Err(kind.invalid_bases_error(&invalid));
        }

        Ok(Self {
            kind,
            bases,
            direction,
        })
    }

    pub fn kind(&self) -> MoleculeKind {
        self.kind
    }

    pub fn bases(&self) -> &str {
        &self.bases
    }

    pub fn direction(&self) -> ReadDirection {
        self.direction
    }

    pub fn len(&self) -> usize {
        self.bases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bases.is_empty()
    }

    /// Bases framed by their end labels, e.g. `5'-AUG-3'`.
    pub fn full_sequence(&self) -> String {
        format!(
            "{}'-{}-{}'",
            self.direction.read_from(),
            self.bases,
            self.direction.to()
        )
    }

    /// The complementary strand of the paired molecule.
    ///
    /// Base i pairs with base i, so the complement runs the opposite way and
    /// its read direction is swapped.
    pub fn complement(&self) -> Self {
        let kind = self.kind.paired();
        let bases = self
            .bases
            .chars()
            .map(|base| self.kind.pair_base(base).unwrap_or(UNPAIRED))
            .collect();

        Self {
            kind,
            bases,
            direction: self.direction.reverse(),
        }
    }

    /// Bases in 5' -> 3' order.
    pub fn five_to_three(&self) -> String {
        match self.direction {
            ReadDirection::FiveToThree => self.bases.clone(),
            ReadDirection::ThreeToFive => self.bases.chars().rev().collect(),
        }
    }
}
