pub mod base_pair;
pub mod codon;
pub mod error;
pub mod naming;
pub mod sequence;
pub mod strand;
pub mod transform;

pub use error::DogmaError;
pub use transform::{
    CodonToProteinResult, RnaToDnaResult, StrandResult, TranscribeResult, TranslateResult,
    codon_to_protein, rna_to_dna, transcribe, translate,
};
