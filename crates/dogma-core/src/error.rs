use thiserror::Error;

pub const START_CODON_NOT_FOUND: &str = "Start codon not found";
pub const DNA_HAS_INVALID_BASE: &str = "DNA contains invalid base(s)";
pub const RNA_HAS_INVALID_BASE: &str = "RNA contains invalid base(s)";
pub const INVALID_CODON_LENGTH: &str = "Codon length must be 3";
pub const CODON_HAS_INVALID_BASE: &str = "Codon contains invalid base(s)";

/// Malformed molecule input. Every variant is a bad request.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum DogmaError {
    /// Read direction is not (3, 5) or (5, 3).
    #[error("{0}")]
    InvalidStrandRead(String),

    #[error("{0}")]
    InvalidDna(String),

    #[error("{0}")]
    InvalidRna(String),

    /// Wrong length or bases outside the RNA alphabet.
    #[error("{0}")]
    InvalidCodon(String),

    #[error("{0}")]
    NoStartCodon(String),
}

impl DogmaError {
    pub fn status_code(&self) -> u16 {
        400
    }

    pub fn message(&self) -> &str {
        match self {
            Self::InvalidStrandRead(m)
            | Self::InvalidDna(m)
            | Self::InvalidRna(m)
            | Self::InvalidCodon(m)
            | Self::NoStartCodon(m) => m,
        }
    }

    pub fn invalid_edge(read_from: &str, to: &str) -> Self {
        Self::InvalidStrandRead(format!("Edge pair is invalid: ('{}', '{}')", read_from, to))
    }

    pub fn no_start_codon() -> Self {
        Self::NoStartCodon(START_CODON_NOT_FOUND.to_string())
    }

    pub fn invalid_codon_length() -> Self {
        Self::InvalidCodon(INVALID_CODON_LENGTH.to_string())
    }
}
