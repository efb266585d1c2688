use crate::error::DogmaError;
use serde::Serialize;
use strum::{Display, EnumString};

/// One physical end of a nucleic acid strand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize)]
pub enum StrandEnd {
    #[strum(serialize = "3")]
    #[serde(rename = "3")]
    ThreePrime,

    #[strum(serialize = "5")]
    #[serde(rename = "5")]
    FivePrime,
}

impl StrandEnd {
    pub const THREE_PRIME: &str = "3";
    pub const FIVE_PRIME: &str = "5";
}

/// Which end a strand is read from. Only the two non-degenerate pairs exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadDirection {
    /// 3' -> 5'
    ThreeToFive,
    /// 5' -> 3'
    FiveToThree,
}

impl ReadDirection {
    /// Direction of a DNA template strand.
    pub const TEMPLATE: Self = Self::ThreeToFive;

    /// Direction an RNA strand is written and translated in.
    pub const CODING: Self = Self::FiveToThree;

    pub fn from_labels(read_from: &str, to: &str) -> Result<Self, DogmaError> {
        let ends = (read_from.parse::<StrandEnd>(), to.parse::<StrandEnd>());
        match ends {
            (Ok(StrandEnd::ThreePrime), Ok(StrandEnd::FivePrime)) => Ok(Self::ThreeToFive),
            (Ok(StrandEnd::FivePrime), Ok(StrandEnd::ThreePrime)) => Ok(Self::FiveToThree),
            _ => Err(DogmaError::invalid_edge(read_from, to)),
        }
    }

    pub fn read_from(&self) -> StrandEnd {
        match self {
            Self::ThreeToFive => StrandEnd::ThreePrime,
            Self::FiveToThree => StrandEnd::FivePrime,
        }
    }

    pub fn to(&self) -> StrandEnd {
        match self {
            Self::ThreeToFive => StrandEnd::FivePrime,
            Self::FiveToThree => StrandEnd::ThreePrime,
        }
    }

    pub fn reverse(self) -> Self {
        match self {
            Self::ThreeToFive => Self::FiveToThree,
            Self::FiveToThree => Self::ThreeToFive,
        }
    }
}
