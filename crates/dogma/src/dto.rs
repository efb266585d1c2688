use serde::{Deserialize, Serialize};

/// Body of every API request.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RequestDto<C> {
    pub action: String,
    pub molecule_type: String,
    pub content: C,
}

/// Content of a transcribe or RNA-to-DNA request.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct StrandContent {
    pub sequence: String,
    pub read_from: String,
    pub to: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TranslateContent {
    pub sequence: String,
    pub read_from: String,
    pub to: String,
    pub naming_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CodonContent {
    pub codon: String,
    pub naming_type: String,
}

pub type TranscribeRequest = RequestDto<StrandContent>;
pub type RnaToDnaRequest = RequestDto<StrandContent>;
pub type TranslateRequest = RequestDto<TranslateContent>;
pub type CodonToProteinRequest = RequestDto<CodonContent>;
