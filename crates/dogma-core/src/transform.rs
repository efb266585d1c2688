use crate::codon::{AminoAcid, Codon, START_CODON};
use crate::error::DogmaError;
use crate::naming::NamingType;
use crate::sequence::{MoleculeKind, NucleotideSequence};
use crate::strand::{ReadDirection, StrandEnd};
use serde::{Serialize, Serializer};

/// Written in place of an amino acid when a codon is missing from the table.
pub const UNKNOWN_AMINO_ACID: &str = "?";

/// Written in place of a codon lookup that found nothing.
pub const NO_RESULT: &str = "No result";

/// A strand produced from another strand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StrandResult {
    pub nucleic_acid_type: MoleculeKind,

    /// Sequence with end labels, starting at `read_from`.
    pub full_sequence: String,

    pub sequence: String,
    pub read_from: StrandEnd,
    pub to: StrandEnd,
}

impl From<&NucleotideSequence> for StrandResult {
    fn from(strand: &NucleotideSequence) -> Self {
        Self {
            nucleic_acid_type: strand.kind(),
            full_sequence: strand.full_sequence(),
            sequence: strand.bases().to_string(),
            read_from: strand.direction().read_from(),
            to: strand.direction().to(),
        }
    }
}

pub type TranscribeResult = StrandResult;
pub type RnaToDnaResult = StrandResult;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranslateResult {
    pub naming_type: NamingType,
    pub proteins: Vec<&'static str>,

    /// `proteins` joined by the naming delimiter. Ends with a delimiter when
    /// the reading frame never reached a stop codon.
    pub sequence: String,

    pub has_stop_codon: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodonToProteinResult {
    pub naming_type: NamingType,

    #[serde(serialize_with = "or_no_result")]
    pub protein: Option<&'static str>,

    #[serde(serialize_with = "or_no_result")]
    pub synonymous_codons: Option<Vec<&'static str>>,
}

fn or_no_result<T, S>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
where
    T: Serialize,
    S: Serializer,
{
    match value {
        Some(value) => value.serialize(serializer),
        None => serializer.serialize_str(NO_RESULT),
    }
}

/// DNA -> complementary RNA.
///
/// The RNA is read from the end the DNA was read to, so `read_from` and `to`
/// come back swapped.
pub fn transcribe(
    sequence: &str,
    read_from: &str,
    to: &str,
) -> Result<TranscribeResult, DogmaError> {
    let direction = ReadDirection::from_labels(read_from, to)?;
    let dna = NucleotideSequence::new(MoleculeKind::Dna, sequence, direction)?;

    Ok(StrandResult::from(&dna.complement()))
}

/// RNA -> complementary DNA. Mirror of `transcribe`.
pub fn rna_to_dna(sequence: &str, read_from: &str, to: &str) -> Result<RnaToDnaResult, DogmaError> {
    let direction = ReadDirection::from_labels(read_from, to)?;
    let rna = NucleotideSequence::new(MoleculeKind::Rna, sequence, direction)?;

    Ok(StrandResult::from(&rna.complement()))
}

/// RNA -> amino acids.
///
/// The strand is turned 5' -> 3' first. Translation starts at the first AUG,
/// drops a trailing partial codon and ends after the first stop codon.
pub fn translate(
    sequence: &str,
    read_from: &str,
    to: &str,
    naming_type: &str,
) -> Result<TranslateResult, DogmaError> {
    let direction = ReadDirection::from_labels(read_from, to)?;
    let rna = NucleotideSequence::new(MoleculeKind::Rna, sequence, direction)?;
    let naming = NamingType::resolve(naming_type);

    let frame = rna.five_to_three();
    let start = frame
        .find(START_CODON)
        .ok_or_else(DogmaError::no_start_codon)?;

    let mut codons: Vec<&[u8]> = frame.as_bytes()[start..].chunks_exact(3).collect();
    if let Some(stop) = codons
        .iter()
        .position(|codon| AminoAcid::from_codon(codon) == Some(AminoAcid::Stop))
    {
        codons.truncate(stop + 1);
    }
    tracing::debug!(start, codons = codons.len(), "reading frame");

    let proteins: Vec<&'static str> = codons
        .iter()
        .map(|codon| match AminoAcid::from_codon(codon) {
            Some(amino_acid) => amino_acid.name(naming),
            None => {
                tracing::warn!(codon = %String::from_utf8_lossy(codon), "codon missing from table");
                UNKNOWN_AMINO_ACID
            }
        })
        .collect();

    let has_stop_codon = proteins.contains(&AminoAcid::Stop.name(naming));

    let delimiter = naming.delimiter();
    let mut sequence = proteins.join(delimiter);
    if !has_stop_codon {
        sequence.push_str(delimiter);
    }

    Ok(TranslateResult {
        naming_type: naming,
        proteins,
        sequence,
        has_stop_codon,
    })
}

/// One codon -> its amino acid and every codon synonymous with it.
pub fn codon_to_protein(
    codon: &str,
    naming_type: &str,
) -> Result<CodonToProteinResult, DogmaError> {
    let codon = Codon::parse(codon)?;
    let naming = NamingType::resolve(naming_type);

    let amino_acid = codon.amino_acid();
    if amino_acid.is_none() {
        tracing::warn!(%codon, "codon missing from table");
    }

    Ok(CodonToProteinResult {
        naming_type: naming,
        protein: amino_acid.map(|amino_acid| amino_acid.name(naming)),
        synonymous_codons: amino_acid.map(|amino_acid| amino_acid.codons().to_vec()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    /// Every string over `alphabet` up to `max_len` bases.
    fn all_sequences(alphabet: &[char], max_len: usize) -> Vec<String> {
        let mut sequences = vec![String::new()];
        let mut last = vec![String::new()];
        for _ in 0..max_len {
            last = last
                .iter()
                .flat_map(|prefix| alphabet.iter().map(move |base| format!("{prefix}{base}")))
                .collect();
            sequences.extend(last.iter().cloned());
        }
        sequences
    }

    #[test]
    fn test_transcribe() {
        let result = transcribe("AATT", "3", "5").unwrap();
        assert_eq!(
            result,
            StrandResult {
                nucleic_acid_type: MoleculeKind::Rna,
                full_sequence: "5'-UUAA-3'".to_string(),
                sequence: "UUAA".to_string(),
                read_from: StrandEnd::FivePrime,
                to: StrandEnd::ThreePrime,
            }
        );
    }

    #[rstest]
    #[case("atgc", "5", "3", "UACG", "3'-UACG-5'")]
    #[case("GGCC", "3", "5", "CCGG", "5'-CCGG-3'")]
    #[case("", "3", "5", "", "5'--3'")]
    fn test_transcribe_cases(
        #[case] sequence: &str,
        #[case] read_from: &str,
        #[case] to: &str,
        #[case] expected: &str,
        #[case] expected_full: &str,
    ) {
        let result = transcribe(sequence, read_from, to).unwrap();
        assert_eq!(result.sequence, expected);
        assert_eq!(result.full_sequence, expected_full);
        assert_eq!(result.read_from.to_string(), to);
        assert_eq!(result.to.to_string(), read_from);
    }

    #[rstest]
    #[case("AATT", "5", "5", DogmaError::invalid_edge("5", "5"))]
    #[case("AATT", "3", "3", DogmaError::invalid_edge("3", "3"))]
    #[case("AXT", "3", "5", DogmaError::InvalidDna("DNA contains invalid base(s): X".to_string()))]
    #[case("AUXU", "3", "5", DogmaError::InvalidDna("DNA contains invalid base(s): U, X, U".to_string()))]
    // The direction is checked before the bases.
    #[case("AXT", "5", "5", DogmaError::invalid_edge("5", "5"))]
    fn test_transcribe_errors(
        #[case] sequence: &str,
        #[case] read_from: &str,
        #[case] to: &str,
        #[case] expected: DogmaError,
    ) {
        assert_eq!(transcribe(sequence, read_from, to), Err(expected));
    }

    #[rstest]
    #[case("AAUU", "5", "3", "TTAA", "3'-TTAA-5'")]
    #[case("augc", "3", "5", "TACG", "5'-TACG-3'")]
    fn test_rna_to_dna(
        #[case] sequence: &str,
        #[case] read_from: &str,
        #[case] to: &str,
        #[case] expected: &str,
        #[case] expected_full: &str,
    ) {
        let result = rna_to_dna(sequence, read_from, to).unwrap();
        assert_eq!(result.nucleic_acid_type, MoleculeKind::Dna);
        assert_eq!(result.sequence, expected);
        assert_eq!(result.full_sequence, expected_full);
    }

    #[rstest]
    #[case("AATT", "5", "3", DogmaError::InvalidRna("RNA contains invalid base(s): T, T".to_string()))]
    #[case("AAUU", "5", "x", DogmaError::invalid_edge("5", "x"))]
    fn test_rna_to_dna_errors(
        #[case] sequence: &str,
        #[case] read_from: &str,
        #[case] to: &str,
        #[case] expected: DogmaError,
    ) {
        assert_eq!(rna_to_dna(sequence, read_from, to), Err(expected));
    }

    #[rstest]
    #[case("3", "5")]
    #[case("5", "3")]
    fn test_transcribe_round_trip(#[case] read_from: &str, #[case] to: &str) {
        for dna in all_sequences(&MoleculeKind::DNA_BASES, 5) {
            let rna = transcribe(&dna, read_from, to).unwrap();
            let back = rna_to_dna(
                &rna.sequence,
                &rna.read_from.to_string(),
                &rna.to.to_string(),
            )
            .unwrap();

            assert_eq!(back.sequence, dna);
            assert_eq!(back.read_from.to_string(), read_from);
            assert_eq!(back.to.to_string(), to);
        }
    }

    #[rstest]
    #[case("AUGUUUUAA", "5", "3", "3 letters", vec!["Met", "Phe", "Stop"], "Met-Phe-Stop", true)]
    #[case("AUGUUU", "5", "3", "3 letters", vec!["Met", "Phe"], "Met-Phe-", false)]
    #[case("AUGUUUUAA", "5", "3", "short", vec!["M", "F", "Stop"], "MFStop", true)]
    #[case("AUGUUU", "5", "3", "short", vec!["M", "F"], "MF", false)]
    #[case("AUGGAU", "5", "3", "long", vec!["Methionine", "Aspartic Acid"], "Methionine---Aspartic Acid---", false)]
    #[case("AUGUAG", "5", "3", "long", vec!["Methionine", "Stop"], "Methionine---Stop", true)]
    // Leading bases before AUG are dropped, as is a trailing partial codon.
    #[case("CCAUGUUUAC", "5", "3", "3 letters", vec!["Met", "Phe"], "Met-Phe-", false)]
    // Only the first stop codon counts.
    #[case("AUGUGAUUUUAA", "5", "3", "3 letters", vec!["Met", "Stop"], "Met-Stop", true)]
    // The start codon is the first AUG, even inside another frame.
    #[case("AAUGAUGUAA", "5", "3", "3 letters", vec!["Met", "Met", "Stop"], "Met-Met-Stop", true)]
    #[case("aug", "5", "3", "3 letters", vec!["Met"], "Met-", false)]
    // 3' -> 5' input is reversed before the start codon search.
    #[case("AAUUUUGUA", "3", "5", "3 letters", vec!["Met", "Phe", "Stop"], "Met-Phe-Stop", true)]
    fn test_translate(
        #[case] sequence: &str,
        #[case] read_from: &str,
        #[case] to: &str,
        #[case] naming_type: &str,
        #[case] proteins: Vec<&str>,
        #[case] expected: &str,
        #[case] has_stop_codon: bool,
    ) {
        let result = translate(sequence, read_from, to, naming_type).unwrap();
        assert_eq!(result.naming_type.to_string(), naming_type);
        assert_eq!(result.proteins, proteins);
        assert_eq!(result.sequence, expected);
        assert_eq!(result.has_stop_codon, has_stop_codon);
    }

    #[rstest]
    // Reversed to GUAUUU, which has no AUG.
    #[case("UUUAUG", "3", "5", DogmaError::no_start_codon())]
    #[case("UUUCCC", "5", "3", DogmaError::no_start_codon())]
    #[case("", "5", "3", DogmaError::no_start_codon())]
    #[case("AUGTAA", "5", "3", DogmaError::InvalidRna("RNA contains invalid base(s): T".to_string()))]
    #[case("AUGUAA", "3", "3", DogmaError::invalid_edge("3", "3"))]
    fn test_translate_errors(
        #[case] sequence: &str,
        #[case] read_from: &str,
        #[case] to: &str,
        #[case] expected: DogmaError,
    ) {
        assert_eq!(translate(sequence, read_from, to, "3 letters"), Err(expected));
    }

    #[rstest]
    #[case("")]
    #[case("SHORT")]
    #[case("full")]
    fn test_translate_naming_fallback(#[case] naming_type: &str) {
        let fallback = translate("AUGUUUUAA", "5", "3", naming_type).unwrap();
        let default = translate("AUGUUUUAA", "5", "3", "3 letters").unwrap();
        assert_eq!(fallback, default);
        assert_eq!(fallback.naming_type, NamingType::ThreeLetters);
    }

    #[test]
    fn test_codon_to_protein() {
        let result = codon_to_protein("AUG", "3 letters").unwrap();
        assert_eq!(result.protein, Some("Met"));
        assert_eq!(result.synonymous_codons, Some(vec!["AUG"]));

        let result = codon_to_protein("agu", "long").unwrap();
        assert_eq!(result.protein, Some("Serine"));
        assert_eq!(
            result.synonymous_codons,
            Some(vec!["UCU", "UCC", "UCA", "UCG", "AGU", "AGC"])
        );

        let result = codon_to_protein("UGA", "whatever").unwrap();
        assert_eq!(result.naming_type, NamingType::ThreeLetters);
        assert_eq!(result.protein, Some("Stop"));
    }

    #[rstest]
    #[case("AU", DogmaError::invalid_codon_length())]
    #[case("AUGG", DogmaError::invalid_codon_length())]
    #[case("ATG", DogmaError::InvalidCodon("Codon contains invalid base(s): T".to_string()))]
    fn test_codon_to_protein_errors(#[case] codon: &str, #[case] expected: DogmaError) {
        assert_eq!(codon_to_protein(codon, "short"), Err(expected));
    }

    #[test]
    fn test_codon_to_protein_covers_every_triplet() {
        for codon in all_sequences(&MoleculeKind::RNA_BASES, 3)
            .into_iter()
            .filter(|codon| codon.len() == 3)
        {
            let result = codon_to_protein(&codon, "short").unwrap();
            assert!(result.protein.is_some());
            assert!(result.synonymous_codons.unwrap().contains(&codon.as_str()));
        }
    }

    #[test]
    fn test_serialize() {
        let result = transcribe("AATT", "3", "5").unwrap();
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            serde_json::json!({
                "nucleic_acid_type": "RNA",
                "full_sequence": "5'-UUAA-3'",
                "sequence": "UUAA",
                "read_from": "5",
                "to": "3",
            })
        );

        let result = translate("AUGUUU", "5", "3", "short").unwrap();
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            serde_json::json!({
                "naming_type": "short",
                "proteins": ["M", "F"],
                "sequence": "MF",
                "has_stop_codon": false,
            })
        );

        let missing = CodonToProteinResult {
            naming_type: NamingType::Long,
            protein: None,
            synonymous_codons: None,
        };
        assert_eq!(
            serde_json::to_value(&missing).unwrap(),
            serde_json::json!({
                "naming_type": "long",
                "protein": "No result",
                "synonymous_codons": "No result",
            })
        );
    }
}
