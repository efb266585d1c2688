use serde::Serialize;
use strum::{Display, EnumIter, EnumString};

/// How amino acids are written out.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, EnumIter, Serialize,
)]
pub enum NamingType {
    /// `M`, joined without a delimiter.
    #[strum(serialize = "short")]
    #[serde(rename = "short")]
    Short,

    /// `Met`, joined with `-`.
    #[default]
    #[strum(serialize = "3 letters")]
    #[serde(rename = "3 letters")]
    ThreeLetters,

    /// `Methionine`, joined with `---`.
    #[strum(serialize = "long")]
    #[serde(rename = "long")]
    Long,
}

impl NamingType {
    pub const DEFAULT_LABEL: &str = "3 letters";

    /// Any label other than `short`, `3 letters` or `long` falls back to `3 letters`.
    pub fn resolve(label: &str) -> Self {
        label.parse().unwrap_or_default()
    }

    /// Position of this style in `AminoAcid::names`.
    pub fn name_index(&self) -> usize {
        match self {
            Self::Short => 0,
            Self::ThreeLetters => 1,
            Self::Long => 2,
        }
    }

    pub fn delimiter(&self) -> &'static str {
        match self {
            Self::Short => "",
            Self::ThreeLetters => "-",
            Self::Long => "---",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use strum::IntoEnumIterator;

    #[rstest]
    #[case("short", NamingType::Short)]
    #[case("3 letters", NamingType::ThreeLetters)]
    #[case("long", NamingType::Long)]
    #[case("", NamingType::ThreeLetters)]
    #[case("SHORT", NamingType::ThreeLetters)]
    #[case("three", NamingType::ThreeLetters)]
    #[case("long ", NamingType::ThreeLetters)]
    fn test_resolve(#[case] label: &str, #[case] expected: NamingType) {
        assert_eq!(NamingType::resolve(label), expected);
    }

    #[test]
    fn test_default_label() {
        assert_eq!(NamingType::default().to_string(), NamingType::DEFAULT_LABEL);
    }

    #[test]
    fn test_labels_round_trip() {
        for naming in NamingType::iter() {
            assert_eq!(NamingType::resolve(&naming.to_string()), naming);
        }
    }
}
