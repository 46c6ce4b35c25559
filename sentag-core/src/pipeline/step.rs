//! Step names and the canonical execution order

use std::fmt;
use std::str::FromStr;

use crate::error::StepConfigurationError;

/// An implemented text transform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Step {
    Lowercase,
    RemoveLinks,
    RemoveEmojis,
    RemoveUsernames,
    RemoveNumbers,
    RemoveHashtags,
    RemovePunctuations,
    WordContractionExpansion,
    WordNonWordCharacterSeparation,
    NextWordNegation,
    RemovePosKeywords,
    /// Inverse filter; not part of the canonical flow
    RemoveNonWordChars,
}

/// Default execution order. Later steps see the output of earlier ones.
pub const CANONICAL_FLOW: [Step; 11] = [
    Step::Lowercase,
    Step::RemoveLinks,
    Step::RemoveEmojis,
    Step::RemoveUsernames,
    Step::RemoveNumbers,
    Step::RemoveHashtags,
    Step::RemovePunctuations,
    Step::WordContractionExpansion,
    Step::WordNonWordCharacterSeparation,
    Step::NextWordNegation,
    Step::RemovePosKeywords,
];

impl Step {
    /// Every implemented step
    pub const ALL: [Step; 12] = [
        Step::Lowercase,
        Step::RemoveLinks,
        Step::RemoveEmojis,
        Step::RemoveUsernames,
        Step::RemoveNumbers,
        Step::RemoveHashtags,
        Step::RemovePunctuations,
        Step::WordContractionExpansion,
        Step::WordNonWordCharacterSeparation,
        Step::NextWordNegation,
        Step::RemovePosKeywords,
        Step::RemoveNonWordChars,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Step::Lowercase => "lowercase",
            Step::RemoveLinks => "remove_links",
            Step::RemoveEmojis => "remove_emojis",
            Step::RemoveUsernames => "remove_usernames",
            Step::RemoveNumbers => "remove_numbers",
            Step::RemoveHashtags => "remove_hashtags",
            Step::RemovePunctuations => "remove_punctuations",
            Step::WordContractionExpansion => "word_contraction_expansion",
            Step::WordNonWordCharacterSeparation => "word_non_word_character_separation",
            Step::NextWordNegation => "next_word_negation",
            Step::RemovePosKeywords => "remove_pos_keywords",
            Step::RemoveNonWordChars => "remove_non_word_chars",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Step::Lowercase => "Lowercase all characters",
            Step::RemoveLinks => "Delete URLs",
            Step::RemoveEmojis => "Delete glyphs from the emoji inventory",
            Step::RemoveUsernames => "Delete @mentions",
            Step::RemoveNumbers => "Delete runs of digits",
            Step::RemoveHashtags => "Delete #hashtags",
            Step::RemovePunctuations => "Delete punctuation except apostrophe and '#'",
            Step::WordContractionExpansion => "Expand contractions, then strip \"'s\"",
            Step::WordNonWordCharacterSeparation => "Surround symbols with spaces",
            Step::NextWordNegation => "Merge negators with the next token as NOT~token",
            Step::RemovePosKeywords => "Drop stop keywords of every language",
            Step::RemoveNonWordChars => "Keep only characters outside [a-z0-9-]",
        }
    }

    pub fn is_canonical(&self) -> bool {
        CANONICAL_FLOW.contains(self)
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Step {
    type Err = StepConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lowercase_text" => return Ok(Step::Lowercase),
            "remove_non_word_characters" => return Ok(Step::RemoveNonWordChars),
            _ => {}
        }

        Step::ALL
            .into_iter()
            .find(|step| step.name() == s)
            .ok_or_else(|| StepConfigurationError::UnknownStep(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for step in Step::ALL {
            assert_eq!(step.name().parse::<Step>().unwrap(), step);
        }
    }

    #[test]
    fn test_legacy_aliases() {
        assert_eq!("lowercase_text".parse::<Step>().unwrap(), Step::Lowercase);
        assert_eq!(
            "remove_non_word_characters".parse::<Step>().unwrap(),
            Step::RemoveNonWordChars
        );
    }

    #[test]
    fn test_unknown_name() {
        assert_eq!(
            "stem_words".parse::<Step>(),
            Err(StepConfigurationError::UnknownStep("stem_words".to_string()))
        );
    }

    #[test]
    fn test_canonical_flow_excludes_inverse_filter() {
        assert!(!Step::RemoveNonWordChars.is_canonical());
        assert!(Step::ALL
            .iter()
            .filter(|s| **s != Step::RemoveNonWordChars)
            .all(Step::is_canonical));
        assert_eq!(CANONICAL_FLOW[0], Step::Lowercase);
        assert_eq!(CANONICAL_FLOW[10], Step::RemovePosKeywords);
    }
}
