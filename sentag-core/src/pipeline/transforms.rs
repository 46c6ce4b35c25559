//! The step transforms
//!
//! Every transform is a total, pure `&str -> String` function. None of them
//! keeps state between calls, which is what lets the batch path run
//! step-major instead of text-major.

use std::sync::Arc;

use regex::Regex;

use crate::error::StepConfigurationError;
use crate::pipeline::step::Step;
use crate::resources::ResourceStore;

/// Tokens that negate the token after them
pub const NEGATORS: [&str; 4] = ["no", "not", "hindi", "di"];

/// Prefix of a merged negation token
pub const NEGATION_MARKER: &str = "NOT~";

const RIGHT_SINGLE_QUOTE: char = '\u{2019}';

/// URL shape; the leading word boundary is checked by [`starts_at_word_boundary`]
const LINK_PATTERN: &str = r#"(?i)((?:https?://|www\d{0,3}[.]|[a-z0-9.\-]+[.][a-z]{2,4}/)(?:[^\s()<>]+|\(([^\s()<>]+|(\([^\s()<>]+\)))*\))+(?:\(([^\s()<>]+|(\([^\s()<>]+\)))*\)|[^\s`!()\[\]{};:'".,<>?«»“”‘’]))"#;
const USERNAME_PATTERN: &str = "@[a-zA-Z0-9_]+";
const HASHTAG_PATTERN: &str = "#[a-zA-Z0-9_]+";
const NUMBER_PATTERN: &str = "[0-9]+";
const WHITESPACE_PATTERN: &str = r"\s+";

/// Word character for link boundaries: letters, digits and `_`.
///
/// Combining marks such as U+FE0F and U+0301 are not word characters, so a
/// link glued to an emoji or a decomposed accent still starts a word.
fn is_boundary_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

/// Whether a word boundary sits at byte offset `at` of `text`
fn starts_at_word_boundary(text: &str, at: usize) -> bool {
    let before = text[..at]
        .chars()
        .next_back()
        .is_some_and(is_boundary_word_char);
    let after = text[at..].chars().next().is_some_and(is_boundary_word_char);
    before != after
}

/// Word-character alphabet: `a-z`, `0-9` and `-`
pub fn is_word_char(ch: char) -> bool {
    ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-'
}

pub fn is_negator(token: &str) -> bool {
    NEGATORS.contains(&token)
}

pub fn lowercase(text: &str) -> String {
    text.to_lowercase()
}

/// Put spaces around every character outside the word alphabet
pub fn word_non_word_character_separation(text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 2);
    for ch in text.chars() {
        if !is_word_char(ch) && ch != ' ' {
            out.push(' ');
            out.push(ch);
            out.push(' ');
        } else {
            out.push(ch);
        }
    }
    out
}

/// Keep only characters outside the word alphabet
pub fn remove_non_word_chars(text: &str) -> String {
    text.chars().filter(|ch| !is_word_char(*ch)).collect()
}

/// Transforms bound to a resource store and compiled patterns
#[derive(Debug, Clone)]
pub struct Transforms {
    resources: Arc<ResourceStore>,
    links: Regex,
    usernames: Regex,
    hashtags: Regex,
    numbers: Regex,
    whitespace: Regex,
}

impl Transforms {
    pub fn new(resources: Arc<ResourceStore>) -> Result<Self, StepConfigurationError> {
        Ok(Self {
            resources,
            links: compile("links", LINK_PATTERN)?,
            usernames: compile("usernames", USERNAME_PATTERN)?,
            hashtags: compile("hashtags", HASHTAG_PATTERN)?,
            numbers: compile("numbers", NUMBER_PATTERN)?,
            whitespace: compile("whitespace", WHITESPACE_PATTERN)?,
        })
    }

    pub fn resources(&self) -> &ResourceStore {
        &self.resources
    }

    /// Run one step on one text
    pub fn apply(&self, step: Step, text: &str) -> String {
        match step {
            Step::Lowercase => lowercase(text),
            Step::RemoveLinks => self.remove_links(text),
            Step::RemoveEmojis => self.remove_emojis(text),
            Step::RemoveUsernames => self.remove_usernames(text),
            Step::RemoveNumbers => self.remove_numbers(text),
            Step::RemoveHashtags => self.remove_hashtags(text),
            Step::RemovePunctuations => self.remove_punctuations(text),
            Step::WordContractionExpansion => self.word_contraction_expansion(text),
            Step::WordNonWordCharacterSeparation => word_non_word_character_separation(text),
            Step::NextWordNegation => self.next_word_negation(text),
            Step::RemovePosKeywords => self.remove_pos_keywords(text),
            Step::RemoveNonWordChars => remove_non_word_chars(text),
        }
    }

    /// Delete URLs that start on a word boundary
    pub fn remove_links(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut kept = 0;
        let mut from = 0;

        while let Some(found) = self.links.find_at(text, from) {
            let start = found.start();
            if starts_at_word_boundary(text, start) {
                out.push_str(&text[kept..start]);
                kept = found.end();
                from = found.end();
            } else {
                from = start + text[start..].chars().next().map_or(1, char::len_utf8);
            }
        }

        out.push_str(&text[kept..]);
        out
    }

    pub fn remove_emojis(&self, text: &str) -> String {
        let mut text = text.to_string();
        for glyph in self.resources.emoji_index() {
            if text.contains(glyph.as_str()) {
                text = text.replace(glyph.as_str(), "");
            }
        }
        text
    }

    pub fn remove_usernames(&self, text: &str) -> String {
        self.usernames.replace_all(text, "").into_owned()
    }

    pub fn remove_numbers(&self, text: &str) -> String {
        self.numbers.replace_all(text, "").into_owned()
    }

    pub fn remove_hashtags(&self, text: &str) -> String {
        self.hashtags.replace_all(text, "").into_owned()
    }

    /// Delete punctuation, keeping `'` and `#`
    pub fn remove_punctuations(&self, text: &str) -> String {
        let punctuations = self.resources.punctuations();
        text.chars()
            .map(|ch| if ch == RIGHT_SINGLE_QUOTE { '\'' } else { ch })
            .filter(|ch| *ch == '\'' || *ch == '#' || !punctuations.contains(ch))
            .collect()
    }

    /// Replace each token with its first-table expansion, then strip `'s`
    /// across the whole result.
    pub fn word_contraction_expansion(&self, text: &str) -> String {
        let expanded: Vec<&str> = text
            .split(' ')
            .map(|token| self.resources.expand_contraction(token).unwrap_or(token))
            .collect();
        expanded.join(" ").replace("'s", "")
    }

    /// Merge a negator with the token after it.
    ///
    /// A negator followed by a punctuation token stays on its own; a
    /// trailing negator is dropped.
    pub fn next_word_negation(&self, text: &str) -> String {
        let tokens: Vec<&str> = text.split(' ').collect();
        let mut out: Vec<String> = Vec::with_capacity(tokens.len());

        let mut i = 0;
        while i < tokens.len() {
            let token = tokens[i];
            if !is_negator(token) {
                out.push(token.to_string());
                i += 1;
                continue;
            }

            match tokens.get(i + 1) {
                Some(next) if !self.resources.is_punctuation(next) => {
                    out.push(format!("{NEGATION_MARKER}{next}"));
                    i += 2;
                }
                Some(_) => {
                    out.push(token.to_string());
                    i += 1;
                }
                None => i += 1,
            }
        }

        out.join(" ")
    }

    pub fn remove_pos_keywords(&self, text: &str) -> String {
        let text = text.replace(RIGHT_SINGLE_QUOTE, "'");
        text.split(' ')
            .filter(|token| !self.resources.is_pos_keyword(token))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Collapse whitespace runs to one space and trim
    pub fn finalize(&self, text: &str) -> String {
        self.whitespace.replace_all(text, " ").trim().to_string()
    }
}

fn compile(name: &'static str, pattern: &str) -> Result<Regex, StepConfigurationError> {
    Regex::new(pattern).map_err(|e| StepConfigurationError::InvalidPattern {
        name,
        message: e.to_string(),
    })
}
