//! Lexical resources shared by every preprocessing step
//!
//! A [`ResourceStore`] is built once from a [`ResourceCatalog`]: `bootstrap()`
//! reads every declared source, `index_emojis()` builds the emoji index.
//! After that the store is only read, usually behind an `Arc` shared by any
//! number of pipelines.

mod catalog;
mod loader;

pub use catalog::{ComponentSource, ResourceCatalog, ResourceCategory, SourceFormat};

use std::collections::{BTreeSet, HashMap, HashSet};

use crate::error::ResourceLoadError;
use loader::load_component;

/// ASCII punctuation alphabet used to seed the punctuation set
pub const PUNCTUATION_ALPHABET: &str = r##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##;

/// Contraction table for one language
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractionTable {
    pub code: String,
    pub entries: HashMap<String, String>,
}

/// Stop-keyword list for one language
#[derive(Debug, Clone, Default)]
struct KeywordList {
    ordered: Vec<String>,
    members: HashSet<String>,
}

/// Loaded and indexed lexical resources
#[derive(Debug, Clone)]
pub struct ResourceStore {
    catalog: ResourceCatalog,
    contractions: Vec<ContractionTable>,
    emojis: Vec<String>,
    emoji_set: HashSet<String>,
    emoji_index: Vec<String>,
    pos_keywords: Vec<(String, KeywordList)>,
    punctuations: BTreeSet<char>,
    bootstrapped: bool,
}

impl ResourceStore {
    /// Create an empty store for the given catalog. Nothing is read yet.
    pub fn new(catalog: ResourceCatalog) -> Self {
        Self {
            catalog,
            contractions: Vec::new(),
            emojis: Vec::new(),
            emoji_set: HashSet::new(),
            emoji_index: Vec::new(),
            pos_keywords: Vec::new(),
            punctuations: PUNCTUATION_ALPHABET.chars().collect(),
            bootstrapped: false,
        }
    }

    /// Bootstrap and index in one call
    pub fn load(catalog: ResourceCatalog) -> Result<Self, ResourceLoadError> {
        let mut store = Self::new(catalog);
        store.bootstrap()?;
        store.index_emojis();
        Ok(store)
    }

    /// Read and parse every declared source.
    ///
    /// Any missing or malformed source aborts the whole load.
    pub fn bootstrap(&mut self) -> Result<(), ResourceLoadError> {
        let mut contractions = Vec::new();
        let mut emojis = Vec::new();
        let mut pos_keywords = Vec::new();

        for category in ResourceCategory::ALL {
            for source in self.catalog.sources(category) {
                let data = load_component(category, source)?;
                log::debug!(
                    "Loaded {}/{} from {}",
                    category.as_str(),
                    source.component,
                    source.path.display()
                );

                match category {
                    ResourceCategory::Contractions => contractions.push(ContractionTable {
                        code: source.component.clone(),
                        entries: data.into_table(),
                    }),
                    ResourceCategory::Emojis => emojis.extend(data.into_list()),
                    ResourceCategory::PosKeywords => {
                        let ordered = data.into_list();
                        let members = ordered.iter().cloned().collect();
                        pos_keywords.push((
                            source.component.clone(),
                            KeywordList { ordered, members },
                        ));
                    }
                }
            }
        }

        log::info!(
            "Bootstrapped resources: {} contraction tables, {} emojis, {} keyword lists",
            contractions.len(),
            emojis.len(),
            pos_keywords.len()
        );

        self.contractions = contractions;
        self.emojis = emojis;
        self.pos_keywords = pos_keywords;
        self.bootstrapped = true;
        Ok(())
    }

    /// Build the emoji membership index.
    ///
    /// Must run after `bootstrap()`; before it, the index is simply empty.
    pub fn index_emojis(&mut self) {
        self.emoji_set = self.emojis.iter().cloned().collect();

        let mut index: Vec<String> = self.emoji_set.iter().cloned().collect();
        // longest first so multi-codepoint sequences go before their parts
        index.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        self.emoji_index = index;
    }

    pub fn is_bootstrapped(&self) -> bool {
        self.bootstrapped
    }

    pub fn catalog(&self) -> &ResourceCatalog {
        &self.catalog
    }

    /// Contraction tables in lookup priority order
    pub fn contraction_tables(&self) -> &[ContractionTable] {
        &self.contractions
    }

    /// Expansion from the first table that contains `token`
    pub fn expand_contraction(&self, token: &str) -> Option<&str> {
        self.contractions
            .iter()
            .find_map(|table| table.entries.get(token))
            .map(String::as_str)
    }

    /// Indexed emoji glyphs in removal order
    pub fn emoji_index(&self) -> &[String] {
        &self.emoji_index
    }

    pub fn is_emoji(&self, glyph: &str) -> bool {
        self.emoji_set.contains(glyph)
    }

    /// Stop-keyword list for a language code
    pub fn pos_keywords(&self, code: &str) -> Option<&[String]> {
        self.pos_keywords
            .iter()
            .find(|(c, _)| c == code)
            .map(|(_, list)| list.ordered.as_slice())
    }

    /// True if any language lists `token` as a stop keyword
    pub fn is_pos_keyword(&self, token: &str) -> bool {
        self.pos_keywords
            .iter()
            .any(|(_, list)| list.members.contains(token))
    }

    pub fn punctuations(&self) -> &BTreeSet<char> {
        &self.punctuations
    }

    /// True if `token` is exactly one punctuation character
    pub fn is_punctuation(&self, token: &str) -> bool {
        let mut chars = token.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => self.punctuations.contains(&ch),
            _ => false,
        }
    }
}
