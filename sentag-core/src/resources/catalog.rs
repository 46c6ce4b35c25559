//! Resource catalog: where each lexical resource lives and how to parse it

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ResourceLoadError;

/// Resource categories a catalog can declare
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceCategory {
    /// Per-language surface form to expansion tables
    Contractions,
    /// Emoji glyph inventory
    Emojis,
    /// Per-language stop-keyword lists
    PosKeywords,
}

impl ResourceCategory {
    pub const ALL: [ResourceCategory; 3] = [
        ResourceCategory::Contractions,
        ResourceCategory::Emojis,
        ResourceCategory::PosKeywords,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceCategory::Contractions => "contractions",
            ResourceCategory::Emojis => "emojis",
            ResourceCategory::PosKeywords => "pos_keywords",
        }
    }
}

/// On-disk format of a resource source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceFormat {
    /// Flat JSON object of string keys to string values
    KeyValue,
    /// One entry per line
    LineList,
}

impl SourceFormat {
    /// Infer the format from a file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Some(SourceFormat::KeyValue),
            Some("txt") => Some(SourceFormat::LineList),
            _ => None,
        }
    }
}

/// One component (language code or "all") of a resource category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentSource {
    pub component: String,
    pub path: PathBuf,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<SourceFormat>,
}

impl ComponentSource {
    pub fn new(component: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            component: component.into(),
            path: path.into(),
            format: None,
        }
    }

    /// Declared format, falling back to the file extension
    pub fn resolved_format(&self) -> Result<SourceFormat, ResourceLoadError> {
        self.format
            .or_else(|| SourceFormat::from_path(&self.path))
            .ok_or_else(|| ResourceLoadError::UnsupportedFormat(self.path.clone()))
    }
}

/// Declared resource sources, grouped by category.
///
/// The order of `contractions` entries is the lookup priority used by
/// contraction expansion: the first table containing a token wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceCatalog {
    #[serde(default)]
    pub contractions: Vec<ComponentSource>,
    #[serde(default)]
    pub emojis: Vec<ComponentSource>,
    #[serde(default)]
    pub pos_keywords: Vec<ComponentSource>,
}

impl ResourceCatalog {
    /// The canonical resource layout rooted at `dir`
    pub fn standard(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            contractions: vec![
                ComponentSource::new("tl", dir.join("contract-tl.json")),
                ComponentSource::new("en", dir.join("contract-en.json")),
            ],
            emojis: vec![ComponentSource::new("all", dir.join("emojis-all.txt"))],
            pos_keywords: vec![
                ComponentSource::new("tl", dir.join("pos-tl.txt")),
                ComponentSource::new("en", dir.join("pos-en.txt")),
            ],
        }
    }

    /// The resource set shipped with this crate
    pub fn bundled() -> Self {
        Self::standard(Path::new(env!("CARGO_MANIFEST_DIR")).join("resources"))
    }

    /// Load a catalog from a TOML manifest.
    ///
    /// Relative source paths are resolved against the manifest's directory.
    pub fn from_file(path: &Path) -> Result<Self, ResourceLoadError> {
        let content =
            std::fs::read_to_string(path).map_err(|source| ResourceLoadError::ManifestRead {
                path: path.to_path_buf(),
                source,
            })?;

        let mut catalog: ResourceCatalog =
            toml::from_str(&content).map_err(|source| ResourceLoadError::ManifestParse {
                path: path.to_path_buf(),
                source,
            })?;

        if let Some(base) = path.parent() {
            catalog.rebase(base);
        }

        Ok(catalog)
    }

    /// Sources declared for a category, in declaration order
    pub fn sources(&self, category: ResourceCategory) -> &[ComponentSource] {
        match category {
            ResourceCategory::Contractions => &self.contractions,
            ResourceCategory::Emojis => &self.emojis,
            ResourceCategory::PosKeywords => &self.pos_keywords,
        }
    }

    fn rebase(&mut self, base: &Path) {
        for source in self
            .contractions
            .iter_mut()
            .chain(self.emojis.iter_mut())
            .chain(self.pos_keywords.iter_mut())
        {
            if source.path.is_relative() {
                source.path = base.join(&source.path);
            }
        }
    }
}
