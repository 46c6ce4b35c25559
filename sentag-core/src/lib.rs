//! Text normalization for code-mixed Tagalog/English social media posts
//!
//! The crate turns noisy input (mixed languages, informal spelling, emoji,
//! hashtags, mentions, links, contractions) into a canonical,
//! space-separated token stream for a downstream classifier.
//!
//! # Architecture
//!
//! - **Resources**: [`ResourceStore`] loads contraction tables, the emoji
//!   inventory and stop-keyword lists once, then serves read-only lookups.
//! - **Pipeline**: [`NormalizationPipeline`] applies an ordered, toggleable
//!   list of pure [`Step`]s over a shared store, for one text or a batch.
//!
//! # Example
//!
//! ```rust
//! use sentag_core::{NormalizationPipeline, PipelineConfig, ResourceCatalog, ResourceStore};
//! use std::sync::Arc;
//!
//! let store = Arc::new(ResourceStore::load(ResourceCatalog::bundled()).unwrap());
//! let pipeline = NormalizationPipeline::new(store, PipelineConfig::default()).unwrap();
//!
//! let text = pipeline.preprocess("Hindi maganda!!! #fail @someone http://t.co/x");
//! assert_eq!(text, "NOT~maganda");
//! ```

pub mod error;
pub mod pipeline;
pub mod resources;

pub use error::{
    CacheLoadError, CachePersistError, Error, ResourceLoadError, Result, StepConfigurationError,
};
pub use pipeline::{
    FileTokenCache, MemoryTokenCache, NormalizationPipeline, PipelineConfig,
    PipelineConfigBuilder, Step, TokenCache, CANONICAL_FLOW,
};
pub use resources::{ComponentSource, ResourceCatalog, ResourceCategory, ResourceStore, SourceFormat};
