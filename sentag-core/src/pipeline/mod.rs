//! Normalization pipeline
//!
//! A [`NormalizationPipeline`] runs the enabled steps of its flow, in flow
//! order, over one text ([`preprocess`](NormalizationPipeline::preprocess))
//! or a batch ([`bulk_preprocess`](NormalizationPipeline::bulk_preprocess)).
//! The batch path is step-major: each step goes over the whole batch before
//! the next one starts.

mod cache;
mod config;
mod step;
mod transforms;

pub use cache::{CacheEntries, FileTokenCache, MemoryTokenCache, TokenCache, CACHE_LANGUAGES};
pub use config::{PipelineConfig, PipelineConfigBuilder, RawPipelineConfig};
pub use step::{Step, CANONICAL_FLOW};
pub use transforms::{
    is_negator, is_word_char, lowercase, remove_non_word_chars,
    word_non_word_character_separation, Transforms, NEGATION_MARKER, NEGATORS,
};

use std::sync::Arc;

use crate::error::{ResourceLoadError, Result};
use crate::resources::ResourceStore;

/// Ordered, toggleable text normalization over shared resources
pub struct NormalizationPipeline {
    transforms: Transforms,
    config: PipelineConfig,
    cache: Box<dyn TokenCache>,
}

impl NormalizationPipeline {
    /// Create a pipeline with an in-memory cache
    pub fn new(resources: Arc<ResourceStore>, config: PipelineConfig) -> Result<Self> {
        Self::with_cache(resources, config, Box::new(MemoryTokenCache::new()))
    }

    /// Create a pipeline with the given cache.
    ///
    /// Fails if the store was never bootstrapped or the configuration does
    /// not cover its own flow.
    pub fn with_cache(
        resources: Arc<ResourceStore>,
        config: PipelineConfig,
        cache: Box<dyn TokenCache>,
    ) -> Result<Self> {
        if !resources.is_bootstrapped() {
            return Err(ResourceLoadError::NotBootstrapped.into());
        }
        config.validate()?;

        if emoji_index_missing(&config, &resources) {
            log::warn!(
                "remove_emojis is enabled but the emoji index is empty; was index_emojis() called?"
            );
        }

        Ok(Self {
            transforms: Transforms::new(resources)?,
            config,
            cache,
        })
    }

    /// Normalize one text
    pub fn preprocess(&self, text: &str) -> String {
        let mut text = text.to_string();
        for step in self.config.enabled_steps() {
            text = self.transforms.apply(step, &text);
        }

        self.persist_cache();
        self.transforms.finalize(&text)
    }

    /// Normalize a batch, one step at a time across every text.
    ///
    /// Output has the same length and order as the input and matches
    /// calling [`preprocess`](Self::preprocess) on each text.
    pub fn bulk_preprocess<S: AsRef<str>>(&self, texts: &[S]) -> Vec<String> {
        let mut batch: Vec<String> = texts.iter().map(|t| t.as_ref().to_string()).collect();

        let flow = self.config.flow();
        for (i, step) in flow.iter().enumerate() {
            if !self.config.is_enabled(*step) {
                continue;
            }
            log::debug!(
                "Applying preprocessing step ({}/{}): {} to {} texts",
                i + 1,
                flow.len(),
                step,
                batch.len()
            );
            self.apply_across(*step, &mut batch);
        }

        let batch = batch
            .iter()
            .map(|text| self.transforms.finalize(text))
            .collect();

        self.persist_cache();
        batch
    }

    /// Alias of [`bulk_preprocess`](Self::bulk_preprocess)
    pub fn transform<S: AsRef<str>>(&self, texts: &[S]) -> Vec<String> {
        self.bulk_preprocess(texts)
    }

    /// Run a single step regardless of the flow and flags
    pub fn apply_step(&self, step: Step, text: &str) -> String {
        self.transforms.apply(step, text)
    }

    /// Split normalized text into the tokens a vectorizer consumes
    pub fn tokenize(text: &str) -> Vec<&str> {
        text.split(' ').collect()
    }

    #[cfg(not(feature = "parallel"))]
    fn apply_across(&self, step: Step, batch: &mut [String]) {
        for text in batch.iter_mut() {
            *text = self.transforms.apply(step, text);
        }
    }

    #[cfg(feature = "parallel")]
    fn apply_across(&self, step: Step, batch: &mut [String]) {
        use rayon::prelude::*;

        let transforms = &self.transforms;
        batch
            .par_iter_mut()
            .for_each(|text| *text = transforms.apply(step, text));
    }

    fn persist_cache(&self) {
        if let Err(e) = self.cache.persist() {
            log::warn!("Failed to persist token cache: {e}");
        }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Replace the configuration after validating it
    pub fn set_config(&mut self, config: PipelineConfig) -> Result<()> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    pub fn is_enabled(&self, step: Step) -> bool {
        self.config.is_enabled(step)
    }

    pub fn activate(&mut self, step: Step) {
        self.config.activate(step);
    }

    pub fn deactivate(&mut self, step: Step) {
        self.config.deactivate(step);
    }

    pub fn activate_all(&mut self) {
        self.config.activate_all();
    }

    pub fn deactivate_all(&mut self) {
        self.config.deactivate_all();
    }

    pub fn resources(&self) -> &ResourceStore {
        self.transforms.resources()
    }

    pub fn cache(&self) -> &dyn TokenCache {
        self.cache.as_ref()
    }

    pub fn cache_mut(&mut self) -> &mut dyn TokenCache {
        self.cache.as_mut()
    }
}

/// Emoji removal is on, emoji sources are declared, yet nothing was indexed
fn emoji_index_missing(config: &PipelineConfig, resources: &ResourceStore) -> bool {
    config.is_enabled(Step::RemoveEmojis)
        && resources.emoji_index().is_empty()
        && !resources.catalog().emojis.is_empty()
}

impl std::fmt::Debug for NormalizationPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NormalizationPipeline")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
