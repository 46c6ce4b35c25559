//! Validate command implementation

use anyhow::Result;
use clap::Args;
use sentag_core::{
    MemoryTokenCache, NormalizationPipeline, ResourceCatalog, ResourceCategory, ResourceStore,
};
use std::path::PathBuf;
use std::sync::Arc;

use crate::config::CliConfig;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the configuration file to validate
    #[arg(short, long, value_name = "FILE", required = true)]
    pub config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating configuration: {}", self.config.display());

        match Self::check(&self.config) {
            Ok(report) => {
                println!("✓ Configuration is valid!");
                for line in report {
                    println!("  {line}");
                }
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e:#}");
                Err(anyhow::anyhow!("Validation failed: {e:#}"))
            }
        }
    }

    /// Load config, manifest and resources, returning a summary
    fn check(path: &std::path::Path) -> Result<Vec<String>> {
        let config = CliConfig::from_file(path)?;

        let catalog = match &config.resources.manifest {
            Some(manifest) => ResourceCatalog::from_file(manifest)?,
            None => ResourceCatalog::bundled(),
        };
        let store = Arc::new(ResourceStore::load(catalog)?);

        let pipeline = NormalizationPipeline::with_cache(
            store.clone(),
            config.pipeline.clone(),
            Box::new(MemoryTokenCache::new()),
        )?;

        let mut report = Vec::new();
        for category in ResourceCategory::ALL {
            let components: Vec<&str> = store
                .catalog()
                .sources(category)
                .iter()
                .map(|source| source.component.as_str())
                .collect();
            report.push(format!(
                "{}: {} component(s) [{}]",
                category.as_str(),
                components.len(),
                components.join(", ")
            ));
        }
        report.push(format!("Emoji glyphs: {}", store.emoji_index().len()));

        let enabled: Vec<String> = pipeline
            .config()
            .enabled_steps()
            .map(|step| step.to_string())
            .collect();
        report.push(format!(
            "Steps enabled: {}/{} ({})",
            enabled.len(),
            pipeline.config().flow().len(),
            enabled.join(", ")
        ));

        Ok(report)
    }
}
