//! Process command implementation

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use sentag_core::{
    FileTokenCache, MemoryTokenCache, NormalizationPipeline, PipelineConfig, ResourceCatalog,
    ResourceStore, Step, TokenCache,
};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::sync::Arc;

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{JsonFormatter, NormalizedRecord, OutputFormatter, TextFormatter};
use crate::progress::BatchProgress;

/// Source label for texts given with `--text`
pub const INLINE_SOURCE: &str = "<text>";

/// Arguments for the process command
#[derive(Debug, Args)]
pub struct ProcessArgs {
    /// Input files or patterns (supports glob); one text per line
    #[arg(
        short,
        long,
        value_name = "FILE/PATTERN",
        required_unless_present = "text",
        conflicts_with = "text"
    )]
    pub input: Vec<String>,

    /// Texts to normalize directly
    #[arg(short, long, value_name = "TEXT")]
    pub text: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Resource manifest, overriding the configuration
    #[arg(short, long, value_name = "MANIFEST")]
    pub resources: Option<PathBuf>,

    /// Enable a step (repeatable)
    #[arg(long, value_name = "STEP")]
    pub enable: Vec<String>,

    /// Disable a step (repeatable)
    #[arg(long, value_name = "STEP")]
    pub disable: Vec<String>,

    /// Do not persist the token cache
    #[arg(long)]
    pub no_cache: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One normalized text per line
    Text,
    /// JSON array of records with source and line metadata
    Json,
}

impl ProcessArgs {
    /// Execute the process command
    pub fn execute(&self) -> Result<()> {
        super::init_logging(self.verbose, self.quiet);

        log::info!("Starting text normalization");
        log::debug!("Arguments: {self:?}");

        let config = match &self.config {
            Some(path) => CliConfig::from_file(path)?,
            None => CliConfig::default(),
        };

        let pipeline = self.build_pipeline(&config)?;
        let format = self.resolve_format(&config)?;

        let writer: Box<dyn Write> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(BufWriter::new(io::stdout().lock())),
        };
        let mut formatter: Box<dyn OutputFormatter> = match format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer, config.output.pretty_json)),
        };

        if !self.text.is_empty() {
            let normalized = pipeline.bulk_preprocess(self.text.as_slice());
            emit(&mut *formatter, INLINE_SOURCE, &self.text, normalized)?;
        } else {
            let files = resolve_patterns(&self.input)?;
            log::info!("Found {} file(s) to process", files.len());

            let mut progress = BatchProgress::new(files.len(), self.quiet);

            for file in &files {
                let lines = FileReader::read_lines(file)?;
                let normalized = pipeline.bulk_preprocess(lines.as_slice());
                let source = file.display().to_string();
                emit(&mut *formatter, &source, &lines, normalized)?;
                progress.batch_done(&source, lines.len());
            }

            progress.finish();
        }

        formatter.finish()?;
        log::info!("Normalization completed");
        Ok(())
    }

    /// Load resources, apply step overrides and open the cache
    pub fn build_pipeline(&self, config: &CliConfig) -> Result<NormalizationPipeline> {
        let manifest = self.resources.as_ref().or(config.resources.manifest.as_ref());
        let catalog = match manifest {
            Some(path) => ResourceCatalog::from_file(path)
                .with_context(|| format!("Failed to load manifest: {}", path.display()))?,
            None => ResourceCatalog::bundled(),
        };
        let store = ResourceStore::load(catalog).context("Failed to load resources")?;

        let steps = self.apply_overrides(config.pipeline.clone())?;

        let cache: Box<dyn TokenCache> = if self.no_cache || !config.cache.enabled {
            Box::new(MemoryTokenCache::new())
        } else {
            log::debug!("Using token cache at {}", config.cache.path.display());
            Box::new(FileTokenCache::open(&config.cache.path))
        };

        Ok(NormalizationPipeline::with_cache(
            Arc::new(store),
            steps,
            cache,
        )?)
    }

    /// Apply `--enable` then `--disable` to the configured flags
    pub fn apply_overrides(&self, mut steps: PipelineConfig) -> Result<PipelineConfig> {
        for name in &self.enable {
            steps.activate(parse_step(name)?);
        }
        for name in &self.disable {
            steps.deactivate(parse_step(name)?);
        }
        Ok(steps)
    }

    fn resolve_format(&self, config: &CliConfig) -> Result<OutputFormat> {
        if let Some(format) = self.format {
            return Ok(format);
        }
        OutputFormat::from_str(&config.output.default_format, true).map_err(|_| {
            CliError::ConfigError(format!(
                "unknown output format '{}'",
                config.output.default_format
            ))
            .into()
        })
    }
}

fn parse_step(name: &str) -> Result<Step> {
    name.parse::<Step>()
        .map_err(|_| CliError::UnknownStep(name.to_string()).into())
}

fn emit(
    formatter: &mut dyn OutputFormatter,
    source: &str,
    inputs: &[String],
    normalized: Vec<String>,
) -> Result<()> {
    for (i, (input, normalized)) in inputs.iter().zip(normalized).enumerate() {
        formatter.format_record(&NormalizedRecord {
            source: source.to_string(),
            line: i + 1,
            input: input.clone(),
            normalized,
        })?;
    }
    Ok(())
}
