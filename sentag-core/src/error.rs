//! Error types for resource loading, pipeline configuration and cache persistence

use std::path::PathBuf;

use thiserror::Error;

use crate::pipeline::Step;

/// A declared resource could not be loaded.
///
/// Fatal: a pipeline is never constructed on top of a store that failed here.
#[derive(Debug, Error)]
pub enum ResourceLoadError {
    /// Source file missing or unreadable
    #[error("Failed to read {category}/{component} from '{}': {source}", .path.display())]
    Read {
        category: &'static str,
        component: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Key-value table did not parse as a flat string map
    #[error("Failed to parse {category}/{component} from '{}': {source}", .path.display())]
    Parse {
        category: &'static str,
        component: String,
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// File extension maps to no known format and none was declared
    #[error("Unsupported resource format for '{}'", .0.display())]
    UnsupportedFormat(PathBuf),

    /// Catalog manifest unreadable
    #[error("Failed to read resource manifest '{}': {source}", .path.display())]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Catalog manifest is not valid TOML for a catalog
    #[error("Failed to parse resource manifest '{}': {source}", .path.display())]
    ManifestParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// The store was handed to a pipeline before `bootstrap()` ran
    #[error("Resource store has not been bootstrapped")]
    NotBootstrapped,
}

/// The step flow and the step configuration disagree.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StepConfigurationError {
    /// Name matches no implemented transform
    #[error("Unknown preprocessing step: {0}")]
    UnknownStep(String),

    /// Step listed in the flow has no enable/disable entry
    #[error("Step '{0}' is in the flow but has no configuration entry")]
    MissingEntry(Step),

    /// Nothing to run
    #[error("Preprocessing flow is empty")]
    EmptyFlow,

    /// A built-in pattern failed to compile
    #[error("Invalid {name} pattern: {message}")]
    InvalidPattern { name: &'static str, message: String },
}

/// The auxiliary cache could not be written.
///
/// Recoverable: the pipeline logs it and returns its output anyway.
#[derive(Debug, Error)]
pub enum CachePersistError {
    #[error("Failed to write cache '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize cache: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// An existing cache file could not be read back.
///
/// Recoverable: the cache starts empty and the file is replaced on the next
/// persist.
#[derive(Debug, Error)]
pub enum CacheLoadError {
    #[error("Failed to read cache '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse cache '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Umbrella error for the crate
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    ResourceLoad(#[from] ResourceLoadError),

    #[error(transparent)]
    StepConfiguration(#[from] StepConfigurationError),

    #[error(transparent)]
    CachePersist(#[from] CachePersistError),

    /// Pipeline configuration file unreadable or not valid TOML
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Result type for sentag-core operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_entry_display() {
        let error = StepConfigurationError::MissingEntry(Step::NextWordNegation);
        assert_eq!(
            error.to_string(),
            "Step 'next_word_negation' is in the flow but has no configuration entry"
        );
    }

    #[test]
    fn test_unknown_step_display() {
        let error = StepConfigurationError::UnknownStep("stem_words".to_string());
        assert_eq!(error.to_string(), "Unknown preprocessing step: stem_words");
    }

    #[test]
    fn test_read_error_mentions_path() {
        let error = ResourceLoadError::Read {
            category: "emojis",
            component: "all".to_string(),
            path: PathBuf::from("/missing/emojis-all.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        let message = error.to_string();
        assert!(message.contains("emojis/all"));
        assert!(message.contains("/missing/emojis-all.txt"));
    }

    #[test]
    fn test_cache_parse_error_mentions_path() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error = CacheLoadError::Parse {
            path: PathBuf::from(".sentag/token_cache.json"),
            source,
        };
        assert!(error
            .to_string()
            .starts_with("Failed to parse cache '.sentag/token_cache.json': "));
    }

    #[test]
    fn test_umbrella_conversion() {
        let error: Error = StepConfigurationError::EmptyFlow.into();
        assert!(matches!(
            error,
            Error::StepConfiguration(StepConfigurationError::EmptyFlow)
        ));
        assert_eq!(error.to_string(), "Preprocessing flow is empty");
    }
}
