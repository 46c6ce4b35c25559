//! Step configuration: execution flow plus per-step enable flags

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, StepConfigurationError};
use crate::pipeline::step::{Step, CANONICAL_FLOW};

/// Which steps run, and in what order.
///
/// Every step in the flow must have an enable/disable entry; this is
/// checked whenever a configuration is built or deserialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawPipelineConfig", into = "RawPipelineConfig")]
pub struct PipelineConfig {
    flow: Vec<Step>,
    flags: BTreeMap<Step, bool>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            flow: CANONICAL_FLOW.to_vec(),
            flags: Step::ALL.into_iter().map(|step| (step, true)).collect(),
        }
    }
}

impl PipelineConfig {
    /// Build a configuration from an explicit flow and flag table
    pub fn new(
        flow: Vec<Step>,
        flags: BTreeMap<Step, bool>,
    ) -> Result<Self, StepConfigurationError> {
        let config = Self { flow, flags };
        config.validate()?;
        Ok(config)
    }

    /// Create a configuration builder
    pub fn builder() -> PipelineConfigBuilder {
        PipelineConfigBuilder::default()
    }

    /// Parse a TOML document with `flow` and `[steps]`
    pub fn from_toml_str(content: &str) -> Result<Self, Error> {
        toml::from_str(content).map_err(|e| Error::Configuration(e.to_string()))
    }

    /// Load a TOML configuration file
    pub fn from_file(path: &Path) -> Result<Self, Error> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Configuration(format!("Failed to read '{}': {e}", path.display()))
        })?;
        Self::from_toml_str(&content)
    }

    /// Check that the flow is non-empty and fully configured
    pub fn validate(&self) -> Result<(), StepConfigurationError> {
        if self.flow.is_empty() {
            return Err(StepConfigurationError::EmptyFlow);
        }

        match self.flow.iter().find(|step| !self.flags.contains_key(step)) {
            Some(step) => Err(StepConfigurationError::MissingEntry(*step)),
            None => Ok(()),
        }
    }

    pub fn flow(&self) -> &[Step] {
        &self.flow
    }

    pub fn is_enabled(&self, step: Step) -> bool {
        self.flags.get(&step).copied().unwrap_or(false)
    }

    /// Steps of the flow that will run, in order
    pub fn enabled_steps(&self) -> impl Iterator<Item = Step> + '_ {
        self.flow.iter().copied().filter(|step| self.is_enabled(*step))
    }

    pub fn activate(&mut self, step: Step) {
        self.flags.insert(step, true);
    }

    pub fn deactivate(&mut self, step: Step) {
        self.flags.insert(step, false);
    }

    /// Enable every implemented step, including ones outside the flow
    pub fn activate_all(&mut self) {
        for step in Step::ALL {
            self.flags.insert(step, true);
        }
    }

    /// Disable every implemented step
    pub fn deactivate_all(&mut self) {
        for step in Step::ALL {
            self.flags.insert(step, false);
        }
    }
}

/// Serialized form of [`PipelineConfig`]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawPipelineConfig {
    /// Step names in execution order; the canonical flow when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flow: Option<Vec<String>>,
    /// Complete flag table; every step enabled when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steps: Option<BTreeMap<String, bool>>,
}

impl TryFrom<RawPipelineConfig> for PipelineConfig {
    type Error = StepConfigurationError;

    fn try_from(raw: RawPipelineConfig) -> Result<Self, Self::Error> {
        let defaults = PipelineConfig::default();

        let flow = match raw.flow {
            Some(names) => names
                .iter()
                .map(|name| name.parse())
                .collect::<Result<Vec<Step>, _>>()?,
            None => defaults.flow,
        };

        let flags = match raw.steps {
            Some(table) => table
                .into_iter()
                .map(|(name, enabled)| Ok((name.parse::<Step>()?, enabled)))
                .collect::<Result<BTreeMap<Step, bool>, StepConfigurationError>>()?,
            None => defaults.flags,
        };

        PipelineConfig::new(flow, flags)
    }
}

impl From<PipelineConfig> for RawPipelineConfig {
    fn from(config: PipelineConfig) -> Self {
        Self {
            flow: Some(config.flow.iter().map(|s| s.name().to_string()).collect()),
            steps: Some(
                config
                    .flags
                    .iter()
                    .map(|(step, enabled)| (step.name().to_string(), *enabled))
                    .collect(),
            ),
        }
    }
}

/// Fluent builder for [`PipelineConfig`]
#[derive(Debug, Default)]
pub struct PipelineConfigBuilder {
    flow: Option<Vec<Step>>,
    enable: Vec<Step>,
    disable: Vec<Step>,
    only: Option<Vec<Step>>,
}

impl PipelineConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the canonical flow with a custom one
    pub fn flow(mut self, flow: impl IntoIterator<Item = Step>) -> Self {
        self.flow = Some(flow.into_iter().collect());
        self
    }

    pub fn enable(mut self, step: Step) -> Self {
        self.enable.push(step);
        self
    }

    pub fn disable(mut self, step: Step) -> Self {
        self.disable.push(step);
        self
    }

    /// Disable everything except the given steps
    pub fn only(mut self, steps: impl IntoIterator<Item = Step>) -> Self {
        self.only = Some(steps.into_iter().collect());
        self
    }

    pub fn build(self) -> Result<PipelineConfig, StepConfigurationError> {
        let mut config = PipelineConfig::default();

        if let Some(flow) = self.flow {
            config.flow = flow;
        }

        if let Some(only) = self.only {
            config.deactivate_all();
            for step in only {
                config.activate(step);
            }
        }

        for step in self.enable {
            config.activate(step);
        }

        for step in self.disable {
            config.deactivate(step);
        }

        config.validate()?;
        Ok(config)
    }
}
