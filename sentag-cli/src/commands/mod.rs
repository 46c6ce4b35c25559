//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;
use sentag_core::{PipelineConfig, Step};

pub mod generate_config;
pub mod process;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Normalize social media texts from files or the command line
    Process(process::ProcessArgs),

    /// Check a configuration file and the resources it points to
    Validate(validate::ValidateArgs),

    /// Write a commented configuration template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List normalization steps in canonical order
    Steps,

    /// List available output formats
    Formats,
}

impl ListCommands {
    /// Execute the list command
    pub fn execute(&self) -> Result<()> {
        match self {
            ListCommands::Steps => {
                let defaults = PipelineConfig::default();
                println!("Normalization steps (canonical order):");
                for step in Step::ALL {
                    let state = if defaults.is_enabled(step) { "on" } else { "off" };
                    let marker = if step.is_canonical() { "" } else { " (not in default flow)" };
                    println!(
                        "  {:<36} [{state}] {}{marker}",
                        step.name(),
                        step.description()
                    );
                }
            }
            ListCommands::Formats => {
                println!("Available output formats:");
                println!("  text - One normalized text per line");
                println!("  json - JSON array of {{source, line, input, normalized}} records");
            }
        }
        Ok(())
    }
}

/// Initialize logging based on verbosity level
pub fn init_logging(verbose: u8, quiet: bool) {
    let log_level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        _ => "trace",
    };

    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_commands_debug_format() {
        let process_cmd = Commands::Process(process::ProcessArgs {
            input: vec!["posts.txt".to_string()],
            text: vec![],
            output: None,
            format: Some(process::OutputFormat::Text),
            config: None,
            resources: None,
            enable: vec![],
            disable: vec!["remove_emojis".to_string()],
            no_cache: true,
            quiet: false,
            verbose: 0,
        });

        let debug_str = format!("{process_cmd:?}");
        assert!(debug_str.contains("Process"));
        assert!(debug_str.contains("posts.txt"));
        assert!(debug_str.contains("remove_emojis"));

        let validate_cmd = Commands::Validate(validate::ValidateArgs {
            config: PathBuf::from("sentag.toml"),
        });
        assert!(format!("{validate_cmd:?}").contains("sentag.toml"));

        let list_cmd = Commands::List {
            subcommand: ListCommands::Steps,
        };
        let debug_str = format!("{list_cmd:?}");
        assert!(debug_str.contains("List"));
        assert!(debug_str.contains("Steps"));
    }

    #[test]
    fn test_list_commands_execute() {
        assert!(ListCommands::Steps.execute().is_ok());
        assert!(ListCommands::Formats.execute().is_ok());
    }

    #[test]
    fn test_init_logging_is_repeatable() {
        init_logging(2, false);
        init_logging(0, true);
    }
}
