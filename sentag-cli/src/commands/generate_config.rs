//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use sentag_core::{Step, CANONICAL_FLOW};
use std::fmt::Write as _;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        std::fs::write(&self.output, generate_template())
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the configuration file to choose resources and steps");
        println!("2. Validate your configuration:");
        println!("   sentag validate --config {}", self.output.display());
        println!("3. Use it for processing:");
        println!(
            "   sentag process -i posts.txt --config {}",
            self.output.display()
        );

        Ok(())
    }
}

/// Template configuration content
pub fn generate_template() -> String {
    let mut template = String::from(
        r#"# sentag configuration

[resources]
# Resource manifest listing contraction tables, emoji inventories and
# stop-keyword lists. Relative paths resolve against this file.
# When omitted, the bundled resource set is used.
# manifest = "resources/manifest.toml"

[pipeline]
# Execution order. Every step listed here needs an entry in [pipeline.steps].
flow = [
"#,
    );

    for step in CANONICAL_FLOW {
        let _ = writeln!(template, "    \"{}\",", step.name());
    }
    template.push_str("]\n\n[pipeline.steps]\n");

    for step in Step::ALL {
        let _ = writeln!(template, "# {}", step.description());
        let _ = writeln!(template, "{} = true", step.name());
    }

    template.push_str(
        r#"
[cache]
# Token cache written after every preprocessing call
enabled = true
path = ".sentag/token_cache.json"

[output]
# "text" or "json"
default_format = "text"
pretty_json = false
"#,
    );

    template
}
