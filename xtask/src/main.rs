//! Workspace tasks: export the options JSON schema and the default preset.
//!
//! ```text
//! cargo run -p arix-xtask -- schema --out options.schema.json
//! cargo run -p arix-xtask -- preset --out presets/default.toml
//! ```

use std::path::PathBuf;

use anyhow::Context;
use arix::options::Options;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(about = "Build tasks for the arix workspace")]
struct Cli {
    #[command(subcommand)]
    task: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Write the JSON Schema describing the UI-exposed options.
    Schema {
        /// Output path.
        #[arg(long, default_value = "options.schema.json")]
        out: PathBuf,
    },
    /// Write the default options as a TOML preset.
    Preset {
        /// Output path.
        #[arg(long, default_value = "presets/default.toml")]
        out: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    match Cli::parse().task {
        Task::Schema { out } => {
            let schema = serde_json::to_string_pretty(&Options::json_schema())
                .context("serializing options schema")?;
            std::fs::write(&out, schema)
                .with_context(|| format!("writing {}", out.display()))?;
            log_written(&out);
        }
        Task::Preset { out } => {
            Options::default()
                .save(&out)
                .with_context(|| format!("writing {}", out.display()))?;
            log_written(&out);
        }
    }
    Ok(())
}

#[allow(clippy::print_stderr)]
fn log_written(path: &std::path::Path) {
    eprintln!("wrote {}", path.display());
}
