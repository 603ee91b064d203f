//! Script command
//!
//! Usage: rbtrace script <FILE> [--format json|summary]
//!
//! Script format (YAML):
//!
//! ```yaml
//! schema_version: 0
//! steps:
//!   - op: insert
//!     value: 10
//!   - op: delete
//!     value: 10
//!   - op: reset
//! ```

use clap::Args;
use rbtrace_core::Command;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use super::output::{self, OutputFormat};

#[derive(Debug, Args)]
pub struct ScriptArgs {
    /// Path to the YAML script
    pub file: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Summary)]
    pub format: OutputFormat,
}

/// Root of a version 0 script
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScriptV0 {
    pub schema_version: u32,
    #[serde(default)]
    pub steps: Vec<ScriptStep>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScriptStep {
    pub op: StepOp,
    pub value: Option<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepOp {
    Insert,
    Delete,
    Reset,
}

/// Execute script command
pub fn execute(args: ScriptArgs) -> Result<(), Box<dyn std::error::Error>> {
    let commands = load_script(&args.file)?;
    let results = output::run_commands(commands)?;
    println!("{}", output::render(&results, args.format)?);

    Ok(())
}

/// Read, parse and validate a script file
pub fn load_script(path: &Path) -> Result<Vec<Command>, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read script {}: {}", path.display(), e))?;
    parse_script(&content)
}

/// Parse script text into commands
pub fn parse_script(content: &str) -> Result<Vec<Command>, String> {
    let script: ScriptV0 =
        serde_yaml::from_str(content).map_err(|e| format!("Invalid script YAML: {}", e))?;
    validate_script(&script)
}

fn validate_script(script: &ScriptV0) -> Result<Vec<Command>, String> {
    if script.schema_version != 0 {
        return Err(format!(
            "Unsupported schema_version {} (expected 0)",
            script.schema_version
        ));
    }

    script
        .steps
        .iter()
        .enumerate()
        .map(|(index, step)| match (step.op, step.value) {
            (StepOp::Insert, Some(value)) => Ok(Command::Insert { value }),
            (StepOp::Delete, Some(value)) => Ok(Command::Delete { value }),
            (StepOp::Reset, None) => Ok(Command::Reset),
            (StepOp::Insert | StepOp::Delete, None) => {
                Err(format!("steps[{}]: missing value", index))
            }
            (StepOp::Reset, Some(_)) => Err(format!("steps[{}]: reset takes no value", index)),
        })
        .collect()
}
