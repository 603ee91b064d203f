//! Run command
//!
//! Usage: rbtrace run [--format json|summary] <OPS>...
//!
//! Each op is `+N` or `N` (insert N), `-N` (delete N) or `reset`.

use clap::Args;
use rbtrace_core::Command;

use super::output::{self, OutputFormat};

#[derive(Debug, Args)]
pub struct RunArgs {
    /// Operations to run in order
    #[arg(required = true, allow_negative_numbers = true)]
    pub ops: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Summary)]
    pub format: OutputFormat,
}

/// Execute run command
pub fn execute(args: RunArgs) -> Result<(), Box<dyn std::error::Error>> {
    let commands = args
        .ops
        .iter()
        .map(|op| parse_op(op))
        .collect::<Result<Vec<_>, _>>()?;

    let results = output::run_commands(commands)?;
    println!("{}", output::render(&results, args.format)?);

    Ok(())
}

/// Parse one command-line op
pub fn parse_op(op: &str) -> Result<Command, String> {
    let op = op.trim();
    if op.eq_ignore_ascii_case("reset") {
        return Ok(Command::Reset);
    }

    let parse = |digits: &str| {
        digits
            .parse::<i64>()
            .map_err(|e| format!("Invalid op '{}': {}", op, e))
    };

    if let Some(rest) = op.strip_prefix('-') {
        Ok(Command::Delete { value: parse(rest)? })
    } else if let Some(rest) = op.strip_prefix('+') {
        Ok(Command::Insert { value: parse(rest)? })
    } else {
        Ok(Command::Insert { value: parse(op)? })
    }
}
