//! Result rendering shared by the run and script commands

use clap::ValueEnum;
use rbtrace_core::diff::render_operation_summary;
use rbtrace_core::{apply, Applied, Command, OperationRecord, RbTree};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Operation records as a JSON array
    Json,
    /// Markdown summary per operation
    Summary,
}

/// One entry of the JSON output
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum Entry<'a> {
    Operation {
        #[serde(flatten)]
        record: &'a OperationRecord,
    },
    Reset,
}

/// Apply `commands` to a fresh tree, in order
///
/// Stops at the first command that fails.
pub fn run_commands(commands: Vec<Command>) -> Result<Vec<Applied>, Box<dyn std::error::Error>> {
    let mut tree = RbTree::new();
    let mut results = Vec::with_capacity(commands.len());
    for cmd in commands {
        results.push(apply(&mut tree, cmd)?);
    }
    Ok(results)
}

/// Render applied results in the requested format
pub fn render(results: &[Applied], format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Json => {
            let entries: Vec<Entry<'_>> = results
                .iter()
                .map(|applied| match applied {
                    Applied::Recorded(record) => Entry::Operation { record },
                    Applied::Reset => Entry::Reset,
                })
                .collect();
            serde_json::to_string_pretty(&entries)
        }
        OutputFormat::Summary => {
            let sections: Vec<String> = results
                .iter()
                .map(|applied| match applied {
                    Applied::Recorded(record) => render_operation_summary(record),
                    Applied::Reset => "## Reset\n\n_The tree was cleared._\n".to_string(),
                })
                .collect();
            Ok(sections.join("\n"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_entries_are_tagged() {
        let results = run_commands(vec![Command::Insert { value: 1 }, Command::Reset]).unwrap();
        let json = render(&results, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value[0]["type"], "operation");
        assert_eq!(value[0]["label"], "Insert 1");
        assert_eq!(value[1]["type"], "reset");
    }

    #[test]
    fn test_summary_sections_follow_command_order() {
        let results = run_commands(vec![
            Command::Insert { value: 4 },
            Command::Delete { value: 4 },
        ])
        .unwrap();
        let summary = render(&results, OutputFormat::Summary).unwrap();

        let insert = summary.find("## Insert 4").unwrap();
        let delete = summary.find("## Delete 4").unwrap();
        assert!(insert < delete);
    }
}
