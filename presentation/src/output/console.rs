//! Console output formatting

use colored::Colorize;
use ims_application::{ChatOutcome, Termination};
use ims_domain::ToolSpec;

/// Formats assistant results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the tool catalog as offered to the model
    pub fn format_catalog(spec: &ToolSpec) -> String {
        let mut output = Self::header("Inventory Tools");
        output.push('\n');

        for tool in spec.all() {
            output.push_str(&format!(
                "\n{} {}\n  {}\n",
                tool.name.yellow().bold(),
                format!("[{}]", tool.risk_level).dimmed(),
                tool.description
            ));
            for param in &tool.parameters {
                let required = if param.required { "required" } else { "optional" };
                output.push_str(&format!(
                    "    {} ({}, {}): {}\n",
                    param.name.cyan(),
                    param.param_type,
                    required,
                    param.description
                ));
            }
        }
        output
    }

    /// Format the outcome of `ask`
    pub fn format_outcome(outcome: &ChatOutcome) -> String {
        let mut output = format!("{}\n", outcome.response);
        let footer = format!(
            "({} round{}, {} tool call{})",
            outcome.rounds,
            if outcome.rounds == 1 { "" } else { "s" },
            outcome.transcript.tool_exchanges(),
            if outcome.transcript.tool_exchanges() == 1 { "" } else { "s" },
        );
        match &outcome.termination {
            Termination::FinalAnswer => output.push_str(&format!("\n{}\n", footer.dimmed())),
            Termination::IterationExhausted => {
                output.push_str(&format!("\n{} {}\n", "round limit reached".yellow(), footer.dimmed()))
            }
            Termination::Failed(_) => {}
        }
        output
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(50);
        format!("{}\n{}\n{}", line.cyan(), title.bold(), line.cyan())
    }
}
