//! Line-oriented driver: read a prompt, critique it, print the result, repeat.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use colored::Colorize;

use promptsmith_critic::Critic;
use promptsmith_logging::{Logger, Surface};

use crate::critique::{is_submittable, run_logged};

const RULE_WIDTH: usize = 50;
const QUIT_WORDS: [&str; 3] = ["quit", "exit", "q"];

fn is_quit(line: &str) -> bool {
    let lowered = line.trim().to_lowercase();
    QUIT_WORDS.contains(&lowered.as_str())
}

/// Run the read-critique-print loop until a quit word or end of input.
///
/// Each critique is awaited before the next line is read.
pub async fn run_repl<R, W>(
    critic: &dyn Critic,
    logger: &Logger,
    mut input: R,
    mut output: W,
) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    let rule = "=".repeat(RULE_WIDTH);

    writeln!(output, "{}", "AI Prompt Optimizer (Command Line Version)".bold())?;
    writeln!(output, "{}", rule)?;

    loop {
        writeln!(output)?;
        writeln!(output, "Enter your prompt (or 'quit' to exit):")?;
        write!(output, "> ")?;
        output.flush()?;

        let mut line = String::new();
        let read = input.read_line(&mut line).context("Failed to read input")?;
        if read == 0 {
            writeln!(output)?;
            writeln!(output, "Goodbye!")?;
            break;
        }

        let prompt = line.strip_suffix('\n').unwrap_or(line.as_str());
        let prompt = prompt.strip_suffix('\r').unwrap_or(prompt);

        if is_quit(prompt) {
            writeln!(output, "Goodbye!")?;
            break;
        }

        if !is_submittable(prompt) {
            writeln!(output, "{}", "Please enter a prompt!".bright_red())?;
            continue;
        }

        writeln!(output)?;
        writeln!(output, "{}", "Analyzing your prompt...".dimmed())?;
        output.flush()?;

        let outcome = run_logged(critic, logger, Surface::Repl, prompt).await;

        writeln!(output)?;
        writeln!(output, "{}", "Analysis & Improvement:".bold())?;
        writeln!(output, "{}", rule)?;
        writeln!(output, "{}", outcome)?;
        writeln!(output, "{}", rule)?;
    }

    Ok(())
}
