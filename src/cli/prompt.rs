//! Interactive prompts on stdin/stdout.
//!
//! Functions take the reader and writer explicitly so the prompts can be driven from
//! tests; `main` passes locked stdin and stdout.

use std::io::{self, BufRead, Write};

use crate::cli::Cli;

/// Prints `question` and reads one trimmed line.
///
/// # Arguments
/// - `input` - Source of the answer
/// - `output` - Where the question is written
/// - `question` - Prompt text, written without a trailing newline
///
/// # Returns
/// - `Ok(String)` - The answer with surrounding whitespace removed (empty on EOF)
/// - `Err(io::Error)` - Reading or writing failed
pub fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> io::Result<String> {
    write!(output, "{}", question)?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;

    Ok(answer.trim().to_string())
}

/// Asks a yes/no question; only `y` or `yes` (any case) counts as yes.
pub fn confirm<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> io::Result<bool> {
    let answer = ask(input, output, question)?;
    Ok(is_yes(&answer))
}

fn is_yes(answer: &str) -> bool {
    let answer: String = answer
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase();
    answer == "y" || answer == "yes"
}

/// Prompts for the guild, channel and sender IDs of an interactive session.
///
/// Values already given on the command line are kept and not asked for again.
pub fn fill_identity<R: BufRead, W: Write>(input: &mut R, output: &mut W, cli: &mut Cli) -> io::Result<()> {
    if cli.guild_id.is_none() {
        cli.guild_id = non_empty(ask(input, output, "Enter guild ID (or '@me' for DMs): ")?);
    }
    if cli.channel_id.is_none() {
        cli.channel_id = non_empty(ask(input, output, "Enter channel ID: ")?);
    }
    if cli.sender_id.is_none() {
        cli.sender_id = non_empty(ask(input, output, "Enter sender ID: ")?);
    }

    Ok(())
}

fn non_empty(value: String) -> Option<String> {
    (!value.is_empty()).then_some(value)
}
