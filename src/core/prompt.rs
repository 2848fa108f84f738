use std::io::{BufRead, Write};

use anyhow::{Result, bail};

use super::render::OutputFormat;

const PROMPT: &str = "Choose output format: [1] JSON, [2] list: ";

/// Ask on `output` until `input` yields `1` or `2`.
///
/// Fails if `input` ends before a valid choice is read.
pub fn choose_format<R, W>(input: &mut R, output: &mut W) -> Result<OutputFormat>
where
    R: BufRead,
    W: Write,
{
    let mut line = String::new();
    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            bail!("no output format chosen");
        }

        match line.trim() {
            "1" => return Ok(OutputFormat::Structured),
            "2" => return Ok(OutputFormat::List),
            _ => writeln!(output, "Invalid choice, enter 1 or 2.")?,
        }
    }
}
