//! Interactive parameter prompts mirroring the batch options
//!
//! Prompts run over generic reader/writer pairs so the whole exchange is
//! testable with in-memory buffers. Malformed numeric answers keep the
//! documented default instead of failing the run.

use crate::io::configuration::{DEFAULT_MAX_BLOCKS, DEFAULT_PLACE_PROBABILITY, TILE_SIZE};
use crate::io::error::{GenerationError, Result, file_system_error};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

/// Raw parameters gathered from the operator, before sanitization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InteractiveInput {
    /// Requested placement budget
    pub max_blocks: i64,
    /// Requested place probability in percent
    pub place_probability: i64,
    /// Requested seed; 0 means derive from wall-clock time
    pub seed: u64,
    /// Output file path
    pub output: PathBuf,
}

/// Prompt for generation parameters and an output path
///
/// Questions are asked in a fixed order: placement budget, place
/// probability, seed, output filename. Empty or unparseable numeric
/// answers keep the shown default.
///
/// # Errors
///
/// Returns an error if the prompt streams cannot be used or the output
/// filename is empty
pub fn prompt_parameters<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<InteractiveInput> {
    prompt(
        output,
        &format!(
            "Max blocks: upper bound on {TILE_SIZE}x{TILE_SIZE} placements. Typical: 800-3000.\n\
             Enter max blocks [{DEFAULT_MAX_BLOCKS}]: "
        ),
    )?;
    let max_blocks = read_numeric_or(input, DEFAULT_MAX_BLOCKS as i64)?;

    prompt(
        output,
        &format!(
            "\nPlace probability (0-100): chance to place when visiting a frontier cell.\n\
             Higher means a denser map.\n\
             Enter place probability [{DEFAULT_PLACE_PROBABILITY}]: "
        ),
    )?;
    let place_probability = read_numeric_or(input, i64::from(DEFAULT_PLACE_PROBABILITY))?;

    prompt(
        output,
        "\nSeed: fixes randomness (0 = random based on time).\nEnter seed [0]: ",
    )?;
    let seed = read_line(input)?.parse().unwrap_or(0);

    prompt(output, "\nOutput filename (e.g., dungeon.txt): ")?;
    let filename = read_line(input)?;
    if filename.is_empty() {
        return Err(GenerationError::MissingOutputPath);
    }

    Ok(InteractiveInput {
        max_blocks,
        place_probability,
        seed,
        output: PathBuf::from(filename),
    })
}

fn prompt<W: Write>(output: &mut W, text: &str) -> Result<()> {
    output
        .write_all(text.as_bytes())
        .and_then(|()| output.flush())
        .map_err(|e| file_system_error(Path::new("<prompt>"), "write prompt", e))
}

fn read_line<R: BufRead>(input: &mut R) -> Result<String> {
    let mut line = String::new();
    input
        .read_line(&mut line)
        .map_err(|e| file_system_error(Path::new("<stdin>"), "read prompt answer", e))?;
    Ok(line.trim().to_string())
}

fn read_numeric_or<R: BufRead>(input: &mut R, default: i64) -> Result<i64> {
    let line = read_line(input)?;
    Ok(line.parse().unwrap_or(default))
}
