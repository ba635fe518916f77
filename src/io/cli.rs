//! Command-line interface and run orchestration

use crate::algorithm::executor::{GrowthConfig, GrowthSession, resolve_seed};
use crate::io::configuration::{DEFAULT_MAX_BLOCKS, DEFAULT_PLACE_PROBABILITY};
use crate::io::error::{Result, file_system_error};
use crate::io::interactive::prompt_parameters;
use crate::io::progress::PlacementProgress;
use crate::io::render::{Charset, MapHeader, render_map};
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "growtiles")]
#[command(
    version,
    about = "Generate ASCII tile maps by frontier-driven stamp growth"
)]
/// Command-line arguments for the map generation tool
pub struct Cli {
    /// Placement budget: upper bound on accepted blocks, seed block included
    #[arg(short, long, default_value_t = DEFAULT_MAX_BLOCKS as i64)]
    pub blocks: i64,

    /// Percentage chance to place when visiting a frontier cell (clamped to 0-100)
    #[arg(short, long, default_value_t = i64::from(DEFAULT_PLACE_PROBABILITY))]
    pub probability: i64,

    /// Random seed for reproducible generation (0 derives one from wall-clock time)
    #[arg(short, long, default_value_t = 0)]
    pub seed: u64,

    /// Output file path; the map goes to stdout when absent
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Glyph mapping for the serialized map
    #[arg(short, long, value_enum)]
    pub charset: Option<Charset>,

    /// Prompt for parameters and an output path instead of reading flags
    #[arg(short, long)]
    pub interactive: bool,

    /// Suppress progress output and confirmation messages
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Resolved parameters for one run
struct RunPlan {
    config: GrowthConfig,
    output: Option<PathBuf>,
    charset: Charset,
}

/// Orchestrates one generation run from CLI or interactive parameters
pub struct GenerationRunner {
    cli: Cli,
}

impl GenerationRunner {
    /// Create a runner with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Resolve parameters, grow the map, and write it out
    ///
    /// # Errors
    ///
    /// Returns an error if interactive prompts cannot be completed or the
    /// output destination cannot be written. The generated map is discarded
    /// on write failure; there is no partial-output mode.
    pub fn run(&mut self) -> Result<()> {
        let plan = self.resolve_plan()?;

        let mut session = GrowthSession::new(plan.config);
        let progress = self
            .cli
            .should_show_progress()
            .then(|| PlacementProgress::new(plan.config.max_blocks));

        while session.step() {
            if let Some(ref bar) = progress {
                bar.update(session.placed());
            }
        }
        if let Some(bar) = progress {
            bar.finish();
        }

        let header = MapHeader {
            seed: plan.config.seed,
            blocks: session.placed(),
            probability: plan.config.place_probability,
        };
        let rendered = render_map(session.grid(), header, plan.charset);

        match plan.output {
            Some(path) => {
                std::fs::write(&path, &rendered)
                    .map_err(|e| file_system_error(&path, "write output", e))?;

                // Mirrors the confirmation the interactive tool always printed
                #[allow(clippy::print_stderr)]
                if !self.cli.quiet {
                    eprintln!(
                        "Wrote {} (seed={}, blocks={}, prob={}%)",
                        path.display(),
                        header.seed,
                        header.blocks,
                        header.probability
                    );
                }
            }
            None => {
                let stdout = std::io::stdout();
                stdout
                    .lock()
                    .write_all(rendered.as_bytes())
                    .map_err(|e| {
                        file_system_error(std::path::Path::new("<stdout>"), "write output", e)
                    })?;
            }
        }

        Ok(())
    }

    /// Resolve the run parameters from flags or interactive prompts
    ///
    /// The charset defaults differ by mode: terminal dumps use the symbolic
    /// glyphs, interactive file output the digit glyphs, matching the two
    /// historical program variants. An explicit `--charset` wins either way.
    fn resolve_plan(&self) -> Result<RunPlan> {
        if self.cli.interactive {
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            let answers = prompt_parameters(&mut stdin.lock(), &mut stdout.lock())?;

            Ok(RunPlan {
                config: GrowthConfig::sanitized(
                    answers.max_blocks,
                    answers.place_probability,
                    resolve_seed(answers.seed),
                ),
                output: Some(answers.output),
                charset: self.cli.charset.unwrap_or(Charset::Digits),
            })
        } else {
            Ok(RunPlan {
                config: GrowthConfig::sanitized(
                    self.cli.blocks,
                    self.cli.probability,
                    resolve_seed(self.cli.seed),
                ),
                output: self.cli.output.clone(),
                charset: self.cli.charset.unwrap_or(Charset::Symbols),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_defaults_match_the_documented_values() {
        let cli = Cli::parse_from(["growtiles"]);
        assert_eq!(cli.blocks, 1200);
        assert_eq!(cli.probability, 70);
        assert_eq!(cli.seed, 0);
        assert!(cli.output.is_none());
        assert!(cli.charset.is_none());
        assert!(!cli.interactive);
        assert!(cli.should_show_progress());
    }

    #[test]
    fn charset_flag_parses_both_variants() {
        let cli = Cli::parse_from(["growtiles", "--charset", "digits"]);
        assert_eq!(cli.charset, Some(Charset::Digits));
        let cli = Cli::parse_from(["growtiles", "-c", "symbols"]);
        assert_eq!(cli.charset, Some(Charset::Symbols));
    }
}
