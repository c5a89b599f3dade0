use anyhow::{Context, Result};
use clap::{ArgAction, CommandFactory, Parser};
use clap_complete::{generate, Shell};
use rayon::prelude::*;
use spell::cli::output::{self, OutputFormat};
use spell::input::Input;
use spell::{CheckResult, Config, SpellChecker};
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;

#[derive(Parser, Debug)]
#[command(name = "spell")]
#[command(version, about = "Report words that are missing from a dictionary", long_about = None)]
struct Cli {
    /// Word list, one word per line
    #[arg(value_name = "DICTIONARY", required_unless_present = "completion")]
    dictionary: Option<PathBuf>,

    /// Files to check (reads standard input when none are given)
    #[arg(value_name = "INPUT")]
    inputs: Vec<PathBuf>,

    /// Output format (text, json)
    #[arg(short = 'o', long, default_value = "text")]
    format: OutputFormat,

    /// TOML configuration file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Longest word kept, in bytes; the rest of a longer word is ignored
    #[arg(long, value_name = "BYTES")]
    max_word_len: Option<usize>,

    /// Dictionary capacity (0 for unlimited)
    #[arg(long, value_name = "COUNT")]
    max_words: Option<usize>,

    /// Name reported for standard input
    #[arg(long, value_name = "NAME")]
    stdin_name: Option<String>,

    /// Check input files in parallel (output order is unchanged)
    #[arg(long)]
    parallel: bool,

    /// Exit with code 1 if any misspelling is found
    #[arg(long)]
    strict: bool,

    /// Print a one-line summary to stderr
    #[arg(long)]
    summary: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// More log output on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Handle shell completion generation
    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "spell", &mut io::stdout());
        return Ok(());
    }

    init_tracing(cli.verbose, cli.quiet);
    if cli.no_color {
        colored::control::set_override(false);
    }

    let config = Config::load(
        cli.config.as_deref(),
        cli.max_word_len,
        cli.max_words,
        cli.stdin_name.clone(),
        cli.parallel,
    )?;

    let dictionary_path = cli
        .dictionary
        .as_deref()
        .context("No dictionary specified. Use --help for usage information.")?;
    let checker = SpellChecker::new(dictionary_path, &config)
        .with_context(|| format!("Failed to load dictionary: {}", dictionary_path.display()))?;

    let inputs = Input::from_args(&cli.inputs, &config.stdin_name);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let total_findings = if cli.format == OutputFormat::Text && !config.parallel {
        stream_text(&checker, &inputs, &mut out)?
    } else {
        let results: Vec<CheckResult> = if config.parallel {
            inputs.par_iter().map(|i| checker.check_input(i)).collect()
        } else {
            inputs.iter().map(|i| checker.check_input(i)).collect()
        };

        match cli.format {
            OutputFormat::Text => {
                for result in &results {
                    output::write_text(&mut out, result)?;
                }
            }
            OutputFormat::Json => output::write_json(&mut out, &results)?,
        }

        results.iter().map(|r| r.findings.len()).sum()
    };

    out.flush().context("Failed to write output")?;
    drop(out);

    if cli.summary {
        output::print_summary(total_findings, inputs.len());
    }

    // Exit with appropriate code
    if cli.strict && total_findings > 0 {
        std::process::exit(1);
    }

    Ok(())
}

/// Serial text mode: findings are written as they are found.
fn stream_text<W: Write>(
    checker: &SpellChecker,
    inputs: &[Input],
    out: &mut W,
) -> Result<usize> {
    let mut total = 0;

    for input in inputs {
        let failure = checker.check_input_with(input, |finding| {
            total += 1;
            output::write_finding(out, &finding)
        })?;

        if let Some(failure) = failure {
            output::write_failure(out, &failure)?;
        }
    }

    Ok(total)
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = if quiet {
        LevelFilter::ERROR
    } else {
        match verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}
