//! CLI for reflowing a block of line comments in place.
//!
//! ## Usage
//!
//! ```bash
//! # Reflow the `//` block around line 12 of src/lib.rs to 80 columns
//! cfmt // 80 12 src/lib.rs
//!
//! # Preview the result without touching the file
//! cfmt --dry-run "#" 72 3 script.py
//!
//! # Describe the edit as JSON
//! cfmt --json // 100 40 src/main.rs
//!
//! # Generate shell completions
//! source <(COMPLETE=bash cfmt)
//! ```

mod error;
mod output;
mod source;

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use clap::{CommandFactory, Parser, ValueHint};
use clap_complete::Shell;
use owo_colors::{OwoColorize, Style};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use comment_formatter_lib::{format_block, is_comment_line};

use crate::error::CliError;
use crate::output::EditSummary;
use crate::source::SourceText;

/// Reflow the line-comment block around a line of a file to a maximum width
#[derive(Parser, Debug)]
#[command(name = "cfmt", version, about, long_about = None)]
#[command(after_help = AFTER_HELP)]
struct Cli {
    /// Comment prefix token (e.g. "//", "#", "--")
    #[arg(value_name = "COMMENT_PREFIX")]
    comment_prefix: String,

    /// Maximum line width in characters
    #[arg(value_name = "LINE_LENGTH")]
    line_length: usize,

    /// 1-based line number of any line inside the comment block
    #[arg(value_name = "LINE_NUMBER", allow_negative_numbers = true)]
    line_number: i64,

    /// File to reformat in place
    #[arg(value_name = "FILE", value_hint = ValueHint::FilePath)]
    file: PathBuf,

    /// Print the reformatted file to stdout instead of overwriting it
    #[arg(short = 'n', long)]
    dry_run: bool,

    /// Print a JSON summary of the edit instead of the file content
    #[arg(long)]
    json: bool,
}

const AFTER_HELP: &str = "\
SHELL COMPLETIONS:
  Enable tab completions by adding one line to your shell config:

  Bash (~/.bashrc):
    source <(COMPLETE=bash cfmt)

  Zsh (~/.zshrc):
    source <(COMPLETE=zsh cfmt)

  Fish (~/.config/fish/config.fish):
    COMPLETE=fish cfmt | source

EXAMPLES:
  cfmt // 80 12 src/lib.rs          # reflow the block around line 12
  cfmt -n \"#\" 72 3 script.py        # print the result, leave the file alone
  cfmt --json // 100 40 src/main.rs # describe the edit as JSON
  cfmt -- -- 80 5 query.sql         # prefixes starting with '-' follow '--'

LOGGING:
  Set RUST_LOG (e.g. RUST_LOG=debug) to trace the reflow on stderr.
";

fn main() {
    // Check for shell completion generation before parsing args
    if let Ok(shell_name) = std::env::var("COMPLETE") {
        generate_completions(&shell_name);
        return;
    }

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(io::stderr)
            .init();
    }

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        report_error(&e);
        std::process::exit(1);
    }
}

/// Reads the file, reflows the block under the requested line and emits the result.
///
/// The file is written at most once, after the replacement is fully computed.
fn run(cli: &Cli) -> Result<(), CliError> {
    let source = SourceText::read(&cli.file)?;
    let cursor = cursor_index(cli.line_number, source.lines.len())?;

    if !is_comment_line(&cli.comment_prefix, &source.lines[cursor]) {
        return Err(CliError::NotInCommentBlock {
            line: cursor + 1,
            prefix: cli.comment_prefix.clone(),
        });
    }

    let edit = format_block(&cli.comment_prefix, &source.lines, cursor, cli.line_length)?;
    let changed = !edit.is_noop();

    let written = !cli.dry_run && changed;
    if written {
        source.write(&cli.file, &edit)?;
        info!(
            path = %cli.file.display(),
            start = edit.range.start + 1,
            end = edit.range.end + 1,
            lines = edit.replacement.len(),
            "rewrote comment block"
        );
    } else if !changed {
        debug!(path = %cli.file.display(), "comment block already formatted");
    }

    if cli.json {
        let summary = EditSummary::new(&cli.file, &edit, written);
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else if cli.dry_run {
        print!("{}", source.render(&edit));
    }

    Ok(())
}

/// Converts a 1-based line number into a checked 0-based index.
fn cursor_index(line_number: i64, total: usize) -> Result<usize, CliError> {
    line_number
        .checked_sub(1)
        .and_then(|i| usize::try_from(i).ok())
        .filter(|&i| i < total)
        .ok_or(CliError::LineOutOfBounds {
            line: line_number,
            total,
        })
}

/// Prints an error to stderr, colored when stderr is a terminal.
fn report_error(error: &CliError) {
    if io::stderr().is_terminal() {
        let style = Style::new().red().bold();
        eprintln!("{} {error}", "Error:".style(style));
    } else {
        eprintln!("Error: {error}");
    }
}

/// Generate shell completions and exit.
fn generate_completions(shell_name: &str) {
    let shell = match shell_name.to_lowercase().as_str() {
        "bash" => Shell::Bash,
        "zsh" => Shell::Zsh,
        "fish" => Shell::Fish,
        "powershell" => Shell::PowerShell,
        "elvish" => Shell::Elvish,
        _ => {
            eprintln!(
                "Unknown shell: {shell_name}. Supported: bash, zsh, fish, powershell, elvish"
            );
            std::process::exit(1);
        }
    };

    clap_complete::generate(shell, &mut Cli::command(), "cfmt", &mut io::stdout());
}
