//! Command line front end for the `jsonscrub` library.
//!
//! Loads the sensitive-field list and the input document, masks the
//! document, prints the masked JSON to stdout, and replays the restore pass
//! as a consistency check before exiting. Diagnostics go to stderr so
//! stdout carries nothing but the document.

use std::{fs, path::Path, process::ExitCode};

use anyhow::{Context, Result, bail};
use clap::Parser;
use jsonscrub::{Scrubber, SensitiveFieldSet};
use tracing::warn;

/// Mask sensitive fields in a JSON document.
#[derive(Debug, Parser)]
#[command(name = "jsonscrub", version, about)]
struct Args {
    /// Path to the newline-delimited list of sensitive field names.
    sensitive_fields: std::path::PathBuf,
    /// Path to the JSON document to scrub.
    input: std::path::PathBuf,
    /// Emit compact JSON instead of the default indented output.
    #[arg(long)]
    compact: bool,
}

/// Loads the field list, degrading to an empty set when the file cannot be
/// read. The degradation is deliberate (the tool still runs, masking
/// nothing) but never silent.
fn load_field_set(path: &Path) -> SensitiveFieldSet {
    match fs::read_to_string(path) {
        Ok(text) => SensitiveFieldSet::from_lines(&text),
        Err(error) => {
            warn!(
                path = %path.display(),
                %error,
                "sensitive-field list unreadable; nothing will be masked"
            );
            SensitiveFieldSet::new()
        }
    }
}

fn run(args: &Args) -> Result<String> {
    if args.sensitive_fields.as_os_str().is_empty() {
        bail!("missing required sensitive-field list path");
    }
    if args.input.as_os_str().is_empty() {
        bail!("missing required input document path");
    }

    let fields = load_field_set(&args.sensitive_fields);

    let text = fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read input document {}", args.input.display()))?;
    let mut document: serde_json::Value = serde_json::from_str(&text)
        .with_context(|| format!("failed to parse input document {}", args.input.display()))?;

    let scrubber = Scrubber::new(fields);
    let record = scrubber.mask(&mut document);

    let output = if args.compact {
        serde_json::to_string(&document)
    } else {
        serde_json::to_string_pretty(&document)
    }
    .context("failed to encode masked document")?;

    // Replay the restore pass against the same tree: if it does not drain
    // the record cleanly, the masked output must not be trusted.
    scrubber
        .restore(&mut document, record)
        .context("restore pass diverged from mask pass")?;

    Ok(output)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let args = Args::parse();
    match run(&args) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("error: {error:#}");
            ExitCode::FAILURE
        }
    }
}
