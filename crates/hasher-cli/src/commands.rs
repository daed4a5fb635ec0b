//! Subcommand handlers

use crate::Command;
use anyhow::{Context, Result};
use hasher::config::HasherConfig;
use hasher::{Hasher, HasherInterface, VerifyOutcome};
use std::io::{self, Read, Write};
use std::process::ExitCode;
use tracing::debug;

/// Dispatch a parsed subcommand
pub fn run(command: Command, config: &HasherConfig) -> Result<ExitCode> {
    let hasher = Hasher::new();

    match command {
        Command::Hash { cost } => {
            let cost = cost.unwrap_or(config.hashing.cost);
            let secret = read_stdin_utf8("Secret")?;
            let hash = hasher
                .hash(secret.as_bytes(), cost)
                .context("Failed to hash secret")?;
            print_line(&hash)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Verify { hashed, explain } => {
            let candidate = read_stdin_utf8("Candidate secret")?;
            let matched = if explain {
                let outcome = hasher.verify_detailed(&candidate, &hashed);
                print_line(&describe(&outcome))?;
                outcome.is_match()
            } else {
                let matched = hasher.verify(&candidate, &hashed);
                print_line(if matched { "match" } else { "mismatch" })?;
                matched
            };
            debug!(matched, "Verification finished");
            Ok(if matched {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(1)
            })
        }
        Command::Generate { length } => {
            let length = length.unwrap_or(config.generator.length);
            let secret = hasher
                .generate(length)
                .context("Failed to generate secret")?;
            print_line(&secret)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Config => {
            let rendered =
                toml::to_string_pretty(config).context("Failed to render configuration")?;
            io::stdout()
                .write_all(rendered.as_bytes())
                .context("Failed to write configuration")?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn describe(outcome: &VerifyOutcome) -> String {
    match outcome {
        VerifyOutcome::Match => "match".to_string(),
        VerifyOutcome::Mismatch => "mismatch".to_string(),
        VerifyOutcome::Unverifiable { reason } => format!("unverifiable: {}", reason),
    }
}

/// Read all of stdin, dropping one trailing line ending
fn read_stdin() -> Result<Vec<u8>> {
    let mut input = Vec::new();
    io::stdin()
        .read_to_end(&mut input)
        .context("Failed to read stdin")?;

    if input.last() == Some(&b'\n') {
        input.pop();
        if input.last() == Some(&b'\r') {
            input.pop();
        }
    }
    Ok(input)
}

/// Read stdin as UTF-8 text
fn read_stdin_utf8(what: &str) -> Result<String> {
    String::from_utf8(read_stdin()?).with_context(|| format!("{} is not valid UTF-8", what))
}

fn print_line(line: &str) -> Result<()> {
    writeln!(io::stdout(), "{}", line).context("Failed to write output")
}
