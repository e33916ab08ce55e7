// Routes parsed arguments to the command handlers

use crate::handlers::{
    ResetTarget, handle_edit, handle_get, handle_help, handle_list, handle_rebuild, handle_reset,
};
use anyhow::{Context, Result, anyhow, bail};
use clap::ArgMatches;
use colored::Colorize;
use httpcode_core::{BaselineSource, Descriptions, StatusCode, Store, default_config_dir};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::debug;

fn required<'a>(matches: &'a ArgMatches, id: &str) -> Result<&'a str> {
    matches
        .get_one::<String>(id)
        .map(String::as_str)
        .ok_or_else(|| anyhow!("missing required argument <{}>", id))
}

// Reject malformed codes before any file is touched.
fn validated(code: &str) -> Result<&str> {
    code.parse::<StatusCode>()?;
    Ok(code)
}

pub fn config_dir(matches: &ArgMatches) -> Result<PathBuf> {
    match matches.get_one::<String>("config-dir") {
        Some(dir) => Ok(PathBuf::from(shellexpand::tilde(dir).as_ref())),
        None => default_config_dir()
            .context("Could not determine a configuration directory; pass --config-dir"),
    }
}

pub fn baseline_source(matches: &ArgMatches) -> BaselineSource {
    match matches.get_one::<PathBuf>("html") {
        Some(path) => BaselineSource::File(path.clone()),
        None => BaselineSource::Bundled,
    }
}

fn open_descriptions(
    matches: &ArgMatches,
    source: &BaselineSource,
    out: &mut impl Write,
) -> Result<Descriptions> {
    let dir = config_dir(matches)?;
    debug!("Using configuration directory {}", dir.display());

    let descriptions = Descriptions::open(Store::new(dir), source)
        .context("Failed to load HTTP status code descriptions")?;

    if descriptions.baseline_created() && !matches.get_flag("quiet") {
        writeln!(
            out,
            "{} Original data saved to {}",
            "✓".green().bold(),
            descriptions
                .store()
                .baseline_path()
                .display()
                .to_string()
                .bright_white()
        )?;
    }
    Ok(descriptions)
}

fn reset_target(matches: &ArgMatches, out: &mut impl Write) -> Result<ResetTarget> {
    if matches.get_flag("all") {
        return Ok(ResetTarget::All {
            yes: matches.get_flag("yes"),
        });
    }
    match matches.get_one::<String>("CODE") {
        Some(code) => Ok(ResetTarget::Code(validated(code)?.to_string())),
        None => {
            handle_help(Some("reset"), out)?;
            bail!("Either specify a code or use --all to reset all descriptions.")
        }
    }
}

/// Execute the command described by `matches`.
///
/// `input` answers confirmation prompts; everything user-facing goes to `out`.
pub fn run(matches: &ArgMatches, input: &mut impl BufRead, out: &mut impl Write) -> Result<()> {
    let source = baseline_source(matches);

    match matches.subcommand() {
        Some(("help", sub)) => {
            handle_help(sub.get_one::<String>("TOPIC").map(String::as_str), out)
        }
        Some(("get", sub)) => {
            let code = validated(required(sub, "CODE")?)?;
            let descriptions = open_descriptions(matches, &source, out)?;
            handle_get(&descriptions, code, out)
        }
        Some(("edit", sub)) => {
            let code = validated(required(sub, "CODE")?)?;
            let description = required(sub, "DESCRIPTION")?;
            let mut descriptions = open_descriptions(matches, &source, out)?;
            handle_edit(&mut descriptions, code, description, out)
        }
        Some(("reset", sub)) => {
            let target = reset_target(sub, out)?;
            let mut descriptions = open_descriptions(matches, &source, out)?;
            handle_reset(&mut descriptions, &target, input, out)
        }
        Some(("list", sub)) => {
            let descriptions = open_descriptions(matches, &source, out)?;
            handle_list(&descriptions, sub.get_flag("custom"), out)
        }
        Some(("rebuild", sub)) => {
            let mut descriptions = open_descriptions(matches, &source, out)?;
            handle_rebuild(&mut descriptions, &source, sub.get_flag("yes"), input, out)
        }
        Some((name, _)) => bail!("Unknown command '{}'", name),
        None => match matches.get_one::<String>("CODE") {
            Some(code) => {
                let code = validated(code)?;
                let descriptions = open_descriptions(matches, &source, out)?;
                handle_get(&descriptions, code, out)
            }
            None => handle_help(None, out),
        },
    }
}
