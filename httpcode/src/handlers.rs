use crate::commands::command_argument_builder;
use anyhow::{Result, bail};
use colored::{ColoredString, Colorize};
use httpcode_core::{BaselineSource, Descriptions, Origin, StatusClass, StatusCode};
use std::io::{self, BufRead, Write};

/// What `reset` should act on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResetTarget {
    Code(String),
    All { yes: bool },
}

fn print_divider(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", "═".repeat(60).bright_blue().bold())
}

/// Ask a question and return the lowercased answer.
pub fn print_prompt(msg: &str, input: &mut impl BufRead, out: &mut impl Write) -> io::Result<String> {
    write!(out, "{} ", msg.bright_cyan().bold())?;
    out.flush()?;
    let mut response = String::new();
    input.read_line(&mut response)?;
    Ok(response.trim().to_lowercase())
}

fn confirmed(response: &str) -> bool {
    response == "y" || response == "yes"
}

fn class_glyph(class: StatusClass) -> ColoredString {
    match class {
        StatusClass::Informational => "ℹ".white(),
        StatusClass::Success => "✓".green(),
        StatusClass::Redirection => "↪".cyan(),
        StatusClass::ClientError => "⚠".yellow(),
        StatusClass::ServerError => "✗".red(),
        StatusClass::Unknown => "?".white(),
    }
}

fn colored_code(code: &StatusCode) -> ColoredString {
    match code.class() {
        StatusClass::Informational => code.as_str().white(),
        StatusClass::Success => code.as_str().green(),
        StatusClass::Redirection => code.as_str().cyan(),
        StatusClass::ClientError => code.as_str().yellow(),
        StatusClass::ServerError => code.as_str().red(),
        StatusClass::Unknown => code.as_str().normal(),
    }
    .bold()
}

pub fn handle_get(descriptions: &Descriptions, code: &str, out: &mut impl Write) -> Result<()> {
    let resolved = descriptions.get(code)?;
    writeln!(out, "{}: {}", colored_code(&resolved.code), resolved.description)?;
    Ok(())
}

pub fn handle_edit(
    descriptions: &mut Descriptions,
    code: &str,
    description: &str,
    out: &mut impl Write,
) -> Result<()> {
    descriptions.set(code, description)?;
    writeln!(
        out,
        "{} Description for HTTP code '{}' has been updated.",
        "✓".green().bold(),
        code
    )?;
    Ok(())
}

pub fn handle_reset(
    descriptions: &mut Descriptions,
    target: &ResetTarget,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<()> {
    match target {
        ResetTarget::Code(code) => {
            if descriptions.reset(code)? {
                writeln!(
                    out,
                    "{} Description for HTTP code '{}' has been reset to its original value.",
                    "✓".green().bold(),
                    code
                )?;
            } else {
                writeln!(
                    out,
                    "{} HTTP code '{}' has no custom description to reset.",
                    "ℹ".blue(),
                    code
                )?;
            }
        }
        ResetTarget::All { yes } => {
            let count = descriptions.override_count();
            if count == 0 {
                writeln!(out, "{} No custom descriptions to reset.", "ℹ".blue())?;
                return Ok(());
            }

            if !yes {
                writeln!(out, "{}", "⚠ WARNING".yellow().bold())?;
                writeln!(
                    out,
                    "All {} custom descriptions will be reset to their original values.",
                    count.to_string().bright_white()
                )?;
                let response = print_prompt("Do you want to continue? [y/N]:", input, out)?;
                if !confirmed(&response) {
                    writeln!(out, "{} Operation cancelled.", "✗".red().bold())?;
                    return Ok(());
                }
            }

            let removed = descriptions.reset_all()?;
            writeln!(
                out,
                "{} All {} custom descriptions have been reset to their original values.",
                "✓".green().bold(),
                removed
            )?;
        }
    }
    Ok(())
}

/// Render every code grouped by status class.
///
/// Custom descriptions are flagged with `*`.
pub fn generate_listing(descriptions: &Descriptions, custom_only: bool) -> String {
    let mut report = String::new();
    let mut current_class = None;
    let mut shown = 0;

    for entry in descriptions.entries() {
        if custom_only && entry.origin != Origin::Override {
            continue;
        }

        let class = entry.code.class();
        if current_class != Some(class) {
            if current_class.is_some() {
                report.push('\n');
            }
            report.push_str(&format!("## {}\n", class.as_str().bright_white().bold()));
            current_class = Some(class);
        }

        let marker = match entry.origin {
            Origin::Override => "*".yellow().bold().to_string(),
            Origin::Baseline => " ".to_string(),
        };
        report.push_str(&format!(
            "  {} {}{} {}\n",
            class_glyph(class),
            colored_code(&entry.code),
            marker,
            entry.description
        ));
        shown += 1;
    }

    if shown == 0 {
        report.push_str("No custom descriptions.\n");
        return report;
    }

    report.push_str(&format!(
        "\n{} codes, {} custom\n",
        descriptions.baseline_len(),
        descriptions.override_count()
    ));
    report
}

pub fn handle_list(descriptions: &Descriptions, custom_only: bool, out: &mut impl Write) -> Result<()> {
    write!(out, "{}", generate_listing(descriptions, custom_only))?;
    Ok(())
}

pub fn handle_rebuild(
    descriptions: &mut Descriptions,
    source: &BaselineSource,
    yes: bool,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<()> {
    if !yes {
        writeln!(out, "{}", "⚠ WARNING".yellow().bold())?;
        writeln!(
            out,
            "The original descriptions will be re-derived from the {}.",
            source.label().bright_white()
        )?;
        let response = print_prompt("Do you want to continue? [y/N]:", input, out)?;
        if !confirmed(&response) {
            writeln!(out, "{} Operation cancelled.", "✗".red().bold())?;
            return Ok(());
        }
    }

    let count = descriptions.rebuild_baseline(source)?;
    writeln!(
        out,
        "{} Original descriptions rebuilt: {} codes saved to {}",
        "✓".green().bold(),
        count.to_string().cyan(),
        descriptions.store().baseline_path().display().to_string().bright_white()
    )?;
    Ok(())
}

pub fn handle_help(topic: Option<&str>, out: &mut impl Write) -> Result<()> {
    let mut cmd = command_argument_builder();
    cmd.build();

    let help = match topic {
        None => cmd.render_long_help(),
        Some(name) => match cmd.find_subcommand_mut(name) {
            Some(sub) => sub.render_long_help(),
            None => bail!("Unknown help topic '{}'", name),
        },
    };

    print_divider(out)?;
    writeln!(out, "{}", "  HTTP STATUS CODE CLI TOOL".bright_white().bold())?;
    print_divider(out)?;
    writeln!(out)?;
    write!(out, "{}", help)?;
    Ok(())
}
