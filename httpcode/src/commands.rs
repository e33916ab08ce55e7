use clap::{ArgAction, arg, command};
use std::path::PathBuf;

pub const CLAP_STYLING: clap::builder::styling::Styles = clap::builder::styling::Styles::styled()
    .header(clap_cargo::style::HEADER)
    .usage(clap_cargo::style::USAGE)
    .literal(clap_cargo::style::LITERAL)
    .placeholder(clap_cargo::style::PLACEHOLDER)
    .error(clap_cargo::style::ERROR)
    .valid(clap_cargo::style::VALID)
    .invalid(clap_cargo::style::INVALID);

/// Subcommands `help <TOPIC>` knows about.
pub const HELP_TOPICS: [&str; 6] = ["get", "edit", "reset", "list", "rebuild", "help"];

pub fn command_argument_builder() -> clap::Command {
    clap::Command::new("httpcode")
        .version(env!("CARGO_PKG_VERSION"))
        .bin_name("httpcode")
        .about("Query and manage HTTP status codes and their descriptions")
        .after_help("Use 'httpcode help <COMMAND>' for more information on a specific command.")
        .styles(CLAP_STYLING)
        .disable_help_subcommand(true)
        .subcommand_required(false)
        .arg(
            arg!([CODE])
                .required(false)
                .help("The HTTP status code to look up (e.g., 200, 404)"),
        )
        .arg(
            arg!(-q --"quiet" "Suppress non-essential output")
                .required(false)
                .global(true),
        )
        .arg(
            arg!(-v --"verbose")
                .help("Increase log verbosity (-v info, -vv debug)")
                .action(ArgAction::Count)
                .global(true),
        )
        .arg(
            arg!(--"config-dir" <PATH>)
                .required(false)
                .help("Directory holding the description files (default: per-user config directory)")
                .env("HTTPCODE_CONFIG_DIR")
                .global(true),
        )
        .arg(
            arg!(--"html" <PATH>)
                .required(false)
                .help("HTML document to derive the baseline from (default: bundled document)")
                .value_parser(clap::value_parser!(PathBuf))
                .global(true),
        )
        .subcommand(
            command!("get")
                .about("Display the description for an HTTP status code")
                .arg(
                    arg!(<CODE>)
                        .required(true)
                        .help("The HTTP status code (e.g., 200, 404)"),
                ),
        )
        .subcommand(
            command!("edit")
                .about("Edit the description for an HTTP status code")
                .arg(
                    arg!(<CODE>)
                        .required(true)
                        .help("The HTTP status code (e.g., 200, 404)"),
                )
                .arg(
                    arg!(<DESCRIPTION>)
                        .required(true)
                        .help("The new description for the HTTP status code"),
                ),
        )
        .subcommand(
            command!("reset")
                .about("Reset the description for an HTTP status code to its original value")
                .arg(
                    arg!([CODE])
                        .required(false)
                        .help("The HTTP status code to reset (e.g., 200, 404)")
                        .conflicts_with("all"),
                )
                .arg(
                    arg!(--"all")
                        .required(false)
                        .help("Reset all custom descriptions to their original values")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    arg!(-y --"yes")
                        .required(false)
                        .help("Skip confirmation prompt when resetting all descriptions")
                        .action(ArgAction::SetTrue),
                )
                .after_help(
                    "Examples:\n  \
                    httpcode reset 404           Reset the description for HTTP code 404\n  \
                    httpcode reset --all         Reset all custom descriptions with confirmation\n  \
                    httpcode reset --all --yes   Reset all custom descriptions without confirmation",
                ),
        )
        .subcommand(
            command!("list")
                .about("List every known HTTP status code with its current description")
                .arg(
                    arg!(-c --"custom")
                        .required(false)
                        .help("Only list codes that have a custom description")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            command!("rebuild")
                .about(
                    "Re-derive the original descriptions from the HTML document. Custom \
                descriptions for codes that disappear are dropped.",
                )
                .arg(
                    arg!(-y --"yes")
                        .required(false)
                        .help("Skip confirmation prompt")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            command!("help")
                .about("Display help information")
                .arg(
                    arg!([TOPIC])
                        .required(false)
                        .help("The command to show help for")
                        .value_parser(HELP_TOPICS),
                ),
        )
}
