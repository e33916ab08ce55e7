use colored::Colorize;
use httpcode::commands::command_argument_builder;
use httpcode::logging::init_logging;
use std::io::{self, Write};

fn main() {
    let chosen_command = match command_argument_builder().try_get_matches() {
        Ok(matches) => matches,
        Err(e) => {
            // --help and --version are not failures
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    init_logging(chosen_command.get_count("verbose"));

    let mut input = io::stdin().lock();
    let mut out = io::stdout().lock();

    if let Err(e) = httpcode::run(&chosen_command, &mut input, &mut out) {
        let _ = out.flush();
        eprintln!("{} {:#}", "✗ Error:".red().bold(), e);
        eprintln!("Use 'httpcode help' for more information.");
        std::process::exit(1);
    }
}
