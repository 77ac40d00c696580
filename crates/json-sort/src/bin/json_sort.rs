//! `json-sort` - print a JSON object (stdin) with canonically ordered keys.
//!
//! Usage:
//!   json-sort [--pretty] [--check]
//!
//! Log output goes to stderr and is controlled by `JWS_JSON_LOG`.

use jws_json_sort::cli::{init_logging, read_input, run, CliOptions, Outcome, USAGE};
use std::io::{self, Write};

fn main() {
    init_logging();

    let options = match CliOptions::parse(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("{e}");
            eprintln!("{USAGE}");
            std::process::exit(e.exit_code());
        }
    };

    let buf = match read_input(io::stdin().lock()) {
        Ok(buf) => buf,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(e.exit_code());
        }
    };

    match run(buf.trim(), &options) {
        Ok(Outcome::Output(text)) => {
            let mut stdout = io::stdout().lock();
            if let Err(e) = writeln!(stdout, "{text}") {
                eprintln!("{e}");
                std::process::exit(1);
            }
        }
        Ok(outcome) => std::process::exit(outcome.exit_code()),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(e.exit_code());
        }
    }
}
