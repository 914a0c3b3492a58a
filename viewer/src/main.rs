use std::{env, process};

use viewer::run;

fn main() {
    let seed = match parse_seed(env::args().nth(1)) {
        Ok(seed) => seed,
        Err(raw) => {
            eprintln!("Error: invalid seed '{}'.", raw);
            eprintln!("Usage: maze-viewer [seed]");
            process::exit(1);
        }
    };

    if let Err(e) = run::run(seed) {
        eprintln!("Error: terminal session failed.");
        eprintln!("Details: {}.", e);
        process::exit(1);
    }
}

/// An optional seed on the command line makes every round reproducible.
fn parse_seed(argument: Option<String>) -> Result<Option<u64>, String> {
    match argument {
        None => Ok(None),
        Some(raw) => raw.parse().map(Some).map_err(|_| raw),
    }
}
