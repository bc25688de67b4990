// src/cli.rs
use std::{env, path::PathBuf, process};

use crate::params::Params;
use crate::progress::StderrProgress;
use crate::runner;

/// One positional argument: the errorcodes module to rewrite in place.
/// Each version is echoed to stderr while it is being processed.
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args();
    let prog = args.next().unwrap_or_else(|| s!("errcodes_scrape"));

    let target = match (args.next(), args.next()) {
        (Some(target), None) => target,
        _ => {
            eprintln!("usage: {prog} /path/to/errorcodes.py");
            process::exit(2);
        }
    };

    let params = Params::new(PathBuf::from(target));
    let mut progress = StderrProgress;
    let summary = runner::run(&params, Some(&mut progress))?;
    logf!("done: {} classes, {} codes", summary.classes, summary.codes);
    Ok(())
}
