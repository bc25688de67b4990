// src/file.rs

use std::{
    error::Error,
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

/// Copy the target file's lines verbatim up to and including the marker
/// line. A file without the marker is not the expected base file.
pub fn read_base_file(path: &Path, marker: &str) -> Result<Vec<String>, Box<dyn Error>> {
    let reader = BufReader::new(File::open(path)?);
    let mut rv = Vec::new();

    for line in reader.lines() {
        let line = line?;
        let is_marker = line.starts_with(marker);
        rv.push(line);
        if is_marker {
            return Ok(rv);
        }
    }

    Err(format!(
        "can't find the separator in {}. Is this the right file?",
        path.display()
    )
    .into())
}

/// Truncate and rewrite the module: preserved header lines first, then the
/// freshly generated body, all newline-terminated.
pub fn write_module(path: &Path, base: &[String], generated: &[String]) -> Result<(), Box<dyn Error>> {
    let file = File::create(path)?; // truncate/overwrite
    let mut out = BufWriter::new(file);
    for line in base.iter().chain(generated) {
        writeln!(out, "{line}")?;
    }
    out.flush()?;
    Ok(())
}
