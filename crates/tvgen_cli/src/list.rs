//! `tvgen list`: print every generator and variant selector.

use std::io::{self, Write};

use tvgen_datasets::all_jobs;

/// Writes one `<generator> [variant]` line per dataset to stdout.
pub fn run() -> Result<i32, Box<dyn std::error::Error>> {
    let mut stdout = io::stdout().lock();
    for job in all_jobs() {
        match job.variant {
            Some(v) => writeln!(stdout, "{} {v}", job.generator)?,
            None => writeln!(stdout, "{}", job.generator)?,
        }
    }
    Ok(0)
}
