//! `tvgen all`: regenerate every dataset into a directory.
//!
//! Each dataset is generated from its own freshly seeded stream, so the
//! files are identical to running each generator separately.

use std::fs;
use std::path::Path;

use tracing::info;
use tvgen_datasets::all_jobs;

use crate::generate::{render, resolve_config};
use crate::{AllArgs, GlobalArgs};

/// Runs the `tvgen all` command.
///
/// Every dataset is built and rendered before the first file is written.
/// Returns exit code 0 on success.
pub fn run(args: &AllArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let config = resolve_config(global)?;
    let out_dir = Path::new(&args.out_dir);

    let mut rendered = Vec::new();
    for job in all_jobs() {
        let dataset = tvgen_datasets::generate(job.generator, job.variant, &config)?;
        let file_name = format!("{}.{}", job.stem(), args.format.extension());
        rendered.push((file_name, render(&dataset, args.format)?));
    }

    fs::create_dir_all(out_dir)?;
    for (file_name, text) in &rendered {
        let path = out_dir.join(file_name);
        fs::write(&path, text)?;
        info!("created {}", path.display());
    }

    if !global.quiet {
        eprintln!(
            "   Generated {} datasets in {}",
            rendered.len(),
            out_dir.display()
        );
    }

    Ok(0)
}
