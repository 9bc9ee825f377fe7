//! Load command implementation

use anyhow::{Context, Result};
use mc_core::corpus;
use mc_db::{loader, DuckDbStore};
use std::path::PathBuf;

use crate::cli::{GlobalArgs, LoadArgs};
use crate::commands::common::{load_config, ExitCode};

/// Execute the load command
pub fn execute(args: &LoadArgs, global: &GlobalArgs) -> Result<()> {
    let (config, root) = load_config(global)?;

    let csv_dir = match &args.input {
        Some(dir) => PathBuf::from(dir),
        None => config.csv_dir_absolute(&root),
    };

    if global.verbose {
        eprintln!("[verbose] Reading CSV corpus from {}", csv_dir.display());
    }

    let corpus = corpus::assemble_corpus(&csv_dir).context("Failed to assemble CSV corpus")?;
    if corpus.is_empty() {
        println!("No CSV files found in {}.", csv_dir.display());
    }

    // Open the database (use --database override if provided)
    let db_path = global
        .database
        .as_deref()
        .unwrap_or(config.database.path.as_str());
    let mut store = DuckDbStore::new(db_path).context("Failed to open database")?;

    if global.verbose {
        eprintln!(
            "[verbose] Seeding {} manufacturers ({} spec rows) into {}",
            corpus.len(),
            corpus.total_rows(),
            db_path
        );
    }

    store
        .reset_schema()
        .context("Failed to reset catalog schema")?;

    println!(
        "Loading {} manufacturers ({} spec rows)...\n",
        corpus.len(),
        corpus.total_rows()
    );

    let summary = match loader::load(&mut store, &corpus) {
        Ok(summary) => summary,
        Err(e) => {
            println!("  ✗ load aborted - {e}");
            // Exit code 4 = database error (load-stage failures)
            return Err(ExitCode(4).into());
        }
    };

    for result in &summary.stages {
        println!("  ✓ {} ({} rows)", result.stage.table(), result.rows);
    }

    println!();
    println!(
        "Seeded {} tables ({} total rows)",
        summary.stages.len(),
        summary.total_rows()
    );

    Ok(())
}

#[cfg(test)]
#[path = "load_test.rs"]
mod tests;
