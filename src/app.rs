// Declare modules
pub mod cli;
pub mod config;
pub mod formatter;
pub mod models;
pub mod scanner;

use anyhow::{Context, Result};
use clap::Parser;
use std::env;
use std::fs;
use std::path::Path;

use self::cli::Cli;
use self::config::Config;
use self::formatter::OutputGenerator;
use self::scanner::Scanner;

/// Initializes components and orchestrates data flow.
pub fn run() -> Result<()> {
    // No functional options; parsing still answers --help/--version.
    let _args = Cli::parse();

    let root = env::current_dir().context("Failed to get current directory")?;
    run_in(&root)
}

/// Collects, renders, and writes the snapshot for one root directory.
pub fn run_in(root: &Path) -> Result<()> {
    let config = Config::new();

    log::info!("Collecting files under {}", root.display());

    let scanner = Scanner::new(root.to_path_buf(), &config);
    let entries = scanner.collect_entries();

    if entries.is_empty() {
        log::warn!("No matching files found under {}", root.display());
    }

    let document = OutputGenerator::render(&entries);
    let output_path = root.join(&config.output_file);

    // One write at the very end of the run. A failure here is reported but
    // the run still finishes normally.
    match fs::write(&output_path, &document) {
        Ok(()) => log::info!(
            "Generated {} with {} files",
            config.output_file,
            entries.len()
        ),
        Err(err) => log::error!("Failed to write {}: {}", output_path.display(), err),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::prelude::*;

    #[test]
    fn writes_snapshot_and_overwrites_stale_output() {
        let temp = assert_fs::TempDir::new().unwrap();
        temp.child("a.ts").write_str("x").unwrap();
        temp.child("readme.md").write_str("z").unwrap();
        temp.child("app.txt").write_str("old").unwrap();

        run_in(temp.path()).unwrap();

        let expected = "<a.ts>\n\nx\n\n\n<readme.md>\n\nz\n";
        temp.child("app.txt").assert(expected);

        // A second run over the unchanged tree must not re-ingest the
        // output file and must produce the identical document.
        run_in(temp.path()).unwrap();
        temp.child("app.txt").assert(expected);
    }

    #[test]
    fn write_failure_is_reported_but_not_fatal() {
        let temp = assert_fs::TempDir::new().unwrap();
        temp.child("a.ts").write_str("x").unwrap();
        // A directory occupying the output name makes the final write fail.
        fs::create_dir(temp.path().join("app.txt")).unwrap();

        let result = run_in(temp.path());

        assert!(result.is_ok());
        assert!(temp.path().join("app.txt").is_dir());
    }
}
