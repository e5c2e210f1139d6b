use clap::Parser;

/// Snapshots the current working directory into a single text file.
///
/// All selection rules are compiled in; the tool takes no options.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Concatenate a project tree into one snapshot file for LLM context"
)]
pub struct Cli {}
