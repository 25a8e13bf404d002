//! Command-line arguments for the `easel` script runner.

use clap::Parser;

/// Replay a JSON interaction script against an Easel board and print the
/// resulting render configs.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the JSON script
    pub script: String,

    /// Write the report here instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,

    /// Path to an editor configuration file (JSON)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}
