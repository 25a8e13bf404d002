//! Easel script runner.
//!
//! Replays a recorded sequence of host interactions against a [`Board`] and
//! reports the render configs the backend would receive.

mod args;
mod error;
pub mod script;

pub use args::Args;
pub use error::AppError;

use easel_core::{Board, EditorConfig};
use log::info;
use std::fs;

/// Load the editor configuration, falling back to defaults without a path.
pub fn load_config(path: Option<&String>) -> Result<EditorConfig, AppError> {
    match path {
        Some(path) => {
            info!("Loading config from {}", path);
            let source = fs::read_to_string(path)?;
            Ok(EditorConfig::from_json(&source)?)
        }
        None => Ok(EditorConfig::default()),
    }
}

/// Run the script named in `args` and write the report.
pub fn run(args: &Args) -> Result<(), AppError> {
    let config = load_config(args.config.as_ref())?;
    let source = fs::read_to_string(&args.script)?;
    let commands = script::parse(&source)?;
    info!("Replaying {} commands from {}", commands.len(), args.script);

    let mut board = Board::with_config(config);
    script::run(&mut board, &commands)?;

    let report = serde_json::to_string_pretty(&script::Report::from_board(&board))?;
    match &args.output {
        Some(path) => {
            fs::write(path, report)?;
            info!("Report written to {}", path);
        }
        None => println!("{report}"),
    }
    Ok(())
}
