//! folio - Main Entry Point
//!
//! Starts the portfolio shell on the terminal. Set `FOLIO_CONFIG` to a JSON
//! config file to override the defaults; `RUST_LOG` overrides the log level.

use std::env;
use std::process;

use folio::cli::{CliConfig, CliPrompter, Interpreter};
use folio::error::ConfigError;
use folio::logging::init_logging;
use folio::vfs::FileSystem;

#[tokio::main]
async fn main() {
    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("ERROR: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = init_logging(&config.logging) {
        eprintln!("WARNING: {}", e);
    }

    let tree = match config.load_tree() {
        Ok(tree) => tree,
        Err(e) => {
            eprintln!("ERROR: failed to load content: {}", e);
            process::exit(1);
        }
    };

    let interpreter = Interpreter::with_config(FileSystem::new(tree), config);
    let mut prompter = CliPrompter::new(interpreter);

    if let Err(e) = prompter.run().await {
        eprintln!("Error running CLI: {}", e);
        process::exit(1);
    }

    println!("Goodbye!");
}

fn load_config() -> Result<CliConfig, ConfigError> {
    match env::var("FOLIO_CONFIG") {
        Ok(path) if !path.trim().is_empty() => CliConfig::load(path),
        _ => Ok(CliConfig::default()),
    }
}
