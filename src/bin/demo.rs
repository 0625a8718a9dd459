//! Standalone demo of property bag notification, clone and merge.
//!
//! Prints what listeners observed plus a snapshot of every bag.

use anyhow::{Context, Result};
use clap::Parser;
use log::debug;

use dynscene::cli::Args;
use dynscene::config::LogConfig;
use dynscene::shell;

fn main() -> Result<()> {
    let args = Args::parse();

    let log_config = LogConfig::from_env_and_cli(args.verbosity);
    shell::init_logger(&log_config, args.log_file.as_deref())?;
    debug!("Command-line args: {:?}", args);

    let report = shell::run_demo()?;

    if args.json {
        let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        println!("{}", json);
    } else {
        print!("{}", report);
    }
    Ok(())
}
