use clap::Parser;
use std::path::PathBuf;

/// Walk through clone and merge of polygon/polyline property bags
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Print the report as JSON instead of text
    #[arg(long = "json")]
    pub json: bool,

    /// Write log output to this file instead of stderr
    #[arg(short = 'l', long = "log", value_name = "LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Increase logging verbosity (default: warn, -v: info, -vv: debug, -vvv+: trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbosity: u8,
}
