use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::model::{Config, FilterMode};

#[derive(Parser, Debug)]
#[command(name = "getdone", about = concat!("getdone v", env!("CARGO_PKG_VERSION"), " - tasks of the day, in your terminal"), version)]
pub struct Cli {
    /// Config file (default: $GETDONE_CONFIG if set)
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Filter to start with: all, completed or uncompleted
    #[arg(short = 'f', long = "filter")]
    pub filter: Option<FilterMode>,

    /// Write logs here instead of the default location
    #[arg(long = "log-file")]
    pub log_file: Option<PathBuf>,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Flags win over values from the config file
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(filter) = self.filter {
            config.default_filter = filter;
        }
        if let Some(path) = &self.log_file {
            config.log.file = Some(path.clone());
        }
    }
}
