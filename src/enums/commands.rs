use std::path::PathBuf;
use clap::Subcommand;
use crate::config::constants::DEFAULT_OUTCOME_FILE;
use crate::enums::build_result::BuildResult;

#[derive(Subcommand)]
pub enum Commands {
    /// Write a sample configuration file
    Init {
        #[clap(short, long)]
        path: Option<PathBuf>,
    },
    /// Check a configuration file without contacting the hub
    Validate {
        #[clap(short, long)]
        config: Option<PathBuf>,
    },
    /// Fetch the analysis for this build and apply the configured conditions
    Evaluate {
        #[clap(short, long)]
        config: Option<PathBuf>,
        /// Captured build log, `-` for stdin
        #[clap(short, long)]
        log: Option<PathBuf>,
        /// Outcome of the previous build, used as baseline
        #[clap(short = 'b', long)]
        previous: Option<PathBuf>,
        #[clap(short, long, default_value = DEFAULT_OUTCOME_FILE)]
        output: PathBuf,
        /// Build status before this step; it is never improved
        #[clap(long, default_value = "SUCCESS")]
        current_result: BuildResult,
    },
}
