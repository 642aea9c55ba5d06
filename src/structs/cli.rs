use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser)]
#[clap(name = "codesonar-gate")]
#[clap(about = "Evaluates CodeSonar hub analysis results against build conditions", long_about = None)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}
