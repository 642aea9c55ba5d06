use clap::Parser;
use codesonar_gate::config::constants::EXIT_CODE_FATAL;
use codesonar_gate::errors::ErrorHandler;
use codesonar_gate::structs::cli::Cli;
use codesonar_gate::workers::command_runner::CommandRunner;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let code = match CommandRunner::new().run_command(cli.command).await {
        Ok(code) => code,
        Err(e) => {
            ErrorHandler::handle_error(&e);
            EXIT_CODE_FATAL
        }
    };

    std::process::exit(code)
}
