use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::time::Instant;
use crate::config::config_manager::ConfigManager;
use crate::enums::build_result::BuildResult;
use crate::enums::commands::Commands;
use crate::errors::{GateError, GateResult};
use crate::services::evaluation_pipeline::EvaluationPipeline;
use crate::services::outcome_store::OutcomeStore;
use crate::structs::build_outcome::BuildOutcome;

pub struct CommandRunner {
    start_time: Option<Instant>,
}

impl CommandRunner {
    pub fn new() -> Self {
        Self {
            start_time: None,
        }
    }

    /// Runs `command` and returns the process exit code.
    pub async fn run_command(&mut self, command: Commands) -> GateResult<i32> {
        self.start_time = Some(Instant::now());

        let result = match command {
            Commands::Init { path } => self.init_command(path.as_deref()),
            Commands::Validate { config } => self.validate_command(config.as_deref()),
            Commands::Evaluate { config, log, previous, output, current_result } => {
                self.evaluate_command(config.as_deref(), log.as_deref(), previous.as_deref(), &output, current_result).await
            }
        };

        if let Some(start) = self.start_time {
            let duration = start.elapsed();
            log::info!("⏱️  Command completed in {:.2}s", duration.as_secs_f64());
        }

        result
    }

    fn init_command(&self, path: Option<&Path>) -> GateResult<i32> {
        log::info!("🚀 Initializing codesonar-gate configuration...");
        ConfigManager::create_sample_config(path)?;
        log::info!("📝 Edit the configuration file to point at your hub.");
        log::info!("🔧 Run 'codesonar-gate validate' to check your configuration.");
        Ok(0)
    }

    fn validate_command(&self, config_path: Option<&Path>) -> GateResult<i32> {
        let config = ConfigManager::load(config_path)?;
        let validation = ConfigManager::validate_config(&config);
        validation.print_summary();
        Ok(if validation.is_valid { 0 } else { 1 })
    }

    async fn evaluate_command(
        &self,
        config_path: Option<&Path>,
        log_path: Option<&Path>,
        previous_path: Option<&Path>,
        output_path: &Path,
        current_result: BuildResult,
    ) -> GateResult<i32> {
        log::info!("🔍 Starting CodeSonar evaluation...");

        let config = ConfigManager::load(config_path)?;
        let settings = ConfigManager::resolve_settings(&config)?;

        let log_lines = Self::read_log_lines(log_path)?;
        let previous = match previous_path {
            Some(path) => OutcomeStore::load(path)?,
            None => None,
        };

        let pipeline = EvaluationPipeline::from_settings(settings, config.conditions)?;
        let outcome = pipeline.run(&log_lines, previous.as_ref()).await?;

        Self::print_verdicts(&outcome);
        OutcomeStore::save(output_path, &outcome)?;

        let final_result = current_result.combine(outcome.result);
        println!("{} CodeSonar marked the build as {}", final_result.emoji(), final_result);
        Ok(final_result.exit_code())
    }

    fn read_log_lines(log_path: Option<&Path>) -> GateResult<Vec<String>> {
        let content = match log_path {
            None => return Ok(Vec::new()),
            Some(path) if path == Path::new("-") => {
                let mut buffer = String::new();
                io::stdin()
                    .read_to_string(&mut buffer)
                    .map_err(|e| GateError::io_error("reading build log from stdin", e))?;
                buffer
            }
            Some(path) => std::fs::read_to_string(PathBuf::from(path))
                .map_err(|e| GateError::io_error(&format!("reading build log {}", path.display()), e))?,
        };

        Ok(content.lines().map(|s| s.to_string()).collect())
    }

    fn print_verdicts(outcome: &BuildOutcome) {
        for verdict in &outcome.verdicts {
            println!("'{}' marked the build as {}", verdict.condition_name, verdict.result);
            println!("    {}", verdict.description);
        }
    }
}

impl Default for CommandRunner {
    fn default() -> Self {
        Self::new()
    }
}
