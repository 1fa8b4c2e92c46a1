use std::fs;
use std::io::{self, Read};
use std::process::ExitCode;

use anyhow::{Context, Result};
use design_token_validator::config::{Config, OutputFormat};
use design_token_validator::{handle_raw, Engine, Response, SystemConstraintSpec};

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("token-check: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ExitCode> {
    let config = Config::from_args_and_env()?;

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_level.as_str()),
    )
    .init();

    let spec = SystemConstraintSpec::from_config(&config)?;
    let engine = Engine::new(spec);

    let raw = read_request(&config)?;
    let response = handle_raw(&raw, &engine);

    match (&response, config.format) {
        (Response::Ok { report, analysis }, OutputFormat::Text) => {
            print!("{}", report);
            for warning in &analysis.warnings {
                println!("warning {}: {}", warning.code, warning.message);
            }
        }
        _ => println!("{}", serde_json::to_string_pretty(&response.to_json())?),
    }

    Ok(ExitCode::from(response.exit_code()))
}

fn read_request(config: &Config) -> Result<String> {
    match &config.request_path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read request {}", path.display())),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read request from stdin")?;
            Ok(buf)
        }
    }
}
