#![allow(clippy::print_stdout, reason = "The CLI writes its results to stdout")]
use crate::cli::{Args, Command};
use anyhow::Context;
use circuit_analyzer_gateway::{GatewayConfig, QueryGateway};
use circuit_analyzer_netlist::find_subcircuit_name;
use circuit_analyzer_patterns::{translate, SubcircuitDefinition};
use circuit_analyzer_web::ServerConfig;
use clap::Parser;
use std::fs;
use std::io::{self, stdin, stdout, Read, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

mod cli;

#[tokio::main]
pub async fn main() -> anyhow::Result<()> {
    let matches = Args::parse();
    init_logging(matches.verbose);

    match matches.command {
        Command::Serve {
            bind,
            cors,
            endpoint,
            timeout,
        } => serve(bind, cors, gateway_config(endpoint.as_deref(), timeout)?).await,
        Command::Translate { file, name } => {
            let text = read_input(file.as_deref())?;
            let name = name
                .or_else(|| find_subcircuit_name(&text))
                .or_else(|| file_stem(file.as_ref()))
                .unwrap_or_else(|| "subckt".to_owned());

            let translation = translate(&SubcircuitDefinition { name, text });
            println!("{}", translation.sparql);
            Ok(())
        }
        Command::Query {
            file,
            endpoint,
            timeout,
        } => {
            let sparql = read_input(file.as_deref())?;
            let config = gateway_config(endpoint.as_deref(), timeout)?;
            let endpoint = config.endpoint.clone();
            let gateway = QueryGateway::new(config)?;
            let response = gateway
                .run(&sparql)
                .await
                .with_context(|| format!("Query against {endpoint} failed"))?;

            let mut stdout = stdout().lock();
            stdout.write_all(&response.body)?;
            writeln!(stdout)?;
            stdout.flush()?;
            Ok(())
        }
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "circuit_analyzer_cli={level},circuit_analyzer_web={level},circuit_analyzer_gateway={level},circuit_analyzer_patterns={level},tower_http={level}"
        ))
    });
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();
}

fn gateway_config(endpoint: Option<&str>, timeout: u64) -> anyhow::Result<GatewayConfig> {
    let config = match endpoint {
        Some(endpoint) => GatewayConfig::new(endpoint)?,
        None => GatewayConfig::from_env()?,
    };
    Ok(config.with_timeout(Duration::from_secs(timeout)))
}

fn read_input(file: Option<&Path>) -> anyhow::Result<String> {
    if let Some(file) = file {
        fs::read_to_string(file).with_context(|| format!("Could not read {}", file.display()))
    } else {
        let mut buffer = String::new();
        stdin()
            .lock()
            .read_to_string(&mut buffer)
            .context("Could not read stdin")?;
        Ok(buffer)
    }
}

fn file_stem(file: Option<&PathBuf>) -> Option<String> {
    file?
        .file_stem()
        .and_then(|stem| stem.to_str())
        .map(str::to_owned)
}

async fn serve(bind: String, cors: bool, gateway: GatewayConfig) -> anyhow::Result<()> {
    tracing::info!(endpoint = %gateway.endpoint, "Forwarding queries");
    let server_config = ServerConfig {
        bind,
        cors,
        gateway,
    };
    circuit_analyzer_web::serve(server_config).await
}
