// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::env;

use anyhow::Context;
use teamcity_messages::config::consts::{CONFIG_PATH_ENV, DEFAULT_LOG_FILTER};
use teamcity_messages::config::{load_config, Config};
use tracing_subscriber::EnvFilter;

/// Splits `key=value` arguments; anything without a valid key is a bare value.
fn parse_parameter(arg: &str) -> (Option<&str>, &str) {
    match arg.split_once('=') {
        Some((key, value)) if teamcity_messages::protocol::is_valid_identifier(key) => {
            (Some(key), value)
        }
        _ => (None, arg),
    }
}

/// Name to show in usage lines, even when launched with an empty argv.
fn program_name(args: &[String]) -> &str {
    args.first().map(String::as_str).unwrap_or("teamcity-messages")
}

fn main() -> anyhow::Result<()> {
    // diagnostics go to stderr so stdout carries nothing but service messages
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        let program = program_name(&args);
        eprintln!("Usage: {} <message-name> [key=value | value]...", program);
        eprintln!("Example: {} buildStatisticValue key=coverage value=81.5", program);
        eprintln!("Example: {} buildNumber 1.4.2", program);
        eprintln!("Set {} to a YAML file to choose the output stream and flow id.", CONFIG_PATH_ENV);
        std::process::exit(1);
    }

    let config = match env::var_os(CONFIG_PATH_ENV) {
        Some(path) => load_config(&path)
            .with_context(|| format!("loading {} from {}", CONFIG_PATH_ENV, path.to_string_lossy()))?,
        None => Config::default(),
    };
    let logger = config.build_logger();

    let message_name = &args[1];
    let parameters: Vec<(Option<&str>, &str)> = args[2..].iter().map(|arg| parse_parameter(arg)).collect();

    if parameters.iter().all(|(key, _)| key.is_some()) {
        logger
            .write_message(
                message_name,
                parameters
                    .iter()
                    .filter_map(|(key, value)| key.map(|key| (key, Some(*value)))),
            )
            .with_context(|| format!("emitting '{}'", message_name))?;
    } else if let [(None, value)] = parameters.as_slice() {
        logger
            .write_value(message_name, value)
            .with_context(|| format!("emitting '{}'", message_name))?;
    } else {
        anyhow::bail!("a bare value must be the only parameter of '{}'", message_name);
    }

    Ok(())
}
