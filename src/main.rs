mod cli;
mod config;

use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use cli::{Cli, Command};
use tweakpad::inputs::{panel_props, InputValue};
use tweakpad::template;
use tweakpad::theme;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();

    // Load config: explicit --config path, or auto-detect tweakpad.toml / global config
    let config_path = cli.config.clone().or_else(|| {
        let local = PathBuf::from("tweakpad.toml");
        if local.exists() {
            return Some(local);
        }
        if let Some(home) = dirs::home_dir() {
            let xdg = home.join(".config").join("tweakpad").join("config.toml");
            if xdg.exists() {
                return Some(xdg);
            }
        }
        if let Some(config_dir) = dirs::config_dir() {
            let platform = config_dir.join("tweakpad").join("config.toml");
            if platform.exists() {
                return Some(platform);
            }
        }
        None
    });
    let config = match config_path {
        Some(ref path) => match config::load_config(path) {
            Some(cfg) => {
                log::info!("Loaded config from {}", path.display());
                cfg
            }
            None => {
                log::warn!("Failed to load config from {}", path.display());
                config::Config::default()
            }
        },
        None => config::Config::default(),
    };

    match cli.command {
        Command::New { path, force } => {
            let dest = path.unwrap_or_else(|| PathBuf::from(&config.scaffold.file_name));
            template::seed_project(&dest, force)?;
            println!("Created {}", dest.display());
        }
        Command::Inputs { file, compact } => {
            let content = std::fs::read_to_string(&file)
                .with_context(|| format!("Failed to read input dump: {}", file.display()))?;
            let inputs: BTreeMap<String, InputValue> = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse input dump: {}", file.display()))?;
            log::info!("Converting {} inputs from {}", inputs.len(), file.display());

            let panel = panel_props(&inputs);
            print_json(&panel, config.export.pretty && !compact)?;
        }
        Command::Theme { compact } => {
            print_json(&theme::EDITOR_THEME, config.export.pretty && !compact)?;
        }
    }

    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T, pretty: bool) -> Result<()> {
    let text = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", text);
    Ok(())
}
