use anyhow::{Context, Result};
use aspx_parser_config::Config;
use aspx_parser_engine::{Document, snapshot};
use std::{env, path::PathBuf, process};

fn load_config(explicit: Option<PathBuf>) -> Result<Config> {
    let config_path = explicit.clone().unwrap_or_else(Config::config_path);
    match Config::load_from_path(&config_path)? {
        Some(config) => {
            log::info!("Using config from {}", config_path.display());
            Ok(config)
        }
        None if explicit.is_some() => {
            anyhow::bail!("Config file not found: {}", config_path.display())
        }
        None => {
            log::debug!("No config at {}, using defaults", config_path.display());
            Ok(Config::default())
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args: Vec<String> = env::args().collect();
    let (page_path, config_path) = match args.as_slice() {
        [_, page] => (PathBuf::from(page), None),
        [_, page, config] => (PathBuf::from(page), Some(PathBuf::from(config))),
        _ => {
            eprintln!("Usage: {} <page.aspx> [config.toml]", args[0]);
            eprintln!(
                "Without a config argument, {} is used if present",
                Config::config_path().display()
            );
            process::exit(1);
        }
    };

    let config = load_config(config_path)?;
    let text = std::fs::read_to_string(&page_path)
        .with_context(|| format!("Failed to read {}", page_path.display()))?;
    let doc = Document::parse_with(text, &config.parser)
        .with_context(|| format!("Failed to parse {}", page_path.display()))?;

    print!("{}", snapshot::render(&doc));

    let diagnostics = doc.diagnostics();
    for diagnostic in &diagnostics {
        eprintln!("{}:{diagnostic}", page_path.display());
    }
    log::info!(
        "{}: {} nodes, {} unbalanced tags",
        page_path.display(),
        doc.node_count(),
        diagnostics.len()
    );

    Ok(())
}
