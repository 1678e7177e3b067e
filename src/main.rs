use log::LevelFilter;
use sms_filter::cli;
use sms_filter::config::NormalizationConfig;
use std::process;

fn main() {
    let matches =
        cli::build_command().get_matches_from(cli::normalize_legacy_flags(std::env::args()));

    let log_level = if matches.get_flag("verbose") {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .init();

    if let Some(generate_path) = matches.get_one::<String>("generate-config") {
        generate_default_config(generate_path);
        return;
    }

    let normalization = match matches.get_one::<String>("config") {
        Some(path) => match load_config(path) {
            Ok(config) => config,
            Err(e) => {
                log::error!("Error loading configuration: {e}");
                eprintln!("Error loading configuration: {e}");
                process::exit(1);
            }
        },
        None => NormalizationConfig::default(),
    };

    let config = cli::filter_config(&matches, normalization);

    match sms_filter::run(&config) {
        Ok(stats) => {
            log::info!("{} SMS read, {} kept", stats.total, stats.kept);
        }
        Err(e) => {
            log::error!("{e}");
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}

fn load_config(path: &str) -> anyhow::Result<NormalizationConfig> {
    if std::path::Path::new(path).exists() {
        NormalizationConfig::from_file(path)
    } else {
        log::warn!("Configuration file '{path}' not found, using default configuration");
        Ok(NormalizationConfig::default())
    }
}

fn generate_default_config(path: &str) {
    let config = NormalizationConfig::default();
    match config.to_file(path) {
        Ok(()) => {
            println!("Default configuration written to: {path}");
            println!("Add one entry per country prefix you need to match.");
        }
        Err(e) => {
            eprintln!("Error writing configuration file: {e}");
            process::exit(1);
        }
    }
}
