mod assets;
mod components;
mod config;
mod fortunes;
mod state;
mod window;

use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::prelude::*;

use crate::config::{Config, CONFIG};
use crate::fortunes::FortuneStorage;

const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    compile_time::datetime_str!(),
    ")",
);

/// Fortune Teller: a sidebar of editable fortunes
#[derive(Parser, Debug)]
#[command(
    version = VERSION,
    about,
    long_about = "Fortune Teller: a sidebar of editable fortunes\n\n\
        Fortunes are restored from local storage. When nothing is saved yet\n\
        they are fetched from the published fortune document, and when that\n\
        fails the sidebar offers placeholders to fill in by hand.",
    after_long_help = "Examples:\n\
        \x20 fortune-sidebar                        Launch with saved fortunes\n\
        \x20 fortune-sidebar --reset                Forget saved fortunes and fetch again\n\
        \x20 fortune-sidebar --data-dir ./fortunes  Keep saved fortunes in ./fortunes"
)]
struct Cli {
    /// Directory holding saved fortunes
    #[arg(long, value_name = "PATH")]
    data_dir: Option<PathBuf>,

    /// Configuration file to use instead of the default one
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Forget saved fortunes before starting
    #[arg(long)]
    reset: bool,
}

impl Cli {
    /// Resolve the configuration with command line overrides applied
    fn resolve_config(&self) -> Config {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path),
            None => Config::load(),
        };
        if let Some(dir) = &self.data_dir {
            config.storage.directory = Some(dir.clone());
        }
        config
    }
}

const DEFAULT_LOGLEVEL: &str = if cfg!(debug_assertions) {
    "debug"
} else {
    "info"
};

fn main() {
    let cli = Cli::parse();

    // Load environment variables from .env file
    if let Ok(dotenv) = dotenvy::dotenv() {
        println!("Loaded .env file from: {}", dotenv.display());
    }
    init_tracing();

    let config = cli.resolve_config();
    tracing::debug!(?config, "Resolved configuration");

    if cli.reset {
        FortuneStorage::from_config(&config.storage).clear();
        tracing::info!(key = %config.storage.key, "Cleared saved fortunes");
    }

    *CONFIG.write() = config;

    dioxus::LaunchBuilder::desktop()
        .with_cfg(window::create_main_window_config())
        .launch(components::app::App);
}

fn init_tracing() {
    let silence_filter = tracing_subscriber::filter::filter_fn(|metadata| {
        // Filter out specific error from dioxus_core::properties:136
        // Known issue: https://github.com/DioxusLabs/dioxus/issues/3872
        metadata.target() != "dioxus_core::properties::__component_called_as_function"
    });

    let env_filter_layer =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOGLEVEL));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .pretty()
        .without_time()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(true)
        .with_line_number(true)
        .with_filter(silence_filter.clone());

    let registry = tracing_subscriber::registry()
        .with(env_filter_layer)
        .with(fmt_layer);

    // On macOS, log to Console.app via oslog
    #[cfg(target_os = "macos")]
    let registry = registry.with(
        tracing_oslog::OsLogger::new("com.fortune-sidebar.FortuneTeller", "default")
            .with_filter(silence_filter),
    );

    registry.init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use tempfile::TempDir;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["fortune-sidebar"]).unwrap();
        assert_eq!(cli.data_dir, None);
        assert_eq!(cli.config, None);
        assert!(!cli.reset);
    }

    #[test]
    fn test_resolve_config_applies_overrides() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.json");
        std::fs::write(&config_path, r#"{ "storage": { "key": "from-file" } }"#).unwrap();

        let cli = Cli::try_parse_from([
            "fortune-sidebar",
            "--config",
            config_path.to_str().unwrap(),
            "--data-dir",
            "/tmp/fortunes",
            "--reset",
        ])
        .unwrap();
        let config = cli.resolve_config();

        assert!(cli.reset);
        assert_eq!(config.storage.key, "from-file");
        assert_eq!(config.storage.directory, Some(PathBuf::from("/tmp/fortunes")));
    }
}
