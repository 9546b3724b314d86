use std::path::{Path, PathBuf};
use std::sync::Arc;

use bound_location_picker::CHANNEL;
use bridge::{messenger, ChannelRegistry, MethodChannel, MethodResponse};
use clap::Parser;
use tracing::{error, info, warn};

mod config;
mod error;
mod logger;
mod maps;
mod plugins;

use config::{default_config_path, load_config, save_config, HostConfig};
use error::Result;
use maps::MapServices;

#[derive(Debug, Parser)]
#[command(name = "bound-location-host", about = "Bootstraps the plugin host and queries its channels")]
struct Cli {
    /// Config file (defaults to <config dir>/bound-location-picker/config.json)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Map services API key, overrides the config file
    #[arg(long, env = "MAPS_API_KEY")]
    maps_api_key: Option<String>,

    /// Write the effective config back to the config file
    #[arg(long)]
    save_config: bool,

    /// Methods to invoke on the bound_location_picker channel
    #[arg(default_value = "getPlatformVersion")]
    methods: Vec<String>,
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        error!("host failed: {}", e);
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config_path = cli.config.clone().or_else(default_config_path);
    let (mut config, load_error) = match load_config(config_path.as_deref()) {
        Ok(config) => (config, None),
        Err(e) => (HostConfig::default(), Some(e)),
    };
    logger::init_logging(config.log_filter.as_deref());
    let session_id = logger::log_session_start();
    if let (Some(e), Some(path)) = (&load_error, &config_path) {
        warn!("ignoring config {}: {}", path.display(), e);
    }

    if let Some(key) = cli.maps_api_key {
        config.maps.api_key = Some(key);
    }
    let _maps = match config.maps.api_key.as_deref() {
        Some(key) => Some(MapServices::provide_api_key(key)?),
        None => {
            warn!("no map services API key configured");
            None
        }
    };

    if cli.save_config {
        persist_config(config_path.as_deref(), &config, load_error.is_some())?;
    }

    let mut registry = ChannelRegistry::new();
    plugins::register_plugins(&mut registry);

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    rt.block_on(async {
        let (messenger, host) = messenger::channel(Arc::new(registry));
        let host = tokio::spawn(host.run());
        let channel = MethodChannel::new(CHANNEL, messenger);

        for method in &cli.methods {
            match channel.invoke_method(method, None).await? {
                MethodResponse::Success(value) => match value.as_str() {
                    Some(text) => println!("{method}: {text}"),
                    None => println!("{method}: {value}"),
                },
                MethodResponse::NotImplemented => println!("{method}: not implemented"),
            }
        }

        drop(channel);
        if let Err(e) = host.await {
            warn!("host loop ended abnormally: {}", e);
        }
        info!(session = %session_id, "session complete");
        Ok::<(), error::HostError>(())
    })
}

/// Writes `config` to `path` unless there is no path or the existing file
/// failed to load. Returns whether anything was written.
fn persist_config(path: Option<&Path>, config: &HostConfig, load_failed: bool) -> Result<bool> {
    match path {
        Some(path) if load_failed => {
            warn!("not saving over unreadable config {}", path.display());
            Ok(false)
        }
        Some(path) => {
            save_config(path, config)?;
            info!("config saved to {}", path.display());
            Ok(true)
        }
        None => {
            warn!("no config directory available, config not saved");
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use error::HostError;
    use std::fs;

    fn scratch(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("bound-location-run-{}", std::process::id()))
            .join(name)
    }

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("bound-location-host").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn test_run_rejects_empty_maps_key() {
        let path = scratch("empty-key/config.json");
        let path_arg = path.to_string_lossy().into_owned();
        let err = run(cli(&["--config", &path_arg, "--maps-api-key", ""])).unwrap_err();
        assert!(matches!(err, HostError::EmptyApiKey));
        assert!(!path.exists());
    }

    #[test]
    fn test_run_saves_effective_config() {
        let path = scratch("saved/config.json");
        let path_arg = path.to_string_lossy().into_owned();
        run(cli(&[
            "--config",
            &path_arg,
            "--maps-api-key",
            "google_map_api_key",
            "--save-config",
            "getPlatformVersion",
            "pickLocation",
        ]))
        .unwrap();

        let saved = load_config(Some(&path)).unwrap();
        assert_eq!(saved.maps.api_key.as_deref(), Some("google_map_api_key"));
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_persist_without_path_writes_nothing() {
        assert!(!persist_config(None, &HostConfig::default(), false).unwrap());

        let path = scratch("never-written/config.json");
        assert!(!persist_config(Some(&path), &HostConfig::default(), true).unwrap());
        assert!(!path.exists());
    }

    #[test]
    fn test_run_keeps_unparsable_config() {
        let path = scratch("broken/config.json");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        let original = r#"{"maps": {"api_key": "real-key"}, "log_filter": "debug",}"#;
        fs::write(&path, original).unwrap();
        let path_arg = path.to_string_lossy().into_owned();

        run(cli(&[
            "--config",
            &path_arg,
            "--maps-api-key",
            "other-key",
            "--save-config",
        ]))
        .unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), original);
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_cli_defaults_to_platform_version() {
        let cli = Cli::try_parse_from(["bound-location-host"]).unwrap();
        assert_eq!(cli.methods, vec!["getPlatformVersion".to_string()]);
        assert!(!cli.save_config);
    }

    #[test]
    fn test_cli_accepts_several_methods() {
        let cli = Cli::try_parse_from([
            "bound-location-host",
            "--maps-api-key",
            "k",
            "getPlatformVersion",
            "pickLocation",
        ])
        .unwrap();
        assert_eq!(cli.maps_api_key.as_deref(), Some("k"));
        assert_eq!(cli.methods, vec!["getPlatformVersion", "pickLocation"]);
    }
}
