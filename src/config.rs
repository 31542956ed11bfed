//! Configuration management for the notes server
//!
//! Values are layered from built-in defaults, an optional TOML file, `NOTES_*`
//! environment variables and finally command-line flags. The result is built
//! once at startup and shared read-only with every request handler.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::cli::CliArgs;

/// Config file looked up in the working directory when `--config` is absent
pub const DEFAULT_CONFIG_FILE: &str = "notes";
pub const DEFAULT_UPLOAD_FORM: &str = "static/UploadForm.html";
pub const ENV_PREFIX: &str = "NOTES";

/// Complete server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// IP address or hostname to bind
    pub host: String,

    /// Port to bind
    pub port: u16,

    /// Directory holding one `<name>.txt` file per note
    pub storage_dir: PathBuf,

    /// Static HTML form served verbatim
    pub upload_form: PathBuf,

    /// HTTP worker threads; runtime default when unset
    #[serde(default)]
    pub workers: Option<usize>,
}

impl ServerConfig {
    /// Load configuration from all sources, command-line flags taking precedence
    pub fn load(args: &CliArgs) -> Result<Self, ConfigError> {
        Self::load_with_prefix(args, ENV_PREFIX)
    }

    fn load_with_prefix(args: &CliArgs, env_prefix: &str) -> Result<Self, ConfigError> {
        let builder = Config::builder().set_default("upload_form", DEFAULT_UPLOAD_FORM)?;

        let builder = match &args.config {
            Some(path) => builder.add_source(File::from(path.as_path())),
            None => builder.add_source(File::with_name(DEFAULT_CONFIG_FILE).required(false)),
        };

        let settings = builder
            .add_source(Environment::with_prefix(env_prefix).try_parsing(true))
            .set_override_option("host", args.host.clone())?
            .set_override_option("port", args.port.map(i64::from))?
            .set_override_option("storage_dir", args.storage_dir.as_deref().map(path_value))?
            .set_override_option("upload_form", args.upload_form.as_deref().map(path_value))?
            .set_override_option("workers", args.workers.map(|w| w as i64))?
            .build()?;

        let config: ServerConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validation for all configuration values
    fn validate(&self) -> Result<(), ConfigError> {
        if self.host.trim().is_empty() {
            return Err(ConfigError::Message("host cannot be empty".into()));
        }

        if self.port == 0 {
            return Err(ConfigError::Message("port cannot be 0".into()));
        }

        if self.storage_dir.as_os_str().is_empty() {
            return Err(ConfigError::Message("storage_dir cannot be empty".into()));
        }

        if self.workers == Some(0) {
            return Err(ConfigError::Message(
                "workers must be greater than 0".into(),
            ));
        }

        Ok(())
    }

    /// Address tuple for binding the listener
    pub fn bind_address(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }

    /// `host:port` for log lines
    pub fn socket_display(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn path_value(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
