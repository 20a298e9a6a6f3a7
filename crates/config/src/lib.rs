//! Configuration for the emote plugin.
//!
//! Configuration is an optional TOML file. Emote looks for it in these
//! locations (in order):
//!
//! 1. The path passed on the command line (`--config`)
//! 2. `$XDG_CONFIG_HOME/emote/config.toml` (or the platform equivalent)
//! 3. Built-in defaults
//!
//! ```toml
//! [server]
//! # Address of the running client; used to build asset URLs.
//! host = "127.0.0.1:26423"
//!
//! [assets]
//! # Subdirectory of the host's asset root that holds uploaded emojis.
//! dir_name = "emojis"
//! ```
//!
//! Unknown keys are rejected so typos surface at startup.

pub mod error;

use std::path::{Path, PathBuf};

use serde::Deserialize;

pub use error::{ConfigError, Result};

/// Default address of the host client.
pub const DEFAULT_HOST: &str = "127.0.0.1:26423";
/// Default asset subdirectory.
pub const DEFAULT_ASSET_DIR: &str = "emojis";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
	pub server: ServerConfig,
	pub assets: AssetsConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
	/// `host[:port]` that serves `/assets`.
	pub host: String,
}

impl Default for ServerConfig {
	fn default() -> Self {
		Self {
			host: DEFAULT_HOST.to_owned(),
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AssetsConfig {
	/// Directory name under the asset root; also the `path=` prefix of asset URLs.
	pub dir_name: String,
}

impl Default for AssetsConfig {
	fn default() -> Self {
		Self {
			dir_name: DEFAULT_ASSET_DIR.to_owned(),
		}
	}
}

impl Config {
	/// Parse a TOML string into a [`Config`].
	pub fn parse(input: &str) -> Result<Self> {
		let config: Config = toml::from_str(input)?;
		config.validate()?;
		Ok(config)
	}

	/// Load configuration from a file.
	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
			path: path.to_path_buf(),
			error: e,
		})?;
		Self::parse(&content)
	}

	/// Loads the file at `path` if given, else the default location if it exists, else defaults.
	pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
		if let Some(path) = path {
			return Self::load(path);
		}
		match default_path() {
			Some(path) if path.is_file() => Self::load(path),
			_ => Ok(Self::default()),
		}
	}

	fn validate(&self) -> Result<()> {
		if self.server.host.trim().is_empty() {
			return Err(ConfigError::Invalid {
				field: "server.host",
				reason: "must not be empty".into(),
			});
		}
		let dir = &self.assets.dir_name;
		if dir.is_empty() || !dir.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-') {
			return Err(ConfigError::Invalid {
				field: "assets.dir_name",
				reason: format!("{dir:?} is not a single URL-safe path segment"),
			});
		}
		Ok(())
	}
}

/// `<config_dir>/emote/config.toml`, when the platform has a config directory.
pub fn default_path() -> Option<PathBuf> {
	dirs::config_dir().map(|dir| dir.join("emote").join("config.toml"))
}

#[cfg(test)]
mod tests;
