use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Runtime directories resolved by the host and delivered on the `directories` channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Directories {
	pub data: PathBuf,
	/// Root served by the host's asset endpoint.
	pub assets: PathBuf,
	pub plugins: PathBuf,
}

impl Directories {
	/// Asset subdirectory owned by a single plugin, e.g. `<assets>/emojis`.
	pub fn asset_dir(&self, name: impl AsRef<Path>) -> PathBuf {
		self.assets.join(name)
	}
}
