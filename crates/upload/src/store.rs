use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::debug;

use crate::UploadError;

/// Destination for uploaded emoji images.
pub trait AssetStore: Send + Sync {
	/// Copies the bytes of `source` into the store under `file_name`.
	fn store(&self, source: &Path, file_name: &str) -> Result<(), UploadError>;

	/// URL under which a stored `file_name` is served.
	fn url_for(&self, file_name: &str) -> String;
}

/// Builds `http://<host>/assets?path=<dir_name>/<file_name>`.
pub fn asset_url(host: &str, dir_name: &str, file_name: &str) -> String {
	format!("http://{host}/assets?path={dir_name}/{file_name}")
}

/// Stores assets in a directory served by the host's asset endpoint.
///
/// Writes go through a temporary file in the target directory and are renamed
/// into place, so a failed write never leaves a truncated asset behind.
#[derive(Debug, Clone)]
pub struct FsAssetStore {
	dir: PathBuf,
	dir_name: String,
	host: String,
}

impl FsAssetStore {
	/// `dir` is `<assets>/<dir_name>` and must already exist.
	pub fn new(dir: impl Into<PathBuf>, dir_name: impl Into<String>, host: impl Into<String>) -> Self {
		Self {
			dir: dir.into(),
			dir_name: dir_name.into(),
			host: host.into(),
		}
	}

	pub fn dir(&self) -> &Path {
		&self.dir
	}
}

impl AssetStore for FsAssetStore {
	fn store(&self, source: &Path, file_name: &str) -> Result<(), UploadError> {
		let bytes = fs::read(source).map_err(UploadError::Read)?;
		let write_err = |source| UploadError::Write {
			file_name: file_name.to_owned(),
			source,
		};

		let mut tmp = NamedTempFile::new_in(&self.dir).map_err(write_err)?;
		tmp.write_all(&bytes).map_err(write_err)?;
		let target = self.dir.join(file_name);
		tmp.persist(&target).map_err(|e| write_err(e.error))?;

		debug!(path = %target.display(), bytes = bytes.len(), "stored emoji asset");
		Ok(())
	}

	fn url_for(&self, file_name: &str) -> String {
		asset_url(&self.host, &self.dir_name, file_name)
	}
}
