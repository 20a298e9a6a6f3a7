use std::io;
use std::path::PathBuf;

/// Upload attempted before the asset directory was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("asset directory has not been resolved yet")]
pub struct NotReadyError;

/// Failure to ingest a single file.
#[derive(Debug, thiserror::Error)]
pub enum UploadError {
	/// The path has no usable file name.
	#[error("path has no file name")]
	InvalidPath,
	#[error("failed to read source file: {0}")]
	Read(#[source] io::Error),
	#[error("failed to write asset {file_name}: {source}")]
	Write {
		file_name: String,
		#[source]
		source: io::Error,
	},
}

/// A file from an upload batch that was not ingested.
#[derive(Debug, thiserror::Error)]
#[error("{}: {error}", .path.display())]
pub struct FailedUpload {
	pub path: PathBuf,
	#[source]
	pub error: UploadError,
}
