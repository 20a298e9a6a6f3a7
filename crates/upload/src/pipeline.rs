use std::path::Path;
use std::sync::Arc;

use emote_registry::{Definition, DefinitionSet};
use tracing::{info, warn};

use crate::{AssetStore, FailedUpload, NotReadyError, UploadError, mint_id, sanitize_id};

/// Result of one upload batch.
#[derive(Debug)]
pub struct IngestReport {
	/// Full working copy: the input set plus every definition minted in this batch.
	pub definitions: DefinitionSet,
	/// Definitions minted in this batch, in input order.
	pub added: Vec<Definition>,
	/// Files that could not be ingested, in input order.
	pub failures: Vec<FailedUpload>,
}

/// Mints definitions for uploaded files.
///
/// The pipeline is inert until [`UploadPipeline::configure`] provides an
/// asset store; [`UploadPipeline::ingest`] fails with [`NotReadyError`] before then.
#[derive(Default)]
pub struct UploadPipeline {
	store: Option<Arc<dyn AssetStore>>,
}

impl UploadPipeline {
	pub fn new() -> Self {
		Self::default()
	}

	/// Installs the asset store, replacing any previous one.
	pub fn configure(&mut self, store: Arc<dyn AssetStore>) {
		self.store = Some(store);
	}

	pub fn is_ready(&self) -> bool {
		self.store.is_some()
	}

	/// Ingests `paths` in order against the definitions in `base`.
	///
	/// Each file gets an id derived from its stem that is unique across `base`
	/// and the files minted earlier in the same batch. A file that fails is
	/// reported and skipped; earlier successes are kept. `base` is never
	/// modified. The caller publishes `definitions` once for the whole batch.
	pub fn ingest<P: AsRef<Path>>(&self, paths: &[P], base: &DefinitionSet) -> Result<IngestReport, NotReadyError> {
		let store = self.store.as_deref().ok_or(NotReadyError)?;

		let mut added: Vec<Definition> = Vec::with_capacity(paths.len());
		let mut failures = Vec::new();

		for path in paths {
			let path = path.as_ref();
			let taken = |id: &str| base.is_taken(id) || added.iter().any(|d| d.id == id);
			match ingest_one(store, path, taken) {
				Ok(def) => {
					info!(id = %def.id, path = %path.display(), "registered emoji");
					added.push(def);
				}
				Err(error) => {
					warn!(path = %path.display(), %error, "emoji upload failed");
					failures.push(FailedUpload {
						path: path.to_path_buf(),
						error,
					});
				}
			}
		}

		Ok(IngestReport {
			definitions: base.with_added(added.iter().cloned()),
			added,
			failures,
		})
	}
}

fn ingest_one(store: &dyn AssetStore, path: &Path, taken: impl Fn(&str) -> bool) -> Result<Definition, UploadError> {
	let name = path
		.file_stem()
		.map(|stem| stem.to_string_lossy().into_owned())
		.ok_or(UploadError::InvalidPath)?;

	let id = mint_id(&sanitize_id(&name), taken);
	let file_name = match path.extension().map(|ext| sanitize_extension(&ext.to_string_lossy())) {
		Some(ext) if !ext.is_empty() => format!("{id}.{ext}"),
		_ => id.clone(),
	};

	store.store(path, &file_name)?;

	let pattern = regex::escape(&name);
	Ok(Definition::new(id, name, store.url_for(&file_name), pattern))
}

fn sanitize_extension(ext: &str) -> String {
	ext.chars()
		.filter(char::is_ascii_alphanumeric)
		.map(|c| c.to_ascii_lowercase())
		.collect()
}
