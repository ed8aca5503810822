//! Genome upload gate
//!
//! Uploads are checked by extension and existence only. File content is
//! never opened: the dashboard always shows the mock result set.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

use crate::config::GENOME_EXTENSIONS;

/// Genome file format, detected from the extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenomeFormat {
	Fasta,
	GenBank,
}

impl GenomeFormat {
	/// Detect genome format from file extension
	pub fn detect(path: &Path) -> Option<Self> {
		let ext = path.extension()?.to_str()?;

		if !GENOME_EXTENSIONS.iter().any(|e| e.eq_ignore_ascii_case(ext)) {
			return None;
		}

		if ext.eq_ignore_ascii_case("gbk") {
			Some(GenomeFormat::GenBank)
		} else {
			Some(GenomeFormat::Fasta)
		}
	}

	pub fn label(&self) -> &'static str {
		match self {
			GenomeFormat::Fasta => "FASTA",
			GenomeFormat::GenBank => "GenBank",
		}
	}
}

/// An accepted genome file
#[derive(Debug, Clone)]
pub struct GenomeUpload {
	path: PathBuf,
	format: GenomeFormat,
	size_bytes: u64,
}

impl GenomeUpload {
	/// Accept a genome file, rejecting unsupported extensions and missing files
	pub fn accept(path: &Path) -> Result<Self> {
		let Some(format) = GenomeFormat::detect(path) else {
			bail!(
				"Unsupported genome file {}: expected one of .{}",
				path.display(),
				GENOME_EXTENSIONS.join(", .")
			);
		};

		let metadata = fs::metadata(path)
			.with_context(|| format!("Cannot read genome file {}", path.display()))?;

		if !metadata.is_file() {
			bail!("Genome upload {} is not a regular file", path.display());
		}

		Ok(Self {
			path: path.to_path_buf(),
			format,
			size_bytes: metadata.len(),
		})
	}

	pub fn path(&self) -> &Path {
		&self.path
	}

	pub fn filename(&self) -> &str {
		self.path
			.file_name()
			.and_then(|n| n.to_str())
			.unwrap_or("genome")
	}

	pub fn format(&self) -> GenomeFormat {
		self.format
	}

	pub fn size_bytes(&self) -> u64 {
		self.size_bytes
	}
}
