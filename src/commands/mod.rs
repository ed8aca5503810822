//! # Command Implementations
//!
//! Each submodule handles one CLI command (render, table, chart, export).

pub mod chart;
pub mod export;
pub mod render;
pub mod table;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::core::{ClusterRecord, GenomeUpload};
use crate::ui;

/// `-` (or an empty path) means stdout
pub(crate) fn is_stdout(path: &Path) -> bool {
	path.to_str() == Some("-") || path.as_os_str().is_empty()
}

/// Write rendered output to a file, or print it when the target is stdout
pub(crate) fn write_output(content: &str, path: &Path, what: &str) -> Result<()> {
	if is_stdout(path) {
		println!("{}", content);
		return Ok(());
	}

	if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
		fs::create_dir_all(parent)
			.with_context(|| format!("Failed to create {}", parent.display()))?;
	}
	fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;

	ui::success(&format!("Wrote {} to {}", what, ui::path_link(path, 60)));
	Ok(())
}

/// Run the optional genome through the upload gate
pub(crate) fn accept_genome(genome: Option<&Path>) -> Result<Option<GenomeUpload>> {
	let Some(path) = genome else {
		ui::debug("No genome uploaded");
		return Ok(None);
	};

	let upload = GenomeUpload::accept(path)?;
	ui::info(&format!(
		"Accepted {} genome {} ({})",
		upload.format().label(),
		ui::path_link(upload.path(), 40),
		ui::format_bytes(upload.size_bytes())
	));
	ui::debug("Genome content is not analysed; showing mock clusters");

	Ok(Some(upload))
}

/// Report records whose scores leave the nominal [0, 1] range
pub(crate) fn check_scores(clusters: &[ClusterRecord]) {
	for cluster in clusters.iter().filter(|c| !c.in_unit_range()) {
		ui::warn(&format!(
			"{} has scores outside [0, 1] (novelty {}, drug-likeness {}); the chart clips it",
			cluster.id, cluster.novelty, cluster.drug_likeness
		));
	}
	ui::debug(&format!("Loaded {} clusters", clusters.len()));
}
