//! Table command - print detected clusters

use std::path::Path;

use anyhow::Result;

use crate::core::{demo_clusters, PageState, UploadStatus};
use crate::render::table;
use crate::ui;

pub fn run(genome: Option<&Path>) -> Result<()> {
	let state = PageState::with_upload(super::accept_genome(genome)?);

	for status in state.statuses() {
		match status {
			UploadStatus::Success => ui::success(status.message()),
			UploadStatus::Info => ui::info(status.message()),
		}
	}

	let clusters = demo_clusters();
	super::check_scores(&clusters);

	ui::header("Detected Biosynthetic Gene Clusters (BGCs)");
	table::print(&clusters);

	Ok(())
}
