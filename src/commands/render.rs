//! Render command - build the dashboard page

use std::path::Path;
use std::time::Instant;

use anyhow::Result;
use colored::*;

use crate::config;
use crate::core::{demo_clusters, PageState};
use crate::render::{render_page, Theme};
use crate::ui;

pub fn run(genome: Option<&Path>, output: Option<&Path>, theme: Theme, open_page: bool) -> Result<()> {
	let start = Instant::now();

	let upload = super::accept_genome(genome)?;
	let state = PageState::with_upload(upload);

	for status in state.statuses() {
		ui::debug(&format!("Status banner: {}", status.message()));
	}

	let clusters = demo_clusters();
	super::check_scores(&clusters);

	ui::debug(&format!("Rendering page with {:?} theme", theme));
	let html = render_page(&state, &clusters, theme);

	let path = output.map(Path::to_path_buf).unwrap_or_else(config::default_page_path);
	super::write_output(&html, &path, "dashboard")?;

	ui::debug(&format!(
		"{}",
		format!("Rendered in {}ms", start.elapsed().as_millis()).dimmed()
	));

	if open_page && !super::is_stdout(&path) {
		ui::info("Opening dashboard in browser");
		if let Err(e) = open::that(&path) {
			ui::warn(&format!("Failed to open: {}", e));
		}
	}

	Ok(())
}
