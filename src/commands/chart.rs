//! Chart command - write the cluster prioritization scatter chart

use std::path::Path;

use anyhow::Result;

use crate::config;
use crate::core::demo_clusters;
use crate::render::{ScatterChart, Theme};
use crate::ui;

pub fn run(output: Option<&Path>, theme: Theme) -> Result<()> {
	let clusters = demo_clusters();
	super::check_scores(&clusters);

	let chart = ScatterChart::from_clusters(&clusters);
	ui::debug(&format!(
		"Plotting {} points on [{}, {}] x [{}, {}]",
		chart.points.len(),
		chart.x_axis.min,
		chart.x_axis.max,
		chart.y_axis.min,
		chart.y_axis.max
	));

	let svg = format!("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n{}", chart.to_svg(theme));
	let path = output.map(Path::to_path_buf).unwrap_or_else(config::default_chart_path);

	super::write_output(&svg, &path, "chart")
}
