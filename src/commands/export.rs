//! Export command - detected clusters as JSON

use std::path::Path;

use anyhow::{Context, Result};

use crate::core::{demo_clusters, ClusterReport};

pub fn run(output: Option<&Path>) -> Result<()> {
	let report = ClusterReport::new(demo_clusters());
	let json = serde_json::to_string_pretty(&report).context("Failed to serialize clusters")?;

	super::write_output(&json, output.unwrap_or(Path::new("-")), "clusters")
}
