//! Application configuration and constants

use std::path::PathBuf;
use std::sync::OnceLock;

static CUSTOM_OUTPUT_DIR: OnceLock<PathBuf> = OnceLock::new();

// === Page ===
pub const PAGE_TITLE: &str = "AI-Powered BGC Discovery";
pub const PAGE_ICON: &str = "🧬";
pub const APP_TITLE: &str = "AI4Disco: AI-Powered BGC Discovery Platform";

// === Upload ===
pub const GENOME_EXTENSIONS: &[&str] = &["fasta", "gbk"];

// === Chart ===
pub const CHART_TITLE: &str = "Cluster Prioritization";
pub const X_AXIS_LABEL: &str = "Novelty Score";
pub const Y_AXIS_LABEL: &str = "Drug-likeness Score";
pub const CHART_WIDTH: f64 = 800.0;
pub const CHART_HEIGHT: f64 = 500.0;
pub const MARKER_COLOR: &str = "green";
/// Marker area in square points, radius is derived from it
pub const MARKER_AREA: f64 = 120.0;
/// Horizontal offset of point labels, in data units
pub const LABEL_OFFSET: f64 = 0.01;
pub const LABEL_FONT_SIZE: u32 = 9;
pub const TICK_STEP: f64 = 0.2;

// === Output ===
pub const PAGE_FILE: &str = "ai4disco.html";
pub const CHART_FILE: &str = "cluster_prioritization.svg";
pub const OUTPUT_DIR_ENV: &str = "AI4DISCO_OUTPUT_DIR";

pub fn set_output_dir(path: PathBuf) {
	let _ = CUSTOM_OUTPUT_DIR.set(path);
}

/// Get output directory (CLI override, AI4DISCO_OUTPUT_DIR env var, or cwd)
pub fn output_dir() -> PathBuf {
	if let Some(custom) = CUSTOM_OUTPUT_DIR.get() {
		crate::ui::debug(&format!("Using custom output dir: {}", custom.display()));
		return custom.clone();
	}

	if let Ok(env_path) = std::env::var(OUTPUT_DIR_ENV) {
		let path = PathBuf::from(&env_path);
		if path.is_dir() {
			crate::ui::debug(&format!("Using {}: {}", OUTPUT_DIR_ENV, env_path));
			return path;
		}
		crate::ui::debug(&format!("Ignoring {}: not a directory", OUTPUT_DIR_ENV));
	}

	PathBuf::from(".")
}

pub fn default_page_path() -> PathBuf {
	output_dir().join(PAGE_FILE)
}

pub fn default_chart_path() -> PathBuf {
	output_dir().join(CHART_FILE)
}
