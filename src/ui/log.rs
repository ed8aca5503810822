//! Unified logging system
//!
//! Log lines go to stderr so page, chart and export output can be piped
//! from stdout.

use colored::*;
use std::sync::atomic::{AtomicBool, Ordering};

static VERBOSE: AtomicBool = AtomicBool::new(false);

const LOGO: &str = r#"
    ___    ____ __ __  ____  _
   /   |  /  _// // / / __ \(_)_____________
  / /| |  / / / // /_/ / / / / ___/ ___/ __ \
 / ___ |_/ / /__  __/ /_/ / (__  ) /__/ /_/ /
/_/  |_/___/   /_/ /_____/_/____/\___/\____/ "#;

const SLOGANS: &[&str] = &[
	"Mining microbes for tomorrow's medicine",
	"Gene clusters, ranked and ready",
	"NRPS, PKS, RiPP, oh my!",
	"Where soil bacteria meet silicon",
	"Antibiotics don't grow on trees. They grow in Streptomyces",
	"Four clusters walk into a scatter plot...",
	"Novelty: high. Drug-likeness: also high. Nice.",
];

pub fn random_slogan() -> &'static str {
	SLOGANS[rand::random_range(0..SLOGANS.len())]
}

pub fn print_logo() {
	eprintln!("{}", LOGO.bright_green().bold());
	eprintln!("{}", random_slogan().dimmed().italic());
}

pub struct Log;

impl Log {
	pub fn set_verbose(enabled: bool) {
		VERBOSE.store(enabled, Ordering::Relaxed);
	}

	pub fn is_verbose() -> bool {
		VERBOSE.load(Ordering::Relaxed)
	}
}

pub fn info(msg: &str) {
	eprintln!("{} {}", "ℹ".bright_blue().bold(), msg.bright_white());
}

pub fn success(msg: &str) {
	eprintln!("{} {}", "✓".bright_green().bold(), msg.bright_white());
}

pub fn warn(msg: &str) {
	eprintln!("{} {}", "⚠".bright_yellow().bold(), msg.bright_white());
}

pub fn error(msg: &str) {
	eprintln!("{} {}", "✗".bright_red().bold(), msg.bright_white());
}

pub fn debug(msg: &str) {
	if Log::is_verbose() {
		eprintln!("{} {}", "⚙".bright_black().bold(), msg.dimmed());
	}
}

pub fn header(text: &str) {
	eprintln!("\n{}", text.bright_green().bold());
}

/// Clickable file path (OSC 8 terminal hyperlink)
pub fn path_link(path: &std::path::Path, max_len: usize) -> String {
	let absolute = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());

	let uri = if cfg!(windows) {
		let path_str = absolute.to_string_lossy();
		let cleaned = path_str.strip_prefix(r"\\?\").unwrap_or(&path_str);
		format!("file:///{}", cleaned.replace('\\', "/"))
	} else {
		format!("file://{}", absolute.display())
	};

	let display_name = shorten(
		path.file_name()
			.and_then(|n| n.to_str())
			.unwrap_or("unknown"),
		max_len,
	);

	format!("\x1b]8;;{}\x1b\\{}\x1b]8;;\x1b\\", uri, display_name)
}

/// Shorten a name to at most `max_len` characters, keeping both ends
fn shorten(name: &str, max_len: usize) -> String {
	let chars: Vec<char> = name.chars().collect();
	if chars.len() <= max_len || max_len < 8 {
		return name.to_string();
	}

	let head = max_len / 2;
	let tail = max_len - head - 3;
	let start: String = chars[..head].iter().collect();
	let end: String = chars[chars.len() - tail..].iter().collect();
	format!("{}...{}", start, end)
}

/// Human-readable byte size
pub fn format_bytes(bytes: u64) -> String {
	const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];
	let mut value = bytes as f64;
	let mut unit = 0;
	while value >= 1024.0 && unit < UNITS.len() - 1 {
		value /= 1024.0;
		unit += 1;
	}
	if unit == 0 {
		format!("{} {}", bytes, UNITS[0])
	} else {
		format!("{:.1} {}", value, UNITS[unit])
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn shorten_keeps_short_names() {
		assert_eq!(shorten("genome.fasta", 40), "genome.fasta");
	}

	#[test]
	fn shorten_respects_max_len() {
		let short = shorten("streptomyces_coelicolor_a3_complete.gbk", 20);
		assert_eq!(short.chars().count(), 20);
		assert!(short.starts_with("streptomyc"));
		assert!(short.ends_with("ete.gbk"));
	}

	#[test]
	fn format_bytes_picks_unit() {
		assert_eq!(format_bytes(512), "512 B");
		assert_eq!(format_bytes(2048), "2.0 KB");
		assert_eq!(format_bytes(5 * 1024 * 1024), "5.0 MB");
	}
}
