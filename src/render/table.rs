//! Cluster results table (HTML and terminal)

use colored::*;
use html_escape::encode_text;

use crate::core::ClusterRecord;

pub const COLUMNS: [&str; 4] = ["Cluster ID", "Type", "Novelty", "Drug-likeness"];

/// Format a score for display with two decimals
pub fn format_score(score: f64) -> String {
	format!("{:.2}", score)
}

/// Render records as an HTML table, preserving input order
pub fn to_html(clusters: &[ClusterRecord]) -> String {
	let mut html = String::from("<table class=\"clusters\">\n<thead>\n<tr>");
	for column in COLUMNS {
		html.push_str(&format!("<th>{}</th>", encode_text(column)));
	}
	html.push_str("</tr>\n</thead>\n<tbody>\n");

	for cluster in clusters {
		html.push_str(&format!(
			"<tr><td>{}</td><td>{}</td><td class=\"num\">{}</td><td class=\"num\">{}</td></tr>\n",
			encode_text(&cluster.id),
			encode_text(&cluster.kind),
			format_score(cluster.novelty),
			format_score(cluster.drug_likeness),
		));
	}

	html.push_str("</tbody>\n</table>");
	html
}

/// Render records as aligned plain-text rows (no colors)
pub fn to_rows(clusters: &[ClusterRecord]) -> Vec<String> {
	let id_width = clusters
		.iter()
		.map(|c| c.id.chars().count())
		.chain(std::iter::once(COLUMNS[0].len()))
		.max()
		.unwrap_or(0);
	let kind_width = clusters
		.iter()
		.map(|c| c.kind.chars().count())
		.chain(std::iter::once(COLUMNS[1].len()))
		.max()
		.unwrap_or(0);

	let mut rows = Vec::with_capacity(clusters.len() + 1);
	rows.push(format!(
		"{:<id_width$}  {:<kind_width$}  {:>7}  {:>13}",
		COLUMNS[0], COLUMNS[1], COLUMNS[2], COLUMNS[3]
	));

	for cluster in clusters {
		rows.push(format!(
			"{:<id_width$}  {:<kind_width$}  {:>7}  {:>13}",
			cluster.id,
			cluster.kind,
			format_score(cluster.novelty),
			format_score(cluster.drug_likeness),
		));
	}

	rows
}

/// Print records to the terminal with a highlighted header
pub fn print(clusters: &[ClusterRecord]) {
	let rows = to_rows(clusters);
	let Some((header, body)) = rows.split_first() else {
		return;
	};

	println!("  {}", header.bright_blue().bold());
	for row in body {
		println!("  {}", row.bright_white());
	}
}
