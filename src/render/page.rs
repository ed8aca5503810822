//! Full dashboard page (self-contained HTML)

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::config::{APP_TITLE, GENOME_EXTENSIONS, PAGE_ICON, PAGE_TITLE};
use crate::core::{ClusterRecord, PageState};
use crate::render::content::*;
use crate::render::{table, ScatterChart, Theme};

/// Render the dashboard for the given state.
///
/// Output depends only on `clusters`, `theme` and whether an upload is
/// present, so repeated renders are byte-identical.
pub fn render_page(state: &PageState, clusters: &[ClusterRecord], theme: Theme) -> String {
	let mut body = String::new();

	body.push_str(&hero(theme));
	body.push_str("<hr>\n");
	body.push_str(&upload_section(state, theme));
	body.push_str(&section(
		theme,
		"results",
		RESULTS_HEADER,
		&table::to_html(clusters),
	));
	body.push_str(&section(
		theme,
		"chart",
		CHART_HEADER,
		&ScatterChart::from_clusters(clusters).to_svg(theme),
	));
	body.push_str(&section(theme, "pipeline", PIPELINE_HEADER, &pipeline_steps()));
	body.push_str(&section(theme, "impact", IMPACT_HEADER, &impact_points()));
	body.push_str("<hr>\n");
	body.push_str(&format!(
		"<footer><p>{} <em>{}</em></p></footer>\n",
		FOOTER_ICON,
		encode_text(FOOTER_NOTE)
	));

	format!(
		r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<link rel="icon" href="data:image/svg+xml,&lt;svg xmlns=%22http://www.w3.org/2000/svg%22 viewBox=%220 0 100 100%22&gt;&lt;text y=%22.9em%22 font-size=%2290%22&gt;{icon}&lt;/text&gt;&lt;/svg&gt;">
<style>{css}</style>
</head>
<body class="theme-{theme_name}">
<main>
{body}</main>
</body>
</html>
"#,
		title = encode_text(PAGE_TITLE),
		icon = PAGE_ICON,
		css = theme.stylesheet(),
		theme_name = theme.name(),
	)
}

fn hero(theme: Theme) -> String {
	format!(
		"<header class=\"{}\">\n<h1>{} {}</h1>\n<p><strong>Problem:</strong> {}<br>\n<strong>Solution:</strong> {}</p>\n</header>\n",
		theme.section_class(true),
		PAGE_ICON,
		encode_text(APP_TITLE),
		encode_text(HERO_PROBLEM),
		encode_text(HERO_SOLUTION),
	)
}

fn section(theme: Theme, id: &str, header: &str, content: &str) -> String {
	format!(
		"<section id=\"{}\" class=\"{}\">\n<h2>{}</h2>\n{}\n</section>\n",
		encode_double_quoted_attribute(id),
		theme.section_class(false),
		encode_text(header),
		content
	)
}

fn upload_section(state: &PageState, theme: Theme) -> String {
	let accept: Vec<String> = GENOME_EXTENSIONS.iter().map(|e| format!(".{}", e)).collect();

	let mut content = format!(
		"<form class=\"upload\" method=\"post\" enctype=\"multipart/form-data\">\n<label for=\"genome\">{}</label>\n<input type=\"file\" id=\"genome\" name=\"genome\" accept=\"{}\">\n</form>\n",
		encode_text(UPLOAD_LABEL),
		encode_double_quoted_attribute(&accept.join(",")),
	);

	for status in state.statuses() {
		content.push_str(&format!(
			"<div class=\"{}\" role=\"status\">{}</div>\n",
			status.css_class(),
			encode_text(status.message())
		));
	}

	section(theme, "upload", UPLOAD_HEADER, content.trim_end())
}

fn pipeline_steps() -> String {
	let mut html = String::from("<ol>\n");
	for (name, description) in PIPELINE_STEPS {
		html.push_str(&format!(
			"<li><strong>{}:</strong> {}</li>\n",
			encode_text(name),
			encode_text(description)
		));
	}
	html.push_str("</ol>");
	html
}

fn impact_points() -> String {
	let mut html = String::from("<ul>\n");
	for (lead, emphasis) in IMPACT_POINTS {
		html.push_str(&format!(
			"<li>{} <strong>{}</strong></li>\n",
			encode_text(lead),
			encode_text(emphasis)
		));
	}
	html.push_str("</ul>");
	html
}
