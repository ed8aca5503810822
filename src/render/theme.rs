//! Page themes
//!
//! Themes only change presentation (CSS and font sizes). The data shown is
//! identical for every theme.

use clap::ValueEnum;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Theme {
	/// Plain wide layout
	#[default]
	Classic,
	/// Card layout with larger headings
	Styled,
}

const BASE_CSS: &str = r#"
body { font-family: "Source Sans Pro", Helvetica, Arial, sans-serif; margin: 0; color: #31333f; background: #ffffff; }
main { max-width: 1200px; margin: 0 auto; padding: 2rem 3rem; }
hr { border: none; border-top: 1px solid #e6e6e6; margin: 2rem 0; }
table.clusters { border-collapse: collapse; margin: 1rem 0; }
table.clusters th, table.clusters td { border: 1px solid #e6e6e6; padding: 0.35rem 0.75rem; text-align: left; }
table.clusters td.num { text-align: right; font-variant-numeric: tabular-nums; }
.alert { padding: 0.75rem 1rem; border-radius: 0.5rem; margin: 0.5rem 0; }
.alert-success { background: #dff5e3; color: #177233; }
.alert-info { background: #e0ecfb; color: #0c4a8a; }
.upload { border: 1px dashed #c7c7c7; border-radius: 0.5rem; padding: 1rem; }
footer { font-style: italic; }
"#;

const STYLED_CSS: &str = r#"
body { background: #f4f7f5; }
h1 { font-size: 2.6rem; }
h2 { font-size: 1.8rem; color: #1b5e20; }
.hero { background: linear-gradient(120deg, #e8f5e9, #ffffff); border-radius: 1rem; padding: 1.5rem 2rem; }
.hero p { font-size: 1.15rem; }
.section-card { background: #ffffff; border-radius: 1rem; box-shadow: 0 2px 8px rgba(0, 0, 0, 0.06); padding: 1.25rem 2rem; margin: 1.5rem 0; }
table.clusters th { background: #e8f5e9; }
footer { font-size: 0.95rem; color: #555555; }
"#;

impl Theme {
	/// Name as accepted on the command line
	pub fn name(&self) -> String {
		self.to_possible_value()
			.map(|v| v.get_name().to_string())
			.unwrap_or_default()
	}

	pub fn stylesheet(&self) -> String {
		match self {
			Theme::Classic => BASE_CSS.to_string(),
			Theme::Styled => format!("{}{}", BASE_CSS, STYLED_CSS),
		}
	}

	/// Class attribute for hero and section wrappers
	pub fn section_class(&self, hero: bool) -> &'static str {
		match (self, hero) {
			(Theme::Classic, true) => "hero-plain",
			(Theme::Classic, false) => "section",
			(Theme::Styled, true) => "hero",
			(Theme::Styled, false) => "section section-card",
		}
	}

	pub fn chart_title_size(&self) -> u32 {
		match self {
			Theme::Classic => 12,
			Theme::Styled => 15,
		}
	}

	pub fn chart_axis_label_size(&self) -> u32 {
		match self {
			Theme::Classic => 10,
			Theme::Styled => 12,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn name_matches_cli_value() {
		assert_eq!(Theme::Classic.name(), "classic");
		assert_eq!(Theme::Styled.name(), "styled");
		assert_eq!(Theme::from_str("styled", true), Ok(Theme::Styled));
	}
}
