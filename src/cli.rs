use clap::builder::styling::{AnsiColor, Color, Style, Styles};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;

use crate::render::Theme;

fn styles() -> Styles {
	Styles::styled()
		.header(Style::new().bold().fg_color(Some(Color::Ansi(AnsiColor::Green))))
		.usage(Style::new().bold().fg_color(Some(Color::Ansi(AnsiColor::Green))))
		.literal(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))))
		.placeholder(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Yellow))))
		.valid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))))
		.invalid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Red))))
}

#[derive(Parser, Debug)]
#[command(
	name = "ai4disco",
	author,
	version,
	about = "AI-powered biosynthetic gene cluster discovery (demo dashboard)",
	styles = styles(),
	disable_help_subcommand = true,
	after_help = format!(
		"{title}
  {app} {render}  {render_args}   {render_desc}
  {app} {table}   {table_args}           {table_desc}
  {app} {chart}   {chart_args}           {chart_desc}
  {app} {export}  {export_args}                 {export_desc}",
		title = "Examples:".bright_green().bold(),
		app = "ai4disco".bright_green(),
		render = "render".yellow(),
		render_args = "-g genome.fasta --open",
		render_desc = "Build the dashboard page".dimmed(),
		table = "table".yellow(),
		table_args = "-g genome.gbk",
		table_desc = "Print detected clusters".dimmed(),
		chart = "chart".yellow(),
		chart_args = "-o chart.svg",
		chart_desc = "Write the scatter chart".dimmed(),
		export = "export".yellow(),
		export_args = "-o -",
		export_desc = "Clusters as JSON".dimmed(),
	),
)]
pub struct Cli {
	/// Enable verbose debug output
	#[arg(short = 'v', long = "verbose", global = true)]
	pub verbose: bool,

	/// Page and chart theme
	#[arg(short = 't', long = "theme", global = true, default_value = "classic")]
	pub theme: Theme,

	/// Directory for default output files (overrides AI4DISCO_OUTPUT_DIR)
	#[arg(long = "out-dir", global = true, value_name = "DIR")]
	pub out_dir: Option<PathBuf>,

	#[command(subcommand)]
	pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
	/// Render the dashboard as a standalone HTML page
	Render {
		/// Microbial genome to upload (.fasta or .gbk)
		#[arg(short = 'g', long = "genome", value_name = "PATH")]
		genome: Option<PathBuf>,

		/// Output file ("-" for stdout)
		#[arg(short = 'o', long = "output", value_name = "PATH")]
		output: Option<PathBuf>,

		/// Open the rendered page in the default browser
		#[arg(long = "open")]
		open: bool,
	},

	/// Print detected gene clusters as a table
	Table {
		/// Microbial genome to upload (.fasta or .gbk)
		#[arg(short = 'g', long = "genome", value_name = "PATH")]
		genome: Option<PathBuf>,
	},

	/// Write the novelty vs drug-likeness chart as SVG
	Chart {
		/// Output file ("-" for stdout)
		#[arg(short = 'o', long = "output", value_name = "PATH")]
		output: Option<PathBuf>,
	},

	/// Export detected gene clusters as JSON
	Export {
		/// Output file ("-" or omitted for stdout)
		#[arg(short = 'o', long = "output", value_name = "PATH")]
		output: Option<PathBuf>,
	},

	/// Show help for a subcommand
	Help {
		/// Subcommand name
		subcommand: Option<String>,
	},
}
