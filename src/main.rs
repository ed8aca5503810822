//! AI4Disco - AI-powered BGC discovery dashboard
//!
//! Command-line front end: renders the demo dashboard page, the cluster
//! table, the prioritization chart, or a JSON export.

use anyhow::Result;
use clap::{CommandFactory, Parser};

use ai4disco::cli::{Cli, Command};
use ai4disco::{commands, config, ui};

fn main() {
	let cli = Cli::parse();

	ui::Log::set_verbose(cli.verbose);
	if let Some(dir) = cli.out_dir.clone() {
		config::set_output_dir(dir);
	}

	if cli.verbose {
		ui::print_logo();
	}

	if let Err(e) = run(cli) {
		ui::error(&format!("{:#}", e));
		std::process::exit(1);
	}
}

fn run(cli: Cli) -> Result<()> {
	match cli.command {
		Command::Render { genome, output, open } => {
			commands::render::run(genome.as_deref(), output.as_deref(), cli.theme, open)
		}
		Command::Table { genome } => commands::table::run(genome.as_deref()),
		Command::Chart { output } => commands::chart::run(output.as_deref(), cli.theme),
		Command::Export { output } => commands::export::run(output.as_deref()),
		Command::Help { subcommand } => {
			let mut cmd = Cli::command();
			match subcommand {
				Some(sub) => match cmd.find_subcommand_mut(&sub) {
					Some(sub_cmd) => sub_cmd.print_help()?,
					None => {
						ui::warn(&format!("Unknown subcommand: {}", sub));
						cmd.print_help()?;
					}
				},
				None => cmd.print_help()?,
			}
			Ok(())
		}
	}
}
