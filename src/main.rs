mod cli;
mod settings;
mod workflow;

use anyhow::Result;
use cli::{OutputFormat, parse_cli, print_json, print_plain, print_suggestions};
use docsearch::{logging, ui::style::theme};
use workflow::SearchWorkflow;

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		for name in theme::names() {
			println!("{name}");
		}
		return Ok(());
	}

	logging::initialize();
	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	let workflow = SearchWorkflow::from_config(resolved)?;

	if cli.once {
		return run_once(cli.output, &workflow);
	}

	run_search(cli.output, workflow)
}

/// Print the suggestions for the initial query and exit.
fn run_once(format: OutputFormat, workflow: &SearchWorkflow) -> Result<()> {
	let suggestions = workflow.once()?;
	let ui = workflow.ui();
	print_suggestions(
		&suggestions,
		&ui.initial_query,
		&ui.site_url,
		&ui.section,
		format,
	)
}

/// Execute the search workflow and print output in the chosen format.
fn run_search(format: OutputFormat, workflow: SearchWorkflow) -> Result<()> {
	let outcome = workflow.run()?;

	match format {
		OutputFormat::Plain => print_plain(&outcome),
		OutputFormat::Json => print_json(&outcome)?,
	}

	Ok(())
}
