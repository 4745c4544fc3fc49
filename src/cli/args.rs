use std::fmt::Write;
use std::path::PathBuf;

use clap::{
	ArgAction, ColorChoice, Command, CommandFactory, FromArgMatches, Parser, ValueEnum,
	builder::{
		Styles,
		styling::{AnsiColor, Effects},
	},
};
use docsearch::app_dirs::AppDirs;

/// Produce the full version banner including the config and log file paths.
fn long_version() -> &'static str {
	let mut details = format!("docsearch {}", env!("CARGO_PKG_VERSION"));
	let _ = writeln!(details);
	match AppDirs::resolve() {
		Ok(dirs) => {
			let _ = writeln!(details, "config file: {}", dirs.config_file().display());
			let _ = writeln!(details, "log file: {}", dirs.log_file().display());
		}
		Err(err) => {
			let _ = writeln!(details, "application directories unavailable ({err})");
		}
	}

	Box::leak(details.into_boxed_str())
}

fn cli_styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.literal(AnsiColor::Cyan.on_default())
		.placeholder(AnsiColor::Yellow.on_default())
}

/// Parse command line arguments into the strongly typed [`CliArgs`] structure.
pub(crate) fn parse_cli() -> CliArgs {
	let mut matches = cli_command().get_matches();
	CliArgs::from_arg_matches_mut(&mut matches).unwrap_or_else(|err| err.exit())
}

fn cli_command() -> Command {
	CliArgs::command()
}

#[derive(Parser, Debug)]
#[command(
	name = "docsearch",
	version,
	long_version = long_version(),
	about = "Search documentation reference pages from the terminal",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
/// Command-line arguments accepted by the `docsearch` binary.
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "DOCSEARCH_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 'q',
		long,
		value_name = "QUERY",
		help = "Provide an initial search query (default: empty)"
	)]
	pub(crate) initial_query: Option<String>,
	#[arg(
		long = "api-url",
		value_name = "URL",
		help = "Base URL of the search API (default: https://docs.cycling74.com)"
	)]
	pub(crate) api_url: Option<String>,
	#[arg(
		long = "site-url",
		value_name = "URL",
		help = "Base URL used for page links (default: https://docs.cycling74.com)"
	)]
	pub(crate) site_url: Option<String>,
	#[arg(
		long,
		value_name = "NAME",
		help = "Documentation section to search (default: max8)"
	)]
	pub(crate) section: Option<String>,
	#[arg(
		long = "debounce-ms",
		value_name = "MS",
		help = "Delay after the last keystroke before searching (default: 500)"
	)]
	pub(crate) debounce_ms: Option<u64>,
	#[arg(
		long = "timeout-ms",
		value_name = "MS",
		help = "Timeout for each search request (default: 10000)"
	)]
	pub(crate) timeout_ms: Option<u64>,
	#[arg(
		long,
		value_name = "THEME",
		help = "Select a theme by name (default: default)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'l',
		long = "list-themes",
		help = "List supported themes and exit (default: disabled)"
	)]
	pub(crate) list_themes: bool,
	#[arg(
		long,
		requires = "initial_query",
		help = "Run the initial query once, print the suggestions and exit (default: disabled)"
	)]
	pub(crate) once: bool,
	#[arg(short = 'o', long = "output", value_enum, default_value_t = OutputFormat::Plain, help = "Choose how to print the result")]
	pub(crate) output: OutputFormat,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
/// Output formats supported by the CLI utility.
pub(crate) enum OutputFormat {
	Plain,
	Json,
}
