use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;

#[derive(Parser)]
#[command(
	author,
	version,
	about = "Keep a readme's examples and a crate's header docs in sync with its example programs.",
	long_about = "docsync renders every example program into the examples section of your readme, \
	              then copies the readme's prose into the `//!` header of your crate's entry \
	              file.\n\nBoth edits are driven by markers already in the documents, so running \
	              it twice changes nothing.\n\nQuick start:\n  docsync init    Create a \
	              docsync.toml\n  docsync update  Rewrite the readme and the header\n  docsync \
	              check   Verify everything is up to date\n  docsync list    Show the example \
	              order"
)]
pub struct DocsyncCli {
	#[command(subcommand)]
	pub command: Option<Commands>,

	/// Path to the project root directory.
	#[arg(long, short, global = true)]
	pub path: Option<PathBuf>,

	/// Enable verbose output.
	#[arg(long, short, global = true, default_value_t = false)]
	pub verbose: bool,

	/// Disable colored output.
	#[arg(long, global = true, default_value_t = false)]
	pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
	/// Create a sample `docsync.toml` in the project root.
	///
	/// The sample lists every setting with its default value. If a config file
	/// already exists this command does nothing and exits successfully.
	Init,
	/// Check that the readme and the header are up to date.
	///
	/// Runs the whole pipeline in memory and compares the result with the
	/// files on disk. Exits with a non-zero status code if either document
	/// would change.
	Check {
		/// Show a line diff for each stale document.
		#[arg(long, default_value_t = false)]
		diff: bool,

		/// Output format for check results. Use `text` for human-readable
		/// output, `json` for programmatic consumption, or `github` for
		/// GitHub Actions annotations.
		#[arg(long, value_enum, default_value_t = OutputFormat::Text)]
		format: OutputFormat,
	},
	/// Render the examples into the readme and refresh the header.
	///
	/// Use `--dry-run` to see which files would change without writing them.
	Update {
		/// Preview changes without writing files.
		#[arg(long, default_value_t = false)]
		dry_run: bool,
	},
	/// List the examples in the order they are rendered.
	List,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
	/// Human-readable text output with colors and formatting.
	Text,
	/// JSON output for programmatic consumption.
	Json,
	/// GitHub Actions annotation format.
	Github,
}
