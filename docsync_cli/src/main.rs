use std::path::Path;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use docsync_core::SyncContext;
use docsync_core::check_sync;
use docsync_core::collect_examples;
use docsync_core::compute_sync;
use docsync_core::config::DocsyncConfig;
use docsync_core::write_updates;
use docsync_cli::Commands;
use docsync_cli::DocsyncCli;
use docsync_cli::OutputFormat;
use owo_colors::OwoColorize;
use similar::ChangeTag;
use similar::TextDiff;

static USE_COLOR: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(true);

fn color_enabled() -> bool {
	USE_COLOR.load(std::sync::atomic::Ordering::Relaxed)
}

/// Apply ANSI color codes only when color is enabled.
macro_rules! colored {
	($text:expr,red) => {
		if color_enabled() {
			format!("{}", $text.red())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,green) => {
		if color_enabled() {
			format!("{}", $text.green())
		} else {
			format!("{}", $text)
		}
	};
}

const SAMPLE_CONFIG: &str = "# docsync configuration\n# Every value below is the default. \
                             Uncomment and edit what you need.\n\n# [examples]\n# dir = \
                             \"examples\"\n# patterns = [\"*.rs\"]\n# priority = []\n# language \
                             = \"rust\"\n# entry_marker = \"fn main() {\"\n# terminator = \
                             \"}\"\n# indent_width = 4\n# on_missing = \"error\"        # or \
                             \"skip\"\n# on_unterminated = \"extract\"  # or \"error\"\n\n# \
                             [readme]\n# path = \"README.md\"\n# section_start = \"## \
                             Examples\"\n# section_end = \"*\"\n# excerpt_start = \"This \
                             crate\"\n# excerpt_end = \"## Crates.io\"\n# bullet = \"* \"\n\n# \
                             [header]\n# path = \"src/lib.rs\"\n# prefix = \"//! \"\n";

fn main() {
	let args = DocsyncCli::parse();

	// Respect NO_COLOR env var and --no-color flag.
	let use_color = !args.no_color && std::env::var_os("NO_COLOR").is_none();
	if !use_color {
		USE_COLOR.store(false, std::sync::atomic::Ordering::Relaxed);
	}

	init_tracing(&args, use_color);

	// Install miette's fancy handler for rich error diagnostics.
	miette::set_hook(Box::new(move |_| {
		Box::new(
			miette::MietteHandlerOpts::new()
				.color(use_color)
				.unicode(use_color)
				.build(),
		)
	}))
	.ok();

	let result = match args.command {
		Some(Commands::Init) => run_init(&args),
		Some(Commands::Check { diff, format }) => run_check(&args, diff, format),
		Some(Commands::Update { dry_run }) => run_update(&args, dry_run),
		Some(Commands::List) => run_list(&args),
		None => {
			eprintln!("No subcommand specified. Run `docsync --help` for usage.");
			process::exit(1);
		}
	};

	if let Err(e) = result {
		match e.downcast::<docsync_core::DocsyncError>() {
			Ok(docsync_err) => {
				let report: miette::Report = (*docsync_err).into();
				eprintln!("{report:?}");
			}
			Err(e) => {
				eprintln!("{} {e}", colored!("error:", red));
			}
		}
		process::exit(2);
	}
}

/// Log to stderr. `RUST_LOG` wins over `--verbose`.
fn init_tracing(args: &DocsyncCli, use_color: bool) {
	use tracing_subscriber::EnvFilter;

	let filter = if args.verbose {
		"docsync_core=debug"
	} else {
		"docsync_core=warn"
	};
	let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

	tracing_subscriber::fmt()
		.with_env_filter(env_filter)
		.with_writer(std::io::stderr)
		.with_ansi(use_color)
		.with_target(false)
		.init();
}

fn resolve_root(args: &DocsyncCli) -> PathBuf {
	args.path
		.clone()
		.unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

fn run_init(args: &DocsyncCli) -> Result<(), Box<dyn std::error::Error>> {
	let root = resolve_root(args);

	if let Some(existing) = DocsyncConfig::resolve_path(&root) {
		println!("Config file already exists: {}", existing.display());
		return Ok(());
	}

	let config_path = root.join("docsync.toml");
	std::fs::write(&config_path, SAMPLE_CONFIG)?;
	println!("Created {}", config_path.display());
	println!();
	println!("Next steps:");
	println!("  1. Add a `## Examples` heading followed by a blank line to your readme");
	println!("  2. End the examples section with a line containing only `*`");
	println!("  3. Run `docsync update` to sync content");

	Ok(())
}

fn run_check(
	args: &DocsyncCli,
	show_diff: bool,
	format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
	let root = resolve_root(args);
	let ctx = SyncContext::load(&root)?;
	let result = check_sync(&ctx)?;

	if result.is_ok() {
		match format {
			OutputFormat::Json => {
				println!("{{\"ok\":true,\"stale\":[]}}");
			}
			OutputFormat::Github | OutputFormat::Text => {
				println!("Check passed: all documents are up to date.");
			}
		}
		return Ok(());
	}

	match format {
		OutputFormat::Json => {
			let stale_entries: Vec<serde_json::Value> = result
				.stale
				.iter()
				.map(|entry| {
					serde_json::json!({
						"file": make_relative(&entry.file, &root),
						"kind": entry.kind.to_string(),
					})
				})
				.collect();
			let output = serde_json::json!({
				"ok": false,
				"stale": stale_entries,
			});
			println!("{output}");
		}
		OutputFormat::Github => {
			for entry in &result.stale {
				let rel = make_relative(&entry.file, &root);
				println!(
					"::warning file={rel}::The {} document is out of date",
					entry.kind
				);
			}
			eprintln!("{}", check_summary(result.stale.len()));
		}
		OutputFormat::Text => {
			eprintln!("Check failed.");
			eprintln!();
			eprintln!("Stale documents:");
			for entry in &result.stale {
				let rel = make_relative(&entry.file, &root);
				eprintln!("  {} ({rel})", entry.kind);

				if show_diff {
					print_diff(&entry.current_content, &entry.expected_content);
				}
			}

			eprintln!();
			eprintln!("{}", check_summary(result.stale.len()));
		}
	}

	process::exit(1);
}

fn check_summary(stale: usize) -> String {
	format!("{stale} document(s) are out of date. Run `docsync update` to fix.")
}

fn run_update(args: &DocsyncCli, dry_run: bool) -> Result<(), Box<dyn std::error::Error>> {
	let root = resolve_root(args);
	let ctx = SyncContext::load(&root)?;
	let result = compute_sync(&ctx)?;

	if result.updated_count() == 0 {
		println!("All documents are already up to date.");
		return Ok(());
	}

	if dry_run {
		println!(
			"Dry run: would update {} file(s):",
			result.updated_count()
		);
		for doc in result.changed() {
			println!("  {}", make_relative(&doc.path, &root));
		}
		return Ok(());
	}

	let written = write_updates(&result)?;
	println!(
		"Updated {written} file(s) from {} example(s).",
		result.examples.len()
	);

	if args.verbose {
		for doc in result.changed() {
			println!("  {}", make_relative(&doc.path, &root));
		}
	}

	Ok(())
}

fn run_list(args: &DocsyncCli) -> Result<(), Box<dyn std::error::Error>> {
	let root = resolve_root(args);
	let ctx = SyncContext::load(&root)?;
	let examples = collect_examples(&ctx)?;

	if examples.is_empty() {
		println!("No examples found.");
		return Ok(());
	}

	for (index, example) in examples.iter().enumerate() {
		println!("{:>3}. {}", index + 1, example.id);
	}

	Ok(())
}

/// Print a unified diff between two strings, colorized.
fn print_diff(current: &str, expected: &str) {
	let diff = TextDiff::from_lines(current, expected);
	for change in diff.iter_all_changes() {
		match change.tag() {
			ChangeTag::Delete => {
				eprint!("  {}", colored!(format!("-{change}"), red));
			}
			ChangeTag::Insert => {
				eprint!("  {}", colored!(format!("+{change}"), green));
			}
			ChangeTag::Equal => {
				eprint!("   {change}");
			}
		}
	}
}

/// Make a path relative to root for display purposes.
fn make_relative(path: &Path, root: &Path) -> String {
	path.strip_prefix(root)
		.unwrap_or(path)
		.display()
		.to_string()
}
