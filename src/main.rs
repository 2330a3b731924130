use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use sshconf::Document;
use sshconf::file::{default_config_path, parse_config_file, write_config_file};

#[derive(Parser)]
#[command(name = "sshconf")]
#[command(
	author,
	version,
	about = "Inspect and edit OpenSSH client config files without disturbing their formatting"
)]
#[command(arg_required_else_help = true)]
struct Cli {
	/// Path to the config file (defaults to ~/.ssh/config)
	#[arg(short, long, global = true, value_name = "PATH")]
	config: Option<PathBuf>,

	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Print the config, re-rendered from the parsed tree
	Show {
		/// Print the parsed tree as JSON instead of config text
		#[arg(long)]
		json: bool,
	},
	/// Verify that parsing and re-rendering reproduces the file byte-for-byte
	Check,
	/// Replace a top-level directive and its block, or append it if absent
	Patch {
		/// Directive line to find, e.g. "Host example"
		find: String,
		/// Replacement config fragment (may span multiple lines)
		replacement: String,
		/// Print the result instead of writing the file back
		#[arg(long)]
		stdout: bool,
	},
	/// Remove a top-level directive and its block
	Delete {
		/// Directive line to find, e.g. "Host example"
		find: String,
		/// Print the result instead of writing the file back
		#[arg(long)]
		stdout: bool,
	},
}

fn main() -> ExitCode {
	match run() {
		Ok(code) => code,
		Err(e) => {
			eprintln!("error: {e:?}");
			ExitCode::FAILURE
		}
	}
}

fn run() -> Result<ExitCode> {
	let cli = Cli::parse();

	let config_path = match cli.config {
		Some(path) => path,
		None => default_config_path().context("Failed to resolve default config path")?,
	};

	match cli.command {
		Commands::Show { json } => handle_show(&config_path, json),
		Commands::Check => handle_check(&config_path),
		Commands::Patch {
			find,
			replacement,
			stdout,
		} => handle_patch(&config_path, &find, &replacement, stdout),
		Commands::Delete { find, stdout } => handle_delete(&config_path, &find, stdout),
	}
}

fn handle_show(config_path: &Path, json: bool) -> Result<ExitCode> {
	let doc = parse_config_file(config_path)
		.with_context(|| format!("Failed to load {}", config_path.display()))?;

	if json {
		let tree = serde_json::to_string_pretty(&doc).context("Failed to serialize config tree")?;
		println!("{tree}");
	} else {
		println!("{}", doc.render());
	}

	Ok(ExitCode::SUCCESS)
}

fn handle_check(config_path: &Path) -> Result<ExitCode> {
	let content = std::fs::read_to_string(config_path)
		.with_context(|| format!("Failed to read {}", config_path.display()))?;

	let rendered = Document::parse(&content).render();
	if rendered == content {
		println!("{}: round-trips byte-for-byte", config_path.display());
		Ok(ExitCode::SUCCESS)
	} else {
		eprintln!("{}: re-render differs from the file", config_path.display());
		Ok(ExitCode::FAILURE)
	}
}

fn handle_patch(config_path: &Path, find: &str, replacement: &str, stdout: bool) -> Result<ExitCode> {
	let mut doc = parse_config_file(config_path)
		.with_context(|| format!("Failed to load {}", config_path.display()))?;

	doc.patch(find, replacement)
		.with_context(|| format!("Failed to patch {find:?}"))?;

	emit(config_path, &doc, stdout, &format!("Patched {find:?}"))
}

fn handle_delete(config_path: &Path, find: &str, stdout: bool) -> Result<ExitCode> {
	let mut doc = parse_config_file(config_path)
		.with_context(|| format!("Failed to load {}", config_path.display()))?;

	doc.delete(find)
		.with_context(|| format!("Failed to delete {find:?}"))?;

	emit(config_path, &doc, stdout, &format!("Deleted {find:?}"))
}

/// Write the edited document back, or print it when `--stdout` was given.
fn emit(config_path: &Path, doc: &Document, stdout: bool, message: &str) -> Result<ExitCode> {
	if stdout {
		println!("{}", doc.render());
	} else {
		write_config_file(config_path, doc)
			.with_context(|| format!("Failed to write {}", config_path.display()))?;
		println!("{message} in {}", config_path.display());
	}

	Ok(ExitCode::SUCCESS)
}
