#![allow(missing_docs)]

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

mod cmd;

#[derive(Parser)]
#[command(name = "jsonsize", about = "Two-pass compact JSON encoder")]
struct Cli {
	/// Increase log verbosity (-v debug, -vv trace).
	#[arg(short, long, global = true, action = ArgAction::Count)]
	verbose: u8,
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Re-encode a JSON document compactly.
	Encode {
		/// Input file, or `-` for stdin.
		path: PathBuf,
		/// Significant digits for non-integral numbers.
		#[arg(long, default_value_t = 6)]
		float_precision: u8,
	},
	/// Report estimated and written sizes for a JSON document.
	Estimate {
		/// Input file, or `-` for stdin.
		path: PathBuf,
		/// Significant digits for non-integral numbers.
		#[arg(long, default_value_t = 6)]
		float_precision: u8,
		/// Print the report as JSON.
		#[arg(long)]
		json: bool,
	},
}

fn main() {
	let cli = Cli::parse();
	cmd::logger::init(cli.verbose);

	if let Err(err) = run(cli.command) {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run(command: Commands) -> jsonsize::json::Result<()> {
	match command {
		Commands::Encode { path, float_precision } => cmd::encode::run(path, float_precision),
		Commands::Estimate { path, float_precision, json } => cmd::estimate::run(path, float_precision, json),
	}
}
