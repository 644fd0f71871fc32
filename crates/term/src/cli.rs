use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "overlay")]
#[command(about = "Replays overlay loading passes and prints the merged menus")]
#[command(version)]
/// Command-line arguments.
pub struct Cli {
	/// Module manifests to load, one pass each, in order
	pub manifests: Vec<PathBuf>,

	/// Load the builtin module before the manifests
	#[arg(long, short = 'b')]
	pub builtin: bool,

	/// Simulate a host whose menus only support appending
	#[arg(long)]
	pub append_only: bool,

	/// Activate these slots after loading (comma separated)
	#[arg(long, short = 'a', value_delimiter = ',')]
	pub activate: Vec<String>,

	/// Verbose logging
	#[arg(long, short = 'v')]
	pub verbose: bool,
}

impl Cli {
	/// Whether the builtin module takes part in the run.
	///
	/// Without manifests the builtin module is the only pass.
	pub fn loads_builtin(&self) -> bool {
		self.builtin || self.manifests.is_empty()
	}
}
