mod cli;

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use cli::Cli;
use overlay_loader::{LoadOutcome, ModuleCopy, OverlayContext};
use overlay_menus::MemoryBackend;
use overlay_registry::{CommandKind, NativeHost};
use tracing::info;

/// Filter variable read before `RUST_LOG`.
const LOG_ENV: &str = "OVERLAY_LOG";

/// Native host that only reports what it would run.
struct TraceHost;

impl NativeHost for TraceHost {
	fn run_native(&self, kind: CommandKind, native: &str) {
		info!(%kind, native, "native command");
	}
}

fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();
	setup_tracing(cli.verbose);

	let backend = if cli.append_only { MemoryBackend::append_only() } else { MemoryBackend::new() };
	let mut ctx = OverlayContext::new(backend, Arc::new(TraceHost));

	let mut modules = Vec::new();
	if cli.loads_builtin() {
		modules.push(("builtin".to_string(), ModuleCopy::builtin()));
	}
	for path in &cli.manifests {
		let module = ModuleCopy::from_path(path).with_context(|| format!("loading {}", path.display()))?;
		modules.push((path.display().to_string(), module));
	}

	for (name, module) in &modules {
		match ctx.load(module).with_context(|| format!("installing {name}"))? {
			LoadOutcome::Installed { version, menus } => {
				println!("{name}: installed {version} (+{} entries, {} already present)", menus.inserted, menus.skipped);
			}
			LoadOutcome::AlreadyLoaded { installed, candidate } => {
				println!("{name}: skipped {candidate}, {installed} already installed");
			}
		}
	}

	println!();
	print!("{}", ctx.menus().backend().render());

	let slots: Vec<String> = ctx.command_slots().iter().map(ToString::to_string).collect();
	println!();
	println!("{} command slots: {}", slots.len(), slots.join(", "));

	for slot in &cli.activate {
		let activation = ctx.activate(slot).with_context(|| format!("activating {slot}"))?;
		println!("{slot}: {activation:?}");
	}

	Ok(())
}

/// Logs to stderr; `OVERLAY_LOG`, then `RUST_LOG`, override the default filter.
fn setup_tracing(verbose: bool) {
	use tracing_subscriber::EnvFilter;

	let directives = log_directives(verbose, |var| std::env::var(var).ok());
	let filter = EnvFilter::try_new(&directives).unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)));

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(verbose)
		.init();
}

/// First non-empty filter among `OVERLAY_LOG` and `RUST_LOG`, else the default.
fn log_directives(verbose: bool, lookup: impl Fn(&str) -> Option<String>) -> String {
	[LOG_ENV, "RUST_LOG"]
		.into_iter()
		.find_map(|var| lookup(var).filter(|value| !value.trim().is_empty()))
		.unwrap_or_else(|| default_directives(verbose).to_string())
}

fn default_directives(verbose: bool) -> &'static str {
	if verbose { "overlay_loader=debug,overlay_menus=debug,overlay_registry=debug,info" } else { "info" }
}

#[cfg(test)]
mod tests {
	use super::*;

	fn env<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
		move |name| vars.iter().find(|(var, _)| *var == name).map(|(_, value)| value.to_string())
	}

	#[test]
	fn overlay_log_takes_precedence() {
		let vars = [("OVERLAY_LOG", "overlay_menus=trace"), ("RUST_LOG", "warn")];
		assert_eq!(log_directives(false, env(&vars)), "overlay_menus=trace");
	}

	#[test]
	fn falls_back_to_rust_log_then_default() {
		assert_eq!(log_directives(false, env(&[("RUST_LOG", "warn")])), "warn");
		assert_eq!(log_directives(false, env(&[("OVERLAY_LOG", " ")])), "info");
		assert_eq!(log_directives(true, env(&[])), default_directives(true));
	}
}
