//! Version gate deciding which bundled copy of the registry installs itself.
//!
//! Every extension may ship its own copy of this crate; the newest copy loaded
//! into the host wins and older copies skip their installation entirely.

use std::fmt;
use std::str::FromStr;

use crate::RegistryError;

/// Version of this copy of the crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Numeric `major.minor.patch` triple, ordered component by component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Version {
	pub major: u32,
	pub minor: u32,
	pub patch: u32,
}

impl Version {
	pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
		Self { major, minor, patch }
	}

	/// Version this crate was compiled as.
	pub fn current() -> Self {
		Self::new(
			env!("CARGO_PKG_VERSION_MAJOR").parse().unwrap_or(0),
			env!("CARGO_PKG_VERSION_MINOR").parse().unwrap_or(0),
			env!("CARGO_PKG_VERSION_PATCH").parse().unwrap_or(0),
		)
	}

	/// Parses `major[.minor[.patch]]`; missing components are 0.
	///
	/// A leading `v` and surrounding whitespace are accepted.
	pub fn parse(input: &str) -> Result<Self, RegistryError> {
		let invalid = || RegistryError::InvalidVersion(input.to_string());
		let trimmed = input.trim();
		let trimmed = trimmed.strip_prefix('v').unwrap_or(trimmed);
		if trimmed.is_empty() {
			return Err(invalid());
		}

		let mut parts = [0u32; 3];
		let mut components = trimmed.split('.');
		for slot in &mut parts {
			match components.next() {
				Some(component) => *slot = parse_component(component).ok_or_else(invalid)?,
				None => break,
			}
		}
		if components.next().is_some() {
			return Err(invalid());
		}

		let [major, minor, patch] = parts;
		Ok(Self::new(major, minor, patch))
	}

	/// True iff `self` is strictly newer than `other`.
	pub fn is_newer_than(self, other: Self) -> bool {
		self > other
	}
}

fn parse_component(component: &str) -> Option<u32> {
	if component.is_empty() || !component.bytes().all(|b| b.is_ascii_digit()) {
		return None;
	}
	component.parse().ok()
}

impl FromStr for Version {
	type Err = RegistryError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::parse(s)
	}
}

impl fmt::Display for Version {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
	}
}

/// True iff this copy's [`VERSION`] is strictly newer than `candidate`.
pub fn newer_than(candidate: &str) -> Result<bool, RegistryError> {
	Ok(Version::current().is_newer_than(Version::parse(candidate)?))
}

#[cfg(test)]
mod tests;
