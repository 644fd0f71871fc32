use thiserror::Error;

/// Errors raised by the registration API and the version gate.
///
/// Every variant is a caller programming error: it is surfaced to the registrant
/// immediately and never retried or recovered internally.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
	/// Slot name is not part of the installed command catalog.
	#[error("unknown command slot: {0}")]
	InvalidSlot(String),
	/// Validation predicate was not supplied for the slot.
	#[error("missing or invalid validation for slot: {0}")]
	InvalidValidation(String),
	/// Action was not supplied for the slot.
	#[error("missing action for slot: {0}")]
	MissingAction(String),
	/// Version string is not `major[.minor[.patch]]` with unsigned integer components.
	#[error("invalid version string: {0:?}")]
	InvalidVersion(String),
}
