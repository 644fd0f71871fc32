use std::fmt;
use std::sync::Arc;

/// Zero-argument predicate deciding whether a binding may fire right now.
///
/// Expected to be free of side effects; it is evaluated synchronously on every
/// activation of its slot until an earlier binding matches.
pub type Validation = Arc<dyn Fn() -> bool + Send + Sync>;

/// Identity of an [`Action`], used to make re-registration idempotent.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ActionId {
	/// Chosen by the registrant; survives re-creating the closure on reload.
	Named(Arc<str>),
	/// Address of the shared closure; clones of one action compare equal.
	Anonymous(usize),
}

impl fmt::Display for ActionId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Named(name) => f.write_str(name),
			Self::Anonymous(addr) => write!(f, "anonymous@{addr:#x}"),
		}
	}
}

/// Alternative behavior bound to a slot.
#[derive(Clone)]
pub struct Action {
	id: ActionId,
	run: Arc<dyn Fn() + Send + Sync>,
}

impl Action {
	/// Wraps a closure; identity is the closure's allocation.
	pub fn new<F>(f: F) -> Self
	where
		F: Fn() + Send + Sync + 'static,
	{
		let run: Arc<dyn Fn() + Send + Sync> = Arc::new(f);
		let id = ActionId::Anonymous(Arc::as_ptr(&run).cast::<()>() as usize);
		Self { id, run }
	}

	/// Wraps a closure under an explicit identity.
	///
	/// Two named actions with the same name are the same action, whatever their
	/// closures.
	pub fn named<F>(name: impl Into<Arc<str>>, f: F) -> Self
	where
		F: Fn() + Send + Sync + 'static,
	{
		Self {
			id: ActionId::Named(name.into()),
			run: Arc::new(f),
		}
	}

	pub fn id(&self) -> &ActionId {
		&self.id
	}

	pub fn invoke(&self) {
		(self.run)()
	}
}

impl PartialEq for Action {
	fn eq(&self, other: &Self) -> bool {
		self.id == other.id
	}
}

impl Eq for Action {}

impl fmt::Debug for Action {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("Action").field(&self.id).finish()
	}
}
