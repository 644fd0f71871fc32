/// Declares a static table of [`CommandSpec`](crate::CommandSpec)s.
///
/// # Example
///
/// ```ignore
/// commands!(pub static TOOLS = {
///     Tool move_tool => "Move", "tool.move";
///     Action undo => "Undo", "edit.undo";
/// });
/// ```
macro_rules! commands {
	($vis:vis static $table:ident = {
		$( $kind:ident $slot:ident => $label:literal, $native:literal; )*
	}) => {
		$vis static $table: &[$crate::CommandSpec] = &[
			$(
				$crate::CommandSpec::new_static(
					stringify!($slot),
					$label,
					$crate::CommandKind::$kind,
					$native,
				),
			)*
		];
	};
}

pub(crate) use commands;
