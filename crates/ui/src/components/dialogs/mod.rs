//! Modal dialogs

pub mod assign_references;
pub mod confirm_delete;

pub use assign_references::AssignReferencesDialog;
pub use confirm_delete::ConfirmDeleteDialog;
