//! UI components
//!
//! Section cards, form inputs, dialogs, and chrome shared by the screens
//! under `pages`.

pub mod attributes;
pub mod card;
pub mod dialogs;
pub mod header;
pub mod inputs;
pub mod metadata;
pub mod organize_content;
pub mod page_info;
pub mod save_bar;
pub mod seo_form;
pub mod visibility_card;

pub use attributes::Attributes;
pub use card::{Card, CardSpacer};
pub use dialogs::{AssignReferencesDialog, ConfirmDeleteDialog};
pub use header::{AppHeader, PageHeader};
pub use inputs::{Checkbox, DateInput, Select, SelectOption, TextArea, TextInput, Toggle};
pub use metadata::Metadata;
pub use organize_content::OrganizeContent;
pub use page_info::PageInfo;
pub use save_bar::{SaveBar, SaveState};
pub use seo_form::{SeoForm, slugify};
pub use visibility_card::{VisibilityCard, VisibilityMessages};
