//! # Studio UI
//!
//! Dioxus Desktop UI for Storefront Studio.
//!
//! This crate provides the content administration interface: the page
//! catalog, the page editor with SEO, visibility, attribute, and metadata
//! cards, and the reference-assignment dialog.

// ============================================================================
// Modules
// ============================================================================

pub mod app;
pub mod components;
pub mod intl;
pub mod pages;
pub mod state;

// ============================================================================
// Re-exports
// ============================================================================

// Re-export internal crates for convenience
pub use studio_core;
pub use studio_model;

// Re-export main components
pub use app::App;
pub use intl::{Intl, Locale};
pub use pages::{PageDetailsPage, PageListPage};
pub use state::{
    ADMIN_STATE, AdminState, DialogState, EditorPhase, EditorState, FetchMore, Screen,
    StatusLevel, StatusMessage,
};

// Re-export components
pub use components::{
    AppHeader, AssignReferencesDialog, Attributes, Card, CardSpacer, Checkbox,
    ConfirmDeleteDialog, DateInput, Metadata, OrganizeContent, PageHeader, PageInfo, SaveBar,
    SaveState, Select, SelectOption, SeoForm, TextArea, TextInput, Toggle, VisibilityCard,
    VisibilityMessages,
};

// ============================================================================
// Constants
// ============================================================================

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const NAME: &str = "Storefront Studio";

/// Application display title
pub const TITLE: &str = "Storefront Studio - Content Administration";

/// CSS styles for the application, included at build time
const STYLES: &str = include_str!("../../../assets/styles/main.css");

// ============================================================================
// Launch Function
// ============================================================================

/// Launch the Storefront Studio desktop application
///
/// # Example
///
/// ```rust,ignore
/// fn main() {
///     studio_ui::launch();
/// }
/// ```
pub fn launch() {
    tracing::info!("Starting {} v{}", NAME, VERSION);

    // Build custom head with embedded CSS
    let custom_head = format!(r#"<style type="text/css">{}</style>"#, STYLES);

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(
                    dioxus::desktop::WindowBuilder::new()
                        .with_title(TITLE)
                        .with_resizable(true)
                        .with_inner_size(dioxus::desktop::LogicalSize::new(1280.0, 860.0))
                        .with_min_inner_size(dioxus::desktop::LogicalSize::new(800.0, 600.0)),
                )
                .with_menu(None)
                .with_custom_head(custom_head),
        )
        .launch(App);
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert!(!VERSION.is_empty());
        assert_eq!(NAME, "Storefront Studio");
        assert!(TITLE.starts_with(NAME));
    }

    #[test]
    fn test_styles_embedded() {
        assert!(STYLES.contains(".app-container"));
        assert!(STYLES.contains(".save-bar"));
    }
}
