//! Application State Management for Storefront Studio
//!
//! Centralized state built on Dioxus Signals. The global [`AdminState`] owns
//! the page catalog, navigation, search/pagination windows for the pickers,
//! and the editor session state. The editor's loading/saving and dialog
//! conditions are explicit tagged enums ([`EditorPhase`], [`DialogState`])
//! with named transitions rather than ad hoc boolean pairs.

use crate::components::save_bar::SaveState;
use crate::components::seo_form::slugify;
use dioxus::prelude::*;
use studio_core::{AttributeId, PageId, PageValidationError, Validatable};
use studio_model::{
    AttributeDefinition, AttributeKind, Page, PageDraft, PageType, ReferencePage,
    ValidationContext,
};

/// Page size for the picker pagination windows
pub const FETCH_WINDOW: usize = 5;

// ============================================================================
// Navigation
// ============================================================================

/// Application screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Page catalog listing
    #[default]
    PageList,
    /// Page edit session; `None` creates a new page
    PageDetails(Option<PageId>),
}

impl Screen {
    /// Get the display name for this screen
    pub fn display_name(&self) -> &'static str {
        match self {
            Screen::PageList => "Pages",
            Screen::PageDetails(None) => "Create Page",
            Screen::PageDetails(Some(_)) => "Edit Page",
        }
    }
}

// ============================================================================
// Editor State Machine
// ============================================================================

/// What the edit session is currently doing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorPhase {
    /// Accepting input
    #[default]
    Idle,
    /// Initial data is being loaded; inputs are disabled
    Loading,
    /// A submit is in flight; the save bar shows progress
    Saving,
}

/// Which dialog, if any, is open over the editor
///
/// A single slot holds the open dialog, so at most one can be open at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogState {
    #[default]
    Closed,
    /// The reference-assignment dialog, targeting one attribute
    AssignReferences(AttributeId),
}

/// Combined editor session state with explicit transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EditorState {
    pub phase: EditorPhase,
    pub dialog: DialogState,
}

impl EditorState {
    /// Create a fresh idle state
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether inputs should be disabled
    pub fn is_loading(&self) -> bool {
        self.phase == EditorPhase::Loading
    }

    /// Whether a submit is in flight
    pub fn is_saving(&self) -> bool {
        self.phase == EditorPhase::Saving
    }

    /// The attribute targeted by the assignment dialog, if open
    pub fn assign_references_attribute(&self) -> Option<AttributeId> {
        match self.dialog {
            DialogState::AssignReferences(id) => Some(id),
            DialogState::Closed => None,
        }
    }

    /// Whether any dialog is open
    pub fn dialog_open(&self) -> bool {
        self.dialog != DialogState::Closed
    }

    pub fn begin_loading(&mut self) {
        self.phase = EditorPhase::Loading;
    }

    pub fn finish_loading(&mut self) {
        if self.phase == EditorPhase::Loading {
            self.phase = EditorPhase::Idle;
        }
    }

    pub fn begin_save(&mut self) {
        tracing::debug!("editor: begin save");
        self.phase = EditorPhase::Saving;
    }

    /// Save finished, successfully or not
    pub fn finish_save(&mut self) {
        if self.phase == EditorPhase::Saving {
            self.phase = EditorPhase::Idle;
        }
    }

    /// Open the reference-assignment dialog for an attribute
    ///
    /// Opening while another target is set retargets the single dialog slot.
    pub fn open_assign_references(&mut self, attribute: AttributeId) {
        tracing::debug!("editor: open assign-references dialog for {attribute}");
        self.dialog = DialogState::AssignReferences(attribute);
    }

    /// Close whatever dialog is open
    pub fn close_dialog(&mut self) {
        self.dialog = DialogState::Closed;
    }
}

// ============================================================================
// Status Bar
// ============================================================================

/// Status message severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// Status message for the status bar
#[derive(Debug, Clone, PartialEq)]
pub struct StatusMessage {
    pub text: String,
    pub level: StatusLevel,
}

// ============================================================================
// Fetch-More Descriptor
// ============================================================================

/// Pagination descriptor handed to pickers and dialogs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FetchMore {
    /// Whether more candidates exist beyond the current window
    pub has_more: bool,
    /// Whether a fetch is currently running
    pub loading: bool,
}

// ============================================================================
// Application State
// ============================================================================

/// Main application state container
#[derive(Debug, Clone)]
pub struct AdminState {
    /// Page catalog, insertion ordered
    pub pages: Vec<Page>,
    /// Available page types
    pub page_types: Vec<PageType>,
    /// Currently active screen
    pub screen: Screen,
    /// Editor session state
    pub editor: EditorState,
    /// Field-level errors from the last submit
    pub errors: Vec<PageValidationError>,
    /// Save bar transition state
    pub save_state: SaveState,
    /// Page pending delete confirmation
    pub pending_delete: Option<PageId>,
    /// Status bar message
    pub status: Option<StatusMessage>,
    /// Search query over page types
    pub page_type_query: String,
    /// Search query over reference candidates
    pub reference_query: String,
    /// Visible window into the page type list
    pub visible_page_types: usize,
    /// Visible window into the reference candidate list
    pub visible_reference_pages: usize,
}

impl Default for AdminState {
    fn default() -> Self {
        Self {
            pages: Vec::new(),
            page_types: Vec::new(),
            screen: Screen::PageList,
            editor: EditorState::new(),
            errors: Vec::new(),
            save_state: SaveState::Default,
            pending_delete: None,
            status: None,
            page_type_query: String::new(),
            reference_query: String::new(),
            visible_page_types: FETCH_WINDOW,
            visible_reference_pages: FETCH_WINDOW,
        }
    }
}

impl AdminState {
    /// Create empty application state
    pub fn new() -> Self {
        Self::default()
    }

    /// Create state seeded with a demo catalog
    pub fn with_sample_data() -> Self {
        let mut state = Self::new();

        let season = AttributeDefinition::new("Season", "season", AttributeKind::Dropdown)
            .with_choices(vec![
                "spring".into(),
                "summer".into(),
                "autumn".into(),
                "winter".into(),
            ]);
        let tags = AttributeDefinition::new("Tags", "tags", AttributeKind::Multiselect)
            .with_choices(vec!["featured".into(), "sale".into(), "new".into()]);
        let banner = AttributeDefinition::new("Banner", "banner", AttributeKind::File);
        let related =
            AttributeDefinition::new("Related pages", "related-pages", AttributeKind::Reference);

        let landing = PageType::new("Landing page")
            .with_attributes(vec![season, tags, banner, related]);
        let article = PageType::new("Help article");
        state.page_types = vec![landing.clone(), article];

        for (title, slug) in [
            ("About Us", "about-us"),
            ("Shipping & Returns", "shipping-returns"),
            ("Summer Sale", "summer-sale"),
            ("Size Guide", "size-guide"),
            ("Contact", "contact"),
            ("Careers", "careers"),
            ("Press Kit", "press-kit"),
        ] {
            let mut page = Page::new(title, slug).with_page_type(landing.clone());
            page.is_published = true;
            state.pages.push(page);
        }

        state
    }

    // ------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------

    /// Navigate to a screen, resetting the edit-session scratch state
    pub fn navigate(&mut self, screen: Screen) {
        self.screen = screen;
        self.editor = EditorState::new();
        self.errors.clear();
        self.save_state = SaveState::Default;
        self.pending_delete = None;
        self.page_type_query.clear();
        self.reference_query.clear();
        self.visible_page_types = FETCH_WINDOW;
        self.visible_reference_pages = FETCH_WINDOW;
    }

    /// Open an existing page for editing
    pub fn open_page(&mut self, id: PageId) {
        self.navigate(Screen::PageDetails(Some(id)));
    }

    /// Start a page creation session
    pub fn create_page(&mut self) {
        self.navigate(Screen::PageDetails(None));
    }

    /// The page currently being edited, if the screen targets one
    pub fn current_page(&self) -> Option<&Page> {
        match self.screen {
            Screen::PageDetails(Some(id)) => self.pages.iter().find(|p| p.id == id),
            _ => None,
        }
    }

    // ------------------------------------------------------------------
    // Picker windows
    // ------------------------------------------------------------------

    /// Page types matching the current query, limited to the visible window
    pub fn page_types_window(&self) -> (Vec<PageType>, bool) {
        let matching: Vec<PageType> = self
            .page_types
            .iter()
            .filter(|t| matches_query(&t.name, &self.page_type_query))
            .cloned()
            .collect();
        let has_more = matching.len() > self.visible_page_types;
        let window = matching.into_iter().take(self.visible_page_types).collect();
        (window, has_more)
    }

    /// Reference candidates matching the query, excluding the edited page
    pub fn reference_pages_window(&self, exclude: Option<PageId>) -> (Vec<ReferencePage>, bool) {
        let matching: Vec<ReferencePage> = self
            .pages
            .iter()
            .filter(|p| Some(p.id) != exclude)
            .filter(|p| matches_query(&p.title, &self.reference_query))
            .map(Page::as_reference)
            .collect();
        let has_more = matching.len() > self.visible_reference_pages;
        let window = matching
            .into_iter()
            .take(self.visible_reference_pages)
            .collect();
        (window, has_more)
    }

    /// Replace the page type query and reset its window
    pub fn search_page_types(&mut self, query: String) {
        self.page_type_query = query;
        self.visible_page_types = FETCH_WINDOW;
    }

    /// Replace the reference query and reset its window
    pub fn search_reference_pages(&mut self, query: String) {
        self.reference_query = query;
        self.visible_reference_pages = FETCH_WINDOW;
    }

    /// Grow the page type window
    pub fn fetch_more_page_types(&mut self) {
        self.visible_page_types += FETCH_WINDOW;
    }

    /// Grow the reference candidate window
    pub fn fetch_more_reference_pages(&mut self) {
        self.visible_reference_pages += FETCH_WINDOW;
    }

    // ------------------------------------------------------------------
    // Submit / delete
    // ------------------------------------------------------------------

    /// Validate and apply a submitted draft
    ///
    /// On success the catalog is updated and the saved page id returned; on
    /// failure the field-level errors are returned for pass-through display.
    pub fn submit(
        &mut self,
        target: Option<PageId>,
        mut draft: PageDraft,
    ) -> Result<PageId, Vec<PageValidationError>> {
        let ctx = ValidationContext {
            allow_empty_slug: target.is_none(),
        };

        let mut errors = draft.validate(&ctx);

        // Creation may leave the slug empty; derive it from the title
        if target.is_none() && draft.slug.is_empty() {
            draft.slug = slugify(&draft.title);
        }

        if self
            .pages
            .iter()
            .any(|p| p.slug == draft.slug && Some(p.id) != target)
        {
            errors.push(PageValidationError::new(
                studio_core::PageField::Slug,
                studio_core::ErrorCode::NotUnique,
                format!("Slug '{}' is already in use", draft.slug),
            ));
        }

        if !errors.is_empty() {
            tracing::warn!("page submit rejected with {} error(s)", errors.len());
            return Err(errors);
        }

        let id = match target {
            Some(id) => {
                let Some(page) = self.pages.iter_mut().find(|p| p.id == id) else {
                    return Err(vec![PageValidationError::new(
                        studio_core::PageField::Title,
                        studio_core::ErrorCode::NotFound,
                        "The edited page no longer exists",
                    )]);
                };
                apply_draft(page, &draft);
                page.touch();
                id
            }
            None => {
                let mut page = Page::new(draft.title.clone(), draft.slug.clone());
                apply_draft(&mut page, &draft);
                let id = page.id;
                self.pages.push(page);
                id
            }
        };

        tracing::info!("saved page {id}");
        Ok(id)
    }

    /// Remove a page from the catalog
    pub fn delete_page(&mut self, id: PageId) -> bool {
        let before = self.pages.len();
        self.pages.retain(|p| p.id != id);
        self.pages.len() != before
    }

    // ------------------------------------------------------------------
    // Status
    // ------------------------------------------------------------------

    /// Set the status bar message
    pub fn set_status(&mut self, text: impl Into<String>, level: StatusLevel) {
        self.status = Some(StatusMessage {
            text: text.into(),
            level,
        });
    }

    /// Clear the status bar message
    pub fn clear_status(&mut self) {
        self.status = None;
    }
}

/// Copy a validated draft's fields onto a page
fn apply_draft(page: &mut Page, draft: &PageDraft) {
    page.title = draft.title.clone();
    page.slug = draft.slug.clone();
    page.content = draft.content.clone();
    page.seo_title = draft.seo_title_opt();
    page.seo_description = draft.seo_description_opt();
    page.is_published = draft.is_published;
    page.publication_date = draft.publication_date;
    page.attributes = draft.attributes.clone();
    page.metadata = draft.metadata.clone();
    page.private_metadata = draft.private_metadata.clone();
    // The type only moves from unset to set; it is locked afterwards
    if page.page_type.is_none() {
        page.page_type = draft.page_type.clone();
    }
}

/// Case-insensitive substring match; an empty query matches everything
fn matches_query(haystack: &str, query: &str) -> bool {
    query.is_empty() || haystack.to_lowercase().contains(&query.to_lowercase())
}

// ============================================================================
// Global State
// ============================================================================

/// Global application state signal
pub static ADMIN_STATE: GlobalSignal<AdminState> = Signal::global(AdminState::with_sample_data);

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use studio_model::PageFormState;

    #[test]
    fn test_editor_phase_transitions() {
        let mut editor = EditorState::new();
        assert!(!editor.is_loading());
        assert!(!editor.is_saving());

        editor.begin_loading();
        assert!(editor.is_loading());
        editor.finish_loading();
        assert_eq!(editor.phase, EditorPhase::Idle);

        editor.begin_save();
        assert!(editor.is_saving());
        // finish_loading must not cancel an in-flight save
        editor.finish_loading();
        assert!(editor.is_saving());
        editor.finish_save();
        assert_eq!(editor.phase, EditorPhase::Idle);
    }

    #[test]
    fn test_dialog_slot_holds_one_target() {
        let mut editor = EditorState::new();
        assert!(!editor.dialog_open());
        assert_eq!(editor.assign_references_attribute(), None);

        let a = uuid::Uuid::new_v4();
        let b = uuid::Uuid::new_v4();
        editor.open_assign_references(a);
        assert!(editor.dialog_open());
        assert_eq!(editor.assign_references_attribute(), Some(a));

        editor.open_assign_references(b);
        assert_eq!(editor.assign_references_attribute(), Some(b));

        editor.close_dialog();
        assert!(!editor.dialog_open());
    }

    #[test]
    fn test_submit_creates_page_with_derived_slug() {
        let mut state = AdminState::new();
        let mut form = PageFormState::new(None);
        form.change_title("Gift Cards".into());

        let id = state.submit(None, form.submit_data()).unwrap();
        let page = state.pages.iter().find(|p| p.id == id).unwrap();
        assert_eq!(page.slug, "gift-cards");
    }

    #[test]
    fn test_submit_rejects_duplicate_slug() {
        let mut state = AdminState::new();
        state.pages.push(Page::new("About", "about"));

        let mut form = PageFormState::new(None);
        form.change_title("About".into());
        form.change_slug("about".into());

        let errors = state.submit(None, form.submit_data()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.code == studio_core::ErrorCode::NotUnique));
    }

    #[test]
    fn test_submit_updates_existing_page_and_keeps_type_locked() {
        let mut state = AdminState::with_sample_data();
        let id = state.pages[0].id;
        let original_type = state.pages[0].page_type.clone();

        let page = state.pages[0].clone();
        let mut form = PageFormState::new(Some(&page));
        form.change_title("About the Shop".into());
        form.change_seo_title("About".into());

        let saved = state.submit(Some(id), form.submit_data()).unwrap();
        assert_eq!(saved, id);

        let page = state.pages.iter().find(|p| p.id == id).unwrap();
        assert_eq!(page.title, "About the Shop");
        assert_eq!(page.seo_title.as_deref(), Some("About"));
        assert_eq!(page.page_type, original_type);
    }

    #[test]
    fn test_reference_window_excludes_edited_page() {
        let state = AdminState::with_sample_data();
        let edited = state.pages[0].id;

        let (window, _) = state.reference_pages_window(Some(edited));
        assert!(window.iter().all(|r| r.id != edited));
    }

    #[test]
    fn test_fetch_more_grows_window() {
        let mut state = AdminState::with_sample_data();
        let (window, has_more) = state.reference_pages_window(None);
        assert_eq!(window.len(), FETCH_WINDOW);
        assert!(has_more);

        state.fetch_more_reference_pages();
        let (window, has_more) = state.reference_pages_window(None);
        assert_eq!(window.len(), state.pages.len());
        assert!(!has_more);
    }

    #[test]
    fn test_search_filters_and_resets_window() {
        let mut state = AdminState::with_sample_data();
        state.fetch_more_reference_pages();
        state.search_reference_pages("sale".into());

        assert_eq!(state.visible_reference_pages, FETCH_WINDOW);
        let (window, has_more) = state.reference_pages_window(None);
        assert_eq!(window.len(), 1);
        assert_eq!(window[0].title, "Summer Sale");
        assert!(!has_more);
    }

    #[test]
    fn test_navigate_resets_session_state() {
        let mut state = AdminState::with_sample_data();
        let id = state.pages[0].id;
        state.open_page(id);
        state.editor.open_assign_references(uuid::Uuid::new_v4());
        state.search_reference_pages("sale".into());

        state.navigate(Screen::PageList);
        assert!(!state.editor.dialog_open());
        assert!(state.reference_query.is_empty());
        assert_eq!(state.current_page(), None);
    }

    #[test]
    fn test_delete_page() {
        let mut state = AdminState::with_sample_data();
        let id = state.pages[0].id;
        assert!(state.delete_page(id));
        assert!(!state.delete_page(id));
    }
}
