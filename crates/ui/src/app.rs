//! Main Application Component for Storefront Studio
//!
//! The root component renders the active screen and the app chrome. Screens
//! are presentational; the hosts here translate the global [`AdminState`]
//! into props and route every callback back into it, so the catalog only
//! changes in one place.

use dioxus::prelude::*;

use crate::components::dialogs::ConfirmDeleteDialog;
use crate::components::save_bar::SaveState;
use crate::intl::Intl;
use crate::pages::{PageDetailsPage, PageListPage};
use crate::state::{ADMIN_STATE, FetchMore, Screen, StatusLevel};
use studio_core::PageId;
use studio_model::PageDraft;

// ============================================================================
// Main App Component
// ============================================================================

/// Root application component
#[component]
pub fn App() -> Element {
    use_effect(|| {
        tracing::info!("Storefront Studio UI initialized");
    });

    let screen = ADMIN_STATE.read().screen;

    rsx! {
        div {
            class: "app-container",

            main {
                class: "app-content",
                match screen {
                    Screen::PageList => rsx! { PageListHost {} },
                    Screen::PageDetails(target) => rsx! {
                        PageDetailsHost { key: "{target:?}", target }
                    },
                }
            }

            StatusBar {}
            DeleteConfirmation {}
        }
    }
}

// ============================================================================
// Page List Host
// ============================================================================

/// Connects the page list screen to the global state
#[component]
fn PageListHost() -> Element {
    let pages = ADMIN_STATE.read().pages.clone();

    rsx! {
        PageListPage {
            pages,
            on_create: move |_| ADMIN_STATE.write().create_page(),
            on_open: move |id| ADMIN_STATE.write().open_page(id),
            on_delete: move |id| ADMIN_STATE.write().pending_delete = Some(id),
        }
    }
}

// ============================================================================
// Page Details Host
// ============================================================================

/// Connects the page details screen to the global state
#[component]
fn PageDetailsHost(target: Option<PageId>) -> Element {
    let state = ADMIN_STATE.read();
    let page = state.current_page().cloned();
    let (page_types, more_types) = state.page_types_window();
    let (reference_pages, more_references) = state.reference_pages_window(target);
    let loading = state.editor.is_loading();
    let save_state = state.save_state;
    let errors = state.errors.clone();
    let assign_references_attribute = state.editor.assign_references_attribute();
    drop(state);

    let on_submit = move |draft: PageDraft| {
        let mut state = ADMIN_STATE.write();
        state.editor.begin_save();
        state.save_state = SaveState::Loading;

        match state.submit(target, draft) {
            Ok(id) => {
                state.errors.clear();
                if target.is_none() {
                    // Creation continues as an edit session on the new page
                    state.open_page(id);
                }
                state.editor.finish_save();
                state.save_state = SaveState::Success;
                state.set_status("Page saved", StatusLevel::Success);
            }
            Err(errors) => {
                state.errors = errors;
                state.editor.finish_save();
                state.save_state = SaveState::Error;
                state.set_status("Could not save the page", StatusLevel::Error);
            }
        }
    };

    rsx! {
        PageDetailsPage {
            page,
            page_types,
            reference_pages,
            loading,
            save_state,
            errors,
            assign_references_attribute,
            references_loading: false,
            fetch_more_references: FetchMore {
                has_more: more_references,
                loading: false,
            },
            fetch_more_page_types: FetchMore {
                has_more: more_types,
                loading: false,
            },
            intl: Intl::default(),
            on_back: move |_| ADMIN_STATE.write().navigate(Screen::PageList),
            on_remove: move |_| {
                if let Some(id) = target {
                    ADMIN_STATE.write().pending_delete = Some(id);
                }
            },
            on_submit,
            on_assign_reference_click: move |attribute| {
                let mut state = ADMIN_STATE.write();
                state.search_reference_pages(String::new());
                state.editor.open_assign_references(attribute);
            },
            on_close_dialog: move |_| ADMIN_STATE.write().editor.close_dialog(),
            on_reference_search: move |query| {
                ADMIN_STATE.write().search_reference_pages(query)
            },
            on_reference_fetch_more: move |_| {
                ADMIN_STATE.write().fetch_more_reference_pages()
            },
            on_page_type_search: move |query| ADMIN_STATE.write().search_page_types(query),
            on_page_type_fetch_more: move |_| ADMIN_STATE.write().fetch_more_page_types(),
        }
    }
}

// ============================================================================
// Delete Confirmation
// ============================================================================

/// Renders the delete confirmation dialog while a delete is pending
#[component]
fn DeleteConfirmation() -> Element {
    let pending = ADMIN_STATE.read().pending_delete;
    let Some(id) = pending else {
        return rsx! {};
    };

    let title = ADMIN_STATE
        .read()
        .pages
        .iter()
        .find(|p| p.id == id)
        .map(|p| p.title.clone())
        .unwrap_or_else(|| "this page".to_string());

    rsx! {
        ConfirmDeleteDialog {
            title: "Delete page",
            message: format!("Are you sure you want to delete \"{title}\"? This cannot be undone."),
            on_confirm: move |_| {
                let mut state = ADMIN_STATE.write();
                state.pending_delete = None;
                if state.delete_page(id) {
                    tracing::info!("deleted page {id}");
                    state.navigate(Screen::PageList);
                    state.set_status("Page deleted", StatusLevel::Success);
                } else {
                    state.set_status("The page no longer exists", StatusLevel::Warning);
                }
            },
            on_cancel: move |_| ADMIN_STATE.write().pending_delete = None,
        }
    }
}

// ============================================================================
// Status Bar
// ============================================================================

/// Bottom status bar; click dismisses the current message
#[component]
fn StatusBar() -> Element {
    let status = ADMIN_STATE.read().status.clone();

    rsx! {
        footer {
            class: "status-bar",

            if let Some(message) = status {
                {
                    let level_class = match message.level {
                        StatusLevel::Info => "status-info",
                        StatusLevel::Success => "status-success",
                        StatusLevel::Warning => "status-warning",
                        StatusLevel::Error => "status-error",
                    };
                    rsx! {
                        button {
                            class: "status-message {level_class}",
                            r#type: "button",
                            onclick: move |_| ADMIN_STATE.write().clear_status(),
                            "{message.text}"
                        }
                    }
                }
            } else {
                span { class: "status-idle", "Ready" }
            }
        }
    }
}
