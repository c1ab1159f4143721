//! Page details screen
//!
//! The edit view for one page. It owns the draft form state, derives its
//! presentation from the props (header title, delete visibility, type
//! lock, dialog visibility), and hands every outcome back through the
//! callbacks. The screen never touches the catalog itself.

use crate::components::{
    AppHeader, AssignReferencesDialog, Attributes, CardSpacer, Metadata, OrganizeContent,
    PageHeader, PageInfo, SaveBar, SaveState, SeoForm, VisibilityCard, VisibilityMessages,
};
use crate::intl::{Intl, messages};
use crate::state::FetchMore;
use dioxus::prelude::*;
use studio_core::{AttributeId, PageId, PageValidationError};
use studio_model::{
    Page, PageDraft, PageFormState, PageType, ReferencePage, can_change_page_type,
    merge_reference_values, reference_values_from_attributes,
};

/// Properties for PageDetailsPage component
#[derive(Props, Clone, PartialEq)]
pub struct PageDetailsPageProps {
    /// The page being edited; `None` while loading or creating
    #[props(default)]
    pub page: Option<Page>,

    /// Content type window for the organization card
    #[props(default)]
    pub page_types: Vec<PageType>,

    /// Reference candidate window for chips and the assignment dialog
    #[props(default)]
    pub reference_pages: Vec<ReferencePage>,

    /// Whether initial data is still loading; disables all inputs
    #[props(default = false)]
    pub loading: bool,

    /// Outcome of the last submit, reflected by the save bar
    #[props(default)]
    pub save_state: SaveState,

    /// Field-level errors from the last submit
    #[props(default)]
    pub errors: Vec<PageValidationError>,

    /// Attribute targeted by the assignment dialog; `Some` opens it
    #[props(default)]
    pub assign_references_attribute: Option<AttributeId>,

    /// Whether a reference candidate fetch is in flight
    #[props(default = false)]
    pub references_loading: bool,

    /// Pagination state for the reference candidate window
    #[props(default)]
    pub fetch_more_references: FetchMore,

    /// Pagination state for the content type window
    #[props(default)]
    pub fetch_more_page_types: FetchMore,

    /// Message formatter for the active locale
    #[props(default)]
    pub intl: Intl,

    /// Back navigation handler
    #[props(default)]
    pub on_back: EventHandler<()>,

    /// Delete handler; only reachable for an existing page
    #[props(default)]
    pub on_remove: EventHandler<()>,

    /// Submit handler, called with the draft to persist
    #[props(default)]
    pub on_submit: EventHandler<PageDraft>,

    /// Assign-references button handler
    #[props(default)]
    pub on_assign_reference_click: EventHandler<AttributeId>,

    /// Dialog close handler
    #[props(default)]
    pub on_close_dialog: EventHandler<()>,

    /// Reference candidate search handler
    #[props(default)]
    pub on_reference_search: EventHandler<String>,

    /// Reference candidate load-more handler
    #[props(default)]
    pub on_reference_fetch_more: EventHandler<()>,

    /// Content type search handler
    #[props(default)]
    pub on_page_type_search: EventHandler<String>,

    /// Content type load-more handler
    #[props(default)]
    pub on_page_type_fetch_more: EventHandler<()>,
}

/// Page edit screen
#[component]
pub fn PageDetailsPage(props: PageDetailsPageProps) -> Element {
    let mut form = use_signal(|| PageFormState::new(props.page.as_ref()));
    let mut seeded_from = use_signal(|| props.page.clone());

    // Reseed when the page prop itself changes (load completes, save lands)
    if *seeded_from.peek() != props.page {
        seeded_from.set(props.page.clone());
        form.set(PageFormState::new(props.page.as_ref()));
    }

    let page_exists = props.page.is_some();
    let can_change_type = can_change_page_type(props.page.as_ref());
    let allow_empty_slug = !page_exists;

    let header_title = match &props.page {
        Some(page) => page.title.clone(),
        None => props
            .intl
            .format_message(messages::CREATE_PAGE, "Create Page"),
    };

    let draft = form.read().draft().clone();
    let (show_delete, save_disabled) =
        save_bar_flags(page_exists, props.loading, form.read().has_changed());

    let visibility_messages = visibility_messages(&props.intl, &draft);
    let seo_helper = props.intl.format_message(
        messages::SEO_HELPER,
        "Add search engine title and description to make this page easier to find",
    );

    let dialog_attribute = props.assign_references_attribute;
    let on_close_dialog = props.on_close_dialog;
    let on_submit = props.on_submit;

    let page_types_for_select = props.page_types.clone();

    rsx! {
        div {
            class: "page-details",

            AppHeader {
                section: props.intl.format_message(messages::SECTION_PAGES, "Pages"),
                on_back: move |_| props.on_back.call(()),
            }

            PageHeader { title: header_title }

            div {
                class: "page-details-columns",

                div {
                    class: "page-details-main",

                    PageInfo {
                        title: draft.title.clone(),
                        content: draft.content.clone(),
                        disabled: props.loading,
                        errors: props.errors.clone(),
                        on_title_change: move |value| form.write().change_title(value),
                        on_content_change: move |value| form.write().change_content(value),
                    }

                    CardSpacer {}

                    SeoForm {
                        title: draft.seo_title.clone(),
                        description: draft.seo_description.clone(),
                        slug: draft.slug.clone(),
                        title_placeholder: draft.title.clone(),
                        slug_placeholder: draft.title.clone(),
                        helper_text: seo_helper,
                        allow_empty_slug,
                        disabled: props.loading,
                        errors: props.errors.clone(),
                        on_title_change: move |value| form.write().change_seo_title(value),
                        on_description_change: move |value| {
                            form.write().change_seo_description(value)
                        },
                        on_slug_change: move |value| form.write().change_slug(value),
                    }

                    if !draft.attributes.is_empty() {
                        CardSpacer {}

                        Attributes {
                            attributes: draft.attributes.clone(),
                            reference_pages: props.reference_pages.clone(),
                            disabled: props.loading,
                            errors: props.errors.clone(),
                            on_change: move |(attribute, choice)| {
                                form.write().select_attribute(attribute, choice)
                            },
                            on_multi_change: move |(attribute, choice)| {
                                form.write().select_attribute_multi(attribute, choice)
                            },
                            on_file_change: move |(attribute, file)| {
                                form.write().select_attribute_file(attribute, file)
                            },
                            on_references_remove: move |(attribute, page)| {
                                form.write().remove_attribute_reference(attribute, page)
                            },
                            on_references_add_click: move |attribute| {
                                props.on_assign_reference_click.call(attribute)
                            },
                        }
                    }

                    CardSpacer {}

                    Metadata {
                        metadata: draft.metadata.clone(),
                        private_metadata: draft.private_metadata.clone(),
                        disabled: props.loading,
                        on_add: move |kind| form.write().add_metadata(kind),
                        on_change: move |(kind, index, key, value)| {
                            form.write().update_metadata(kind, index, key, value)
                        },
                        on_remove: move |(kind, index)| form.write().remove_metadata(kind, index),
                    }
                }

                div {
                    class: "page-details-side",

                    VisibilityCard {
                        is_published: draft.is_published,
                        publication_date: draft.publication_date,
                        messages: visibility_messages,
                        disabled: props.loading,
                        errors: props.errors.clone(),
                        on_published_change: move |value| form.write().change_is_published(value),
                        on_date_change: move |value| form.write().change_publication_date(value),
                    }

                    CardSpacer {}

                    OrganizeContent {
                        page_type: draft.page_type.clone(),
                        page_types: props.page_types.clone(),
                        can_change_type,
                        fetch_more: props.fetch_more_page_types,
                        disabled: props.loading,
                        errors: props.errors.clone(),
                        on_page_type_change: move |id| {
                            if let Some(selected) =
                                page_types_for_select.iter().find(|t| t.id == id)
                            {
                                form.write().select_page_type(selected.clone());
                            }
                        },
                        on_search: move |query| props.on_page_type_search.call(query),
                        on_fetch_more: move |_| props.on_page_type_fetch_more.call(()),
                    }
                }
            }

            SaveBar {
                disabled: save_disabled,
                state: props.save_state,
                show_delete,
                on_cancel: move |_| props.on_back.call(()),
                on_delete: move |_| props.on_remove.call(()),
                on_save: move |_| on_submit.call(form.read().submit_data()),
            }

            if let Some(attribute) = dialog_attribute {
                AssignReferencesDialog {
                    pre_selected: reference_values_from_attributes(
                        attribute,
                        &form.read().draft().attributes,
                        &props.reference_pages,
                    ),
                    candidates: props.reference_pages.clone(),
                    loading: props.references_loading,
                    fetch_more: props.fetch_more_references,
                    on_fetch: move |query| props.on_reference_search.call(query),
                    on_fetch_more: move |_| props.on_reference_fetch_more.call(()),
                    on_close: move |_| on_close_dialog.call(()),
                    on_submit: move |selected: Vec<PageId>| {
                        let merged = {
                            let state = form.read();
                            merge_reference_values(attribute, &selected, &state.draft().attributes)
                        };
                        form.write().select_attribute_references(attribute, merged);
                        on_close_dialog.call(());
                    },
                }
            }
        }
    }
}

/// Derive the save bar's gating from the session state
///
/// Delete is only reachable for an existing page; save is disabled while
/// the initial data loads and while the draft matches its snapshot.
fn save_bar_flags(page_exists: bool, loading: bool, has_changed: bool) -> (bool, bool) {
    let show_delete = page_exists;
    let save_disabled = loading || !has_changed;
    (show_delete, save_disabled)
}

/// Build the visibility card's status strings for the current draft
fn visibility_messages(intl: &Intl, draft: &PageDraft) -> VisibilityMessages {
    let visible_label = match draft.publication_date {
        Some(date) if draft.is_published => intl.visible_from_message(date),
        _ => intl.format_message(messages::VISIBLE_LABEL, "Visible"),
    };

    VisibilityMessages {
        visible_label,
        hidden_label: intl.format_message(messages::HIDDEN_LABEL, "Hidden"),
        hidden_second_label: draft.publication_date.map(|d| intl.visible_from_message(d)),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intl::Locale;
    use chrono::NaiveDate;

    #[test]
    fn test_visibility_messages_without_date() {
        let intl = Intl::new(Locale::En);
        let draft = PageDraft::default();

        let messages = visibility_messages(&intl, &draft);
        assert_eq!(messages.visible_label, "Visible");
        assert_eq!(messages.hidden_label, "Hidden");
        assert_eq!(messages.hidden_second_label, None);
    }

    #[test]
    fn test_visibility_messages_with_scheduled_date() {
        let intl = Intl::new(Locale::En);
        let mut draft = PageDraft::default();
        draft.publication_date = NaiveDate::from_ymd_opt(2026, 3, 7);

        let messages = visibility_messages(&intl, &draft);
        assert_eq!(
            messages.hidden_second_label.as_deref(),
            Some("will be visible from 03/07/2026")
        );

        draft.is_published = true;
        let messages = visibility_messages(&intl, &draft);
        assert_eq!(messages.visible_label, "will be visible from 03/07/2026");
    }

    #[test]
    fn test_delete_only_shown_for_existing_page() {
        let (show_delete, _) = save_bar_flags(true, false, false);
        assert!(show_delete);

        let (show_delete, _) = save_bar_flags(false, false, true);
        assert!(!show_delete);
    }

    #[test]
    fn test_save_disabled_while_loading_or_unchanged() {
        // Untouched draft keeps save disabled
        let (_, save_disabled) = save_bar_flags(true, false, false);
        assert!(save_disabled);

        // An edit enables save
        let (_, save_disabled) = save_bar_flags(true, false, true);
        assert!(!save_disabled);

        // Loading wins even with pending edits
        let (_, save_disabled) = save_bar_flags(true, true, true);
        assert!(save_disabled);

        let (_, save_disabled) = save_bar_flags(false, true, false);
        assert!(save_disabled);
    }

    #[test]
    fn test_header_title_sources() {
        // Mirrors the header derivation: page title when editing, the
        // localized create message otherwise.
        let intl = Intl::new(Locale::En);
        let page = Page::new("About Us", "about-us");

        let existing = Some(&page);
        let title = match existing {
            Some(p) => p.title.clone(),
            None => intl.format_message(messages::CREATE_PAGE, "Create Page"),
        };
        assert_eq!(title, "About Us");

        let missing: Option<&Page> = None;
        let title = match missing {
            Some(p) => p.title.clone(),
            None => intl.format_message(messages::CREATE_PAGE, "Create Page"),
        };
        assert_eq!(title, "Create Page");
    }
}
