//! Page list screen
//!
//! Catalog table with title, slug, and visibility, plus the create button.
//! Row clicks open the editor; delete hands the id back so the owner can
//! run the confirmation flow.

use crate::components::{Card, PageHeader};
use dioxus::prelude::*;
use studio_core::PageId;
use studio_model::Page;

/// Properties for PageListPage component
#[derive(Props, Clone, PartialEq)]
pub struct PageListPageProps {
    /// Catalog to display
    pub pages: Vec<Page>,

    /// Create button handler
    #[props(default)]
    pub on_create: EventHandler<()>,

    /// Row open handler
    #[props(default)]
    pub on_open: EventHandler<PageId>,

    /// Row delete handler
    #[props(default)]
    pub on_delete: EventHandler<PageId>,
}

/// Page catalog screen
#[component]
pub fn PageListPage(props: PageListPageProps) -> Element {
    let on_open = props.on_open;
    let on_delete = props.on_delete;

    rsx! {
        div {
            class: "page-list",

            div {
                class: "page-list-header",
                PageHeader { title: "Pages" }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| props.on_create.call(()),
                    "Create page"
                }
            }

            Card {
                if props.pages.is_empty() {
                    p { class: "page-list-empty", "No pages yet" }
                } else {
                    table {
                        class: "page-table",

                        thead {
                            tr {
                                th { "Title" }
                                th { "Slug" }
                                th { "Visibility" }
                                th {}
                            }
                        }

                        tbody {
                            for page in props.pages.iter() {
                                {
                                    let id = page.id;
                                    rsx! {
                                        tr {
                                            key: "{id}",
                                            class: "page-row",
                                            onclick: move |_| on_open.call(id),

                                            td { "{page.title}" }
                                            td { code { "{page.slug}" } }
                                            td {
                                                span {
                                                    class: if page.is_published {
                                                        "badge badge-published"
                                                    } else {
                                                        "badge badge-hidden"
                                                    },
                                                    if page.is_published { "Published" } else { "Hidden" }
                                                }
                                            }
                                            td {
                                                button {
                                                    class: "btn btn-ghost",
                                                    r#type: "button",
                                                    onclick: move |event| {
                                                        event.stop_propagation();
                                                        on_delete.call(id);
                                                    },
                                                    "Delete"
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
