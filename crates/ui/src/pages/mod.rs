//! Application screens

pub mod page_details;
pub mod page_list;

pub use page_details::PageDetailsPage;
pub use page_list::PageListPage;
