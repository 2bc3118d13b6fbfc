//! Pagination layer: the per-screen query controller.

pub mod pager;

pub use pager::PagedQuery;
