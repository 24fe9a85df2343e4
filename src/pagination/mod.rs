//! Pagination module
//!
//! Computes previous/next page links for one page of a feature collection.
//!
//! # Overview
//!
//! A page is described by its start index, its page size and the number of
//! items it actually holds. From those, `PageRequest::links` derives the
//! `PageLinkSet` pointing at the neighbouring pages. The result only depends
//! on the three inputs.

mod types;

pub use types::{PageDirection, PageLink, PageLinkSet, PageRequest};
