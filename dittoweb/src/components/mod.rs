//! The components module contains Maud "partials", such as the navigation
//! items and breadcrumbs, that are not complete pages in themselves - complete
//! pages are stored in the views folder.
//!
//! The highest-level component is 'page', which provides the common header,
//! navigation bar and footer for all views.

pub(crate) mod nav;
pub(crate) mod page;
