//! The views module contains Maud templates that correspond to entire pages.
//! That is, each one corresponds to a route in the main router.
//!
//! Views are constructed from partials, which are contained in the components
//! module, and each one is a `Layout` that overrides some of the base page's
//! blocks.

pub(crate) mod app_home;
pub(crate) mod home;
