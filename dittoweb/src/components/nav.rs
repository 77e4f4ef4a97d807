use ditto_core::apps::App;
use maud::{html, Markup};

/// Shown in place of the app links when the page context has no
/// `enabled_apps`, which means the context processor is not registered.
pub const CONTEXT_PROCESSOR_WARNING: &str =
    "Add 'ditto.core.context_processors.ditto' to context_processors in your settings.";

/// A single link in the navigation bar.
pub fn nav_item(app: App, href: &str, active: bool) -> Markup {
    html! {
        li.nav-item.active[active] {
            a.nav-link href=(href) { (app.label()) }
        }
    }
}

pub fn nav_warning() -> Markup {
    html! {
        li.nav-item.text-warning { (CONTEXT_PROCESSOR_WARNING) }
    }
}

/// One step in a breadcrumb trail. The last crumb is the current page and
/// is usually not a link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crumb {
    pub label: String,
    pub href: Option<String>,
}

impl Crumb {
    pub fn link<L: Into<String>, H: Into<String>>(label: L, href: H) -> Self {
        Self {
            label: label.into(),
            href: Some(href.into()),
        }
    }

    pub fn current<L: Into<String>>(label: L) -> Self {
        Self {
            label: label.into(),
            href: None,
        }
    }
}

pub fn breadcrumbs(crumbs: &[Crumb]) -> Markup {
    html! {
        ol.breadcrumb {
            @for crumb in crumbs {
                @match &crumb.href {
                    Some(href) => {
                        li.breadcrumb-item { a href=(href) { (crumb.label) } }
                    }
                    None => {
                        li.breadcrumb-item.active { (crumb.label) }
                    }
                }
            }
        }
    }
}
