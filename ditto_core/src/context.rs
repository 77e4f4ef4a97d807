use log::debug;

use crate::{apps::App, urls::Urls};

/// Everything a page needs at render time. Built once per request and
/// passed explicitly to the layout.
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    enabled_apps: Option<Vec<String>>,
    urls: Urls,
}

impl RenderContext {
    /// A context with no `enabled_apps` at all, as seen when the context
    /// processor has not been registered.
    pub fn new(urls: Urls) -> Self {
        Self {
            enabled_apps: None,
            urls,
        }
    }

    pub fn with_enabled_apps<I, S>(mut self, apps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.enabled_apps = Some(apps.into_iter().map(Into::into).collect());
        self
    }

    pub fn enabled_apps(&self) -> Option<&[String]> {
        self.enabled_apps.as_deref()
    }

    /// False if `enabled_apps` is missing or empty.
    pub fn has_enabled_apps(&self) -> bool {
        self.enabled_apps.as_ref().is_some_and(|apps| !apps.is_empty())
    }

    /// The recognised apps from `enabled_apps`, in the order given.
    /// Identifiers that are not known apps are dropped.
    pub fn nav_apps(&self) -> Vec<App> {
        let Some(ids) = &self.enabled_apps else {
            return Vec::new();
        };

        ids.iter()
            .filter_map(|id| {
                let app = App::from_slug(id);
                if app.is_none() {
                    debug!("Skipping unrecognised app {id:?} in enabled_apps");
                }
                app
            })
            .collect()
    }

    pub fn is_enabled(&self, app: App) -> bool {
        self.nav_apps().contains(&app)
    }

    pub fn urls(&self) -> &Urls {
        &self.urls
    }
}
