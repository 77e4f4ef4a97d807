use std::collections::BTreeMap;

use crate::{apps::App, error::DittoError};

/// Route name of the site's overall home page.
pub const HOME_ROUTE: &str = "ditto:home";

/// Path of the core stylesheet, relative to the static prefix.
pub const STYLESHEET: &str = "ditto-core/css/ditto.css";

const DEFAULT_STATIC_PREFIX: &str = "/static/";

/// Maps route names such as "flickr:home" to paths, and locates static
/// assets. Every page is rendered with one of these in its context rather
/// than looking routes up from global state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Urls {
    routes: BTreeMap<String, String>,
    static_prefix: String,
}

impl Default for Urls {
    fn default() -> Self {
        let mut routes = BTreeMap::new();
        routes.insert(HOME_ROUTE.to_string(), "/".to_string());
        for app in App::ALL {
            routes.insert(app.home_route().to_string(), format!("/{}/", app.slug()));
        }

        Self {
            routes,
            static_prefix: DEFAULT_STATIC_PREFIX.to_string(),
        }
    }
}

impl Urls {
    /// Sets the prefix that static asset paths are served under. The prefix
    /// always starts and ends with a '/'.
    pub fn with_static_prefix<S: AsRef<str>>(mut self, prefix: S) -> Self {
        let trimmed = prefix.as_ref().trim_matches('/');
        self.static_prefix = if trimmed.is_empty() {
            "/".to_string()
        } else {
            format!("/{trimmed}/")
        };
        self
    }

    /// Adds a route, replacing any existing route with the same name.
    pub fn register<N: Into<String>, P: Into<String>>(&mut self, name: N, path: P) {
        self.routes.insert(name.into(), path.into());
    }

    /// Returns the path for the named route.
    pub fn reverse(&self, name: &str) -> Result<&str, DittoError> {
        self.routes
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| DittoError::NoReverseMatch(name.to_string()))
    }

    /// Path of the site's home page.
    pub fn home(&self) -> &str {
        // Routes can be replaced but never removed, so this always succeeds.
        self.reverse(HOME_ROUTE).unwrap_or("/")
    }

    /// Path of an app's home page.
    pub fn app_home(&self, app: App) -> &str {
        self.reverse(app.home_route()).unwrap_or("/")
    }

    pub fn static_prefix(&self) -> &str {
        &self.static_prefix
    }

    /// Returns the URL a static asset is served from.
    pub fn static_url(&self, path: &str) -> String {
        format!("{}{}", self.static_prefix, path.trim_start_matches('/'))
    }
}
