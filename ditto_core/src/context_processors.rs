use crate::{apps::App, context::RenderContext, urls::Urls};

/// The parts of the site configuration the context processor reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Dotted application names, e.g. "ditto.flickr".
    pub installed_apps: Vec<String>,
    /// Whether the Ditto context processor is registered. Without it pages
    /// get no `enabled_apps` and the navigation bar shows a warning.
    pub context_processor: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            installed_apps: App::ALL.iter().map(|app| app.installed_name()).collect(),
            context_processor: true,
        }
    }
}

impl Settings {
    pub fn is_installed(&self, name: &str) -> bool {
        self.installed_apps.iter().any(|installed| installed == name)
    }
}

/// Returns the identifiers of the installed Ditto apps, in canonical
/// order regardless of the order they were installed in.
pub fn ditto(settings: &Settings) -> Vec<String> {
    App::ALL
        .into_iter()
        .filter(|app| settings.is_installed(&app.installed_name()))
        .map(|app| app.slug().to_string())
        .collect()
}

/// Builds the context for one request.
pub fn build_context(settings: &Settings, urls: Urls) -> RenderContext {
    let ctx = RenderContext::new(urls);
    if settings.context_processor {
        ctx.with_enabled_apps(ditto(settings))
    } else {
        ctx
    }
}
