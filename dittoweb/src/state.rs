use std::sync::Arc;

use ditto_core::{
    apps::App,
    context::RenderContext,
    context_processors::{build_context, Settings},
    urls::Urls,
};

/// Shared by all handlers. Cheap to clone.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    settings: Arc<Settings>,
    urls: Arc<Urls>,
}

impl AppState {
    pub fn new(settings: Settings, urls: Urls) -> Self {
        Self {
            settings: Arc::new(settings),
            urls: Arc::new(urls),
        }
    }

    pub fn urls(&self) -> &Urls {
        &self.urls
    }

    pub fn is_installed(&self, app: App) -> bool {
        self.settings.is_installed(&app.installed_name())
    }

    /// Builds the render context for one request.
    pub fn context(&self) -> RenderContext {
        build_context(&self.settings, Urls::clone(&self.urls))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn installation_ignores_the_context_processor() {
        let settings = Settings {
            installed_apps: vec!["ditto.pinboard".to_string()],
            context_processor: false,
        };
        let state = AppState::new(settings, Urls::default());
        assert!(state.is_installed(App::Pinboard));
        assert!(!state.is_installed(App::Flickr));
        assert_eq!(state.context().enabled_apps(), None);
    }
}
