use axum::extract::State;
use ditto_core::context::RenderContext;
use maud::{html, Markup};
use tracing::instrument;

use crate::{
    components::{
        nav::CONTEXT_PROCESSOR_WARNING,
        page::{page, Layout},
    },
    state::AppState,
};

/// The site's overall home page, "ditto:home".
pub struct HomePage;

impl Layout for HomePage {
    fn head_page_title(&self, _ctx: &RenderContext) -> Markup {
        html! { "Home" }
    }

    fn content(&self, ctx: &RenderContext) -> Markup {
        let apps = ctx.nav_apps();

        html! {
            h1 { "Ditto" }
            @if apps.is_empty() {
                p { "There are no Ditto apps enabled." }
                @if !ctx.has_enabled_apps() {
                    p.text-warning { (CONTEXT_PROCESSOR_WARNING) }
                }
            } @else {
                ul.ditto-apps {
                    @for app in apps {
                        li { a href=(ctx.urls().app_home(app)) { (app.label()) } }
                    }
                }
            }
        }
    }
}

#[instrument(skip(state))]
pub async fn home_view(State(state): State<AppState>) -> Markup {
    let ctx = state.context();
    page(&HomePage, &ctx)
}

#[cfg(test)]
mod tests {
    use ditto_core::urls::Urls;

    use super::*;

    #[test]
    fn lists_enabled_apps() {
        let ctx = RenderContext::new(Urls::default()).with_enabled_apps(["lastfm", "flickr"]);
        let html = page(&HomePage, &ctx).into_string();
        assert!(html.contains("<title>Home (Django Ditto)</title>"));
        assert!(html.contains(concat!(
            r#"<ul class="ditto-apps">"#,
            r#"<li><a href="/lastfm/">Last.fm</a></li>"#,
            r#"<li><a href="/flickr/">Flickr</a></li>"#,
            "</ul>"
        )));
    }

    #[test]
    fn nothing_enabled() {
        let ctx = RenderContext::new(Urls::default()).with_enabled_apps(["unknown"]);
        let html = page(&HomePage, &ctx).into_string();
        assert!(html.contains("There are no Ditto apps enabled."));
        assert!(!html.contains(CONTEXT_PROCESSOR_WARNING));
    }
}
