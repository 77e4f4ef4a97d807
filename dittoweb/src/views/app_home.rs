use axum::extract::{Path, State};
use ditto_core::{apps::App, context::RenderContext, DittoError};
use maud::{html, Markup};
use tracing::{info, instrument};

use crate::{
    components::{
        nav::{breadcrumbs, Crumb},
        page::{page, Layout},
    },
    error::ApiResult,
    state::AppState,
};

/// The home page of one sub-application, e.g. "flickr:home".
pub struct AppHomePage {
    pub app: App,
}

impl Layout for AppHomePage {
    fn head_page_title(&self, _ctx: &RenderContext) -> Markup {
        html! { (self.app.label()) }
    }

    fn navbar_active(&self, app: App) -> bool {
        app == self.app
    }

    fn breadcrumbs(&self, ctx: &RenderContext) -> Markup {
        breadcrumbs(&[
            Crumb::link("Home", ctx.urls().home()),
            Crumb::current(self.app.label()),
        ])
    }

    fn content(&self, _ctx: &RenderContext) -> Markup {
        html! {
            h1 { (self.app.label()) }
            p { "Nothing from " (self.app.label()) " has been fetched yet." }
        }
    }
}

#[instrument(skip(state))]
pub async fn app_home_view(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> ApiResult<Markup> {
    let app: App = slug.parse()?;

    // Installation decides whether the page exists. The context only feeds
    // the navigation bar, which may be showing the warning instead.
    if !state.is_installed(app) {
        info!("{app} is not installed");
        return Err(DittoError::AppNotInstalled(app).into());
    }

    Ok(page(&AppHomePage { app }, &state.context()))
}
