use ditto_core::{apps::App, context::RenderContext, urls::STYLESHEET};
use maud::{html, Markup, DOCTYPE};

use super::nav::{nav_item, nav_warning};

/// The base layout shared by every page. Each method is a named block that
/// a page can override; anything not overridden renders the default below.
/// Pages get the render context passed in, there is no global state.
pub trait Layout {
    /// The whole contents of the `<title>` element.
    fn head_title(&self, ctx: &RenderContext) -> Markup {
        html! {
            (self.head_page_title(ctx))
            (self.head_site_title(ctx))
        }
    }

    fn head_page_title(&self, _ctx: &RenderContext) -> Markup {
        html! {}
    }

    /// Appended to the page title.
    fn head_site_title(&self, _ctx: &RenderContext) -> Markup {
        html! { " (Django Ditto)" }
    }

    /// Extra stylesheets, scripts etc. at the end of `<head>`.
    fn head_extra(&self, _ctx: &RenderContext) -> Markup {
        html! {}
    }

    /// The whole navigation bar. Override the smaller blocks below if you
    /// only want to add to it.
    fn navbar(&self, ctx: &RenderContext) -> Markup {
        html! {
            nav.navbar {
                a.navbar-brand href=(ctx.urls().home()) { "Ditto" }
                ul.nav.navbar-nav {
                    (self.navbar_list_start(ctx))
                    (nav_links(self, ctx))
                    (self.navbar_list_end(ctx))
                }
            }
        }
    }

    fn navbar_list_start(&self, _ctx: &RenderContext) -> Markup {
        html! {}
    }

    fn navbar_list_end(&self, _ctx: &RenderContext) -> Markup {
        html! {}
    }

    /// Whether `app`'s item in the navigation bar is marked as the current
    /// section.
    fn navbar_active(&self, _app: App) -> bool {
        false
    }

    fn breadcrumbs(&self, _ctx: &RenderContext) -> Markup {
        html! {}
    }

    fn content(&self, _ctx: &RenderContext) -> Markup {
        html! {}
    }

    fn footer(&self, _ctx: &RenderContext) -> Markup {
        html! {
            footer.ditto-footer {
                p {
                    "Powered by "
                    a href="https://github.com/philgyford/django-ditto" { "Django Ditto" }
                }
            }
        }
    }

    /// Scripts etc. at the very end of `<body>`.
    fn foot_extra(&self, _ctx: &RenderContext) -> Markup {
        html! {}
    }
}

/// The app links in the navigation bar, one per recognised entry in
/// `enabled_apps` and in the same order. If there are no enabled apps at
/// all the integrator has most likely forgotten the context processor, so
/// we say so instead.
fn nav_links<L: Layout + ?Sized>(layout: &L, ctx: &RenderContext) -> Markup {
    if !ctx.has_enabled_apps() {
        return nav_warning();
    }

    html! {
        @for app in ctx.nav_apps() {
            (nav_item(app, ctx.urls().app_home(app), layout.navbar_active(app)))
        }
    }
}

/// Renders `layout` as a complete HTML document.
pub fn page<L: Layout + ?Sized>(layout: &L, ctx: &RenderContext) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (layout.head_title(ctx)) }
                link rel="stylesheet" href=(ctx.urls().static_url(STYLESHEET));
                (layout.head_extra(ctx))
            }
            body {
                (layout.navbar(ctx))
                div.container {
                    (layout.breadcrumbs(ctx))
                    main.ditto-content {
                        (layout.content(ctx))
                    }
                    (layout.footer(ctx))
                }
                (layout.foot_extra(ctx))
            }
        }
    }
}
