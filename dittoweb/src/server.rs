use axum::{routing::get, Router};

use crate::{
    asset::static_handler,
    state::AppState,
    views::{app_home::app_home_view, home::home_view},
};

/// Builds the router. Static assets are served under the same prefix the
/// pages link to them with.
pub fn router(state: AppState) -> Router {
    let static_route = format!("{}*file", state.urls().static_prefix());

    Router::new()
        .route("/", get(home_view))
        .route("/:slug/", get(app_home_view))
        .route(&static_route, get(static_handler))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        response::Response,
    };
    use ditto_core::{context_processors::Settings, urls::Urls};
    use tower::ServiceExt;

    use super::*;
    use crate::components::nav::CONTEXT_PROCESSOR_WARNING;

    fn settings(apps: &[&str], context_processor: bool) -> Settings {
        Settings {
            installed_apps: apps.iter().map(|s| s.to_string()).collect(),
            context_processor,
        }
    }

    async fn get(state: AppState, uri: &str) -> Response {
        router(state)
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn body_string(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn home_page() {
        let state = AppState::new(
            settings(&["ditto.twitter", "ditto.flickr"], true),
            Urls::default(),
        );
        let response = get(state, "/").await;
        assert_eq!(response.status(), StatusCode::OK);

        let html = body_string(response).await;
        let flickr = html.find(r#"<a class="nav-link" href="/flickr/">Flickr</a>"#).unwrap();
        let twitter = html.find(r#"<a class="nav-link" href="/twitter/">Twitter</a>"#).unwrap();
        assert!(flickr < twitter);
        assert!(!html.contains("Pinboard"));
        assert!(!html.contains(CONTEXT_PROCESSOR_WARNING));
    }

    #[tokio::test]
    async fn home_page_without_context_processor() {
        let state = AppState::new(settings(&["ditto.flickr"], false), Urls::default());
        let html = body_string(get(state, "/").await).await;
        assert!(html.contains(CONTEXT_PROCESSOR_WARNING));
        assert!(!html.contains(r#"class="nav-link""#));
    }

    #[tokio::test]
    async fn app_home_page() {
        let state = AppState::new(Settings::default(), Urls::default());
        let response = get(state, "/lastfm/").await;
        assert_eq!(response.status(), StatusCode::OK);

        let html = body_string(response).await;
        assert!(html.contains("<title>Last.fm (Django Ditto)</title>"));
        assert!(html.contains(
            r#"<li class="nav-item active"><a class="nav-link" href="/lastfm/">"#
        ));
    }

    #[tokio::test]
    async fn unknown_app_is_404() {
        let state = AppState::new(Settings::default(), Urls::default());
        let response = get(state, "/myspace/").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn uninstalled_app_is_404() {
        let state = AppState::new(settings(&["ditto.flickr"], true), Urls::default());
        let response = get(state, "/twitter/").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_string(response).await, "The Twitter app is not installed");
    }

    #[tokio::test]
    async fn installed_app_without_context_processor() {
        let mut settings = Settings::default();
        settings.context_processor = false;
        let state = AppState::new(settings, Urls::default());
        let response = get(state, "/flickr/").await;
        assert_eq!(response.status(), StatusCode::OK);

        let html = body_string(response).await;
        assert!(html.contains("<title>Flickr (Django Ditto)</title>"));
        assert!(html.contains(CONTEXT_PROCESSOR_WARNING));
        assert!(!html.contains(r#"class="nav-link""#));
    }

    #[tokio::test]
    async fn serves_stylesheet() {
        let state = AppState::new(Settings::default(), Urls::default());
        let response = get(state, "/static/ditto-core/css/ditto.css").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "text/css");
    }

    #[tokio::test]
    async fn serves_stylesheet_under_custom_prefix() {
        let urls = Urls::default().with_static_prefix("assets");
        let state = AppState::new(Settings::default(), urls);
        let response = get(state.clone(), "/assets/ditto-core/css/ditto.css").await;
        assert_eq!(response.status(), StatusCode::OK);

        let html = body_string(get(state, "/").await).await;
        assert!(html.contains(r#"href="/assets/ditto-core/css/ditto.css""#));
    }

    #[tokio::test]
    async fn missing_asset_is_404() {
        let state = AppState::new(Settings::default(), Urls::default());
        let response = get(state, "/static/nope.css").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
