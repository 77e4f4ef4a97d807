use axum::{
    extract::Path,
    http::header,
    response::{IntoResponse, Response},
};
use rust_embed::Embed;

use crate::error::ApiError;

#[derive(Embed)]
#[folder = "assets"]
#[include = "*.css"]
pub struct Asset;

// The router mounts this under the static prefix with a wildcard
// ("/static/*file"), so `file` is the path relative to the assets folder.
pub async fn static_handler(Path(file): Path<String>) -> impl IntoResponse {
    StaticFile(file)
}

struct StaticFile<T>(T);

impl<T> IntoResponse for StaticFile<T>
where
    T: Into<String>,
{
    fn into_response(self) -> Response {
        let path = self.0.into();

        match Asset::get(path.as_str()) {
            Some(content) => {
                let mime = mime_guess::from_path(path).first_or_octet_stream();
                ([(header::CONTENT_TYPE, mime.as_ref())], content.data).into_response()
            }
            None => ApiError::MissingAsset(path).into_response(),
        }
    }
}
