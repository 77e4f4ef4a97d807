use thiserror::Error;

use crate::apps::App;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DittoError {
    #[error(
        "{0} is not a known Ditto app. Valid values are 'flickr', 'lastfm', 'pinboard', 'twitter'"
    )]
    UnknownApp(String),
    #[error("The {0} app is not installed")]
    AppNotInstalled(App),
    #[error("Reverse for '{0}' not found, no route with that name is registered")]
    NoReverseMatch(String),
}
