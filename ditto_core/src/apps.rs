use std::{fmt::Display, str::FromStr};

use crate::error::DittoError;

/// The optional sub-applications that can be switched on in a Ditto site.
/// Each one gets a link in the navigation bar when it is enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum App {
    Flickr,
    Lastfm,
    Pinboard,
    Twitter,
}

impl App {
    /// All apps in canonical order. This is the order the context processor
    /// reports installed apps in.
    pub const ALL: [App; 4] = [App::Flickr, App::Lastfm, App::Pinboard, App::Twitter];

    /// The identifier used in `enabled_apps` and in URLs.
    pub fn slug(self) -> &'static str {
        match self {
            App::Flickr => "flickr",
            App::Lastfm => "lastfm",
            App::Pinboard => "pinboard",
            App::Twitter => "twitter",
        }
    }

    /// The human-readable name shown in the navigation bar.
    pub fn label(self) -> &'static str {
        match self {
            App::Flickr => "Flickr",
            App::Lastfm => "Last.fm",
            App::Pinboard => "Pinboard",
            App::Twitter => "Twitter",
        }
    }

    /// Name of the route for the app's home page, e.g. "flickr:home".
    pub fn home_route(self) -> &'static str {
        match self {
            App::Flickr => "flickr:home",
            App::Lastfm => "lastfm:home",
            App::Pinboard => "pinboard:home",
            App::Twitter => "twitter:home",
        }
    }

    /// The name the app has in the list of installed applications.
    pub fn installed_name(self) -> String {
        format!("ditto.{}", self.slug())
    }

    /// Looks up an app by its identifier. Matching is exact, so "Flickr" is
    /// not recognised.
    pub fn from_slug(slug: &str) -> Option<App> {
        App::ALL.into_iter().find(|app| app.slug() == slug)
    }
}

impl FromStr for App {
    type Err = DittoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        App::from_slug(s).ok_or_else(|| DittoError::UnknownApp(s.to_string()))
    }
}

impl Display for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
