/// Screens exposed to the presentation layer
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Route {
    /// Upload & entry screen
    Upload,
    /// Playlist & player screen
    SongList,
}

impl Route {
    #[must_use]
    pub fn path(&self) -> &'static str {
        match self {
            Self::Upload => "/",
            Self::SongList => "/songlist",
        }
    }

    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        match path {
            "/" => Some(Self::Upload),
            "/songlist" => Some(Self::SongList),
            _ => None,
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}
