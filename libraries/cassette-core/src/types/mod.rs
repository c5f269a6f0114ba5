mod entry;
mod route;
mod snapshot;

pub use entry::{NewAudioEntry, StoredAudioEntry};
pub use route::Route;
pub use snapshot::PlaybackSnapshot;

/// Name of the Durable Store (maps to the database file name)
pub const STORE_NAME: &str = "musicDatabase";

/// Schema version of the Durable Store
pub const STORE_VERSION: i64 = 1;

/// The single collection holding uploaded audio
pub const COLLECTION_NAME: &str = "musicFiles";

/// Snapshot Store key for the playback snapshot
pub const SNAPSHOT_KEY: &str = "audioPlaylistState";
