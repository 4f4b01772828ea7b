//! xspfconv - Convert URL lists and aria2 input lists to XSPF playlists

pub mod config;
pub mod playlist;
pub mod sink;
pub mod utils;
pub mod xspf;

pub use playlist::{EntryRecord, PlaylistEntry, TrackRecord};
pub use sink::{DirectorySink, FileSink, NullSink, SinkError};
pub use xspf::{ConvertOptions, XspfConverter};
