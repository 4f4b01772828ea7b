//! Playlist input handling: record normalization and input list parsing

pub mod input_list;
pub mod models;

pub use input_list::parse_input_list;
pub use models::{normalize, split_lines, EntryRecord, PlaylistEntry, TrackRecord};
