pub mod candidate;
pub mod catalog;

pub use candidate::SortCandidate;
pub use catalog::{Album, Artist, Genre, MediaFile, MediaFileKind, Playlist};
