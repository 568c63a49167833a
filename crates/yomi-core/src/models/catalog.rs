use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artist {
    pub id: i64,
    pub name: Option<String>,
    /// User or tag supplied sort override.
    pub sort: Option<String>,
    /// Derived katakana reading, filled by the resolver.
    pub reading: Option<String>,
    pub album_count: u32,
}

impl Artist {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: Some(name.into()),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Album {
    pub id: i64,
    pub name: Option<String>,
    pub artist: Option<String>,
    pub sort: Option<String>,
    pub reading: Option<String>,
    /// Release year from tags.
    pub year: Option<i32>,
    pub song_count: u32,
    /// Directory the album was scanned from.
    pub path: Option<PathBuf>,
}

impl Album {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }
}

/// What a [`MediaFile`] row stands for in the directory tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaFileKind {
    Directory,
    Album,
    #[default]
    Music,
    Video,
}

impl MediaFileKind {
    /// Directories and album folders list before playable files.
    pub fn is_container(self) -> bool {
        matches!(self, Self::Directory | Self::Album)
    }
}

/// A file or folder in the scanned music tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaFile {
    pub id: i64,
    pub path: PathBuf,
    pub kind: MediaFileKind,
    /// Tag title; the file name stands in when absent.
    pub title: Option<String>,
    pub sort: Option<String>,
    pub reading: Option<String>,
    pub artist: Option<String>,
    pub year: Option<i32>,
    pub disc_number: Option<u32>,
    pub track_number: Option<u32>,
}

impl MediaFile {
    pub fn track(id: i64, path: impl Into<PathBuf>, title: impl Into<String>) -> Self {
        Self {
            id,
            path: path.into(),
            kind: MediaFileKind::Music,
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn directory(id: i64, path: impl Into<PathBuf>) -> Self {
        Self {
            id,
            path: path.into(),
            kind: MediaFileKind::Directory,
            ..Self::default()
        }
    }

    pub fn with_position(mut self, disc: Option<u32>, track: Option<u32>) -> Self {
        self.disc_number = disc;
        self.track_number = track;
        self
    }

    /// Last path component, if it is valid UTF-8.
    pub fn file_name(&self) -> Option<&str> {
        self.path.file_name().and_then(|n| n.to_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    pub id: i64,
    pub name: Option<String>,
    pub sort: Option<String>,
    pub reading: Option<String>,
}

impl Playlist {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: Some(name.into()),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub name: Option<String>,
    pub sort: Option<String>,
    pub reading: Option<String>,
    pub song_count: u32,
    pub album_count: u32,
}

impl Genre {
    pub fn new(name: impl Into<String>, album_count: u32, song_count: u32) -> Self {
        Self {
            name: Some(name.into()),
            album_count,
            song_count,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_file_name_falls_back_to_path() {
        let dir = MediaFile::directory(1, "/music/Disc 1");
        assert_eq!(dir.file_name(), Some("Disc 1"));
        assert!(dir.kind.is_container());
        assert!(!MediaFileKind::Music.is_container());
    }

    #[test]
    fn test_kind_serializes_snake_case() {
        let json = serde_json::to_string(&MediaFileKind::Directory).unwrap();
        assert_eq!(json, "\"directory\"");
    }
}
