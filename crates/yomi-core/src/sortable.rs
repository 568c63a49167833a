//! Uniform view over catalog entities for ordering and analysis.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use yomi_text::normalize;

use crate::models::{Album, Artist, Genre, MediaFile, Playlist, SortCandidate};

/// Entity kind a comparator is built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortableKind {
    Artist,
    Album,
    MediaFile,
    Playlist,
    Genre,
    Candidate,
}

/// Fields the comparators and the resolver read from an entity.
pub trait Sortable {
    fn kind(&self) -> SortableKind;

    /// Display name or title.
    fn name(&self) -> Option<&str>;

    /// Explicit sort string, user supplied or set by [`analyze`](crate::resolver::SortFieldResolver::analyze).
    fn sort(&self) -> Option<&str>;

    fn reading(&self) -> Option<&str>;

    /// Name derived from the file system, for entities that have one.
    fn path_name(&self) -> Option<&str> {
        None
    }

    fn year(&self) -> Option<i32> {
        None
    }

    /// `(disc, track)` position within an album.
    fn disc_track(&self) -> (Option<u32>, Option<u32>) {
        (None, None)
    }

    /// Primary ordering key: `sort`, else `reading`, else the normalized name.
    ///
    /// Blank values count as absent. `None` only when all three are absent.
    fn sort_key(&self) -> Option<Cow<'_, str>> {
        if let Some(sort) = non_blank(self.sort()) {
            return Some(Cow::Borrowed(sort));
        }
        if let Some(reading) = non_blank(self.reading()) {
            return Some(Cow::Borrowed(reading));
        }
        non_blank(self.name()).map(|name| Cow::Owned(normalize(name)))
    }
}

/// Entities whose derived fields the resolver can write back.
pub trait Analyzable: Sortable {
    fn set_reading(&mut self, reading: Option<String>);
    fn set_sort(&mut self, sort: Option<String>);
}

/// `Some(s)` unless `s` is absent or only whitespace.
pub(crate) fn non_blank(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.trim().is_empty())
}

impl Sortable for Artist {
    fn kind(&self) -> SortableKind {
        SortableKind::Artist
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn sort(&self) -> Option<&str> {
        self.sort.as_deref()
    }

    fn reading(&self) -> Option<&str> {
        self.reading.as_deref()
    }
}

impl Analyzable for Artist {
    fn set_reading(&mut self, reading: Option<String>) {
        self.reading = reading;
    }

    fn set_sort(&mut self, sort: Option<String>) {
        self.sort = sort;
    }
}

impl Sortable for Album {
    fn kind(&self) -> SortableKind {
        SortableKind::Album
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn sort(&self) -> Option<&str> {
        self.sort.as_deref()
    }

    fn reading(&self) -> Option<&str> {
        self.reading.as_deref()
    }

    fn path_name(&self) -> Option<&str> {
        self.path
            .as_deref()
            .and_then(|p| p.file_name())
            .and_then(|n| n.to_str())
    }

    fn year(&self) -> Option<i32> {
        self.year
    }
}

impl Analyzable for Album {
    fn set_reading(&mut self, reading: Option<String>) {
        self.reading = reading;
    }

    fn set_sort(&mut self, sort: Option<String>) {
        self.sort = sort;
    }
}

impl Sortable for MediaFile {
    fn kind(&self) -> SortableKind {
        SortableKind::MediaFile
    }

    fn name(&self) -> Option<&str> {
        non_blank(self.title.as_deref()).or_else(|| self.file_name())
    }

    fn sort(&self) -> Option<&str> {
        self.sort.as_deref()
    }

    fn reading(&self) -> Option<&str> {
        self.reading.as_deref()
    }

    fn path_name(&self) -> Option<&str> {
        self.file_name()
    }

    fn year(&self) -> Option<i32> {
        self.year
    }

    fn disc_track(&self) -> (Option<u32>, Option<u32>) {
        (self.disc_number, self.track_number)
    }
}

impl Analyzable for MediaFile {
    fn set_reading(&mut self, reading: Option<String>) {
        self.reading = reading;
    }

    fn set_sort(&mut self, sort: Option<String>) {
        self.sort = sort;
    }
}

impl Sortable for Playlist {
    fn kind(&self) -> SortableKind {
        SortableKind::Playlist
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn sort(&self) -> Option<&str> {
        self.sort.as_deref()
    }

    fn reading(&self) -> Option<&str> {
        self.reading.as_deref()
    }
}

impl Analyzable for Playlist {
    fn set_reading(&mut self, reading: Option<String>) {
        self.reading = reading;
    }

    fn set_sort(&mut self, sort: Option<String>) {
        self.sort = sort;
    }
}

impl Sortable for Genre {
    fn kind(&self) -> SortableKind {
        SortableKind::Genre
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn sort(&self) -> Option<&str> {
        self.sort.as_deref()
    }

    fn reading(&self) -> Option<&str> {
        self.reading.as_deref()
    }
}

impl Analyzable for Genre {
    fn set_reading(&mut self, reading: Option<String>) {
        self.reading = reading;
    }

    fn set_sort(&mut self, sort: Option<String>) {
        self.sort = sort;
    }
}

impl Sortable for SortCandidate {
    fn kind(&self) -> SortableKind {
        SortableKind::Candidate
    }

    fn name(&self) -> Option<&str> {
        Some(self.name.as_str())
    }

    fn sort(&self) -> Option<&str> {
        self.sort.as_deref()
    }

    fn reading(&self) -> Option<&str> {
        self.reading.as_deref()
    }
}

impl Analyzable for SortCandidate {
    fn set_reading(&mut self, reading: Option<String>) {
        self.reading = reading;
    }

    fn set_sort(&mut self, sort: Option<String>) {
        self.sort = sort;
    }
}
