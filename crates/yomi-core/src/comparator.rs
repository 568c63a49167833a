//! Ordering strategies for catalog entities.
//!
//! Every comparator is a total order built on the base ordering: the
//! [`Sortable::sort_key`] compared with the collator (entities without a key
//! last, a leading "the " in any case ignored), then the raw name. Settings
//! add tie-breaks in front of it:
//!
//! | sort_alphanum | sort_albums_by_year | prohibit_sort_various | variable parent | albums ordered by |
//! |---------------|---------------------|-----------------------|-----------------|-------------------|
//! | off           | -                   | -                     | -               | key, digits as characters |
//! | on            | -                   | -                     | -               | key, digit runs as numbers |
//! | -             | off                 | -                     | -               | key |
//! | -             | on                  | off                   | -               | year, then key |
//! | -             | on                  | on                    | no              | year, then key |
//! | -             | on                  | on                    | yes             | key |
//!
//! Years ascend; albums without one follow those with one. Within an album,
//! files order by disc then track, a missing number before any explicit one.
//! Directories and album folders list before files and take part in year
//! ordering like albums.
//!
//! The `sort_*` helpers compute each entity's collation key once when the
//! factory runs on the built-in collator, and agree with the matching
//! `*_order` comparator.

use std::cmp::{Ordering, Reverse};
use std::sync::Arc;

use yomi_text::normalize;

use crate::collator::{CollationKey, Collator, JapaneseCollator};
use crate::config::SortSettings;
use crate::models::{Album, Artist, Genre, MediaFile, Playlist, SortCandidate};
use crate::sortable::{non_blank, Sortable};

/// Leading English article ignored when comparing sort keys.
const ARTICLE: &str = "the ";

/// `key` without a leading article in any case, unless nothing would be left.
fn without_article(key: &str) -> &str {
    match key.get(..ARTICLE.len()) {
        Some(head) if head.eq_ignore_ascii_case(ARTICLE) => {
            let rest = key[ARTICLE.len()..].trim_start();
            if rest.is_empty() {
                key
            } else {
                rest
            }
        }
        _ => key,
    }
}

/// Ascending years with missing years last; constant when year ordering is off.
fn year_rank(by_year: bool, year: Option<i32>) -> (bool, Option<i32>) {
    if by_year {
        (year.is_none(), year)
    } else {
        (false, None)
    }
}

/// Cached form of the base ordering. Variant order puts missing keys last.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
enum BaseKey {
    Present(CollationKey, String),
    Missing,
}

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
struct CachedKey<P> {
    prefix: P,
    base: BaseKey,
    name: Option<String>,
}

#[derive(Clone)]
pub struct ComparatorFactory {
    collator: Arc<dyn Collator>,
    /// Present when keys can be precomputed for the `sort_*` helpers.
    key_collator: Option<JapaneseCollator>,
    settings: SortSettings,
}

impl std::fmt::Debug for ComparatorFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComparatorFactory")
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

impl ComparatorFactory {
    pub fn new(collator: Arc<dyn Collator>, settings: SortSettings) -> Self {
        Self {
            collator,
            key_collator: None,
            settings,
        }
    }

    /// Factory over the built-in [`JapaneseCollator`].
    pub fn japanese(settings: SortSettings) -> Self {
        let collator = JapaneseCollator::new();
        Self {
            collator: Arc::new(collator),
            key_collator: Some(collator),
            settings,
        }
    }

    pub fn settings(&self) -> &SortSettings {
        &self.settings
    }

    /// Compare two sort keys, numerically when alphanumeric mode is on.
    pub fn compare_keys(&self, a: &str, b: &str) -> Ordering {
        if self.settings.sort_alphanum {
            self.collator.compare_numeric(a, b)
        } else {
            self.collator.compare_strings(a, b)
        }
    }

    /// Base ordering shared by every entity kind.
    pub fn compare_base<T: Sortable + ?Sized>(&self, a: &T, b: &T) -> Ordering {
        let by_key = match (a.sort_key(), b.sort_key()) {
            (Some(x), Some(y)) => self.compare_keys(without_article(&x), without_article(&y)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        };
        by_key.then_with(|| a.name().cmp(&b.name()))
    }

    pub fn natural_order<T: Sortable + ?Sized>(&self) -> impl Fn(&T, &T) -> Ordering + '_ {
        move |a: &T, b: &T| self.compare_base(a, b)
    }

    pub fn artist_order(&self) -> impl Fn(&Artist, &Artist) -> Ordering + '_ {
        self.natural_order::<Artist>()
    }

    pub fn playlist_order(&self) -> impl Fn(&Playlist, &Playlist) -> Ordering + '_ {
        self.natural_order::<Playlist>()
    }

    pub fn album_order(&self) -> impl Fn(&Album, &Album) -> Ordering + '_ {
        self.album_order_for(None)
    }

    /// Album ordering for the albums of `artist`.
    pub fn album_order_for(
        &self,
        artist: Option<&Artist>,
    ) -> impl Fn(&Album, &Album) -> Ordering + '_ {
        let by_year = self.year_order_allowed(artist.and_then(|a| a.name()));
        move |a: &Album, b: &Album| {
            if by_year {
                self.compare_by_year(a, b)
            } else {
                self.compare_base(a, b)
            }
        }
    }

    /// Ordering for the children of `parent` in the directory tree.
    pub fn media_file_order(
        &self,
        parent: Option<&MediaFile>,
    ) -> impl Fn(&MediaFile, &MediaFile) -> Ordering + '_ {
        let by_year = self.year_order_allowed(parent.and_then(|p| p.name()));
        move |a: &MediaFile, b: &MediaFile| {
            let (a_container, b_container) = (a.kind.is_container(), b.kind.is_container());
            match (a_container, b_container) {
                (true, false) => Ordering::Less,
                (false, true) => Ordering::Greater,
                (true, true) if by_year => self.compare_by_year(a, b),
                (true, true) => self.compare_base(a, b),
                (false, false) => a
                    .disc_track()
                    .cmp(&b.disc_track())
                    .then_with(|| self.compare_base(a, b)),
            }
        }
    }

    /// Alphabetical, or by album count then song count (both descending).
    pub fn genre_order(&self, by_album_count: bool) -> impl Fn(&Genre, &Genre) -> Ordering + '_ {
        move |a: &Genre, b: &Genre| {
            if by_album_count {
                b.album_count
                    .cmp(&a.album_count)
                    .then_with(|| b.song_count.cmp(&a.song_count))
                    .then_with(|| self.compare_base(a, b))
            } else {
                self.compare_base(a, b)
            }
        }
    }

    pub fn sort_artists(&self, artists: &mut [Artist]) {
        self.sort_cached(artists, |_| (), self.artist_order());
    }

    pub fn sort_albums(&self, albums: &mut [Album], artist: Option<&Artist>) {
        let by_year = self.year_order_allowed(artist.and_then(|a| a.name()));
        self.sort_cached(
            albums,
            |album| year_rank(by_year, album.year),
            self.album_order_for(artist),
        );
    }

    pub fn sort_media_files(&self, files: &mut [MediaFile], parent: Option<&MediaFile>) {
        let by_year = self.year_order_allowed(parent.and_then(|p| p.name()));
        self.sort_cached(
            files,
            |file| {
                if file.kind.is_container() {
                    (false, year_rank(by_year, file.year), (None, None))
                } else {
                    (true, year_rank(false, None), file.disc_track())
                }
            },
            self.media_file_order(parent),
        );
    }

    pub fn sort_playlists(&self, playlists: &mut [Playlist]) {
        self.sort_cached(playlists, |_| (), self.playlist_order());
    }

    pub fn sort_genres(&self, genres: &mut [Genre], by_album_count: bool) {
        self.sort_cached(
            genres,
            |genre| {
                if by_album_count {
                    (Reverse(genre.album_count), Reverse(genre.song_count))
                } else {
                    (Reverse(0), Reverse(0))
                }
            },
            self.genre_order(by_album_count),
        );
    }

    pub fn sort_candidates(&self, candidates: &mut [SortCandidate]) {
        self.sort_cached(
            candidates,
            |_| (),
            self.natural_order::<SortCandidate>(),
        );
    }

    /// Sort by `prefix` then the base ordering, computing each key once.
    ///
    /// Falls back to `compare` when the collator cannot hand out keys.
    fn sort_cached<T, P>(
        &self,
        items: &mut [T],
        prefix: impl Fn(&T) -> P,
        compare: impl Fn(&T, &T) -> Ordering,
    ) where
        T: Sortable,
        P: Ord,
    {
        match &self.key_collator {
            Some(collator) => items.sort_by_cached_key(|item| CachedKey {
                prefix: prefix(item),
                base: self.base_key(collator, item),
                name: item.name().map(str::to_string),
            }),
            None => items.sort_by(compare),
        }
    }

    fn base_key<T: Sortable + ?Sized>(&self, collator: &JapaneseCollator, item: &T) -> BaseKey {
        match item.sort_key() {
            Some(key) => {
                let key = without_article(&key);
                BaseKey::Present(
                    collator.collation_key(key, self.settings.sort_alphanum),
                    key.to_string(),
                )
            }
            None => BaseKey::Missing,
        }
    }

    fn compare_by_year<T: Sortable + ?Sized>(&self, a: &T, b: &T) -> Ordering {
        let by_year = match (a.year(), b.year()) {
            (Some(x), Some(y)) => x.cmp(&y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        };
        by_year.then_with(|| self.compare_base(a, b))
    }

    fn year_order_allowed(&self, parent_name: Option<&str>) -> bool {
        if !self.settings.sort_albums_by_year {
            return false;
        }
        if !self.settings.prohibit_sort_various {
            return true;
        }
        let variable = non_blank(parent_name).is_some_and(|name| self.is_variable_name(name));
        if variable {
            tracing::trace!(parent = ?parent_name, "Year ordering disabled for variable parent");
        }
        !variable
    }

    /// Whether `name` starts with one of the configured variable prefixes.
    pub fn is_variable_name(&self, name: &str) -> bool {
        let name = normalize(name).to_lowercase();
        let name = name.trim_start();
        self.settings
            .variable_prefixes
            .iter()
            .map(|prefix| normalize(prefix).to_lowercase())
            .any(|prefix| !prefix.is_empty() && name.starts_with(&prefix))
    }
}
