//! Populates the derived `reading` and `sort` fields of catalog entities.

use yomi_text::kana::{enlarge_small_katakana, hiragana_to_katakana};
use yomi_text::{classify, normalize, strip_reading_punctuation, ReadingAnalyzer, ScriptKind};

use crate::sortable::{non_blank, Analyzable, Sortable};

/// Index bucket for names that start with a digit or symbol.
pub const NON_LETTER_INDEX: char = '#';

/// Derived fields for one name/sort pair.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortFields {
    pub reading: Option<String>,
    pub sort: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct SortFieldResolver {
    analyzer: ReadingAnalyzer,
}

impl SortFieldResolver {
    pub fn new(analyzer: ReadingAnalyzer) -> Self {
        Self { analyzer }
    }

    pub fn analyzer(&self) -> &ReadingAnalyzer {
        &self.analyzer
    }

    /// Reading of `s` with decorative punctuation removed.
    ///
    /// When stripping would leave nothing (a name made only of `♪`, say) the
    /// unstripped reading is kept so an analyzed name never loses its reading.
    pub fn reading_for(&self, s: &str) -> String {
        let reading = self.analyzer.create_reading(&normalize(s));
        let stripped = strip_reading_punctuation(&reading);
        if stripped.is_empty() {
            reading
        } else {
            stripped
        }
    }

    /// Derive `reading` and `sort` from a raw name and an optional override.
    ///
    /// An override wins outright and is stored normalized. Without one, only
    /// the reading is derived and `sort` stays `None`.
    pub fn resolve(&self, name: Option<&str>, user_sort: Option<&str>) -> SortFields {
        if let Some(sort) = non_blank(user_sort) {
            let sort = normalize(sort);
            return SortFields {
                reading: Some(self.reading_for(&sort)),
                sort: Some(sort),
            };
        }

        match non_blank(name) {
            Some(name) => SortFields {
                reading: Some(self.reading_for(name)),
                sort: None,
            },
            None => SortFields::default(),
        }
    }

    /// Fill `entity`'s reading and sort fields in place.
    ///
    /// Running it again on an analyzed entity changes nothing.
    pub fn analyze<T: Analyzable + ?Sized>(&self, entity: &mut T) {
        let fields = self.resolve(entity.name(), entity.sort());
        tracing::trace!(
            kind = ?entity.kind(),
            reading = ?fields.reading,
            sort = ?fields.sort,
            "Analyzed sort fields"
        );
        entity.set_reading(fields.reading);
        entity.set_sort(fields.sort);
    }

    pub fn analyze_all<T: Analyzable>(&self, entities: &mut [T]) {
        for entity in entities.iter_mut() {
            self.analyze(entity);
        }
        tracing::debug!(count = entities.len(), "Analyzed entities");
    }

    /// Index bucket for an analyzed entity.
    pub fn index_letter<T: Sortable + ?Sized>(entity: &T) -> Option<char> {
        create_indexable_name(entity).and_then(|name| index_letter(&name))
    }
}

/// Name used to group `entity` in alphabetical index listings.
///
/// Returns the reading, unless most of the reading's letters are not
/// alphabetic (digits, symbols, unread ideographs), in which case the
/// file-system name or the display name is used instead. Whitespace does not
/// vote. Reads only fields that [`SortFieldResolver::analyze`] has settled,
/// so repeated calls agree.
pub fn create_indexable_name<T: Sortable + ?Sized>(entity: &T) -> Option<String> {
    let reading = match non_blank(entity.reading()) {
        Some(reading) => reading.to_string(),
        None => normalize(non_blank(entity.name())?),
    };

    if !is_mostly_non_alphabetic(&reading) {
        return Some(reading);
    }

    let literal = non_blank(entity.path_name())
        .or_else(|| non_blank(entity.name()))
        .map(normalize);
    Some(literal.unwrap_or(reading))
}

fn is_mostly_non_alphabetic(s: &str) -> bool {
    let (alphabetic, other) = s
        .chars()
        .filter(|c| !c.is_whitespace())
        .fold((0usize, 0usize), |(alpha, other), c| match classify(c) {
            ScriptKind::Latin
            | ScriptKind::FullWidth
            | ScriptKind::Greek
            | ScriptKind::Hiragana
            | ScriptKind::Katakana
            | ScriptKind::HalfWidthKana => (alpha + 1, other),
            _ => (alpha, other + 1),
        });
    other > alphabetic
}

/// Bucket character for an indexable name.
///
/// Latin letters fold to their unaccented upper case, kana to plain
/// full-size katakana. Digits and symbols share [`NON_LETTER_INDEX`].
/// Ideographs index under themselves.
pub fn index_letter(indexable: &str) -> Option<char> {
    let normalized = normalize(indexable);
    let first = normalized.chars().find(|c| !c.is_whitespace())?;

    let letter = match classify(first) {
        ScriptKind::Latin | ScriptKind::Greek => {
            let base = base_char(first);
            base.to_uppercase().next().unwrap_or(base)
        }
        ScriptKind::Hiragana | ScriptKind::Katakana => {
            let kana = base_char(hiragana_to_katakana(first));
            enlarge_small_katakana(kana).unwrap_or(kana)
        }
        ScriptKind::Ideograph => first,
        _ => NON_LETTER_INDEX,
    };
    Some(letter)
}

/// First character of the canonical decomposition (`É` → `E`, `ガ` → `カ`).
fn base_char(c: char) -> char {
    let mut base = c;
    let mut first = true;
    unicode_normalization::char::decompose_canonical(c, |d| {
        if first {
            base = d;
            first = false;
        }
    });
    base
}
