pub mod data;

use std::fmt;

use phf::OrderedMap;
use tracing::trace;

use crate::error::LocaleError;
use crate::key::LocaleKey;
use self::data::LOCALE_TABLE;

/// One row of the table: a composite locale code and its display name.
///
/// Alias rows (`"00"`) are independent entries whose name was copied from the
/// language's `"01"` row when the table was declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LocaleEntry {
    pub(crate) language_id: &'static str,
    pub(crate) sublanguage_id: &'static str,
    pub(crate) display_name: &'static str,
}

impl LocaleEntry {
    #[inline(always)]
    pub const fn language_id(&self) -> &'static str {
        self.language_id
    }
    #[inline(always)]
    pub const fn sublanguage_id(&self) -> &'static str {
        self.sublanguage_id
    }
    #[inline(always)]
    pub const fn display_name(&self) -> &'static str {
        self.display_name
    }

    #[inline]
    pub fn is_alias(&self) -> bool {
        self.sublanguage_id == LocaleKey::UNSPECIFIED_SUBLANGUAGE
    }

    pub fn key(&self) -> LocaleKey<'static> {
        LocaleKey::from_static(self.language_id, self.sublanguage_id)
    }
}

/// Read-only view over the compiled locale table.
///
/// The data lives in a `static` perfect-hash map, so every handle observes the
/// same contents and can be shared across threads freely.
#[derive(Clone, Copy)]
pub struct LocaleNameTable {
    map: &'static OrderedMap<&'static str, &'static [LocaleEntry]>,
}

impl Default for LocaleNameTable {
    #[inline(always)]
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for LocaleNameTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocaleNameTable")
            .field("languages", &self.map.len())
            .field("entries", &self.len())
            .finish()
    }
}

impl LocaleNameTable {
    #[inline(always)]
    pub fn new() -> Self {
        Self { map: &LOCALE_TABLE }
    }

    /// Exact-match lookup. Uppercase hex is accepted; anything else that is
    /// not `lll`/`ss` hex fails with [`LocaleError::InvalidKeyFormat`].
    pub fn lookup(&self, language_id: &str, sublanguage_id: &str) -> Result<&'static str, LocaleError> {
        let key = LocaleKey::new(language_id, sublanguage_id)?;
        self.lookup_key(&key)
    }

    /// Lookup with an already validated key. Never falls back to `"01"`.
    pub fn lookup_key(&self, key: &LocaleKey<'_>) -> Result<&'static str, LocaleError> {
        self.get(key).map(LocaleEntry::display_name).ok_or_else(|| {
            trace!(locale = %key, "locale not in table");
            LocaleError::NotFound {
                language_id: key.language_id().to_owned(),
                sublanguage_id: key.sublanguage_id().to_owned(),
            }
        })
    }

    /// Lookup by a raw 16-bit LANGID (see [`LocaleKey::from_langid`]).
    pub fn lookup_langid(&self, langid: u16) -> Result<&'static str, LocaleError> {
        self.lookup_key(&LocaleKey::from_langid(langid))
    }

    pub fn get(&self, key: &LocaleKey<'_>) -> Option<&'static LocaleEntry> {
        self.sublanguages(key.language_id())?
            .iter()
            .find(|e| e.sublanguage_id == key.sublanguage_id())
    }

    /// `true` if any entry carries this language id. Malformed ids are never
    /// present, so they report `false` rather than an error.
    pub fn language_exists(&self, language_id: &str) -> bool {
        LocaleKey::normalize_language(language_id)
            .map(|id| self.map.contains_key(&*id))
            .unwrap_or(false)
    }

    /// All entries of one language, `"01"` first. Expects a normalised id.
    #[inline]
    pub fn sublanguages(&self, language_id: &str) -> Option<&'static [LocaleEntry]> {
        self.map.get(language_id).copied()
    }

    /// Language ids in ascending order.
    pub fn languages(&self) -> impl Iterator<Item = &'static str> {
        self.map.keys().copied()
    }

    /// Every entry, aliases included, in declaration order.
    pub fn entries(&self) -> impl Iterator<Item = &'static LocaleEntry> {
        self.map.values().flat_map(|entries| entries.iter())
    }

    pub fn len(&self) -> usize {
        self.map.values().map(|entries| entries.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Shorthand for [`LocaleNameTable::lookup`] on the static table.
#[inline]
pub fn lookup(language_id: &str, sublanguage_id: &str) -> Result<&'static str, LocaleError> {
    LocaleNameTable::new().lookup(language_id, sublanguage_id)
}

/// Shorthand for [`LocaleNameTable::language_exists`] on the static table.
#[inline]
pub fn language_exists(language_id: &str) -> bool {
    LocaleNameTable::new().language_exists(language_id)
}
