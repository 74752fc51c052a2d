//! Composite locale codes.
//!
//! A [`LocaleKey`] pairs a 3-digit hex `language_id` with a 2-digit hex
//! `sublanguage_id`. Keys are always held lowercase: input that is already
//! lowercase is borrowed, uppercase input is folded into an owned copy.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::error::LocaleError;

/// Which part of a composite code failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyComponent {
    Language,
    Sublanguage,
    Composite,
}

impl KeyComponent {
    /// Number of hex digits expected, `None` for the `lll:ss` form.
    pub const fn width(self) -> Option<usize> {
        match self {
            KeyComponent::Language => Some(LocaleKey::LANGUAGE_WIDTH),
            KeyComponent::Sublanguage => Some(LocaleKey::SUBLANGUAGE_WIDTH),
            KeyComponent::Composite => None,
        }
    }
}

impl fmt::Display for KeyComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyComponent::Language => f.write_str("language_id (3 hex digits)"),
            KeyComponent::Sublanguage => f.write_str("sublanguage_id (2 hex digits)"),
            KeyComponent::Composite => f.write_str("locale code (`lll:ss`)"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LocaleKey<'a> {
    language_id: Cow<'a, str>,
    sublanguage_id: Cow<'a, str>,
}

impl<'a> LocaleKey<'a> {
    pub const LANGUAGE_WIDTH: usize = 3;
    pub const SUBLANGUAGE_WIDTH: usize = 2;
    /// Reserved sublanguage meaning "use the language default".
    pub const UNSPECIFIED_SUBLANGUAGE: &'static str = "00";

    /// Validate both components and fold them to lowercase.
    pub fn new(language_id: &'a str, sublanguage_id: &'a str) -> Result<Self, LocaleError> {
        Ok(Self {
            language_id: Self::normalize_language(language_id)?,
            sublanguage_id: Self::normalize_sublanguage(sublanguage_id)?,
        })
    }

    /// Key for a language's `"00"` sublanguage.
    pub fn unspecified(language_id: &'a str) -> Result<Self, LocaleError> {
        Ok(Self {
            language_id: Self::normalize_language(language_id)?,
            sublanguage_id: Cow::Borrowed(Self::UNSPECIFIED_SUBLANGUAGE),
        })
    }

    pub fn normalize_language(language_id: &'a str) -> Result<Cow<'a, str>, LocaleError> {
        normalize(KeyComponent::Language, language_id)
    }

    pub fn normalize_sublanguage(sublanguage_id: &'a str) -> Result<Cow<'a, str>, LocaleError> {
        normalize(KeyComponent::Sublanguage, sublanguage_id)
    }

    #[inline(always)]
    pub fn language_id(&self) -> &str {
        &self.language_id
    }

    #[inline(always)]
    pub fn sublanguage_id(&self) -> &str {
        &self.sublanguage_id
    }

    #[inline]
    pub fn is_unspecified_sublanguage(&self) -> bool {
        self.sublanguage_id == Self::UNSPECIFIED_SUBLANGUAGE
    }

    /// Inverse of [`LocaleKey::from_langid`]. `None` when either component
    /// exceeds its LANGID bit range.
    pub fn to_langid(&self) -> Option<u16> {
        let language = u16::from_str_radix(&self.language_id, 16).ok()?;
        let sublanguage = u16::from_str_radix(&self.sublanguage_id, 16).ok()?;
        if language > 0x03ff || sublanguage > 0x3f {
            return None;
        }
        Some((sublanguage << 10) | language)
    }

    pub fn into_parts(self) -> (Cow<'a, str>, Cow<'a, str>) {
        (self.language_id, self.sublanguage_id)
    }

    pub fn into_owned(self) -> LocaleKey<'static> {
        LocaleKey {
            language_id: Cow::Owned(self.language_id.into_owned()),
            sublanguage_id: Cow::Owned(self.sublanguage_id.into_owned()),
        }
    }
}

impl LocaleKey<'static> {
    /// Wrap table data that is known to be lowercase hex.
    pub(crate) const fn from_static(language_id: &'static str, sublanguage_id: &'static str) -> Self {
        Self {
            language_id: Cow::Borrowed(language_id),
            sublanguage_id: Cow::Borrowed(sublanguage_id),
        }
    }

    /// Split a 16-bit LANGID: primary language in the low 10 bits,
    /// sublanguage in the high 6 bits.
    pub fn from_langid(langid: u16) -> Self {
        let language = langid & 0x03ff;
        let sublanguage = langid >> 10;
        Self {
            language_id: Cow::Owned(format!("{language:03x}")),
            sublanguage_id: Cow::Owned(format!("{sublanguage:02x}")),
        }
    }
}

impl fmt::Display for LocaleKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.language_id, self.sublanguage_id)
    }
}

/// Parses the `lll:ss` notation, e.g. `"009:01"`.
impl FromStr for LocaleKey<'static> {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((language_id, sublanguage_id)) = s.split_once(':') else {
            debug!(input = s, "locale code without `:` separator");
            return Err(LocaleError::InvalidKeyFormat {
                component: KeyComponent::Composite,
                value: s.to_owned(),
            });
        };
        LocaleKey::new(language_id, sublanguage_id).map(LocaleKey::into_owned)
    }
}

fn normalize(component: KeyComponent, value: &str) -> Result<Cow<'_, str>, LocaleError> {
    let well_formed = Some(value.len()) == component.width()
        && value.bytes().all(|b| b.is_ascii_hexdigit());
    if !well_formed {
        debug!(%component, value, "rejecting malformed locale component");
        return Err(LocaleError::InvalidKeyFormat {
            component,
            value: value.to_owned(),
        });
    }

    if value.bytes().any(|b| b.is_ascii_uppercase()) {
        Ok(Cow::Owned(value.to_ascii_lowercase()))
    } else {
        Ok(Cow::Borrowed(value))
    }
}
