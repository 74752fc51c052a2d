use std::borrow::Cow;

use tracing::trace;

use crate::{error::LocaleError, key::LocaleKey, table::LocaleNameTable};

/// Caller-facing resolver that turns locale codes into text for display.
///
/// The table itself never invents a name. A label for unknown codes only
/// exists if the caller configures one through [`LocaleNames::builder`].
///
/// ```
/// use locale_names::LocaleNames;
///
/// let names = LocaleNames::builder().unknown_label("Unknown locale").build();
/// assert_eq!(names.display_name("009", "02").unwrap(), "English (United Kingdom)");
/// assert_eq!(names.display_name("999", "01").unwrap(), "Unknown locale");
/// ```
#[derive(Debug, Clone, Default)]
pub struct LocaleNames {
    table: LocaleNameTable,
    unknown_label: Option<Cow<'static, str>>,
}

impl LocaleNames {
    pub fn builder() -> LocaleNamesBuilder {
        LocaleNamesBuilder::default()
    }

    #[inline(always)]
    pub fn table(&self) -> LocaleNameTable {
        self.table
    }

    pub fn unknown_label(&self) -> Option<&str> {
        self.unknown_label.as_deref()
    }

    pub fn display_name(&self, language_id: &str, sublanguage_id: &str) -> Result<&str, LocaleError> {
        self.resolve(self.table.lookup(language_id, sublanguage_id))
    }

    pub fn display_name_for(&self, key: &LocaleKey<'_>) -> Result<&str, LocaleError> {
        self.resolve(self.table.lookup_key(key))
    }

    pub fn display_name_for_langid(&self, langid: u16) -> Result<&str, LocaleError> {
        self.resolve(self.table.lookup_langid(langid))
    }

    fn resolve(&self, found: Result<&'static str, LocaleError>) -> Result<&str, LocaleError> {
        match (found, self.unknown_label.as_deref()) {
            (Ok(name), _) => Ok(name),
            (Err(err), Some(label)) => {
                trace!(error = %err, label, "substituting unknown-locale label");
                Ok(label)
            }
            (Err(err), None) => Err(err),
        }
    }
}

#[derive(Debug, Default)]
pub struct LocaleNamesBuilder {
    unknown_label: Option<Cow<'static, str>>,
}

impl LocaleNamesBuilder {
    /// Text returned in place of [`LocaleError::NotFound`] and
    /// [`LocaleError::InvalidKeyFormat`].
    pub fn unknown_label(mut self, label: impl Into<Cow<'static, str>>) -> Self {
        self.unknown_label = Some(label.into());
        self
    }

    pub fn build(self) -> LocaleNames {
        LocaleNames {
            table: LocaleNameTable::new(),
            unknown_label: self.unknown_label,
        }
    }
}
