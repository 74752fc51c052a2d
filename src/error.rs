use thiserror::Error;

use crate::key::KeyComponent;

/// Public error type for every table lookup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocaleError {
    /// The composite key has no entry. Also covers a known language whose
    /// sublanguage (or `"00"` alias) is not declared.
    #[error("no display name for locale `{language_id}:{sublanguage_id}`")]
    NotFound {
        language_id: String,
        sublanguage_id: String,
    },

    #[error("invalid {component}: `{value}`")]
    InvalidKeyFormat {
        component: KeyComponent,
        value: String,
    },
}

impl LocaleError {
    #[inline]
    pub fn is_not_found(&self) -> bool {
        matches!(self, LocaleError::NotFound { .. })
    }
}
