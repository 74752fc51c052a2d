//! Display names for two-part hex locale codes (`language_id:sublanguage_id`).
//!
//! The table is compiled into a static perfect-hash map, so it is complete
//! before first use and never changes afterwards.
//!
//! ```
//! assert_eq!(locale_names::lookup("009", "01").unwrap(), "English (United States)");
//! assert_eq!(locale_names::lookup("005", "00").unwrap(), "Czech");
//! assert!(locale_names::lookup("009", "00").unwrap_err().is_not_found());
//! ```

pub mod error;
pub mod key;
pub mod names;
pub mod table;

pub use error::LocaleError;
pub use key::{KeyComponent, LocaleKey};
pub use names::{LocaleNames, LocaleNamesBuilder};
pub use table::{LocaleEntry, LocaleNameTable, language_exists, lookup};
