#[cfg(test)]
mod unit_tests {

    use crate::{KeyComponent, LocaleError, LocaleKey, language_exists, lookup};
    use std::borrow::Cow;

    #[test]
    fn english_regions() {
        assert_eq!(lookup("009", "01").unwrap(), "English (United States)");
        assert_eq!(lookup("009", "02").unwrap(), "English (United Kingdom)");
        assert_eq!(lookup("009", "0d").unwrap(), "English (Philippines)");
    }

    #[test]
    fn czech_alias() {
        assert_eq!(lookup("005", "00").unwrap(), "Czech");
        assert_eq!(lookup("005", "00").unwrap(), lookup("005", "01").unwrap());
    }

    #[test]
    fn english_has_no_alias() {
        let err = lookup("009", "00").unwrap_err();
        assert_eq!(
            err,
            LocaleError::NotFound {
                language_id: "009".into(),
                sublanguage_id: "00".into(),
            }
        );
    }

    #[test]
    fn manx() {
        assert_eq!(lookup("094", "03").unwrap(), "Gaelg (Manninn)");
        assert_eq!(lookup("094", "01").unwrap(), "Gaeilge (Éire)");
    }

    #[test]
    fn unknown_language() {
        assert!(lookup("999", "01").unwrap_err().is_not_found());
        assert!(!language_exists("999"));
    }

    #[test]
    fn known_language_unknown_sublanguage() {
        // Bulgarian only declares "01"; "02" must not fall back to it.
        assert!(lookup("002", "02").unwrap_err().is_not_found());
        assert!(language_exists("002"));
    }

    #[test]
    fn gap_in_language_ids() {
        // 028 and 02e are skipped in the data.
        assert!(!language_exists("028"));
        assert!(!language_exists("02e"));
        assert_eq!(lookup("029", "01").unwrap(), "Farsi");
    }

    #[test]
    fn uppercase_is_folded() {
        assert_eq!(lookup("00A", "0B").unwrap(), "Spanish (Argentina)");
        assert!(language_exists("01A"));

        let key = LocaleKey::new("00C", "03").unwrap();
        assert_eq!(key.language_id(), "00c");
        let (language, sublanguage) = key.into_parts();
        assert!(matches!(language, Cow::Owned(_)));
        assert!(matches!(sublanguage, Cow::Borrowed("03")));
    }

    #[test]
    fn lowercase_is_borrowed() {
        let input = "00c";
        let key = LocaleKey::new(input, "03").unwrap();
        let (language, _) = key.into_parts();
        assert!(matches!(language, Cow::Borrowed(s) if s.as_ptr() == input.as_ptr()));
    }

    #[test]
    fn rejects_wrong_width() {
        assert_eq!(
            lookup("9", "01").unwrap_err(),
            LocaleError::InvalidKeyFormat {
                component: KeyComponent::Language,
                value: "9".into(),
            }
        );
        assert_eq!(
            lookup("009", "1").unwrap_err(),
            LocaleError::InvalidKeyFormat {
                component: KeyComponent::Sublanguage,
                value: "1".into(),
            }
        );
        assert!(matches!(
            lookup("0009", "01"),
            Err(LocaleError::InvalidKeyFormat { .. })
        ));
    }

    #[test]
    fn rejects_non_hex() {
        assert!(matches!(
            lookup("00g", "01"),
            Err(LocaleError::InvalidKeyFormat { component: KeyComponent::Language, .. })
        ));
        assert!(matches!(
            lookup("009", "+1"),
            Err(LocaleError::InvalidKeyFormat { component: KeyComponent::Sublanguage, .. })
        ));
        assert!(!language_exists("zzz"));
    }

    #[test]
    fn parses_composite_notation() {
        let key: LocaleKey<'static> = "094:02".parse().unwrap();
        assert_eq!(key.language_id(), "094");
        assert_eq!(key.sublanguage_id(), "02");
        assert_eq!(key.to_string(), "094:02");

        let upper: LocaleKey<'static> = "01A:03".parse().unwrap();
        assert_eq!(upper.to_string(), "01a:03");
    }

    #[test]
    fn rejects_composite_without_separator() {
        let err = "00901".parse::<LocaleKey<'static>>().unwrap_err();
        assert_eq!(
            err,
            LocaleError::InvalidKeyFormat {
                component: KeyComponent::Composite,
                value: "00901".into(),
            }
        );
    }

    #[test]
    fn langid_split() {
        // 0x0409 = en-US, 0x0809 = en-GB, 0x0c0c = fr-CA
        assert_eq!(LocaleKey::from_langid(0x0409).to_string(), "009:01");
        assert_eq!(LocaleKey::from_langid(0x0809).to_string(), "009:02");
        assert_eq!(LocaleKey::from_langid(0x0c0c).to_string(), "00c:03");
        assert_eq!(LocaleKey::from_langid(0x0005).to_string(), "005:00");
        assert_eq!(LocaleKey::from_langid(0xffff).to_string(), "3ff:3f");
        assert!(LocaleKey::from_langid(0x0005).is_unspecified_sublanguage());
        assert!(!LocaleKey::from_langid(0x0405).is_unspecified_sublanguage());
    }

    #[test]
    fn langid_round_trip_limits() {
        assert_eq!(LocaleKey::new("009", "02").unwrap().to_langid(), Some(0x0809));
        assert_eq!(LocaleKey::new("400", "01").unwrap().to_langid(), None);
        assert_eq!(LocaleKey::new("009", "40").unwrap().to_langid(), None);
    }

    #[test]
    fn error_messages() {
        let err = lookup("009", "00").unwrap_err();
        assert_eq!(err.to_string(), "no display name for locale `009:00`");

        let err = lookup("09", "01").unwrap_err();
        assert_eq!(err.to_string(), "invalid language_id (3 hex digits): `09`");
    }
}
