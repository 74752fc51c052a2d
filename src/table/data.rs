use crate::table::LocaleEntry;

use phf::{OrderedMap, phf_ordered_map};

/// ---------------------------------------------------------------------------
///    Macro – builds the whole table from one declaration list
/// ---------------------------------------------------------------------------
///
/// Each language is written as `"lll" { "ss" => "Name", ... }`, ascending by
/// language id, with its sublanguages ascending from `"01"`. Marking a language
/// `[alias]` emits an extra `"00"` entry right after `"01"` carrying the same
/// literal name, for languages whose regional variants are not distinguished.
macro_rules! define_locales {
    (@alias alias, $lang:literal, $name:literal) => {
        LocaleEntry {
            language_id: $lang,
            sublanguage_id: "00",
            display_name: $name,
        }
    };
    ($(
        $lang:literal $( [$alias:ident] )? {
            $first_sub:literal => $first_name:literal
            $(, $sub:literal => $name:literal)* $(,)?
        }
    )*) => {
        /// Every locale keyed by language id, in declaration order.
        pub static LOCALE_TABLE: OrderedMap<&'static str, &'static [LocaleEntry]> = phf_ordered_map! {
            $(
                $lang => &[
                    LocaleEntry {
                        language_id: $lang,
                        sublanguage_id: $first_sub,
                        display_name: $first_name,
                    },
                    $( define_locales!(@alias $alias, $lang, $first_name), )?
                    $(
                        LocaleEntry {
                            language_id: $lang,
                            sublanguage_id: $sub,
                            display_name: $name,
                        },
                    )*
                ],
            )*
        };
    };
}

// ---------------------------------------------------------------------------
//    Locale definitions (single source of truth)
// ---------------------------------------------------------------------------
define_locales! {
    "001" {
        "01" => "Arabic (Saudi Arabia)",
        "02" => "Arabic (Iraq)",
        "03" => "Arabic (Egypt)",
        "04" => "Arabic (Libya)",
        "05" => "Arabic (Algeria)",
        "06" => "Arabic (Morocco)",
        "07" => "Arabic (Tunisia)",
        "08" => "Arabic (Oman)",
        "09" => "Arabic (Yemen)",
        "0a" => "Arabic (Syria)",
        "0b" => "Arabic (Jordan)",
        "0c" => "Arabic (Lebanon)",
        "0d" => "Arabic (Kuwait)",
        "0e" => "Arabic (U.A.E.)",
        "0f" => "Arabic (Bahrain)",
        "10" => "Arabic (Qatar)",
    }
    "002" { "01" => "Bulgarian" }
    "003" { "01" => "Catalan" }
    "004" {
        "01" => "Chinese (Taiwan)",
        "02" => "Chinese (PRC)",
        "03" => "Chinese (Hong Kong S.A.R.)",
        "04" => "Chinese (Singapore)",
        "05" => "Chinese (Macau S.A.R.)",
    }
    "005" [alias] { "01" => "Czech" }
    "006" { "01" => "Danish" }
    "007" {
        "01" => "German (Germany)",
        "02" => "German (Switzerland)",
        "03" => "German (Austria)",
        "04" => "German (Luxembourg)",
        "05" => "German (Liechtenstein)",
    }
    "008" { "01" => "Greek" }
    "009" {
        "01" => "English (United States)",
        "02" => "English (United Kingdom)",
        "03" => "English (Australia)",
        "04" => "English (Canada)",
        "05" => "English (New Zealand)",
        "06" => "English (Ireland)",
        "07" => "English (South Africa)",
        "08" => "English (Jamaica)",
        "09" => "English (Caribbean)",
        "0a" => "English (Belize)",
        "0b" => "English (Trinidad)",
        "0c" => "English (Zimbabwe)",
        "0d" => "English (Philippines)",
    }
    "00a" {
        "01" => "Spanish (Traditional Sort)",
        "02" => "Spanish (Mexico)",
        "03" => "Spanish (International Sort)",
        "04" => "Spanish (Guatemala)",
        "05" => "Spanish (Costa Rica)",
        "06" => "Spanish (Panama)",
        "07" => "Spanish (Dominican Republic)",
        "08" => "Spanish (Venezuela)",
        "09" => "Spanish (Colombia)",
        "0a" => "Spanish (Peru)",
        "0b" => "Spanish (Argentina)",
        "0c" => "Spanish (Ecuador)",
        "0d" => "Spanish (Chile)",
        "0e" => "Spanish (Uruguay)",
        "0f" => "Spanish (Paraguay)",
        "10" => "Spanish (Bolivia)",
        "11" => "Spanish (El Salvador)",
        "12" => "Spanish (Honduras)",
        "13" => "Spanish (Nicaragua)",
        "14" => "Spanish (Puerto Rico)",
    }
    "00b" { "01" => "Finnish" }
    "00c" {
        "01" => "French (France)",
        "02" => "French (Belgium)",
        "03" => "French (Canada)",
        "04" => "French (Switzerland)",
        "05" => "French (Luxembourg)",
        "06" => "French (Monaco)",
    }
    "00d" { "01" => "Hebrew" }
    "00e" [alias] { "01" => "Hungarian" }
    "00f" { "01" => "Icelandic" }
    "010" {
        "01" => "Italian (Italy)",
        "02" => "Italian (Switzerland)",
    }
    "011" [alias] { "01" => "Japanese" }
    "012" [alias] { "01" => "Korean" }
    "013" {
        "01" => "Dutch (Netherlands)",
        "02" => "Dutch (Belgium)",
        "03" => "Dutch (Surinam)",
    }
    "014" {
        "01" => "Norwegian (Bokmal)",
        "02" => "Norwegian (Nynorsk)",
    }
    "015" { "01" => "Polish" }
    "016" {
        "01" => "Portuguese (Brazil)",
        "02" => "Portuguese (Portugal)",
    }
    "017" { "01" => "Romansh (Switzerland)" }
    "018" [alias] { "01" => "Romanian" }
    "019" [alias] { "01" => "Russian" }
    "01a" {
        "01" => "Croatian",
        "02" => "Serbian (Latin)",
        "03" => "Serbian (Cyrillic)",
    }
    "01b" [alias] { "01" => "Slovak" }
    "01c" { "01" => "Albanian" }
    "01d" {
        "01" => "Swedish",
        "02" => "Swedish (Finland)",
    }
    "01e" { "01" => "Thai" }
    "01f" { "01" => "Turkish" }
    "020" { "01" => "Urdu" }
    "021" { "01" => "Indonesian" }
    "022" { "01" => "Ukrainian" }
    "023" { "01" => "Belarusian" }
    "024" [alias] { "01" => "Slovenian" }
    "025" { "01" => "Estonian" }
    "026" { "01" => "Latvian" }
    "027" { "01" => "Lithuanian" }
    "029" { "01" => "Farsi" }
    "02a" { "01" => "Vietnamese" }
    "02b" { "01" => "Armenian" }
    "02c" {
        "01" => "Azeri (Latin)",
        "02" => "Azeri (Cyrillic)",
    }
    "02d" { "01" => "Basque" }
    "02f" { "01" => "FYRO Macedonian" }
    "036" { "01" => "Afrikaans" }
    "037" { "01" => "Georgian" }
    "038" { "01" => "Faeroese" }
    "039" { "01" => "Hindi" }
    "03e" {
        "01" => "Malay (Malaysia)",
        "02" => "Malay (Brunei Darussalam)",
    }
    "03f" { "01" => "Kazakh" }
    "040" { "01" => "Kyrgyz (Cyrillic)" }
    "041" { "01" => "Swahili" }
    "043" {
        "01" => "Uzbek (Latin)",
        "02" => "Uzbek (Cyrillic)",
    }
    "044" { "01" => "Tatar" }
    "046" { "01" => "Punjabi" }
    "047" { "01" => "Gujarati" }
    "049" { "01" => "Tamil" }
    "04a" { "01" => "Telugu" }
    "04b" { "01" => "Kannada" }
    "04e" { "01" => "Marathi" }
    "04f" { "01" => "Sanskrit" }
    "050" { "01" => "Mongolian (Cyrillic)" }
    "052" { "01" => "Welsh (United Kingdom)" }
    "056" { "01" => "Galician" }
    "057" { "01" => "Konkani" }
    "05a" { "01" => "Syriac" }
    "065" { "01" => "Divehi" }
    "07e" { "01" => "Brezhoneg" }
    "08f" [alias] { "01" => "Esperanto" }
    "090" { "01" => "Walon" }
    "091" { "01" => "Cornish (United Kingdom)" }
    "094" {
        "01" => "Gaeilge (Éire)",
        "02" => "Gaidhlig (Breatainn Mhòr)",
        "03" => "Gaelg (Manninn)",
    }
}
