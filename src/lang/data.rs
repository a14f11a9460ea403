use crate::lang::{Lang, LangEntry, MappingPair};

use paste::paste;
use phf::{Map, phf_map};

/// ---------------------------------------------------------------------------
///    Macro – generates everything from a single table
/// ---------------------------------------------------------------------------
macro_rules! define_languages {
($(
        $code:ident, $code_str:literal, $iso1:literal, $name:literal,
        map: [ $($from:expr => $to:expr),* $(,)? ]
    ),* $(,)?) => {
        // Public `Lang` constants
        $(
            pub const $code: Lang = Lang { code: $code_str, iso1: $iso1, name: $name };
        )*

        // Per-language static data modules
        $(
            paste! {
                mod [<$code:lower _data>] {
                    use super::*;

                    pub static MAP: &[MappingPair] = &[
                        $(MappingPair { from: $from, to: $to }),*
                    ];
                }
            }
        )*

        // Global lookup table (public)
        paste! {
            pub static LANG_TABLE: Map<&'static str, LangEntry> = phf_map! {
                $(
                    $code_str => LangEntry {
                        mapping: [<$code:lower _data>]::MAP,
                    }
                ),*
            };
        }

        pub static ALL_LANGS: &[Lang] = &[$($code),*];

        /// Resolve a language from its ISO 639-2 code (`HUN`) or ISO 639-1
        /// alias (`hu`), case-insensitively.
        pub fn from_code(code: &str) -> Option<Lang> {
            let upper = code.trim().to_uppercase();
            match upper.as_str() {
                $(
                    $code_str => Some($code),
                )*
                _ => ALL_LANGS
                    .iter()
                    .copied()
                    .find(|l| l.iso1.eq_ignore_ascii_case(&upper)),
            }
        }
    };
}

// ---------------------------------------------------------------------------
//    Language definitions (single source of truth)
//    Only letters that canonical decomposition leaves non-ASCII, or that are
//    conventionally written as a digraph, need a row. Lowercase rows come
//    first: on ASCII collisions the first declared letter is the one restored.
// ---------------------------------------------------------------------------
define_languages! {
    ENG, "ENG", "en", "English",
        map: [],

    DEU, "DEU", "de", "German",
        map: [ 'ß' => "ss", 'ẞ' => "ss" ],

    FRA, "FRA", "fr", "French",
        map: [ 'œ' => "oe", 'Œ' => "oe", 'æ' => "ae", 'Æ' => "ae" ],

    DAN, "DAN", "da", "Danish",
        map: [
            'æ' => "ae", 'ø' => "oe", 'å' => "aa",
            'Æ' => "ae", 'Ø' => "oe", 'Å' => "aa",
        ],

    NOR, "NOR", "no", "Norwegian",
        map: [
            'æ' => "ae", 'ø' => "oe", 'å' => "aa",
            'Æ' => "ae", 'Ø' => "oe", 'Å' => "aa",
        ],

    SWE, "SWE", "sv", "Swedish",
        map: [],

    ISL, "ISL", "is", "Icelandic",
        map: [
            'þ' => "th", 'ð' => "d", 'æ' => "ae",
            'Þ' => "th", 'Ð' => "d", 'Æ' => "ae",
        ],

    FIN, "FIN", "fi", "Finnish",
        map: [],

    EST, "EST", "et", "Estonian",
        map: [],

    CES, "CES", "cs", "Czech",
        map: [],

    SLK, "SLK", "sk", "Slovak",
        map: [],

    POL, "POL", "pl", "Polish",
        map: [ 'ł' => "l", 'Ł' => "l" ],

    HUN, "HUN", "hu", "Hungarian",
        map: [],

    SLV, "SLV", "sl", "Slovenian",
        map: [],

    HRV, "HRV", "hr", "Croatian",
        map: [ 'đ' => "dj", 'Đ' => "dj" ],

    SRP, "SRP", "sr", "Serbian (Latin)",
        map: [ 'đ' => "dj", 'Đ' => "dj" ],

    RON, "RON", "ro", "Romanian",
        map: [],

    LAV, "LAV", "lv", "Latvian",
        map: [],

    LIT, "LIT", "lt", "Lithuanian",
        map: [],

    TUR, "TUR", "tr", "Turkish",
        map: [ 'ı' => "i" ],

    SPA, "SPA", "es", "Spanish",
        map: [],

    POR, "POR", "pt", "Portuguese",
        map: [],

    ITA, "ITA", "it", "Italian",
        map: [],

    CAT, "CAT", "ca", "Catalan",
        map: [ 'ŀ' => "l", 'Ŀ' => "l" ],

    VIE, "VIE", "vi", "Vietnamese",
        map: [ 'đ' => "d", 'Đ' => "d" ],
}
