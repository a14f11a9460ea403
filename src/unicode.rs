use unic_ucd_category::GeneralCategory;

// Combining Diacritical Marks block. Checked explicitly because some
// decomposers emit marks here that older category tables do not tag Mn.
#[inline(always)]
pub const fn is_legacy_combining_mark(c: char) -> bool {
    matches!(c as u32, 0x0300..=0x036F)
}

/// Marks removed when stripping diacritics: general category Mn plus the
/// legacy combining block. Spacing marks (Mc) are left alone, they carry
/// vowel sounds in Indic scripts.
#[inline(always)]
pub fn is_strippable_mark(c: char) -> bool {
    if c.is_ascii() {
        return false;
    }
    is_legacy_combining_mark(c) || GeneralCategory::of(c) == GeneralCategory::NonspacingMark
}

#[inline(always)]
pub fn is_mark(c: char) -> bool {
    !c.is_ascii() && GeneralCategory::of(c).is_mark()
}

// Apostrophes that occur inside words: ASCII, right single quotation mark,
// modifier letter apostrophe.
#[inline(always)]
pub const fn is_word_apostrophe(c: char) -> bool {
    matches!(c, '\'' | '\u{2019}' | '\u{02BC}')
}

#[inline(always)]
pub const fn is_word_hyphen(c: char) -> bool {
    matches!(c, '-' | '\u{2010}')
}

/// Characters that make up a word token: letters, combining marks,
/// apostrophes and hyphens. Digits are not word characters.
#[inline(always)]
pub fn is_word_char(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_alphabetic() || c == '\'' || c == '-';
    }
    c.is_alphabetic() || is_mark(c) || is_word_apostrophe(c) || is_word_hyphen(c)
}

#[inline]
pub fn has_uppercase(text: &str) -> bool {
    if text.is_ascii() {
        return text.bytes().any(|b| b.is_ascii_uppercase());
    }
    text.chars().any(|c| c.to_lowercase().next() != Some(c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marks() {
        assert!(is_strippable_mark('\u{0301}'));
        assert!(is_strippable_mark('\u{0323}'));
        assert!(is_strippable_mark('\u{05B8}')); // hebrew qamats
        assert!(!is_strippable_mark('a'));
        assert!(!is_strippable_mark('é'));
        assert!(!is_strippable_mark('\u{093E}')); // devanagari vowel sign aa (Mc)
        assert!(is_mark('\u{093E}'));
    }

    #[test]
    fn word_chars() {
        for c in ['a', 'Z', 'é', 'ß', 'ø', '\'', '-', '’', '\u{0301}', 'д'] {
            assert!(is_word_char(c), "{c:?}");
        }
        for c in [' ', '1', '.', ',', '\t', '"', '(', '😄'] {
            assert!(!is_word_char(c), "{c:?}");
        }
    }

    #[test]
    fn uppercase_detection() {
        assert!(has_uppercase("Hello"));
        assert!(!has_uppercase("hello"));
        assert!(has_uppercase("ÉCOLE"));
        assert!(has_uppercase("ǅ")); // titlecase digraph lowercases
        assert!(!has_uppercase("école"));
    }
}
