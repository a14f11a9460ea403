use crate::{
    context::Context,
    lang::{
        DEFAULT_LANG, Lang,
        mapping::{CharMapping, MappingOverride, ReverseMapping},
    },
    stage::{self, LowerCase, RemoveDiacritics, Stage, Transliterate},
};
use std::borrow::Cow;

/// Lowercase first so uppercase table letters and `İ`-style expansions are
/// folded before decomposition. Transliterate runs again after stripping
/// because decomposition can expose a table letter (`ǿ` → `ø` + acute).
const STAGES: &[&dyn Stage] = &[&LowerCase, &Transliterate, &RemoveDiacritics, &Transliterate];

/// Produces base forms: diacritics removed, table letters spelled in ASCII,
/// lowercased. The dictionary key and the forward transform.
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    ctx: Context,
}

impl Normalizer {
    pub fn new(ctx: Context) -> Self {
        Self { ctx }
    }

    pub fn for_lang(lang: Lang) -> Self {
        Self::new(Context::new(lang))
    }

    pub fn with_overrides(lang: Lang, overrides: &[MappingOverride]) -> Self {
        Self::new(Context::with_overrides(lang, overrides))
    }

    #[inline]
    pub fn context(&self) -> &Context {
        &self.ctx
    }

    #[inline]
    pub fn lang(&self) -> Lang {
        self.ctx.lang
    }

    #[inline]
    pub fn mapping(&self) -> &CharMapping {
        &self.ctx.mapping
    }

    #[inline]
    pub fn reverse(&self) -> &ReverseMapping {
        self.ctx.reverse()
    }

    /// Base form of `text`. Borrows the input when it already is one.
    /// Idempotent: `normalize(normalize(x)) == normalize(x)`.
    #[inline]
    pub fn normalize<'a>(&self, text: &'a str) -> Cow<'a, str> {
        stage::run(STAGES, Cow::Borrowed(text), &self.ctx)
    }
}

/// Strip diacritics from `text` using `lang`'s mapping table, lowercasing the
/// result. Needs no dictionary.
pub fn remove_diacritics(text: &str, lang: Lang) -> Cow<'_, str> {
    if text.is_ascii() && !text.bytes().any(|b| b.is_ascii_uppercase()) {
        return Cow::Borrowed(text);
    }
    Normalizer::for_lang(lang).normalize(text)
}

/// [`remove_diacritics`] with no language table: decomposition only.
pub fn remove_diacritics_default(text: &str) -> Cow<'_, str> {
    remove_diacritics(text, DEFAULT_LANG)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::data::{DAN, DEU, ENG, HUN, ISL, POL, TUR, VIE};

    #[test]
    fn lowercases_explicitly() {
        assert_eq!(remove_diacritics("ÁÉÍÓÚ", HUN), "aeiou");
        assert_ne!(remove_diacritics("ÁÉÍÓÚ", HUN), "AEIOU");
    }

    #[test]
    fn table_runs_before_decomposition() {
        assert_eq!(remove_diacritics("Straße", DEU), "strasse");
        assert_eq!(remove_diacritics("GRØD", DAN), "groed");
        assert_eq!(remove_diacritics("Þórður", ISL), "thordur");
        assert_eq!(remove_diacritics("Łódź", POL), "lodz");
        assert_eq!(remove_diacritics("Đà Nẵng", VIE), "da nang");
    }

    #[test]
    fn without_table_undecomposable_letters_stay() {
        assert_eq!(remove_diacritics("Grød", ENG), "grød");
        assert_eq!(remove_diacritics_default("Crème"), "creme");
    }

    #[test]
    fn decomposition_can_expose_table_letters() {
        // ǿ = ø + combining acute
        assert_eq!(remove_diacritics("ǿ", DAN), "oe");
    }

    #[test]
    fn turkish_dotted_and_dotless() {
        assert_eq!(remove_diacritics("İstanbul", TUR), "istanbul");
        assert_eq!(remove_diacritics("ılık", TUR), "ilik");
    }

    #[test]
    fn ascii_lowercase_is_zero_copy() {
        let input = "already plain";
        assert!(matches!(remove_diacritics(input, DEU), Cow::Borrowed(s) if s.as_ptr() == input.as_ptr()));
        let n = Normalizer::for_lang(DEU);
        assert!(matches!(n.normalize(input), Cow::Borrowed(_)));
    }

    #[test]
    fn empty_input() {
        assert_eq!(remove_diacritics("", DEU), "");
    }

    #[test]
    fn idempotent_on_samples() {
        for lang in crate::lang::ALL_LANGS {
            let n = Normalizer::for_lang(*lang);
            for s in ["Straße", "ǾRE", "İĞDIR", "Þórður", "ǅemal", "e\u{0301}", "한국어", "½ ﬁ"] {
                let once = n.normalize(s).into_owned();
                let twice = n.normalize(&once).into_owned();
                assert_eq!(once, twice, "{lang}: {s}");
            }
        }
    }
}
