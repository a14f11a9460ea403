//! src/stage/remove_diacritics.rs
//!
//! Removes diacritical marks using canonical decomposition.

use crate::{context::Context, stage::Stage, unicode::is_strippable_mark};
use std::borrow::Cow;
use unicode_normalization::char::decompose_canonical;

/// Removes combining diacritical marks without expanding compatibility
/// characters (ligatures, fractions, superscripts, etc.).
///
/// # Normalization Form
///
/// Each character is fully **canonically decomposed** (NFD) before filtering:
/// - Precomposed characters decomposed: `é` → `e` + combining acute
/// - Marks already in decomposed form are dropped as they are met
/// - **Ligatures preserved**: `ﬁ` remains `ﬁ`
/// - Letters without a decomposition (`ø`, `ß`, `þ`, `ł`) pass through
///   untouched; the [`Transliterate`](crate::stage::Transliterate) stage
///   handles those.
///
/// Characters that lose no mark keep their original encoding, so text in
/// scripts with mark-free canonical decompositions (Hangul) is not rewritten.
pub struct RemoveDiacritics;

impl Stage for RemoveDiacritics {
    fn name(&self) -> &'static str {
        "remove_diacritics"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, _ctx: &Context) -> bool {
        !text.is_empty() && !text.is_ascii()
    }

    fn apply<'a>(&self, text: Cow<'a, str>, _ctx: &Context) -> Cow<'a, str> {
        if text.is_ascii() {
            return text;
        }

        let mut out: Option<String> = None;
        let mut parts: smallvec::SmallVec<[char; 4]> = smallvec::SmallVec::new();

        for (i, c) in text.char_indices() {
            if c.is_ascii() {
                if let Some(out) = out.as_mut() {
                    out.push(c);
                }
                continue;
            }

            parts.clear();
            let mut stripped = false;
            decompose_canonical(c, |d| {
                if is_strippable_mark(d) {
                    stripped = true;
                } else {
                    parts.push(d);
                }
            });

            match (stripped, out.as_mut()) {
                (false, Some(out)) => out.push(c),
                (false, None) => {}
                (true, Some(out)) => out.extend(parts.iter()),
                (true, None) => {
                    let mut s = String::with_capacity(text.len());
                    s.push_str(&text[..i]);
                    s.extend(parts.iter());
                    out = Some(s);
                }
            }
        }

        out.map_or(text, Cow::Owned)
    }
}

// ============================================================================
// Tests
// ============================================================================
