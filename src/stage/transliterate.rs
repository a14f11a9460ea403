//! stage/transliterate.rs – **letter → ASCII spelling from the mapping table**
//! * Danish ø → "oe", German ß → "ss", Icelandic þ → "th", Polish ł → "l"
//! * Handles the letters canonical decomposition cannot reduce to ASCII
//! * Zero-cost when the language has no mapping rows
use crate::{context::Context, stage::Stage};
use std::borrow::Cow;

/// Replaces every letter the active mapping table knows with its ASCII form.
pub struct Transliterate;

impl Stage for Transliterate {
    fn name(&self) -> &'static str {
        "transliterate"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, ctx: &Context) -> bool {
        let map = &ctx.mapping;
        if map.is_empty() || text.is_ascii() {
            return false;
        }
        text.chars().any(|c| map.contains(c))
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str> {
        let map = &ctx.mapping;
        if map.is_empty() || text.is_ascii() {
            return text; // Zero-cost fast path
        }

        let mut out: Option<String> = None;
        for (i, c) in text.char_indices() {
            match (map.forward(c), out.as_mut()) {
                (Some(to), Some(out)) => out.push_str(to),
                (Some(to), None) => {
                    let mut s = String::with_capacity(text.len() + 4);
                    s.push_str(&text[..i]);
                    s.push_str(to);
                    out = Some(s);
                }
                (None, Some(out)) => out.push(c),
                (None, None) => {}
            }
        }
        out.map_or(text, Cow::Owned)
    }
}
