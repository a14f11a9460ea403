use crate::{context::Context, stage::Stage, unicode::has_uppercase};
use std::borrow::Cow;

/// Full Unicode lowercasing. Zero-copy when the text has nothing to lower.
pub struct LowerCase;

impl Stage for LowerCase {
    fn name(&self) -> &'static str {
        "lower_case"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, _ctx: &Context) -> bool {
        has_uppercase(text)
    }

    fn apply<'a>(&self, text: Cow<'a, str>, _ctx: &Context) -> Cow<'a, str> {
        if !has_uppercase(&text) {
            return text;
        }
        if text.is_ascii() {
            return Cow::Owned(text.to_ascii_lowercase());
        }
        Cow::Owned(text.to_lowercase())
    }
}
