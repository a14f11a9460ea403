//! Normalization stage abstraction.
//!
//! A stage is a single, infallible text transform with a cheap pre-check.
//! Stages take and return `Cow<str>` so a chain of them allocates only when
//! some stage actually changes the text: `needs_apply` returning `false`
//! leaves a borrowed input borrowed.

pub mod lower_case;
pub mod remove_diacritics;
pub mod transliterate;

use crate::context::Context;
use std::borrow::Cow;

pub use lower_case::LowerCase;
pub use remove_diacritics::RemoveDiacritics;
pub use transliterate::Transliterate;

/// A single normalisation step.
pub trait Stage: Send + Sync {
    /// Human-readable name – used in logs and test failure messages.
    fn name(&self) -> &'static str;

    /// Fast pre-check. Returning `false` skips the whole stage.
    fn needs_apply(&self, text: &str, ctx: &Context) -> bool;

    /// Allocation-aware transformation. Must always be correct, even when
    /// `needs_apply` would have returned `false`.
    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str>;
}

/// Run `stages` in order, skipping those whose pre-check declines.
#[inline]
pub fn run<'a>(stages: &[&dyn Stage], text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str> {
    stages.iter().fold(text, |text, stage| {
        if stage.needs_apply(&text, ctx) {
            stage.apply(text, ctx)
        } else {
            text
        }
    })
}
