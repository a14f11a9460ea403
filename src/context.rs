// src/context.rs
// Language configuration handed to every normalization stage. Cheap to clone:
// the mapping table is shared.

use crate::lang::{
    DEFAULT_LANG, Lang,
    mapping::{CharMapping, MappingOverride, ReverseMapping},
};
use std::sync::Arc;

/// Runtime context passed to every normalization stage.
///
/// Contains:
/// - `lang`: human identifier (for logging and diagnostics)
/// - `mapping`: the letter ↔ ASCII table in effect, overrides included
#[derive(Debug, Clone)]
pub struct Context {
    pub lang: Lang,
    pub mapping: Arc<CharMapping>,
}

impl Default for Context {
    #[inline]
    fn default() -> Self {
        Self::new(DEFAULT_LANG)
    }
}

impl Context {
    /// Create a context using the canonical static data for a language.
    #[inline]
    pub fn new(lang: Lang) -> Self {
        Self {
            lang,
            mapping: Arc::new(CharMapping::new(lang)),
        }
    }

    /// Create a context whose table is the language's static data with
    /// caller overrides appended.
    pub fn with_overrides(lang: Lang, overrides: &[MappingOverride]) -> Self {
        Self {
            lang,
            mapping: Arc::new(CharMapping::with_overrides(lang, overrides)),
        }
    }

    #[inline(always)]
    pub fn reverse(&self) -> &ReverseMapping {
        self.mapping.reverse()
    }
}
