//! Fallback strategies for tokens whose base form is not in the dictionary.

use crate::dictionary::Dictionary;
use log::trace;

/// Second-chance lookup consulted after an exact base-form miss.
///
/// `word` is the token as written; `base_form` is its normalized key. The
/// returned spelling is lowercase-ish dictionary text; the caller re-applies
/// the token's case.
pub trait FallbackStrategy: Send + Sync {
    fn name(&self) -> &'static str;

    fn try_match(&self, word: &str, base_form: &str, dictionary: &Dictionary) -> Option<String>;
}

pub const DEFAULT_MIN_STEM_LEN: usize = 4;
pub const DEFAULT_MAX_SUFFIX_LEN: usize = 3;

/// Matches an inflected form against a shorter stem and reattaches the
/// dropped suffix: `kalacsot` → `kalács` + `ot`.
///
/// Stems are tried longest first, from one character short of the word down
/// to `max(min_stem, len - max_suffix_len)` where
/// `min_stem = max(min_stem_len, floor(0.6 × len))`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuffixMatcher {
    pub min_stem_len: usize,
    pub max_suffix_len: usize,
}

impl Default for SuffixMatcher {
    fn default() -> Self {
        Self {
            min_stem_len: DEFAULT_MIN_STEM_LEN,
            max_suffix_len: DEFAULT_MAX_SUFFIX_LEN,
        }
    }
}

impl SuffixMatcher {
    pub fn new(min_stem_len: usize, max_suffix_len: usize) -> Self {
        Self {
            min_stem_len,
            max_suffix_len,
        }
    }

    /// Inclusive range of stem lengths probed for a base form of `len`
    /// characters, longest first. Empty when the word is too short.
    pub fn stem_lengths(&self, len: usize) -> impl Iterator<Item = usize> + use<> {
        let min_stem = self.min_stem_len.max(len * 3 / 5);
        let lowest = min_stem.max(len.saturating_sub(self.max_suffix_len)).max(1);
        (lowest..len).rev()
    }
}

impl FallbackStrategy for SuffixMatcher {
    fn name(&self) -> &'static str {
        "suffix"
    }

    fn try_match(&self, word: &str, base_form: &str, dictionary: &Dictionary) -> Option<String> {
        let base: Vec<(usize, char)> = base_form.char_indices().collect();
        let len = base.len();

        // The suffix is copied from the token itself when its lowercase form
        // lines up with the base form character for character.
        let lowered = word.to_lowercase();
        let aligned = lowered.chars().count() == len;

        for stem_len in self.stem_lengths(len) {
            let split = base[stem_len].0;
            let Some(entry) = dictionary.best(&base_form[..split]) else {
                continue;
            };
            let suffix = if aligned {
                let (at, _) = lowered.char_indices().nth(stem_len)?;
                &lowered[at..]
            } else {
                &base_form[split..]
            };
            trace!(
                "suffix match: {word} -> stem {:?} + {suffix:?}",
                entry.word()
            );
            let mut out = String::with_capacity(entry.word().len() + suffix.len());
            out.push_str(entry.word());
            out.push_str(suffix);
            return Some(out);
        }
        None
    }
}
