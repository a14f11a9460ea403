//! The restoration engine.
//!
//! A [`Restorer`] owns one language session at a time: the normalizer for the
//! active mapping table, the dictionary built for that language, the ignored
//! base forms and a bounded result cache. Changing language replaces the whole
//! session; nothing is patched in place.

use crate::{
    cache::{DEFAULT_CAPACITY, RestorationCache},
    case::apply_case,
    dictionary::{Dictionary, DictionaryLoadError, LoadStats},
    fallback::{DEFAULT_MAX_SUFFIX_LEN, DEFAULT_MIN_STEM_LEN, FallbackStrategy, SuffixMatcher},
    lang::{DEFAULT_LANG, Lang, from_code, mapping::MappingOverride},
    normalizer::Normalizer,
    source::{DictionaryPaths, DictionarySource},
    tokenize::tokens,
};
use hashbrown::HashSet;
use log::{debug, info, trace};
use serde::{Deserialize, Serialize};
use std::{borrow::Cow, fmt, sync::Arc};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// No dictionary loaded yet.
    Uninitialized,
    Ready,
    /// Terminal. All state released.
    Disposed,
}

impl fmt::Display for EngineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EngineState::Uninitialized => "uninitialized",
            EngineState::Ready => "ready",
            EngineState::Disposed => "disposed",
        })
    }
}

#[derive(Debug, Error)]
pub enum RestoreError {
    #[error("restorer is {0}, not ready")]
    NotInitialized(EngineState),
    #[error("restorer has been disposed")]
    Disposed,
    #[error("unknown language code `{0}`")]
    UnknownLanguage(String),
    #[error(transparent)]
    Load(#[from] DictionaryLoadError),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RestorerConfig {
    pub lang: Lang,
    /// Try [`SuffixMatcher`] when a base form has no exact entry.
    pub suffix_matching: bool,
    pub min_stem_len: usize,
    pub max_suffix_len: usize,
    /// Zero disables caching.
    pub cache_capacity: usize,
    /// Words restoration must leave alone. Compared by base form.
    pub ignored_words: Vec<String>,
    /// Appended to the language's static mapping table.
    pub overrides: Vec<MappingOverride>,
}

impl Default for RestorerConfig {
    fn default() -> Self {
        Self {
            lang: DEFAULT_LANG,
            suffix_matching: false,
            min_stem_len: DEFAULT_MIN_STEM_LEN,
            max_suffix_len: DEFAULT_MAX_SUFFIX_LEN,
            cache_capacity: DEFAULT_CAPACITY,
            ignored_words: Vec::new(),
            overrides: Vec::new(),
        }
    }
}

/// Everything tied to one active language.
struct Session {
    normalizer: Normalizer,
    dictionary: Dictionary,
    ignored: HashSet<Box<str>>,
    stats: LoadStats,
    cache: RestorationCache,
}

impl Session {
    fn restore_token<'t>(
        &mut self,
        token: &'t str,
        fallback: Option<&dyn FallbackStrategy>,
    ) -> Cow<'t, str> {
        if let Some(hit) = self.cache.get(token) {
            return if hit == token {
                Cow::Borrowed(token)
            } else {
                Cow::Owned(hit.to_owned())
            };
        }

        let base = self.normalizer.normalize(token);
        let candidate = if base.is_empty() || self.ignored.contains(&*base) {
            None
        } else if let Some(entry) = self.dictionary.best(&base) {
            Some(Cow::Borrowed(entry.word()))
        } else {
            fallback
                .and_then(|f| f.try_match(token, &base, &self.dictionary))
                .map(Cow::Owned)
        };

        let restored = match candidate {
            Some(c) => apply_case(token, &c, Some(self.normalizer.reverse())),
            None => {
                self.cache.insert(token, token);
                return Cow::Borrowed(token);
            }
        };
        trace!("{token} -> {restored}");
        self.cache.insert(token, &restored);
        if restored == token {
            Cow::Borrowed(token)
        } else {
            Cow::Owned(restored)
        }
    }
}

/// Restores diacritics in ASCII-folded text using a frequency dictionary.
///
/// ```no_run
/// use accentor::{DictionaryPaths, Restorer, lang::data::HUN};
///
/// let paths = DictionaryPaths::new().with(HUN, "dict/hu.tsv");
/// let mut restorer = Restorer::builder().lang(HUN).source(paths).build();
/// restorer.initialize()?;
/// assert_eq!(restorer.restore("Kalacs")?, "Kalács");
/// # Ok::<(), accentor::RestoreError>(())
/// ```
pub struct Restorer {
    config: RestorerConfig,
    source: Arc<dyn DictionarySource>,
    fallback: Option<Arc<dyn FallbackStrategy>>,
    session: Option<Session>,
    disposed: bool,
}

impl fmt::Debug for Restorer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Restorer")
            .field("lang", &self.config.lang)
            .field("state", &self.state())
            .field("fallback", &self.fallback.as_ref().map(|s| s.name()))
            .field("cache_len", &self.cache_len())
            .field("dictionary_len", &self.dictionary_len())
            .finish_non_exhaustive()
    }
}

impl Restorer {
    pub fn builder() -> RestorerBuilder {
        RestorerBuilder::default()
    }

    pub fn new(config: RestorerConfig, source: impl DictionarySource + 'static) -> Self {
        Self::builder().config(config).source(source).build()
    }

    /// Load the dictionary for the configured language. Calling it again
    /// reloads. On failure a previously loaded session stays active.
    pub fn initialize(&mut self) -> Result<(), RestoreError> {
        self.switch_to(self.config.lang)
    }

    /// Switch to the language named by `code` (`"DEU"`, `"de"`), rebuilding
    /// dictionary and cache. On failure the previous session stays active.
    pub fn change_language(&mut self, code: &str) -> Result<(), RestoreError> {
        let lang = from_code(code).ok_or_else(|| RestoreError::UnknownLanguage(code.to_owned()))?;
        self.change_lang(lang)
    }

    pub fn change_lang(&mut self, lang: Lang) -> Result<(), RestoreError> {
        debug!("changing language {} -> {lang}", self.config.lang);
        self.switch_to(lang)
    }

    fn switch_to(&mut self, lang: Lang) -> Result<(), RestoreError> {
        if self.disposed {
            return Err(RestoreError::Disposed);
        }
        let session = self.load(lang)?;
        self.config.lang = lang;
        self.session = Some(session);
        Ok(())
    }

    fn load(&self, lang: Lang) -> Result<Session, RestoreError> {
        let normalizer = Normalizer::with_overrides(lang, &self.config.overrides);
        let reader = self.source.open(lang)?;
        let (dictionary, stats) = Dictionary::from_reader(reader, &normalizer)
            .map_err(|source| DictionaryLoadError::Io { lang, source })?;

        let ignored: HashSet<Box<str>> = self
            .config
            .ignored_words
            .iter()
            .map(|w| normalizer.normalize(w.trim()))
            .filter(|w| !w.is_empty())
            .map(|w| w.into_owned().into_boxed_str())
            .collect();

        info!(
            "{lang} ready: {} base forms, {} ignored",
            dictionary.len(),
            ignored.len()
        );
        Ok(Session {
            normalizer,
            dictionary,
            ignored,
            stats,
            cache: RestorationCache::with_capacity(self.config.cache_capacity),
        })
    }

    /// Release dictionary and cache. The restorer cannot be used afterwards.
    pub fn dispose(&mut self) {
        if !self.disposed {
            debug!("disposing {} restorer", self.config.lang);
        }
        self.session = None;
        self.disposed = true;
    }

    fn session_mut(&mut self) -> Result<&mut Session, RestoreError> {
        let state = self.state();
        self.session
            .as_mut()
            .ok_or(RestoreError::NotInitialized(state))
    }

    /// Restore every word of `text`. Non-word spans are copied unchanged.
    /// Borrows `text` when no word changes.
    pub fn restore<'a>(&mut self, text: &'a str) -> Result<Cow<'a, str>, RestoreError> {
        let fallback = self.fallback.clone();
        let session = self.session_mut()?;

        let mut out: Option<String> = None;
        for tok in tokens(text) {
            let restored = if tok.is_word() {
                session.restore_token(tok.text, fallback.as_deref())
            } else {
                Cow::Borrowed(tok.text)
            };
            match (restored, out.as_mut()) {
                (Cow::Borrowed(_), None) => {}
                (Cow::Borrowed(s), Some(out)) => out.push_str(s),
                (Cow::Owned(s), Some(out)) => out.push_str(&s),
                (Cow::Owned(s), None) => {
                    let mut buf = String::with_capacity(text.len() + 8);
                    buf.push_str(&text[..tok.start]);
                    buf.push_str(&s);
                    out = Some(buf);
                }
            }
        }
        Ok(out.map_or(Cow::Borrowed(text), Cow::Owned))
    }

    /// Restore a single token without splitting it.
    pub fn restore_word<'a>(&mut self, word: &'a str) -> Result<Cow<'a, str>, RestoreError> {
        let fallback = self.fallback.clone();
        let session = self.session_mut()?;
        Ok(session.restore_token(word, fallback.as_deref()))
    }

    pub fn state(&self) -> EngineState {
        match (&self.session, self.disposed) {
            (_, true) => EngineState::Disposed,
            (Some(_), false) => EngineState::Ready,
            (None, false) => EngineState::Uninitialized,
        }
    }

    #[inline]
    pub fn is_ready(&self) -> bool {
        self.state() == EngineState::Ready
    }

    /// Language of the active session, or the one `initialize` will load.
    #[inline]
    pub fn current_language(&self) -> Lang {
        self.config.lang
    }

    pub fn cache_len(&self) -> usize {
        self.session.as_ref().map_or(0, |s| s.cache.len())
    }

    /// Distinct base forms in the loaded dictionary.
    pub fn dictionary_len(&self) -> usize {
        self.session.as_ref().map_or(0, |s| s.dictionary.len())
    }

    pub fn load_stats(&self) -> Option<LoadStats> {
        self.session.as_ref().map(|s| s.stats)
    }

    /// Base-form normalizer of the active session.
    pub fn normalizer(&self) -> Option<&Normalizer> {
        self.session.as_ref().map(|s| &s.normalizer)
    }

    pub fn config(&self) -> &RestorerConfig {
        &self.config
    }
}

pub struct RestorerBuilder {
    config: RestorerConfig,
    source: Option<Arc<dyn DictionarySource>>,
    fallback: Option<Arc<dyn FallbackStrategy>>,
}

impl Default for RestorerBuilder {
    fn default() -> Self {
        Self {
            config: RestorerConfig::default(),
            source: None,
            fallback: None,
        }
    }
}

impl RestorerBuilder {
    /// Replace every setting at once.
    pub fn config(mut self, config: RestorerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn lang(mut self, lang: Lang) -> Self {
        self.config.lang = lang;
        self
    }

    pub fn suffix_matching(mut self, on: bool) -> Self {
        self.config.suffix_matching = on;
        self
    }

    pub fn min_stem_len(mut self, len: usize) -> Self {
        self.config.min_stem_len = len;
        self
    }

    pub fn max_suffix_len(mut self, len: usize) -> Self {
        self.config.max_suffix_len = len;
        self
    }

    pub fn cache_capacity(mut self, capacity: usize) -> Self {
        self.config.cache_capacity = capacity;
        self
    }

    pub fn ignore_word(mut self, word: impl Into<String>) -> Self {
        self.config.ignored_words.push(word.into());
        self
    }

    pub fn ignore_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config
            .ignored_words
            .extend(words.into_iter().map(Into::into));
        self
    }

    pub fn mapping_override(mut self, o: MappingOverride) -> Self {
        self.config.overrides.push(o);
        self
    }

    pub fn source<S: DictionarySource + 'static>(mut self, source: S) -> Self {
        self.source = Some(Arc::new(source));
        self
    }

    /// Use `strategy` for exact-lookup misses instead of the built-in suffix
    /// matcher. A custom strategy is consulted even when `suffix_matching`
    /// is off.
    pub fn fallback<F: FallbackStrategy + 'static>(mut self, strategy: F) -> Self {
        self.fallback = Some(Arc::new(strategy));
        self
    }

    pub fn build(self) -> Restorer {
        let fallback = self.fallback.or_else(|| {
            self.config.suffix_matching.then(|| {
                Arc::new(SuffixMatcher::new(
                    self.config.min_stem_len,
                    self.config.max_suffix_len,
                )) as Arc<dyn FallbackStrategy>
            })
        });
        Restorer {
            source: self
                .source
                .unwrap_or_else(|| Arc::new(DictionaryPaths::new())),
            fallback,
            config: self.config,
            session: None,
            disposed: false,
        }
    }
}
