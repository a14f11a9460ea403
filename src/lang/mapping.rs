//! Runtime character mapping: a language's static table plus validated
//! caller overrides, with the derived ASCII → letter reverse index.

use crate::lang::Lang;
use hashbrown::HashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MappingError {
    #[error("mapping key `{0}` must be exactly one character")]
    InvalidKey(String),
    #[error("mapping key `{0}` is already ASCII")]
    AsciiKey(char),
    #[error("mapping for `{from}` must be a non-empty ASCII string, got `{to}`")]
    InvalidValue { from: char, to: String },
}

/// A caller-supplied `(letter, ascii form)` pair. Construction validates it, so
/// a held value is always safe to merge into a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "(String, String)", into = "(String, String)")]
pub struct MappingOverride {
    from: char,
    to: String,
}

impl MappingOverride {
    pub fn new(from: char, to: impl Into<String>) -> Result<Self, MappingError> {
        let to = to.into();
        if from.is_ascii() {
            return Err(MappingError::AsciiKey(from));
        }
        if to.is_empty() || !to.is_ascii() {
            return Err(MappingError::InvalidValue { from, to });
        }
        Ok(Self {
            from,
            to: to.to_ascii_lowercase(),
        })
    }

    /// Parse an untyped key/value pair as found in editor settings.
    pub fn parse(key: &str, value: &str) -> Result<Self, MappingError> {
        let mut chars = key.chars();
        match (chars.next(), chars.next()) {
            (Some(from), None) => Self::new(from, value),
            _ => Err(MappingError::InvalidKey(key.to_owned())),
        }
    }

    #[inline]
    pub fn from(&self) -> char {
        self.from
    }

    #[inline]
    pub fn to(&self) -> &str {
        &self.to
    }
}

impl TryFrom<(String, String)> for MappingOverride {
    type Error = MappingError;

    fn try_from((key, value): (String, String)) -> Result<Self, Self::Error> {
        Self::parse(&key, &value)
    }
}

impl From<MappingOverride> for (String, String) {
    fn from(o: MappingOverride) -> Self {
        (o.from.to_string(), o.to)
    }
}

/// ASCII form → letter. Collisions resolve to the highest-priority letter:
/// overrides first, then the static table in declaration order.
#[derive(Debug, Clone, Default)]
pub struct ReverseMapping {
    map: HashMap<Box<str>, char>,
    // multi-character forms only, longest first
    contractions: Vec<(Box<str>, char)>,
}

impl ReverseMapping {
    fn build<'a>(pairs: impl Iterator<Item = (char, &'a str)>) -> Self {
        let mut map: HashMap<Box<str>, char> = HashMap::new();
        let mut contractions: Vec<(Box<str>, char)> = Vec::new();
        for (from, to) in pairs {
            if map.contains_key(to) {
                continue;
            }
            map.insert(to.into(), from);
            if to.len() > 1 {
                contractions.push((to.into(), from));
            }
        }
        // stable: equal lengths keep priority order
        contractions.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
        Self { map, contractions }
    }

    #[inline]
    pub fn get(&self, ascii: &str) -> Option<char> {
        self.map.get(ascii).copied()
    }

    /// Multi-character ASCII sequences and the single letter they stand for,
    /// longest sequence first.
    #[inline]
    pub fn contractions(&self) -> &[(Box<str>, char)] {
        &self.contractions
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.map.len()
    }
}

/// Ordered letter ↔ ASCII table for one language session.
#[derive(Debug, Clone)]
pub struct CharMapping {
    lang: Lang,
    pairs: Vec<(char, Box<str>)>,
    // pairs[static_len..] are overrides
    static_len: usize,
    forward: HashMap<char, usize>,
    reverse: ReverseMapping,
}

impl CharMapping {
    pub fn new(lang: Lang) -> Self {
        Self::with_overrides(lang, &[])
    }

    /// Static table for `lang` with `overrides` appended. An override for a
    /// letter the static table already maps replaces that row.
    pub fn with_overrides(lang: Lang, overrides: &[MappingOverride]) -> Self {
        let mut pairs: Vec<(char, Box<str>)> = lang
            .entry()
            .mapping
            .iter()
            .filter(|m| overrides.iter().all(|o| o.from != m.from))
            .map(|m| (m.from, Box::from(m.to)))
            .collect();
        let static_len = pairs.len();

        for o in overrides {
            // a later override for the same letter wins
            if let Some(existing) = pairs[static_len..].iter_mut().find(|(c, _)| *c == o.from) {
                existing.1 = o.to.as_str().into();
            } else {
                pairs.push((o.from, o.to.as_str().into()));
            }
        }

        let forward = pairs
            .iter()
            .enumerate()
            .map(|(i, (c, _))| (*c, i))
            .collect();
        let (statics, custom) = pairs.split_at(static_len);
        let reverse = ReverseMapping::build(
            custom
                .iter()
                .chain(statics.iter())
                .map(|(c, to)| (*c, &**to)),
        );

        Self {
            lang,
            pairs,
            static_len,
            forward,
            reverse,
        }
    }

    #[inline]
    pub fn lang(&self) -> Lang {
        self.lang
    }

    /// ASCII form of `c`, if the table maps it.
    #[inline(always)]
    pub fn forward(&self, c: char) -> Option<&str> {
        self.forward.get(&c).map(|&i| &*self.pairs[i].1)
    }

    #[inline]
    pub fn reverse(&self) -> &ReverseMapping {
        &self.reverse
    }

    #[inline]
    pub fn pairs(&self) -> impl Iterator<Item = (char, &str)> {
        self.pairs.iter().map(|(c, to)| (*c, &**to))
    }

    #[inline]
    pub fn override_count(&self) -> usize {
        self.pairs.len() - self.static_len
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    #[inline]
    pub fn contains(&self, c: char) -> bool {
        self.forward.contains_key(&c)
    }
}
