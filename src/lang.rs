pub mod data;
pub mod mapping;

pub use data::{ALL_LANGS, LANG_TABLE, from_code};

use crate::lang::data::ENG;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Lang {
    pub code: &'static str,
    pub iso1: &'static str,
    pub name: &'static str,
}

impl Lang {
    #[inline(always)]
    pub const fn code(&self) -> &'static str {
        self.code
    }
    #[inline(always)]
    pub const fn iso1(&self) -> &'static str {
        self.iso1
    }
    #[inline(always)]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Static mapping data for this language.
    #[inline]
    pub fn entry(&self) -> LangEntry {
        LANG_TABLE
            .get(self.code)
            .copied()
            .unwrap_or(LangEntry { mapping: &[] })
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}

impl Default for Lang {
    fn default() -> Self {
        DEFAULT_LANG
    }
}

impl Serialize for Lang {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code)
    }
}

impl<'de> Deserialize<'de> for Lang {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        from_code(&code)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown language code `{code}`")))
    }
}

pub const DEFAULT_LANG: Lang = ENG;

/// One row of a language's mapping table: a letter that Unicode decomposition
/// cannot reduce to ASCII, and the ASCII spelling it is written as.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MappingPair {
    pub from: char,
    pub to: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct LangEntry {
    pub mapping: &'static [MappingPair],
}

impl LangEntry {
    #[inline]
    pub fn has_mapping(&self) -> bool {
        !self.mapping.is_empty()
    }

    /// True when at least one letter expands to more than one ASCII character
    /// (`ß` → `ss`), i.e. restored words may differ in length from their input.
    #[inline]
    pub fn has_expansions(&self) -> bool {
        self.mapping.iter().any(|m| m.to.len() > 1)
    }
}
