//! Where dictionary bytes come from.
//!
//! The engine never searches for files. A caller hands it a
//! [`DictionarySource`] that knows, per language, what to open.

use crate::{dictionary::DictionaryLoadError, lang::Lang};
use hashbrown::HashMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Cursor};
use std::path::{Path, PathBuf};

pub trait DictionarySource: Send + Sync {
    /// Open the `<word>\t<frequency>` stream for `lang`.
    fn open(&self, lang: Lang) -> Result<Box<dyn BufRead + '_>, DictionaryLoadError>;
}

/// Dictionary files on disk, one path per language.
#[derive(Debug, Clone, Default)]
pub struct DictionaryPaths {
    paths: HashMap<&'static str, PathBuf>,
}

impl DictionaryPaths {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, lang: Lang, path: impl Into<PathBuf>) -> Self {
        self.insert(lang, path);
        self
    }

    pub fn insert(&mut self, lang: Lang, path: impl Into<PathBuf>) {
        self.paths.insert(lang.code(), path.into());
    }

    pub fn path(&self, lang: Lang) -> Option<&Path> {
        self.paths.get(lang.code()).map(PathBuf::as_path)
    }
}

impl DictionarySource for DictionaryPaths {
    fn open(&self, lang: Lang) -> Result<Box<dyn BufRead + '_>, DictionaryLoadError> {
        let path = self
            .path(lang)
            .ok_or(DictionaryLoadError::UnknownLanguage(lang))?;
        match File::open(path) {
            Ok(file) => Ok(Box::new(BufReader::new(file))),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Err(DictionaryLoadError::NotFound {
                lang,
                path: path.to_path_buf(),
            }),
            Err(source) => Err(DictionaryLoadError::Io { lang, source }),
        }
    }
}

/// In-memory dictionary text keyed by language.
#[derive(Debug, Clone, Default)]
pub struct MemoryDictionaries {
    texts: HashMap<&'static str, String>,
}

impl MemoryDictionaries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, lang: Lang, text: impl Into<String>) -> Self {
        self.insert(lang, text);
        self
    }

    pub fn insert(&mut self, lang: Lang, text: impl Into<String>) {
        self.texts.insert(lang.code(), text.into());
    }
}

impl DictionarySource for MemoryDictionaries {
    fn open(&self, lang: Lang) -> Result<Box<dyn BufRead + '_>, DictionaryLoadError> {
        self.texts
            .get(lang.code())
            .map(|text| Box::new(Cursor::new(text.as_bytes())) as Box<dyn BufRead + '_>)
            .ok_or(DictionaryLoadError::UnknownLanguage(lang))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::data::{DEU, HUN};
    use std::io::{Read, Write};

    #[test]
    fn paths_open_existing_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "kalács\t50").unwrap();
        let src = DictionaryPaths::new().with(HUN, file.path());

        let mut line = String::new();
        src.open(HUN).unwrap().read_line(&mut line).unwrap();
        assert_eq!(line, "kalács\t50\n");
    }

    #[test]
    fn paths_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("hu.tsv");
        let src = DictionaryPaths::new().with(HUN, &missing);
        match src.open(HUN) {
            Err(DictionaryLoadError::NotFound { lang, path }) => {
                assert_eq!(lang, HUN);
                assert_eq!(path, missing);
            }
            Err(e) => panic!("unexpected error: {e}"),
            Ok(_) => panic!("opened a missing file"),
        }
    }

    #[test]
    fn unconfigured_language() {
        let src = DictionaryPaths::new().with(HUN, "/nonexistent/hu.tsv");
        assert!(matches!(
            src.open(DEU),
            Err(DictionaryLoadError::UnknownLanguage(l)) if l == DEU
        ));
        let mem = MemoryDictionaries::new().with(HUN, "");
        assert!(matches!(
            mem.open(DEU),
            Err(DictionaryLoadError::UnknownLanguage(_))
        ));
    }

    #[test]
    fn memory_source_reads_text() {
        let mem = MemoryDictionaries::new().with(DEU, "Straße\t10\n");
        let mut out = String::new();
        mem.open(DEU).unwrap().read_to_string(&mut out).unwrap();
        assert_eq!(out, "Straße\t10\n");
    }
}
