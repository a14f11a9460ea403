//! Frequency-ranked dictionary: base form → accented spellings, most frequent
//! first.
//!
//! The persisted format is UTF-8 text with one `<word>\t<frequency>` entry per
//! line. Word lists harvested from corpora are noisy, so lines that fail to
//! parse are counted and skipped rather than aborting the load.

use crate::{lang::Lang, normalizer::Normalizer};
use hashbrown::HashMap;
use log::{debug, info, warn};
use smallvec::SmallVec;
use std::io::{self, BufRead};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryEntry {
    word: Box<str>,
    frequency: u64,
}

impl DictionaryEntry {
    /// `None` when the word is blank or the frequency is zero.
    pub fn new(word: &str, frequency: u64) -> Option<Self> {
        let word = word.trim();
        if word.is_empty() || frequency == 0 {
            return None;
        }
        Some(Self {
            word: word.into(),
            frequency,
        })
    }

    #[inline]
    pub fn word(&self) -> &str {
        &self.word
    }

    #[inline]
    pub fn frequency(&self) -> u64 {
        self.frequency
    }
}

/// Most base forms have one or two spellings.
pub type Candidates = SmallVec<[DictionaryEntry; 2]>;

/// Failure to obtain dictionary data for a language. Malformed lines are not
/// load errors; see [`LoadStats::malformed`].
#[derive(Debug, Error)]
pub enum DictionaryLoadError {
    #[error("no dictionary configured for language `{0}`")]
    UnknownLanguage(Lang),
    #[error("dictionary for `{lang}` not found at {}", path.display())]
    NotFound { lang: Lang, path: PathBuf },
    #[error("failed to read dictionary for `{lang}`: {source}")]
    Io {
        lang: Lang,
        #[source]
        source: io::Error,
    },
}

/// Why a dictionary line was skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LineError {
    #[error("not valid UTF-8")]
    Encoding,
    #[error("missing tab separator")]
    MissingTab,
    #[error("empty word")]
    EmptyWord,
    #[error("frequency is not a non-negative integer")]
    BadFrequency,
    #[error("frequency is zero")]
    ZeroFrequency,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadStats {
    /// Non-blank lines read.
    pub lines: usize,
    /// Entries inserted.
    pub entries: usize,
    /// Lines skipped as malformed.
    pub malformed: usize,
}

/// Parse one `<word>\t<frequency>` line (without its terminator).
pub fn parse_line(line: &str) -> Result<(&str, u64), LineError> {
    let tab = memchr::memchr(b'\t', line.as_bytes()).ok_or(LineError::MissingTab)?;
    let word = line[..tab].trim();
    if word.is_empty() {
        return Err(LineError::EmptyWord);
    }
    let frequency = line[tab + 1..]
        .trim()
        .parse::<u64>()
        .map_err(|_| LineError::BadFrequency)?;
    if frequency == 0 {
        return Err(LineError::ZeroFrequency);
    }
    Ok((word, frequency))
}

#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    index: HashMap<Box<str>, Candidates>,
    entries: usize,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(word, frequency)` records in one pass. Blank words and
    /// zero frequencies are dropped.
    pub fn build<I, W>(records: I, normalizer: &Normalizer) -> Self
    where
        I: IntoIterator<Item = (W, u64)>,
        W: AsRef<str>,
    {
        let mut dict = Self::new();
        for (word, frequency) in records {
            dict.insert(word.as_ref(), frequency, normalizer);
        }
        dict
    }

    /// Stream a dictionary file line by line.
    ///
    /// I/O failures are returned; malformed lines are skipped and counted in
    /// the returned [`LoadStats`].
    pub fn from_reader<R: BufRead>(
        mut reader: R,
        normalizer: &Normalizer,
    ) -> io::Result<(Self, LoadStats)> {
        let mut dict = Self::new();
        let mut stats = LoadStats::default();
        let mut buf = Vec::with_capacity(64);
        let mut line_no = 0usize;

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            line_no += 1;

            let mut bytes = buf.as_slice();
            if let Some(rest) = bytes.strip_suffix(b"\n") {
                bytes = rest;
            }
            if let Some(rest) = bytes.strip_suffix(b"\r") {
                bytes = rest;
            }
            if line_no == 1
                && let Some(rest) = bytes.strip_prefix("\u{FEFF}".as_bytes())
            {
                bytes = rest;
            }
            if bytes.iter().all(u8::is_ascii_whitespace) {
                continue;
            }
            stats.lines += 1;

            let parsed = std::str::from_utf8(bytes)
                .map_err(|_| LineError::Encoding)
                .and_then(parse_line);
            match parsed {
                Ok((word, frequency)) => {
                    if dict.insert(word, frequency, normalizer) {
                        stats.entries += 1;
                    } else {
                        stats.malformed += 1;
                    }
                }
                Err(e) => {
                    debug!("dictionary line {line_no} skipped: {e}");
                    stats.malformed += 1;
                }
            }
        }

        if stats.malformed > 0 {
            warn!(
                "{}: skipped {} malformed dictionary line(s) of {}",
                normalizer.lang(),
                stats.malformed,
                stats.lines
            );
        }
        info!(
            "{}: loaded {} entries under {} base forms",
            normalizer.lang(),
            stats.entries,
            dict.len()
        );
        Ok((dict, stats))
    }

    /// Insert one spelling under its base form, keeping the candidate list in
    /// descending frequency order. Equal frequencies keep insertion order.
    /// Returns `false` when the record is dropped.
    pub fn insert(&mut self, word: &str, frequency: u64, normalizer: &Normalizer) -> bool {
        let Some(entry) = DictionaryEntry::new(word, frequency) else {
            return false;
        };
        let base = normalizer.normalize(word.trim());
        if base.is_empty() {
            return false;
        }

        let list = self.index.entry_ref(&*base).or_default();
        let pos = list.partition_point(|e| e.frequency >= frequency);
        list.insert(pos, entry);
        self.entries += 1;
        true
    }

    /// Every spelling known for `base_form`, most frequent first.
    #[inline]
    pub fn lookup(&self, base_form: &str) -> Option<&[DictionaryEntry]> {
        self.index.get(base_form).map(|c| c.as_slice())
    }

    /// Highest-frequency spelling for `base_form`.
    #[inline]
    pub fn best(&self, base_form: &str) -> Option<&DictionaryEntry> {
        self.index.get(base_form).and_then(|c| c.first())
    }

    /// Candidate words for `base_form`, most frequent first.
    pub fn candidates<'a>(&'a self, base_form: &str) -> impl Iterator<Item = &'a str> + use<'a> {
        self.lookup(base_form)
            .unwrap_or(&[])
            .iter()
            .map(DictionaryEntry::word)
    }

    #[inline]
    pub fn contains(&self, base_form: &str) -> bool {
        self.index.contains_key(base_form)
    }

    /// Number of distinct base forms.
    #[inline]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Number of spellings across all base forms.
    #[inline]
    pub fn entry_count(&self) -> usize {
        self.entries
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::data::{CES, DEU, HUN};
    use std::io::Cursor;

    fn load(lang: Lang, text: &str) -> (Dictionary, LoadStats) {
        Dictionary::from_reader(Cursor::new(text), &Normalizer::for_lang(lang)).unwrap()
    }

    #[test]
    fn parse_line_cases() {
        assert_eq!(parse_line("kalács\t50"), Ok(("kalács", 50)));
        assert_eq!(parse_line("  kalács \t 50 "), Ok(("kalács", 50)));
        assert_eq!(parse_line("kalács 50"), Err(LineError::MissingTab));
        assert_eq!(parse_line("\t50"), Err(LineError::EmptyWord));
        assert_eq!(parse_line("kalács\tmany"), Err(LineError::BadFrequency));
        assert_eq!(parse_line("kalács\t-3"), Err(LineError::BadFrequency));
        assert_eq!(parse_line("kalács\t"), Err(LineError::BadFrequency));
        assert_eq!(
            parse_line("kalács\t99999999999999999999999"),
            Err(LineError::BadFrequency)
        );
        assert_eq!(parse_line("kalács\t0"), Err(LineError::ZeroFrequency));
    }

    #[test]
    fn candidates_sorted_by_frequency() {
        let (d, stats) = load(CES, "cesky\t5\nčeský\t100\nčesky\t20\n");
        assert_eq!(stats, LoadStats { lines: 3, entries: 3, malformed: 0 });
        assert_eq!(d.len(), 1);
        assert_eq!(d.entry_count(), 3);
        let words: Vec<&str> = d.candidates("cesky").collect();
        assert_eq!(words, ["český", "česky", "cesky"]);
        assert_eq!(d.best("cesky").map(DictionaryEntry::word), Some("český"));
    }

    #[test]
    fn ties_keep_input_order() {
        let n = Normalizer::for_lang(CES);
        let d = Dictionary::build([("réka", 7), ("reka", 9), ("řeka", 7), ("rěka", 7)], &n);
        let words: Vec<&str> = d.candidates("reka").collect();
        assert_eq!(words, ["reka", "réka", "řeka", "rěka"]);
    }

    #[test]
    fn malformed_lines_are_counted_not_fatal() {
        let text = "\u{FEFF}kalács\t50\r\nno tab here\n\t3\nalma\tx\nbarack\t0\n\n   \nkörte\t7";
        let (d, stats) = load(HUN, text);
        assert_eq!(stats.lines, 6);
        assert_eq!(stats.entries, 2);
        assert_eq!(stats.malformed, 4);
        assert_eq!(d.best("kalacs").map(DictionaryEntry::word), Some("kalács"));
        assert_eq!(d.best("korte").map(DictionaryEntry::word), Some("körte"));
        assert!(!d.contains("alma"));
    }

    #[test]
    fn invalid_utf8_line_is_skipped() {
        let mut bytes = b"ok\t1\n".to_vec();
        bytes.extend_from_slice(b"\xFF\xFE\t2\n");
        bytes.extend_from_slice("tükör\t3\n".as_bytes());
        let (d, stats) =
            Dictionary::from_reader(Cursor::new(bytes), &Normalizer::for_lang(HUN)).unwrap();
        assert_eq!(stats.malformed, 1);
        assert_eq!(d.len(), 2);
    }

    #[test]
    fn base_form_uses_language_table() {
        let (d, _) = load(DEU, "Straße\t10\n");
        assert!(d.contains("strasse"));
        assert_eq!(d.lookup("strasse").map(|c| c.len()), Some(1));
        assert!(d.lookup("strase").is_none());
    }

    #[test]
    fn no_empty_candidate_lists() {
        let n = Normalizer::for_lang(HUN);
        let mut d = Dictionary::new();
        assert!(!d.insert("", 5, &n));
        assert!(!d.insert("szó", 0, &n));
        assert!(!d.insert("\u{0301}", 4, &n)); // strips to nothing
        assert!(d.is_empty());
        assert!(d.lookup("").is_none());
    }
}
