//! Case alignment: carry the letter-case pattern of an input token over to a
//! restored spelling, which may be shorter than the input when an ASCII
//! digraph stood for a single letter (`oe` → `ø`, `ss` → `ß`).

use crate::lang::mapping::ReverseMapping;
use smallvec::SmallVec;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Case {
    Upper,
    Lower,
    Neither,
}

impl Case {
    #[inline(always)]
    fn new(ch: char) -> Case {
        if ch.is_lowercase() {
            Case::Lower
        } else if ch.is_uppercase() {
            Case::Upper
        } else {
            Case::Neither
        }
    }

    #[inline]
    fn push_into(self, ch: char, out: &mut String) {
        match self {
            Case::Upper => out.extend(ch.to_uppercase()),
            Case::Lower => out.extend(ch.to_lowercase()),
            Case::Neither => out.push(ch),
        }
    }
}

/// Whole-word case shape of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CasePattern {
    /// Has uppercase letters and no lowercase ones: `PRAHA`.
    Upper,
    /// No uppercase letters (includes tokens with no cased letters): `praha`.
    Lower,
    /// First character uppercase, no uppercase after it: `Praha`.
    Title,
    /// Anything else: `McDonald`, `pRAHA`.
    Mixed,
}

impl CasePattern {
    pub fn of(word: &str) -> CasePattern {
        let has_upper = word.chars().any(char::is_uppercase);
        let has_lower = word.chars().any(char::is_lowercase);

        if has_upper && !has_lower {
            return CasePattern::Upper;
        }
        if !has_upper {
            return CasePattern::Lower;
        }

        let mut chars = word.chars();
        match chars.next() {
            Some(first) if first.is_uppercase() && !chars.any(char::is_uppercase) => {
                CasePattern::Title
            }
            _ => CasePattern::Mixed,
        }
    }
}

#[inline]
pub fn upper_case(s: &str) -> String {
    s.chars().flat_map(char::to_uppercase).collect()
}

#[inline]
pub fn lower_case(s: &str) -> String {
    s.to_lowercase()
}

/// First character uppercased, the rest lowercased.
#[inline]
pub fn title_case(s: &str) -> String {
    let mut c = s.chars();
    match c.next() {
        None => String::new(),
        Some(f) => {
            let mut out = String::with_capacity(s.len());
            out.extend(f.to_uppercase());
            out.push_str(&c.as_str().to_lowercase());
            out
        }
    }
}

/// Re-apply `original`'s case pattern to `candidate`.
///
/// Whole-word patterns (all upper, all lower, title) are applied directly.
/// Mixed case is copied position by position. When the lengths differ and a
/// `reverse` mapping is given, multi-character ASCII sequences in `original`
/// that correspond to a single letter of `candidate` are first contracted
/// (longest sequence first) so the two line up; a contracted run takes the
/// case of its first character. Any remaining length difference is resolved
/// with the case of `original`'s last character.
pub fn apply_case(original: &str, candidate: &str, reverse: Option<&ReverseMapping>) -> String {
    match CasePattern::of(original) {
        CasePattern::Upper => upper_case(candidate),
        CasePattern::Lower => lower_case(candidate),
        CasePattern::Title => title_case(candidate),
        CasePattern::Mixed => {
            let cases: SmallVec<[Case; 24]> = original.chars().map(Case::new).collect();
            let candidate_len = candidate.chars().count();

            if cases.len() == candidate_len {
                return positional(&cases, candidate);
            }
            match reverse {
                Some(reverse) if !reverse.contractions().is_empty() => {
                    let contracted = contract(original, candidate, reverse);
                    positional(&contracted, candidate)
                }
                _ => positional(&cases, candidate),
            }
        }
    }
}

/// Copy `cases[i]` onto the i-th character of `candidate`. Characters past the
/// end of `cases` take its last entry.
fn positional(cases: &[Case], candidate: &str) -> String {
    let Some(&last) = cases.last() else {
        return candidate.to_owned();
    };
    let mut out = String::with_capacity(candidate.len() + 4);
    for (i, ch) in candidate.chars().enumerate() {
        cases.get(i).copied().unwrap_or(last).push_into(ch, &mut out);
    }
    out
}

/// Case sequence of `original` after folding each ASCII digraph that lines up
/// with its single-letter equivalent in `candidate` into one entry.
fn contract(original: &str, candidate: &str, reverse: &ReverseMapping) -> SmallVec<[Case; 24]> {
    let orig: SmallVec<[char; 24]> = original.chars().collect();
    let cand: SmallVec<[char; 24]> = candidate.chars().collect();
    let mut out: SmallVec<[Case; 24]> = SmallVec::with_capacity(cand.len());

    let mut i = 0;
    while i < orig.len() {
        let at = cand.get(out.len()).map(|c| fold(*c));
        let step = reverse
            .contractions()
            .iter()
            .find(|(ascii, letter)| {
                at == Some(fold(*letter))
                    && orig.len() - i >= ascii.len()
                    && orig[i..i + ascii.len()]
                        .iter()
                        .zip(ascii.bytes())
                        .all(|(o, a)| o.to_ascii_lowercase() == a as char)
            })
            .map_or(1, |(ascii, _)| ascii.len());

        out.push(Case::new(orig[i]));
        i += step;
    }
    out
}

#[inline(always)]
fn fold(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}
