//! Case classification of source words.
//!
//! Case is binary per character, which is not enough to decide how a multi-letter
//! replacement such as `Я -> ya` should be cased. The classification here looks at the
//! whole word (a maximal run of letters) and, for lone capital letters, at the
//! neighbouring words.

/// Case pattern of a run of letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseClass {
    /// Every cased letter is uppercase: `ЯНДЕКС`.
    AllUpper,
    /// First letter uppercase, the rest lowercase: `Яндекс`.
    Capitalized,
    /// No uppercase letter at all. Caseless scripts land here too.
    Lower,
    /// Anything else: `ПОШёл`, `ÜBERslugify`, `McDonald`.
    Mixed,
}

impl CaseClass {
    pub fn of(word: &[char]) -> Self {
        let Some((first, rest)) = word.split_first() else {
            return Self::Lower;
        };
        if !word.iter().any(|c| c.is_uppercase()) {
            return Self::Lower;
        }
        if !word.iter().any(|c| c.is_lowercase()) {
            return Self::AllUpper;
        }
        if first.is_uppercase() && !rest.iter().any(|c| c.is_uppercase()) {
            Self::Capitalized
        } else {
            Self::Mixed
        }
    }
}

/// How the replacement of a single source character is cased.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseMode {
    /// Emit the replacement as the table stores it.
    AsStored,
    /// Emit the replacement fully uppercase.
    Upper,
    /// Uppercase the first character of the replacement, lowercase the rest.
    Title,
}

impl CaseMode {
    pub fn apply(self, replacement: &str, out: &mut String) {
        match self {
            Self::AsStored => out.push_str(replacement),
            Self::Upper => out.extend(replacement.chars().flat_map(char::to_uppercase)),
            Self::Title => {
                let mut chars = replacement.chars();
                if let Some(first) = chars.next() {
                    out.extend(first.to_uppercase());
                    out.extend(chars.flat_map(char::to_lowercase));
                }
            }
        }
    }
}

/// Simple lowercase fold of one character. Characters whose lowercase form expands to
/// several characters are kept as-is so that folded text stays index-aligned.
pub(crate) fn fold_char(ch: char) -> char {
    let mut lower = ch.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(folded), None) => folded,
        _ => ch,
    }
}

#[derive(Debug, Clone, Copy)]
struct Span {
    start: usize,
    end: usize,
}

impl Span {
    fn letters(self, text: &[char]) -> &[char] {
        &text[self.start..self.end]
    }
}

fn letter_runs(text: &[char]) -> Vec<Span> {
    let mut runs = Vec::new();
    let mut start = None;
    for (i, ch) in text.iter().enumerate() {
        match (ch.is_alphabetic(), start) {
            (true, None) => start = Some(i),
            (false, Some(s)) => {
                runs.push(Span { start: s, end: i });
                start = None;
            }
            _ => {}
        }
    }
    if let Some(s) = start {
        runs.push(Span { start: s, end: text.len() });
    }
    runs
}

/// Computes one [`CaseMode`] per character of `text`.
///
/// Lone capital letters are ambiguous. They are resolved as follows:
/// - a letter glued to another word without whitespace (`Я.Б.Ч`) is title-cased;
/// - otherwise the whitespace-separated run of lone capitals containing it is upper-cased
///   when the word right before or right after the run starts (or ends) with two
///   capitals, and title-cased when it does not.
pub fn case_modes(text: &[char]) -> Vec<CaseMode> {
    let mut modes = vec![CaseMode::AsStored; text.len()];
    let words = Words { text, spans: letter_runs(text) };

    let mut idx = 0;
    while idx < words.spans.len() {
        let span = words.spans[idx];
        let letters = span.letters(text);
        match CaseClass::of(letters) {
            CaseClass::Lower => {}
            CaseClass::AllUpper if letters.len() == 1 => {
                if words.is_glued(idx) {
                    modes[span.start] = CaseMode::Title;
                } else {
                    let last = words.initials_run_end(idx);
                    let mode = if words.run_touches_shouting(idx, last) {
                        CaseMode::Upper
                    } else {
                        CaseMode::Title
                    };
                    for initial in &words.spans[idx..=last] {
                        modes[initial.start] = mode;
                    }
                    idx = last + 1;
                    continue;
                }
            }
            CaseClass::AllUpper => modes[span.start..span.end].fill(CaseMode::Upper),
            CaseClass::Capitalized => modes[span.start] = CaseMode::Title,
            CaseClass::Mixed => mark_mixed(letters, &mut modes[span.start..span.end]),
        }
        idx += 1;
    }
    modes
}

// Each maximal uppercase run of a mixed word is upper-cased locally, one-letter runs
// included.
fn mark_mixed(letters: &[char], modes: &mut [CaseMode]) {
    let mut i = 0;
    while i < letters.len() {
        if !letters[i].is_uppercase() {
            i += 1;
            continue;
        }
        let start = i;
        while i < letters.len() && letters[i].is_uppercase() {
            i += 1;
        }
        modes[start..i].fill(CaseMode::Upper);
    }
}

struct Words<'a> {
    text: &'a [char],
    spans: Vec<Span>,
}

impl Words<'_> {
    /// Characters between word `i` and word `i + 1`. Never empty.
    fn gap(&self, i: usize) -> Option<&[char]> {
        let next = self.spans.get(i + 1)?;
        Some(&self.text[self.spans[i].end..next.start])
    }

    fn whitespace_gap(&self, i: usize) -> bool {
        self.gap(i).is_some_and(|gap| gap.iter().all(|c| c.is_whitespace()))
    }

    fn glued_gap(&self, i: usize) -> bool {
        self.gap(i).is_some_and(|gap| !gap.iter().any(|c| c.is_whitespace()))
    }

    fn is_glued(&self, idx: usize) -> bool {
        (idx > 0 && self.glued_gap(idx - 1)) || self.glued_gap(idx)
    }

    fn is_initial(&self, idx: usize) -> bool {
        let letters = self.spans[idx].letters(self.text);
        letters.len() == 1 && letters[0].is_uppercase() && !self.is_glued(idx)
    }

    fn initials_run_end(&self, idx: usize) -> usize {
        let mut last = idx;
        while self.whitespace_gap(last) && self.is_initial(last + 1) {
            last += 1;
        }
        last
    }

    fn run_touches_shouting(&self, first: usize, last: usize) -> bool {
        let before = first > 0
            && self.whitespace_gap(first - 1)
            && ends_with_capitals(self.spans[first - 1].letters(self.text));
        let after = self.whitespace_gap(last)
            && starts_with_capitals(self.spans[last + 1].letters(self.text));
        before || after
    }
}

fn starts_with_capitals(letters: &[char]) -> bool {
    letters.len() >= 2 && letters[..2].iter().all(|c| c.is_uppercase())
}

fn ends_with_capitals(letters: &[char]) -> bool {
    letters.len() >= 2 && letters[letters.len() - 2..].iter().all(|c| c.is_uppercase())
}
