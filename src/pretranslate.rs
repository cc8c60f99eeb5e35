//! Literal, case-insensitive substring replacement applied before transliteration.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::case::fold_char;
use crate::error::{Error, Result};
use crate::format::capitalize_first;

/// Replacement map for literal fragments such as emoji or symbols.
///
/// Keys are matched case-insensitively, longest key first, in a single left-to-right
/// pass: replacement text is never scanned again.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<String, String>",
    into = "BTreeMap<String, String>"
)]
pub struct PretranslateMap {
    source: BTreeMap<String, String>,
    folded: HashMap<String, String>,
    // longest folded key, in chars
    longest: usize,
}

impl PretranslateMap {
    /// Builds a map from `(key, replacement)` pairs.
    ///
    /// Fails with [`Error::InvalidConfiguration`] on an empty key, or when two keys are
    /// equal once case is ignored.
    pub fn new<I, K, V>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut map = Self::default();
        for (key, value) in pairs {
            let (key, value) = (key.into(), value.into());
            if key.is_empty() {
                return Err(Error::InvalidConfiguration(
                    "pretranslate keys must not be empty".to_owned(),
                ));
            }
            let folded: String = key.chars().map(fold_char).collect();
            if map.folded.contains_key(&folded) {
                return Err(Error::InvalidConfiguration(format!(
                    "pretranslate key {key:?} collides with another key when case is ignored"
                )));
            }
            map.longest = map.longest.max(folded.chars().count());
            map.folded.insert(folded, value.clone());
            map.source.insert(key, value);
        }
        Ok(map)
    }

    pub fn len(&self) -> usize {
        self.source.len()
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    /// Replaces every match in `text`. See [`pretranslate`].
    pub fn apply(&self, text: &str) -> String {
        if self.is_empty() {
            return text.to_owned();
        }

        let chars: Vec<char> = text.chars().collect();
        let folded: Vec<char> = chars.iter().copied().map(fold_char).collect();
        let mut out = String::with_capacity(text.len());
        let mut key = String::with_capacity(self.longest * 4);

        let mut i = 0;
        while i < chars.len() {
            let longest = self.longest.min(chars.len() - i);
            let hit = (1..=longest).rev().find_map(|len| {
                key.clear();
                key.extend(&folded[i..i + len]);
                self.folded.get(key.as_str()).map(|value| (len, value))
            });
            match hit {
                Some((len, value)) => {
                    push_recased(&chars[i..i + len], value, &mut out);
                    i += len;
                }
                None => {
                    out.push(chars[i]);
                    i += 1;
                }
            }
        }
        out
    }
}

// The matched span decides the casing: shouted spans shout, capitalized spans
// capitalize, anything else keeps the replacement as written.
fn push_recased(span: &[char], value: &str, out: &mut String) {
    let has_upper = span.iter().any(|c| c.is_uppercase());
    let has_lower = span.iter().any(|c| c.is_lowercase());
    if has_upper && !has_lower {
        out.push_str(&value.to_uppercase());
    } else if span.first().is_some_and(|c| c.is_uppercase()) {
        // has_lower here, and the remaining capitals decide between capitalized and mixed
        if span[1..].iter().any(|c| c.is_uppercase()) {
            out.push_str(value);
        } else {
            out.push_str(&capitalize_first(value));
        }
    } else {
        out.push_str(value);
    }
}

impl TryFrom<BTreeMap<String, String>> for PretranslateMap {
    type Error = Error;
    fn try_from(pairs: BTreeMap<String, String>) -> Result<Self> {
        Self::new(pairs)
    }
}

impl From<PretranslateMap> for BTreeMap<String, String> {
    fn from(map: PretranslateMap) -> Self {
        map.source
    }
}

/// Applies `map` to `text`: every non-overlapping match is replaced exactly once and
/// scanning resumes right after the matched source span.
pub fn pretranslate(text: &str, map: &PretranslateMap) -> String {
    map.apply(text)
}
