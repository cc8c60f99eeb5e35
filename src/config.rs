use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::pretranslate::PretranslateMap;
use crate::translit_table::Table;

/// Formatting options and tables for a slug engine.
///
/// Every field has a default, so a JSON document only needs the fields it changes:
///
/// ```
/// # use slugify_rs::{Config, Table};
/// let config = Config::from_json_str(r#"{"table": "ru", "max_length": 20}"#).unwrap();
/// assert_eq!(config.table, Table::Russian);
/// assert_eq!(config.separator, "-");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Literal replacements applied before transliteration.
    pub pretranslate: PretranslateMap,
    pub table: Table,
    /// Joins words in the output. Must not be empty.
    pub separator: String,
    /// Characters kept verbatim besides letters and digits.
    pub safe_chars: String,
    /// Upper bound on the output length in characters. `None` and `Some(0)` mean
    /// unbounded.
    pub max_length: Option<usize>,
    /// Uppercase the first character of the result.
    pub capitalize: bool,
    /// Lowercase the input before anything else.
    pub to_lower: bool,
    /// Words dropped from the output, compared case-insensitively.
    pub stop_words: Vec<String>,
    /// Fold dotted abbreviations (`U.S.A`) into single words.
    pub fold_abbreviations: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pretranslate: PretranslateMap::default(),
            table: Table::Generic,
            separator: "-".to_owned(),
            safe_chars: String::new(),
            max_length: None,
            capitalize: false,
            to_lower: false,
            stop_words: Vec::new(),
            fold_abbreviations: false,
        }
    }
}

impl Config {
    /// Loads a configuration from JSON and validates it.
    ///
    /// `pretranslate` must be an object mapping strings to strings; anything else (an
    /// array, numbers as values, `null`) is an [`Error::InvalidConfiguration`].
    pub fn from_json_str(json: &str) -> Result<Self> {
        let mut value: serde_json::Value = serde_json::from_str(json)?;
        let pretranslate = value
            .as_object_mut()
            .and_then(|doc| doc.remove("pretranslate"))
            .map(|raw| pretranslate_from_json(&raw))
            .transpose()?;

        let mut config: Self = serde_json::from_value(value)?;
        if let Some(pretranslate) = pretranslate {
            config.pretranslate = pretranslate;
        }
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.separator.is_empty() {
            return Err(Error::InvalidConfiguration(
                "separator must not be empty".to_owned(),
            ));
        }
        Ok(())
    }

    pub fn with_pretranslate(mut self, pretranslate: PretranslateMap) -> Self {
        self.pretranslate = pretranslate;
        self
    }

    pub fn with_table(mut self, table: Table) -> Self {
        self.table = table;
        self
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn with_safe_chars(mut self, safe_chars: impl Into<String>) -> Self {
        self.safe_chars = safe_chars.into();
        self
    }

    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    pub fn with_capitalize(mut self, capitalize: bool) -> Self {
        self.capitalize = capitalize;
        self
    }

    pub fn with_to_lower(mut self, to_lower: bool) -> Self {
        self.to_lower = to_lower;
        self
    }

    pub fn with_stop_words<I, S>(mut self, stop_words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stop_words = stop_words.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_fold_abbreviations(mut self, fold_abbreviations: bool) -> Self {
        self.fold_abbreviations = fold_abbreviations;
        self
    }
}

fn pretranslate_from_json(raw: &serde_json::Value) -> Result<PretranslateMap> {
    let invalid = || {
        Error::InvalidConfiguration(format!(
            "pretranslate must map strings to strings, got {raw}"
        ))
    };
    let pairs = raw
        .as_object()
        .ok_or_else(invalid)?
        .iter()
        .map(|(key, value)| {
            value
                .as_str()
                .map(|value| (key.as_str(), value))
                .ok_or_else(invalid)
        })
        .collect::<Result<Vec<_>>>()?;
    PretranslateMap::new(pairs)
}
