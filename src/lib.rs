//! Slug generation from arbitrary Unicode text.
//!
//! The pipeline: literal pretranslation, case-aware transliteration, sanitization into
//! words, length-bounded word selection, and joining.
//!
//! ```
//! use slugify_rs::{Config, Slugify, Table, slugify};
//!
//! assert_eq!(slugify("This % is a test ---"), "This-is-a-test");
//!
//! let config = Config::default().with_table(Table::Russian).with_max_length(13);
//! let engine = Slugify::new(config).unwrap();
//! assert_eq!(engine.slugify("Яндекс ВВЕРХ вниз"), "Yandeks-VVERH");
//! ```

use std::collections::HashSet;
use std::num::NonZeroUsize;

use tracing::{debug, instrument, trace};

mod case;
mod config;
mod error;
mod format;
mod pretranslate;
mod sanitize;
mod translit_table;
mod transliterate;
mod truncate;

pub use case::CaseClass;
pub use config::Config;
pub use error::{Error, Result};
pub use format::join_words;
pub use pretranslate::{PretranslateMap, pretranslate};
pub use sanitize::{fold_abbreviations, tokenize};
pub use translit_table::Table;
pub use transliterate::transliterate;
pub use truncate::truncate_words;

/// A configured slug engine. Immutable once built, so it can be shared across threads
/// and called any number of times.
#[derive(Debug, Clone)]
pub struct Slugify {
    config: Config,
    max_length: Option<NonZeroUsize>,
    stop_words: HashSet<String>,
}

impl Slugify {
    /// Validates `config` and builds an engine from it.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_valid(config))
    }

    fn from_valid(config: Config) -> Self {
        let max_length = config.max_length.and_then(NonZeroUsize::new);
        let stop_words = config.stop_words.iter().map(|w| w.to_lowercase()).collect();
        debug!(
            table = %config.table,
            separator = %config.separator,
            max_length = ?max_length,
            pretranslate = config.pretranslate.len(),
            "slug engine configured"
        );
        Self {
            config,
            max_length,
            stop_words,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Turns `text` into a slug. Never fails; the result may be empty.
    #[instrument(level = "trace", skip_all, fields(len = text.len()))]
    pub fn slugify(&self, text: &str) -> String {
        let config = &self.config;

        let text = if config.to_lower {
            config.pretranslate.apply(&text.to_lowercase())
        } else {
            config.pretranslate.apply(text)
        };
        let text = if config.fold_abbreviations {
            fold_abbreviations(&text)
        } else {
            text
        };
        let text = transliterate(&text, config.table);
        trace!(%text, "transliterated");

        let mut words = tokenize(
            &text,
            &config.separator,
            &config.safe_chars,
            config.table.keeps_unicode(),
        );
        if !self.stop_words.is_empty() {
            words.retain(|w| !self.stop_words.contains(&w.to_lowercase()));
        }
        trace!(?words, "tokenized");

        let words = truncate_words(words, &config.separator, self.max_length);
        join_words(&words, &config.separator, config.capitalize)
    }
}

impl Default for Slugify {
    fn default() -> Self {
        Self::from_valid(Config::default())
    }
}

fn slugify_with(table: Table, text: &str) -> String {
    Slugify::from_valid(Config::default().with_table(table)).slugify(text)
}

/// One-off slug with the default configuration (generic table, `-` separator).
pub fn slugify(text: &str) -> String {
    slugify_with(Table::Generic, text)
}

/// One-off slug with the short Russian scheme.
pub fn slugify_ru(text: &str) -> String {
    slugify_with(Table::Russian, text)
}

/// One-off slug with the German umlaut scheme.
pub fn slugify_de(text: &str) -> String {
    slugify_with(Table::German, text)
}

/// One-off slug that keeps Unicode letters instead of transliterating them.
pub fn slugify_unicode(text: &str) -> String {
    slugify_with(Table::Unicode, text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple() {
        assert_eq!(slugify("déjà vu"), "deja-vu");
    }

    #[test]
    fn engine_is_reusable() {
        let engine = Slugify::new(Config::default().with_separator("_")).unwrap();
        assert_eq!(engine.slugify("a b"), "a_b");
        assert_eq!(engine.slugify("c d"), "c_d");
    }

    #[test]
    fn stop_words_are_dropped() {
        let engine = Slugify::new(Config::default().with_stop_words(["a", "The"])).unwrap();
        assert_eq!(engine.slugify("The quick, a fox"), "quick-fox");
    }

    #[test]
    fn to_lower_runs_first() {
        let engine = Slugify::new(Config::default().with_to_lower(true)).unwrap();
        assert_eq!(engine.slugify("ЩУКА Big"), "shchuka-big");
    }

    #[test]
    fn zero_max_length_is_unbounded() {
        let engine = Slugify::new(Config::default().with_max_length(0)).unwrap();
        assert_eq!(engine.slugify("one two three"), "one-two-three");
    }

    #[test]
    fn invalid_config_is_rejected() {
        assert!(Slugify::new(Config::default().with_separator("")).is_err());
    }
}
