//! Named transliteration tables.
//!
//! Every table except [`Table::Unicode`] folds through the generic `deunicode` data.
//! Locale tables are small phf overlays consulted first; they store lowercase keys and
//! lowercase replacements only, the casing is decided by the transliterator.

mod german;
mod greek;
mod russian;
mod russian_passport;

use std::fmt;

use deunicode::deunicode_char;
use serde::{Deserialize, Serialize};

use crate::case::fold_char;
use crate::error::{Error, Result};

/// Transliteration scheme selected for an engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Table {
    /// Generic Unicode folding (`ю -> iu`, `北 -> Bei`).
    #[default]
    Generic,
    /// Short Russian web scheme (`ж -> j`, `ю -> u`, `я -> ya`).
    Russian,
    /// Russian passport / ICAO scheme (`ж -> zh`, `ю -> iu`, `я -> ia`).
    RussianPassport,
    /// German umlauts (`ü -> ue`, `ß -> ss`).
    German,
    /// Greek, letter by letter.
    Greek,
    /// No transliteration; Unicode letters and digits survive sanitization.
    Unicode,
}

impl Table {
    pub const ALL: [Table; 6] = [
        Table::Generic,
        Table::Russian,
        Table::RussianPassport,
        Table::German,
        Table::Greek,
        Table::Unicode,
    ];

    /// Canonical name, accepted back by [`Table::from_name`].
    pub const fn name(self) -> &'static str {
        match self {
            Self::Generic => "generic",
            Self::Russian => "ru",
            Self::RussianPassport => "ru-icao",
            Self::German => "de",
            Self::Greek => "el",
            Self::Unicode => "unicode",
        }
    }

    /// Looks a table up by name or alias, ignoring ASCII case.
    pub fn from_name(name: &str) -> Result<Self> {
        let table = match name.trim().to_ascii_lowercase().as_str() {
            "generic" | "unidecode" | "default" => Self::Generic,
            "ru" | "russian" | "cyrillic" => Self::Russian,
            "ru-icao" | "ru-passport" | "icao" => Self::RussianPassport,
            "de" | "german" => Self::German,
            "el" | "greek" => Self::Greek,
            "unicode" | "none" => Self::Unicode,
            _ => return Err(Error::UnknownTable(name.to_owned())),
        };
        Ok(table)
    }

    /// Whether sanitization should keep non-ASCII letters and digits.
    pub const fn keeps_unicode(self) -> bool {
        matches!(self, Self::Unicode)
    }

    fn overlay(self) -> Option<&'static phf::Map<char, &'static str>> {
        match self {
            Self::Russian => Some(&russian::RUSSIAN),
            Self::RussianPassport => Some(&russian_passport::RUSSIAN_PASSPORT),
            Self::German => Some(&german::GERMAN),
            Self::Greek => Some(&greek::GREEK),
            Self::Generic | Self::Unicode => None,
        }
    }

    /// Replacement for a single character, or `None` when the character passes through.
    ///
    /// Overlay hits are lowercase regardless of the case of `ch`; generic hits carry the
    /// case of the source character (`Ж -> Zh`).
    pub fn lookup(self, ch: char) -> Option<&'static str> {
        if let Some(found) = self.overlay().and_then(|map| map.get(&fold_char(ch)).copied()) {
            return Some(found);
        }
        match self {
            Self::Unicode => None,
            _ => deunicode_char(ch),
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Table {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s)
    }
}

impl TryFrom<String> for Table {
    type Error = Error;
    fn try_from(name: String) -> Result<Self> {
        Self::from_name(&name)
    }
}

impl From<Table> for &'static str {
    fn from(table: Table) -> Self {
        table.name()
    }
}
