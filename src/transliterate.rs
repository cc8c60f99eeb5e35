use unicode_normalization::UnicodeNormalization;

use crate::case::{CaseMode, case_modes};
use crate::translit_table::Table;

/// Transliterates `text` with `table`, casing each replacement after the word it sits in.
///
/// - ASCII passes through untouched (fast path for pure ASCII input).
/// - Characters the table does not know pass through unchanged; sanitization decides
///   later whether they survive.
/// - Input is NFC-composed first so decomposed accents look up like precomposed ones.
pub fn transliterate(text: &str, table: Table) -> String {
    if text.is_ascii() {
        return text.to_owned();
    }
    if table.keeps_unicode() {
        return text.nfc().collect();
    }

    let chars: Vec<char> = text.nfc().collect();
    let modes = case_modes(&chars);

    // Most replacements are one or two letters; CJK syllables run longer.
    let mut out = String::with_capacity(text.len() * 2);
    for (&ch, mode) in chars.iter().zip(modes) {
        if ch.is_ascii() {
            out.push(ch);
            continue;
        }
        match table.lookup(ch) {
            Some(replacement) => {
                // Overlays store lowercase only, a capital must never come out lowercase.
                let mode = match mode {
                    CaseMode::AsStored if ch.is_uppercase() => CaseMode::Title,
                    other => other,
                };
                mode.apply(replacement, &mut out);
            }
            None => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_is_identity() {
        let ascii = "The quick brown fox 123";
        assert_eq!(transliterate(ascii, Table::Generic), ascii);
        assert_eq!(transliterate("", Table::Russian), "");
    }

    #[test]
    fn all_upper_word_uppercases_caseless_replacements() {
        assert_eq!(transliterate("AB北Ж", Table::Generic), "ABBEI ZH");
    }

    #[test]
    fn generic_folding() {
        assert_eq!(transliterate("déjà", Table::Generic), "deja");
        assert_eq!(transliterate("Компьютер", Table::Generic), "Komp'iuter");
    }

    #[test]
    fn word_case_drives_replacement_case() {
        assert_eq!(transliterate("ЯНДЕКС", Table::Russian), "YANDEKS");
        assert_eq!(transliterate("Яндекс", Table::Russian), "Yandeks");
        assert_eq!(transliterate("ЩУКА щука", Table::Generic), "SHCHUKA shchuka");
    }

    #[test]
    fn decomposed_input_is_composed() {
        assert_eq!(transliterate("и\u{306}", Table::Russian), "i");
        assert_eq!(transliterate("e\u{301}te\u{301}", Table::Generic), "ete");
    }

    #[test]
    fn unknown_characters_pass_through() {
        assert_eq!(transliterate("Слово", Table::Unicode), "Слово");
    }
}
