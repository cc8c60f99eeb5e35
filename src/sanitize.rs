//! Sanitization: strips everything outside the slug alphabet and splits into words.

// Quotes disappear without breaking a word: `l'été` -> `lete`, `Komp'iuter` -> `Kompiuter`.
const QUOTES: [char; 3] = ['\'', '"', '\u{2019}'];

/// Splits transliterated text into words.
///
/// A character is kept when it is an ASCII letter or digit (any alphanumeric with
/// `keep_unicode`), or when it appears in `safe_chars`. Quotes are dropped in place.
/// Everything else, and every verbatim occurrence of `separator`, is a word boundary.
/// Runs of boundaries collapse and no word is empty.
pub fn tokenize(text: &str, separator: &str, safe_chars: &str, keep_unicode: bool) -> Vec<String> {
    let pieces: Vec<&str> = if separator.is_empty() {
        vec![text]
    } else {
        text.split(separator).collect()
    };

    let mut words = Vec::new();
    let mut current = String::new();
    for piece in pieces {
        for ch in piece.chars() {
            let alphanumeric = if keep_unicode {
                ch.is_alphanumeric()
            } else {
                ch.is_ascii_alphanumeric()
            };
            if alphanumeric || safe_chars.contains(ch) {
                current.push(ch);
            } else if !QUOTES.contains(&ch) && !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
        }
        if !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
    }
    words
}

/// Folds dotted abbreviations into one word: `U.S.A` -> `USA`.
///
/// A period is removed when it directly follows a single-letter word and directly
/// precedes a letter. Runs before transliteration, on source letters.
pub fn fold_abbreviations(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    for (i, &ch) in chars.iter().enumerate() {
        let foldable = ch == '.'
            && i > 0
            && chars[i - 1].is_alphabetic()
            && (i < 2 || !chars[i - 2].is_alphabetic())
            && chars.get(i + 1).is_some_and(|c| c.is_alphabetic());
        if !foldable {
            out.push(ch);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_and_collapses() {
        assert_eq!(tokenize("This % is a test ---", "-", "", false), ["This", "is", "a", "test"]);
        assert_eq!(tokenize("_this_is_a__test___", "-", "", false), ["this", "is", "a", "test"]);
        assert!(tokenize(" -- %% ", "-", "", false).is_empty());
    }

    #[test]
    fn quotes_do_not_split() {
        assert_eq!(tokenize("C'est l'ete.", "-", "", false), ["Cest", "lete"]);
    }

    #[test]
    fn safe_chars_stay_attached() {
        assert_eq!(tokenize("Draft 2.txt", "_", "-_.", false), ["Draft", "2.txt"]);
        assert_eq!(tokenize("a_b c", "_", "_", false), ["a", "b", "c"]);
    }

    #[test]
    fn unicode_letters_when_asked() {
        assert_eq!(
            tokenize("-=Слово по-русски=-", "-", "", true),
            ["Слово", "по", "русски"]
        );
        assert_eq!(tokenize("Слово", "-", "", false), Vec::<String>::new());
    }

    #[test]
    fn abbreviations() {
        assert_eq!(fold_abbreviations("U.S.A. rocks"), "USA. rocks");
        assert_eq!(fold_abbreviations("Я.Б.Ч"), "ЯБЧ");
        assert_eq!(fold_abbreviations("end. Next"), "end. Next");
        assert_eq!(fold_abbreviations("v1.2"), "v1.2");
    }
}
