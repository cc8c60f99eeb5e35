/// Joins the surviving words; with `capitalize`, the first character is uppercased.
pub fn join_words<S: AsRef<str>>(words: &[S], separator: &str, capitalize: bool) -> String {
    let mut out = String::new();
    for (i, word) in words.iter().enumerate() {
        if i > 0 {
            out.push_str(separator);
        }
        out.push_str(word.as_ref());
    }
    if capitalize {
        capitalize_first(&out)
    } else {
        out
    }
}

/// Uppercases the first character and leaves the rest untouched. A character whose
/// uppercase form is longer than one character (`ß`) is kept as is, so the length in
/// characters never changes.
pub(crate) fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let mut upper = first.to_uppercase();
    let first = match (upper.next(), upper.next()) {
        (Some(single), None) => single,
        _ => first,
    };
    std::iter::once(first).chain(chars).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_with_separator() {
        assert_eq!(join_words(&["one", "two"], "...", false), "one...two");
        assert_eq!(join_words(&["solo"], "-", false), "solo");
        assert_eq!(join_words::<&str>(&[], "-", true), "");
    }

    #[test]
    fn capitalizes_only_first_character() {
        assert_eq!(join_words(&["this", "Is", "a"], "-", true), "This-Is-a");
        assert_eq!(join_words(&["2nd", "place"], "-", true), "2nd-place");
        assert_eq!(capitalize_first("éte"), "Éte");
    }

    #[test]
    fn capitalize_keeps_length() {
        assert_eq!(capitalize_first("ßab"), "ßab");
        assert_eq!(join_words(&["ßa", "b"], "-", true).chars().count(), 4);
    }
}
