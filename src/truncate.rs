use std::num::NonZeroUsize;

/// Selects the words that fit in `max_length` characters once joined with `separator`.
///
/// The first word anchors the result: if it alone is too long it is cut to
/// `max_length` characters and everything else is dropped. Otherwise every following
/// word is tried in order and kept when it still fits, so a short word may survive after
/// a longer one was skipped (`one two three four` at 12 gives `one-two-four`).
///
/// Lengths count characters, not bytes.
pub fn truncate_words(
    words: Vec<String>,
    separator: &str,
    max_length: Option<NonZeroUsize>,
) -> Vec<String> {
    let Some(max_length) = max_length.map(NonZeroUsize::get) else {
        return words;
    };
    let separator_len = separator.chars().count();

    let mut words = words.into_iter();
    let Some(first) = words.next() else {
        return Vec::new();
    };
    let mut total = first.chars().count();
    if total > max_length {
        return vec![first.chars().take(max_length).collect()];
    }

    let mut kept = vec![first];
    for word in words {
        let candidate = total + separator_len + word.chars().count();
        if candidate <= max_length {
            total = candidate;
            kept.push(word);
        }
    }
    kept
}
