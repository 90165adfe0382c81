//! Text form of a match list inside a CSV cell.
//!
//! Lists are written as `['dominant', 'assertive']`. Parsing is lenient about
//! quoting and whitespace so files edited by other tools still load, and
//! returns `None` for anything that is not a bracketed list.

/// Render words as a bracketed, quoted, comma-separated list.
pub fn format_word_list<S: AsRef<str>>(words: &[S]) -> String {
    let items: Vec<String> = words
        .iter()
        .map(|word| format!("'{}'", word.as_ref()))
        .collect();
    format!("[{}]", items.join(", "))
}

/// Parse a list written by [`format_word_list`].
///
/// Quote characters are removed wherever they appear, items are trimmed and
/// empty items dropped.
pub fn parse_word_list(cell: &str) -> Option<Vec<String>> {
    let inner = cell.trim().strip_prefix('[')?.strip_suffix(']')?;

    Some(
        inner
            .split(',')
            .map(|item| item.replace(['\'', '"'], "").trim().to_string())
            .filter(|item| !item.is_empty())
            .collect(),
    )
}
