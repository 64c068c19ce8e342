/// Returns `true` if every character of `query` occurs in `candidate` in the
/// same order, ignoring case. Characters do not need to be adjacent.
///
/// An empty query matches everything. Line breaks in `candidate` are ordinary
/// characters here; they only get flattened for display.
pub fn matches(candidate: &str, query: &str) -> bool {
    let mut pending = query.chars().map(fold).peekable();

    if pending.peek().is_none() {
        return true;
    }

    for ch in candidate.chars().map(fold) {
        if pending.next_if_eq(&ch).is_some() && pending.peek().is_none() {
            return true;
        }
    }

    false
}

/// One-to-one case fold through upper then lower case, so 'ς', 'σ' and 'Σ'
/// all meet at 'σ'. A step that would expand into several chars (e.g. 'ß' or
/// 'İ') is skipped.
fn fold(c: char) -> char {
    let upper = single(c.to_uppercase()).unwrap_or(c);
    single(upper.to_lowercase()).unwrap_or(upper)
}

fn single(mut chars: impl Iterator<Item = char>) -> Option<char> {
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}
