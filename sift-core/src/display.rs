pub const ELLIPSIS: &str = "...";

/// Flattens `text` onto a single line and fits it into `max_width` chars.
///
/// Line breaks become spaces, runs of spaces collapse into one, and anything
/// longer than `max_width` is cut to `max_width - 3` chars followed by `...`.
/// When `max_width` is 3 or less the ellipsis itself is clipped, so a width of
/// 0 gives an empty string.
pub fn format_for_display(text: &str, max_width: usize) -> String {
    let mut flat = String::with_capacity(text.len());
    let mut last_was_space = false;

    for ch in text.chars() {
        let ch = if is_line_break(ch) { ' ' } else { ch };
        if ch == ' ' && last_was_space {
            continue;
        }
        last_was_space = ch == ' ';
        flat.push(ch);
    }

    if flat.chars().count() <= max_width {
        return flat;
    }

    let keep = max_width.saturating_sub(ELLIPSIS.len());
    let mut out: String = flat.chars().take(keep).collect();
    out.extend(ELLIPSIS.chars().take(max_width - keep));
    out
}

fn is_line_break(c: char) -> bool {
    matches!(c, '\n' | '\r')
}
