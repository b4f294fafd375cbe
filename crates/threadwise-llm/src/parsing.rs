/// Characters that may follow the leading digits of a list marker ("1.", "2)", "3 -", "4:")
const MARKER_PUNCTUATION: [char; 4] = ['.', ')', '-', ':'];

/// Split model output into reply options, stripping leading list numbering.
///
/// Lines break on `\n`, `\r\n`, or a lone `\r`, and blank lines are dropped.
/// A line whose first character is a decimal digit loses its marker prefix
/// (digits and `. ) - :`) plus any whitespace after it; a marker of bare
/// digits may also carry its separator after a space (`3 - Third`) when
/// whitespace follows that separator, so `3 -5%` keeps its sign. Lines that
/// do not start with a digit are kept as trimmed, so bullet dashes survive.
pub fn parse_reply_list(text: &str) -> Vec<String> {
    text.split(['\n', '\r'])
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| {
            let cleaned = strip_numbering(line);
            if cleaned.is_empty() {
                None
            } else {
                Some(cleaned.to_string())
            }
        })
        .collect()
}

fn strip_numbering(line: &str) -> &str {
    let starts_with_digit = line.chars().next().is_some_and(|c| c.is_ascii_digit());
    if !starts_with_digit {
        return line;
    }

    let rest = line.trim_start_matches(is_marker_char);
    let marker = &line[..line.len() - rest.len()];
    let rest = rest.trim_start();

    // "3 - Third": bare digits, then the separator after a space
    if marker.chars().all(|c| c.is_ascii_digit()) {
        let after_separator = rest.trim_start_matches(|c: char| MARKER_PUNCTUATION.contains(&c));
        let separated = after_separator.len() < rest.len()
            && after_separator.chars().next().map_or(true, char::is_whitespace);
        if separated {
            return after_separator.trim_start();
        }
    }
    rest
}

fn is_marker_char(c: char) -> bool {
    c.is_ascii_digit() || MARKER_PUNCTUATION.contains(&c)
}
