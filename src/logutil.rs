//! Log helpers for server-supplied strings.
//!
//! Event messages, reload notices and error bodies come straight from the game
//! server and may span several lines. Logs get one short line per message.

/// Longest preview kept in a log line, in characters.
pub const MAX_PREVIEW: usize = 200;

/// Collapse a server string onto one line: whitespace runs (newlines included)
/// become a single space, other control characters are dropped, and the result
/// is cut at [`MAX_PREVIEW`] characters with a trailing `…`.
pub fn escape_log(s: &str) -> String {
    let words = s
        .split(char::is_whitespace)
        .filter(|w| !w.is_empty())
        .map(|w| w.chars().filter(|c| !c.is_control()).collect::<String>());
    let flat = words.collect::<Vec<_>>().join(" ");
    match flat.char_indices().nth(MAX_PREVIEW) {
        Some((cut, _)) => format!("{}…", &flat[..cut]),
        None => flat,
    }
}
