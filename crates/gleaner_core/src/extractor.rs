//! Next-line field extraction.
//!
//! A key is found by substring containment, case-sensitive, so `score` also
//! matches a line reading `high scores`. The value is the line that follows
//! the first matching line.

use crate::FieldMap;

/// Extract the value for `key` from message text.
///
/// Splits the text on `'\n'`, finds the first line containing `key`, and
/// returns the following line trimmed. Returns `None` when no line contains
/// the key or when the matching line is the last one. Later occurrences of
/// the key are ignored.
///
/// # Examples
///
/// ```
/// use gleaner_core::extract_value;
///
/// let text = "foo\nbar\nKEY\nVALUE\nbaz";
/// assert_eq!(extract_value("KEY", text).as_deref(), Some("VALUE"));
/// assert_eq!(extract_value("KEY", "foo\nKEY"), None);
/// ```
pub fn extract_value(key: &str, content: &str) -> Option<String> {
    let mut lines = content.split('\n');
    lines.find(|line| line.contains(key))?;
    lines.next().map(|next| next.trim().to_string())
}

/// Collect a field for every key that occurs in the message text.
///
/// Keys are visited in request order. A key that appears anywhere in the
/// content gets an entry, even when no value follows it.
pub fn extract_fields<S: AsRef<str>>(keys: &[S], content: &str) -> FieldMap {
    let mut fields = FieldMap::default();
    for key in keys {
        let key = key.as_ref();
        if content.contains(key) {
            fields.insert(key, extract_value(key, content));
        }
    }
    fields
}
