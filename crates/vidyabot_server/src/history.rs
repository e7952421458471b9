//! Translation of client history into upstream turns.

use serde_json::Value;
use vidyabot_core::{Turn, TurnRole};

/// Convert the client's message array into the turn sequence the upstream
/// API expects.
///
/// The array's first element is the synthetic greeting and its last element
/// is the in-flight user message (supplied separately to the invoker), so
/// only the exclusive interior interval is translated. Entries missing a
/// sender, missing text, or blank after trimming are dropped; `user` maps to
/// the `user` role and any other sender to `model`. Relative order is
/// preserved.
///
/// A non-array value yields an empty sequence. This is a public fail-open
/// contract: a malformed history degrades to a fresh conversation rather
/// than an error.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use vidyabot_server::translate_history;
///
/// let history = json!([
///     {"id": "init", "text": "Hello!", "sender": "bot"},
///     {"id": "1", "text": "Admissions", "sender": "user"}
/// ]);
/// assert!(translate_history(&history).is_empty());
/// ```
pub fn translate_history(history: &Value) -> Vec<Turn> {
    let Some(entries) = history.as_array() else {
        return Vec::new();
    };
    entries
        .get(1..entries.len().saturating_sub(1))
        .unwrap_or_default()
        .iter()
        .filter_map(turn_from_entry)
        .collect()
}

/// Leniently decode one history entry, dropping anything malformed.
fn turn_from_entry(entry: &Value) -> Option<Turn> {
    let sender = entry.get("sender")?.as_str()?;
    if sender.is_empty() {
        return None;
    }
    let text = entry.get("text")?.as_str()?;
    if text.trim().is_empty() {
        return None;
    }
    let role = if sender == "user" {
        TurnRole::User
    } else {
        TurnRole::Model
    };
    Some(Turn::new(role, text))
}
