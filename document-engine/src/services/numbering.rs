//! Sequential human-readable document numbers.

use crate::models::DocumentType;

/// Minimum zero-padded width of the sequence part.
const MIN_PAD_WIDTH: usize = 4;

/// Derive the next number from every existing number for a
/// company + type.
///
/// The scan is global on purpose: numbers may be edited out of
/// chronological order, so the maximum must be tracked across the whole
/// set, not just the most recent row. Unparsable legacy numbers are
/// ignored.
pub fn next_number(existing: &[String], doc_type: DocumentType) -> String {
    let prefix = doc_type.number_prefix();

    let mut max_seen: Option<u64> = None;
    for number in existing {
        if let Some(sequence) = extract_sequence(number, prefix) {
            max_seen = Some(max_seen.map_or(sequence, |m| m.max(sequence)));
        }
    }

    let next = max_seen.map_or(1, |m| m.saturating_add(1));
    format!("{prefix}-{next:0width$}", width = MIN_PAD_WIDTH)
}

/// Extract the sequence integer from one number.
///
/// Two patterns, in priority order: the canonical `PREFIX-####` form
/// (case-insensitive prefix), then any trailing digit run.
fn extract_sequence(number: &str, prefix: &str) -> Option<u64> {
    let trimmed = number.trim();

    // get() instead of split_at(): the prefix width may fall inside a
    // multibyte character of a legacy number.
    if let (Some(head), Some(tail)) = (trimmed.get(..prefix.len()), trimmed.get(prefix.len()..)) {
        if !tail.is_empty() && head.eq_ignore_ascii_case(prefix) {
            let digits = tail.strip_prefix('-').unwrap_or(tail);
            if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
                if let Ok(sequence) = digits.parse() {
                    return Some(sequence);
                }
            }
        }
    }

    let run_len = trimmed
        .bytes()
        .rev()
        .take_while(|b| b.is_ascii_digit())
        .count();
    let digits = &trimmed[trimmed.len() - run_len..];
    if digits.is_empty() {
        None
    } else {
        digits.parse().ok()
    }
}
