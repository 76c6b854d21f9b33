use crate::parser::cell::parse_int;

/// Result-count limit from a raw query value.
///
/// Missing, non-numeric and non-positive values fall back to `default`.
pub fn coerce_limit(raw: Option<&str>, default: usize) -> usize {
    raw.and_then(parse_int)
        .filter(|&n| n > 0)
        .and_then(|n| usize::try_from(n).ok())
        .unwrap_or(default)
        .max(1)
}
