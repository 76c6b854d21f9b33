use crate::domain::{Color, GameResult, RoundOutcome};

use super::patterns::ROUND_CELL;

/// Decodes one per-round cell such as `15w1`, `3b½` or `7-`.
///
/// Returns `None` only for empty text. Text without any digits is kept as an
/// unparsed outcome carrying the raw value.
pub fn decode_round(text: &str) -> Option<RoundOutcome> {
    let clean = text.trim();
    if clean.is_empty() {
        return None;
    }

    let Some(captures) = ROUND_CELL.captures(clean) else {
        return Some(RoundOutcome::unparsed(clean));
    };

    let opponent = captures.get(1).map(|m| m.as_str().to_string());
    let color = captures.get(2).and_then(|m| parse_color(m.as_str()));
    let token = captures.get(3).map(|m| m.as_str()).unwrap_or("");

    Some(RoundOutcome {
        opponent,
        color,
        result: classify_result(token, clean),
        raw: clean.to_string(),
    })
}

fn parse_color(letter: &str) -> Option<Color> {
    match letter {
        "w" | "W" => Some(Color::White),
        "b" | "B" => Some(Color::Black),
        _ => None,
    }
}

// Order matters: the absent/missed markers are only seen when the digit
// capture has already consumed their characters.
fn classify_result(token: &str, clean: &str) -> Option<GameResult> {
    if token.contains(['+', '1']) {
        Some(GameResult::Win)
    } else if token.contains(['-', '0']) {
        Some(GameResult::Loss)
    } else if token.contains(['=', '½']) {
        Some(GameResult::Draw)
    } else if clean == "0" {
        Some(GameResult::Absent)
    } else if clean == "-1" {
        Some(GameResult::Missed)
    } else {
        None
    }
}
