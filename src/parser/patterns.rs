use std::sync::LazyLock;

use regex::Regex;

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| panic!("invalid built-in pattern {pattern}: {e}"))
}

// Metadata labels, tested against the first cell of a row
pub static ORGANIZER: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)organi[sz]er"));
pub static FEDERATION: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)federation"));
pub static TOURNAMENT_DIRECTOR: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)tournament\s+director"));
pub static CHIEF_ARBITER: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)chief\s+arbiter"));
pub static DEPUTY_CHIEF_ARBITER: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)deputy\s+chief\s+arbiter"));
pub static ARBITER: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)arbiter"));
pub static TIME_CONTROL: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)time\s+control"));
pub static LOCATION: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)location"));
// Must lead the cell, so "Final Ranking after 9 Rounds" is not a rounds label
pub static ROUNDS: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)^\s*(number\s+of\s+)?rounds?\b"));
pub static TOURNAMENT_TYPE: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)tournament\s+type"));
pub static RATING_CALCULATION: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)rating\s+calculation"));
// Whole word, so "Last update ..." rows are not dates
pub static DATE: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)\bdate\b"));
pub static RATING_AGE: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)(rating|elo)\s*-?\s*(ø|Ø|avg|average)|average\s+age"));

/// `<token starting with a digit> (<descriptor>)`
pub static TIME_CONTROL_VALUE: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^(\d[^()]*?)\s*\(([^()]+)\)\s*$"));
pub static SOURCE_URL: LazyLock<Regex> = LazyLock::new(|| compile(r"https?://\S+"));
pub static LEADING_FLOAT: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^[+-]?(\d+\.?\d*|\.\d+)([eE][+-]?\d+)?"));

// Player table headers, tested against whole header cells
pub static RANK_HEADER: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)^(rk\.?|rank|pos\.?|position)$"));
pub static NAME_HEADER: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)name"));
pub static FEDERATION_HEADER: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)^fed$"));
pub static RATING_HEADER: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)rtg|elo"));
pub static POINTS_HEADER: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)^(pts?\.?|points)$"));
pub static ROUND_HEADER: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)\d+\.?\s*(rd|round)"));
pub static TIE_BREAK_HEADER: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)^tb\d+$"));

/// Opponent digits, optional color letter, optional outcome token
pub static ROUND_CELL: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)(\d+)([wb])?([01=+½-])?"));
