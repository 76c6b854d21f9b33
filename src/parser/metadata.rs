use regex::Regex;

use crate::domain::TournamentMetadata;

use super::cell::{cell_text, parse_int, Grid, Row};
use super::patterns;

/// Collects tournament-level fields from labeled rows.
///
/// Only the first cell of each row is considered a label. When a label shows
/// up more than once the last row wins.
pub fn extract_metadata(grid: &Grid) -> TournamentMetadata {
    let base = TournamentMetadata {
        tournament_name: tournament_name(grid),
        source: find_source_url(grid),
        ..Default::default()
    };

    grid.rows()
        .iter()
        .filter(|row| !row.is_empty())
        .fold(base, apply_label_row)
}

fn tournament_name(grid: &Grid) -> Option<String> {
    grid.row(1)
        .map(|row| cell_text(row, 0))
        .filter(|name| !name.is_empty())
}

fn apply_label_row(mut metadata: TournamentMetadata, row: &Row) -> TournamentMetadata {
    let label = cell_text(row, 0);
    let matches = |pattern: &Regex| pattern.is_match(&label);
    let value = || label_value(&label);

    // "Deputy Chief Arbiter" also reads as a chief label; it only fills the deputy field
    let is_deputy = matches(&patterns::DEPUTY_CHIEF_ARBITER);
    let is_chief = matches(&patterns::CHIEF_ARBITER) && !is_deputy;

    if matches(&patterns::ORGANIZER) {
        metadata.organizer = Some(value());
    }
    if matches(&patterns::FEDERATION) {
        metadata.federation = Some(value());
    }
    if matches(&patterns::TOURNAMENT_DIRECTOR) {
        metadata.tournament_director = Some(value());
    }
    if is_chief {
        metadata.chief_arbiter = Some(value());
    }
    if is_deputy {
        metadata.deputy_chief_arbiter = Some(value());
    }
    if matches(&patterns::ARBITER) && !is_chief && !is_deputy {
        metadata.arbiter = Some(value());
    }
    if matches(&patterns::TIME_CONTROL) {
        let (time_control, rate_of_play) = split_time_control(&value());
        metadata.time_control = Some(time_control);
        metadata.rate_of_play = rate_of_play;
    }
    if matches(&patterns::LOCATION) {
        metadata.location = Some(value());
    }
    if matches(&patterns::ROUNDS) {
        metadata.rounds = parse_int(&cell_text(row, 1));
    }
    if matches(&patterns::TOURNAMENT_TYPE) {
        metadata.tournament_type = Some(value());
    }
    if matches(&patterns::RATING_CALCULATION) {
        metadata.rating_calculation = Some(value());
    }
    if matches(&patterns::DATE) {
        metadata.date = Some(value());
    }
    if matches(&patterns::RATING_AGE) {
        if let Some((elo, age)) = split_rating_age(&value()) {
            metadata.average_elo = elo;
            metadata.average_age = age;
        }
    }

    metadata
}

/// Text after the last colon, or the whole label when there is none
fn label_value(label: &str) -> String {
    label.rsplit(':').next().unwrap_or(label).trim().to_string()
}

fn split_time_control(value: &str) -> (String, Option<String>) {
    match patterns::TIME_CONTROL_VALUE.captures(value) {
        Some(captures) => (
            captures[1].trim().to_string(),
            Some(captures[2].trim().to_string()),
        ),
        None => (value.to_string(), None),
    }
}

fn split_rating_age(value: &str) -> Option<(Option<i64>, Option<i64>)> {
    let parts: Vec<&str> = value.split('/').collect();
    match parts.as_slice() {
        [elo, age] => Some((parse_int(elo), parse_int(age))),
        _ => None,
    }
}

/// Last URL in the sheet, scanning rows from the bottom up
fn find_source_url(grid: &Grid) -> Option<String> {
    grid.rows().iter().rev().find_map(|row| {
        let joined = row.iter().map(|cell| cell.text()).collect::<Vec<_>>().join(" ");
        patterns::SOURCE_URL
            .find(&joined)
            .map(|m| m.as_str().to_string())
    })
}
