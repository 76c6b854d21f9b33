use std::collections::HashMap;

use log::debug;

use crate::config::settings::RankingSettings;
use crate::domain::RankingEntry;

use super::normalization::normalize_name;
use super::types::{
    PerformanceEntry, PlayerIdentityGroup, StoredPlayerRow, TournamentId, TournamentSummary,
};

/// Ranks players across tournaments by the average of their best
/// performance values.
pub struct PerformanceAggregator<'a> {
    settings: &'a RankingSettings,
}

#[derive(Default)]
struct GroupIndex {
    groups: Vec<PlayerIdentityGroup>,
    by_key: HashMap<String, usize>,
}

impl<'a> PerformanceAggregator<'a> {
    pub fn new(settings: &'a RankingSettings) -> Self {
        Self { settings }
    }

    pub fn rank(
        &self,
        rows: &[StoredPlayerRow],
        tournaments: &[TournamentSummary],
        limit: usize,
    ) -> Vec<RankingEntry> {
        let lookup: HashMap<TournamentId, &TournamentSummary> =
            tournaments.iter().map(|t| (t.id, t)).collect();

        let groups = self.group_rows(rows, &lookup);
        debug!("Grouped {} rows into {} players", rows.len(), groups.len());

        let mut entries: Vec<RankingEntry> =
            groups.into_iter().map(|g| self.to_ranking_entry(g)).collect();
        sort_by_performance(&mut entries);
        entries.truncate(limit.max(1));
        entries
    }

    pub fn group_rows(
        &self,
        rows: &[StoredPlayerRow],
        tournaments: &HashMap<TournamentId, &TournamentSummary>,
    ) -> Vec<PlayerIdentityGroup> {
        rows.iter()
            .filter_map(|row| {
                let key = normalize_name(row.name.as_deref().unwrap_or(""));
                (!key.is_empty()).then_some((key, row))
            })
            .fold(GroupIndex::default(), |index, (key, row)| {
                let entry = self.to_entry(row, tournaments);
                index.absorb(key, row.name.as_deref(), entry)
            })
            .groups
    }

    fn to_entry(
        &self,
        row: &StoredPlayerRow,
        tournaments: &HashMap<TournamentId, &TournamentSummary>,
    ) -> PerformanceEntry {
        let tournament = tournaments.get(&row.tournament_id);
        PerformanceEntry {
            tournament_id: row.tournament_id,
            tournament_name: tournament.and_then(|t| t.tournament_name.clone()),
            date: tournament.and_then(|t| t.date.clone()),
            tb1: row.tie_breaks.value_of(&self.settings.performance_key),
            rating: row.rating,
            federation: row.federation.clone(),
            created_at: row.created_at,
        }
    }

    fn to_ranking_entry(&self, group: PlayerIdentityGroup) -> RankingEntry {
        let mut scored: Vec<&PerformanceEntry> =
            group.entries.iter().filter(|e| e.tb1.is_some()).collect();
        scored.sort_by(|a, b| tb1_of(b).total_cmp(&tb1_of(a)));
        scored.truncate(self.settings.best_n);

        let average_performance = average(scored.iter().map(|e| tb1_of(e)));

        RankingEntry {
            name: group.name,
            date_of_birth: None,
            federation: group.federation,
            rating: group.rating,
            average_performance,
            tournaments_used: scored.iter().map(|e| e.usage()).collect(),
            tournaments_played: group.entries.iter().map(PerformanceEntry::usage).collect(),
        }
    }
}

impl GroupIndex {
    fn absorb(mut self, key: String, raw_name: Option<&str>, entry: PerformanceEntry) -> Self {
        match self.by_key.get(&key) {
            Some(&i) => update_group(&mut self.groups[i], raw_name, entry),
            None => {
                self.by_key.insert(key.clone(), self.groups.len());
                self.groups.push(new_group(key, raw_name, entry));
            }
        }
        self
    }
}

fn new_group(key: String, raw_name: Option<&str>, entry: PerformanceEntry) -> PlayerIdentityGroup {
    PlayerIdentityGroup {
        name: raw_name.filter(|n| !n.is_empty()).unwrap_or(&key).to_string(),
        key,
        federation: entry.federation.clone(),
        rating: entry.rating,
        latest_at: entry.created_at,
        entries: vec![entry],
    }
}

/// Latest known values win; a row only loses when it is strictly older than
/// what the group has already seen.
fn update_group(group: &mut PlayerIdentityGroup, raw_name: Option<&str>, entry: PerformanceEntry) {
    let is_newer = match (group.latest_at, entry.created_at) {
        (Some(latest), Some(current)) => current >= latest,
        _ => true,
    };

    if is_newer {
        if let Some(name) = raw_name.filter(|n| !n.is_empty()) {
            group.name = name.to_string();
        }
        if entry.federation.is_some() {
            group.federation = entry.federation.clone();
        }
        if entry.rating.is_some() {
            group.rating = entry.rating;
        }
    }
    group.latest_at = group.latest_at.max(entry.created_at);
    group.entries.push(entry);
}

fn tb1_of(entry: &PerformanceEntry) -> f64 {
    entry.tb1.unwrap_or(f64::NEG_INFINITY)
}

fn average(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    (count > 0).then(|| sum / count as f64)
}

/// Descending by average performance, players without one last
fn sort_by_performance(entries: &mut [RankingEntry]) {
    entries.sort_by(|a, b| {
        let a = a.average_performance.unwrap_or(f64::NEG_INFINITY);
        let b = b.average_performance.unwrap_or(f64::NEG_INFINITY);
        b.total_cmp(&a)
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ranking::types::TieBreaks;
    use chrono::NaiveDate;
    use serde_json::json;

    fn at(day: u32) -> Option<chrono::NaiveDateTime> {
        NaiveDate::from_ymd_opt(2024, 3, day).and_then(|d| d.and_hms_opt(12, 0, 0))
    }

    fn row(tournament_id: i64, name: &str, tb1: Option<f64>, day: u32) -> StoredPlayerRow {
        StoredPlayerRow {
            tournament_id,
            name: Some(name.to_string()),
            federation: Some("POL".to_string()),
            rating: Some(1800),
            tie_breaks: TieBreaks::Decoded(json!({ "TB1": tb1, "TB2": 3.0 })),
            created_at: at(day),
        }
    }

    fn tournaments(count: i64) -> Vec<TournamentSummary> {
        (1..=count)
            .map(|id| TournamentSummary {
                id,
                tournament_name: Some(format!("Open {id}")),
                date: Some(format!("2024/03/{id:02}")),
            })
            .collect()
    }

    #[test]
    fn test_average_uses_best_six() {
        let settings = RankingSettings::default();
        let rows: Vec<StoredPlayerRow> = [10.0, 9.0, 8.0, 7.0, 6.0, 5.0, 4.0]
            .iter()
            .enumerate()
            .map(|(i, &v)| row(i as i64 + 1, "Kowalski, Jan", Some(v), i as u32 + 1))
            .collect();

        let ranking = PerformanceAggregator::new(&settings).rank(&rows, &tournaments(7), 50);

        assert_eq!(ranking.len(), 1);
        assert_eq!(ranking[0].average_performance, Some(7.5));
        assert_eq!(ranking[0].tournaments_used.len(), 6);
        assert!(ranking[0].tournaments_used.iter().all(|t| t.tb1 != Some(4.0)));
        assert_eq!(ranking[0].tournaments_played.len(), 7);
        assert_eq!(ranking[0].date_of_birth, None);
    }

    #[test]
    fn test_players_without_tb1_rank_last() {
        let settings = RankingSettings::default();
        let rows = vec![
            row(1, "Nobody Scored", None, 1),
            row(1, "Low Scorer", Some(1.0), 1),
            row(1, "High Scorer", Some(12.0), 1),
        ];

        let ranking = PerformanceAggregator::new(&settings).rank(&rows, &tournaments(1), 50);

        let names: Vec<&str> = ranking.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["High Scorer", "Low Scorer", "Nobody Scored"]);
        assert_eq!(ranking[2].average_performance, None);
        assert_eq!(ranking[2].tournaments_played.len(), 1);
        assert!(ranking[2].tournaments_used.is_empty());
    }

    #[test]
    fn test_names_are_merged_across_spellings() {
        let settings = RankingSettings::default();
        let rows = vec![
            row(1, "José Pérez", Some(8.0), 1),
            row(2, "Jose  Perez", Some(6.0), 2),
        ];

        let ranking = PerformanceAggregator::new(&settings).rank(&rows, &tournaments(2), 50);

        assert_eq!(ranking.len(), 1);
        assert_eq!(ranking[0].name, "Jose  Perez");
        assert_eq!(ranking[0].average_performance, Some(7.0));
        assert_eq!(ranking[0].tournaments_played[0].tournament_name.as_deref(), Some("Open 1"));
    }

    #[test]
    fn test_empty_keys_are_dropped() {
        let settings = RankingSettings::default();
        let mut nameless = row(1, "???", Some(9.0), 1);
        nameless.name = None;
        let rows = vec![row(1, "!!!", Some(9.0), 1), nameless];

        let ranking = PerformanceAggregator::new(&settings).rank(&rows, &tournaments(1), 50);

        assert!(ranking.is_empty());
    }

    #[test]
    fn test_older_rows_do_not_overwrite_latest_values() {
        let settings = RankingSettings::default();
        let mut newest = row(2, "Anna Nowak", Some(5.0), 20);
        newest.rating = Some(2000);
        newest.federation = Some("GER".to_string());
        let mut oldest = row(1, "ANNA NOWAK", Some(4.0), 5);
        oldest.rating = Some(1700);
        let mut undated = row(3, "anna nowak", Some(3.0), 1);
        undated.created_at = None;
        undated.rating = None;

        let rows = vec![newest, oldest, undated];
        let ranking = PerformanceAggregator::new(&settings).rank(&rows, &tournaments(3), 50);

        assert_eq!(ranking.len(), 1);
        // the undated row wins the name, but carries no rating to overwrite with
        assert_eq!(ranking[0].name, "anna nowak");
        assert_eq!(ranking[0].rating, Some(2000));
        assert_eq!(ranking[0].federation.as_deref(), Some("POL"));
    }

    #[test]
    fn test_non_numeric_tb1_is_ignored_but_played() {
        let settings = RankingSettings::default();
        let mut broken = row(2, "Lis Piotr", None, 2);
        broken.tie_breaks = TieBreaks::Encoded(r#"{"TB1":"abc"}"#.to_string());
        let rows = vec![row(1, "Lis Piotr", Some(6.0), 1), broken];

        let ranking = PerformanceAggregator::new(&settings).rank(&rows, &tournaments(2), 50);

        assert_eq!(ranking[0].average_performance, Some(6.0));
        assert_eq!(ranking[0].tournaments_played.len(), 2);
        assert_eq!(ranking[0].tournaments_played[1].tb1, None);
    }

    #[test]
    fn test_zero_tb1_counts_toward_average() {
        let settings = RankingSettings::default();
        let rows = vec![row(1, "Lis Piotr", Some(10.0), 1), row(2, "Lis Piotr", Some(0.0), 2)];

        let ranking = PerformanceAggregator::new(&settings).rank(&rows, &tournaments(2), 50);

        assert_eq!(ranking[0].average_performance, Some(5.0));
        assert_eq!(ranking[0].tournaments_used.len(), 2);
    }

    #[test]
    fn test_limit_truncates() {
        let settings = RankingSettings::default();
        let rows: Vec<StoredPlayerRow> = (0..10)
            .map(|i| row(1, &format!("Player {i}"), Some(i as f64), 1))
            .collect();

        let ranking = PerformanceAggregator::new(&settings).rank(&rows, &tournaments(1), 5);

        assert_eq!(ranking.len(), 5);
        assert_eq!(ranking[0].average_performance, Some(9.0));
    }
}
